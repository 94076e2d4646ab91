//! Page singleton mappers

use cms_core::entities::{ContactPage, DashboardCounts, LiveStream, Masthead, SiteSettings, SocialMedia};

use crate::models::{ContactModel, DashboardModel, LiveStreamModel, MastheadModel, SocialMediaModel};

impl From<ContactModel> for ContactPage {
    fn from(model: ContactModel) -> Self {
        ContactPage {
            address: model.address.unwrap_or_default(),
            phones: model.phones.map(|j| j.0).unwrap_or_default(),
            faxes: model.faxes.map(|j| j.0).unwrap_or_default(),
            emails: model.emails.map(|j| j.0).unwrap_or_default(),
            maps: model.maps.unwrap_or_default(),
        }
    }
}

impl From<ContactModel> for SiteSettings {
    fn from(model: ContactModel) -> Self {
        SiteSettings {
            name: model.name,
            description: model.description.unwrap_or_default(),
        }
    }
}

impl From<SocialMediaModel> for SocialMedia {
    fn from(model: SocialMediaModel) -> Self {
        SocialMedia {
            facebook: model.facebook,
            instagram: model.instagram,
            twitter: model.twitter,
            linkedin: model.linkedin,
            youtube: model.youtube,
        }
    }
}

impl From<MastheadModel> for Masthead {
    fn from(model: MastheadModel) -> Self {
        Masthead {
            title: model.unvan,
            logo: model.logo,
            broadcast_medium: model.yayin_ortami,
            license_type: model.lisans_tipi,
            broadcast_type: model.yayin_turu,
            address: model.adres.unwrap_or_default(),
            phone_fax: model.telefon_faks,
            website: model.internet_adresi,
            email: model.email,
            kep_address: model.kep_adresi,
            tax_office_no: model.vergi_daire_no,
            mersis_no: model.mersis_no,
            responsible_managers: model.sorumlular.map(|j| j.0).unwrap_or_default(),
            viewer_representative_name: model.izleyici_temsilcisi_ad,
            viewer_representative_email: model.izleyici_temsilcisi_email,
            documents: model.dokumanlar.map(|j| j.0).unwrap_or_default(),
        }
    }
}

impl From<LiveStreamModel> for LiveStream {
    fn from(model: LiveStreamModel) -> Self {
        LiveStream {
            stream_url: model.stream_url,
            stream_title: model.stream_title,
            thumbnail_url: model.thumbnail_url,
            is_live: model.is_live,
        }
    }
}

impl From<DashboardModel> for DashboardCounts {
    fn from(model: DashboardModel) -> Self {
        DashboardCounts {
            all_programs: model.all_programs,
            active_programs: model.active_programs,
            trailers: model.trailers,
            episodes: model.episodes,
            users: model.users,
            partners: model.partners,
            is_live: model.is_live != 0,
        }
    }
}
