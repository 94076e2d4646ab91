//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use cms_core::entities::{
    ContactPage, DashboardCounts, Episode, LiveStream, Masthead, MediaPartner, Permission,
    Program, ScheduleItem, SiteSettings, SocialMedia, Trailer, User, UserGroup,
};
use cms_core::Weekday;

use super::responses::{
    ContactResponse, DashboardCountsResponse, EpisodeResponse, GroupResponse, GroupSummary,
    LiveStreamResponse, MastheadResponse, MediaPartnerResponse, PermissionResponse,
    ProgramResponse, ScheduleSlotResponse, SocialMediaResponse, TrailerResponse, UserResponse,
    WeekSchedule,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            group_id: user.group_id,
            group_name: user.group_name.clone(),
            status: user.status.as_i32(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Permission> for PermissionResponse {
    fn from(permission: &Permission) -> Self {
        Self {
            id: permission.id,
            name: permission.name.clone(),
            value: permission.value.clone(),
            category: permission.category.clone(),
            description: permission.description.clone(),
        }
    }
}

impl From<&UserGroup> for GroupResponse {
    fn from(group: &UserGroup) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone(),
            members_count: group.members_count,
            permissions: group.permissions.iter().map(PermissionResponse::from).collect(),
        }
    }
}

impl From<&UserGroup> for GroupSummary {
    fn from(group: &UserGroup) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
        }
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

impl From<&Program> for ProgramResponse {
    fn from(program: &Program) -> Self {
        Self {
            id: program.id,
            title: program.title.clone(),
            subtitle: program.subtitle.clone(),
            description: program.description.clone(),
            presenter: program.presenter.clone(),
            broadcast_day: program.broadcast_day.clone(),
            broadcast_time: program.broadcast_time.clone(),
            image: program.image.clone(),
            category: program.category.clone(),
            is_active: program.is_active,
            created_at: program.created_at,
            updated_at: program.updated_at,
        }
    }
}

impl From<Program> for ProgramResponse {
    fn from(program: Program) -> Self {
        Self::from(&program)
    }
}

impl From<&ScheduleItem> for ScheduleSlotResponse {
    fn from(item: &ScheduleItem) -> Self {
        Self {
            id: item.id,
            time: item.time.to_string(),
            program: item.program_name.clone(),
        }
    }
}

/// Group slots by day; days without slots get the editor placeholder
impl From<&[ScheduleItem]> for WeekSchedule {
    fn from(items: &[ScheduleItem]) -> Self {
        let days = Weekday::ALL
            .into_iter()
            .map(|day| {
                let mut slots: Vec<&ScheduleItem> =
                    items.iter().filter(|item| item.day == day).collect();
                slots.sort_by_key(|item| (item.time, item.id));

                let slots = if slots.is_empty() {
                    vec![ScheduleSlotResponse::placeholder()]
                } else {
                    slots.into_iter().map(ScheduleSlotResponse::from).collect()
                };
                (day, slots)
            })
            .collect();
        Self(days)
    }
}

impl From<&Trailer> for TrailerResponse {
    fn from(trailer: &Trailer) -> Self {
        Self {
            id: trailer.id,
            title: trailer.title.clone(),
            image: trailer.image.clone(),
            time: trailer.time.clone(),
            day: trailer.day.clone(),
        }
    }
}

impl From<&Episode> for EpisodeResponse {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id,
            title: episode.title.clone(),
            image: episode.image.clone(),
        }
    }
}

impl From<&MediaPartner> for MediaPartnerResponse {
    fn from(partner: &MediaPartner) -> Self {
        Self {
            id: partner.id,
            name: partner.name.clone(),
            url: partner.url.clone(),
            image: partner.image.clone(),
        }
    }
}

// ============================================================================
// Page Mappers
// ============================================================================

impl From<&LiveStream> for LiveStreamResponse {
    fn from(stream: &LiveStream) -> Self {
        Self {
            stream_url: stream.stream_url.clone(),
            stream_title: stream.stream_title.clone(),
            thumbnail_url: stream.thumbnail_url.clone(),
            is_live: stream.is_live,
        }
    }
}

impl From<&Masthead> for MastheadResponse {
    fn from(m: &Masthead) -> Self {
        Self {
            unvan: m.title.clone(),
            logo: m.logo.clone(),
            yayin_ortami: m.broadcast_medium.clone(),
            lisans_tipi: m.license_type.clone(),
            yayin_turu: m.broadcast_type.clone(),
            adres: m.address.clone(),
            telefon_faks: m.phone_fax.clone(),
            internet_adresi: m.website.clone(),
            email: m.email.clone(),
            kep_adresi: m.kep_address.clone(),
            vergi_daire_no: m.tax_office_no.clone(),
            mersis_no: m.mersis_no.clone(),
            sorumlular: m.responsible_managers.clone(),
            izleyici_temsilcisi_ad: m.viewer_representative_name.clone(),
            izleyici_temsilcisi_email: m.viewer_representative_email.clone(),
            dokumanlar: m.documents.clone(),
        }
    }
}

impl From<(&ContactPage, &SiteSettings)> for ContactResponse {
    fn from((contact, settings): (&ContactPage, &SiteSettings)) -> Self {
        Self {
            name: settings.name.clone(),
            description: settings.description.clone(),
            address: contact.address.clone(),
            phone: contact.phones.clone(),
            fax: contact.faxes.clone(),
            email: contact.emails.clone(),
            maps: contact.maps.clone(),
        }
    }
}

impl From<&SocialMedia> for SocialMediaResponse {
    fn from(social: &SocialMedia) -> Self {
        Self {
            facebook: social.facebook.clone(),
            instagram: social.instagram.clone(),
            twitter: social.twitter.clone(),
            linkedin: social.linkedin.clone(),
            youtube: social.youtube.clone(),
        }
    }
}

impl From<DashboardCounts> for DashboardCountsResponse {
    fn from(counts: DashboardCounts) -> Self {
        Self {
            all_programs: counts.all_programs,
            active_programs: counts.active_programs,
            fragmanlar: counts.trailers,
            bolumler: counts.episodes,
            users: counts.users,
            partners: counts.partners,
            is_live: counts.is_live,
        }
    }
}
