//! Program, schedule, homepage and media partner mappers

use cms_core::entities::{Episode, MediaPartner, Program, ScheduleItem, Trailer};
use cms_core::error::DomainError;
use cms_core::value_objects::BroadcastTime;

use crate::models::{EpisodeModel, MediaPartnerModel, ProgramModel, ScheduleItemModel, TrailerModel};

impl From<ProgramModel> for Program {
    fn from(model: ProgramModel) -> Self {
        Program {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            description: model.description.unwrap_or_default(),
            presenter: model.presenter,
            broadcast_day: model.broadcast_day,
            broadcast_time: model.broadcast_time,
            image: model.image,
            category: model.category,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl TryFrom<ScheduleItemModel> for ScheduleItem {
    type Error = DomainError;

    fn try_from(model: ScheduleItemModel) -> Result<Self, Self::Error> {
        let day = model
            .day_of_week
            .parse()
            .map_err(|_| DomainError::InvalidWeekday(model.day_of_week.clone()))?;

        Ok(ScheduleItem {
            id: model.id,
            day,
            time: BroadcastTime::from_naive_time(model.broadcast_time),
            program_name: model.program_name,
        })
    }
}

impl From<TrailerModel> for Trailer {
    fn from(model: TrailerModel) -> Self {
        Trailer {
            id: model.id,
            title: model.title,
            image: model.image,
            time: model.time,
            day: model.day,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<EpisodeModel> for Episode {
    fn from(model: EpisodeModel) -> Self {
        Episode {
            id: model.id,
            title: model.title,
            image: model.image,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

impl From<MediaPartnerModel> for MediaPartner {
    fn from(model: MediaPartnerModel) -> Self {
        MediaPartner {
            id: model.id,
            name: model.name,
            url: model.url,
            image: model.image,
        }
    }
}
