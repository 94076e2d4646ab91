//! Homepage service: trailers (fragmanlar) and episodes (bölümler)

use chrono::Utc;
use cms_core::entities::{Episode, Trailer};
use cms_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    ActionResponse, EpisodePayload, EpisodeResponse, HomeResponse, HomeUpdateRequest,
    TrailerPayload, TrailerResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Home page service
pub struct HomeService<'a> {
    ctx: &'a ServiceContext,
}

impl From<TrailerPayload> for Trailer {
    fn from(payload: TrailerPayload) -> Self {
        Self {
            id: payload.id.unwrap_or_default(),
            title: payload.title,
            image: payload.image,
            time: payload.time,
            day: payload.day,
            is_active: payload.is_active.unwrap_or(true),
            created_at: Utc::now(),
        }
    }
}

impl From<EpisodePayload> for Episode {
    fn from(payload: EpisodePayload) -> Self {
        Self {
            id: payload.id.unwrap_or_default(),
            title: payload.title,
            image: payload.image,
            is_active: payload.is_active.unwrap_or(true),
            created_at: Utc::now(),
        }
    }
}

impl<'a> HomeService<'a> {
    /// Create a new HomeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active trailers and episodes, newest first
    #[instrument(skip(self))]
    pub async fn get(&self) -> ServiceResult<HomeResponse> {
        let trailers = self.ctx.home_repo().active_trailers().await?;
        let episodes = self.ctx.home_repo().active_episodes().await?;

        Ok(HomeResponse {
            fragmanlar: trailers.iter().map(TrailerResponse::from).collect(),
            bolumler: episodes.iter().map(EpisodeResponse::from).collect(),
        })
    }

    /// Upsert every submitted trailer and episode in one transaction
    #[instrument(skip_all, fields(trailers = request.fragmanlar.len(), episodes = request.bolumler.len()))]
    pub async fn update(&self, request: HomeUpdateRequest) -> ServiceResult<ActionResponse> {
        let trailers: Vec<Trailer> = request.fragmanlar.into_iter().map(Trailer::from).collect();
        let episodes: Vec<Episode> = request.bolumler.into_iter().map(Episode::from).collect();

        self.ctx.home_repo().save(&trailers, &episodes).await?;

        info!("Home page saved");
        Ok(ActionResponse::ok("Anasayfa verileri başarıyla güncellendi"))
    }

    #[instrument(skip(self))]
    pub async fn delete_trailer(&self, id: i64) -> ServiceResult<ActionResponse> {
        if !self.ctx.home_repo().delete_trailer(id).await? {
            return Err(DomainError::TrailerNotFound(id).into());
        }
        Ok(ActionResponse::ok("Fragman başarıyla silindi."))
    }

    #[instrument(skip(self))]
    pub async fn delete_episode(&self, id: i64) -> ServiceResult<ActionResponse> {
        if !self.ctx.home_repo().delete_episode(id).await? {
            return Err(DomainError::EpisodeNotFound(id).into());
        }
        Ok(ActionResponse::ok("Bölüm başarıyla silindi."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payloads_without_id_are_new_and_active() {
        let request: HomeUpdateRequest = serde_json::from_value(json!({
            "fragmanlar": [{"title": "Yeni Dizi", "image": "/uploads/a.png", "time": "21:00", "day": "Cuma"}],
            "bolumler": [{"id": 7, "title": "1. Bölüm", "is_active": false}]
        }))
        .unwrap();

        let trailer = Trailer::from(request.fragmanlar[0].clone());
        assert!(!trailer.is_persisted());
        assert!(trailer.is_active);
        assert_eq!(trailer.day, "Cuma");

        let episode = Episode::from(request.bolumler[0].clone());
        assert!(episode.is_persisted());
        assert!(!episode.is_active);
    }
}
