//! Dashboard counters

use tracing::instrument;

use crate::dto::{DashboardCountsResponse, DashboardResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn counts(&self) -> ServiceResult<DashboardResponse> {
        let counts = self.ctx.dashboard_repo().counts().await?;
        Ok(DashboardResponse {
            counts: DashboardCountsResponse::from(counts),
        })
    }
}
