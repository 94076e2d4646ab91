//! Program service
//!
//! Listing, batch update, add and delete of the channel's programs.

use cms_core::entities::Program;
use cms_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    ActionResponse, CreatedResponse, ProgramBatchResponse, ProgramEnvelope, ProgramPayload,
    ProgramResponse, ProgramsRequest, ProgramsResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Program service
pub struct ProgramService<'a> {
    ctx: &'a ServiceContext,
}

/// Copy the submitted fields over the stored program
fn apply(program: &mut Program, payload: ProgramPayload) {
    let ProgramPayload {
        title,
        subtitle,
        description,
        presenter,
        broadcast_day,
        broadcast_time,
        image,
        category,
        is_active,
        ..
    } = payload;

    if let Some(title) = title {
        program.title = title.trim().to_string();
    }
    for (field, value) in [
        (&mut program.subtitle, subtitle),
        (&mut program.description, description),
        (&mut program.presenter, presenter),
        (&mut program.broadcast_day, broadcast_day),
        (&mut program.broadcast_time, broadcast_time),
        (&mut program.image, image),
        (&mut program.category, category),
    ] {
        if let Some(value) = value {
            *field = value;
        }
    }
    if let Some(is_active) = is_active {
        program.is_active = is_active;
    }
    program.touch();
}

impl<'a> ProgramService<'a> {
    /// Create a new ProgramService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<ProgramsResponse> {
        let programs = self.ctx.program_repo().list().await?;
        Ok(ProgramsResponse {
            programs: programs.iter().map(ProgramResponse::from).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ProgramEnvelope> {
        let program = self
            .ctx
            .program_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProgramNotFound(id))?;

        Ok(ProgramEnvelope {
            program: ProgramResponse::from(program),
        })
    }

    /// Update every submitted program, counting successes and failures
    ///
    /// An item fails when it has no id, names a missing program or its
    /// write errors; the others are still written.
    #[instrument(skip(self, request))]
    pub async fn update(&self, request: ProgramsRequest) -> ServiceResult<ProgramBatchResponse> {
        let items = request.into_items();
        if items.is_empty() {
            return Err(ServiceError::validation("Güncellenecek program bulunamadı"));
        }

        let mut updated = 0usize;
        let mut failed = 0usize;

        for payload in items {
            match self.update_one(payload).await {
                Ok(()) => updated += 1,
                Err(e) => {
                    warn!(error = %e, "Program update failed");
                    failed += 1;
                }
            }
        }

        info!(updated, failed, "Program batch update finished");

        if updated == 0 {
            return Err(ServiceError::batch_failed("Hiçbir program güncellenemedi"));
        }

        let (description, partial_failure) = if failed == 0 {
            (format!("{updated} program başarıyla güncellendi"), false)
        } else {
            (
                format!("{updated} program güncellendi, {failed} program güncellenemedi"),
                true,
            )
        };

        Ok(ProgramBatchResponse {
            action: ActionResponse::ok(description),
            updated,
            failed,
            partial_failure,
        })
    }

    async fn update_one(&self, payload: ProgramPayload) -> ServiceResult<()> {
        let id = payload
            .id
            .filter(|id| *id > 0)
            .ok_or_else(|| ServiceError::validation("Program id is required"))?;

        let mut program = self
            .ctx
            .program_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProgramNotFound(id))?;

        apply(&mut program, payload);
        if program.title.is_empty() {
            return Err(ServiceError::validation("Program başlığı gereklidir"));
        }

        if self.ctx.program_repo().update(&program).await? {
            Ok(())
        } else {
            Err(DomainError::ProgramNotFound(id).into())
        }
    }

    /// Add a program; the first item of a batch body is used
    #[instrument(skip(self, request))]
    pub async fn add(&self, request: ProgramsRequest) -> ServiceResult<CreatedResponse> {
        let payload = request.into_first().unwrap_or_default();
        let title = payload.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(ServiceError::validation("Program başlığı gereklidir"));
        }

        let mut program = Program::new(title.to_string());
        apply(&mut program, payload);

        let id = self.ctx.program_repo().create(&program).await?;
        info!(program_id = id, "Program created");

        Ok(CreatedResponse::new("Program başarıyla eklendi", id))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<ActionResponse> {
        if !self.ctx.program_repo().delete(id).await? {
            return Err(DomainError::ProgramNotFound(id).into());
        }
        info!(program_id = id, "Program deleted");
        Ok(ActionResponse::ok("Program başarıyla silindi"))
    }
}
