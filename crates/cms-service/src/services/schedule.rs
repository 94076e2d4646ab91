//! Schedule (Yayın Akışı) service
//!
//! Days are reconciled one at a time, each in its own transaction inside the
//! repository. A failing day does not stop the others; the response reports
//! what was written and which days failed.

use std::collections::BTreeMap;

use cms_core::schedule::ScheduleEntry;
use cms_core::{DomainError, Weekday};
use tracing::{error, info, instrument};

use crate::dto::{
    ActionResponse, ScheduleResponse, ScheduleUpdateRequest, ScheduleUpdateResponse,
    WeekSchedule,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Schedule service
pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

/// Resolve day names up front so nothing is written for a bad request
fn parse_days(
    items: BTreeMap<String, Vec<ScheduleEntry>>,
) -> Result<BTreeMap<Weekday, Vec<ScheduleEntry>>, DomainError> {
    let mut days: BTreeMap<Weekday, Vec<ScheduleEntry>> = BTreeMap::new();
    for (name, entries) in items {
        let day = name
            .parse::<Weekday>()
            .map_err(|_| DomainError::InvalidWeekday(name.clone()))?;
        days.entry(day).or_default().extend(entries);
    }
    Ok(days)
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The week, Monday first
    #[instrument(skip(self))]
    pub async fn get(&self) -> ServiceResult<ScheduleResponse> {
        let items = self.ctx.schedule_repo().list().await?;
        Ok(ScheduleResponse {
            schedule_items: WeekSchedule::from(items.as_slice()),
        })
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        request: ScheduleUpdateRequest,
    ) -> ServiceResult<ScheduleUpdateResponse> {
        let days = parse_days(request.schedule_items)?;

        let mut report = ScheduleUpdateResponse {
            action: ActionResponse::ok("Yayın akışı başarıyla güncellendi"),
            processed_days: Vec::new(),
            failed_days: Vec::new(),
            inserted: 0,
            updated: 0,
            deleted: 0,
            skipped: 0,
            partial_failure: false,
        };

        for (day, entries) in &days {
            match self.ctx.schedule_repo().reconcile_day(*day, entries).await {
                Ok(outcome) => {
                    report.processed_days.push(*day);
                    report.inserted += outcome.inserted;
                    report.updated += outcome.updated;
                    report.deleted += outcome.deleted;
                    report.skipped += outcome.skipped;
                }
                Err(e) => {
                    error!(day = %day, error = %e, "Schedule day rolled back");
                    report.failed_days.push(*day);
                }
            }
        }

        info!(
            processed = report.processed_days.len(),
            failed = report.failed_days.len(),
            inserted = report.inserted,
            updated = report.updated,
            deleted = report.deleted,
            "Schedule update finished"
        );

        if report.failed_days.is_empty() {
            return Ok(report);
        }
        if report.processed_days.is_empty() {
            return Err(ServiceError::batch_failed("Yayın akışı güncellenemedi"));
        }

        let failed: Vec<&str> = report.failed_days.iter().map(Weekday::as_str).collect();
        report.action = ActionResponse::ok(format!(
            "Yayın akışı kısmen güncellendi, kaydedilemeyen günler: {}",
            failed.join(", ")
        ));
        report.partial_failure = true;
        Ok(report)
    }

    /// Delete a single slot
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<ActionResponse> {
        if !self.ctx.schedule_repo().delete(id).await? {
            return Err(DomainError::ScheduleItemNotFound(id).into());
        }
        info!(schedule_item_id = id, "Schedule slot deleted");
        Ok(ActionResponse::ok("Başarıyla silindi"))
    }
}
