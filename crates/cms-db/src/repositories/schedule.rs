//! MySQL implementation of ScheduleRepository (`yayin_akisi`)

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use tracing::{debug, instrument, warn};

use cms_core::entities::ScheduleItem;
use cms_core::schedule::{plan_day, DayOutcome, ScheduleEntry};
use cms_core::traits::{RepoResult, ScheduleRepository};
use cms_core::value_objects::Weekday;

use crate::models::ScheduleItemModel;

use super::error::map_db_error;

/// MySQL implementation of ScheduleRepository
#[derive(Clone)]
pub struct MySqlScheduleRepository {
    pool: MySqlPool,
}

impl MySqlScheduleRepository {
    /// Create a new MySqlScheduleRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for MySqlScheduleRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ScheduleItem>> {
        let rows = sqlx::query_as::<_, ScheduleItemModel>(
            r"
            SELECT id, day_of_week, broadcast_time, program_name
            FROM yayin_akisi
            ORDER BY broadcast_time, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut items: Vec<ScheduleItem> = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match ScheduleItem::try_from(row) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!(id, error = %e, "Skipping schedule row with unknown day");
                        None
                    }
                }
            })
            .collect();

        // Stable sort keeps the time ordering within each day
        items.sort_by_key(|item| item.day);
        Ok(items)
    }

    #[instrument(skip(self, entries), fields(entries = entries.len()))]
    async fn reconcile_day(
        &self,
        day: Weekday,
        entries: &[ScheduleEntry],
    ) -> RepoResult<DayOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM yayin_akisi WHERE day_of_week = ? FOR UPDATE",
        )
        .bind(day.as_str())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let plan = plan_day(day, &existing, entries);

        for update in &plan.updates {
            sqlx::query(
                r"
                UPDATE yayin_akisi
                SET broadcast_time = ?, program_name = ?
                WHERE id = ? AND day_of_week = ?
                ",
            )
            .bind(update.time.to_naive_time())
            .bind(&update.program_name)
            .bind(update.id)
            .bind(day.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        for insert in &plan.inserts {
            sqlx::query(
                r"
                INSERT INTO yayin_akisi (day_of_week, broadcast_time, program_name)
                VALUES (?, ?, ?)
                ",
            )
            .bind(day.as_str())
            .bind(insert.time.to_naive_time())
            .bind(&insert.program_name)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        if !plan.deletes.is_empty() {
            let mut delete: QueryBuilder<MySql> =
                QueryBuilder::new("DELETE FROM yayin_akisi WHERE day_of_week = ");
            delete.push_bind(day.as_str());
            delete.push(" AND id IN (");
            let mut ids = delete.separated(", ");
            for id in &plan.deletes {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");

            delete
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        let outcome = plan.outcome();
        debug!(
            day = %day,
            inserted = outcome.inserted,
            updated = outcome.updated,
            deleted = outcome.deleted,
            skipped = outcome.skipped,
            "Schedule day reconciled"
        );
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM yayin_akisi WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
