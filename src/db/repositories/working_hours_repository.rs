use sqlx::{PgExecutor, Postgres, Transaction};
use uuid::Uuid;

use crate::db::models::WorkingHoursRange;
use crate::db::DatabaseError;
use crate::scheduling::working_hours::BatchPlan;

pub struct WorkingHoursRepository;

impl WorkingHoursRepository {
    pub async fn list_for_salon(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
    ) -> Result<Vec<WorkingHoursRange>, DatabaseError> {
        let ranges = sqlx::query_as::<_, WorkingHoursRange>(
            r#"
            SELECT id, salon_id, weekday, start_time, end_time, created_at
            FROM working_hours
            WHERE salon_id = $1
            ORDER BY weekday, start_time
            "#,
        )
        .bind(salon_id)
        .fetch_all(executor)
        .await?;

        Ok(ranges)
    }

    pub async fn list_for_weekday(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
        weekday: i16,
    ) -> Result<Vec<WorkingHoursRange>, DatabaseError> {
        let ranges = sqlx::query_as::<_, WorkingHoursRange>(
            r#"
            SELECT id, salon_id, weekday, start_time, end_time, created_at
            FROM working_hours
            WHERE salon_id = $1 AND weekday = $2
            ORDER BY start_time
            "#,
        )
        .bind(salon_id)
        .bind(weekday)
        .fetch_all(executor)
        .await?;

        Ok(ranges)
    }

    /// Applies a validated batch plan. Runs inside the caller's
    /// transaction so the batch lands as a whole or not at all.
    pub async fn apply_batch(
        tx: &mut Transaction<'_, Postgres>,
        salon_id: Uuid,
        plan: &BatchPlan,
    ) -> Result<(), DatabaseError> {
        for id in &plan.deletes {
            sqlx::query("DELETE FROM working_hours WHERE id = $1 AND salon_id = $2")
                .bind(id)
                .bind(salon_id)
                .execute(&mut **tx)
                .await?;
        }

        for (id, spec) in &plan.updates {
            let result = sqlx::query(
                r#"
                UPDATE working_hours
                SET weekday = $1, start_time = $2, end_time = $3
                WHERE id = $4 AND salon_id = $5
                "#,
            )
            .bind(spec.weekday)
            .bind(spec.start_time)
            .bind(spec.end_time)
            .bind(id)
            .bind(salon_id)
            .execute(&mut **tx)
            .await?;

            // A stale row id means the submission no longer matches the
            // database; abort so the transaction rolls back whole.
            if result.rows_affected() == 0 {
                return Err(DatabaseError::NotFound);
            }
        }

        for spec in &plan.creates {
            sqlx::query(
                r#"
                INSERT INTO working_hours (id, salon_id, weekday, start_time, end_time)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(Uuid::now_v7())
            .bind(salon_id)
            .bind(spec.weekday)
            .bind(spec.start_time)
            .bind(spec.end_time)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
