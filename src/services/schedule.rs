use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::db::models::{WorkingHoursRange, WorkingHoursSubmission};
use crate::db::repositories::{SalonRepository, WorkingHoursRepository};
use crate::error::AppResult;
use crate::scheduling::working_hours::plan_batch;
use crate::services::access::require_salon_owner;

/// Applies a full working-hours submission for the owner's salon and
/// returns the resulting schedule.
///
/// The batch is validated as a whole against the persisted schedule and
/// against itself, then written transactionally under the salon's row
/// lock: either every row lands or none do.
pub async fn update_working_hours(
    pool: &PgPool,
    acting_user: Uuid,
    salon_id: Uuid,
    submitted: &[WorkingHoursSubmission],
) -> AppResult<Vec<WorkingHoursRange>> {
    require_salon_owner(pool, salon_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    SalonRepository::lock(&mut tx, salon_id).await?;

    let existing = WorkingHoursRepository::list_for_salon(&mut *tx, salon_id).await?;
    let plan = plan_batch(&existing, submitted)?;

    WorkingHoursRepository::apply_batch(&mut tx, salon_id, &plan).await?;
    tx.commit().await?;

    info!(
        %salon_id,
        creates = plan.creates.len(),
        updates = plan.updates.len(),
        deletes = plan.deletes.len(),
        "working hours updated"
    );

    Ok(WorkingHoursRepository::list_for_salon(pool, salon_id).await?)
}

/// The salon's full weekly schedule, ordered by weekday then start.
pub async fn working_hours(pool: &PgPool, salon_id: Uuid) -> AppResult<Vec<WorkingHoursRange>> {
    Ok(WorkingHoursRepository::list_for_salon(pool, salon_id).await?)
}
