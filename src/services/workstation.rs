use sqlx::PgPool;
use time::{Date, Duration};
use tracing::info;
use uuid::Uuid;

use crate::db::models::{Appointment, AppointmentStatus};
use crate::db::repositories::AppointmentRepository;
use crate::error::{AppError, AppResult};
use crate::scheduling::status::validate_transition;
use crate::services::access::require_salon_owner;

/// The owner's day view: every appointment of the salon on `day`, in
/// start order, whatever its status.
pub async fn daily_queue(
    pool: &PgPool,
    acting_user: Uuid,
    salon_id: Uuid,
    day: Date,
) -> AppResult<Vec<Appointment>> {
    require_salon_owner(pool, salon_id, acting_user).await?;

    let day_start = day.midnight().assume_utc();
    let day_end = day_start + Duration::days(1);

    Ok(AppointmentRepository::between(pool, salon_id, day_start, day_end).await?)
}

/// Marks an appointment completed or missed. Owner-only; the transition
/// machine rejects every other move.
pub async fn transition_status(
    pool: &PgPool,
    acting_user: Uuid,
    appointment_id: Uuid,
    new_status: AppointmentStatus,
) -> AppResult<Appointment> {
    let appointment = AppointmentRepository::get(pool, appointment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("appointment".into()))?;

    let salon_id = AppointmentRepository::salon_of(pool, appointment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("appointment".into()))?;
    require_salon_owner(pool, salon_id, acting_user).await?;

    validate_transition(appointment.status, new_status)?;

    let mut tx = pool.begin().await?;
    let updated = AppointmentRepository::update_status(&mut tx, appointment_id, new_status).await?;
    tx.commit().await?;

    info!(
        %appointment_id,
        from = ?appointment.status,
        to = ?new_status,
        "appointment status updated"
    );

    Ok(updated)
}
