use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::db::models::{Appointment, AppointmentStatus, NewReview, Review, UpdateReview};
use crate::db::repositories::{AppointmentRepository, ReviewRepository};
use crate::error::{AppError, AppResult};

/// Resolves an appointment and checks the acting user is its client.
async fn require_own_appointment(
    pool: &PgPool,
    appointment_id: Uuid,
    acting_user: Uuid,
) -> AppResult<Appointment> {
    let appointment = AppointmentRepository::get(pool, appointment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("appointment".into()))?;

    if appointment.client_id != Some(acting_user) {
        return Err(AppError::Forbidden(
            "only the appointment's client may review it".into(),
        ));
    }

    Ok(appointment)
}

/// Leaves a review on one's own completed appointment. One per
/// appointment; a second attempt surfaces as a duplicate.
pub async fn create_review(
    pool: &PgPool,
    acting_user: Uuid,
    appointment_id: Uuid,
    new_review: &NewReview,
) -> AppResult<Review> {
    new_review.validate()?;

    let appointment = require_own_appointment(pool, appointment_id, acting_user).await?;
    if appointment.status != AppointmentStatus::Completed {
        return Err(AppError::Validation(
            "only completed appointments can be reviewed".into(),
        ));
    }

    let mut tx = pool.begin().await?;
    let review = ReviewRepository::create(&mut tx, appointment_id, new_review).await?;
    tx.commit().await?;

    info!(review_id = %review.id, %appointment_id, "review created");
    Ok(review)
}

pub async fn update_review(
    pool: &PgPool,
    acting_user: Uuid,
    review_id: Uuid,
    update: &UpdateReview,
) -> AppResult<Review> {
    update.validate()?;

    let review = ReviewRepository::get(pool, review_id)
        .await?
        .ok_or_else(|| AppError::NotFound("review".into()))?;
    require_own_appointment(pool, review.appointment_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    let review = ReviewRepository::update(&mut tx, review_id, update).await?;
    tx.commit().await?;

    Ok(review)
}

pub async fn delete_review(pool: &PgPool, acting_user: Uuid, review_id: Uuid) -> AppResult<()> {
    let review = ReviewRepository::get(pool, review_id)
        .await?
        .ok_or_else(|| AppError::NotFound("review".into()))?;
    require_own_appointment(pool, review.appointment_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    ReviewRepository::delete(&mut tx, review_id).await?;
    tx.commit().await?;

    info!(%review_id, "review deleted");
    Ok(())
}

pub async fn review_for_appointment(
    pool: &PgPool,
    appointment_id: Uuid,
) -> AppResult<Option<Review>> {
    Ok(ReviewRepository::get_by_appointment(pool, appointment_id).await?)
}
