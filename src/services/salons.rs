use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::db::models::{
    BookedSlot, NewSalon, Salon, Service, UpdateSalon, WorkingHoursRange,
};
use crate::db::repositories::{
    AppointmentRepository, SalonRepository, ServiceRepository, WorkingHoursRepository,
};
use crate::error::{AppError, AppResult};
use crate::services::access::require_salon_owner;

/// A salon's public page: profile, catalog and weekly schedule.
#[derive(Debug, Serialize)]
pub struct SalonDetail {
    pub salon: Salon,
    pub services: Vec<Service>,
    pub working_hours: Vec<WorkingHoursRange>,
}

/// Registers the acting user's salon. One per owner; a second attempt
/// surfaces as a duplicate.
pub async fn create_salon(pool: &PgPool, new_salon: &NewSalon) -> AppResult<Salon> {
    new_salon.validate()?;

    let mut tx = pool.begin().await?;
    let salon = SalonRepository::create(&mut tx, new_salon).await?;
    tx.commit().await?;

    info!(salon_id = %salon.id, "salon created");
    Ok(salon)
}

pub async fn update_salon(
    pool: &PgPool,
    acting_user: Uuid,
    salon_id: Uuid,
    update: &UpdateSalon,
) -> AppResult<Salon> {
    update.validate()?;
    require_salon_owner(pool, salon_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    let salon = SalonRepository::update(&mut tx, salon_id, update).await?;
    tx.commit().await?;

    Ok(salon)
}

/// The acting user's own salon, if they have set one up.
pub async fn my_salon(pool: &PgPool, acting_user: Uuid) -> AppResult<Option<Salon>> {
    Ok(SalonRepository::get_by_owner(pool, acting_user).await?)
}

pub async fn salon_detail(pool: &PgPool, salon_id: Uuid) -> AppResult<SalonDetail> {
    let salon = SalonRepository::get_by_id(pool, salon_id)
        .await?
        .ok_or_else(|| AppError::NotFound("salon".into()))?;
    let services = ServiceRepository::list_for_salon(pool, salon_id).await?;
    let working_hours = WorkingHoursRepository::list_for_salon(pool, salon_id).await?;

    Ok(SalonDetail {
        salon,
        services,
        working_hours,
    })
}

/// Salons ready to take bookings: a configured schedule and at least one
/// service.
pub async fn list_published(pool: &PgPool) -> AppResult<Vec<Salon>> {
    Ok(SalonRepository::list_published(pool).await?)
}

/// The public calendar feed for a salon: occupied `[start, end)` windows
/// only, no client identity.
pub async fn booked_slots(pool: &PgPool, salon_id: Uuid) -> AppResult<Vec<BookedSlot>> {
    Ok(AppointmentRepository::booked_slots(pool, salon_id).await?)
}
