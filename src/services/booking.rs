use sqlx::PgPool;
use time::{Duration, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use crate::db::models::{weekday_index, Appointment};
use crate::db::repositories::{
    AppointmentRepository, SalonRepository, ServiceRepository, WorkingHoursRepository,
};
use crate::error::{AppError, AppResult};
use crate::scheduling::slot::{check_slot, BusyInterval};

/// Books `service_id` at `start_time` for `client_id`.
///
/// The whole validate-and-create step runs in one transaction holding the
/// salon's row lock: the working-hours and conflict reads, the slot
/// decision and the insert are serialized per salon, so two overlapping
/// requests cannot both pass the conflict check.
pub async fn book_appointment(
    pool: &PgPool,
    client_id: Uuid,
    salon_id: Uuid,
    service_id: Uuid,
    start_time: OffsetDateTime,
) -> AppResult<Appointment> {
    let service = ServiceRepository::get(pool, service_id)
        .await?
        .filter(|service| service.salon_id == salon_id)
        .ok_or_else(|| AppError::NotFound("service".into()))?;

    let now = OffsetDateTime::now_utc();

    let mut tx = pool.begin().await?;
    SalonRepository::lock(&mut tx, salon_id).await?;

    let ranges =
        WorkingHoursRepository::list_for_weekday(&mut *tx, salon_id, weekday_index(start_time))
            .await?;

    let day_start = start_time.date().midnight().assume_utc();
    let day_end = day_start + Duration::days(1);
    let busy: Vec<BusyInterval> =
        AppointmentRepository::active_between(&mut *tx, salon_id, day_start, day_end)
            .await?
            .iter()
            .map(|appointment| BusyInterval {
                start_time: appointment.start_time,
                end_time: appointment.end_time,
            })
            .collect();

    let end_time = check_slot(now, start_time, service.duration(), &ranges, &busy)?;

    let appointment =
        AppointmentRepository::create(&mut tx, Some(client_id), service_id, start_time, end_time)
            .await?;
    tx.commit().await?;

    info!(
        appointment_id = %appointment.id,
        %salon_id,
        %service_id,
        "appointment booked"
    );

    Ok(appointment)
}

/// A client's booking history, newest first.
pub async fn my_appointments(pool: &PgPool, client_id: Uuid) -> AppResult<Vec<Appointment>> {
    Ok(AppointmentRepository::list_for_client(pool, client_id).await?)
}
