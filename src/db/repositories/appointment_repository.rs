use sqlx::{PgExecutor, Postgres, Transaction};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::models::{Appointment, AppointmentStatus, BookedSlot};
use crate::db::DatabaseError;

pub struct AppointmentRepository;

impl AppointmentRepository {
    /// Inserts a freshly validated appointment. `end_time` comes from the
    /// slot validator, never from the caller's payload.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        client_id: Option<Uuid>,
        service_id: Uuid,
        start_time: OffsetDateTime,
        end_time: OffsetDateTime,
    ) -> Result<Appointment, DatabaseError> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (id, client_id, service_id, start_time, end_time, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, client_id, service_id, start_time, end_time, status, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(client_id)
        .bind(service_id)
        .bind(start_time)
        .bind(end_time)
        .bind(AppointmentStatus::Pending)
        .fetch_one(&mut **tx)
        .await?;

        Ok(appointment)
    }

    pub async fn get(
        executor: impl PgExecutor<'_>,
        appointment_id: Uuid,
    ) -> Result<Option<Appointment>, DatabaseError> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, client_id, service_id, start_time, end_time, status, created_at
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(appointment_id)
        .fetch_optional(executor)
        .await?;

        Ok(appointment)
    }

    /// The salon an appointment belongs to, through its service.
    pub async fn salon_of(
        executor: impl PgExecutor<'_>,
        appointment_id: Uuid,
    ) -> Result<Option<Uuid>, DatabaseError> {
        let salon_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT s.salon_id
            FROM appointments AS a
            JOIN services AS s ON s.id = a.service_id
            WHERE a.id = $1
            "#,
        )
        .bind(appointment_id)
        .fetch_optional(executor)
        .await?;

        Ok(salon_id)
    }

    /// Pending and confirmed appointments of a salon starting within
    /// `[from, to)`. This is the conflict set for the slot validator.
    pub async fn active_between(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT a.id, a.client_id, a.service_id, a.start_time, a.end_time, a.status, a.created_at
            FROM appointments AS a
            JOIN services AS s ON s.id = a.service_id
            WHERE s.salon_id = $1
              AND a.start_time >= $2
              AND a.start_time < $3
              AND (a.status = $4 OR a.status = $5)
            ORDER BY a.start_time
            "#,
        )
        .bind(salon_id)
        .bind(from)
        .bind(to)
        .bind(AppointmentStatus::Pending)
        .bind(AppointmentStatus::Confirmed)
        .fetch_all(executor)
        .await?;

        Ok(appointments)
    }

    /// Every appointment of a salon starting within `[from, to)`,
    /// regardless of status. Feeds the owner's day view.
    pub async fn between(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT a.id, a.client_id, a.service_id, a.start_time, a.end_time, a.status, a.created_at
            FROM appointments AS a
            JOIN services AS s ON s.id = a.service_id
            WHERE s.salon_id = $1
              AND a.start_time >= $2
              AND a.start_time < $3
            ORDER BY a.start_time
            "#,
        )
        .bind(salon_id)
        .bind(from)
        .bind(to)
        .fetch_all(executor)
        .await?;

        Ok(appointments)
    }

    pub async fn list_for_client(
        executor: impl PgExecutor<'_>,
        client_id: Uuid,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, client_id, service_id, start_time, end_time, status, created_at
            FROM appointments
            WHERE client_id = $1
            ORDER BY start_time DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(executor)
        .await?;

        Ok(appointments)
    }

    /// The public calendar feed: occupied windows of upcoming pending and
    /// confirmed appointments, stripped of client identity.
    pub async fn booked_slots(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
    ) -> Result<Vec<BookedSlot>, DatabaseError> {
        let slots = sqlx::query_as::<_, BookedSlot>(
            r#"
            SELECT a.start_time, a.end_time
            FROM appointments AS a
            JOIN services AS s ON s.id = a.service_id
            WHERE s.salon_id = $1
              AND (a.status = $2 OR a.status = $3)
            ORDER BY a.start_time
            "#,
        )
        .bind(salon_id)
        .bind(AppointmentStatus::Pending)
        .bind(AppointmentStatus::Confirmed)
        .fetch_all(executor)
        .await?;

        Ok(slots)
    }

    pub async fn update_status(
        tx: &mut Transaction<'_, Postgres>,
        appointment_id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, DatabaseError> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = $1
            WHERE id = $2
            RETURNING id, client_id, service_id, start_time, end_time, status, created_at
            "#,
        )
        .bind(status)
        .bind(appointment_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(appointment)
    }
}
