use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "appointment_status", rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

/// A client's reservation of one service instance.
///
/// `end_time` is derived from the service duration at booking time and is
/// never caller-settable. `client_id` is nullable so the record survives
/// deletion of the client account.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Option<Uuid>,
    pub service_id: Uuid,
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    pub status: AppointmentStatus,
    pub created_at: OffsetDateTime,
}

/// A `[start, end)` pair published on the public calendar feed. Carries no
/// client identity.
#[derive(Debug, Clone, Copy, sqlx::FromRow, Serialize)]
pub struct BookedSlot {
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
}
