use thiserror::Error;

use crate::db::models::AppointmentStatus;

/// A recoverable, user-facing scheduling rejection. Kinds are never
/// collapsed: callers surface the precise reason next to the offending
/// field or form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("appointments cannot be booked in the past; pick a future date and time")]
    PastDate,

    #[error("the requested time falls outside the salon's working hours")]
    OutsideWorkingHours,

    #[error("the requested slot overlaps an existing appointment")]
    SlotUnavailable,

    #[error("the start of a range must be before its end")]
    InvalidRange,

    #[error("this range overlaps another saved range on the same day")]
    OverlapExisting,

    #[error("two submitted ranges overlap on the same day")]
    OverlapInBatch,

    #[error("a range needs both a start and an end time")]
    IncompleteRange,

    #[error("an appointment cannot move from {from:?} to {to:?}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

/// A rejected row of a working-hours batch, keyed by submission index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub index: usize,
    pub error: ScheduleError,
}

/// Everything wrong with a working-hours batch: per-row rejections plus
/// batch-level conflicts between submitted rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error(
    "working hours batch rejected ({} row error(s), {} batch error(s))",
    .rows.len(),
    .batch.len()
)]
pub struct BatchErrors {
    pub rows: Vec<RowError>,
    pub batch: Vec<ScheduleError>,
}

impl BatchErrors {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.batch.is_empty()
    }
}
