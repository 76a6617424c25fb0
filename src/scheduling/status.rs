use crate::db::models::AppointmentStatus;

use super::error::ScheduleError;

/// Owner-driven status changes. Only finishing an active appointment is
/// allowed: PENDING or CONFIRMED may become COMPLETED or NO_SHOW. Every
/// other move, including into CONFIRMED or CANCELLED, is rejected.
pub fn validate_transition(
    from: AppointmentStatus,
    to: AppointmentStatus,
) -> Result<(), ScheduleError> {
    use AppointmentStatus::{Completed, Confirmed, NoShow, Pending};

    match (from, to) {
        (Pending | Confirmed, Completed | NoShow) => Ok(()),
        _ => Err(ScheduleError::InvalidStatusTransition { from, to }),
    }
}
