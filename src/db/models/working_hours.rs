use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{OffsetDateTime, Time};

/// One contiguous availability window of a salon on one weekday.
///
/// Weekdays are numbered 0 = Monday .. 6 = Sunday. Ranges are half-open
/// `[start_time, end_time)`: a range ending at 13:00 and one starting at
/// 13:00 on the same day do not collide.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct WorkingHoursRange {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub weekday: i16,
    pub start_time: Time,
    pub end_time: Time,
    pub created_at: OffsetDateTime,
}

/// One row of a working-hours batch submission.
///
/// `id` is set when the row edits a persisted range; `delete` flags that
/// range for removal. A row with neither start nor end is an intentionally
/// blank entry and is skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkingHoursSubmission {
    pub id: Option<Uuid>,
    pub weekday: Option<i16>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    #[serde(default)]
    pub delete: bool,
}

/// Weekday index of a timestamp under the 0 = Monday convention.
pub fn weekday_index(moment: OffsetDateTime) -> i16 {
    moment.weekday().number_days_from_monday() as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn weekday_index_starts_at_monday() {
        // 2026-03-02 is a Monday, 2026-03-08 a Sunday.
        assert_eq!(weekday_index(datetime!(2026-03-02 09:00 UTC)), 0);
        assert_eq!(weekday_index(datetime!(2026-03-08 09:00 UTC)), 6);
    }
}
