use time::{Duration, OffsetDateTime};

use crate::db::models::{weekday_index, WorkingHoursRange};

use super::error::ScheduleError;
use super::interval::overlaps;

/// An occupied `[start, end)` window on a salon's calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
}

/// Decides whether a proposed appointment fits, returning the computed end
/// time on success.
///
/// Checks run in order and stop at the first failure: the booking must
/// start strictly in the future, fit inside one working-hours range of the
/// start day's weekday, and stay clear of every interval in `busy` (the
/// salon's pending and confirmed appointments). The caller supplies `now`
/// so the past-date rule is evaluated exactly once, against the server
/// clock. Appointments never cross midnight; both the weekday and the
/// time-of-day containment come from `start_time`'s date.
pub fn check_slot(
    now: OffsetDateTime,
    start_time: OffsetDateTime,
    duration: Duration,
    day_ranges: &[WorkingHoursRange],
    busy: &[BusyInterval],
) -> Result<OffsetDateTime, ScheduleError> {
    let end_time = start_time + duration;

    if start_time <= now {
        return Err(ScheduleError::PastDate);
    }

    if end_time.date() != start_time.date() {
        return Err(ScheduleError::OutsideWorkingHours);
    }

    let weekday = weekday_index(start_time);
    let fits = day_ranges.iter().any(|range| {
        range.weekday == weekday
            && range.start_time <= start_time.time()
            && range.end_time >= end_time.time()
    });
    if !fits {
        return Err(ScheduleError::OutsideWorkingHours);
    }

    let taken = busy
        .iter()
        .any(|slot| overlaps(start_time, end_time, slot.start_time, slot.end_time));
    if taken {
        return Err(ScheduleError::SlotUnavailable);
    }

    Ok(end_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, time};
    use time::Time;
    use uuid::Uuid;

    // 2026-03-02 is a Monday, 2026-03-03 a Tuesday.
    const NOW: OffsetDateTime = datetime!(2026-03-01 08:00 UTC);

    fn range(weekday: i16, start: Time, end: Time) -> WorkingHoursRange {
        WorkingHoursRange {
            id: Uuid::from_u128(1),
            salon_id: Uuid::from_u128(1),
            weekday,
            start_time: start,
            end_time: end,
            created_at: datetime!(2026-01-01 00:00 UTC),
        }
    }

    fn monday_split_shift() -> Vec<WorkingHoursRange> {
        vec![
            range(0, time!(9:00), time!(13:00)),
            range(0, time!(14:00), time!(18:00)),
        ]
    }

    #[test]
    fn slot_inside_a_range_is_accepted_with_computed_end() {
        let end = check_slot(
            NOW,
            datetime!(2026-03-02 09:00 UTC),
            Duration::minutes(30),
            &monday_split_shift(),
            &[],
        )
        .unwrap();
        assert_eq!(end, datetime!(2026-03-02 09:30 UTC));
    }

    #[test]
    fn slot_ending_past_the_range_end_is_rejected() {
        // 12:45 + 30 min = 13:15, past the 13:00 close of the morning range.
        let err = check_slot(
            NOW,
            datetime!(2026-03-02 12:45 UTC),
            Duration::minutes(30),
            &monday_split_shift(),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::OutsideWorkingHours);
    }

    #[test]
    fn slot_ending_exactly_at_the_range_end_is_accepted() {
        let end = check_slot(
            NOW,
            datetime!(2026-03-02 12:30 UTC),
            Duration::minutes(30),
            &monday_split_shift(),
            &[],
        )
        .unwrap();
        assert_eq!(end, datetime!(2026-03-02 13:00 UTC));
    }

    #[test]
    fn slot_starting_before_opening_is_rejected() {
        let err = check_slot(
            NOW,
            datetime!(2026-03-02 08:45 UTC),
            Duration::minutes(30),
            &monday_split_shift(),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::OutsideWorkingHours);
    }

    #[test]
    fn slot_spanning_the_midday_gap_is_rejected() {
        let err = check_slot(
            NOW,
            datetime!(2026-03-02 12:30 UTC),
            Duration::minutes(120),
            &monday_split_shift(),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::OutsideWorkingHours);
    }

    #[test]
    fn day_without_ranges_is_rejected() {
        // Tuesday start against Monday-only hours.
        let err = check_slot(
            NOW,
            datetime!(2026-03-03 10:00 UTC),
            Duration::minutes(30),
            &monday_split_shift(),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::OutsideWorkingHours);
    }

    #[test]
    fn overlapping_an_active_appointment_is_rejected() {
        let ranges = vec![range(1, time!(9:00), time!(18:00))];
        let busy = [BusyInterval {
            start_time: datetime!(2026-03-03 10:00 UTC),
            end_time: datetime!(2026-03-03 10:30 UTC),
        }];
        let err = check_slot(
            NOW,
            datetime!(2026-03-03 10:15 UTC),
            Duration::minutes(30),
            &ranges,
            &busy,
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::SlotUnavailable);
    }

    #[test]
    fn back_to_back_with_an_active_appointment_is_accepted() {
        let ranges = vec![range(1, time!(9:00), time!(18:00))];
        let busy = [BusyInterval {
            start_time: datetime!(2026-03-03 10:00 UTC),
            end_time: datetime!(2026-03-03 10:30 UTC),
        }];
        let end = check_slot(
            NOW,
            datetime!(2026-03-03 10:30 UTC),
            Duration::minutes(30),
            &ranges,
            &busy,
        )
        .unwrap();
        assert_eq!(end, datetime!(2026-03-03 11:00 UTC));
    }

    #[test]
    fn starting_exactly_now_is_a_past_date() {
        let ranges = vec![range(6, time!(0:00), time!(23:59))];
        let now = datetime!(2026-03-08 10:00 UTC);
        let err = check_slot(now, now, Duration::minutes(30), &ranges, &[]).unwrap_err();
        assert_eq!(err, ScheduleError::PastDate);
    }

    #[test]
    fn one_microsecond_into_the_future_is_bookable() {
        let ranges = vec![range(6, time!(0:00), time!(23:59))];
        let now = datetime!(2026-03-08 10:00 UTC);
        let start = now + Duration::microseconds(1);
        let end = check_slot(now, start, Duration::minutes(30), &ranges, &[]).unwrap();
        assert_eq!(end, start + Duration::minutes(30));
    }

    #[test]
    fn past_date_wins_over_other_failures() {
        // Short-circuit order: a past slot reports PastDate even when it
        // would also fall outside working hours.
        let err = check_slot(
            datetime!(2026-03-09 08:00 UTC),
            datetime!(2026-03-02 03:00 UTC),
            Duration::minutes(30),
            &monday_split_shift(),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::PastDate);
    }

    #[test]
    fn appointments_crossing_midnight_are_rejected() {
        let ranges = vec![range(0, time!(9:00), time!(23:59))];
        let err = check_slot(
            NOW,
            datetime!(2026-03-02 23:45 UTC),
            Duration::minutes(30),
            &ranges,
            &[],
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::OutsideWorkingHours);
    }

    #[test]
    fn end_time_is_always_start_plus_duration() {
        let ranges = vec![range(0, time!(9:00), time!(18:00))];
        for minutes in [15, 30, 45, 60, 120] {
            let start = datetime!(2026-03-02 09:00 UTC);
            let end = check_slot(NOW, start, Duration::minutes(minutes), &ranges, &[]).unwrap();
            assert_eq!(end, start + Duration::minutes(minutes));
        }
    }
}
