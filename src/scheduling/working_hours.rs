use time::Time;
use uuid::Uuid;

use crate::db::models::{WorkingHoursRange, WorkingHoursSubmission};

use super::error::{BatchErrors, RowError, ScheduleError};
use super::interval::overlaps;

/// The payload of one surviving batch row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub weekday: i16,
    pub start_time: Time,
    pub end_time: Time,
}

/// A validated batch edit, ready to be applied in one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPlan {
    pub creates: Vec<RangeSpec>,
    pub updates: Vec<(Uuid, RangeSpec)>,
    pub deletes: Vec<Uuid>,
}

impl BatchPlan {
    pub fn is_empty(&self) -> bool {
        self.creates.is_empty() && self.updates.is_empty() && self.deletes.is_empty()
    }
}

/// Rejects zero-length and inverted ranges.
pub fn validate_range(start: Time, end: Time) -> Result<(), ScheduleError> {
    if start >= end {
        return Err(ScheduleError::InvalidRange);
    }
    Ok(())
}

/// Checks one range against the persisted ranges of the same salon.
///
/// `excluding` identifies the persisted row being edited in place, which
/// must not collide with its own replacement. Rows being deleted elsewhere
/// in the same batch still count here; validation always runs against the
/// database as it stands.
pub fn check_against_existing(
    existing: &[WorkingHoursRange],
    weekday: i16,
    start: Time,
    end: Time,
    excluding: Option<Uuid>,
) -> Result<(), ScheduleError> {
    for range in existing {
        if Some(range.id) == excluding || range.weekday != weekday {
            continue;
        }
        if overlaps(start, end, range.start_time, range.end_time) {
            return Err(ScheduleError::OverlapExisting);
        }
    }
    Ok(())
}

/// Validates a full batch submission and produces the write plan.
///
/// Rows flagged for deletion skip validation entirely and become deletes.
/// Fully blank rows are intentionally absent entries and are dropped. A
/// row with only one of start/end is incomplete and blocks the batch.
/// Rows identical to their persisted version carry no change: they take
/// no part in the pairwise pass (their persisted counterpart already
/// guards their slot) and produce no write. Every surviving row is
/// checked against persisted state, then pairwise against the other
/// survivors of the same weekday. The quadratic scan is fine; a salon has
/// a handful of weekly ranges.
pub fn plan_batch(
    existing: &[WorkingHoursRange],
    submitted: &[WorkingHoursSubmission],
) -> Result<BatchPlan, BatchErrors> {
    let mut errors = BatchErrors::default();
    let mut plan = BatchPlan::default();
    let mut survivors: Vec<RangeSpec> = Vec::new();

    for (index, row) in submitted.iter().enumerate() {
        if row.delete {
            if let Some(id) = row.id {
                plan.deletes.push(id);
            }
            continue;
        }

        let (start, end) = match (row.start_time, row.end_time) {
            (None, None) => continue,
            (Some(start), Some(end)) => (start, end),
            _ => {
                errors.rows.push(RowError {
                    index,
                    error: ScheduleError::IncompleteRange,
                });
                continue;
            }
        };

        let Some(weekday) = row.weekday else {
            errors.rows.push(RowError {
                index,
                error: ScheduleError::IncompleteRange,
            });
            continue;
        };

        if let Err(error) = validate_range(start, end) {
            errors.rows.push(RowError { index, error });
            continue;
        }

        if let Err(error) = check_against_existing(existing, weekday, start, end, row.id) {
            errors.rows.push(RowError { index, error });
            continue;
        }

        let spec = RangeSpec {
            weekday,
            start_time: start,
            end_time: end,
        };

        match row.id {
            Some(id) => {
                let unchanged = existing.iter().any(|range| {
                    range.id == id
                        && range.weekday == weekday
                        && range.start_time == start
                        && range.end_time == end
                });
                if !unchanged {
                    plan.updates.push((id, spec));
                    survivors.push(spec);
                }
            }
            None => {
                plan.creates.push(spec);
                survivors.push(spec);
            }
        }
    }

    'pairwise: for (i, a) in survivors.iter().enumerate() {
        for b in survivors.iter().skip(i + 1) {
            if a.weekday == b.weekday
                && overlaps(a.start_time, a.end_time, b.start_time, b.end_time)
            {
                errors.batch.push(ScheduleError::OverlapInBatch);
                break 'pairwise;
            }
        }
    }

    if errors.is_empty() {
        Ok(plan)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, time};

    fn persisted(id: u128, weekday: i16, start: Time, end: Time) -> WorkingHoursRange {
        WorkingHoursRange {
            id: Uuid::from_u128(id),
            salon_id: Uuid::from_u128(1),
            weekday,
            start_time: start,
            end_time: end,
            created_at: datetime!(2026-01-01 00:00 UTC),
        }
    }

    fn new_row(weekday: i16, start: Time, end: Time) -> WorkingHoursSubmission {
        WorkingHoursSubmission {
            weekday: Some(weekday),
            start_time: Some(start),
            end_time: Some(end),
            ..Default::default()
        }
    }

    fn edit_row(id: u128, weekday: i16, start: Time, end: Time) -> WorkingHoursSubmission {
        WorkingHoursSubmission {
            id: Some(Uuid::from_u128(id)),
            ..new_row(weekday, start, end)
        }
    }

    #[test]
    fn overlapping_rows_in_one_batch_are_rejected() {
        let submitted = [
            new_row(0, time!(9:00), time!(12:00)),
            new_row(0, time!(11:00), time!(15:00)),
        ];
        let errors = plan_batch(&[], &submitted).unwrap_err();
        assert_eq!(errors.batch, vec![ScheduleError::OverlapInBatch]);
        assert!(errors.rows.is_empty());
    }

    #[test]
    fn adjacent_rows_in_one_batch_are_accepted() {
        let submitted = [
            new_row(0, time!(9:00), time!(12:00)),
            new_row(0, time!(12:00), time!(15:00)),
        ];
        let plan = plan_batch(&[], &submitted).unwrap();
        assert_eq!(plan.creates.len(), 2);
    }

    #[test]
    fn same_times_on_different_weekdays_do_not_conflict() {
        let submitted = [
            new_row(0, time!(9:00), time!(13:00)),
            new_row(1, time!(9:00), time!(13:00)),
        ];
        assert!(plan_batch(&[], &submitted).is_ok());
    }

    #[test]
    fn inverted_and_zero_length_ranges_are_invalid() {
        let submitted = [
            new_row(0, time!(12:00), time!(9:00)),
            new_row(1, time!(10:00), time!(10:00)),
        ];
        let errors = plan_batch(&[], &submitted).unwrap_err();
        assert_eq!(
            errors.rows,
            vec![
                RowError {
                    index: 0,
                    error: ScheduleError::InvalidRange
                },
                RowError {
                    index: 1,
                    error: ScheduleError::InvalidRange
                },
            ]
        );
    }

    #[test]
    fn one_sided_row_blocks_the_batch() {
        let submitted = [WorkingHoursSubmission {
            weekday: Some(2),
            start_time: Some(time!(9:00)),
            ..Default::default()
        }];
        let errors = plan_batch(&[], &submitted).unwrap_err();
        assert_eq!(
            errors.rows,
            vec![RowError {
                index: 0,
                error: ScheduleError::IncompleteRange
            }]
        );
    }

    #[test]
    fn blank_row_is_skipped() {
        let submitted = [
            WorkingHoursSubmission::default(),
            new_row(0, time!(9:00), time!(13:00)),
        ];
        let plan = plan_batch(&[], &submitted).unwrap();
        assert_eq!(plan.creates.len(), 1);
    }

    #[test]
    fn deleted_row_skips_validation_and_lands_in_the_plan() {
        let submitted = [WorkingHoursSubmission {
            id: Some(Uuid::from_u128(7)),
            weekday: Some(0),
            // Inverted on purpose; deletion must not validate the times.
            start_time: Some(time!(15:00)),
            end_time: Some(time!(9:00)),
            delete: true,
        }];
        let plan = plan_batch(&[], &submitted).unwrap();
        assert_eq!(plan.deletes, vec![Uuid::from_u128(7)]);
        assert!(plan.creates.is_empty() && plan.updates.is_empty());
    }

    #[test]
    fn new_row_overlapping_a_persisted_range_is_rejected() {
        let existing = [persisted(1, 0, time!(9:00), time!(13:00))];
        let submitted = [new_row(0, time!(12:00), time!(16:00))];
        let errors = plan_batch(&existing, &submitted).unwrap_err();
        assert_eq!(
            errors.rows,
            vec![RowError {
                index: 0,
                error: ScheduleError::OverlapExisting
            }]
        );
    }

    #[test]
    fn editing_a_row_in_place_excludes_its_own_persisted_version() {
        let existing = [persisted(1, 0, time!(9:00), time!(13:00))];
        let submitted = [edit_row(1, 0, time!(9:00), time!(14:00))];
        let plan = plan_batch(&existing, &submitted).unwrap();
        assert_eq!(plan.updates.len(), 1);
        assert_eq!(plan.updates[0].0, Uuid::from_u128(1));
        assert_eq!(plan.updates[0].1.end_time, time!(14:00));
    }

    #[test]
    fn unchanged_row_produces_no_writes() {
        let existing = [persisted(1, 0, time!(9:00), time!(13:00))];
        let submitted = [edit_row(1, 0, time!(9:00), time!(13:00))];
        let plan = plan_batch(&existing, &submitted).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn new_row_cannot_overlap_an_untouched_range_resubmitted_unchanged() {
        let existing = [persisted(1, 0, time!(9:00), time!(13:00))];
        let submitted = [
            edit_row(1, 0, time!(9:00), time!(13:00)),
            new_row(0, time!(10:00), time!(11:00)),
        ];
        let errors = plan_batch(&existing, &submitted).unwrap_err();
        assert_eq!(
            errors.rows,
            vec![RowError {
                index: 1,
                error: ScheduleError::OverlapExisting
            }]
        );
    }

    #[test]
    fn deleting_a_range_does_not_free_its_slot_within_the_same_batch() {
        // Validation runs against the database as it stands: replacing a
        // range requires two submissions, not one.
        let existing = [persisted(1, 0, time!(9:00), time!(13:00))];
        let submitted = [
            WorkingHoursSubmission {
                id: Some(Uuid::from_u128(1)),
                delete: true,
                ..Default::default()
            },
            new_row(0, time!(10:00), time!(11:00)),
        ];
        let errors = plan_batch(&existing, &submitted).unwrap_err();
        assert_eq!(
            errors.rows,
            vec![RowError {
                index: 1,
                error: ScheduleError::OverlapExisting
            }]
        );
    }

    #[test]
    fn edited_rows_are_checked_pairwise_against_new_rows() {
        let existing = [persisted(1, 0, time!(9:00), time!(10:00))];
        let submitted = [
            edit_row(1, 0, time!(9:00), time!(12:00)),
            new_row(0, time!(11:00), time!(13:00)),
        ];
        let errors = plan_batch(&existing, &submitted).unwrap_err();
        assert_eq!(errors.batch, vec![ScheduleError::OverlapInBatch]);
    }

    #[test]
    fn row_and_batch_errors_are_reported_together() {
        let existing = [persisted(1, 0, time!(9:00), time!(10:00))];
        let submitted = [
            new_row(0, time!(14:00), time!(13:00)),
            new_row(1, time!(9:00), time!(12:00)),
            new_row(1, time!(11:00), time!(15:00)),
        ];
        let errors = plan_batch(&existing, &submitted).unwrap_err();
        assert_eq!(
            errors.rows,
            vec![RowError {
                index: 0,
                error: ScheduleError::InvalidRange
            }]
        );
        assert_eq!(errors.batch, vec![ScheduleError::OverlapInBatch]);
    }
}
