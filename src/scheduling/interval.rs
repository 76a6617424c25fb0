/// Whether the half-open intervals `[a_start, a_end)` and
/// `[b_start, b_end)` intersect.
///
/// Touching intervals (`a_end == b_start`) do not overlap, which is what
/// lets back-to-back bookings and adjacent working-hours ranges coexist.
/// Assumes `start < end` for both intervals; that is enforced where the
/// intervals are built.
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && a_end > b_start
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn overlapping_intervals_are_detected() {
        assert!(overlaps(time!(10:00), time!(10:30), time!(10:15), time!(10:45)));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        assert!(!overlaps(time!(9:00), time!(10:00), time!(11:00), time!(12:00)));
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert!(!overlaps(time!(9:00), time!(10:00), time!(10:00), time!(11:00)));
        assert!(!overlaps(time!(10:00), time!(11:00), time!(9:00), time!(10:00)));
    }

    #[test]
    fn containment_counts_as_overlap() {
        assert!(overlaps(time!(9:00), time!(12:00), time!(10:00), time!(10:30)));
        assert!(overlaps(time!(10:00), time!(10:30), time!(9:00), time!(12:00)));
    }

    #[test]
    fn positive_length_interval_overlaps_itself() {
        assert!(overlaps(time!(9:00), time!(9:01), time!(9:00), time!(9:01)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (time!(9:00), time!(10:00), time!(9:30), time!(11:00)),
            (time!(9:00), time!(10:00), time!(10:00), time!(11:00)),
            (time!(9:00), time!(12:00), time!(10:00), time!(11:00)),
            (time!(9:00), time!(10:00), time!(14:00), time!(15:00)),
        ];
        for (a_start, a_end, b_start, b_end) in cases {
            assert_eq!(
                overlaps(a_start, a_end, b_start, b_end),
                overlaps(b_start, b_end, a_start, a_end),
            );
        }
    }

    #[test]
    fn works_over_datetimes_too() {
        use time::macros::datetime;
        assert!(overlaps(
            datetime!(2026-03-03 10:00 UTC),
            datetime!(2026-03-03 10:30 UTC),
            datetime!(2026-03-03 10:15 UTC),
            datetime!(2026-03-03 10:45 UTC),
        ));
        assert!(!overlaps(
            datetime!(2026-03-03 10:00 UTC),
            datetime!(2026-03-03 10:30 UTC),
            datetime!(2026-03-03 10:30 UTC),
            datetime!(2026-03-03 11:00 UTC),
        ));
    }
}
