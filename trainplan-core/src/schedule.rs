//! Maps abstract (week, weekday) coordinates onto concrete dates.

use chrono::{Datelike, Duration, NaiveDate};

use crate::workout::{CanonicalWorkout, DatedWorkout};

/// Assign a concrete date to every workout, anchored to `start_date`.
///
/// The chronologically first workout (lowest week, then lowest
/// weekday) lands on the first occurrence of its weekday on or after
/// `start_date`; every other workout keeps its exact (week, day)
/// offset relative to that anchor. The derived plan base date may
/// itself fall before `start_date`; only the first workout's date is
/// guaranteed to be on or after it.
///
/// An empty input is not an error and yields an empty output.
pub fn schedule(workouts: Vec<CanonicalWorkout>, start_date: NaiveDate) -> Vec<DatedWorkout> {
    if workouts.is_empty() {
        return Vec::new();
    }

    // Unknown weekdays sort and schedule as Monday. Text-parsed
    // records all carry an unknown weekday, so several workouts in
    // one week can collapse onto the same date; the text format is
    // lossy and we do not invent a spread it never specified.
    let mut sorted = workouts;
    sorted.sort_by_key(|w| (w.week, w.day_of_week.unwrap_or(0)));

    let first = &sorted[0];
    let first_weekday = i64::from(first.day_of_week.unwrap_or(0));
    let start_weekday = i64::from(start_date.weekday().num_days_from_monday());

    // Smallest non-negative shift putting the first workout on its
    // weekday, on or after the start date.
    let shift = (first_weekday - start_weekday).rem_euclid(7);
    let aligned_first = start_date + Duration::days(shift);

    // base_date + (week-1)*7 + day reproduces the aligned first date
    // exactly, so every record keeps its relative offset.
    let base_date = aligned_first
        - Duration::days(i64::from(first.week.saturating_sub(1)) * 7 + first_weekday);

    sorted
        .into_iter()
        .map(|workout| {
            let offset = i64::from(workout.week.saturating_sub(1)) * 7
                + i64::from(workout.day_of_week.unwrap_or(0));
            let date = base_date + Duration::days(offset);
            DatedWorkout {
                weekday_name: date.format("%A").to_string(),
                date,
                workout,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(week: u32, day_of_week: Option<u8>) -> CanonicalWorkout {
        CanonicalWorkout {
            week,
            day_of_week,
            title: "Run".to_string(),
            description: String::new(),
            duration: None,
            distance: None,
            training_load: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(schedule(Vec::new(), date(2026, 8, 31)).is_empty());
    }

    #[test]
    fn first_workout_lands_on_its_weekday_on_or_after_start() {
        // Monday start; records on Wednesday (2) and Friday (4).
        let start = date(2026, 8, 31);
        let dated = schedule(vec![workout(1, Some(2)), workout(1, Some(4))], start);

        assert_eq!(dated[0].date, date(2026, 9, 2)); // the Wednesday
        assert_eq!(dated[0].weekday_name, "Wednesday");
        assert_eq!(dated[1].date, dated[0].date + Duration::days(2));
    }

    #[test]
    fn alignment_wraps_into_the_next_week_when_needed() {
        // Wednesday start, first workout wants a Tuesday.
        let start = date(2026, 9, 2);
        let dated = schedule(vec![workout(1, Some(1))], start);
        assert_eq!(dated[0].date, date(2026, 9, 8));
        assert_eq!(dated[0].weekday_name, "Tuesday");
    }

    #[test]
    fn start_on_the_target_weekday_shifts_nothing() {
        let start = date(2026, 8, 31); // a Monday
        let dated = schedule(vec![workout(1, Some(0))], start);
        assert_eq!(dated[0].date, start);
    }

    #[test]
    fn later_weeks_keep_their_relative_offsets() {
        let start = date(2026, 8, 31);
        let dated = schedule(
            vec![workout(1, Some(0)), workout(2, Some(0)), workout(3, Some(5))],
            start,
        );
        assert_eq!(dated[0].date, date(2026, 8, 31));
        assert_eq!(dated[1].date, date(2026, 9, 7));
        assert_eq!(dated[2].date, date(2026, 9, 19)); // week 3 Saturday
    }

    #[test]
    fn records_are_ordered_by_week_then_day() {
        let start = date(2026, 8, 31);
        let dated = schedule(
            vec![workout(2, Some(0)), workout(1, Some(4)), workout(1, Some(2))],
            start,
        );
        let weeks: Vec<u32> = dated.iter().map(|d| d.workout.week).collect();
        assert_eq!(weeks, vec![1, 1, 2]);
        assert!(dated.windows(2).all(|p| p[0].date <= p[1].date));
    }

    #[test]
    fn unknown_weekdays_collapse_onto_monday() {
        // Text-parsed records have no weekday; they all schedule as
        // day 0 of their week.
        let start = date(2026, 8, 31);
        let dated = schedule(vec![workout(1, None), workout(1, None)], start);
        assert_eq!(dated[0].date, dated[1].date);
        assert_eq!(dated[0].weekday_name, "Monday");
    }

    #[test]
    fn plan_not_starting_in_week_one_still_anchors_its_first_record() {
        // First record is week 2 Thursday; it must land on the first
        // Thursday on or after the start date.
        let start = date(2026, 8, 31); // Monday
        let dated = schedule(vec![workout(2, Some(3)), workout(2, Some(5))], start);
        assert_eq!(dated[0].date, date(2026, 9, 3)); // Thursday
        assert_eq!(dated[1].date, date(2026, 9, 5));
    }
}
