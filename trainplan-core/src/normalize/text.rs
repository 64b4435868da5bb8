//! Free-text parser for plan exports pasted from the plan page.
//!
//! The text format is a flat list of lines: week markers, workout
//! titles, and per-workout detail lines (duration, distance, training
//! load, notes). It carries no weekday information, so every record
//! from this path leaves `day_of_week` unset.

use std::sync::LazyLock;

use regex::Regex;

use crate::workout::CanonicalWorkout;

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}").expect("static pattern"));
static DISTANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+ km").expect("static pattern"));
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("static pattern"));

/// Bare summary labels emitted by the plan page; never workout data.
const SUMMARY_LABELS: [&str; 3] = ["Activity Time:", "Distance:", "Training Load:"];

/// Placeholder values the page prints for empty fields.
const PLACEHOLDERS: [&str; 4] = ["/", "0.00 km", "00:00:00", "0 TL"];

/// Parse a free-text plan export into canonical records.
///
/// An unrecognizable block simply yields no records; there is nothing
/// to report beyond that.
pub fn parse_training_text(input: &str) -> Vec<CanonicalWorkout> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut workouts = Vec::new();
    let mut current_week: u32 = 0;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if is_week_marker(line) {
            if let Some(week) = extract_week_number(line) {
                current_week = week;
            }
            i += 1;
            continue;
        }

        if is_summary_label(line) || line.contains('/') {
            i += 1;
            continue;
        }

        if !is_title(line, lines.get(i + 1).copied()) {
            i += 1;
            continue;
        }

        let title = line.to_string();
        let mut duration = None;
        let mut distance = None;
        let mut training_load = None;
        let mut description_lines: Vec<&str> = Vec::new();
        i += 1;

        while i < lines.len() {
            let detail = lines[i];

            if is_week_marker(detail) || is_summary_label(detail) {
                break;
            }
            // A detail line that itself reads as a title starts the
            // next workout.
            if !DURATION_RE.is_match(detail)
                && !DISTANCE_RE.is_match(detail)
                && is_title(detail, lines.get(i + 1).copied())
            {
                break;
            }

            if DURATION_RE.is_match(detail) {
                duration = Some(detail.to_string());
            } else if DISTANCE_RE.is_match(detail) {
                distance = Some(detail.to_string());
            } else if detail.contains("TL") && detail.starts_with(|c: char| c.is_ascii_digit()) {
                training_load = Some(detail.to_string());
            } else if !PLACEHOLDERS.contains(&detail) {
                description_lines.push(detail);
            }
            i += 1;
        }

        workouts.push(CanonicalWorkout {
            // Clamp records appearing before any week marker.
            week: current_week.max(1),
            // The text format carries no weekday.
            day_of_week: None,
            title,
            description: description_lines.join(" "),
            duration,
            distance,
            training_load,
        });
    }

    workouts
}

/// A line is a title when the following line is a duration or a
/// distance, or when it names the race day explicitly.
fn is_title(line: &str, next: Option<&str>) -> bool {
    if line.contains("Target race day") {
        return true;
    }
    next.is_some_and(|n| DURATION_RE.is_match(n) || DISTANCE_RE.is_match(n))
}

fn is_week_marker(line: &str) -> bool {
    line.contains("Week(s)") || line.starts_with("Week ")
}

fn is_summary_label(line: &str) -> bool {
    SUMMARY_LABELS.contains(&line)
}

fn extract_week_number(line: &str) -> Option<u32> {
    NUMBER_RE.find(line).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_workout_block() {
        let workouts = parse_training_text("Week 1\nEasy Run\n00:30:00\n3.00 km\n");
        assert_eq!(workouts.len(), 1);
        let w = &workouts[0];
        assert_eq!(w.week, 1);
        assert_eq!(w.title, "Easy Run");
        assert_eq!(w.duration.as_deref(), Some("00:30:00"));
        assert_eq!(w.distance.as_deref(), Some("3.00 km"));
        assert_eq!(w.day_of_week, None);
    }

    #[test]
    fn week_marker_advances_the_counter() {
        let input = "Week 1\nEasy Run\n00:30:00\nWeek 2\nLong Run\n01:30:00\n";
        let workouts = parse_training_text(input);
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[0].week, 1);
        assert_eq!(workouts[1].week, 2);
        assert_eq!(workouts[1].title, "Long Run");
    }

    #[test]
    fn consecutive_workouts_split_on_title_lookahead() {
        let input = "Week 3\nIntervals\n00:45:00\n8.00 km\nRecovery Jog\n00:20:00\n";
        let workouts = parse_training_text(input);
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[0].title, "Intervals");
        assert_eq!(workouts[0].distance.as_deref(), Some("8.00 km"));
        assert_eq!(workouts[1].title, "Recovery Jog");
        assert_eq!(workouts[1].duration.as_deref(), Some("00:20:00"));
    }

    #[test]
    fn detail_lines_build_the_description() {
        let input = "Week 1\nTempo\n00:40:00\nControlled effort\nStay relaxed\n42 TL\n";
        let workouts = parse_training_text(input);
        assert_eq!(workouts[0].description, "Controlled effort Stay relaxed");
        assert_eq!(workouts[0].training_load.as_deref(), Some("42 TL"));
    }

    #[test]
    fn placeholders_and_summary_lines_are_ignored() {
        let input = "Week 1\nActivity Time:\n05:00:00\nEasy Run\n00:30:00\n/\n0.00 km\n0 TL\n";
        let workouts = parse_training_text(input);
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].title, "Easy Run");
        assert_eq!(workouts[0].distance, None);
        assert_eq!(workouts[0].training_load, None);
        assert_eq!(workouts[0].description, "");
    }

    #[test]
    fn race_day_is_a_title_without_lookahead() {
        let input = "Week 12\nTarget race day\nGood luck!\n";
        let workouts = parse_training_text(input);
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].title, "Target race day");
        assert_eq!(workouts[0].description, "Good luck!");
    }

    #[test]
    fn records_before_any_week_marker_clamp_to_week_one() {
        let workouts = parse_training_text("Easy Run\n00:30:00\n");
        assert_eq!(workouts[0].week, 1);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_training_text("").is_empty());
        assert!(parse_training_text("\n  \n").is_empty());
    }
}
