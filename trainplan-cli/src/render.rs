//! Terminal rendering for scheduled plans.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use trainplan_core::DatedWorkout;

/// Render the dated plan as a week-by-week listing.
pub fn render_plan(workouts: &[DatedWorkout], start_date: NaiveDate) -> String {
    let total_weeks = workouts.iter().map(|w| w.workout.week).max().unwrap_or(0);

    let mut lines = vec![format!(
        "📅 {} workouts over {} weeks, starting {}",
        workouts.len(),
        total_weeks,
        start_date.format("%Y-%m-%d")
    )];

    let mut current_week = 0;
    for dated in workouts {
        if dated.workout.week != current_week {
            current_week = dated.workout.week;
            lines.push(String::new());
            lines.push(format!("Week {current_week}").bold().to_string());
        }
        lines.push(format!(
            "  {}  {:<9} {}{}",
            dated.date.format("%Y-%m-%d"),
            dated.weekday_name,
            dated.workout.title,
            render_extras(dated).dimmed()
        ));
    }

    lines.join("\n")
}

fn render_extras(dated: &DatedWorkout) -> String {
    let workout = &dated.workout;
    let extras: Vec<&str> = [&workout.duration, &workout.distance, &workout.training_load]
        .iter()
        .filter_map(|field| field.as_deref())
        .collect();

    if extras.is_empty() {
        String::new()
    } else {
        format!("  ({})", extras.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainplan_core::CanonicalWorkout;

    fn dated(week: u32, title: &str, day: u32) -> DatedWorkout {
        let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
        DatedWorkout {
            workout: CanonicalWorkout {
                week,
                day_of_week: Some(0),
                title: title.to_string(),
                description: String::new(),
                duration: Some("30min".to_string()),
                distance: None,
                training_load: None,
            },
            weekday_name: date.format("%A").to_string(),
            date,
        }
    }

    #[test]
    fn plan_renders_week_headers_and_rows() {
        let plan = vec![dated(1, "Easy Run", 2), dated(2, "Long Run", 9)];
        let rendered = render_plan(&plan, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());

        assert!(rendered.contains("2 workouts over 2 weeks"));
        assert!(rendered.contains("Week 1"));
        assert!(rendered.contains("Week 2"));
        assert!(rendered.contains("Easy Run"));
        assert!(rendered.contains("(30min)"));
    }
}
