//! ICS calendar generation for scheduled workouts.

use chrono::{Duration, NaiveDate};
use icalendar::{Calendar, Component, Event, Property, ValueType};
use uuid::Uuid;

use crate::error::PlanResult;
use crate::workout::DatedWorkout;

const PRODID: &str = "-//Trainplan//EN";
const CALENDAR_NAME: &str = "Training Plan";

/// Serialize scheduled workouts into a single ICS calendar.
///
/// Each workout becomes one all-day event spanning exactly its
/// scheduled date.
pub fn generate_ics(workouts: &[DatedWorkout]) -> PlanResult<String> {
    let mut cal = Calendar::new();

    for dated in workouts {
        let mut event = Event::new();
        event.uid(&format!("{}@trainplan", Uuid::new_v4()));
        event.summary(&dated.workout.title);

        add_date_property(&mut event, "DTSTART", dated.date);
        add_date_property(&mut event, "DTEND", dated.date + Duration::days(1));

        let description = event_description(dated);
        if !description.is_empty() {
            event.description(&description);
        }

        cal.push(event.done());
    }

    let cal = cal.done();
    Ok(set_calendar_headers(&cal.to_string()))
}

/// Summary fields in fixed order, then a blank line and the free
/// text.
fn event_description(dated: &DatedWorkout) -> String {
    let workout = &dated.workout;
    let mut parts = Vec::new();
    if let Some(ref distance) = workout.distance {
        parts.push(format!("Distance: {distance}"));
    }
    if let Some(ref duration) = workout.duration {
        parts.push(format!("Duration: {duration}"));
    }
    if let Some(ref load) = workout.training_load {
        parts.push(format!("Training Load: {load}"));
    }
    if !workout.description.is_empty() {
        parts.push(format!("\n{}", workout.description));
    }
    parts.join("\n")
}

/// Add an all-day date property (`VALUE=DATE`).
fn add_date_property(event: &mut Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    event.append_property(prop);
}

/// Rewrite the calendar headers in the icalendar crate's output:
/// replace its own PRODID with ours and add the publish method and
/// display name right after it.
fn set_calendar_headers(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\nMETHOD:PUBLISH\r\nX-WR-CALNAME:");
            result.push_str(CALENDAR_NAME);
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }
    result
}
