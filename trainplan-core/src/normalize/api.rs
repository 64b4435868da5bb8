//! Structured-response parser for the remote plan API.
//!
//! The payload is a tree of "entities" (one per scheduled day) and
//! "programs" (named workout templates). Every field is modeled as
//! potentially absent; the API omits keys freely between versions.

use std::collections::HashMap;

use serde::Deserialize;

use crate::dictionary::Dictionary;
use crate::error::{PlanError, PlanResult};
use crate::workout::CanonicalWorkout;

/// Target discriminator: duration in seconds.
const TARGET_TIME: u8 = 2;
/// Target discriminator: distance in centimeter-scale units
/// (value / 100000 = kilometers).
const TARGET_DISTANCE: u8 = 5;
/// Intensity discriminator: pace as a threshold percentage band.
const INTENSITY_PACE: u8 = 3;

/// Segments never used when synthesizing a title from components.
/// They still appear in the structure breakdown.
const BOOKEND_SEGMENTS: [&str; 2] = ["Warm Up", "Cool Down"];

/// Most descriptors joined into a synthesized title.
const MAX_TITLE_PARTS: usize = 5;

#[derive(Debug, Deserialize)]
struct PlanResponse {
    data: Option<PlanData>,
}

#[derive(Debug, Deserialize)]
struct PlanData {
    #[serde(default)]
    entities: Vec<Entity>,
    #[serde(default)]
    programs: Vec<Program>,
}

/// One scheduled day of the plan.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entity {
    /// Zero-based sequential day number across the whole plan.
    #[serde(default)]
    day_no: u32,
    id_in_plan: Option<PlanId>,
    /// Structured sub-exercise list (current API shape).
    #[serde(default)]
    exercise_bar_chart: Vec<Exercise>,
    /// Single sport object (legacy API shape).
    sport: Option<Sport>,
}

/// A named workout template referenced by entities.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Program {
    id_in_plan: Option<PlanId>,
    name: Option<String>,
    overview: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Sport {
    name: Option<String>,
    overview: Option<String>,
    #[serde(default)]
    distance: i64,
    #[serde(default)]
    duration: i64,
    #[serde(default)]
    training_load: i64,
    #[serde(default)]
    exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Exercise {
    name: Option<String>,
    target_type: Option<u8>,
    #[serde(default)]
    target_value: i64,
    #[serde(default)]
    intensity_type: u8,
    /// Raw value scaled by 1000 (e.g. 95000 = 95%).
    #[serde(default)]
    intensity_percent: i64,
    #[serde(default)]
    intensity_percent_extend: i64,
}

/// The per-plan identifier joining entities to programs.
///
/// The API emits it as a number or a string depending on version. It
/// looks deceptively like an array index; it is not one, and the join
/// must always go through this key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
enum PlanId {
    Num(i64),
    Str(String),
}

/// Which of the two payload shapes an entity carries, resolved once
/// per entity before decoding.
enum WorkoutFormat<'a> {
    BarChart(&'a [Exercise]),
    LegacySport(&'a Sport),
}

impl Entity {
    fn format(&self) -> Option<WorkoutFormat<'_>> {
        if !self.exercise_bar_chart.is_empty() {
            Some(WorkoutFormat::BarChart(&self.exercise_bar_chart))
        } else {
            // Rest days carry neither shape and yield no record.
            self.sport.as_ref().map(WorkoutFormat::LegacySport)
        }
    }
}

/// Everything a decoder produces except the (week, day) coordinate,
/// which comes from the entity itself.
struct Decoded {
    title: String,
    description: String,
    duration: Option<String>,
    distance: Option<String>,
    training_load: Option<String>,
}

/// Parse a structured plan API response body into canonical records.
pub fn parse_plan_response(
    body: &str,
    dictionary: &Dictionary,
) -> PlanResult<Vec<CanonicalWorkout>> {
    let response: PlanResponse = serde_json::from_str(body)?;
    let data = response
        .data
        .ok_or_else(|| PlanError::InputMalformed("response has no `data` object".to_string()))?;

    // Entities reference programs by idInPlan, never by position.
    let programs: HashMap<&PlanId, &Program> = data
        .programs
        .iter()
        .filter_map(|p| p.id_in_plan.as_ref().map(|id| (id, p)))
        .collect();

    let mut workouts = Vec::new();
    for entity in &data.entities {
        let Some(format) = entity.format() else {
            continue;
        };

        let week = entity.day_no / 7 + 1;
        let day_of_week = (entity.day_no % 7) as u8;

        let program = entity
            .id_in_plan
            .as_ref()
            .and_then(|id| programs.get(id).copied());
        let program_name = program
            .and_then(|p| p.name.as_deref())
            .filter(|s| !s.is_empty())
            .map(|key| dictionary.translate(key, None));
        let program_overview = program
            .and_then(|p| p.overview.as_deref())
            .filter(|s| !s.is_empty())
            .map(|key| dictionary.translate(key, None));

        let decoded = match format {
            WorkoutFormat::BarChart(exercises) => {
                decode_bar_chart(exercises, program_name, program_overview, dictionary)
            }
            WorkoutFormat::LegacySport(sport) => decode_legacy_sport(sport, dictionary),
        };

        workouts.push(CanonicalWorkout {
            week,
            day_of_week: Some(day_of_week),
            title: decoded.title,
            description: decoded.description,
            duration: decoded.duration,
            distance: decoded.distance,
            training_load: decoded.training_load,
        });
    }

    Ok(workouts)
}

fn decode_bar_chart(
    exercises: &[Exercise],
    program_name: Option<String>,
    program_overview: Option<String>,
    dictionary: &Dictionary,
) -> Decoded {
    let mut details = Vec::new();
    let mut title_parts = Vec::new();
    let mut total_seconds: i64 = 0;
    let mut total_distance: i64 = 0;

    for exercise in exercises {
        match exercise.target_type {
            Some(TARGET_TIME) => total_seconds += exercise.target_value,
            Some(TARGET_DISTANCE) => total_distance += exercise.target_value,
            _ => {}
        }

        let name = match exercise.name.as_deref().filter(|s| !s.is_empty()) {
            Some(key) => dictionary.translate(key, None),
            None => continue,
        };
        let Some(target) = format_target(exercise.target_type, exercise.target_value) else {
            continue;
        };

        let detail = format!("{name}: {target}");
        if !BOOKEND_SEGMENTS.contains(&name.as_str()) {
            title_parts.push(detail.replace(": ", " "));
        }
        details.push(detail);
    }

    let title = program_name.unwrap_or_else(|| synthesize_title(&title_parts));

    Decoded {
        title,
        description: build_description(program_overview, &details),
        duration: (total_seconds > 0).then(|| format!("{}min", total_seconds / 60)),
        distance: (total_distance > 0).then(|| format_km(total_distance)),
        // The bar-chart shape carries no training load figure.
        training_load: None,
    }
}

fn decode_legacy_sport(sport: &Sport, dictionary: &Dictionary) -> Decoded {
    let title = sport
        .name
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|key| dictionary.translate(key, None))
        .unwrap_or_else(|| "Workout".to_string());
    let overview = sport
        .overview
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|key| dictionary.translate(key, None));

    let mut details = Vec::new();
    for exercise in &sport.exercises {
        let name = match exercise.name.as_deref().filter(|s| !s.is_empty()) {
            Some(key) => dictionary.translate(key, None),
            None => continue,
        };
        let Some(target) = format_target(exercise.target_type, exercise.target_value) else {
            continue;
        };

        let mut detail = format!("{name}: {target}");
        if let Some(intensity) = format_intensity(exercise) {
            detail.push(' ');
            detail.push_str(&intensity);
        }
        details.push(detail);
    }

    Decoded {
        title,
        description: build_description(overview, &details),
        duration: (sport.duration > 0).then(|| format!("{}min", sport.duration / 60)),
        distance: (sport.distance > 0).then(|| format_km(sport.distance)),
        training_load: (sport.training_load > 0).then(|| sport.training_load.to_string()),
    }
}

/// Render a sub-exercise target. Times of a minute or more show as
/// whole minutes; shorter times in seconds; distances in kilometers.
fn format_target(target_type: Option<u8>, value: i64) -> Option<String> {
    match target_type {
        Some(TARGET_TIME) if value >= 60 => Some(format!("{}min", value / 60)),
        Some(TARGET_TIME) => Some(format!("{value}s")),
        Some(TARGET_DISTANCE) => Some(format!("{:.2}km", value as f64 / 100_000.0)),
        _ => None,
    }
}

fn format_km(value: i64) -> String {
    format!("{:.2} km", value as f64 / 100_000.0)
}

/// "@ P1-P2% threshold" for pace-band intensities, absent otherwise.
fn format_intensity(exercise: &Exercise) -> Option<String> {
    if exercise.intensity_type != INTENSITY_PACE {
        return None;
    }
    let low = exercise.intensity_percent as f64 / 1000.0;
    let high = exercise.intensity_percent_extend as f64 / 1000.0;
    (low > 0.0).then(|| format!("@ {low:.0}-{high:.0}% threshold"))
}

/// Fallback title built from sub-exercise descriptors when the plan
/// carries no program name.
fn synthesize_title(parts: &[String]) -> String {
    if parts.is_empty() {
        return "Workout".to_string();
    }
    let mut title = parts
        .iter()
        .take(MAX_TITLE_PARTS)
        .cloned()
        .collect::<Vec<_>>()
        .join(" + ");
    if parts.len() > MAX_TITLE_PARTS {
        title.push_str(&format!(" + {} more", parts.len() - MAX_TITLE_PARTS));
    }
    title
}

/// Overview (when present) followed by a bulleted structure section.
fn build_description(overview: Option<String>, details: &[String]) -> String {
    let mut description = overview.unwrap_or_default();
    if !details.is_empty() {
        if !description.is_empty() {
            description.push_str("\n\n");
        }
        description.push_str("Workout Structure:\n");
        description.push_str(
            &details
                .iter()
                .map(|d| format!("• {d}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
    description.trim().to_string()
}
