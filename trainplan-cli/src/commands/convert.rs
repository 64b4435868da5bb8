use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use trainplan_core::ics::{generate_ics, parse_calendar};
use trainplan_core::schedule::schedule;

use super::{load_dictionary, load_workouts, parse_start_date};
use crate::SourceArgs;

pub async fn run(source: SourceArgs, output: PathBuf) -> Result<()> {
    let start_date = parse_start_date(source.start_date.as_deref())?;
    let dictionary = load_dictionary(&source.dictionary);

    let workouts = load_workouts(&source, &dictionary).await?;
    if workouts.is_empty() {
        bail!("No workouts found in the plan source.");
    }

    let scheduled = schedule(workouts, start_date);
    let ics = generate_ics(&scheduled)?;
    fs::write(&output, ics.as_bytes())
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    // Re-parse the generated calendar so the reported count reflects
    // the output, not the input.
    let event_count = parse_calendar(&ics).map(|events| events.len())?;

    println!("{} {}", "Created".green(), output.display());
    println!(
        "📅 {} events, starting {}",
        event_count,
        start_date.format("%Y-%m-%d")
    );
    Ok(())
}
