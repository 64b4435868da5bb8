pub mod convert;
pub mod preview;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use trainplan_core::normalize::{parse_plan_response, parse_training_text};
use trainplan_core::{CanonicalWorkout, Dictionary};

use crate::client;
use crate::SourceArgs;

fn parse_start_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid start date '{s}'. Expected YYYY-MM-DD")),
        None => Ok(Local::now().date_naive()),
    }
}

/// Dictionary trouble is never fatal: warn and keep raw keys.
fn load_dictionary(path: &Path) -> Dictionary {
    match Dictionary::load(path) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!(
                "{} {} Workout names won't be translated.",
                "Warning:".yellow(),
                e
            );
            Dictionary::default()
        }
    }
}

async fn load_workouts(
    source: &SourceArgs,
    dictionary: &Dictionary,
) -> Result<Vec<CanonicalWorkout>> {
    match (&source.url, &source.file) {
        (Some(url), _) => {
            let spinner = create_spinner("Fetching plan".to_string());
            let body = client::fetch_plan(url).await;
            spinner.finish_and_clear();

            parse_plan_response(&body?, dictionary).context("Could not parse the plan response")
        }
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read '{}'", path.display()))?;
            Ok(parse_training_text(&text))
        }
        (None, None) => bail!(
            "No plan source given.\n\n\
            Fetch a shared plan:\n  \
            trainplan convert --url \"https://...planId=...\"\n\n\
            Or convert a pasted text export:\n  \
            trainplan convert --file training_data.txt"
        ),
    }
}

fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
