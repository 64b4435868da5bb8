use anyhow::{bail, Result};
use trainplan_core::schedule::schedule;

use super::{load_dictionary, load_workouts, parse_start_date};
use crate::render;
use crate::SourceArgs;

pub async fn run(source: SourceArgs) -> Result<()> {
    let start_date = parse_start_date(source.start_date.as_deref())?;
    let dictionary = load_dictionary(&source.dictionary);

    let workouts = load_workouts(&source, &dictionary).await?;
    if workouts.is_empty() {
        bail!("No workouts found in the plan source.");
    }

    let scheduled = schedule(workouts, start_date);
    println!("{}", render::render_plan(&scheduled, start_date));
    Ok(())
}
