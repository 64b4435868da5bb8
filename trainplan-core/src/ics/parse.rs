//! Minimal ICS read-back using the icalendar crate's parser.
//!
//! This is deliberately not a full event model: it recovers just
//! enough (summary, start date, description) to verify generated
//! output and report event counts.

use chrono::NaiveDate;
use icalendar::parser::{read_calendar, unfold};

use crate::error::{PlanError, PlanResult};

/// One event as read back from generated ICS output.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEvent {
    pub summary: String,
    /// All-day start date, when the DTSTART uses `VALUE=DATE`.
    pub start: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Parse ICS text back into its events.
pub fn parse_calendar(content: &str) -> PlanResult<Vec<ParsedEvent>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| PlanError::IcsParse(e.to_string()))?;

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(|vevent| ParsedEvent {
            summary: vevent
                .find_prop("SUMMARY")
                .map(|p| p.val.to_string())
                .unwrap_or_default(),
            start: vevent
                .find_prop("DTSTART")
                .and_then(|p| NaiveDate::parse_from_str(p.val.as_ref(), "%Y%m%d").ok()),
            description: vevent.find_prop("DESCRIPTION").map(|p| p.val.to_string()),
        })
        .collect();

    Ok(events)
}
