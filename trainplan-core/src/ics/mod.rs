//! ICS calendar emission and read-back.

mod generate;
mod parse;

pub use generate::generate_ics;
pub use parse::{parse_calendar, ParsedEvent};
