//! Input normalization.
//!
//! Two independent front-ends produce the same canonical records: a
//! parser for the structured plan API response and a parser for
//! free-text plan exports. Downstream stages never know which one a
//! record came from.

mod api;
mod text;

pub use api::parse_plan_response;
pub use text::parse_training_text;
