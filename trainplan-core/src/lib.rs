//! Core pipeline for converting training plans into calendar files.
//!
//! Data flows one way: a structured API response or a free-text block
//! is normalized into [`CanonicalWorkout`] records, the scheduler pins
//! each record to a concrete date, and the emitter serializes the
//! dated records into an ICS calendar.
//!
//! The crate performs no I/O of its own beyond what the caller hands
//! in: the reference dictionary is an injected value, input bodies
//! arrive as strings, and the generated calendar is returned as a
//! string for the caller to write wherever it wants.

pub mod dictionary;
pub mod error;
pub mod ics;
pub mod normalize;
pub mod schedule;
pub mod workout;

pub use dictionary::Dictionary;
pub use error::{PlanError, PlanResult};
pub use workout::{CanonicalWorkout, DatedWorkout};
