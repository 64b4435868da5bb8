//! Format-independent workout types.
//!
//! Every input front-end produces [`CanonicalWorkout`] records, and
//! the scheduler turns those into [`DatedWorkout`] records. The rest
//! of the pipeline works exclusively with these two types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single workout recovered from any input format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalWorkout {
    /// 1-based training-plan week.
    pub week: u32,

    /// 0 = Monday .. 6 = Sunday. `None` when the source format
    /// carries no weekday (free-text input).
    pub day_of_week: Option<u8>,

    /// Display title; never empty ("Workout" when nothing better
    /// can be derived).
    pub title: String,

    /// Overview plus a structure breakdown; may be empty.
    pub description: String,

    /// Formatted total time ("Nmin"/"Ns", or "HH:MM:SS" from text
    /// input).
    pub duration: Option<String>,

    /// Formatted total distance ("N.NN km").
    pub distance: Option<String>,

    /// Training load figure as a display string; absent when zero or
    /// not carried by the source.
    pub training_load: Option<String>,
}

/// A workout with its concrete calendar date attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedWorkout {
    #[serde(flatten)]
    pub workout: CanonicalWorkout,

    /// The scheduled date (naive; the plan has no timezone).
    pub date: NaiveDate,

    /// Display name derived from `date` ("Monday", ...).
    pub weekday_name: String,
}
