//! Reference dictionary for translating coded workout keys.
//!
//! Plan payloads carry opaque keys ("ex_name_1234") for workout and
//! exercise names. The dictionary maps those to readable strings.
//! It is an injected value, not a process-global: callers load it
//! once and pass it to the normalizer, so tests can supply fixtures.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{PlanError, PlanResult};

/// Ellipsis marker appended when a translation is truncated.
const ELLIPSIS: &str = "...";

/// Read-only key → display-string mapping.
///
/// The default (empty) dictionary translates every key to itself,
/// which is the degraded mode used when the reference file is
/// missing or corrupt.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Dictionary { entries }
    }

    /// Load the dictionary from a flat JSON object file.
    ///
    /// Failure is reported, never fatal: callers fall back to
    /// `Dictionary::default()` and keep going with raw keys.
    pub fn load(path: &Path) -> PlanResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PlanError::ReferenceData(format!("could not read '{}': {}", path.display(), e))
        })?;
        let entries: HashMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
            PlanError::ReferenceData(format!("invalid dictionary '{}': {}", path.display(), e))
        })?;
        Ok(Dictionary { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate a key, returning the key itself when unmapped.
    ///
    /// With `max_length` set, translations longer than that many
    /// characters are cut and marked with a trailing ellipsis.
    pub fn translate(&self, key: &str, max_length: Option<usize>) -> String {
        let translation = self.entries.get(key).map(String::as_str).unwrap_or(key);
        match max_length {
            Some(max) if translation.chars().count() > max => {
                let truncated: String = translation.chars().take(max).collect();
                format!("{truncated}{ELLIPSIS}")
            }
            _ => translation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Dictionary {
        let mut entries = HashMap::new();
        entries.insert("ex_1".to_string(), "Easy Run".to_string());
        entries.insert(
            "ex_2".to_string(),
            "A very long interval session name".to_string(),
        );
        Dictionary::new(entries)
    }

    #[test]
    fn known_key_is_translated() {
        assert_eq!(fixture().translate("ex_1", None), "Easy Run");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(fixture().translate("no_such_key", None), "no_such_key");
        assert_eq!(Dictionary::default().translate("ex_1", None), "ex_1");
    }

    #[test]
    fn long_translation_is_truncated_with_ellipsis() {
        assert_eq!(fixture().translate("ex_2", Some(10)), "A very lon...");
    }

    #[test]
    fn short_translation_is_untouched_by_max_length() {
        assert_eq!(fixture().translate("ex_1", Some(20)), "Easy Run");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mut entries = HashMap::new();
        entries.insert("k".to_string(), "ääääää".to_string());
        let dict = Dictionary::new(entries);
        assert_eq!(dict.translate("k", Some(3)), "äää...");
    }

    #[test]
    fn load_missing_file_is_a_reference_data_error() {
        let err = Dictionary::load(Path::new("/nonexistent/dict.json")).unwrap_err();
        assert!(matches!(err, PlanError::ReferenceData(_)));
    }
}
