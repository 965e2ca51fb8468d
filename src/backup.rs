//! Backup, restore and full reset of everything the guide stores.
//!
//! # Document Format
//!
//! A backup is a pretty-printed JSON object mapping each storage key to the
//! raw text stored under it. Keys with nothing stored are omitted:
//!
//! ```json
//! {
//!   "ds-pathway-accessibility": "{\"easyRead\":true,...}",
//!   "ds-pathway-role": "\"parent-carer\""
//! }
//! ```

use crate::confirm::Confirmation;
use crate::constants::{ALL_KEYS, APP_BINARY_NAME};
use crate::models::Text;
use crate::store::PersistentStore;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that reject a backup as a whole.
#[derive(Error, Debug)]
pub enum BackupError {
    /// The file could not be parsed at all
    #[error("Backup file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The file parsed but is not a key/value object
    #[error("Backup file must contain a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// Writing a restored value failed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Snapshot of all stored values, keyed by storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BackupDocument {
    /// Storage key to raw stored text
    pub entries: BTreeMap<String, String>,
}

impl BackupDocument {
    /// Pretty-printed JSON text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Default file name for a backup taken on `date`.
#[must_use]
pub fn file_name(date: NaiveDate) -> String {
    format!("{APP_BINARY_NAME}-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Default file name for a backup taken today (UTC).
#[must_use]
pub fn file_name_today() -> String {
    file_name(chrono::Utc::now().date_naive())
}

/// Collects the raw stored text of every known key.
#[must_use]
pub fn export(store: &PersistentStore) -> BackupDocument {
    let entries = ALL_KEYS
        .iter()
        .filter_map(|key| store.read_raw(key).map(|raw| ((*key).to_string(), raw)))
        .collect();
    BackupDocument { entries }
}

/// An entry left out of an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Key as it appeared in the document
    pub key: String,
    /// Why it was not written
    pub reason: String,
}

/// What an import wrote and what it ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Keys restored
    pub written: Vec<String>,
    /// Entries ignored
    pub skipped: Vec<SkippedEntry>,
}

/// Restores a backup.
///
/// Fails without touching storage if `text` is not a JSON object. Inside a
/// valid document, only known keys holding non-empty JSON text are written;
/// anything else is reported as skipped.
pub fn import(store: &PersistentStore, text: &str) -> Result<ImportReport, BackupError> {
    let entries = match serde_json::from_str(text)? {
        serde_json::Value::Object(entries) => entries,
        other => return Err(BackupError::NotAnObject(json_kind(&other))),
    };

    let mut report = ImportReport::default();
    let mut accepted = Vec::new();
    for (key, value) in entries {
        match check_entry(&key, &value) {
            Ok(raw) => accepted.push((key, raw.to_owned())),
            Err(reason) => {
                warn!(key = %key, reason, "Skipping backup entry");
                report.skipped.push(SkippedEntry {
                    key,
                    reason: reason.to_string(),
                });
            }
        }
    }

    for (key, raw) in accepted {
        store.write_raw(&key, &raw)?;
        report.written.push(key);
    }

    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "Backup imported"
    );
    Ok(report)
}

fn check_entry<'a>(key: &str, value: &'a serde_json::Value) -> Result<&'a str, &'static str> {
    if !ALL_KEYS.contains(&key) {
        return Err("unknown key");
    }
    let Some(raw) = value.as_str() else {
        return Err("value is not a string");
    };
    if raw.is_empty() {
        return Err("value is empty");
    }
    if serde_json::from_str::<serde_json::Value>(raw).is_err() {
        return Err("value is not valid JSON text");
    }
    Ok(raw)
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Removes every stored value after confirmation.
///
/// Returns `false` (and removes nothing) when the user declines.
pub fn clear_all(store: &PersistentStore, confirm: &mut dyn Confirmation) -> anyhow::Result<bool> {
    let prompt = Text::new(
        "Are you sure you want to delete all saved data? This action cannot be undone.",
        "Delete all your saved data? This cannot be undone!",
    );
    if !confirm.confirm(&prompt) {
        return Ok(false);
    }

    for key in ALL_KEYS {
        store.remove(key)?;
    }
    info!("All saved data cleared");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ACCESSIBILITY_KEY, CHECKLISTS_KEY, MY_INFO_KEY, ROLE_KEY};
    use crate::confirm::FixedAnswer;

    fn seeded() -> PersistentStore {
        let store = PersistentStore::in_memory();
        store.write_raw(ROLE_KEY, "\"educator\"").unwrap();
        store
            .write_raw(CHECKLISTS_KEY, r#"{"1-year":["1y-i1"]}"#)
            .unwrap();
        store
    }

    #[test]
    fn test_export_omits_absent_keys() {
        let document = export(&seeded());
        assert_eq!(document.entries.len(), 2);
        assert_eq!(document.entries[ROLE_KEY], "\"educator\"");
        assert!(!document.entries.contains_key(MY_INFO_KEY));
    }

    #[test]
    fn test_export_is_pretty_object_of_strings() {
        let json = export(&seeded()).to_json().unwrap();
        assert!(json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[CHECKLISTS_KEY], r#"{"1-year":["1y-i1"]}"#);
    }

    #[test]
    fn test_export_then_import_restores_state() {
        let json = export(&seeded()).to_json().unwrap();
        let target = PersistentStore::in_memory();
        let report = import(&target, &json).unwrap();
        assert_eq!(report.written.len(), 2);
        assert!(report.skipped.is_empty());
        assert_eq!(export(&target), export(&seeded()));
    }

    #[test]
    fn test_import_skips_unknown_and_non_string_entries() {
        let store = PersistentStore::in_memory();
        let text = serde_json::json!({
            "ds-pathway-role": "\"young-person\"",
            "ds-pathway-accessibility": {"easyRead": true},
            "ds-pathway-myinfo": null,
            "ds-pathway-checklists": "not json",
            "something-else": "\"x\"",
        })
        .to_string();

        let report = import(&store, &text).unwrap();
        assert_eq!(report.written, vec![ROLE_KEY.to_string()]);
        assert_eq!(report.skipped.len(), 4);
        assert_eq!(store.read_raw(ROLE_KEY).as_deref(), Some("\"young-person\""));
        assert_eq!(store.read_raw(ACCESSIBILITY_KEY), None);
        assert_eq!(store.read_raw("something-else"), None);
    }

    #[test]
    fn test_import_malformed_leaves_state_untouched() {
        let store = seeded();
        let before = export(&store);

        assert!(matches!(
            import(&store, "{ not json"),
            Err(BackupError::InvalidJson(_))
        ));
        assert!(matches!(
            import(&store, r#"["ds-pathway-role"]"#),
            Err(BackupError::NotAnObject("an array"))
        ));
        assert_eq!(export(&store), before);
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let store = seeded();
        assert!(!clear_all(&store, &mut FixedAnswer(false)).unwrap());
        assert_eq!(export(&store).entries.len(), 2);

        assert!(clear_all(&store, &mut FixedAnswer(true)).unwrap());
        assert!(export(&store).entries.is_empty());
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
        assert_eq!(file_name(date), "ds-pathway-backup-2024-03-21.json");
    }
}
