//! Counter store loading
//!
//! The browser-side counter persists one JSON object holding lifetime totals
//! and the day-keyed ledger (`{ total, totalChatsCreated, dailyCounts }`).
//! This module locates an exported copy of that object on disk and parses it,
//! tolerating the field drift the store has accumulated across counter
//! versions: unknown fields are ignored and missing or `null` fields fall
//! back to empty defaults.
//!
//! # Path discovery
//!
//! The store path is resolved in order from:
//! 1. an explicit `--data-path` argument,
//! 2. the `GCPRO_DATA_PATH` environment variable,
//! 3. the platform data directory, e.g. `~/.local/share/gcpro/counter.json`.

use crate::error::{GcproError, Result};
use crate::types::UsageLedger;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the store location
pub const DATA_PATH_ENV: &str = "GCPRO_DATA_PATH";

/// Store file name under the platform data directory
const STORE_FILE: &str = "counter.json";

/// Persisted counter state
///
/// Lifetime counters live alongside the ledger because the ledger snapshot
/// may cover less history than the account has accumulated; the userscript
/// keeps them as independent running totals for the same reason.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterStore {
    /// Lifetime message total
    pub total: u64,
    /// Lifetime chats-created total
    pub total_chats_created: u64,
    /// Day-keyed usage ledger; `null` or absent loads as empty
    #[serde(deserialize_with = "null_as_default")]
    pub daily_counts: UsageLedger,
}

/// Deserialize `null` as the default value instead of erroring
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CounterStore {
    /// Load the store from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`GcproError::StoreNotFound`] when the file does not exist and
    /// [`GcproError::Json`] when it is not valid store JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GcproError::StoreNotFound(path.to_path_buf())
            } else {
                GcproError::Io(e)
            }
        })?;

        let store: Self = serde_json::from_str(&contents)?;
        debug!(
            "Loaded counter store from {}: {} ledger days, {} lifetime messages",
            path.display(),
            store.daily_counts.len(),
            store.total
        );

        if store.total > 0 && store.daily_counts.is_empty() {
            warn!("Counter store has lifetime totals but no daily ledger");
        }

        Ok(store)
    }

    /// Resolve the store path from an explicit argument or the defaults
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::data_dir()
            .map(|d| d.join("gcpro").join(STORE_FILE))
            .ok_or_else(|| {
                GcproError::InvalidArgument(
                    "No platform data directory; pass --data-path or set GCPRO_DATA_PATH"
                        .to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_store(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_store() {
        let file = write_store(
            r#"{
                "total": 142,
                "totalChatsCreated": 31,
                "dailyCounts": {
                    "2026-02-08": { "messages": 10, "chats": 2, "byModel": { "flash": 5, "thinking": 3, "pro": 2 } }
                }
            }"#,
        );

        let store = CounterStore::load(file.path()).unwrap();
        assert_eq!(store.total, 142);
        assert_eq!(store.total_chats_created, 31);
        assert_eq!(store.daily_counts.len(), 1);
        let record = &store.daily_counts[&"2026-02-08".parse().unwrap()];
        assert_eq!(record.messages, 10);
    }

    #[test]
    fn test_load_legacy_store_ignores_unknown_fields() {
        // Older counter versions persisted UI state next to the counters.
        let file = write_store(
            r#"{
                "total": 9,
                "dailyCounts": { "2026-01-01": { "messages": 9, "chats": 1 } },
                "viewMode": "today",
                "isExpanded": false,
                "resetStep": 0
            }"#,
        );

        let store = CounterStore::load(file.path()).unwrap();
        assert_eq!(store.total, 9);
        assert_eq!(store.total_chats_created, 0);
        let record = &store.daily_counts[&"2026-01-01".parse().unwrap()];
        assert!(record.by_model.is_none());
    }

    #[test]
    fn test_load_null_daily_counts() {
        let file = write_store(r#"{ "total": 5, "dailyCounts": null }"#);
        let store = CounterStore::load(file.path()).unwrap();
        assert!(store.daily_counts.is_empty());
    }

    #[test]
    fn test_load_empty_object() {
        let file = write_store("{}");
        let store = CounterStore::load(file.path()).unwrap();
        assert_eq!(store.total, 0);
        assert!(store.daily_counts.is_empty());
    }

    #[test]
    fn test_missing_file_is_store_not_found() {
        let err = CounterStore::load(Path::new("/nonexistent/counter.json")).unwrap_err();
        assert!(matches!(err, GcproError::StoreNotFound(_)));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let file = write_store("not json at all");
        let err = CounterStore::load(file.path()).unwrap_err();
        assert!(matches!(err, GcproError::Json(_)));
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let path = CounterStore::resolve_path(Some(PathBuf::from("/tmp/custom.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }
}
