// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted CLI preferences (`cli.json`) and flag/pref precedence.

use serde::{Deserialize, Serialize};

/// Config key; stored as `cli.json` by the filesystem store.
pub const PREFS_KEY: &str = "cli";

/// Filter used when neither `RUST_LOG`, `--log-level` nor prefs name one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// User preferences. Every field is optional so a partial document loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliPrefs {
    /// `tracing` filter directive, e.g. `debug` or `sprout=trace`.
    pub log_level: Option<String>,
    /// Decimal places for printed values.
    pub precision: Option<usize>,
}

impl CliPrefs {
    /// Flag wins over the stored value, which wins over [`DEFAULT_LOG_LEVEL`].
    pub fn log_directive<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.log_level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Flag wins over the stored value; `None` means shortest round-trip output.
    pub fn precision(&self, flag: Option<usize>) -> Option<usize> {
        flag.or(self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_prefs_beats_default() {
        let empty = CliPrefs::default();
        assert_eq!(empty.log_directive(None), "info");
        assert_eq!(empty.precision(None), None);

        let stored = CliPrefs {
            log_level: Some("warn".into()),
            precision: Some(2),
        };
        assert_eq!(stored.log_directive(None), "warn");
        assert_eq!(stored.log_directive(Some("trace")), "trace");
        assert_eq!(stored.precision(None), Some(2));
        assert_eq!(stored.precision(Some(5)), Some(5));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let prefs: CliPrefs = serde_json::from_str(r#"{"precision":3}"#).unwrap();
        assert_eq!(prefs.precision, Some(3));
        assert_eq!(prefs.log_level, None);
    }
}
