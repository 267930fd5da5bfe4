use crate::error::{DaybookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD (ddd)";
const DEFAULT_NOTE_PATH: &str = "Journal";

/// Settings for daybook, stored as config.json in the daybook home.
///
/// Every field has a serde default so a partially written file merges
/// over the defaults instead of failing to load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalSettings {
    /// Insert today's heading automatically when the journal is opened
    #[serde(default = "default_true")]
    pub automatic_date_headings: bool,

    /// Date pattern for day headings (Moment-style tokens, e.g. "YYYY-MM-DD (ddd)")
    #[serde(default = "default_date_format")]
    pub heading_date_format: String,

    /// Locale for date formatting; None means the ambient system locale
    #[serde(default)]
    pub locale: Option<String>,

    /// Journal document name; the workspace appends the file extension
    #[serde(default = "default_note_path")]
    pub journal_note_path: String,
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_note_path() -> String {
    DEFAULT_NOTE_PATH.to_string()
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            automatic_date_headings: true,
            heading_date_format: DEFAULT_DATE_FORMAT.to_string(),
            locale: None,
            journal_note_path: DEFAULT_NOTE_PATH.to_string(),
        }
    }
}

/// A partial settings change. `None` fields keep the current value;
/// `locale` is doubly optional so a patch can clear it back to ambient.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub automatic_date_headings: Option<bool>,
    pub heading_date_format: Option<String>,
    pub locale: Option<Option<String>>,
    pub journal_note_path: Option<String>,
}

impl JournalSettings {
    /// Load settings from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DaybookError::Io)?;
        let settings: JournalSettings =
            serde_json::from_str(&content).map_err(DaybookError::Serialization)?;
        Ok(settings)
    }

    /// Save settings to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DaybookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DaybookError::Serialization)?;
        fs::write(config_path, content).map_err(DaybookError::Io)?;
        Ok(())
    }

    /// Returns a new settings value with the patch applied.
    pub fn merged(&self, patch: SettingsPatch) -> Self {
        Self {
            automatic_date_headings: patch
                .automatic_date_headings
                .unwrap_or(self.automatic_date_headings),
            heading_date_format: patch
                .heading_date_format
                .unwrap_or_else(|| self.heading_date_format.clone()),
            locale: patch.locale.unwrap_or_else(|| self.locale.clone()),
            journal_note_path: patch
                .journal_note_path
                .unwrap_or_else(|| self.journal_note_path.clone()),
        }
    }

    /// String accessor for the config command. Returns None for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "automatic-date-headings" => Some(self.automatic_date_headings.to_string()),
            "heading-date-format" => Some(self.heading_date_format.clone()),
            "locale" => Some(self.locale.clone().unwrap_or_else(|| "ambient".to_string())),
            "journal-note-path" => Some(self.journal_note_path.clone()),
            _ => None,
        }
    }

    /// Builds the patch corresponding to a `key = value` assignment.
    /// Setting `locale` to "ambient" clears it back to the system locale.
    pub fn patch_for(key: &str, value: &str) -> std::result::Result<SettingsPatch, String> {
        let mut patch = SettingsPatch::default();
        match key {
            "automatic-date-headings" => {
                let parsed = value
                    .parse::<bool>()
                    .map_err(|_| format!("Expected true or false, got: {}", value))?;
                patch.automatic_date_headings = Some(parsed);
            }
            "heading-date-format" => patch.heading_date_format = Some(value.to_string()),
            "locale" => {
                patch.locale = if value == "ambient" {
                    Some(None)
                } else {
                    Some(Some(value.to_string()))
                };
            }
            "journal-note-path" => {
                if value.is_empty() {
                    return Err("Journal note path cannot be empty".to_string());
                }
                patch.journal_note_path = Some(value.to_string());
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = JournalSettings::default();
        assert!(settings.automatic_date_headings);
        assert_eq!(settings.heading_date_format, "YYYY-MM-DD (ddd)");
        assert_eq!(settings.locale, None);
        assert_eq!(settings.journal_note_path, "Journal");
    }

    #[test]
    fn test_load_missing_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings = JournalSettings::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(settings, JournalSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let settings = JournalSettings {
            journal_note_path: "Log".to_string(),
            ..Default::default()
        };
        settings.save(temp_dir.path()).unwrap();

        let loaded = JournalSettings::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("config.json"),
            r#"{ "journal_note_path": "Diary" }"#,
        )
        .unwrap();

        let loaded = JournalSettings::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.journal_note_path, "Diary");
        assert!(loaded.automatic_date_headings);
    }

    #[test]
    fn test_merged_is_pure_and_partial() {
        let base = JournalSettings::default();
        let patch = SettingsPatch {
            automatic_date_headings: Some(false),
            ..Default::default()
        };

        let updated = base.merged(patch);
        assert!(!updated.automatic_date_headings);
        assert_eq!(updated.journal_note_path, base.journal_note_path);
        // The original value is untouched.
        assert!(base.automatic_date_headings);
    }

    #[test]
    fn test_patch_for_bool_rejects_garbage() {
        assert!(JournalSettings::patch_for("automatic-date-headings", "yes").is_err());
        assert!(JournalSettings::patch_for("automatic-date-headings", "false").is_ok());
    }

    #[test]
    fn test_patch_for_locale_ambient_clears() {
        let base = JournalSettings {
            locale: Some("fr-FR".to_string()),
            ..Default::default()
        };
        let patch = JournalSettings::patch_for("locale", "ambient").unwrap();
        assert_eq!(base.merged(patch).locale, None);
    }

    #[test]
    fn test_unknown_key() {
        assert!(JournalSettings::patch_for("nope", "x").is_err());
        assert!(JournalSettings::default().get("nope").is_none());
    }
}
