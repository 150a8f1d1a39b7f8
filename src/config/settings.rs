//! User settings for the expense tracker
//!
//! Manages display preferences and the names of the ledger sheets.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in replies
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used in replies (strftime format)
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,

    /// Name of the sheet holding expense rows
    #[serde(default = "default_expenses_sheet")]
    pub expenses_sheet: String,

    /// Name of the sheet holding salary rows
    #[serde(default = "default_salary_sheet")]
    pub salary_sheet: String,

    /// Description used when `/addsalary` is given none
    #[serde(default = "default_salary_description")]
    pub default_salary_description: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_display_date_format() -> String {
    "%d %b %Y".to_string()
}

fn default_expenses_sheet() -> String {
    "Expenses".to_string()
}

fn default_salary_sheet() -> String {
    "Salary".to_string()
}

fn default_salary_description() -> String {
    "Monthly Salary".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            display_date_format: default_display_date_format(),
            expenses_sheet: default_expenses_sheet(),
            salary_sheet: default_salary_sheet(),
            default_salary_description: default_salary_description(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings that would make the two sheets collide
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.expenses_sheet.trim().is_empty() || self.salary_sheet.trim().is_empty() {
            return Err(TrackerError::Config("Sheet names cannot be empty".into()));
        }
        if self.expenses_sheet.eq_ignore_ascii_case(&self.salary_sheet) {
            return Err(TrackerError::Config(format!(
                "Expense and salary sheets must differ (both are '{}')",
                self.expenses_sheet
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.expenses_sheet, "Expenses");
        assert_eq!(settings.salary_sheet, "Salary");
        assert_eq!(settings.default_salary_description, "Monthly Salary");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(paths.is_initialized());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.display_date_format, "%d %b %Y");
    }

    #[test]
    fn test_colliding_sheet_names_rejected() {
        let mut settings = Settings::default();
        settings.salary_sheet = "expenses".into();
        assert!(settings.validate().is_err());
    }
}
