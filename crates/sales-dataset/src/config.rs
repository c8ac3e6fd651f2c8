//! Dataset location and schema settings

use crate::model::REQUIRED_COLUMNS;
use crate::store::CsvSource;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Environment variable overriding [`DatasetSettings::file_name`]
pub const DATASET_FILE_ENV: &str = "DATASET_FILE_NAME";

/// Where the dataset lives and which columns it must have
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub file_name: PathBuf,
    pub expected_columns: BTreeSet<String>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from("sales_data.csv"),
            expected_columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl DatasetSettings {
    /// Defaults, with the file name taken from `DATASET_FILE_NAME` when set
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(file_name) = lookup(DATASET_FILE_ENV).filter(|v| !v.is_empty()) {
            self.file_name = PathBuf::from(file_name);
        }
        self
    }

    /// The CSV source these settings describe
    pub fn source(&self) -> CsvSource {
        CsvSource::new(self.file_name.clone(), self.expected_columns.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DatasetSettings::default();
        assert_eq!(settings.file_name, PathBuf::from("sales_data.csv"));
        assert_eq!(settings.expected_columns.len(), 6);
        assert!(settings.expected_columns.contains("price_per_unit"));
    }

    #[test]
    fn test_env_override() {
        let settings = DatasetSettings::default().with_env_overrides(|key| {
            (key == DATASET_FILE_ENV).then(|| "/data/march.csv".to_string())
        });
        assert_eq!(settings.file_name, PathBuf::from("/data/march.csv"));

        let settings = DatasetSettings::default().with_env_overrides(|_| Some(String::new()));
        assert_eq!(settings.file_name, PathBuf::from("sales_data.csv"));
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: DatasetSettings =
            serde_json::from_str(r#"{"file_name": "other.csv"}"#).unwrap();
        assert_eq!(settings.file_name, PathBuf::from("other.csv"));
        assert_eq!(settings.expected_columns, DatasetSettings::default().expected_columns);
    }

    #[test]
    fn test_source() {
        let source = DatasetSettings::default().source();
        assert_eq!(source.path, PathBuf::from("sales_data.csv"));
    }
}
