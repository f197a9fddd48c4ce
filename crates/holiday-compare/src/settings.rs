//! Environment-driven comparison settings.
use std::collections::BTreeMap;

use holiday_browse::DurationOrder;
use thiserror::Error;

pub const COMPARE_MAX_ENV: &str = "HOLIDAY_COMPARE_MAX";
pub const DURATION_SORT_ENV: &str = "HOLIDAY_DURATION_SORT";
pub const STORAGE_KEY_ENV: &str = "HOLIDAY_COMPARE_STORAGE_KEY";

pub const DEFAULT_MAX_COMPARE: usize = 4;
pub const MAX_COMPARE_CEILING: usize = 16;
pub const DEFAULT_STORAGE_KEY: &str = "packagesToCompare";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("HOLIDAY_COMPARE_MAX must be an integer in 1..=16, got '{value}'")]
    InvalidMaxCompare { value: String },
    #[error("HOLIDAY_DURATION_SORT must be one of asc,ascending,desc,descending, got '{value}'")]
    InvalidDurationOrder { value: String },
}

/// Tunables shared by the selection set, persistence adapter, and sort parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareSettings {
    /// Capacity of the selection set.
    pub max_compare: usize,
    /// Direction used for the bare `duration` sort key.
    pub duration_order: DurationOrder,
    /// Key the selection is persisted under.
    pub storage_key: String,
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            max_compare: DEFAULT_MAX_COMPARE,
            duration_order: DurationOrder::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CompareSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let env = std::env::vars().collect::<BTreeMap<_, _>>();
        Self::from_env_map(&env)
    }

    pub fn from_env_map(env: &BTreeMap<String, String>) -> Result<Self, SettingsError> {
        let defaults = Self::default();

        let max_compare = match non_blank(env, COMPARE_MAX_ENV) {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|value| (1..=MAX_COMPARE_CEILING).contains(value))
                .ok_or_else(|| SettingsError::InvalidMaxCompare {
                    value: raw.to_string(),
                })?,
            None => defaults.max_compare,
        };

        let duration_order = match non_blank(env, DURATION_SORT_ENV) {
            Some(raw) => {
                DurationOrder::parse(raw).ok_or_else(|| SettingsError::InvalidDurationOrder {
                    value: raw.to_string(),
                })?
            }
            None => defaults.duration_order,
        };

        let storage_key = non_blank(env, STORAGE_KEY_ENV)
            .map(str::to_string)
            .unwrap_or(defaults.storage_key);

        Ok(Self {
            max_compare,
            duration_order,
            storage_key,
        })
    }

    pub fn with_max_compare(mut self, max_compare: usize) -> Self {
        self.max_compare = max_compare.clamp(1, MAX_COMPARE_CEILING);
        self
    }
}

fn non_blank<'a>(env: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    env.get(key)
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
