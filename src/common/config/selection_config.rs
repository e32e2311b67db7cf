use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::common::constants::{
    COLLECTOR_LIMIT_CEILING, DEFAULT_SELECTION_THREADS, FULL_SORT_THRESHOLD, MAX_SELECTION_THREADS,
};
use crate::common::errors::TopKError;

fn default_full_sort_threshold() -> usize {
    FULL_SORT_THRESHOLD
}

fn default_collector_limit_ceiling() -> usize {
    COLLECTOR_LIMIT_CEILING
}

/// Tunables for the selection entry points.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub struct SelectionConfig {
    /// Sources longer than this are fully sorted when the limit covers all of them.
    #[serde(default = "default_full_sort_threshold")]
    #[serde(rename = "full_sort_threshold")]
    pub full_sort_threshold: usize,

    /// Largest limit a stream collector accepts.
    #[serde(default = "default_collector_limit_ceiling")]
    #[serde(rename = "collector_limit")]
    pub collector_limit_ceiling: usize,

    /// Worker threads for parallel selection, `0` picks one per logical core.
    #[serde(default)]
    #[serde(rename = "threads")]
    pub num_threads: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        SelectionConfig {
            full_sort_threshold: FULL_SORT_THRESHOLD,
            collector_limit_ceiling: COLLECTOR_LIMIT_CEILING,
            num_threads: 0,
        }
    }
}

impl SelectionConfig {
    pub fn new(full_sort_threshold: usize, collector_limit_ceiling: usize, num_threads: usize) -> Self {
        SelectionConfig { full_sort_threshold, collector_limit_ceiling, num_threads }
    }

    /// Parse a json config, absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TopKError> {
        let config: SelectionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, TopKError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Thread count with `0` resolved against the machine.
    pub fn effective_threads(&self) -> usize {
        if self.num_threads == 0 {
            *DEFAULT_SELECTION_THREADS
        } else {
            self.num_threads
        }
    }
}

impl Validate for SelectionConfig {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.collector_limit_ceiling == 0 {
            errors.add("collector_limit", ValidationError::new("must be greater than 0"));
        }
        if self.num_threads > MAX_SELECTION_THREADS {
            errors.add("threads", ValidationError::new("must not exceed 1024"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
