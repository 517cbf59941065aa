//! Month/topic outline that the expander turns into a dated plan.

use serde::{Deserialize, Serialize};

/// A month's title and the topics to cover during it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthSkeleton {
    pub title: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl MonthSkeleton {
    pub fn new(title: impl Into<String>, topics: &[&str]) -> Self {
        Self {
            title: title.into(),
            topics: topics.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// `{ "months": [{ "title": ..., "topics": [...] }] }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlanSkeleton {
    pub months: Vec<MonthSkeleton>,
}
