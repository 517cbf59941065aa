#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use milesync_core::{
    params::CreateGoal, AiConfig, AiError, TextGenerator, Tracker, TrackerBuilder,
};
use tempfile::TempDir;

/// Generator that answers every prompt with a fixed reply.
pub struct Canned(pub &'static str);

#[async_trait]
impl TextGenerator for Canned {
    fn provider(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        Ok(self.0.to_string())
    }
}

/// Generator that always fails like an unreachable service.
pub struct Unreachable;

#[async_trait]
impl TextGenerator for Unreachable {
    fn provider(&self) -> &str {
        "unreachable"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        Err(AiError::Connection("connection refused".to_string()))
    }
}

/// Helper function to create a tracker backed by a temporary database.
pub async fn create_test_tracker(generator: Arc<dyn TextGenerator>) -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_ai_config(AiConfig::default().offline())
        .with_generator(generator)
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// A goal starting 2025-01-01.
pub fn goal_params(goal_type: &str, target_date: &str, hours_per_day: f64) -> CreateGoal {
    CreateGoal {
        title: "Learn full-stack development".to_string(),
        description: Some("React, Node and Postgres".to_string()),
        template: None,
        goal_type: Some(goal_type.to_string()),
        start_date: Some("2025-01-01".to_string()),
        target_date: Some(target_date.to_string()),
        hours_per_day: Some(hours_per_day),
    }
}
