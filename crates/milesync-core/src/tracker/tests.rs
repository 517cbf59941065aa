//! Tests for the tracker module.

use tempfile::TempDir;

use super::*;
use crate::{
    config::AiConfig,
    models::{ClarificationResponse, GeneratedVia, GoalStatus, GoalType},
    params::{CreateGoal, Id, ListGoals, SaveClarification, UpdateGoalStatus},
};

/// Helper function to create an offline test tracker
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_ai_config(AiConfig::default().offline())
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn goal_params(title: &str) -> CreateGoal {
    CreateGoal {
        title: title.to_string(),
        description: Some("Test Description".to_string()),
        template: None,
        goal_type: Some("SKILL".to_string()),
        start_date: Some("2025-01-01".to_string()),
        target_date: Some("2025-03-02".to_string()),
        hours_per_day: Some(2.0),
    }
}

#[tokio::test]
async fn test_builder_uses_offline_generator_without_key() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    assert_eq!(tracker.provider(), "offline");
    assert!(tracker.database_path().ends_with("test.db"));
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("goals.db");
    TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_ai_config(AiConfig::default().offline())
        .build()
        .await
        .expect("Failed to create tracker");
    assert!(db_path.exists());
}

#[tokio::test]
async fn test_create_and_get_goal() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let goal = tracker
        .create_goal(&goal_params("Learn Rust"))
        .await
        .expect("Failed to create goal");

    assert_eq!(goal.title, "Learn Rust");
    assert_eq!(goal.goal_type, GoalType::Skill);
    assert_eq!(goal.status, GoalStatus::Active);
    assert_eq!(goal.total_duration, 60);
    assert_eq!(goal.current_progress, 0.0);

    let fetched = tracker
        .get_goal(&Id { id: goal.id })
        .await
        .expect("Failed to get goal")
        .expect("Goal should exist");
    assert_eq!(fetched, goal);

    let missing = tracker.get_goal(&Id { id: 999 }).await.expect("Query failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_create_goal_validation() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let mut params = goal_params("Bad");
    params.target_date = Some("2024-12-01".to_string());
    let err = tracker.create_goal(&params).await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));

    let goals = tracker.list_goals(&ListGoals::default()).await.unwrap();
    assert!(goals.is_empty());
}

#[tokio::test]
async fn test_list_goals_newest_first_with_filter() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let first = tracker.create_goal(&goal_params("First")).await.unwrap();
    let second = tracker.create_goal(&goal_params("Second")).await.unwrap();

    let goals = tracker.list_goals(&ListGoals::default()).await.unwrap();
    let ids: Vec<u64> = goals.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    tracker
        .update_goal_status(&UpdateGoalStatus {
            id: first.id,
            status: "paused".to_string(),
        })
        .await
        .unwrap();

    let paused = tracker
        .list_goals(&ListGoals {
            status: Some("PAUSED".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(paused.len(), 1);
    assert_eq!(paused[0].id, first.id);
    assert_eq!(paused[0].status, GoalStatus::Paused);
}

#[tokio::test]
async fn test_update_status_of_missing_goal() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let err = tracker
        .update_goal_status(&UpdateGoalStatus {
            id: 42,
            status: "COMPLETED".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::GoalNotFound { id: 42 }));
}

#[tokio::test]
async fn test_soft_delete_hides_goal() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker.create_goal(&goal_params("Temporary")).await.unwrap();

    let deleted = tracker.delete_goal(&Id { id: goal.id }).await.unwrap();
    assert_eq!(deleted.id, goal.id);

    assert!(tracker.get_goal(&Id { id: goal.id }).await.unwrap().is_none());
    assert!(tracker.list_goals(&ListGoals::default()).await.unwrap().is_empty());

    let err = tracker.delete_goal(&Id { id: goal.id }).await.unwrap_err();
    assert!(matches!(err, TrackerError::GoalNotFound { .. }));
}

#[tokio::test]
async fn test_clarification_roundtrip_and_fallback_questions() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker.create_goal(&goal_params("Learn Rust")).await.unwrap();

    let questions = tracker
        .clarification_questions(&Id { id: goal.id })
        .await
        .unwrap();
    assert_eq!(questions.generated_via, GeneratedVia::Fallback);
    assert_eq!(questions.questions.len(), 3);

    assert!(tracker
        .get_clarification(&Id { id: goal.id })
        .await
        .unwrap()
        .is_empty());

    let answers = vec![
        ClarificationResponse {
            question: questions.questions[0].question.clone(),
            answer: "Some Python".to_string(),
        },
        ClarificationResponse {
            question: questions.questions[1].question.clone(),
            answer: "A CLI tool".to_string(),
        },
    ];
    tracker
        .save_clarification(&SaveClarification {
            goal_id: goal.id,
            responses: answers.clone(),
        })
        .await
        .unwrap();

    // Saving again replaces the earlier answers.
    let replacement = vec![answers[1].clone()];
    tracker
        .save_clarification(&SaveClarification {
            goal_id: goal.id,
            responses: replacement.clone(),
        })
        .await
        .unwrap();

    let stored = tracker.get_clarification(&Id { id: goal.id }).await.unwrap();
    assert_eq!(stored, replacement);
}

#[tokio::test]
async fn test_clarification_for_missing_goal() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let err = tracker
        .save_clarification(&SaveClarification {
            goal_id: 5,
            responses: vec![ClarificationResponse {
                question: "Q".to_string(),
                answer: "A".to_string(),
            }],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::GoalNotFound { id: 5 }));
}
