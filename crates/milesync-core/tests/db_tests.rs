use jiff::{civil::date, Timestamp};
use milesync_core::{
    models::{GeneratedVia, GoalPlan, GoalStatus, GoalType},
    params::{LogProgress, NewGoal},
    Database,
};
use tempfile::TempDir;

fn open() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::new(temp_dir.path().join("test.db")).expect("Failed to open database");
    (temp_dir, db)
}

fn new_goal() -> NewGoal {
    NewGoal {
        title: "Write a novel".to_string(),
        description: None,
        goal_type: GoalType::Creative,
        start_date: date(2025, 1, 1),
        target_date: date(2025, 7, 1),
        total_duration: 181,
        hours_per_day: 1.0,
    }
}

fn empty_plan(goal_id: u64) -> GoalPlan {
    GoalPlan {
        goal_id,
        months: Vec::new(),
        total_months: 0,
        total_weeks: 0,
        total_days: 0,
        total_hours: 0.0,
        generated_at: Timestamp::now(),
        version: 1,
        generated_via: GeneratedVia::Fallback,
        fallback_reason: None,
    }
}

#[test]
fn test_goal_roundtrip_through_sqlite() {
    let (_temp_dir, mut db) = open();
    let created = db.create_goal(&new_goal()).unwrap();
    let loaded = db.get_goal(created.id).unwrap().unwrap();

    assert_eq!(loaded.title, "Write a novel");
    assert_eq!(loaded.goal_type, GoalType::Creative);
    assert_eq!(loaded.status, GoalStatus::Active);
    assert_eq!(loaded.start_date, date(2025, 1, 1));
    assert_eq!(loaded.created_at, created.created_at);
}

#[test]
fn test_plan_upsert_versions() {
    let (_temp_dir, mut db) = open();
    let goal = db.create_goal(&new_goal()).unwrap();

    assert!(db.get_plan(goal.id).unwrap().is_none());

    let mut plan = empty_plan(goal.id);
    plan.version = 1;
    assert_eq!(db.upsert_plan(&plan).unwrap().version, 1);
    assert_eq!(db.upsert_plan(&plan).unwrap().version, 2);

    let mut stored = db.get_plan(goal.id).unwrap().unwrap();
    assert_eq!(stored.version, 2);

    stored.total_hours = 5.0;
    assert!(db.update_plan_structure(&stored).unwrap());
    let reloaded = db.get_plan(goal.id).unwrap().unwrap();
    assert_eq!(reloaded.version, 2);
    assert_eq!(reloaded.total_hours, 5.0);
}

#[test]
fn test_progress_upsert_is_per_day() {
    let (_temp_dir, mut db) = open();
    let goal = db.create_goal(&new_goal()).unwrap();

    let mut log = LogProgress {
        goal_id: goal.id,
        tasks_completed: 1,
        total_tasks: 4,
        ..Default::default()
    };
    let first = db.upsert_progress(&log, date(2025, 1, 5)).unwrap();
    assert_eq!(first.completion_rate, 25.0);

    log.tasks_completed = 4;
    log.notes = Some("Caught up".to_string());
    let second = db.upsert_progress(&log, date(2025, 1, 5)).unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.completion_rate, 100.0);
    assert_eq!(second.notes.as_deref(), Some("Caught up"));

    assert_eq!(db.list_progress(goal.id, None, None).unwrap().len(), 1);
    assert_eq!(db.average_completion_rate(goal.id).unwrap(), 100.0);
    assert_eq!(db.average_completion_rate(goal.id + 1).unwrap(), 0.0);
}

#[test]
fn test_deleted_goal_is_hidden() {
    let (_temp_dir, mut db) = open();
    let goal = db.create_goal(&new_goal()).unwrap();

    assert!(db.delete_goal(goal.id).unwrap());
    assert!(!db.delete_goal(goal.id).unwrap());
    assert!(db.get_goal(goal.id).unwrap().is_none());
    assert!(db.list_goals(None).unwrap().is_empty());
    assert!(!db.update_goal_status(goal.id, GoalStatus::Paused).unwrap());
}
