use jiff::{civil::date, Timestamp};

use super::*;
use crate::{
    clarify::{fallback_questions, Questions},
    models::{
        DailyTask, DayPlan, GeneratedVia, Goal, GoalPlan, GoalStatus, GoalType, MonthPlan,
        ProgressLog, WeekPlan,
    },
    templates::{templates_by_type, TEMPLATES},
    tracker::plan_ops::{DailyGuidance, DayTasks, GoalGuidance},
};

fn goal() -> Goal {
    let now = Timestamp::now();
    Goal {
        id: 4,
        title: "Learn | Rust".to_string(),
        description: Some("Systems programming".to_string()),
        goal_type: GoalType::Skill,
        status: GoalStatus::Active,
        start_date: date(2025, 1, 1),
        target_date: date(2025, 3, 2),
        total_duration: 60,
        hours_per_day: 1.5,
        current_progress: 37.5,
        created_at: now,
        updated_at: now,
    }
}

fn task(id: &str, completed: bool) -> DailyTask {
    DailyTask {
        id: id.to_string(),
        title: "Learn: Ownership".to_string(),
        description: "Study the core ideas of Ownership".to_string(),
        duration: 0.9,
        completed,
        time_block: None,
        resources: None,
        success_criteria: None,
    }
}

fn day() -> DayPlan {
    DayPlan {
        day_number: 1,
        date: date(2025, 1, 1),
        title: "Day 1: Ownership".to_string(),
        focus: "Ownership".to_string(),
        tasks: vec![task("m1w1d1t1", true), task("m1w1d1t2", false)],
        total_hours: 1.5,
        completed: false,
    }
}

fn plan() -> GoalPlan {
    GoalPlan {
        goal_id: 4,
        months: vec![MonthPlan {
            month_number: 1,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 1, 1),
            title: "Basics".to_string(),
            milestone: "Complete Basics".to_string(),
            weeks: vec![WeekPlan {
                week_number: 1,
                start_date: date(2025, 1, 1),
                end_date: date(2025, 1, 1),
                title: "Week 1: Ownership".to_string(),
                objective: "Build working knowledge of Ownership".to_string(),
                days: vec![day()],
                total_hours: 1.5,
                completed_days: 0,
            }],
            total_hours: 1.5,
            completed_weeks: 0,
        }],
        total_months: 1,
        total_weeks: 1,
        total_days: 1,
        total_hours: 1.5,
        generated_at: Timestamp::now(),
        version: 2,
        generated_via: GeneratedVia::Fallback,
        fallback_reason: Some("Generative text service is not configured".to_string()),
    }
}

#[test]
fn test_goal_display() {
    let output = goal().to_string();
    assert!(output.starts_with("# 4. Learn | Rust\n"));
    assert!(output.contains("- Type: SKILL"));
    assert!(output.contains("- Dates: 2025-01-01 → 2025-03-02 (60 days)"));
    assert!(output.contains("- Daily commitment: 1.5h"));
    assert!(output.contains("- Progress: 37.5%"));
    assert!(output.ends_with("Systems programming\n"));
}

#[test]
fn test_goals_table_escapes_pipes() {
    let output = Goals(vec![goal()]).to_string();
    assert!(output.contains("| 4 | Learn \\| Rust | SKILL | ACTIVE | 2025-03-02 | 38% |"));
}

#[test]
fn test_day_display_checkboxes() {
    let output = day().to_string();
    assert!(output.contains("### Day 1: Ownership (2025-01-01)"));
    assert!(output.contains("- [x] **Learn: Ownership** `m1w1d1t1` (0.9h)"));
    assert!(output.contains("- [ ] **Learn: Ownership** `m1w1d1t2` (0.9h)"));
}

#[test]
fn test_plan_display_summary() {
    let output = plan().to_string();
    assert!(output.starts_with("# Plan for goal 4 (v2)"));
    assert!(output.contains("- Length: 1 months, 1 weeks, 1 days"));
    assert!(output.contains("- Tasks done: 1/2"));
    assert!(output.contains("via fallback"));
    assert!(output.contains("- Fallback reason: Generative text service is not configured"));
    assert!(output.contains("## Month 1: Basics"));
    assert!(output.contains("0/1 days done"));
}

#[test]
fn test_create_plan_result() {
    let output = CreateResult::new(plan()).to_string();
    assert!(output.starts_with("Generated plan v2 for goal 4: 1 days across 1 months"));
}

#[test]
fn test_daily_guidance_display() {
    let guidance = DailyGuidance {
        date: date(2025, 1, 1),
        total_goals: 3,
        goals: vec![GoalGuidance {
            goal_id: 4,
            goal_title: "Learn Rust".to_string(),
            goal_type: GoalType::Skill,
            day: day(),
        }],
    };
    let output = guidance.to_string();
    assert!(output.starts_with("# Today's guidance (2025-01-01)"));
    assert!(output.contains("1/3 active goals have tasks today."));
    assert!(output.contains("## Goal 4: Learn Rust (SKILL)"));
    assert!(output.contains("### Day 1: Ownership (2025-01-01)"));

    let empty = DailyGuidance {
        date: date(2025, 1, 1),
        total_goals: 0,
        goals: Vec::new(),
    };
    assert_eq!(
        empty.to_string(),
        "No active goals found. Create a goal to get started!\n"
    );
}

#[test]
fn test_templates_table() {
    let output = Templates(TEMPLATES.iter().collect()).to_string();
    assert!(output.contains("| academic-exam | Academic Exam Preparation | ACADEMIC | 90 | 3h |"));
    assert!(output.contains("| skill-development | Skill Development | SKILL | 60 | 2h |"));

    let custom = Templates(templates_by_type(GoalType::Custom).collect()).to_string();
    assert_eq!(custom, "No templates found.\n");
}

#[test]
fn test_day_tasks_outside_plan() {
    let result = DayTasks {
        goal_id: 4,
        date: date(2026, 1, 1),
        day: None,
    };
    assert_eq!(
        result.to_string(),
        "Nothing scheduled for goal 4 on 2026-01-01.\n"
    );
}

#[test]
fn test_progress_logs_display() {
    let now = Timestamp::now();
    let log = ProgressLog {
        id: 1,
        goal_id: 4,
        log_date: date(2025, 1, 2),
        tasks_completed: 1,
        total_tasks: 2,
        hours_logged: 1.0,
        completion_rate: 50.0,
        notes: Some("Good session".to_string()),
        blockers: Some("Borrow checker".to_string()),
        created_at: now,
        updated_at: now,
    };
    let output = ProgressLogs(vec![log]).to_string();
    assert!(output.starts_with("### 2025-01-02: 1/2 tasks (50%), 1h"));
    assert!(output.contains("**Blockers:** Borrow checker"));
    assert_eq!(ProgressLogs(Vec::new()).to_string(), "No progress logged.\n");
}

#[test]
fn test_fallback_questions_display() {
    let questions = Questions {
        questions: fallback_questions(GoalType::Fitness),
        generated_via: GeneratedVia::Fallback,
    };
    let output = questions.to_string();
    assert!(output.contains("q1. **How would you describe your current fitness level?**"));
    assert!(output.contains("_Standard questions for this goal type._"));
}
