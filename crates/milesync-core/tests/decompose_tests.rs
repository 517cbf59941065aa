use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use jiff::civil::{date, Date};
use milesync_core::{
    decompose::{expand, fallback_skeleton},
    models::{MonthSkeleton, PlanSkeleton},
    AiError, Decomposer, DecompositionInput, GeneratedVia, GoalPlan, GoalType, MonthPlan,
    TextGenerator, Timeline,
};
use proptest::prelude::*;

struct Down;

#[async_trait]
impl TextGenerator for Down {
    fn provider(&self) -> &str {
        "down"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        Err(AiError::Timeout)
    }
}

/// Checks date contiguity, numbering, hour conservation and id uniqueness.
fn check_months(months: &[MonthPlan], start: Date, total_days: u32, hours: f64) {
    let mut expected_date = start;
    let mut expected_number = 1;
    let mut ids = HashSet::new();

    for month in months {
        assert_eq!(month.start_date, expected_date);
        let mut month_hours = 0.0;
        for week in &month.weeks {
            assert!(!week.days.is_empty() && week.days.len() <= 7);
            let mut week_hours = 0.0;
            for day in &week.days {
                assert_eq!(day.date, expected_date);
                assert_eq!(day.day_number, expected_number);
                assert_eq!(day.tasks.len(), 2);
                assert_eq!(day.total_hours, hours);
                let task_hours: f64 = day.tasks.iter().map(|t| t.duration).sum();
                assert!((task_hours - hours).abs() < 1e-9);
                for task in &day.tasks {
                    assert!(ids.insert(task.id.clone()), "duplicate id {}", task.id);
                }
                week_hours += day.total_hours;
                expected_date = expected_date.tomorrow().unwrap();
                expected_number += 1;
            }
            assert!((week.total_hours - week_hours).abs() < 1e-9);
            month_hours += week.total_hours;
        }
        assert!((month.total_hours - month_hours).abs() < 1e-9);
        assert_eq!(month.end_date.tomorrow().unwrap(), expected_date);
    }

    assert_eq!(expected_number - 1, total_days);
}

fn topics() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,12}", 0..10)
}

fn skeleton() -> impl Strategy<Value = PlanSkeleton> {
    prop::collection::vec(("[A-Za-z ]{1,20}", topics()), 0..8).prop_map(|months| PlanSkeleton {
        months: months
            .into_iter()
            .map(|(title, topics)| MonthSkeleton { title, topics })
            .collect(),
    })
}

proptest! {
    #[test]
    fn prop_expanded_plans_are_well_formed(
        skeleton in skeleton(),
        total_days in 1u32..400,
        hours in 0.25f64..12.0,
        offset in 0i32..3000,
    ) {
        let start = date(2020, 1, 1).checked_add(jiff::Span::new().days(offset)).unwrap();
        let timeline = Timeline::calculate(start, start, total_days);
        let months = expand(&skeleton, timeline.total_months, start, total_days, hours).unwrap();
        check_months(&months, start, total_days, hours);
    }

    #[test]
    fn prop_fallback_covers_every_type(
        type_index in 0usize..6,
        total_days in 1u32..400,
    ) {
        let goal_type = GoalType::ALL[type_index];
        let timeline = Timeline::calculate(date(2025, 1, 1), date(2025, 1, 1), total_days);
        let skeleton = fallback_skeleton(goal_type, timeline.total_months);
        prop_assert_eq!(skeleton.months.len() as u32, timeline.total_months);

        let months = expand(&skeleton, timeline.total_months, date(2025, 1, 1), total_days, 1.0).unwrap();
        check_months(&months, date(2025, 1, 1), total_days, 1.0);
    }
}

fn input(goal_type: GoalType, total_duration: u32, hours_per_day: f64) -> DecompositionInput {
    DecompositionInput {
        goal_id: 1,
        title: "Get stronger".to_string(),
        description: None,
        goal_type,
        start_date: date(2025, 2, 20),
        target_date: date(2025, 2, 20),
        total_duration,
        hours_per_day,
        clarification_responses: Vec::new(),
    }
}

fn check_plan(plan: &GoalPlan, input: &DecompositionInput) {
    check_months(&plan.months, input.start_date, input.total_duration, input.hours_per_day);
    assert_eq!(plan.total_days, input.total_duration);
    assert_eq!(plan.total_months as usize, plan.months.len());
    assert_eq!(
        plan.total_weeks as usize,
        plan.months.iter().map(|m| m.weeks.len()).sum::<usize>()
    );
}

#[tokio::test]
async fn test_fitness_fallback_plan_is_well_formed() {
    let decomposer = Decomposer::new(Arc::new(Down));
    for days in [1, 6, 7, 8, 29, 30, 31, 59, 60, 61, 180, 365] {
        let input = input(GoalType::Fitness, days, 1.5);
        let plan = decomposer.decompose(&input).await.unwrap();
        assert_eq!(plan.generated_via, GeneratedVia::Fallback);
        check_plan(&plan, &input);
    }
}

#[tokio::test]
async fn test_single_day_plan() {
    let decomposer = Decomposer::new(Arc::new(Down));
    let input = input(GoalType::Creative, 1, 3.0);
    let plan = decomposer.decompose(&input).await.unwrap();

    assert_eq!(plan.months.len(), 1);
    assert_eq!(plan.months[0].weeks.len(), 1);
    assert_eq!(plan.months[0].weeks[0].days.len(), 1);
    assert_eq!(plan.tasks().count(), 2);
    let sum: f64 = plan.tasks().map(|t| t.duration).sum();
    assert!((sum - 3.0).abs() < 1e-9);
}

#[test]
fn test_leap_day_is_covered() {
    let skeleton = PlanSkeleton {
        months: vec![MonthSkeleton::new("Leap", &["A"])],
    };
    let months = expand(&skeleton, 1, date(2024, 2, 27), 4, 1.0).unwrap();
    let dates: Vec<String> = months[0].weeks[0]
        .days
        .iter()
        .map(|d| d.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]);
}
