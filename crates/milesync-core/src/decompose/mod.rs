//! Goal decomposition pipeline.
//!
//! A goal's date range and daily budget go in, a dated month → week → day →
//! task tree comes out:
//!
//! 1. [`timeline`] sizes the range into day/week/month counts.
//! 2. [`structure`] asks the generative text service for a month/topic
//!    skeleton, bounded by a timeout.
//! 3. On any failure there, [`fallback`] supplies a canned skeleton for the
//!    goal type.
//! 4. [`expander`] turns whichever skeleton won into the full plan.
//!
//! Generative failures never reach the caller. They are logged and recorded
//! on the plan as `fallback_reason`, and the plan is marked
//! [`GeneratedVia::Fallback`].

use std::{sync::Arc, time::Duration};

use jiff::{civil::Date, Timestamp};
use log::{debug, warn};

use crate::{
    ai::TextGenerator,
    config::DEFAULT_TIMEOUT,
    error::{Result, TrackerError},
    models::{
        ClarificationResponse, GeneratedVia, Goal, GoalPlan, GoalType, MonthPlan, PlanSkeleton,
    },
};

pub mod expander;
pub mod fallback;
pub mod structure;
pub mod timeline;


pub use expander::expand;
pub use fallback::fallback_skeleton;
pub use structure::StructureGenerationError;
pub use timeline::Timeline;

use structure::{build_context, request_skeleton, StructureRequest};

/// Everything the pipeline needs to know about a goal.
#[derive(Debug, Clone)]
pub struct DecompositionInput {
    pub goal_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub start_date: Date,
    pub target_date: Date,
    /// Day count, taken as given
    pub total_duration: u32,
    pub hours_per_day: f64,
    pub clarification_responses: Vec<ClarificationResponse>,
}

impl DecompositionInput {
    /// Build the input for a stored goal and its clarification answers.
    pub fn from_goal(goal: &Goal, clarification_responses: Vec<ClarificationResponse>) -> Self {
        Self {
            goal_id: goal.id,
            title: goal.title.clone(),
            description: goal.description.clone(),
            goal_type: goal.goal_type,
            start_date: goal.start_date,
            target_date: goal.target_date,
            total_duration: goal.total_duration,
            hours_per_day: goal.hours_per_day,
            clarification_responses,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.total_duration == 0 {
            return Err(TrackerError::invalid_input("total_duration")
                .with_reason("Duration must be at least one day"));
        }
        if !self.hours_per_day.is_finite() || self.hours_per_day <= 0.0 {
            return Err(TrackerError::invalid_input("hours_per_day")
                .with_reason("Hours per day must be a positive number"));
        }
        Ok(())
    }
}

/// Runs the decomposition pipeline against a text generator.
///
/// Holds no per-goal state; one instance can serve concurrent decompositions.
#[derive(Clone)]
pub struct Decomposer {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl Decomposer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Bound the skeleton request. Expiry counts as a generative failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Decompose a goal into a full plan.
    ///
    /// The returned plan has `version` 1; storage bumps it on regeneration.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::InvalidInput`] if `total_duration` is zero or
    ///   `hours_per_day` is not a positive finite number
    /// - [`TrackerError::DateArithmetic`] if the plan would run past the
    ///   supported calendar range
    pub async fn decompose(&self, input: &DecompositionInput) -> Result<GoalPlan> {
        input.validate()?;

        let timeline = Timeline::calculate(input.start_date, input.target_date, input.total_duration);
        let context = build_context(&input.clarification_responses);
        let request = StructureRequest {
            title: &input.title,
            description: input.description.as_deref(),
            goal_type: input.goal_type,
            total_days: timeline.total_days,
            total_months: timeline.total_months,
            hours_per_day: input.hours_per_day,
            start_date: timeline.start_date,
            end_date: timeline.end_date,
            context: &context,
        };

        let (skeleton, generated_via, fallback_reason) = match self.request(&request).await {
            Ok(skeleton) => {
                debug!(
                    "Goal {}: {} returned {} skeleton months",
                    input.goal_id,
                    self.generator.provider(),
                    skeleton.months.len()
                );
                (skeleton, GeneratedVia::Ai, None)
            }
            Err(e) => {
                warn!(
                    "Goal {}: using fallback plan for {}: {e}",
                    input.goal_id,
                    input.goal_type.as_str()
                );
                let skeleton = fallback_skeleton(input.goal_type, timeline.total_months);
                (skeleton, GeneratedVia::Fallback, Some(e.to_string()))
            }
        };

        let months = expand(
            &skeleton,
            timeline.total_months,
            timeline.start_date,
            timeline.total_days,
            input.hours_per_day,
        )?;

        Ok(envelope(input.goal_id, months, generated_via, fallback_reason))
    }

    async fn request(
        &self,
        request: &StructureRequest<'_>,
    ) -> std::result::Result<PlanSkeleton, StructureGenerationError> {
        tokio::time::timeout(self.timeout, request_skeleton(self.generator.as_ref(), request))
            .await
            .map_err(|_| StructureGenerationError::Timeout(self.timeout))?
    }
}

/// Wrap expanded months with totals counted from the tree itself.
fn envelope(
    goal_id: u64,
    months: Vec<MonthPlan>,
    generated_via: GeneratedVia,
    fallback_reason: Option<String>,
) -> GoalPlan {
    let total_weeks = months.iter().map(|m| m.weeks.len()).sum::<usize>() as u32;
    let total_days = months
        .iter()
        .flat_map(|m| m.weeks.iter())
        .map(|w| w.days.len())
        .sum::<usize>() as u32;
    let total_hours = months.iter().map(|m| m.total_hours).sum();

    GoalPlan {
        goal_id,
        total_months: months.len() as u32,
        total_weeks,
        total_days,
        total_hours,
        months,
        generated_at: Timestamp::now(),
        version: 1,
        generated_via,
        fallback_reason,
    }
}
