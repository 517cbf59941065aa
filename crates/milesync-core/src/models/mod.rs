//! Data models for goals, plans and progress.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from the
//! markdown they render to.
//!
//! # Examples
//!
//! ```rust
//! use milesync_core::models::{GoalType, MonthSkeleton, PlanSkeleton};
//!
//! let skeleton = PlanSkeleton {
//!     months: vec![MonthSkeleton::new("Foundations", &["HTML", "CSS"])],
//! };
//! assert_eq!(skeleton.months[0].topics.len(), 2);
//! assert_eq!(GoalType::from_label("fitness"), GoalType::Fitness);
//! assert_eq!(GoalType::from_label("gardening"), GoalType::Custom);
//! ```

pub mod goal;
pub mod plan;
pub mod progress;
pub mod skeleton;
pub mod status;


pub use goal::{AnswerKind, ClarificationQuestion, ClarificationResponse, Goal};
pub use plan::{DailyTask, DayPlan, GoalPlan, MonthPlan, WeekPlan};
pub use progress::ProgressLog;
pub use skeleton::{MonthSkeleton, PlanSkeleton};
pub use status::{GeneratedVia, GoalStatus, GoalType};
