//! Markdown display for models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Lists and operation outcomes get small wrapper types so the same data can
//! be framed differently depending on context.
//!
//! ```rust
//! use milesync_core::display::Goals;
//!
//! let output = Goals(Vec::new()).to_string();
//! assert_eq!(output, "No goals found.\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

#[cfg(test)]
mod tests;

pub use collections::{Goals, ProgressLogs, Templates};
pub use datetime::{Hours, LocalDateTime};
pub use results::{CreateResult, DeleteResult, SavedAnswers, UpdateResult};
