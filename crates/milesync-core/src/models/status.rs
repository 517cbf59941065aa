//! Enumerations for goal categories, goal lifecycle and plan provenance.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of a goal. Drives prompt wording and the fallback curriculum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum GoalType {
    /// Exams, certifications, coursework
    Academic,
    /// Professional or technical skill
    Skill,
    /// Physical training
    Fitness,
    /// Career move or promotion
    Career,
    /// Art, music, writing
    Creative,
    /// Anything else
    #[default]
    Custom,
}

impl GoalType {
    /// All goal types, in declaration order.
    pub const ALL: [GoalType; 6] = [
        GoalType::Academic,
        GoalType::Skill,
        GoalType::Fitness,
        GoalType::Career,
        GoalType::Creative,
        GoalType::Custom,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Academic => "ACADEMIC",
            GoalType::Skill => "SKILL",
            GoalType::Fitness => "FITNESS",
            GoalType::Career => "CAREER",
            GoalType::Creative => "CREATIVE",
            GoalType::Custom => "CUSTOM",
        }
    }

    /// Lenient conversion: unrecognized labels resolve to [`GoalType::Custom`].
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(GoalType::Custom)
    }
}

impl FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACADEMIC" => Ok(GoalType::Academic),
            "SKILL" => Ok(GoalType::Skill),
            "FITNESS" => Ok(GoalType::Fitness),
            "CAREER" => Ok(GoalType::Career),
            "CREATIVE" => Ok(GoalType::Creative),
            "CUSTOM" => Ok(GoalType::Custom),
            _ => Err(format!("Invalid goal type: {s}")),
        }
    }
}

/// Lifecycle state of a goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum GoalStatus {
    /// Goal is being worked on
    #[default]
    Active,
    /// Goal is on hold
    Paused,
    /// Goal was achieved
    Completed,
    /// Goal was abandoned
    Cancelled,
}

impl GoalStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "ACTIVE",
            GoalStatus::Paused => "PAUSED",
            GoalStatus::Completed => "COMPLETED",
            GoalStatus::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(GoalStatus::Active),
            "PAUSED" => Ok(GoalStatus::Paused),
            "COMPLETED" => Ok(GoalStatus::Completed),
            "CANCELLED" | "CANCELED" => Ok(GoalStatus::Cancelled),
            _ => Err(format!("Invalid goal status: {s}")),
        }
    }
}

/// Which path produced a plan's month/topic skeleton.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedVia {
    /// Skeleton came from the generative text service
    Ai,
    /// Skeleton came from the canned per-type curriculum
    Fallback,
}

impl GeneratedVia {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratedVia::Ai => "ai",
            GeneratedVia::Fallback => "fallback",
        }
    }
}
