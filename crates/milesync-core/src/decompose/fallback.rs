//! Canned skeletons used when the generative path fails.

use crate::models::{GoalType, MonthSkeleton, PlanSkeleton};

/// A labelled set of topics for one half of a plan.
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub label: &'static str,
    pub topics: [&'static str; 4],
}

/// Early and late phase for a goal type.
pub fn phases(goal_type: GoalType) -> (Phase, Phase) {
    match goal_type {
        GoalType::Academic => (
            Phase {
                label: "Foundations",
                topics: [
                    "Syllabus review",
                    "Core concepts",
                    "Note consolidation",
                    "Practice problems",
                ],
            },
            Phase {
                label: "Mastery",
                topics: [
                    "Advanced topics",
                    "Past papers",
                    "Timed practice",
                    "Final revision",
                ],
            },
        ),
        GoalType::Skill => (
            Phase {
                label: "Fundamentals",
                topics: [
                    "Tooling setup",
                    "Basic techniques",
                    "Guided exercises",
                    "Small project",
                ],
            },
            Phase {
                label: "Applied Practice",
                topics: [
                    "Intermediate techniques",
                    "Real-world project",
                    "Code and peer review",
                    "Portfolio polish",
                ],
            },
        ),
        GoalType::Fitness => (
            Phase {
                label: "Base Building",
                topics: [
                    "Mobility and warm-up",
                    "Form and technique",
                    "Endurance base",
                    "Recovery habits",
                ],
            },
            Phase {
                label: "Progression",
                topics: [
                    "Progressive overload",
                    "Interval training",
                    "Strength benchmarks",
                    "Performance testing",
                ],
            },
        ),
        GoalType::Career => (
            Phase {
                label: "Positioning",
                topics: [
                    "Skills gap analysis",
                    "Resume and profile update",
                    "Networking outreach",
                    "Target role research",
                ],
            },
            Phase {
                label: "Execution",
                topics: [
                    "Applications",
                    "Interview preparation",
                    "Mock interviews",
                    "Offer evaluation",
                ],
            },
        ),
        GoalType::Creative => (
            Phase {
                label: "Exploration",
                topics: [
                    "Study of references",
                    "Technique drills",
                    "Daily sketches",
                    "Style experiments",
                ],
            },
            Phase {
                label: "Creation",
                topics: [
                    "Project planning",
                    "Main piece production",
                    "Feedback and iteration",
                    "Sharing the work",
                ],
            },
        ),
        GoalType::Custom => (
            Phase {
                label: "Getting Started",
                topics: [
                    "Define success",
                    "Research and planning",
                    "First steps",
                    "Build the habit",
                ],
            },
            Phase {
                label: "Following Through",
                topics: [
                    "Deepen the work",
                    "Overcome blockers",
                    "Measure progress",
                    "Wrap up and reflect",
                ],
            },
        ),
    }
}

/// Build a skeleton of exactly `month_count` months for `goal_type`.
///
/// The first `ceil(month_count / 2)` months use the early phase and the rest
/// use the late phase. Callers holding a free-form label should resolve it
/// with [`GoalType::from_label`] first, which maps unknown labels to
/// [`GoalType::Custom`].
pub fn fallback_skeleton(goal_type: GoalType, month_count: u32) -> PlanSkeleton {
    let (early, late) = phases(goal_type);
    let early_months = month_count.div_ceil(2);

    let months = (0..month_count)
        .map(|i| {
            let phase = if i < early_months { early } else { late };
            MonthSkeleton::new(format!("Phase {}: {}", i + 1, phase.label), &phase.topics)
        })
        .collect();

    PlanSkeleton { months }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_distinct_phases() {
        for goal_type in GoalType::ALL {
            let (early, late) = phases(goal_type);
            assert_ne!(early.label, late.label, "{goal_type:?}");
            assert!(early.topics.iter().all(|t| !t.is_empty()));
            assert!(late.topics.iter().all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn test_phase_split() {
        let skeleton = fallback_skeleton(GoalType::Fitness, 3);
        let titles: Vec<&str> = skeleton.months.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Phase 1: Base Building",
                "Phase 2: Base Building",
                "Phase 3: Progression",
            ]
        );
        assert_eq!(skeleton.months[2].topics[0], "Progressive overload");
    }

    #[test]
    fn test_single_month_is_early_phase() {
        let skeleton = fallback_skeleton(GoalType::Skill, 1);
        assert_eq!(skeleton.months.len(), 1);
        assert_eq!(skeleton.months[0].title, "Phase 1: Fundamentals");
        assert_eq!(skeleton.months[0].topics.len(), 4);
    }

    #[test]
    fn test_unknown_label_uses_custom() {
        let skeleton = fallback_skeleton(GoalType::from_label("underwater basket weaving"), 2);
        assert_eq!(skeleton.months[0].title, "Phase 1: Getting Started");
        assert_eq!(skeleton.months[1].title, "Phase 2: Following Through");
    }
}
