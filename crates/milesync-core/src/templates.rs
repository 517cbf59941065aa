//! Starter templates for common kinds of goals.
//!
//! A template supplies a default duration and daily commitment when a goal
//! is created from it, and the questions worth asking before planning.

use serde::Serialize;

use crate::{error::Result, models::GoalType, params::ListTemplates};

/// A predefined starting point for a goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTemplate {
    pub id: &'static str,
    pub goal_type: GoalType,
    pub name: &'static str,
    pub description: &'static str,
    /// Days from start to target
    pub default_duration: u32,
    pub default_hours_per_day: f64,
    pub suggested_questions: [&'static str; 3],
    pub example: &'static str,
}

pub static TEMPLATES: &[GoalTemplate] = &[
    GoalTemplate {
        id: "academic-exam",
        goal_type: GoalType::Academic,
        name: "Academic Exam Preparation",
        description: "Structured study plan for exams, certifications, or academic courses",
        default_duration: 90,
        default_hours_per_day: 3.0,
        suggested_questions: [
            "What subjects or topics need to be covered?",
            "Do you have any upcoming deadlines or exam dates?",
            "What is your current level of understanding in this subject?",
        ],
        example: "Prepare for a university entrance exam in 90 days",
    },
    GoalTemplate {
        id: "skill-development",
        goal_type: GoalType::Skill,
        name: "Skill Development",
        description: "Learn a new professional skill from scratch or advance existing expertise",
        default_duration: 60,
        default_hours_per_day: 2.0,
        suggested_questions: [
            "What is your current skill level (beginner/intermediate/advanced)?",
            "Do you have a specific project or outcome in mind?",
            "Are there any specific tools or technologies you want to focus on?",
        ],
        example: "Learn full-stack development, learn Python for data science",
    },
    GoalTemplate {
        id: "fitness-program",
        goal_type: GoalType::Fitness,
        name: "Fitness Program",
        description: "Build endurance, strength or a healthy routine step by step",
        default_duration: 84,
        default_hours_per_day: 1.0,
        suggested_questions: [
            "How would you describe your current fitness level?",
            "Do you have any injuries or physical limitations?",
            "What equipment or facilities can you use?",
        ],
        example: "Run a half marathon, train for a first pull-up",
    },
    GoalTemplate {
        id: "career-growth",
        goal_type: GoalType::Career,
        name: "Career Growth",
        description: "Prepare for a new role, promotion or career change",
        default_duration: 120,
        default_hours_per_day: 1.5,
        suggested_questions: [
            "What is your current role and experience?",
            "Which career outcome are you aiming for?",
            "Which skills or certifications are you missing?",
        ],
        example: "Move into engineering management, pass a cloud certification",
    },
    GoalTemplate {
        id: "creative-project",
        goal_type: GoalType::Creative,
        name: "Creative Project",
        description: "Develop a craft and finish a body of creative work",
        default_duration: 90,
        default_hours_per_day: 1.0,
        suggested_questions: [
            "How much experience do you have with this craft?",
            "What kind of work do you want to produce?",
            "Which tools or software will you use?",
        ],
        example: "Write a short story collection, learn digital illustration",
    },
];

/// The template with this id.
pub fn template_by_id(id: &str) -> Option<&'static GoalTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Templates for one goal type.
pub fn templates_by_type(goal_type: GoalType) -> impl Iterator<Item = &'static GoalTemplate> {
    TEMPLATES.iter().filter(move |t| t.goal_type == goal_type)
}

/// Templates matching `params`, in table order.
pub fn list_templates(params: &ListTemplates) -> Result<Vec<&'static GoalTemplate>> {
    Ok(match params.validate()? {
        Some(goal_type) => templates_by_type(goal_type).collect(),
        None => TEMPLATES.iter().collect(),
    })
}
