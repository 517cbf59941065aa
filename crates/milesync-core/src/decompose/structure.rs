//! Asking the generative text service for a month/topic skeleton.

use std::time::Duration;

use jiff::civil::Date;
use serde_json::Value;
use thiserror::Error;

use crate::{
    ai::{extract_json, AiError, TextGenerator},
    models::{ClarificationResponse, GoalType, MonthSkeleton, PlanSkeleton},
};

/// Maximum number of characters of clarification text sent to the model.
pub const CONTEXT_LIMIT: usize = 300;

/// Context used when the goal has no clarification answers.
pub const NO_CONTEXT: &str = "No additional context provided.";

/// The skeleton request failed. The caller replaces the skeleton wholesale;
/// no partial structure is ever returned.
#[derive(Error, Debug)]
pub enum StructureGenerationError {
    #[error("structure generation failed: {0}")]
    Generation(#[from] AiError),

    #[error("structure generation failed: no response within {0:?}")]
    Timeout(Duration),

    #[error("structure generation failed: response contained no JSON")]
    NoJson,

    #[error("structure generation failed: malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("structure generation failed: {0}")]
    Schema(String),
}

/// Everything the prompt needs to describe a goal.
#[derive(Debug, Clone)]
pub struct StructureRequest<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub goal_type: GoalType,
    pub total_days: u32,
    pub total_months: u32,
    pub hours_per_day: f64,
    pub start_date: Date,
    pub end_date: Date,
    pub context: &'a str,
}

/// Flatten clarification answers into prompt context, capped at
/// [`CONTEXT_LIMIT`] characters.
pub fn build_context(responses: &[ClarificationResponse]) -> String {
    if responses.is_empty() {
        return NO_CONTEXT.to_string();
    }

    let joined = responses
        .iter()
        .map(|r| format!("Q: {}\nA: {}", r.question, r.answer))
        .collect::<Vec<_>>()
        .join("\n\n");

    joined.chars().take(CONTEXT_LIMIT).collect()
}

/// Render the skeleton prompt.
pub fn build_prompt(request: &StructureRequest<'_>) -> String {
    format!(
        r#"You are an expert learning path designer. Outline a realistic plan for the goal below as a sequence of monthly phases.

Goal:
- Title: {title}
- Description: {description}
- Type: {goal_type}
- Duration: {days} days ({months} months)
- Daily commitment: {hours} hours/day
- Start date: {start}
- End date: {end}

User context:
{context}

Instructions:
1. Produce exactly {months} months, progressing from fundamentals to advanced work.
2. Give each month a short title and 4 to 8 concrete topics, in the order they should be studied.
3. Keep every topic under 60 characters.

Respond with ONLY a JSON object, no markdown fences and no explanation, in exactly this shape:
{{"months": [{{"title": "Foundations", "topics": ["Topic one", "Topic two"]}}]}}"#,
        title = request.title,
        description = request.description.unwrap_or("Not provided"),
        goal_type = request.goal_type.as_str(),
        days = request.total_days,
        months = request.total_months,
        hours = request.hours_per_day,
        start = request.start_date,
        end = request.end_date,
        context = request.context,
    )
}

/// Extract and validate a skeleton from raw model output.
///
/// Accepts `{"months": [...]}` or a bare top-level months array. Each month
/// must carry a string `title` and, when present, a string array `topics`.
pub fn parse_skeleton(text: &str) -> Result<PlanSkeleton, StructureGenerationError> {
    let span = extract_json(text).ok_or(StructureGenerationError::NoJson)?;
    let value: Value = serde_json::from_str(span)?;

    let months_value = match value {
        Value::Object(mut map) => map.remove("months").ok_or_else(|| {
            StructureGenerationError::Schema("missing \"months\" array".to_string())
        })?,
        array @ Value::Array(_) => array,
        other => {
            return Err(StructureGenerationError::Schema(format!(
                "expected an object or array, got {other}"
            )));
        }
    };

    let months: Vec<MonthSkeleton> = serde_json::from_value(months_value)
        .map_err(|e| StructureGenerationError::Schema(e.to_string()))?;

    if months.is_empty() {
        return Err(StructureGenerationError::Schema(
            "skeleton contains no months".to_string(),
        ));
    }

    Ok(PlanSkeleton { months })
}

/// Prompt `generator` and parse its answer into a skeleton.
pub async fn request_skeleton(
    generator: &dyn TextGenerator,
    request: &StructureRequest<'_>,
) -> Result<PlanSkeleton, StructureGenerationError> {
    let prompt = build_prompt(request);
    let text = generator.generate(&prompt).await?;
    parse_skeleton(&text)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn response(question: &str, answer: &str) -> ClarificationResponse {
        ClarificationResponse {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_context_empty() {
        assert_eq!(build_context(&[]), NO_CONTEXT);
    }

    #[test]
    fn test_context_format() {
        let ctx = build_context(&[response("Level?", "Beginner"), response("Focus?", "React")]);
        assert_eq!(ctx, "Q: Level?\nA: Beginner\n\nQ: Focus?\nA: React");
    }

    #[test]
    fn test_context_truncated_on_char_boundary() {
        let long = "é".repeat(400);
        let ctx = build_context(&[response("Q", &long)]);
        assert_eq!(ctx.chars().count(), CONTEXT_LIMIT);
        assert!(ctx.starts_with("Q: Q\nA: é"));
    }

    #[test]
    fn test_prompt_mentions_goal_and_month_count() {
        let request = StructureRequest {
            title: "Learn Rust",
            description: None,
            goal_type: GoalType::Skill,
            total_days: 60,
            total_months: 2,
            hours_per_day: 1.5,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 3, 2),
            context: NO_CONTEXT,
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Title: Learn Rust"));
        assert!(prompt.contains("Description: Not provided"));
        assert!(prompt.contains("Type: SKILL"));
        assert!(prompt.contains("exactly 2 months"));
        assert!(prompt.contains("Start date: 2025-01-01"));
        assert!(prompt.contains(r#"{"months": [{"title": "Foundations""#));
    }

    #[test]
    fn test_parse_object() {
        let skeleton =
            parse_skeleton(r#"{"months":[{"title":"M1","topics":["A","B"]}]}"#).unwrap();
        assert_eq!(skeleton.months, vec![MonthSkeleton::new("M1", &["A", "B"])]);
    }

    #[test]
    fn test_parse_fenced_with_prose() {
        let text = "Here you go:\n```json\n{\"months\":[{\"title\":\"M1\",\"topics\":[\"A\"]},{\"title\":\"M2\",\"topics\":[]}]}\n```\nEnjoy.";
        let skeleton = parse_skeleton(text).unwrap();
        assert_eq!(skeleton.months.len(), 2);
        assert!(skeleton.months[1].topics.is_empty());
    }

    #[test]
    fn test_parse_json_followed_by_stray_fence() {
        let text = "{\"months\":[{\"title\":\"M1\",\"topics\":[\"A\"]}]}\n```";
        let skeleton = parse_skeleton(text).unwrap();
        assert_eq!(skeleton.months, vec![MonthSkeleton::new("M1", &["A"])]);
    }

    #[test]
    fn test_parse_bare_array() {
        let skeleton = parse_skeleton(r#"[{"title":"Only","topics":["X"]}]"#).unwrap();
        assert_eq!(skeleton.months[0].title, "Only");
    }

    #[test]
    fn test_parse_missing_topics_defaults_empty() {
        let skeleton = parse_skeleton(r#"{"months":[{"title":"M1"}]}"#).unwrap();
        assert!(skeleton.months[0].topics.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!(
            parse_skeleton("no json here"),
            Err(StructureGenerationError::NoJson)
        ));
        assert!(matches!(
            parse_skeleton(r#"{"plan": []}"#),
            Err(StructureGenerationError::Schema(_))
        ));
        assert!(matches!(
            parse_skeleton(r#"{"months": []}"#),
            Err(StructureGenerationError::Schema(_))
        ));
        assert!(matches!(
            parse_skeleton(r#"{"months": [{"title": 3, "topics": []}]}"#),
            Err(StructureGenerationError::Schema(_))
        ));
        assert!(matches!(
            parse_skeleton(r#"{"months": [{"title": "M", "topics": "A, B"}]}"#),
            Err(StructureGenerationError::Schema(_))
        ));
        assert!(matches!(
            parse_skeleton(r#"{"months": [{"title": "M",}]}"#),
            Err(StructureGenerationError::Malformed(_))
        ));
    }
}
