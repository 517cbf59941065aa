//! Clarification questions asked before a plan is generated.
//!
//! The generative service is asked for three goal-specific questions. Any
//! failure, including a timeout or an unusable reply, yields the canned set
//! for the goal's type instead.

use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::{
    ai::{extract_json, TextGenerator},
    models::{AnswerKind, ClarificationQuestion, GeneratedVia, Goal, GoalType},
    templates::templates_by_type,
};

/// Number of questions asked per goal.
pub const QUESTION_COUNT: usize = 3;

#[derive(Deserialize)]
struct QuestionsReply {
    questions: Vec<ClarificationQuestion>,
}

/// Questions for a goal together with where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Questions {
    pub questions: Vec<ClarificationQuestion>,
    pub generated_via: GeneratedVia,
}

fn build_prompt(goal: &Goal) -> String {
    format!(
        r#"You are a mentor helping someone reach a goal. Ask exactly {count} short clarification questions that will help personalize their plan.

Goal:
- Title: "{title}"
- Description: {description}
- Type: {goal_type}
- Duration: {days} days
- Daily commitment: {hours} hours/day

The questions should uncover, in order:
1. Their current level or experience
2. The concrete outcome or project they want
3. Constraints, preferences or areas of focus

Respond with ONLY a JSON object, no markdown fences and no explanation:
{{"questions": [{{"id": "q1", "question": "...?", "context": "Why this helps", "expectedAnswerType": "text"}}]}}"#,
        count = QUESTION_COUNT,
        title = goal.title,
        description = goal.description.as_deref().unwrap_or("Not provided"),
        goal_type = goal.goal_type.as_str(),
        days = goal.total_duration,
        hours = goal.hours_per_day,
    )
}

fn parse_questions(text: &str) -> Option<Vec<ClarificationQuestion>> {
    let span = extract_json(text)?;
    let reply: QuestionsReply = serde_json::from_str(span).ok()?;
    let questions: Vec<ClarificationQuestion> = reply
        .questions
        .into_iter()
        .filter(|q| !q.question.trim().is_empty())
        .take(QUESTION_COUNT)
        .collect();

    if questions.len() == QUESTION_COUNT {
        Some(questions)
    } else {
        None
    }
}

/// Ask `generator` for clarification questions about `goal`.
pub async fn clarification_questions(
    generator: &dyn TextGenerator,
    goal: &Goal,
    timeout: Duration,
) -> Questions {
    let prompt = build_prompt(goal);

    let reply = match tokio::time::timeout(timeout, generator.generate(&prompt)).await {
        Ok(Ok(text)) => parse_questions(&text).ok_or_else(|| "unusable reply".to_string()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err(format!("no response within {timeout:?}")),
    };

    match reply {
        Ok(questions) => {
            debug!("Goal {}: {} asked {} questions", goal.id, generator.provider(), questions.len());
            Questions {
                questions,
                generated_via: GeneratedVia::Ai,
            }
        }
        Err(reason) => {
            warn!(
                "Goal {}: using fallback questions for {}: {reason}",
                goal.id,
                goal.goal_type.as_str()
            );
            Questions {
                questions: fallback_questions(goal.goal_type),
                generated_via: GeneratedVia::Fallback,
            }
        }
    }
}

/// Why each canned question is asked, by position.
const FALLBACK_CONTEXT: [&str; QUESTION_COUNT] = [
    "Establishes your starting point",
    "Gives the plan a concrete target",
    "Shapes the focus of the plan",
];

const CUSTOM_QUESTIONS: [&str; QUESTION_COUNT] = [
    "Where are you starting from?",
    "What does success look like for you?",
    "What resources or support can you rely on?",
];

/// The canned questions for a goal type: the suggested questions of the
/// type's first template, or a generic set for custom goals.
pub fn fallback_questions(goal_type: GoalType) -> Vec<ClarificationQuestion> {
    let set = templates_by_type(goal_type)
        .next()
        .map_or(CUSTOM_QUESTIONS, |t| t.suggested_questions);

    set.iter()
        .zip(FALLBACK_CONTEXT)
        .enumerate()
        .map(|(i, (question, context))| ClarificationQuestion {
            id: format!("q{}", i + 1),
            question: (*question).to_string(),
            context: context.to_string(),
            expected_answer_type: AnswerKind::Text,
            choices: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::ai::{AiError, OfflineGenerator};

    struct Reply(&'static str);

    #[async_trait]
    impl TextGenerator for Reply {
        fn provider(&self) -> &str {
            "reply"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
            Ok(self.0.to_string())
        }
    }

    fn goal(goal_type: GoalType) -> Goal {
        let now = Timestamp::now();
        Goal {
            id: 1,
            title: "Learn the piano".to_string(),
            description: None,
            goal_type,
            status: Default::default(),
            start_date: date(2025, 1, 1),
            target_date: date(2025, 4, 1),
            total_duration: 90,
            hours_per_day: 1.0,
            current_progress: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_every_type_has_three_fallback_questions() {
        for goal_type in GoalType::ALL {
            let questions = fallback_questions(goal_type);
            assert_eq!(questions.len(), QUESTION_COUNT);
            let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
            assert_eq!(ids, vec!["q1", "q2", "q3"]);
        }
    }

    #[test]
    fn test_fallback_questions_follow_template() {
        let questions = fallback_questions(GoalType::Academic);
        assert_eq!(
            questions[0].question,
            "What subjects or topics need to be covered?"
        );
        assert_eq!(
            fallback_questions(GoalType::Custom)[1].question,
            "What does success look like for you?"
        );
    }

    #[test]
    fn test_prompt_describes_goal() {
        let prompt = build_prompt(&goal(GoalType::Creative));
        assert!(prompt.contains("Title: \"Learn the piano\""));
        assert!(prompt.contains("Type: CREATIVE"));
        assert!(prompt.contains("Duration: 90 days"));
    }

    #[tokio::test]
    async fn test_generated_questions() {
        let generator = Reply(
            r#"```json
{"questions": [
  {"id": "q1", "question": "Can you read sheet music?", "context": "Level", "expectedAnswerType": "choice", "choices": ["Yes", "No"]},
  {"id": "q2", "question": "Which pieces?", "context": "Outcome", "expectedAnswerType": "text"},
  {"id": "q3", "question": "Acoustic or digital?", "context": "Gear", "expectedAnswerType": "text"},
  {"id": "q4", "question": "Extra?", "context": "", "expectedAnswerType": "text"}
]}
```"#,
        );

        let result =
            clarification_questions(&generator, &goal(GoalType::Creative), Duration::from_secs(1))
                .await;

        assert_eq!(result.generated_via, GeneratedVia::Ai);
        assert_eq!(result.questions.len(), 3);
        assert_eq!(result.questions[0].expected_answer_type, AnswerKind::Choice);
        assert_eq!(result.questions[0].choices.as_ref().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_too_few_questions_falls_back() {
        let generator = Reply(r#"{"questions": [{"id": "q1", "question": "Only one?"}]}"#);
        let result =
            clarification_questions(&generator, &goal(GoalType::Fitness), Duration::from_secs(1))
                .await;
        assert_eq!(result.generated_via, GeneratedVia::Fallback);
        assert_eq!(result.questions, fallback_questions(GoalType::Fitness));
    }

    #[tokio::test]
    async fn test_offline_falls_back() {
        let result = clarification_questions(
            &OfflineGenerator,
            &goal(GoalType::Career),
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(result.generated_via, GeneratedVia::Fallback);
        assert_eq!(
            result.questions[1].question,
            "Which career outcome are you aiming for?"
        );
    }
}
