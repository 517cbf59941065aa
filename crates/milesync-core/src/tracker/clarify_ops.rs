//! Clarification operations for the Tracker.

use super::{goal_ops::require_goal, Tracker};
use crate::{
    clarify::{clarification_questions, Questions},
    error::Result,
    models::ClarificationResponse,
    params::{Id, SaveClarification},
};

impl Tracker {
    /// Questions to ask before generating the goal's plan.
    ///
    /// Never fails because of the generative service; canned questions are
    /// returned instead.
    pub async fn clarification_questions(&self, params: &Id) -> Result<Questions> {
        let id = params.id;
        let goal = self.with_db(move |db| require_goal(db, id)).await?;

        Ok(clarification_questions(self.generator.as_ref(), &goal, self.ai_timeout).await)
    }

    /// Stores the goal's clarification answers, replacing earlier ones.
    pub async fn save_clarification(&self, params: &SaveClarification) -> Result<Vec<ClarificationResponse>> {
        params.validate()?;
        let goal_id = params.goal_id;
        let responses = params.responses.clone();

        self.with_db(move |db| {
            require_goal(db, goal_id)?;
            db.save_clarification(goal_id, &responses)?;
            Ok(responses)
        })
        .await
    }

    /// The goal's stored clarification answers.
    pub async fn get_clarification(&self, params: &Id) -> Result<Vec<ClarificationResponse>> {
        let id = params.id;
        self.with_db(move |db| {
            require_goal(db, id)?;
            db.get_clarification(id)
        })
        .await
    }
}
