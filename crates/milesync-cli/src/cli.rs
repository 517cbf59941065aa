//! Subcommand arguments and their handlers.
//!
//! Each clap `Args` struct converts into the matching core parameter type
//! with a `From` impl, so clap attributes never leak into `milesync-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::fmt;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use milesync_core::{
    params::{
        CompleteTask, CreateGoal, DayQuery, GuidanceQuery, Id, ListGoals, ListTemplates,
        LogProgress, ProgressRange, SaveClarification, UpdateGoalStatus,
    },
    templates::list_templates,
    ClarificationResponse, CreateResult, DeleteResult, Goals, ProgressLogs, SavedAnswers,
    Templates, Tracker, UpdateResult,
};

use crate::renderer::TerminalRenderer;

/// Goal category as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GoalTypeArg {
    Academic,
    Skill,
    Fitness,
    Career,
    Creative,
    Custom,
}

impl fmt::Display for GoalTypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalTypeArg::Academic => "ACADEMIC",
            GoalTypeArg::Skill => "SKILL",
            GoalTypeArg::Fitness => "FITNESS",
            GoalTypeArg::Career => "CAREER",
            GoalTypeArg::Creative => "CREATIVE",
            GoalTypeArg::Custom => "CUSTOM",
        };
        f.write_str(label)
    }
}

/// Goal status as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GoalStatusArg {
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl fmt::Display for GoalStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalStatusArg::Active => "ACTIVE",
            GoalStatusArg::Paused => "PAUSED",
            GoalStatusArg::Completed => "COMPLETED",
            GoalStatusArg::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

/// Create a new goal
#[derive(Args)]
pub struct CreateGoalArgs {
    /// Title of the goal
    pub title: String,
    #[arg(short, long, help = "Optional description of what success looks like")]
    pub description: Option<String>,
    #[arg(long, value_name = "ID", help = "Template supplying the type, duration and hours (see `goal templates`)")]
    pub template: Option<String>,
    #[arg(short = 't', long = "type", value_enum, help = "Goal category (default: the template's, else custom)")]
    pub goal_type: Option<GoalTypeArg>,
    #[arg(long, value_name = "YYYY-MM-DD", help = "First day of the plan (default today)")]
    pub start: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD", required_unless_present = "template", help = "Day the goal should be reached by")]
    pub target: Option<String>,
    #[arg(long, value_name = "HOURS", required_unless_present = "template", help = "Hours per day to spend on the goal")]
    pub hours: Option<f64>,
}

impl From<CreateGoalArgs> for CreateGoal {
    fn from(val: CreateGoalArgs) -> Self {
        CreateGoal {
            title: val.title,
            description: val.description,
            template: val.template,
            goal_type: val.goal_type.map(|t| t.to_string()),
            start_date: val.start,
            target_date: val.target,
            hours_per_day: val.hours,
        }
    }
}

/// List goals, newest first
#[derive(Args)]
pub struct ListGoalsArgs {
    #[arg(short, long, value_enum, help = "Only show goals with this status")]
    pub status: Option<GoalStatusArg>,
}

impl From<ListGoalsArgs> for ListGoals {
    fn from(val: ListGoalsArgs) -> Self {
        ListGoals {
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// List goal templates
#[derive(Args)]
pub struct TemplatesArgs {
    #[arg(short = 't', long = "type", value_enum, help = "Only show templates of this category")]
    pub goal_type: Option<GoalTypeArg>,
}

impl From<TemplatesArgs> for ListTemplates {
    fn from(val: TemplatesArgs) -> Self {
        ListTemplates {
            goal_type: val.goal_type.map(|t| t.to_string()),
        }
    }
}

/// Show what every active goal asks for on one day
#[derive(Args)]
pub struct GuidanceArgs {
    #[arg(short, long, value_name = "YYYY-MM-DD", help = "Day to show (default today)")]
    pub date: Option<String>,
}

impl From<GuidanceArgs> for GuidanceQuery {
    fn from(val: GuidanceArgs) -> Self {
        GuidanceQuery { date: val.date }
    }
}

/// Arguments naming a single goal
#[derive(Args)]
pub struct GoalIdArgs {
    #[arg(help = "ID of the goal")]
    pub id: u64,
}

impl From<GoalIdArgs> for Id {
    fn from(val: GoalIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change a goal's status
#[derive(Args)]
pub struct UpdateStatusArgs {
    #[arg(help = "ID of the goal")]
    pub id: u64,
    #[arg(value_enum, help = "New status")]
    pub status: GoalStatusArg,
}

impl From<UpdateStatusArgs> for UpdateGoalStatus {
    fn from(val: UpdateStatusArgs) -> Self {
        UpdateGoalStatus {
            id: val.id,
            status: val.status.to_string(),
        }
    }
}

/// Record answers to clarification questions
///
/// Questions and answers pair up by position: the first `--question` goes
/// with the first `--answer`.
#[derive(Args)]
pub struct AnswerArgs {
    #[arg(help = "ID of the goal")]
    pub goal_id: u64,
    #[arg(short, long = "question", help = "Question being answered (repeatable)")]
    pub questions: Vec<String>,
    #[arg(short, long = "answer", help = "Answer to the matching question (repeatable)")]
    pub answers: Vec<String>,
}

impl TryFrom<AnswerArgs> for SaveClarification {
    type Error = anyhow::Error;

    fn try_from(val: AnswerArgs) -> Result<Self> {
        if val.questions.len() != val.answers.len() {
            bail!(
                "Got {} questions but {} answers",
                val.questions.len(),
                val.answers.len()
            );
        }
        Ok(SaveClarification {
            goal_id: val.goal_id,
            responses: val
                .questions
                .into_iter()
                .zip(val.answers)
                .map(|(question, answer)| ClarificationResponse { question, answer })
                .collect(),
        })
    }
}

/// Show one day of a plan
#[derive(Args)]
pub struct DayArgs {
    #[arg(help = "ID of the goal")]
    pub goal_id: u64,
    #[arg(short, long, value_name = "YYYY-MM-DD", help = "Day to show (default today)")]
    pub date: Option<String>,
}

impl From<DayArgs> for DayQuery {
    fn from(val: DayArgs) -> Self {
        DayQuery {
            goal_id: val.goal_id,
            date: val.date,
        }
    }
}

/// Mark a plan task as done
#[derive(Args)]
pub struct CompleteArgs {
    #[arg(help = "ID of the goal")]
    pub goal_id: u64,
    #[arg(help = "ID of the task, as shown in the plan (e.g. m1w2d3t1)")]
    pub task_id: String,
    #[arg(long, help = "Mark the task as not done instead")]
    pub undo: bool,
}

impl From<CompleteArgs> for CompleteTask {
    fn from(val: CompleteArgs) -> Self {
        CompleteTask {
            goal_id: val.goal_id,
            task_id: val.task_id,
            completed: !val.undo,
        }
    }
}

/// Log a day's progress
#[derive(Args)]
pub struct LogArgs {
    #[arg(help = "ID of the goal")]
    pub goal_id: u64,
    #[arg(short, long, value_name = "YYYY-MM-DD", help = "Day being logged (default today)")]
    pub date: Option<String>,
    #[arg(short, long, help = "Tasks finished that day")]
    pub completed: u32,
    #[arg(short, long, help = "Tasks scheduled that day")]
    pub total: u32,
    #[arg(long, default_value_t = 0.0, help = "Hours actually spent")]
    pub hours: f64,
    #[arg(short, long, help = "Free-form notes")]
    pub notes: Option<String>,
    #[arg(short, long, help = "Anything that got in the way")]
    pub blockers: Option<String>,
}

impl From<LogArgs> for LogProgress {
    fn from(val: LogArgs) -> Self {
        LogProgress {
            goal_id: val.goal_id,
            date: val.date,
            tasks_completed: val.completed,
            total_tasks: val.total,
            hours_logged: val.hours,
            notes: val.notes,
            blockers: val.blockers,
        }
    }
}

/// List progress logs, newest first
#[derive(Args)]
pub struct RangeArgs {
    #[arg(help = "ID of the goal")]
    pub goal_id: u64,
    #[arg(long, value_name = "YYYY-MM-DD", help = "Earliest day to include")]
    pub from: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD", help = "Latest day to include")]
    pub to: Option<String>,
}

impl From<RangeArgs> for ProgressRange {
    fn from(val: RangeArgs) -> Self {
        ProgressRange {
            goal_id: val.goal_id,
            from: val.from,
            to: val.to,
        }
    }
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new goal
    #[command(alias = "c")]
    Create(CreateGoalArgs),
    /// List goals
    #[command(alias = "l")]
    List(ListGoalsArgs),
    /// Show a goal
    #[command(alias = "s")]
    Show(GoalIdArgs),
    /// Change a goal's status
    Status(UpdateStatusArgs),
    /// Delete a goal
    #[command(alias = "d")]
    Delete(GoalIdArgs),
    /// List templates for new goals
    #[command(alias = "t")]
    Templates(TemplatesArgs),
}

#[derive(Subcommand)]
pub enum ClarifyCommands {
    /// Ask clarification questions for a goal
    #[command(alias = "q")]
    Questions(GoalIdArgs),
    /// Save answers to clarification questions
    #[command(alias = "a")]
    Answer(AnswerArgs),
    /// Show the saved answers for a goal
    #[command(alias = "s")]
    Show(GoalIdArgs),
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate (or regenerate) a goal's plan
    #[command(alias = "g")]
    Generate(GoalIdArgs),
    /// Show a goal's full plan
    #[command(alias = "s")]
    Show(GoalIdArgs),
    /// Show the tasks for one day
    #[command(alias = "t")]
    Today(DayArgs),
    /// Mark a task as done
    #[command(alias = "c")]
    Complete(CompleteArgs),
}

#[derive(Subcommand)]
pub enum ProgressCommands {
    /// Log a day's progress
    Log(LogArgs),
    /// List progress logs
    #[command(alias = "l")]
    List(RangeArgs),
}

/// Runs subcommands against a [`Tracker`] and renders their output.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_goal_command(&self, command: GoalCommands) -> Result<()> {
        match command {
            GoalCommands::Create(args) => {
                let goal = self
                    .tracker
                    .create_goal(&args.into())
                    .await
                    .context("Failed to create goal")?;
                self.renderer.render(&CreateResult::new(goal).to_string());
            }
            GoalCommands::List(args) => self.list_goals(&args.into()).await?,
            GoalCommands::Show(args) => {
                let id = args.id;
                match self.tracker.get_goal(&args.into()).await? {
                    Some(goal) => self.renderer.render(&goal.to_string()),
                    None => bail!("Goal {id} not found"),
                }
            }
            GoalCommands::Status(args) => {
                let goal = self
                    .tracker
                    .update_goal_status(&args.into())
                    .await
                    .context("Failed to update goal status")?;
                let message = format!("Goal {} is now {}", goal.id, goal.status);
                self.renderer.render(&UpdateResult::new(goal, message).to_string());
            }
            GoalCommands::Delete(args) => {
                let goal = self
                    .tracker
                    .delete_goal(&args.into())
                    .await
                    .context("Failed to delete goal")?;
                self.renderer.render(&DeleteResult::new(goal).to_string());
            }
            GoalCommands::Templates(args) => {
                let templates = list_templates(&args.into())?;
                self.renderer.render(&Templates(templates).to_string());
            }
        }
        Ok(())
    }

    pub async fn handle_clarify_command(&self, command: ClarifyCommands) -> Result<()> {
        match command {
            ClarifyCommands::Questions(args) => {
                let questions = self
                    .tracker
                    .clarification_questions(&args.into())
                    .await
                    .context("Failed to get clarification questions")?;
                self.renderer.render(&questions.to_string());
            }
            ClarifyCommands::Answer(args) => {
                let params = SaveClarification::try_from(args)?;
                let responses = self
                    .tracker
                    .save_clarification(&params)
                    .await
                    .context("Failed to save answers")?;
                let saved = SavedAnswers {
                    goal_id: params.goal_id,
                    responses,
                };
                self.renderer.render(&saved.to_string());
            }
            ClarifyCommands::Show(args) => {
                let goal_id = args.id;
                let responses = self.tracker.get_clarification(&args.into()).await?;
                if responses.is_empty() {
                    self.renderer
                        .render(&format!("No answers saved for goal {goal_id}.\n"));
                } else {
                    let saved = SavedAnswers { goal_id, responses };
                    self.renderer.render(&saved.to_string());
                }
            }
        }
        Ok(())
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                let plan = self
                    .tracker
                    .generate_plan(args.id)
                    .await
                    .context("Failed to generate plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string());
            }
            PlanCommands::Show(args) => {
                let plan = self.tracker.get_plan(&args.into()).await?;
                self.renderer.render(&plan.to_string());
            }
            PlanCommands::Today(args) => {
                let day = self.tracker.tasks_for_day(&args.into()).await?;
                self.renderer.render(&day.to_string());
            }
            PlanCommands::Complete(args) => {
                let params = CompleteTask::from(args);
                let plan = self
                    .tracker
                    .set_task_completion(&params)
                    .await
                    .context("Failed to update task")?;
                let state = if params.completed { "done" } else { "not done" };
                let day = plan
                    .days()
                    .find(|d| d.tasks.iter().any(|t| t.id == params.task_id))
                    .cloned();
                let message = format!("Marked task {} as {state}", params.task_id);
                match day {
                    Some(day) => self.renderer.render(&UpdateResult::new(day, message).to_string()),
                    None => self.renderer.render(&format!("{message}\n")),
                }
            }
        }
        Ok(())
    }

    pub async fn handle_progress_command(&self, command: ProgressCommands) -> Result<()> {
        match command {
            ProgressCommands::Log(args) => {
                let log = self
                    .tracker
                    .log_progress(&args.into())
                    .await
                    .context("Failed to log progress")?;
                self.renderer.render(&CreateResult::new(log).to_string());
            }
            ProgressCommands::List(args) => {
                let logs = self.tracker.progress_logs(&args.into()).await?;
                self.renderer.render(&ProgressLogs(logs).to_string());
            }
        }
        Ok(())
    }

    pub async fn daily_guidance(&self, args: GuidanceArgs) -> Result<()> {
        let guidance = self
            .tracker
            .daily_guidance(&args.into())
            .await
            .context("Failed to collect today's tasks")?;
        self.renderer.render(&guidance.to_string());
        Ok(())
    }

    pub async fn list_goals(&self, params: &ListGoals) -> Result<()> {
        let goals = self.tracker.list_goals(params).await?;
        self.renderer.render(&Goals(goals).to_string());
        Ok(())
    }
}
