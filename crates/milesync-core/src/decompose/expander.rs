//! Expansion of a month/topic skeleton into the dated plan tree.
//!
//! A [`Cursor`] carries the plan's start date and the next global day
//! number. Every expansion step takes a cursor by value and hands back the
//! advanced one alongside the plan it built, so dates stay gapless across
//! month and week boundaries without any shared mutable state. A day's date
//! is only computed when that day is emitted, so a plan may end on the last
//! supported calendar day.

use jiff::{civil::Date, ToSpan};

use crate::{
    error::Result,
    models::{DailyTask, DayPlan, MonthPlan, MonthSkeleton, PlanSkeleton, WeekPlan},
};

/// Share of a day's hours given to the learning task.
pub const LEARN_SHARE: f64 = 0.6;

/// Share of a day's hours given to the practice task. The practice task
/// actually receives `hours - learn` so the two always sum to the day total.
pub const PRACTICE_SHARE: f64 = 0.4;

/// Topic used when a month arrives without any topics.
pub const PLACEHOLDER_TOPIC: &str = "General Progress";

const DAYS_PER_WEEK: u32 = 7;

/// Position of the expander within the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Date of day 1
    pub start: Date,
    /// Global 1-based number of the next day to emit
    pub day_number: u32,
}

impl Cursor {
    pub fn start(date: Date) -> Self {
        Self {
            start: date,
            day_number: 1,
        }
    }

    /// Date of the next day to emit.
    ///
    /// # Errors
    ///
    /// Fails if that day lies past the supported calendar range.
    pub fn date(self) -> Result<Date> {
        let offset = i64::from(self.day_number - 1);
        Ok(self.start.checked_add(offset.days())?)
    }

    fn advance(self) -> Self {
        Self {
            day_number: self.day_number + 1,
            ..self
        }
    }
}

/// Clip or pad the skeleton to exactly `month_count` months.
///
/// Padding repeats the last supplied month. An empty skeleton becomes a
/// single placeholder month first.
pub fn fit_months(skeleton: &PlanSkeleton, month_count: u32) -> Vec<MonthSkeleton> {
    let mut months: Vec<MonthSkeleton> = skeleton
        .months
        .iter()
        .take(month_count as usize)
        .cloned()
        .collect();

    if months.is_empty() {
        months.push(MonthSkeleton {
            title: PLACEHOLDER_TOPIC.to_string(),
            topics: Vec::new(),
        });
    }

    while months.len() < month_count as usize {
        let last = months[months.len() - 1].clone();
        months.push(last);
    }

    months
}

/// Expand `skeleton` into months covering `total_days` days from `start_date`.
///
/// # Errors
///
/// Only fails if the date cursor runs past the supported calendar range.
pub fn expand(
    skeleton: &PlanSkeleton,
    month_count: u32,
    start_date: Date,
    total_days: u32,
    hours_per_day: f64,
) -> Result<Vec<MonthPlan>> {
    let month_count = month_count.max(1);
    let days_per_month = total_days.div_ceil(month_count);

    let mut cursor = Cursor::start(start_date);
    let mut consumed = 0;
    let mut months = Vec::new();

    for (index, month) in fit_months(skeleton, month_count).iter().enumerate() {
        let days = days_per_month.min(total_days - consumed);
        if days == 0 {
            break;
        }

        let (plan, next) = expand_month(index as u32 + 1, month, days, hours_per_day, cursor)?;
        months.push(plan);
        cursor = next;
        consumed += days;
    }

    Ok(months)
}

/// Build one month of `days` days starting at `cursor`.
pub fn expand_month(
    month_number: u32,
    month: &MonthSkeleton,
    days: u32,
    hours_per_day: f64,
    cursor: Cursor,
) -> Result<(MonthPlan, Cursor)> {
    let topics: Vec<&str> = if month.topics.is_empty() {
        vec![PLACEHOLDER_TOPIC]
    } else {
        month.topics.iter().map(String::as_str).collect()
    };

    let week_count = days.div_ceil(DAYS_PER_WEEK);
    let topics_per_week = (topics.len() as u32).div_ceil(week_count) as usize;

    let start_date = cursor.date()?;
    let mut cursor = cursor;
    let mut weeks = Vec::with_capacity(week_count as usize);

    for w in 0..week_count {
        let week_days = DAYS_PER_WEEK.min(days - w * DAYS_PER_WEEK);
        let week_topics = week_slice(&topics, w as usize, topics_per_week);
        let (week, next) = expand_week(month_number, w + 1, &week_topics, week_days, hours_per_day, cursor)?;
        weeks.push(week);
        cursor = next;
    }

    let end_date = weeks.last().map_or(start_date, |w| w.end_date);
    let total_hours = weeks.iter().map(|w| w.total_hours).sum();

    let plan = MonthPlan {
        month_number,
        start_date,
        end_date,
        title: month.title.clone(),
        milestone: format!("Complete {}", month.title),
        weeks,
        total_hours,
        completed_weeks: 0,
    };
    Ok((plan, cursor))
}

/// Topics for week `w`: an even slice of the month's list, or a single
/// cycled topic when the slice runs off the end.
fn week_slice<'a>(topics: &[&'a str], w: usize, per_week: usize) -> Vec<&'a str> {
    let from = (w * per_week).min(topics.len());
    let to = ((w + 1) * per_week).min(topics.len());
    if from < to {
        topics[from..to].to_vec()
    } else {
        vec![topics[w % topics.len()]]
    }
}

/// Build one week of `days` days (1..=7) cycling through `topics`.
pub fn expand_week(
    month_number: u32,
    week_number: u32,
    topics: &[&str],
    days: u32,
    hours_per_day: f64,
    cursor: Cursor,
) -> Result<(WeekPlan, Cursor)> {
    let topics: &[&str] = if topics.is_empty() {
        &[PLACEHOLDER_TOPIC]
    } else {
        topics
    };

    let start_date = cursor.date()?;
    let mut cursor = cursor;
    let mut day_plans = Vec::with_capacity(days as usize);

    for d in 0..days {
        let topic = topics[d as usize % topics.len()];
        let (day, next) = expand_day(month_number, week_number, d + 1, topic, hours_per_day, cursor)?;
        day_plans.push(day);
        cursor = next;
    }

    let end_date = day_plans.last().map_or(start_date, |d| d.date);
    let total_hours = day_plans.iter().map(|d| d.total_hours).sum();

    let plan = WeekPlan {
        week_number,
        start_date,
        end_date,
        title: format!("Week {week_number}: {}", topics.join(" & ")),
        objective: format!("Build working knowledge of {}", topics.join(", ")),
        days: day_plans,
        total_hours,
        completed_days: 0,
    };
    Ok((plan, cursor))
}

/// Emit the day at `cursor` with its learn and practice tasks.
pub fn expand_day(
    month_number: u32,
    week_number: u32,
    day_in_week: u32,
    topic: &str,
    hours_per_day: f64,
    cursor: Cursor,
) -> Result<(DayPlan, Cursor)> {
    let learn = hours_per_day * LEARN_SHARE;
    let practice = hours_per_day - learn;
    let id = |task: u32| format!("m{month_number}w{week_number}d{day_in_week}t{task}");

    let tasks = vec![
        DailyTask {
            id: id(1),
            title: format!("Learn: {topic}"),
            description: format!("Study the core ideas of {topic}"),
            duration: learn,
            completed: false,
            time_block: None,
            resources: None,
            success_criteria: None,
        },
        DailyTask {
            id: id(2),
            title: format!("Practice: {topic}"),
            description: format!("Apply {topic} in hands-on exercises"),
            duration: practice,
            completed: false,
            time_block: None,
            resources: None,
            success_criteria: None,
        },
    ];

    let day = DayPlan {
        day_number: cursor.day_number,
        date: cursor.date()?,
        title: format!("Day {}: {topic}", cursor.day_number),
        focus: topic.to_string(),
        tasks,
        total_hours: hours_per_day,
        completed: false,
    };
    Ok((day, cursor.advance()))
}
