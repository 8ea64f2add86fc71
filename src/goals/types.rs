//! Goal type definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::Category;
use crate::storage::STORE_SEPARATOR;

/// How often a goal's progress resets and over what window it accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Progress resets every calendar day
    Daily,
    /// Progress resets every ISO week
    Weekly,
}

impl PeriodType {
    /// Get display name.
    pub fn display_name(self) -> &'static str {
        match self {
            PeriodType::Daily => "daily",
            PeriodType::Weekly => "weekly",
        }
    }

    /// Parse user or stored input, case-insensitive.
    pub fn parse(input: &str) -> Option<PeriodType> {
        match input.to_lowercase().as_str() {
            "daily" => Some(PeriodType::Daily),
            "weekly" => Some(PeriodType::Weekly),
            _ => None,
        }
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A target value for one category over a period, with the progress
/// accumulated toward it so far.
///
/// Progress is a derived value: it is set to 0 at creation, recomputed from
/// records by the tracker's sync hooks, and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Category the goal tracks
    pub category: Category,
    /// Daily or weekly
    pub period: PeriodType,
    /// Target value in the category's unit
    pub target: f64,
    /// Progress accumulated toward the target
    pub progress: f64,
    /// Date the goal was set
    pub date_set: NaiveDate,
}

impl Goal {
    /// Create a new goal with zero progress.
    pub fn new(category: Category, period: PeriodType, target: f64, date_set: NaiveDate) -> Self {
        Self {
            category,
            period,
            target,
            progress: 0.0,
            date_set,
        }
    }

    /// Unit of both target and progress.
    pub fn unit(&self) -> &'static str {
        self.category.unit()
    }

    /// Overwrite progress with a freshly computed aggregate.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress;
    }

    /// Reset progress to 0 for a new period.
    pub fn reset_progress(&mut self) {
        self.progress = 0.0;
    }

    /// Whether the target has been reached.
    pub fn is_achieved(&self) -> bool {
        self.progress >= self.target
    }

    /// Multi-line summary of the goal, shown when it is set or cancelled.
    pub fn summary(&self) -> String {
        let achieved = if self.is_achieved() { " (achieved)" } else { "" };
        format!(
            "Date Set: {}\nGoal: {} {}\nTarget: {} {}\nProgress: {} {}{}",
            self.date_set,
            self.period,
            self.category.display_name().to_lowercase(),
            self.target,
            self.unit(),
            self.progress,
            self.unit(),
            achieved,
        )
    }

    /// Table row with all goal data. `index` is the 0-based list position;
    /// the printed index is 1-based to line up with the cancel command.
    pub fn row(&self, index: usize) -> String {
        let achieved = if self.is_achieved() { "\t(achieved)" } else { "" };
        format!(
            "{}\t{}\t{}\t{} {}\t{} {}{}\n",
            index + 1,
            self.date_set,
            self.period,
            self.target,
            self.unit(),
            self.progress,
            self.unit(),
            achieved,
        )
    }

    /// Storage line for this goal. Progress is intentionally absent; it is
    /// rederived at load time.
    pub fn store_line(&self) -> String {
        let sep = STORE_SEPARATOR;
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.category.tag(),
            self.date_set,
            self.period,
            self.target,
        )
    }
}

/// Goal list errors.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    /// Cancellation index past the end of the list
    #[error("cannot cancel goal {index}: no goal at that position")]
    CannotCancel { index: usize },
}
