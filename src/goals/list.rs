//! Ordered per-category goal collections, progress pushes and resets.

use super::types::{Goal, GoalError, PeriodType};
use crate::records::Category;

/// An ordered collection of goals of one category. Insertion order is the
/// index order used for cancellation and display.
#[derive(Debug, Clone)]
pub struct GoalList {
    category: Category,
    goals: Vec<Goal>,
}

impl GoalList {
    /// Create an empty list for the given category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            goals: Vec::new(),
        }
    }

    /// The category this list holds.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Append a goal.
    pub fn add(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Remove a goal by 0-based position, returning a summary of the
    /// cancelled goal.
    pub fn remove(&mut self, index: usize) -> Result<String, GoalError> {
        if index >= self.goals.len() {
            return Err(GoalError::CannotCancel { index });
        }
        let goal = self.goals.remove(index);
        Ok(goal.summary())
    }

    /// Reset progress to 0 for every goal whose period matches. Models a
    /// period-boundary rollover: a new day resets daily goals while weekly
    /// goals persist until the week turns.
    pub fn reset_progress(&mut self, period: PeriodType) {
        for goal in &mut self.goals {
            if goal.period == period {
                goal.reset_progress();
            }
        }
    }

    /// Push a freshly computed daily aggregate into every goal. Called by
    /// the tracker immediately after the matching record list changes, so
    /// progress never drifts from the underlying records.
    pub fn update_daily_progress(&mut self, progress: f64) {
        for goal in &mut self.goals {
            goal.set_progress(progress);
        }
    }

    /// Formatted listing filtered to one period type. Indices shown are the
    /// 1-based list positions used by the cancel command.
    pub fn goals_to_print(&self, period: PeriodType) -> String {
        if self.goals.iter().all(|g| g.period != period) {
            return format!(
                "There are no {} {} goals in the list.",
                period,
                self.category.display_name().to_lowercase()
            );
        }

        let mut out = String::from("Index\tDate Set\tPeriod\tTarget\tProgress\n");
        for (i, goal) in self.goals.iter().enumerate() {
            if goal.period == period {
                out.push_str(&goal.row(i));
            }
        }
        out.trim_end().to_string()
    }

    /// Serialize all goals into restorable text, one line per goal.
    pub fn to_store(&self) -> String {
        let mut out = String::new();
        for goal in &self.goals {
            out.push_str(&goal.store_line());
            out.push('\n');
        }
        out
    }

    /// Number of goals in the list.
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Whether the list holds no goals.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// All goals, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }
}
