//! The `FitCenter` aggregator.
//!
//! Owns one `RecordList`/`GoalList` pair per category behind a fixed-size
//! array keyed by the `Category` enum, so routing is a single index rather
//! than repeated four-way branching. Every mutation path that touches
//! records offers a matching progress-sync hook, and `log_record` bundles
//! the two into one atomic operation for interactive use.

use chrono::NaiveDate;

use crate::goals::{Goal, GoalError, GoalList, PeriodType};
use crate::records::{Category, Record, RecordError, RecordList};

/// One category's record and goal lists.
#[derive(Debug, Clone)]
struct CategoryStore {
    records: RecordList,
    goals: GoalList,
}

impl CategoryStore {
    fn new(category: Category) -> Self {
        Self {
            records: RecordList::new(category),
            goals: GoalList::new(category),
        }
    }
}

/// Manages the fitness of a user through per-category lists of records and
/// goals.
#[derive(Debug, Clone)]
pub struct FitCenter {
    stores: [CategoryStore; Category::COUNT],
}

impl Default for FitCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FitCenter {
    /// Create an empty center with one store per category.
    pub fn new() -> Self {
        Self {
            stores: Category::ALL.map(CategoryStore::new),
        }
    }

    fn store(&self, category: Category) -> &CategoryStore {
        &self.stores[category.index()]
    }

    fn store_mut(&mut self, category: Category) -> &mut CategoryStore {
        &mut self.stores[category.index()]
    }

    /// Append a record to the list of its own category. Pure insert: goal
    /// progress is not touched. The persistence replay inserts through this
    /// and refreshes once at the end; interactive callers want
    /// [`FitCenter::log_record`] instead.
    pub fn add_record(&mut self, record: Record) {
        let category = record.category();
        tracing::debug!(%category, date = %record.date, "record added");
        self.store_mut(category).records.add(record);
    }

    /// Recompute goal progress for one category after a record dated
    /// `record_date` was added. No-op when the record is not for the
    /// current date.
    pub fn sync_progress_on_add(
        &mut self,
        category: Category,
        record_date: NaiveDate,
        current_date: NaiveDate,
    ) {
        if record_date != current_date {
            return;
        }
        let progress = self.store(category).records.daily_progress(current_date);
        self.store_mut(category).goals.update_daily_progress(progress);
    }

    /// Append a record and synchronize the matching goals' progress in one
    /// operation.
    pub fn log_record(&mut self, record: Record, current_date: NaiveDate) {
        let category = record.category();
        let record_date = record.date;
        self.add_record(record);
        self.sync_progress_on_add(category, record_date, current_date);
    }

    /// Append a goal to the list of its own category and immediately compute
    /// its progress from the records on the goal's set date, so a goal never
    /// starts with stale progress. Returns the goal as stored.
    pub fn add_goal(&mut self, goal: Goal) -> &Goal {
        let category = goal.category;
        let progress = self.store(category).records.daily_progress(goal.date_set);

        let mut goal = goal;
        goal.set_progress(progress);
        tracing::debug!(%category, period = %goal.period, target = goal.target, "goal set");

        let goals = &mut self.store_mut(category).goals;
        goals.add(goal);
        &goals.goals()[goals.len() - 1]
    }

    /// Remove a record by 0-based position, returning a summary of the
    /// removed entry.
    pub fn remove_record(
        &mut self,
        category: Category,
        index: usize,
    ) -> Result<String, RecordError> {
        self.store_mut(category).records.remove(index)
    }

    /// Cancel a goal by 0-based position, returning a summary of the
    /// cancelled goal.
    pub fn cancel_goal(&mut self, category: Category, index: usize) -> Result<String, GoalError> {
        self.store_mut(category).goals.remove(index)
    }

    /// Formatted record listing for one category, optionally filtered by
    /// exact date and/or label.
    pub fn record_list_string(
        &self,
        category: Category,
        date: Option<NaiveDate>,
        filter: Option<&str>,
    ) -> String {
        self.store(category).records.records_to_print(date, filter)
    }

    /// Formatted goal listing for one category and period type.
    pub fn goal_list_string(&self, category: Category, period: PeriodType) -> String {
        self.store(category).goals.goals_to_print(period)
    }

    /// Per-category goal sections for every non-empty goal list, shown once
    /// at startup after loading.
    pub fn goal_overview(&self) -> String {
        let mut out = String::new();
        for category in Category::ALL {
            let goals = &self.store(category).goals;
            if goals.is_empty() {
                continue;
            }
            out.push_str(&format!("{} Goals\n", category.display_name()));
            for period in [PeriodType::Daily, PeriodType::Weekly] {
                if goals.goals().iter().any(|g| g.period == period) {
                    out.push_str(&goals.goals_to_print(period));
                    out.push('\n');
                }
            }
        }
        out.trim_end().to_string()
    }

    /// Rollover hook: reset progress for every category's goals of the
    /// given period type.
    pub fn reset_goal_progress(&mut self, period: PeriodType) {
        tracing::info!(%period, "resetting goal progress for new period");
        for store in &mut self.stores {
            store.goals.reset_progress(period);
        }
    }

    /// Recompute every category's goal progress from scratch against the
    /// given date. Called once at startup after the persistence replay, and
    /// after a period rollover.
    pub fn refresh_daily_progress(&mut self, date: NaiveDate) {
        for store in &mut self.stores {
            let progress = store.records.daily_progress(date);
            store.goals.update_daily_progress(progress);
        }
    }

    /// Daily aggregate for one category.
    pub fn daily_progress(&self, category: Category, date: NaiveDate) -> f64 {
        self.store(category).records.daily_progress(date)
    }

    /// Concatenated record serialization across all categories, in the
    /// canonical category order.
    pub fn records_for_store(&self) -> String {
        self.stores.iter().map(|s| s.records.to_store()).collect()
    }

    /// Concatenated goal serialization across all categories, in the
    /// canonical category order.
    pub fn goals_for_store(&self) -> String {
        self.stores.iter().map(|s| s.goals.to_store()).collect()
    }

    /// Number of records held for one category.
    pub fn record_count(&self, category: Category) -> usize {
        self.store(category).records.len()
    }

    /// Number of goals held for one category.
    pub fn goal_count(&self, category: Category) -> usize {
        self.store(category).goals.len()
    }

    /// Goals held for one category, in insertion order.
    pub fn goals(&self, category: Category) -> &[Goal] {
        self.store(category).goals.goals()
    }

    /// Records held for one category, in insertion order.
    pub fn records(&self, category: Category) -> &[Record] {
        self.store(category).records.records()
    }
}
