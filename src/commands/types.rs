//! Command definitions and parse errors.

use chrono::NaiveDate;

use crate::goals::{Goal, PeriodType};
use crate::records::{Category, Record};

/// A fully validated user command, ready to execute against the tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add an activity record
    AddRecord { record: Record },
    /// List records of a category, optionally filtered
    ViewRecords {
        category: Category,
        date: Option<NaiveDate>,
        filter: Option<String>,
    },
    /// Delete a record by 0-based index
    DeleteRecord { category: Category, index: usize },
    /// Set a new goal
    SetGoal { goal: Goal },
    /// List goals of a category and period
    CheckGoals {
        category: Category,
        period: PeriodType,
    },
    /// Cancel a goal by 0-based index
    CancelGoal { category: Category, index: usize },
    /// Show usage help
    Help,
    /// End the session
    Exit,
}

/// Command parse errors. The messages are user-facing; the app prints them
/// verbatim as the command's result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Sorry, I don't know the command \"{0}\". Type \"help\" to see what I can do.")]
    UnknownCommand(String),

    #[error("Cannot view or check \"{0}\": categories are exercise, diet, sleep and weight.")]
    UnknownCategory(String),

    #[error("\"{0}\" is not a goal period. Use \"daily\" or \"weekly\".")]
    UnknownPeriod(String),

    #[error("\"{0}\" is not a date. Dates look like 2024-01-31; \"today\" also works.")]
    InvalidDate(String),

    #[error("\"{0}\" is not a positive number.")]
    InvalidNumber(String),

    #[error("\"{0}\" is not a list index. Indices start from 1.")]
    InvalidIndex(String),

    #[error("The {0} command needs more arguments. Type \"help\" for usage.")]
    MissingArgument(&'static str),
}
