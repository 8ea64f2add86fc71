//! Line parser for user commands.
//!
//! Grammar (tokens separated by whitespace, labels may span several tokens):
//!
//! ```text
//! add    <category> <date|today> <value> [label...]
//! view   <category> [date|today] [label...]
//! delete <category> <index>
//! goal   <category> <daily|weekly> <target> [date|today]
//! check  <category> <daily|weekly>
//! cancel <category> <index>
//! help
//! bye
//! ```

use chrono::NaiveDate;

use super::types::{Command, CommandError};
use crate::goals::{Goal, PeriodType};
use crate::records::{Category, Record, RecordData};

/// Parse one input line into a command. `today` resolves the literal
/// `today` and is the default date for goals.
pub fn parse(line: &str, today: NaiveDate) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&word) = tokens.first() else {
        return Err(CommandError::UnknownCommand(String::new()));
    };

    match word.to_lowercase().as_str() {
        "add" => parse_add(&tokens, today),
        "view" => parse_view(&tokens, today),
        "delete" => parse_delete(&tokens),
        "goal" => parse_goal(&tokens, today),
        "check" => parse_check(&tokens),
        "cancel" => parse_cancel(&tokens),
        "help" => Ok(Command::Help),
        "bye" | "exit" | "quit" => Ok(Command::Exit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn parse_add(tokens: &[&str], today: NaiveDate) -> Result<Command, CommandError> {
    if tokens.len() < 4 {
        return Err(CommandError::MissingArgument("add"));
    }
    let category = parse_category(tokens[1])?;
    let date = parse_date(tokens[2], today)?;
    let value = parse_value(tokens[3])?;
    let label = join_label(&tokens[4..]);

    let data = match category {
        Category::Exercise => RecordData::Exercise {
            activity: label.ok_or(CommandError::MissingArgument("add"))?,
            energy_kcal: value,
        },
        Category::Diet => RecordData::Diet {
            food: label.ok_or(CommandError::MissingArgument("add"))?,
            calories_kcal: value,
        },
        Category::Sleep => RecordData::Sleep { hours: value },
        Category::BodyWeight => RecordData::BodyWeight { weight_kg: value },
    };

    Ok(Command::AddRecord {
        record: Record::new(date, data),
    })
}

fn parse_view(tokens: &[&str], today: NaiveDate) -> Result<Command, CommandError> {
    if tokens.len() < 2 {
        return Err(CommandError::MissingArgument("view"));
    }
    let category = parse_category(tokens[1])?;

    // The second argument may be a date or the start of a label filter
    let (date, rest) = match tokens.get(2) {
        Some(&token) => match parse_date(token, today) {
            Ok(date) => (Some(date), &tokens[3..]),
            Err(_) => (None, &tokens[2..]),
        },
        None => (None, &tokens[2..]),
    };

    Ok(Command::ViewRecords {
        category,
        date,
        filter: join_label(rest),
    })
}

fn parse_delete(tokens: &[&str]) -> Result<Command, CommandError> {
    if tokens.len() < 3 {
        return Err(CommandError::MissingArgument("delete"));
    }
    Ok(Command::DeleteRecord {
        category: parse_category(tokens[1])?,
        index: parse_index(tokens[2])?,
    })
}

fn parse_goal(tokens: &[&str], today: NaiveDate) -> Result<Command, CommandError> {
    if tokens.len() < 4 {
        return Err(CommandError::MissingArgument("goal"));
    }
    let category = parse_category(tokens[1])?;
    let period = parse_period(tokens[2])?;
    let target = parse_value(tokens[3])?;
    let date_set = match tokens.get(4) {
        Some(&token) => parse_date(token, today)?,
        None => today,
    };

    Ok(Command::SetGoal {
        goal: Goal::new(category, period, target, date_set),
    })
}

fn parse_check(tokens: &[&str]) -> Result<Command, CommandError> {
    if tokens.len() < 3 {
        return Err(CommandError::MissingArgument("check"));
    }
    Ok(Command::CheckGoals {
        category: parse_category(tokens[1])?,
        period: parse_period(tokens[2])?,
    })
}

fn parse_cancel(tokens: &[&str]) -> Result<Command, CommandError> {
    if tokens.len() < 3 {
        return Err(CommandError::MissingArgument("cancel"));
    }
    Ok(Command::CancelGoal {
        category: parse_category(tokens[1])?,
        index: parse_index(tokens[2])?,
    })
}

fn parse_category(token: &str) -> Result<Category, CommandError> {
    Category::parse(token).ok_or_else(|| CommandError::UnknownCategory(token.to_string()))
}

fn parse_period(token: &str) -> Result<PeriodType, CommandError> {
    PeriodType::parse(token).ok_or_else(|| CommandError::UnknownPeriod(token.to_string()))
}

fn parse_date(token: &str, today: NaiveDate) -> Result<NaiveDate, CommandError> {
    if token.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidDate(token.to_string()))
}

fn parse_value(token: &str) -> Result<f64, CommandError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(CommandError::InvalidNumber(token.to_string())),
    }
}

/// User-facing indices are 1-based; the core lists are 0-based.
fn parse_index(token: &str) -> Result<usize, CommandError> {
    match token.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index - 1),
        _ => Err(CommandError::InvalidIndex(token.to_string())),
    }
}

fn join_label(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}
