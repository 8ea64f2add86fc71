//! Interactive session driving the tracker.
//!
//! Owns the tracker, the data store and the console, detects period
//! rollovers between commands, and persists after every mutation.

use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate};

use fittrack::commands::{self, Command, CommandError};
use fittrack::goals::PeriodType;
use fittrack::storage::{config, DataStore};
use fittrack::ui::{Ui, MESSAGE_HELP};
use fittrack::{AppConfig, FitCenter};

/// One interactive tracker session.
pub struct App {
    center: FitCenter,
    store: DataStore,
    config: AppConfig,
    ui: Ui,
    current_date: NaiveDate,
}

/// Load configuration and stored data, then run the command loop until the
/// user leaves or input ends.
pub fn run() -> anyhow::Result<()> {
    let config = config::load_config().context("failed to load configuration")?;
    if !config::get_config_path().exists() {
        config::save_config(&config).context("failed to write default configuration")?;
    }
    let store = DataStore::open(&config.data_dir, &config.storage)
        .context("failed to open the data store")?;

    let mut center = FitCenter::new();
    let today = Local::now().date_naive();
    let summary = store
        .load(&mut center, today)
        .context("failed to load stored records and goals")?;

    let ui = Ui::new();
    ui.print_greeting();
    if config.ui.show_goal_overview && summary.goals > 0 {
        ui.print_message(&center.goal_overview());
    }

    let mut app = App {
        center,
        store,
        config,
        ui,
        current_date: today,
    };
    app.run_loop()
}

impl App {
    fn run_loop(&mut self) -> anyhow::Result<()> {
        loop {
            self.check_rollover();

            let prompt = self.config.ui.prompt.clone();
            let Some(line) = self.ui.read_command(&prompt) else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            match commands::parse(&line, self.current_date) {
                Ok(Command::Exit) => {
                    self.persist()?;
                    self.ui.print_farewell();
                    break;
                }
                Ok(command) => {
                    let output = self.execute(command)?;
                    self.ui.print_message(&output);
                }
                // Soft failure: the parse error is the user-visible result
                Err(error) => self.print_command_error(error),
            }
        }
        Ok(())
    }

    /// Reset goal progress when the calendar moved on since the last
    /// command: a new day resets daily goals, a new ISO week also resets
    /// weekly ones. Progress is then rederived for the new date.
    fn check_rollover(&mut self) {
        let now = Local::now().date_naive();
        if now == self.current_date {
            return;
        }
        tracing::info!(from = %self.current_date, to = %now, "period rollover");

        self.center.reset_goal_progress(PeriodType::Daily);
        if now.iso_week() != self.current_date.iso_week() {
            self.center.reset_goal_progress(PeriodType::Weekly);
        }
        self.center.refresh_daily_progress(now);
        self.current_date = now;
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<String> {
        match command {
            Command::AddRecord { record } => {
                let summary = record.summary();
                self.center.log_record(record, self.current_date);
                self.persist()?;
                Ok(format!("Got it! Added {summary}."))
            }
            Command::ViewRecords {
                category,
                date,
                filter,
            } => Ok(self
                .center
                .record_list_string(category, date, filter.as_deref())),
            Command::DeleteRecord { category, index } => {
                match self.center.remove_record(category, index) {
                    Ok(summary) => {
                        self.persist()?;
                        Ok(format!("Removed {summary}."))
                    }
                    Err(error) => Ok(error.to_string()),
                }
            }
            Command::SetGoal { goal } => {
                let summary = self.center.add_goal(goal).summary();
                self.persist()?;
                Ok(format!("New goal set!\n{summary}"))
            }
            Command::CheckGoals { category, period } => {
                Ok(self.center.goal_list_string(category, period))
            }
            Command::CancelGoal { category, index } => {
                match self.center.cancel_goal(category, index) {
                    Ok(summary) => {
                        self.persist()?;
                        Ok(format!("Goal cancelled.\n{summary}"))
                    }
                    Err(error) => Ok(error.to_string()),
                }
            }
            Command::Help => Ok(MESSAGE_HELP.to_string()),
            // Exit is handled by the loop
            Command::Exit => Ok(String::new()),
        }
    }

    fn print_command_error(&self, error: CommandError) {
        tracing::debug!(%error, "rejected command");
        self.ui.print_message(&error.to_string());
    }

    fn persist(&self) -> anyhow::Result<()> {
        if self.config.storage.save_on_change {
            self.store
                .save(&self.center)
                .context("failed to save tracker state")?;
        }
        Ok(())
    }
}
