//! Console presentation.
//!
//! Frames every command result between dividers and owns the stdin line
//! source. Callers print returned strings verbatim; formatting decisions
//! stay in the core's `*_to_print` family.

use std::io::{self, BufRead, Write};

/// Horizontal rule framing every printed message.
pub const DIVIDER: &str = "----------------------------------------------------------------";

pub const MESSAGE_WELCOME: &str = "Welcome to FitTrack!\nLog your exercise, diet, sleep and body weight, and set goals to keep\nyourself honest. Type \"help\" to see the available commands.";

pub const MESSAGE_BYE: &str = "Goodbye, keep moving!";

pub const MESSAGE_HELP: &str = "Available commands:
  add    <category> <date|today> <value> [label]   record an activity
  view   <category> [date|today] [label]           list records
  delete <category> <index>                        remove a record
  goal   <category> <daily|weekly> <target> [date] set a goal
  check  <category> <daily|weekly>                 list goals
  cancel <category> <index>                        cancel a goal
  help                                             show this text
  bye                                              save and exit

Categories: exercise (kcal), diet (kcal), sleep (hours), weight (kg).";

/// Console session: reads command lines and prints framed messages.
pub struct Ui {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    /// Create a console session over stdin.
    pub fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }

    /// Print the prompt and read the next input line, trimmed. `None` on
    /// end of input.
    pub fn read_command(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        match self.lines.next() {
            Some(Ok(line)) => Some(line.trim().to_string()),
            _ => None,
        }
    }

    /// Print a message framed between dividers.
    pub fn print_message(&self, message: &str) {
        println!("{DIVIDER}");
        println!("{}", message.trim_end());
        println!("{DIVIDER}");
    }

    /// Print the welcome banner.
    pub fn print_greeting(&self) {
        self.print_message(MESSAGE_WELCOME);
    }

    /// Print the farewell banner.
    pub fn print_farewell(&self) {
        self.print_message(MESSAGE_BYE);
    }
}
