//! Command layer.
//!
//! Parses one line of user input into a typed [`Command`]. All validation
//! of categories, dates, periods, numbers and indices happens here; parse
//! failures carry the user-facing message and are printed, never thrown
//! further.

pub mod parser;
pub mod types;

// Re-exports for convenience
pub use parser::parse;
pub use types::{Command, CommandError};
