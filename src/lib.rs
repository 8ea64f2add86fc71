//! FitTrack - Personal Fitness Tracker
//!
//! A single-user fitness tracking application built in Rust. Records daily
//! activity entries (exercise, diet, sleep, body weight), tracks periodic
//! goals against each category, and persists everything to plain text files
//! between sessions.

pub mod commands;
pub mod goals;
pub mod records;
pub mod storage;
pub mod tracker;
pub mod ui;

// Re-export commonly used types
pub use goals::{Goal, GoalList, PeriodType};
pub use records::{Category, Record, RecordData, RecordList};
pub use storage::config::AppConfig;
pub use storage::store::DataStore;
pub use tracker::FitCenter;
