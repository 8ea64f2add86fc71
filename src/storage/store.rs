//! Text-file persistence for records and goals.
//!
//! Saving writes the tracker's `*_for_store` output verbatim. Loading
//! parses each line back into a record or goal and replays it through the
//! tracker, then refreshes goal progress for the current date — the same
//! sequence a fresh session of manual input would have produced.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use super::config::StorageSettings;
use super::STORE_SEPARATOR;
use crate::goals::{Goal, PeriodType};
use crate::records::{Category, Record, RecordData};
use crate::tracker::FitCenter;

/// Counts reported after a successful load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadSummary {
    /// Records restored
    pub records: usize,
    /// Goals restored
    pub goals: usize,
}

/// Owns the paths of the record and goal files.
#[derive(Debug, Clone)]
pub struct DataStore {
    records_path: PathBuf,
    goals_path: PathBuf,
}

impl DataStore {
    /// Create a store under the given data directory, creating the
    /// directory if needed.
    pub fn open(data_dir: &Path, settings: &StorageSettings) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            records_path: data_dir.join(&settings.records_file),
            goals_path: data_dir.join(&settings.goals_file),
        })
    }

    /// Create a store over explicit file paths (for testing).
    pub fn with_paths(records_path: PathBuf, goals_path: PathBuf) -> Self {
        Self {
            records_path,
            goals_path,
        }
    }

    /// Write all records and goals to disk.
    pub fn save(&self, center: &FitCenter) -> Result<(), StoreError> {
        std::fs::write(&self.records_path, center.records_for_store())?;
        std::fs::write(&self.goals_path, center.goals_for_store())?;
        tracing::debug!(
            records = %self.records_path.display(),
            goals = %self.goals_path.display(),
            "tracker state saved"
        );
        Ok(())
    }

    /// Restore records and goals into the tracker and refresh goal progress
    /// for `today`. Missing files mean a fresh start, not an error; a
    /// malformed line fails the load.
    pub fn load(&self, center: &mut FitCenter, today: NaiveDate) -> Result<LoadSummary, StoreError> {
        let mut summary = LoadSummary::default();

        // Records first: goals compute their initial progress from them
        for line in read_lines(&self.records_path)? {
            center.add_record(parse_record_line(&line)?);
            summary.records += 1;
        }
        for line in read_lines(&self.goals_path)? {
            center.add_goal(parse_goal_line(&line)?);
            summary.goals += 1;
        }

        center.refresh_daily_progress(today);
        tracing::info!(
            records = summary.records,
            goals = summary.goals,
            "tracker state loaded"
        );
        Ok(summary)
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Parse one stored record line: `TAG | DATE | [LABEL | ]VALUE`.
pub fn parse_record_line(line: &str) -> Result<Record, StoreError> {
    let malformed = || StoreError::MalformedRecord(line.to_string());
    let fields: Vec<&str> = line.split(STORE_SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(malformed());
    }

    let category = Category::from_tag(fields[0]).ok_or_else(malformed)?;
    let date: NaiveDate = fields[1].parse().map_err(|_| malformed())?;

    let data = match category {
        Category::Exercise => {
            if fields.len() != 4 {
                return Err(malformed());
            }
            RecordData::Exercise {
                activity: fields[2].to_string(),
                energy_kcal: fields[3].parse().map_err(|_| malformed())?,
            }
        }
        Category::Diet => {
            if fields.len() != 4 {
                return Err(malformed());
            }
            RecordData::Diet {
                food: fields[2].to_string(),
                calories_kcal: fields[3].parse().map_err(|_| malformed())?,
            }
        }
        Category::Sleep => {
            if fields.len() != 3 {
                return Err(malformed());
            }
            RecordData::Sleep {
                hours: fields[2].parse().map_err(|_| malformed())?,
            }
        }
        Category::BodyWeight => {
            if fields.len() != 3 {
                return Err(malformed());
            }
            RecordData::BodyWeight {
                weight_kg: fields[2].parse().map_err(|_| malformed())?,
            }
        }
    };

    Ok(Record::new(date, data))
}

/// Parse one stored goal line: `TAG | DATE_SET | PERIOD | TARGET`.
/// Progress is not stored; it is rederived after replay.
pub fn parse_goal_line(line: &str) -> Result<Goal, StoreError> {
    let malformed = || StoreError::MalformedGoal(line.to_string());
    let fields: Vec<&str> = line.split(STORE_SEPARATOR).collect();
    if fields.len() != 4 {
        return Err(malformed());
    }

    let category = Category::from_tag(fields[0]).ok_or_else(malformed)?;
    let date_set: NaiveDate = fields[1].parse().map_err(|_| malformed())?;
    let period = PeriodType::parse(fields[2]).ok_or_else(malformed)?;
    let target: f64 = fields[3].parse().map_err(|_| malformed())?;

    Ok(Goal::new(category, period, target, date_set))
}

/// Persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record entry: \"{0}\"")]
    MalformedRecord(String),

    #[error("malformed goal entry: \"{0}\"")]
    MalformedGoal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_record_line_variants() {
        let record = parse_record_line("E | 2024-01-01 | running | 300").unwrap();
        assert_eq!(record.category(), Category::Exercise);
        assert_eq!(record.value(), 300.0);

        let record = parse_record_line("S | 2024-01-02 | 7.5").unwrap();
        assert_eq!(record.category(), Category::Sleep);
        assert_eq!(record.date, date(2024, 1, 2));
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(matches!(
            parse_record_line("X | 2024-01-01 | 7.5"),
            Err(StoreError::MalformedRecord(_))
        ));
        assert!(matches!(
            parse_record_line("S | 2024-01-01"),
            Err(StoreError::MalformedRecord(_))
        ));
        // Sleep records carry no label
        assert!(matches!(
            parse_record_line("S | 2024-01-01 | nap | 7.5"),
            Err(StoreError::MalformedRecord(_))
        ));
        assert!(matches!(
            parse_goal_line("E | 2024-01-01 | monthly | 600"),
            Err(StoreError::MalformedGoal(_))
        ));
    }

    #[test]
    fn test_record_line_roundtrip() {
        let original = Record::new(
            date(2024, 1, 1),
            RecordData::Diet {
                food: "chicken rice".to_string(),
                calories_kcal: 650.0,
            },
        );
        let parsed = parse_record_line(&original.store_line()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_goal_line_roundtrip() {
        let original = Goal::new(Category::Sleep, PeriodType::Weekly, 56.0, date(2024, 1, 1));
        let parsed = parse_goal_line(&original.store_line()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_missing_files_mean_fresh_start() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::with_paths(
            dir.path().join("records.txt"),
            dir.path().join("goals.txt"),
        );

        let mut center = FitCenter::new();
        let summary = store.load(&mut center, date(2024, 1, 1)).unwrap();
        assert_eq!(summary.records, 0);
        assert_eq!(summary.goals, 0);
    }

    #[test]
    fn test_save_load_roundtrip_restores_state_and_progress() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::with_paths(
            dir.path().join("records.txt"),
            dir.path().join("goals.txt"),
        );
        let today = date(2024, 1, 1);

        let mut center = FitCenter::new();
        center.log_record(
            Record::new(
                today,
                RecordData::Exercise {
                    activity: "running".to_string(),
                    energy_kcal: 200.0,
                },
            ),
            today,
        );
        center.log_record(
            Record::new(
                today,
                RecordData::Exercise {
                    activity: "swimming".to_string(),
                    energy_kcal: 300.0,
                },
            ),
            today,
        );
        center.log_record(Record::new(today, RecordData::Sleep { hours: 7.5 }), today);
        center.add_goal(Goal::new(Category::Exercise, PeriodType::Daily, 600.0, today));
        store.save(&center).unwrap();

        let mut restored = FitCenter::new();
        let summary = store.load(&mut restored, today).unwrap();

        assert_eq!(summary.records, 3);
        assert_eq!(summary.goals, 1);
        assert_eq!(restored.records(Category::Exercise), center.records(Category::Exercise));
        assert_eq!(restored.goals(Category::Exercise)[0].progress, 500.0);
        assert_eq!(restored.daily_progress(Category::Sleep, today), 7.5);
    }
}
