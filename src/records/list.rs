//! Ordered per-category record collections and their daily aggregates.

use chrono::NaiveDate;

use super::types::{Category, Record, RecordError};

/// An ordered collection of records of one category. Insertion order is the
/// index order used for removal and display.
#[derive(Debug, Clone)]
pub struct RecordList {
    category: Category,
    records: Vec<Record>,
}

impl RecordList {
    /// Create an empty list for the given category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            records: Vec::new(),
        }
    }

    /// The category this list holds.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Append a record. The router guarantees the category matches.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Remove a record by 0-based position, returning a summary of the
    /// removed entry.
    pub fn remove(&mut self, index: usize) -> Result<String, RecordError> {
        if index >= self.records.len() {
            return Err(RecordError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        let record = self.records.remove(index);
        Ok(record.summary())
    }

    /// Sum of the values of all records dated exactly `date`. 0 when none
    /// match. Single source of truth for per-category daily progress.
    pub fn daily_progress(&self, date: NaiveDate) -> f64 {
        self.records
            .iter()
            .filter(|r| r.date == date)
            .map(|r| r.value())
            .sum()
    }

    /// Formatted listing, optionally filtered by exact date and/or label
    /// (exercise activity / diet food). Indices shown are the 1-based list
    /// positions used by the delete command.
    pub fn records_to_print(&self, date: Option<NaiveDate>, filter: Option<&str>) -> String {
        if self.records.is_empty() {
            return format!(
                "There are no {} records in the list.",
                self.category.display_name().to_lowercase()
            );
        }

        let matches = |record: &Record| {
            if let Some(d) = date {
                if record.date != d {
                    return false;
                }
            }
            if let Some(f) = filter {
                match record.label() {
                    Some(label) => {
                        if !label.eq_ignore_ascii_case(f) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        };

        let mut out = String::from(table_header(self.category));
        let mut found = false;
        for (i, record) in self.records.iter().enumerate() {
            if !matches(record) {
                continue;
            }
            found = true;
            out.push_str(&row(i, record));
        }

        if !found {
            return "No records match the given date or filter.".to_string();
        }
        out.trim_end().to_string()
    }

    /// Serialize all records into restorable text, one line per record.
    pub fn to_store(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.store_line());
            out.push('\n');
        }
        out
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

fn table_header(category: Category) -> &'static str {
    match category {
        Category::Exercise => "Index\tDate\t\tActivity\tEnergy\n",
        Category::Diet => "Index\tDate\t\tFood\tCalories\n",
        Category::Sleep => "Index\tDate\t\tDuration\n",
        Category::BodyWeight => "Index\tDate\t\tWeight\n",
    }
}

fn row(index: usize, record: &Record) -> String {
    let unit = record.category().unit();
    match record.label() {
        Some(label) => format!(
            "{}\t{}\t{}\t{} {}\n",
            index + 1,
            record.date,
            label,
            record.value(),
            unit
        ),
        None => format!("{}\t{}\t{} {}\n", index + 1, record.date, record.value(), unit),
    }
}
