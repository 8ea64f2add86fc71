//! Record type definitions for the four tracked categories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::STORE_SEPARATOR;

/// A tracked life-aspect. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Exercise sessions (energy burnt)
    Exercise,
    /// Diet entries (calories consumed)
    Diet,
    /// Sleep durations
    Sleep,
    /// Body weight measurements
    BodyWeight,
}

impl Category {
    /// All categories in their canonical order. This order is load-bearing:
    /// serialization and display iterate it verbatim.
    pub const ALL: [Category; 4] = [
        Category::Exercise,
        Category::Diet,
        Category::Sleep,
        Category::BodyWeight,
    ];

    /// Number of categories.
    pub const COUNT: usize = 4;

    /// Dense index into per-category storage arrays.
    pub fn index(self) -> usize {
        match self {
            Category::Exercise => 0,
            Category::Diet => 1,
            Category::Sleep => 2,
            Category::BodyWeight => 3,
        }
    }

    /// Get display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Exercise => "Exercise",
            Category::Diet => "Diet",
            Category::Sleep => "Sleep",
            Category::BodyWeight => "Body Weight",
        }
    }

    /// Unit of the aggregatable value for this category.
    pub fn unit(self) -> &'static str {
        match self {
            Category::Exercise => "kcal",
            Category::Diet => "kcal",
            Category::Sleep => "hours",
            Category::BodyWeight => "kg",
        }
    }

    /// One-letter tag used in the storage format.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Exercise => "E",
            Category::Diet => "D",
            Category::Sleep => "S",
            Category::BodyWeight => "W",
        }
    }

    /// Resolve a storage tag back to a category.
    pub fn from_tag(tag: &str) -> Option<Category> {
        match tag {
            "E" => Some(Category::Exercise),
            "D" => Some(Category::Diet),
            "S" => Some(Category::Sleep),
            "W" => Some(Category::BodyWeight),
            _ => None,
        }
    }

    /// Parse user input. Accepts full names and single-letter shorthands,
    /// case-insensitive.
    pub fn parse(input: &str) -> Option<Category> {
        match input.to_lowercase().as_str() {
            "exercise" | "e" => Some(Category::Exercise),
            "diet" | "d" => Some(Category::Diet),
            "sleep" | "s" => Some(Category::Sleep),
            "weight" | "bodyweight" | "body_weight" | "w" => Some(Category::BodyWeight),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Category-specific payload of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordData {
    /// An exercise session
    Exercise {
        /// Activity performed (running, swimming, ...)
        activity: String,
        /// Energy burnt in kcal
        energy_kcal: f64,
    },
    /// A meal or snack
    Diet {
        /// What was eaten
        food: String,
        /// Calories consumed in kcal
        calories_kcal: f64,
    },
    /// A night's sleep
    Sleep {
        /// Hours slept
        hours: f64,
    },
    /// A weigh-in
    BodyWeight {
        /// Body weight in kg
        weight_kg: f64,
    },
}

/// A dated activity entry. Immutable once created; identified only by its
/// position in its owning list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Date the activity happened
    pub date: NaiveDate,
    /// Category-specific fields
    pub data: RecordData,
}

impl Record {
    /// Create a new record.
    pub fn new(date: NaiveDate, data: RecordData) -> Self {
        Self { date, data }
    }

    /// The category this record belongs to, derived from its payload.
    pub fn category(&self) -> Category {
        match self.data {
            RecordData::Exercise { .. } => Category::Exercise,
            RecordData::Diet { .. } => Category::Diet,
            RecordData::Sleep { .. } => Category::Sleep,
            RecordData::BodyWeight { .. } => Category::BodyWeight,
        }
    }

    /// The numeric value that rolls up into daily progress.
    pub fn value(&self) -> f64 {
        match self.data {
            RecordData::Exercise { energy_kcal, .. } => energy_kcal,
            RecordData::Diet { calories_kcal, .. } => calories_kcal,
            RecordData::Sleep { hours } => hours,
            RecordData::BodyWeight { weight_kg } => weight_kg,
        }
    }

    /// Secondary label (exercise activity / diet food), if the category
    /// carries one. Used as the optional display filter.
    pub fn label(&self) -> Option<&str> {
        match &self.data {
            RecordData::Exercise { activity, .. } => Some(activity),
            RecordData::Diet { food, .. } => Some(food),
            RecordData::Sleep { .. } | RecordData::BodyWeight { .. } => None,
        }
    }

    /// Human-readable one-line summary, shown when a record is added or
    /// removed.
    pub fn summary(&self) -> String {
        match &self.data {
            RecordData::Exercise {
                activity,
                energy_kcal,
            } => format!("exercise on {}: {} kcal burnt ({})", self.date, energy_kcal, activity),
            RecordData::Diet {
                food,
                calories_kcal,
            } => format!("diet on {}: {} kcal consumed ({})", self.date, calories_kcal, food),
            RecordData::Sleep { hours } => {
                format!("sleep on {}: {} hours slept", self.date, hours)
            }
            RecordData::BodyWeight { weight_kg } => {
                format!("body weight on {}: {} kg", self.date, weight_kg)
            }
        }
    }

    /// Storage line for this record. Field order and separator are
    /// load/save-stable; see the storage module.
    pub fn store_line(&self) -> String {
        let sep = STORE_SEPARATOR;
        let tag = self.category().tag();
        match &self.data {
            RecordData::Exercise {
                activity,
                energy_kcal,
            } => format!("{tag}{sep}{}{sep}{activity}{sep}{energy_kcal}", self.date),
            RecordData::Diet {
                food,
                calories_kcal,
            } => format!("{tag}{sep}{}{sep}{food}{sep}{calories_kcal}", self.date),
            RecordData::Sleep { hours } => format!("{tag}{sep}{}{sep}{hours}", self.date),
            RecordData::BodyWeight { weight_kg } => {
                format!("{tag}{sep}{}{sep}{weight_kg}", self.date)
            }
        }
    }
}

/// Record list errors.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Removal index past the end of the list
    #[error("record index {index} is out of range (the list has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },
}
