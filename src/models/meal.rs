use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque meal identifier.
///
/// The backend is inconsistent about id types (numeric for database-backed
/// dishes, string for model-generated ones), so both wire forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MealId {
    Int(i64),
    Text(String),
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealId::Int(n) => write!(f, "{}", n),
            MealId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for MealId {
    fn from(n: i64) -> Self {
        MealId::Int(n)
    }
}

impl From<&str> for MealId {
    fn from(s: &str) -> Self {
        MealId::Text(s.to_string())
    }
}

/// A suggested or logged food entry.
///
/// Meals are immutable value objects once received from the service; the
/// assembler only ever replaces whole Meal references, never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,

    #[serde(rename = "food_name")]
    pub name: String,

    /// Dish category as reported by the backend (display only).
    #[serde(default)]
    pub category: Option<String>,

    pub calories: f64,

    pub protein: f64,

    pub fat: f64,

    pub carbs: f64,

    #[serde(default)]
    pub is_vegetarian: bool,
}

impl Meal {
    /// Basic validation: all macro values non-negative.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.fat >= 0.0 && self.carbs >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: ~{:.0} kcal, P:{} F:{} C:{}",
            self.name, self.id, self.calories, self.protein, self.fat, self.carbs
        )
    }
}
