pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod service;

pub use error::{PlanError, Result};
pub use models::{DayPlan, Meal, MealId, WeeklyPlan};
