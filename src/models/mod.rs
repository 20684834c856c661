pub mod meal;
pub mod plan;

pub use meal::{Meal, MealId};
pub use plan::{DayPlan, WeeklyPlan};
