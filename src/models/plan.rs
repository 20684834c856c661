use crate::error::{PlanError, Result};
use crate::models::{Meal, MealId};
use crate::planner::constants::{DAYS_PER_WEEK, MEALS_PER_DAY};

/// Exactly three meals assigned to one calendar day of a plan.
///
/// The slot list is private so a partially filled day can never leave this
/// module: construction validates the length and slot writes go through
/// [`DayPlan::replace_slot`].
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub label: String,
    meals: Vec<Meal>,
}

impl DayPlan {
    /// Create a day plan, rejecting any meal count other than three.
    pub fn new(label: impl Into<String>, meals: Vec<Meal>) -> Result<Self> {
        if meals.len() != MEALS_PER_DAY {
            return Err(PlanError::InvalidInput(format!(
                "a day plan needs exactly {} meals, got {}",
                MEALS_PER_DAY,
                meals.len()
            )));
        }
        Ok(Self {
            label: label.into(),
            meals,
        })
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Identifiers of every meal currently in this day, in slot order.
    pub fn meal_ids(&self) -> Vec<MealId> {
        self.meals.iter().map(|m| m.id.clone()).collect()
    }

    pub(crate) fn replace_slot(&mut self, slot: usize, meal: Meal) {
        self.meals[slot] = meal;
    }
}

/// Seven ordered day plans plus the derived average daily calorie target.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyPlan {
    days: Vec<DayPlan>,
    average_daily_calories: u32,
}

impl WeeklyPlan {
    /// Assemble a weekly plan from seven day plans and their service-reported
    /// daily calorie targets.
    ///
    /// The average is computed here, once, from the full target list; nothing
    /// ever adjusts it incrementally.
    pub fn new(days: Vec<DayPlan>, daily_targets: &[f64]) -> Result<Self> {
        if days.len() != DAYS_PER_WEEK || daily_targets.len() != DAYS_PER_WEEK {
            return Err(PlanError::InvalidInput(format!(
                "a weekly plan needs exactly {} days, got {} days / {} targets",
                DAYS_PER_WEEK,
                days.len(),
                daily_targets.len()
            )));
        }
        let sum: f64 = daily_targets.iter().sum();
        let average_daily_calories = (sum / DAYS_PER_WEEK as f64).round() as u32;
        Ok(Self {
            days,
            average_daily_calories,
        })
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn days_mut(&mut self) -> &mut [DayPlan] {
        &mut self.days
    }

    pub fn average_daily_calories(&self) -> u32 {
        self.average_daily_calories
    }

    /// All meal identifiers across the week, in day-then-slot order.
    pub fn all_meal_ids(&self) -> Vec<MealId> {
        self.days.iter().flat_map(|d| d.meal_ids()).collect()
    }
}
