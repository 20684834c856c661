/// Days in a full weekly plan.
pub const DAYS_PER_WEEK: usize = 7;

/// Meal slots per day (breakfast / lunch / dinner).
pub const MEALS_PER_DAY: usize = 3;

/// Label for the single-day plan.
pub const TODAY_LABEL: &str = "Today";

/// Human-readable slot names, indexed by slot position.
pub const SLOT_NAMES: [&str; MEALS_PER_DAY] = ["Breakfast", "Lunch", "Dinner"];

/// Label for day `day` (1-based) of a weekly plan.
pub fn day_label(day: u32) -> String {
    format!("Day {}", day)
}
