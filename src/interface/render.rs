use crate::models::{DayPlan, Meal, WeeklyPlan};

fn meal_line(index: usize, meal: &Meal, width: usize) -> String {
    let veg = if meal.is_vegetarian { " (veg)" } else { "" };
    let category = meal
        .category
        .as_deref()
        .map(|c| format!("  [{}]", c))
        .unwrap_or_default();

    format!(
        "  {}. {:<width$}{} - ~{:>4.0} kcal | P:{:.0}g F:{:.0}g C:{:.0}g{}",
        index + 1,
        meal.name,
        veg,
        meal.calories,
        meal.protein,
        meal.fat,
        meal.carbs,
        category,
        width = width
    )
}

fn name_width(meals: &[Meal]) -> usize {
    meals.iter().map(|m| m.name.len()).max().unwrap_or(10)
}

/// Display one day's meals as an aligned block.
pub fn display_day_plan(day: &DayPlan) {
    println!("{}", day.label);
    let width = name_width(day.meals());
    for (i, meal) in day.meals().iter().enumerate() {
        println!("{}", meal_line(i, meal, width));
    }
}

/// Display a full weekly plan with the average-target header.
pub fn display_weekly_plan(plan: &WeeklyPlan) {
    println!();
    println!("=== Suggested Menu ===");
    println!(
        "Average target: ~{} kcal/day",
        plan.average_daily_calories()
    );
    println!();

    for day in plan.days() {
        display_day_plan(day);
        println!();
    }
}

/// Display replacement candidates as a numbered list.
pub fn display_candidates(candidates: &[Meal]) {
    println!();
    println!("Replacement options:");
    let width = name_width(candidates);
    for (i, meal) in candidates.iter().enumerate() {
        println!("{}", meal_line(i, meal, width));
    }
}
