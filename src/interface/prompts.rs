use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{DayPlan, Meal};
use crate::planner::constants::SLOT_NAMES;
use crate::service::ProfileParams;

/// Yes/no confirmation with a default.
pub fn prompt_yes_no(message: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?)
}

/// Collect the optional profile attributes sent with suggestion requests.
///
/// Empty answers are skipped; the backend decides whether what it got is
/// enough to compute a calorie target.
pub fn prompt_profile() -> Result<ProfileParams> {
    let height: String = Input::new()
        .with_prompt("Height in cm (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;
    let weight: String = Input::new()
        .with_prompt("Weight in kg (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;
    let age: String = Input::new()
        .with_prompt("Age (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    Ok(ProfileParams {
        height: height.trim().parse().ok(),
        weight: weight.trim().parse().ok(),
        age: age.trim().parse().ok(),
    })
}

/// Pick a day of the plan by label.
pub fn prompt_pick_day(days: &[DayPlan]) -> Result<usize> {
    let labels: Vec<&str> = days.iter().map(|d| d.label.as_str()).collect();
    Ok(Select::new()
        .with_prompt("Which day?")
        .items(&labels)
        .default(0)
        .interact()?)
}

/// Pick a meal slot within a day.
pub fn prompt_pick_slot(day: &DayPlan) -> Result<usize> {
    let items: Vec<String> = day
        .meals()
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}: {}", SLOT_NAMES[i], m.name))
        .collect();
    Ok(Select::new()
        .with_prompt("Which meal to replace?")
        .items(&items)
        .default(0)
        .interact()?)
}

/// Pick a replacement candidate, or None to keep the original meal.
pub fn prompt_pick_candidate(candidates: &[Meal]) -> Result<Option<usize>> {
    let mut items: Vec<String> = candidates
        .iter()
        .map(|m| {
            let veg = if m.is_vegetarian { " (veg)" } else { "" };
            format!("{}{} - ~{:.0} kcal", m.name, veg, m.calories)
        })
        .collect();
    items.push("Keep the original".to_string());

    let picked = Select::new()
        .with_prompt("Choose a replacement")
        .items(&items)
        .default(0)
        .interact()?;

    if picked == candidates.len() {
        Ok(None)
    } else {
        Ok(Some(picked))
    }
}
