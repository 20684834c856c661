use crate::models::Meal;
use crate::planner::constants::MEALS_PER_DAY;

/// Strategy for picking a day's meals out of a candidate batch.
///
/// The builder calls this with the full service-returned batch and keeps
/// whatever comes back, so ranking experiments stay out of the build loop.
pub type SelectionFn = fn(&[Meal]) -> Vec<Meal>;

/// Default strategy: first three in service-returned order.
///
/// The backend already ranks by relevance; re-ranking client-side would
/// second-guess it.
pub fn take_top_three(candidates: &[Meal]) -> Vec<Meal> {
    candidates.iter().take(MEALS_PER_DAY).cloned().collect()
}

/// Alternate strategy: first three vegetarian candidates, falling back to the
/// service order when there are not enough.
pub fn prefer_vegetarian(candidates: &[Meal]) -> Vec<Meal> {
    let mut picked: Vec<Meal> = candidates
        .iter()
        .filter(|m| m.is_vegetarian)
        .take(MEALS_PER_DAY)
        .cloned()
        .collect();

    for meal in candidates {
        if picked.len() == MEALS_PER_DAY {
            break;
        }
        if !picked.iter().any(|p| p.id == meal.id) {
            picked.push(meal.clone());
        }
    }

    picked
}
