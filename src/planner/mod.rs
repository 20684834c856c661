pub mod constants;
pub mod exclusion;
pub mod replacement;
pub mod selection;
pub mod weekly;

pub use constants::*;
pub use exclusion::ExclusionSet;
pub use replacement::{ReplacementContext, ReplacementFlow};
pub use selection::{prefer_vegetarian, take_top_three, SelectionFn};
pub use weekly::{DayPlanOutcome, PlanAssembler};
