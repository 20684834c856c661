pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_pick_candidate, prompt_pick_day, prompt_pick_slot, prompt_profile, prompt_yes_no,
};
pub use render::{display_candidates, display_day_plan, display_weekly_plan};
