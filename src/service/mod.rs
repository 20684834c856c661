//! Seams to the remote nutrition backend.
//!
//! The planner only ever talks to the backend through the two traits below,
//! so tests can script responses without a server. [`http::ApiClient`] is the
//! real, reqwest-backed implementation.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Meal, MealId};

pub use http::ApiClient;

/// Optional user attributes forwarded with every suggestion request.
///
/// The backend computes the daily calorie target from whatever subset it gets
/// and flags an incomplete profile itself, so nothing is required here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionRequest {
    pub exclude_ids: Vec<MealId>,

    #[serde(flatten)]
    pub profile: ProfileParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub suggestions: Vec<Meal>,

    pub calculated_daily_calories: f64,

    /// Absent means the profile is complete; only an explicit `false` should
    /// redirect the user to profile completion.
    #[serde(default)]
    pub is_profile_complete: Option<bool>,
}

impl SuggestionResponse {
    pub fn profile_complete(&self) -> bool {
        self.is_profile_complete.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplacementRequest {
    pub meal_to_replace: Meal,
    pub exclude_ids: Vec<MealId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplacementResponse {
    #[serde(default)]
    pub suggestions: Vec<Meal>,
}

/// Produces ranked meal candidates given exclusions and profile parameters.
///
/// Object-safe so the planner can hold an `Arc<dyn SuggestionService>`.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    /// Fetch a batch of candidate meals plus the computed daily target.
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse>;

    /// Fetch alternatives for one specific meal.
    async fn replacements(&self, request: &ReplacementRequest) -> Result<ReplacementResponse>;
}

/// Records consumed meals. Fire-and-forget from the planner's perspective.
#[async_trait]
pub trait HistoryService: Send + Sync {
    async fn log_meal(&self, meal: &Meal) -> Result<()>;
}
