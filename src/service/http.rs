//! Reqwest-backed client for the nutrition backend.
//!
//! Endpoints:
//! - `POST {base}/suggest_ml`          — menu suggestions + daily target
//! - `POST {base}/suggest_replacement` — alternatives for one meal
//! - `POST {base}/log_meal`            — append a meal to the user's history

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::Meal;
use crate::service::{
    HistoryService, ReplacementRequest, ReplacementResponse, SuggestionRequest,
    SuggestionResponse, SuggestionService,
};

/// Default backend base URL (local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Serialize)]
struct LogMealRequest<'a> {
    food: &'a Meal,
}

/// HTTP client for the suggestion and history endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "posting request");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SuggestionService for ApiClient {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse> {
        debug!(excluded = request.exclude_ids.len(), "requesting suggestions");
        self.post_json("suggest_ml", request).await
    }

    async fn replacements(&self, request: &ReplacementRequest) -> Result<ReplacementResponse> {
        debug!(
            meal = %request.meal_to_replace.id,
            excluded = request.exclude_ids.len(),
            "requesting replacement candidates"
        );
        self.post_json("suggest_replacement", request).await
    }
}

#[async_trait]
impl HistoryService for ApiClient {
    async fn log_meal(&self, meal: &Meal) -> Result<()> {
        debug!(meal = %meal.id, "logging meal to history");
        let url = self.endpoint("log_meal");
        self.http
            .post(&url)
            .json(&LogMealRequest { food: meal })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
