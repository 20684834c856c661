use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{DayPlan, WeeklyPlan};
use crate::planner::constants::{day_label, DAYS_PER_WEEK, MEALS_PER_DAY, TODAY_LABEL};
use crate::planner::exclusion::ExclusionSet;
use crate::planner::selection::{take_top_three, SelectionFn};
use crate::service::{ProfileParams, SuggestionRequest, SuggestionService};

/// Result of a single-day build.
///
/// An incomplete profile is a successful outcome that asks the caller to
/// redirect the user, not a failure.
#[derive(Debug)]
pub enum DayPlanOutcome {
    Ready {
        day: DayPlan,
        daily_calories: u32,
    },
    ProfileIncomplete,
}

/// State threaded through the 7-day build loop.
///
/// Only [`finish`](BuildState::finish) can turn it into a plan, so partially
/// built weeks never escape the loop.
struct BuildState {
    exclusions: ExclusionSet,
    days: Vec<DayPlan>,
    daily_targets: Vec<f64>,
}

impl BuildState {
    fn new() -> Self {
        Self {
            exclusions: ExclusionSet::new(),
            days: Vec::with_capacity(DAYS_PER_WEEK),
            daily_targets: Vec::with_capacity(DAYS_PER_WEEK),
        }
    }

    fn accept(&mut self, day: DayPlan, daily_target: f64) {
        self.exclusions.extend(day.meal_ids());
        self.daily_targets.push(daily_target);
        self.days.push(day);
    }

    fn finish(self) -> Result<WeeklyPlan> {
        WeeklyPlan::new(self.days, &self.daily_targets)
    }
}

/// Builds meal plans by driving the suggestion service.
pub struct PlanAssembler {
    service: Arc<dyn SuggestionService>,
    select: SelectionFn,
}

impl PlanAssembler {
    pub fn new(service: Arc<dyn SuggestionService>) -> Self {
        Self {
            service,
            select: take_top_three,
        }
    }

    /// Swap out the meal selection strategy (default: first three in service
    /// order).
    pub fn with_selection(mut self, select: SelectionFn) -> Self {
        self.select = select;
        self
    }

    /// Build a 7-day non-repeating plan.
    ///
    /// Requests run strictly one at a time: each day's exclusion list is the
    /// union of every previously accepted day's meal ids, so parallel requests
    /// would race the no-repeat invariant. Any failure aborts the whole build;
    /// a partial week is never returned. The cancellation token is checked
    /// before each day's request.
    pub async fn build_weekly_plan(
        &self,
        profile: &ProfileParams,
        cancel: &CancellationToken,
    ) -> Result<WeeklyPlan> {
        let mut state = BuildState::new();

        for day in 1..=DAYS_PER_WEEK as u32 {
            if cancel.is_cancelled() {
                debug!(day, "weekly build cancelled");
                return Err(PlanError::BuildCancelled);
            }

            let request = SuggestionRequest {
                exclude_ids: state.exclusions.to_wire(),
                profile: profile.clone(),
            };
            let response = self.service.suggest(&request).await?;

            if response.suggestions.len() < MEALS_PER_DAY {
                debug!(
                    day,
                    got = response.suggestions.len(),
                    "candidate batch too small, aborting build"
                );
                return Err(PlanError::InsufficientCandidates { day });
            }

            let meals = (self.select)(&response.suggestions);
            let day_plan = DayPlan::new(day_label(day), meals)?;
            debug!(
                day,
                excluded = state.exclusions.len(),
                kcal = response.calculated_daily_calories,
                "accepted day"
            );
            state.accept(day_plan, response.calculated_daily_calories);
        }

        state.finish()
    }

    /// Build a single "Today" plan.
    ///
    /// Returns [`DayPlanOutcome::ProfileIncomplete`] when the service flags an
    /// unfinished profile; an absent flag counts as complete.
    pub async fn build_day_plan(&self, profile: &ProfileParams) -> Result<DayPlanOutcome> {
        let request = SuggestionRequest {
            exclude_ids: Vec::new(),
            profile: profile.clone(),
        };
        let response = self.service.suggest(&request).await?;

        if !response.profile_complete() {
            debug!("service reports incomplete profile");
            return Ok(DayPlanOutcome::ProfileIncomplete);
        }

        if response.suggestions.len() < MEALS_PER_DAY {
            return Err(PlanError::InsufficientCandidates { day: 1 });
        }

        let meals = (self.select)(&response.suggestions);
        let day = DayPlan::new(TODAY_LABEL, meals)?;
        Ok(DayPlanOutcome::Ready {
            day,
            daily_calories: response.calculated_daily_calories.round() as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Meal, MealId};
    use crate::service::{ReplacementRequest, ReplacementResponse, SuggestionResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn meal(id: i64) -> Meal {
        Meal {
            id: MealId::Int(id),
            name: format!("Meal {}", id),
            category: None,
            calories: 500.0,
            protein: 20.0,
            fat: 10.0,
            carbs: 40.0,
            is_vegetarian: id % 2 == 0,
        }
    }

    /// Service double that pops scripted responses in order.
    struct ScriptedService {
        responses: Mutex<Vec<Result<SuggestionResponse>>>,
    }

    impl ScriptedService {
        fn new(responses: Vec<Result<SuggestionResponse>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl SuggestionService for ScriptedService {
        async fn suggest(&self, _request: &SuggestionRequest) -> Result<SuggestionResponse> {
            self.responses
                .lock()
                .unwrap()
                .remove(0)
        }

        async fn replacements(
            &self,
            _request: &ReplacementRequest,
        ) -> Result<ReplacementResponse> {
            Ok(ReplacementResponse {
                suggestions: vec![],
            })
        }
    }

    #[tokio::test]
    async fn test_day_plan_ready() {
        let service = Arc::new(ScriptedService::new(vec![Ok(SuggestionResponse {
            suggestions: vec![meal(1), meal(2), meal(3), meal(4)],
            calculated_daily_calories: 1999.6,
            is_profile_complete: None,
        })]));

        let assembler = PlanAssembler::new(service);
        let outcome = assembler
            .build_day_plan(&ProfileParams::default())
            .await
            .unwrap();

        match outcome {
            DayPlanOutcome::Ready {
                day,
                daily_calories,
            } => {
                assert_eq!(day.label, TODAY_LABEL);
                assert_eq!(day.meals().len(), 3);
                assert_eq!(daily_calories, 2000);
            }
            DayPlanOutcome::ProfileIncomplete => panic!("expected a ready day plan"),
        }
    }

    #[tokio::test]
    async fn test_day_plan_profile_incomplete_is_not_an_error() {
        let service = Arc::new(ScriptedService::new(vec![Ok(SuggestionResponse {
            suggestions: vec![],
            calculated_daily_calories: 0.0,
            is_profile_complete: Some(false),
        })]));

        let assembler = PlanAssembler::new(service);
        let outcome = assembler
            .build_day_plan(&ProfileParams::default())
            .await
            .unwrap();

        assert!(matches!(outcome, DayPlanOutcome::ProfileIncomplete));
    }

    #[tokio::test]
    async fn test_day_plan_shortfall_fails() {
        let service = Arc::new(ScriptedService::new(vec![Ok(SuggestionResponse {
            suggestions: vec![meal(1), meal(2)],
            calculated_daily_calories: 2000.0,
            is_profile_complete: None,
        })]));

        let assembler = PlanAssembler::new(service);
        let result = assembler.build_day_plan(&ProfileParams::default()).await;

        assert!(matches!(
            result,
            Err(PlanError::InsufficientCandidates { day: 1 })
        ));
    }

    #[tokio::test]
    async fn test_weekly_build_cancelled_before_first_request() {
        let service = Arc::new(ScriptedService::new(vec![]));
        let assembler = PlanAssembler::new(service);

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = assembler
            .build_weekly_plan(&ProfileParams::default(), &cancel)
            .await;
        assert!(matches!(result, Err(PlanError::BuildCancelled)));
    }
}
