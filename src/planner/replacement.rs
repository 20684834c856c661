use std::sync::Arc;

use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{DayPlan, Meal, MealId};
use crate::planner::constants::MEALS_PER_DAY;
use crate::service::{ReplacementRequest, SuggestionService};

/// Transient state tying a requested substitution to a specific day and slot.
///
/// Captures a fingerprint of the plan shape at request time so a replacement
/// can be refused if the plan was rebuilt underneath it.
#[derive(Debug)]
pub struct ReplacementContext {
    day_label: String,
    slot: usize,
    target_id: MealId,
    day_ids: Vec<MealId>,
    plan_days: usize,
    candidates: Vec<Meal>,
}

impl ReplacementContext {
    pub fn day_label(&self) -> &str {
        &self.day_label
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Candidate meals fetched for this substitution, in service order.
    pub fn candidates(&self) -> &[Meal] {
        &self.candidates
    }
}

/// Drives a single meal substitution against an already-built plan.
///
/// At most one substitution may be in flight at a time; a second
/// [`request`](ReplacementFlow::request) before the first is applied or
/// cancelled is rejected with [`PlanError::ReplacementInProgress`].
pub struct ReplacementFlow {
    service: Arc<dyn SuggestionService>,
    active: Option<ReplacementContext>,
}

impl ReplacementFlow {
    pub fn new(service: Arc<dyn SuggestionService>) -> Self {
        Self {
            service,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Fetch replacement candidates for one slot of one day.
    ///
    /// The exclusion list is only the target day's current meal ids: meals on
    /// other days remain eligible alternatives for this day. No plan state is
    /// touched here.
    pub async fn request(
        &mut self,
        days: &[DayPlan],
        day_label: &str,
        slot: usize,
    ) -> Result<&ReplacementContext> {
        if self.active.is_some() {
            return Err(PlanError::ReplacementInProgress);
        }
        if slot >= MEALS_PER_DAY {
            return Err(PlanError::InvalidInput(format!(
                "slot index {} out of range",
                slot
            )));
        }

        let day = days
            .iter()
            .find(|d| d.label == day_label)
            .ok_or_else(|| PlanError::InvalidInput(format!("no day labeled {:?}", day_label)))?;

        let target = day.meals()[slot].clone();
        let day_ids = day.meal_ids();

        debug!(day = day_label, slot, meal = %target.id, "requesting replacement");
        let response = self
            .service
            .replacements(&ReplacementRequest {
                meal_to_replace: target.clone(),
                exclude_ids: day_ids.clone(),
            })
            .await?;

        if response.suggestions.is_empty() {
            return Err(PlanError::InvalidInput(
                "no replacement candidates available".to_string(),
            ));
        }

        Ok(self.active.insert(ReplacementContext {
            day_label: day_label.to_string(),
            slot,
            target_id: target.id,
            day_ids,
            plan_days: days.len(),
            candidates: response.suggestions,
        }))
    }

    /// Swap the chosen meal into the slot the active context points at.
    ///
    /// Exactly one slot changes; every other day and slot is left as-is. The
    /// context is consumed whether the swap succeeds or not.
    pub fn apply(&mut self, days: &mut [DayPlan], chosen: Meal) -> Result<()> {
        let context = self
            .active
            .take()
            .ok_or_else(|| PlanError::InvalidInput("no replacement in progress".to_string()))?;

        if days.len() != context.plan_days {
            return Err(PlanError::StaleContext(format!(
                "plan has {} days, context was captured against {}",
                days.len(),
                context.plan_days
            )));
        }

        let day = days
            .iter_mut()
            .find(|d| d.label == context.day_label)
            .ok_or_else(|| {
                PlanError::StaleContext(format!("day {:?} no longer exists", context.day_label))
            })?;

        if day.meal_ids() != context.day_ids {
            return Err(PlanError::StaleContext(format!(
                "meals of {:?} changed since the replacement was requested",
                context.day_label
            )));
        }

        debug!(
            day = %context.day_label,
            slot = context.slot,
            old = %context.target_id,
            new = %chosen.id,
            "applying replacement"
        );
        day.replace_slot(context.slot, chosen);
        Ok(())
    }

    /// Drop the active context without touching the plan.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{
        ReplacementResponse, SuggestionRequest, SuggestionResponse, SuggestionService,
    };
    use async_trait::async_trait;

    fn meal(id: i64) -> Meal {
        Meal {
            id: MealId::Int(id),
            name: format!("Meal {}", id),
            category: None,
            calories: 500.0,
            protein: 20.0,
            fat: 10.0,
            carbs: 40.0,
            is_vegetarian: false,
        }
    }

    fn day(label: &str, first_id: i64) -> DayPlan {
        DayPlan::new(label, vec![meal(first_id), meal(first_id + 1), meal(first_id + 2)]).unwrap()
    }

    /// Always returns the same candidate batch.
    struct FixedService {
        candidates: Vec<Meal>,
    }

    #[async_trait]
    impl SuggestionService for FixedService {
        async fn suggest(&self, _request: &SuggestionRequest) -> Result<SuggestionResponse> {
            unimplemented!("not used by replacement tests")
        }

        async fn replacements(
            &self,
            _request: &ReplacementRequest,
        ) -> Result<ReplacementResponse> {
            Ok(ReplacementResponse {
                suggestions: self.candidates.clone(),
            })
        }
    }

    fn flow_with_candidates(candidates: Vec<Meal>) -> ReplacementFlow {
        ReplacementFlow::new(Arc::new(FixedService { candidates }))
    }

    #[tokio::test]
    async fn test_second_request_rejected_while_active() {
        let days = vec![day("Day 1", 0), day("Day 2", 10)];
        let mut flow = flow_with_candidates(vec![meal(99)]);

        flow.request(&days, "Day 1", 0).await.unwrap();
        let second = flow.request(&days, "Day 2", 1).await;
        assert!(matches!(second, Err(PlanError::ReplacementInProgress)));

        flow.cancel();
        assert!(!flow.is_active());
        flow.request(&days, "Day 2", 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_apply_swaps_only_target_slot() {
        let mut days = vec![day("Day 1", 0), day("Day 2", 10), day("Day 3", 20)];
        let before = days.clone();

        let mut flow = flow_with_candidates(vec![meal(99)]);
        flow.request(&days, "Day 3", 1).await.unwrap();
        flow.apply(&mut days, meal(99)).unwrap();

        assert_eq!(days[2].meals()[1].id, MealId::Int(99));
        assert_eq!(days[0], before[0]);
        assert_eq!(days[1], before[1]);
        assert_eq!(days[2].meals()[0], before[2].meals()[0]);
        assert_eq!(days[2].meals()[2], before[2].meals()[2]);
    }

    #[tokio::test]
    async fn test_apply_rejects_rebuilt_plan() {
        let days = vec![day("Day 1", 0), day("Day 2", 10), day("Day 3", 20)];
        let mut flow = flow_with_candidates(vec![meal(99)]);
        flow.request(&days, "Day 2", 0).await.unwrap();

        // Plan rebuilt to 7 days while the picker was open.
        let mut rebuilt: Vec<DayPlan> = (0..7)
            .map(|i| day(&format!("Day {}", i + 1), i * 10))
            .collect();

        let result = flow.apply(&mut rebuilt, meal(99));
        assert!(matches!(result, Err(PlanError::StaleContext(_))));
        assert!(!flow.is_active());
    }

    #[tokio::test]
    async fn test_apply_rejects_changed_day() {
        let mut days = vec![day("Day 1", 0), day("Day 2", 10)];
        let mut flow = flow_with_candidates(vec![meal(99)]);
        flow.request(&days, "Day 1", 2).await.unwrap();

        // Another meal on the same day changed out from under the context.
        days[0].replace_slot(0, meal(55));

        let result = flow.apply(&mut days, meal(99));
        assert!(matches!(result, Err(PlanError::StaleContext(_))));
    }

    #[tokio::test]
    async fn test_request_excludes_only_target_day() {
        use std::sync::Mutex;

        struct Recording {
            last_excluded: Mutex<Vec<MealId>>,
        }

        #[async_trait]
        impl SuggestionService for Recording {
            async fn suggest(&self, _request: &SuggestionRequest) -> Result<SuggestionResponse> {
                unimplemented!()
            }

            async fn replacements(
                &self,
                request: &ReplacementRequest,
            ) -> Result<ReplacementResponse> {
                *self.last_excluded.lock().unwrap() = request.exclude_ids.clone();
                Ok(ReplacementResponse {
                    suggestions: vec![meal(99)],
                })
            }
        }

        let service = Arc::new(Recording {
            last_excluded: Mutex::new(vec![]),
        });
        let days = vec![day("Day 1", 0), day("Day 2", 10)];

        let mut flow = ReplacementFlow::new(service.clone());
        flow.request(&days, "Day 2", 0).await.unwrap();

        let excluded = service.last_excluded.lock().unwrap().clone();
        assert_eq!(
            excluded,
            vec![MealId::Int(10), MealId::Int(11), MealId::Int(12)]
        );
    }
}
