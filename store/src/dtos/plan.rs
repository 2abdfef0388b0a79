use crate::models::plan::PlanInterval;

/// Fields required to create a plan. Validation happens at the API boundary;
/// the store trusts its input.
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub name: String,
    pub interval: PlanInterval,
    pub base_price: f64,
    pub usage_rate: Option<f64>,
    pub free_trial_days: u32,
}

/// Partial update for a plan. `None` fields keep their current value;
/// `id` and `created_at` are never touched.
#[derive(Debug, Clone, Default)]
pub struct PlanUpdate {
    pub name: Option<String>,
    pub interval: Option<PlanInterval>,
    pub base_price: Option<f64>,
    pub usage_rate: Option<f64>,
    pub free_trial_days: Option<u32>,
}
