use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pricing plan in the catalog.
///
/// `created_at` is fixed when the plan is created and never changes through
/// updates. Customers hold value copies of this struct, not references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub interval: PlanInterval,
    pub base_price: f64,
    /// Per-unit overage charge, when the plan meters usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_rate: Option<f64>,
    pub free_trial_days: u32,
    pub created_at: DateTime<Utc>,
}

/// Billing interval for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Monthly,
    Yearly,
}

impl PlanInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for PlanInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
