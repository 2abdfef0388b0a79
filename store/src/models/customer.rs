use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::plan::Plan;

/// A customer record.
///
/// `current_plan` is a snapshot taken when the subscription was started;
/// later edits to the plan catalog do not alter a customer's billed terms.
/// `trial_ends_at` is present exactly when `status` is `Trialing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub email: String,
    pub company_name: String,
    pub status: CustomerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_plan: Option<Plan>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,
}

/// Subscription status of a customer.
///
/// Only `Active` and `Trialing` are ever produced by the operations in this
/// service; `PastDue` and `Canceled` are set through external billing events
/// and appear here so records carrying them round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
