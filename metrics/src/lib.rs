use std::collections::HashSet;

use serde::Serialize;
use store::models::customer::{Customer, CustomerStatus};
use store::models::plan::{Plan, PlanInterval};

/// Derived dashboard figures. Stateless: recomputed from the store contents
/// on every request, nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_customers: usize,
    /// Customers whose status is exactly `active`; trialing does not count.
    pub active_customers: usize,
    pub total_plans: usize,
    pub average_plan_price: f64,
    /// Monthly recurring revenue, full precision. Rounding is a display concern.
    pub mrr: f64,
}

/// Monthly-equivalent price of a plan: yearly prices are spread over twelve
/// months, monthly prices pass through.
pub fn monthly_value(plan: &Plan) -> f64 {
    match plan.interval {
        PlanInterval::Monthly => plan.base_price,
        PlanInterval::Yearly => plan.base_price / 12.0,
    }
}

/// Computes the dashboard metrics from the current store contents.
///
/// MRR sums the monthly-equivalent price of each active customer's plan
/// snapshot, but only when the snapshotted plan id still resolves in the
/// catalog. A customer whose plan was since deleted contributes 0; that is
/// the intended exclusion rule, not an error. The snapshot's own price is
/// what gets summed, since the snapshot is the customer's billed terms.
pub fn dashboard(plans: &[Plan], customers: &[Customer]) -> DashboardMetrics {
    let live_plan_ids: HashSet<_> = plans.iter().map(|p| p.id).collect();

    let mrr = customers
        .iter()
        .filter(|c| c.status == CustomerStatus::Active)
        .filter_map(|c| c.current_plan.as_ref())
        .filter(|snapshot| live_plan_ids.contains(&snapshot.id))
        .map(monthly_value)
        .sum();

    let average_plan_price = if plans.is_empty() {
        0.0
    } else {
        plans.iter().map(|p| p.base_price).sum::<f64>() / plans.len() as f64
    };

    DashboardMetrics {
        total_customers: customers.len(),
        active_customers: customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Active)
            .count(),
        total_plans: plans.len(),
        average_plan_price,
        mrr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn plan(name: &str, interval: PlanInterval, base_price: f64) -> Plan {
        Plan {
            id: Uuid::new_v4(),
            name: name.to_string(),
            interval,
            base_price,
            usage_rate: None,
            free_trial_days: 0,
            created_at: Utc::now(),
        }
    }

    fn customer(status: CustomerStatus, current_plan: Option<Plan>) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            company_name: "Acme".to_string(),
            status,
            current_plan,
            created_at: Utc::now(),
            trial_ends_at: None,
        }
    }

    #[test]
    fn empty_stores_produce_zeroes() {
        let m = dashboard(&[], &[]);
        assert_eq!(m.total_customers, 0);
        assert_eq!(m.active_customers, 0);
        assert_eq!(m.total_plans, 0);
        assert_eq!(m.average_plan_price, 0.0);
        assert_eq!(m.mrr, 0.0);
    }

    #[test]
    fn mrr_normalizes_yearly_plans_and_skips_canceled() {
        let monthly = plan("Professional", PlanInterval::Monthly, 99.0);
        let yearly = plan("Enterprise", PlanInterval::Yearly, 999.0);
        let expensive = plan("Whale", PlanInterval::Monthly, 500.0);
        let plans = vec![monthly.clone(), yearly.clone(), expensive.clone()];

        let customers = vec![
            customer(CustomerStatus::Active, Some(monthly)),
            customer(CustomerStatus::Active, Some(yearly)),
            customer(CustomerStatus::Canceled, Some(expensive)),
        ];

        let m = dashboard(&plans, &customers);
        assert_eq!(m.mrr, 99.0 + 999.0 / 12.0);
        assert_eq!(m.active_customers, 2);
        assert_eq!(m.total_customers, 3);
    }

    #[test]
    fn stale_snapshots_contribute_nothing() {
        let live = plan("Starter", PlanInterval::Monthly, 29.0);
        let deleted = plan("Legacy", PlanInterval::Monthly, 500.0);
        // catalog only knows about the live plan
        let plans = vec![live.clone()];

        let customers = vec![
            customer(CustomerStatus::Active, Some(live)),
            customer(CustomerStatus::Active, Some(deleted)),
        ];

        let m = dashboard(&plans, &customers);
        assert_eq!(m.mrr, 29.0);
        // the stale customer still counts as active, it just bills nothing
        assert_eq!(m.active_customers, 2);
    }

    #[test]
    fn trialing_customers_bill_nothing_yet() {
        let starter = plan("Starter", PlanInterval::Monthly, 29.0);
        let plans = vec![starter.clone()];
        let customers = vec![
            customer(CustomerStatus::Trialing, Some(starter)),
            customer(CustomerStatus::Active, None),
        ];

        let m = dashboard(&plans, &customers);
        assert_eq!(m.mrr, 0.0);
        assert_eq!(m.active_customers, 1);
    }

    #[test]
    fn average_price_is_the_plain_mean() {
        let plans = vec![
            plan("Starter", PlanInterval::Monthly, 29.0),
            plan("Professional", PlanInterval::Monthly, 99.0),
            plan("Enterprise", PlanInterval::Yearly, 999.0),
        ];

        let m = dashboard(&plans, &[]);
        assert_eq!(m.average_plan_price, (29.0 + 99.0 + 999.0) / 3.0);
    }
}
