use metrics::DashboardMetrics;
use store::BillingStore;

/// Recomputes the dashboard metrics from the current store contents.
pub fn dashboard(store: &BillingStore) -> DashboardMetrics {
    let plans = store.plans().list();
    let customers = store.customers().list();
    metrics::dashboard(&plans, &customers)
}
