use actix_web::{Responder, get, web};
use common::http::Success;
use std::sync::Arc;
use store::BillingStore;

use crate::services;

/// Computes the dashboard metrics over the current store contents.
///
/// # Input
/// - `store`: The shared in-memory billing store
///
/// # Output
/// - Success: Returns customer/plan counts, the mean plan price and the
///   monthly recurring revenue, all at full precision
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/secured/metrics', {
///   credentials: 'include'
/// });
///
/// if (response.ok) {
///   const m = await response.json();
///   // { totalCustomers: 2, activeCustomers: 1, totalPlans: 3,
///   //   averagePlanPrice: 375.666…, mrr: 99 }
///   render(`$${Math.round(m.averagePlanPrice)}`); // round for display only
/// }
/// ```
#[get("")]
pub async fn get_dashboard(store: web::Data<Arc<BillingStore>>) -> impl Responder {
    Success::ok(services::metric::dashboard(&store))
}
