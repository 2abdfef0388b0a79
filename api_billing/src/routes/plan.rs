use actix_web::{Responder, delete, get, post, put, web};
use common::http::Success;
use std::sync::Arc;
use store::BillingStore;
use uuid::Uuid;

use crate::dtos::plan::{CreatePlanRequest, PlansResponse, UpdatePlanRequest};
use crate::services;

/// Retrieves the full plan catalog in insertion order.
///
/// # Input
/// - `store`: The shared in-memory billing store
///
/// # Output
/// - Success: Returns a JSON object containing an array of plans
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/secured/plans', {
///   credentials: 'include'
/// });
///
/// if (response.ok) {
///   const data = await response.json();
///   console.log('Plans:', data.plans);
///   // Example response:
///   // {
///   //   plans: [
///   //     {
///   //       id: "5b2c…",
///   //       name: "Starter",
///   //       interval: "monthly",
///   //       basePrice: 29,
///   //       usageRate: 0.1,
///   //       freeTrialDays: 14,
///   //       createdAt: "2024-01-15T10:00:00Z"
///   //     },
///   //     // More plans...
///   //   ]
///   // }
/// }
/// ```
#[get("")]
pub async fn get_plans(store: web::Data<Arc<BillingStore>>) -> impl Responder {
    let plans = services::plan::list_plans(&store);
    Success::ok(PlansResponse { plans })
}

/// Creates a new pricing plan.
///
/// # Input
/// - `req`: JSON payload with the plan fields:
///   - `name`: Display name, 1-50 characters
///   - `interval`: "monthly" or "yearly"
///   - `basePrice`: Non-negative price, up to 100000
///   - `usageRate`: Optional per-unit overage charge, up to 10
///   - `freeTrialDays`: Trial length in days, up to 365
/// - `store`: The shared in-memory billing store
///
/// # Output
/// - Success: Returns the stored plan with its fresh id, 201 Created
/// - Error: Returns 400 Bad Request when a field is out of bounds
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/secured/plans', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   credentials: 'include',
///   body: JSON.stringify({
///     name: 'Starter',
///     interval: 'monthly',
///     basePrice: 29,
///     usageRate: 0.1,
///     freeTrialDays: 14
///   })
/// });
///
/// if (response.ok) {
///   const plan = await response.json();
///   console.log('Created plan:', plan.id);
/// }
/// ```
#[post("")]
pub async fn post_plan(
    req: web::Json<CreatePlanRequest>,
    store: web::Data<Arc<BillingStore>>,
) -> impl Responder {
    let plan = services::plan::create_plan(&store, req.into_inner())?;
    log::info!("Created plan {} ({})", plan.name, plan.id);
    Success::created(plan)
}

/// Partially updates an existing plan; omitted fields keep their values.
///
/// # Input
/// - `id`: Plan id in the path
/// - `req`: JSON payload with any subset of the create fields
/// - `store`: The shared in-memory billing store
///
/// # Output
/// - Success: Returns the merged plan record
/// - Error: Returns 404 Not Found for an unknown id, 400 Bad Request when a
///   supplied field is out of bounds
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch(`/api/secured/plans/${planId}`, {
///   method: 'PUT',
///   headers: { 'Content-Type': 'application/json' },
///   credentials: 'include',
///   body: JSON.stringify({ basePrice: 39 }) // name, interval, … unchanged
/// });
/// ```
#[put("/{id}")]
pub async fn put_plan(
    id: web::Path<Uuid>,
    req: web::Json<UpdatePlanRequest>,
    store: web::Data<Arc<BillingStore>>,
) -> impl Responder {
    let plan = services::plan::update_plan(&store, id.into_inner(), req.into_inner())?;
    Success::ok(plan)
}

/// Deletes a plan. Deleting an id that is already gone is a no-op, so the
/// admin UI can retry the click without seeing an error. Customers keeping a
/// snapshot of the deleted plan are not modified.
#[delete("/{id}")]
pub async fn delete_plan(
    id: web::Path<Uuid>,
    store: web::Data<Arc<BillingStore>>,
) -> impl Responder {
    let id = id.into_inner();
    services::plan::delete_plan(&store, id);
    log::info!("Deleted plan {}", id);
    Success::ok(())
}
