use common::error::Res;
use store::BillingStore;
use store::models::plan::Plan;
use uuid::Uuid;

use crate::dtos::plan::{CreatePlanRequest, UpdatePlanRequest};

/// Lists the plan catalog in insertion order.
pub fn list_plans(store: &BillingStore) -> Vec<Plan> {
    store.plans().list()
}

/// Validates and stores a new plan, returning the stored record.
pub fn create_plan(store: &BillingStore, req: CreatePlanRequest) -> Res<Plan> {
    req.validate()?;
    Ok(store.plans().create(req.into_new_plan()))
}

/// Validates and applies a partial update; untouched fields keep their values.
pub fn update_plan(store: &BillingStore, id: Uuid, req: UpdatePlanRequest) -> Res<Plan> {
    req.validate()?;
    store.plans().update(id, req.into_update())
}

/// Deletes the plan if it exists; deleting twice is the same as deleting once.
pub fn delete_plan(store: &BillingStore, id: Uuid) {
    store.plans().delete(id);
}
