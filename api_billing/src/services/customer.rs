use common::error::{AppError, Res};
use store::BillingStore;
use store::models::customer::Customer;
use uuid::Uuid;

use crate::dtos::customer::CreateCustomerRequest;

/// Lists customers in insertion order.
pub fn list_customers(store: &BillingStore) -> Vec<Customer> {
    store.customers().list()
}

/// Validates and stores a new customer; it starts active with no plan.
pub fn create_customer(store: &BillingStore, req: CreateCustomerRequest) -> Res<Customer> {
    req.validate()?;
    Ok(store.customers().create(req.into_new_customer()))
}

/// Resolves the plan, snapshots it and puts the customer on it.
///
/// The snapshot is what the customer will be billed against from here on;
/// deleting or editing the catalog plan afterwards does not touch it.
pub fn start_subscription(
    store: &BillingStore,
    customer_id: Uuid,
    plan_id: Uuid,
) -> Res<Customer> {
    let snapshot = store
        .plans()
        .get(plan_id)
        .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", plan_id)))?;

    store.customers().start_subscription(customer_id, snapshot)
}
