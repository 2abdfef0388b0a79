use actix_web::{Responder, get, post, web};
use common::http::Success;
use std::sync::Arc;
use store::BillingStore;
use uuid::Uuid;

use crate::dtos::customer::{CreateCustomerRequest, CustomersResponse, StartSubscriptionRequest};
use crate::services;

/// Retrieves all customers in insertion order.
///
/// # Input
/// - `store`: The shared in-memory billing store
///
/// # Output
/// - Success: Returns a JSON object containing an array of customers
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/secured/customers', {
///   credentials: 'include'
/// });
///
/// if (response.ok) {
///   const data = await response.json();
///   console.log('Customers:', data.customers);
///   // Example response:
///   // {
///   //   customers: [
///   //     {
///   //       id: "9f41…",
///   //       email: "john@acme.com",
///   //       companyName: "Acme Corp",
///   //       status: "active",
///   //       currentPlan: { name: "Professional", basePrice: 99, … },
///   //       createdAt: "2024-02-01T10:00:00Z"
///   //     },
///   //     // More customers...
///   //   ]
///   // }
/// }
/// ```
#[get("")]
pub async fn get_customers(store: web::Data<Arc<BillingStore>>) -> impl Responder {
    let customers = services::customer::list_customers(&store);
    Success::ok(CustomersResponse { customers })
}

/// Creates a new customer with no plan and active status.
///
/// # Input
/// - `req`: JSON payload with `email` (valid address) and `companyName`
///   (1-100 characters)
/// - `store`: The shared in-memory billing store
///
/// # Output
/// - Success: Returns the created customer, 201 Created
/// - Error: Returns 400 Bad Request on a malformed email or company name
#[post("")]
pub async fn post_customer(
    req: web::Json<CreateCustomerRequest>,
    store: web::Data<Arc<BillingStore>>,
) -> impl Responder {
    let customer = services::customer::create_customer(&store, req.into_inner())?;
    log::info!("Created customer {} ({})", customer.company_name, customer.id);
    Success::created(customer)
}

/// Puts a customer on a plan.
///
/// The plan is snapshotted into the customer record, so later catalog edits
/// never change what this customer is billed. A plan with free trial days
/// opens a trial window and the customer comes back `trialing`; otherwise it
/// comes back `active`.
///
/// # Input
/// - `id`: Customer id in the path
/// - `req`: JSON payload with `planId`
/// - `store`: The shared in-memory billing store
///
/// # Output
/// - Success: Returns the updated customer record
/// - Error: Returns 404 Not Found when either id is unknown
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch(`/api/secured/customers/${customerId}/subscribe`, {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   credentials: 'include',
///   body: JSON.stringify({ planId })
/// });
///
/// if (response.ok) {
///   const customer = await response.json();
///   console.log('Status:', customer.status);       // "trialing" or "active"
///   console.log('Trial ends:', customer.trialEndsAt); // absent without a trial
/// }
/// ```
#[post("/{id}/subscribe")]
pub async fn post_subscribe(
    id: web::Path<Uuid>,
    req: web::Json<StartSubscriptionRequest>,
    store: web::Data<Arc<BillingStore>>,
) -> impl Responder {
    let customer = services::customer::start_subscription(&store, id.into_inner(), req.plan_id)?;
    log::info!(
        "Customer {} subscribed, status is now {}",
        customer.id,
        customer.status
    );
    Success::ok(customer)
}
