use std::sync::RwLock;

use chrono::{Duration, Utc};
use common::error::{AppError, Res};
use uuid::Uuid;

use crate::dtos::customer::NewCustomer;
use crate::models::customer::{Customer, CustomerStatus};
use crate::models::plan::Plan;

/// Customer records, kept in insertion order.
#[derive(Default)]
pub struct CustomerStore {
    inner: RwLock<Vec<Customer>>,
}

impl CustomerStore {
    /// Returns all customers in insertion order.
    pub fn list(&self) -> Vec<Customer> {
        self.inner.read().unwrap().clone()
    }

    /// Looks up a single customer by id.
    pub fn get(&self, id: Uuid) -> Option<Customer> {
        self.inner
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Creates a customer with no plan and `Active` status.
    pub fn create(&self, data: NewCustomer) -> Customer {
        let customer = Customer {
            id: Uuid::new_v4(),
            email: data.email,
            company_name: data.company_name,
            status: CustomerStatus::Active,
            current_plan: None,
            created_at: Utc::now(),
            trial_ends_at: None,
        };
        self.inner.write().unwrap().push(customer.clone());
        customer
    }

    /// Puts the customer on the given plan snapshot.
    ///
    /// The snapshot is stored by value, so later edits to the plan catalog do
    /// not retroactively change this customer's billed terms. When the
    /// snapshot carries free trial days the customer enters a trial window
    /// ending that many days from now; otherwise the subscription is active
    /// immediately. This is the only status transition the store performs;
    /// nothing ever moves a customer out of `Trialing` automatically.
    pub fn start_subscription(&self, customer_id: Uuid, snapshot: Plan) -> Res<Customer> {
        let mut customers = self.inner.write().unwrap();
        let customer = customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", customer_id)))?;

        let trial_ends_at = if snapshot.free_trial_days > 0 {
            Some(Utc::now() + Duration::days(i64::from(snapshot.free_trial_days)))
        } else {
            None
        };

        customer.status = if trial_ends_at.is_some() {
            CustomerStatus::Trialing
        } else {
            CustomerStatus::Active
        };
        customer.trial_ends_at = trial_ends_at;
        customer.current_plan = Some(snapshot);

        Ok(customer.clone())
    }

    /// Inserts a pre-formed record. Used by the demo seed, which needs states
    /// the admin operations alone would not produce.
    pub(crate) fn insert(&self, customer: Customer) {
        self.inner.write().unwrap().push(customer);
    }

    pub(crate) fn clear(&self) {
        self.inner.write().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::PlanInterval;

    fn plan(name: &str, free_trial_days: u32) -> Plan {
        Plan {
            id: Uuid::new_v4(),
            name: name.to_string(),
            interval: PlanInterval::Monthly,
            base_price: 29.0,
            usage_rate: None,
            free_trial_days,
            created_at: Utc::now(),
        }
    }

    fn acme() -> NewCustomer {
        NewCustomer {
            email: "a@b.com".to_string(),
            company_name: "Acme".to_string(),
        }
    }

    #[test]
    fn create_starts_active_without_plan() {
        let store = CustomerStore::default();
        let customer = store.create(acme());

        assert_eq!(customer.email, "a@b.com");
        assert_eq!(customer.company_name, "Acme");
        assert_eq!(customer.status, CustomerStatus::Active);
        assert!(customer.current_plan.is_none());
        assert!(customer.trial_ends_at.is_none());
        assert_eq!(store.list(), vec![customer]);
    }

    #[test]
    fn subscription_without_trial_is_immediately_active() {
        let store = CustomerStore::default();
        let customer = store.create(acme());

        let updated = store
            .start_subscription(customer.id, plan("Starter", 0))
            .unwrap();

        assert_eq!(updated.status, CustomerStatus::Active);
        assert!(updated.trial_ends_at.is_none());
        assert_eq!(
            updated.current_plan.as_ref().map(|p| p.name.as_str()),
            Some("Starter")
        );
    }

    #[test]
    fn subscription_with_trial_opens_fourteen_day_window() {
        let store = CustomerStore::default();
        let customer = store.create(acme());

        let before = Utc::now();
        let updated = store
            .start_subscription(customer.id, plan("Starter", 14))
            .unwrap();
        let after = Utc::now();

        assert_eq!(updated.status, CustomerStatus::Trialing);
        let trial_ends_at = updated.trial_ends_at.unwrap();
        assert!(trial_ends_at >= before + Duration::days(14));
        assert!(trial_ends_at <= after + Duration::days(14));
    }

    #[test]
    fn subscription_for_unknown_customer_is_not_found() {
        let store = CustomerStore::default();
        store.create(acme());

        let err = store.start_subscription(Uuid::new_v4(), plan("Starter", 14));
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }

    #[test]
    fn snapshot_is_isolated_from_later_plan_edits() {
        let store = CustomerStore::default();
        let customer = store.create(acme());

        let mut snapshot = plan("Starter", 0);
        snapshot.base_price = 29.0;
        store
            .start_subscription(customer.id, snapshot.clone())
            .unwrap();

        // Mutating our local copy after the fact must not leak into the store.
        snapshot.base_price = 999.0;
        snapshot.name = "Renamed".to_string();

        let held = store.get(customer.id).unwrap().current_plan.unwrap();
        assert_eq!(held.base_price, 29.0);
        assert_eq!(held.name, "Starter");
    }

    #[test]
    fn resubscribing_replaces_plan_and_recomputes_trial() {
        let store = CustomerStore::default();
        let customer = store.create(acme());

        store
            .start_subscription(customer.id, plan("Starter", 14))
            .unwrap();
        let updated = store
            .start_subscription(customer.id, plan("Enterprise", 0))
            .unwrap();

        assert_eq!(updated.status, CustomerStatus::Active);
        assert!(updated.trial_ends_at.is_none());
        assert_eq!(
            updated.current_plan.as_ref().map(|p| p.name.as_str()),
            Some("Enterprise")
        );
    }
}
