use std::sync::Arc;

pub mod customer;
pub mod plan;

pub mod models {
    pub mod customer;
    pub mod plan;
}

pub mod dtos {
    pub mod customer;
    pub mod plan;
}

use customer::CustomerStore;
use models::customer::CustomerStatus;
use models::plan::PlanInterval;
use plan::PlanStore;

/// The in-memory data layer backing the admin API.
///
/// Both stores live behind one object with a controlled lifecycle: construct
/// it once per process (or per test) and share it, instead of reaching for
/// ambient global state. Dropping the last handle discards everything.
#[derive(Default)]
pub struct BillingStore {
    plans: PlanStore,
    customers: CustomerStore,
}

impl BillingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plans(&self) -> &PlanStore {
        &self.plans
    }

    pub fn customers(&self) -> &CustomerStore {
        &self.customers
    }

    /// Empties both stores. Intended for tests that reuse one store instance.
    pub fn reset(&self) {
        self.plans.clear();
        self.customers.clear();
    }
}

/// Builds the shared store, optionally seeded with the demo catalog.
pub fn setup(seed_demo: bool) -> Arc<BillingStore> {
    let store = BillingStore::new();
    if seed_demo {
        seed_demo_data(&store);
    }
    Arc::new(store)
}

/// Seeds the demo plans and customers shown on a fresh dashboard:
/// three plans (Starter, Professional, Enterprise), one active customer on
/// Professional and one trialing customer on Starter. Customers are inserted
/// as pre-formed records, so the seed can show states (a paid subscription
/// past its trial) that the admin operations alone would not produce.
pub fn seed_demo_data(store: &BillingStore) {
    use chrono::{Duration, Utc};
    use crate::models::customer::Customer;
    use uuid::Uuid;

    let starter = store.plans().create(dtos::plan::NewPlan {
        name: "Starter".to_string(),
        interval: PlanInterval::Monthly,
        base_price: 29.0,
        usage_rate: Some(0.1),
        free_trial_days: 14,
    });
    let professional = store.plans().create(dtos::plan::NewPlan {
        name: "Professional".to_string(),
        interval: PlanInterval::Monthly,
        base_price: 99.0,
        usage_rate: Some(0.05),
        free_trial_days: 14,
    });
    store.plans().create(dtos::plan::NewPlan {
        name: "Enterprise".to_string(),
        interval: PlanInterval::Yearly,
        base_price: 999.0,
        usage_rate: None,
        free_trial_days: 30,
    });

    let now = Utc::now();
    store.customers().insert(Customer {
        id: Uuid::new_v4(),
        email: "john@acme.com".to_string(),
        company_name: "Acme Corp".to_string(),
        status: CustomerStatus::Active,
        current_plan: Some(professional),
        created_at: now,
        trial_ends_at: None,
    });
    store.customers().insert(Customer {
        id: Uuid::new_v4(),
        email: "sarah@startup.io".to_string(),
        company_name: "Startup Inc".to_string(),
        status: CustomerStatus::Trialing,
        current_plan: Some(starter),
        created_at: now,
        trial_ends_at: Some(now + Duration::days(14)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::CustomerStatus;

    #[test]
    fn seeded_store_matches_demo_catalog() {
        let store = setup(true);

        let plans = store.plans().list();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].name, "Starter");
        assert_eq!(plans[2].interval, PlanInterval::Yearly);

        let customers = store.customers().list();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].status, CustomerStatus::Active);
        assert_eq!(
            customers[0].current_plan.as_ref().map(|p| p.name.as_str()),
            Some("Professional")
        );
        assert_eq!(customers[1].status, CustomerStatus::Trialing);
        assert!(customers[1].trial_ends_at.is_some());
    }

    #[test]
    fn unseeded_store_starts_empty_and_reset_clears() {
        let store = setup(false);
        assert!(store.plans().list().is_empty());
        assert!(store.customers().list().is_empty());

        seed_demo_data(&store);
        assert!(!store.plans().list().is_empty());

        store.reset();
        assert!(store.plans().list().is_empty());
        assert!(store.customers().list().is_empty());
    }
}
