use std::sync::RwLock;

use chrono::Utc;
use common::error::{AppError, Res};
use uuid::Uuid;

use crate::dtos::plan::{NewPlan, PlanUpdate};
use crate::models::plan::Plan;

/// The plan catalog. Records are kept in insertion order.
#[derive(Default)]
pub struct PlanStore {
    inner: RwLock<Vec<Plan>>,
}

impl PlanStore {
    /// Returns all plans in insertion order.
    pub fn list(&self) -> Vec<Plan> {
        self.inner.read().unwrap().clone()
    }

    /// Looks up a single plan by id.
    pub fn get(&self, id: Uuid) -> Option<Plan> {
        self.inner
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Creates a plan with a fresh id and creation timestamp and returns the
    /// stored record.
    pub fn create(&self, data: NewPlan) -> Plan {
        let plan = Plan {
            id: Uuid::new_v4(),
            name: data.name,
            interval: data.interval,
            base_price: data.base_price,
            usage_rate: data.usage_rate,
            free_trial_days: data.free_trial_days,
            created_at: Utc::now(),
        };
        self.inner.write().unwrap().push(plan.clone());
        plan
    }

    /// Merges the supplied fields over the existing record and returns the
    /// merged plan. Fields left `None` are retained unchanged.
    pub fn update(&self, id: Uuid, data: PlanUpdate) -> Res<Plan> {
        let mut plans = self.inner.write().unwrap();
        let plan = plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", id)))?;

        if let Some(name) = data.name {
            plan.name = name;
        }
        if let Some(interval) = data.interval {
            plan.interval = interval;
        }
        if let Some(base_price) = data.base_price {
            plan.base_price = base_price;
        }
        if let Some(usage_rate) = data.usage_rate {
            plan.usage_rate = Some(usage_rate);
        }
        if let Some(free_trial_days) = data.free_trial_days {
            plan.free_trial_days = free_trial_days;
        }

        Ok(plan.clone())
    }

    /// Removes the plan if present. Deleting an unknown id is a no-op, so
    /// retry-on-click UIs never surface an error here. Customers holding a
    /// snapshot of the deleted plan are left untouched.
    pub fn delete(&self, id: Uuid) {
        self.inner.write().unwrap().retain(|p| p.id != id);
    }

    pub(crate) fn clear(&self) {
        self.inner.write().unwrap().clear();
    }
}
