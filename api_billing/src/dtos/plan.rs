use common::error::{AppError, Res};
use serde::Deserialize;
use store::dtos::plan::{NewPlan, PlanUpdate};
use store::models::plan::{Plan, PlanInterval};

// Bounds mirror the admin form schema. The store itself trusts its input, so
// everything user-supplied is checked here, at the caller boundary.
const MAX_NAME_LEN: usize = 50;
const MAX_BASE_PRICE: f64 = 100_000.0;
const MAX_USAGE_RATE: f64 = 10.0;
const MAX_TRIAL_DAYS: u32 = 365;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub name: String,
    pub interval: PlanInterval,
    pub base_price: f64,
    #[serde(default)]
    pub usage_rate: Option<f64>,
    pub free_trial_days: u32,
}

impl CreatePlanRequest {
    pub fn validate(&self) -> Res<()> {
        validate_name(&self.name)?;
        validate_base_price(self.base_price)?;
        if let Some(rate) = self.usage_rate {
            validate_usage_rate(rate)?;
        }
        validate_trial_days(self.free_trial_days)
    }

    pub fn into_new_plan(self) -> NewPlan {
        NewPlan {
            name: self.name,
            interval: self.interval,
            base_price: self.base_price,
            usage_rate: self.usage_rate,
            free_trial_days: self.free_trial_days,
        }
    }
}

/// Partial update payload; absent fields leave the plan untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub interval: Option<PlanInterval>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub usage_rate: Option<f64>,
    #[serde(default)]
    pub free_trial_days: Option<u32>,
}

impl UpdatePlanRequest {
    pub fn validate(&self) -> Res<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.base_price {
            validate_base_price(price)?;
        }
        if let Some(rate) = self.usage_rate {
            validate_usage_rate(rate)?;
        }
        if let Some(days) = self.free_trial_days {
            validate_trial_days(days)?;
        }
        Ok(())
    }

    pub fn into_update(self) -> PlanUpdate {
        PlanUpdate {
            name: self.name,
            interval: self.interval,
            base_price: self.base_price,
            usage_rate: self.usage_rate,
            free_trial_days: self.free_trial_days,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct PlansResponse {
    pub plans: Vec<Plan>,
}

fn validate_name(name: &str) -> Res<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Plan name is required".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "Plan name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

fn validate_base_price(price: f64) -> Res<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation("Price must be positive".to_string()));
    }
    if price > MAX_BASE_PRICE {
        return Err(AppError::Validation("Price too high".to_string()));
    }
    Ok(())
}

fn validate_usage_rate(rate: f64) -> Res<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(AppError::Validation(
            "Usage rate must be positive".to_string(),
        ));
    }
    if rate > MAX_USAGE_RATE {
        return Err(AppError::Validation("Usage rate too high".to_string()));
    }
    Ok(())
}

fn validate_trial_days(days: u32) -> Res<()> {
    if days > MAX_TRIAL_DAYS {
        return Err(AppError::Validation("Trial period too long".to_string()));
    }
    Ok(())
}
