use common::error::{AppError, Res};
use serde::Deserialize;
use store::dtos::customer::NewCustomer;
use store::models::customer::Customer;
use uuid::Uuid;

const MAX_COMPANY_NAME_LEN: usize = 100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub email: String,
    pub company_name: String,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> Res<()> {
        if !is_plausible_email(&self.email) {
            return Err(AppError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        if self.company_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Company name is required".to_string(),
            ));
        }
        if self.company_name.len() > MAX_COMPANY_NAME_LEN {
            return Err(AppError::Validation("Company name too long".to_string()));
        }
        Ok(())
    }

    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            email: self.email,
            company_name: self.company_name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSubscriptionRequest {
    pub plan_id: Uuid,
}

#[derive(Debug, serde::Serialize)]
pub struct CustomersResponse {
    pub customers: Vec<Customer>,
}

/// Local-part @ domain with a dot somewhere after it. Good enough for an
/// admin form; deliverability is not our problem here.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
}
