use common::error::{AppError, Res};
use log::{info, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenValidationRequest {
    pub token: String,
}

/// The staff identity asserted by the external provider. Stored in the
/// cookie session on login; no further fields are needed because the only
/// permission model is logged-in-or-not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUser {
    pub subject: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Client for the external identity provider that backs the login flow.
/// The dashboard never inspects tokens itself; it forwards them here and
/// trusts the provider's answer.
pub struct IdentityClient {
    client: Client,
    auth_service_url: String,
    api_key: String,
}

impl IdentityClient {
    pub fn new(auth_service_url: String, api_key: String) -> Self {
        IdentityClient {
            client: Client::new(),
            auth_service_url,
            api_key,
        }
    }

    pub async fn validate_token(&self, token: &str) -> Res<StaffUser> {
        let request_body = TokenValidationRequest {
            token: token.to_string(),
        };

        info!(
            "Sending token validation request to {}",
            self.auth_service_url
        );
        let response = self
            .client
            .post(format!("{}/validate/validate-token", self.auth_service_url))
            .json(&request_body)
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let error_response = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::json!({"message": "Failed to validate token"}));
            let message = error_response["message"]
                .as_str()
                .unwrap_or("Failed to validate token")
                .to_string();
            warn!("Token validation failed: {}", message);
            return Err(AppError::Unauthorized(message));
        }

        let user = response.json::<StaffUser>().await?;
        info!("Token validated successfully for {}", user.email);
        Ok(user)
    }
}
