use actix_session::Session;
use actix_web::{Responder, get, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use serde_json::json;
use std::sync::Arc;

use crate::dtos::auth::LoginRequest;
use crate::services::identity::{IdentityClient, StaffUser};

/// Exchanges an identity-provider token for a cookie session.
///
/// # Input
/// - `req`: JSON payload with the `token` handed back by the provider's
///   redirect flow
/// - `session`: The (so far anonymous) cookie session
/// - `config`: Application configuration with the identity provider settings
///
/// # Output
/// - Success: Stores the staff user in the session and returns it
/// - Error: Returns 401 Unauthorized when the provider rejects the token
///
/// # Frontend Example
/// ```javascript
/// // After the identity provider redirects back with a token
/// const response = await fetch('/api/auth/login', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   credentials: 'include', // Important for receiving the session cookie
///   body: JSON.stringify({ token })
/// });
///
/// if (response.ok) {
///   const data = await response.json();
///   console.log('Logged in as', data.user.email);
/// }
/// ```
#[post("/login")]
async fn post_login(
    req: web::Json<LoginRequest>,
    session: Session,
    config: web::Data<Arc<Config>>,
) -> impl Responder {
    let identity = IdentityClient::new(
        config.auth_service_url.clone(),
        config.auth_api_key.clone(),
    );
    let user = identity.validate_token(&req.token).await?;

    let serialized = serde_json::to_string(&user)
        .map_err(|_| AppError::Internal("Failed to serialize user json".to_string()))?;
    session
        .insert("user", serialized)
        .map_err(|_| AppError::Session("Failed to store session user".to_string()))?;

    Success::ok(json!({ "user": user }))
}

/// Ends the session. Always succeeds, even without an active session.
#[post("/logout")]
async fn post_logout(session: Session) -> Res<impl Responder> {
    session.purge();
    Success::ok(json!({ "message": "Logged out" }))
}

/// Retrieves the current session user from the session cookie.
///
/// # Input
/// - `session`: The user's session containing authentication data
///
/// # Output
/// - Success: Returns JSON with the staff user
/// - Error: Returns 401 Unauthorized if no valid session exists
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/auth/session', {
///   credentials: 'include' // Important for sending session cookies
/// });
///
/// if (response.ok) {
///   const sessionData = await response.json();
///   console.log('Session user:', sessionData.user);
/// } else if (response.status === 401) {
///   // Redirect to login page
///   window.location.href = '/login';
/// }
/// ```
#[get("/session")]
async fn get_session(session: Session) -> Res<impl Responder> {
    let user = session
        .get::<String>("user")
        .map_err(|_| AppError::Session("Session user error".to_string()))?
        .ok_or_else(|| AppError::Unauthorized("No user data found".to_string()))?;

    Ok(web::Json(json!({
        "user": serde_json::from_str::<StaffUser>(&user)
            .map_err(|_| AppError::Internal("Failed to parse user json".to_string()))?
    })))
}
