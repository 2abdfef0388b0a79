use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Token issued by the external identity provider's redirect flow.
    pub token: String,
}
