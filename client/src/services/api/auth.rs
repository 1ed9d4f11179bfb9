//! # Authentication Endpoints
//!
//! Login and registration against the backend's `status`-flag envelope.

use super::client::ApiClient;
use shared::dto::auth::{ApiUser, LoginRequest, LoginResponse, RegisterRequest};
use shared::dto::envelope::StatusEnvelope;

/// Log in with email and password.
///
/// The backend reports the outcome in the body's `status` flag; an HTTP 200
/// with `status: false` is still a failed login.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<(ApiUser, String), String> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };

    let response = client
        .client
        .post(format!("{}/api/login", client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            format!("Network error: {}", e)
        })?;

    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login response parse error");
            format!("Failed to parse response: {}", e)
        })?;

    let duration = start.elapsed();

    if body.status {
        match (body.user, body.token) {
            (Some(user), Some(token)) => {
                tracing::info!(duration_ms = duration.as_millis(), "Login successful");
                Ok((user, token))
            }
            _ => Err("Login response missing user or token".to_string()),
        }
    } else {
        let message = body
            .message
            .unwrap_or_else(|| "Login failed. Please try again.".to_string());
        tracing::warn!(
            error = %message,
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        Err(message)
    }
}

/// Register a new account.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<ApiUser, String> {
    let response = client
        .client
        .post(format!("{}/api/register", client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<StatusEnvelope<ApiUser>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result("Registration failed. Please try again.")
}
