//! # User Directory Endpoint
//!
//! Fetches the user list the test-request screen filters for laboratories.

use super::client::ApiClient;
use shared::domain::access::TYPE_LABORATORY;
use shared::dto::auth::ApiUser;
use shared::dto::envelope::StatusEnvelope;

/// Fetch all users.
#[tracing::instrument(skip(client))]
pub async fn fetch_users(client: &ApiClient) -> Result<Vec<ApiUser>, String> {
    let response = client
        .client
        .get(format!("{}/api/users", client.base_url()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<StatusEnvelope<Vec<ApiUser>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result("Failed to fetch users")
}

/// Restrict a user list to laboratory accounts.
pub fn laboratories(users: Vec<ApiUser>) -> Vec<ApiUser> {
    users
        .into_iter()
        .filter(|user| user.account_type == TYPE_LABORATORY)
        .collect()
}
