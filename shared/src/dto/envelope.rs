use serde::{Deserialize, Serialize};

/// Uniform response envelope used by the batch, test, and marketplace
/// endpoints: `{success, data, message?}`. Clients branch on `success`,
/// not on the HTTP status alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope: `data` on success, the server message (or a
    /// fallback) on failure.
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| format!("{fallback}: response contained no data"))
        } else {
            Err(self.message.unwrap_or_else(|| fallback.to_string()))
        }
    }
}

/// Envelope variant used by the auth/user endpoints, which report their
/// outcome in a `status` flag instead of `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEnvelope<T> {
    pub status: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> StatusEnvelope<T> {
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        if self.status {
            self.data
                .ok_or_else(|| format!("{fallback}: response contained no data"))
        } else {
            Err(self.message.unwrap_or_else(|| fallback.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(env.into_result("failed"), Ok(vec![1, 2]));
    }

    #[test]
    fn failure_envelope_yields_server_message() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"success": false, "message": "batch not found"}"#).unwrap();
        assert_eq!(env.into_result("failed"), Err("batch not found".to_string()));
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let env: StatusEnvelope<i32> = serde_json::from_str(r#"{"status": false}"#).unwrap();
        assert_eq!(env.into_result("login failed"), Err("login failed".to_string()));
    }
}
