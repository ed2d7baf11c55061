//! Login and registration calls
//!
//! The only two operations that go out without a bearer token.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest {
    email: String,
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default, rename = "accessToken")]
    access_token: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    /// POST /auth/login exchanges credentials for a bearer token.
    ///
    /// The token is returned, not stored; the caller decides when the
    /// session is mutated.
    #[cfg(not(feature = "ssr"))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        use super::http::{Payload, send_json};

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response: LoginResponse = send_json(
            "POST",
            &self.url("/auth/login"),
            None,
            Payload::Json(body),
            super::MUTATION_DEADLINE_MS,
        )
        .await?;

        match response.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::Server {
                status: 200,
                message: response
                    .message
                    .unwrap_or_else(|| "Invalid email or password".to_string()),
            }),
        }
    }

    #[cfg(feature = "ssr")]
    pub async fn login(&self, _email: &str, _password: &str) -> Result<String, ApiError> {
        Err(ApiError::unavailable())
    }

    /// POST /auth/register creates an account; returns the backend's
    /// acknowledgement message when it sends one.
    #[cfg(not(feature = "ssr"))]
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError> {
        use super::http::{Payload, send_json};

        let request = RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response: super::MessageResponse = send_json(
            "POST",
            &self.url("/auth/register"),
            None,
            Payload::Json(body),
            super::MUTATION_DEADLINE_MS,
        )
        .await?;

        Ok(response.message)
    }

    #[cfg(feature = "ssr")]
    pub async fn register(
        &self,
        _email: &str,
        _username: &str,
        _password: &str,
    ) -> Result<Option<String>, ApiError> {
        Err(ApiError::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_serializes_credentials() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""email":"user@example.com""#));
        assert!(json.contains(r#""password":"secret""#));
    }

    #[test]
    fn test_register_request_serializes_all_fields() {
        let request = RegisterRequest {
            email: "user@example.com".to_string(),
            username: "user".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""username":"user""#));
    }

    #[test]
    fn test_login_response_reads_access_token() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"accessToken": "tok-123"}"#).unwrap();
        assert_eq!(response.access_token.as_deref(), Some("tok-123"));
        assert!(response.message.is_none());
    }

    #[test]
    fn test_login_response_without_token_keeps_message() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"message": "Invalid email or password"}"#).unwrap();
        assert!(response.access_token.is_none());
        assert_eq!(
            response.message.as_deref(),
            Some("Invalid email or password")
        );
    }
}
