//! HTTP client for the authentication backend.
//!
//! Two endpoints only: login and register. Both return the same payload,
//! a bearer token plus the account it belongs to.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Role, UserRecord};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Login endpoint path, relative to the base URL.
const LOGIN_PATH: &str = "/api/auth/login";

/// Registration endpoint path, relative to the base URL.
const REGISTER_PATH: &str = "/api/auth/register";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company_name: Option<&'a str>,
}

/// Successful auth response: a bearer token and the account it belongs to.
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
    pub user: UserRecord,
}

/// Client for the auth endpoints.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client against the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Exchange credentials for a session payload.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload> {
        debug!(email, "sending login request");
        self.post_auth(LOGIN_PATH, &LoginRequest { email, password })
            .await
    }

    /// Create an account and receive a session payload for it.
    ///
    /// `name` is sent as `full_name` for candidates and `company_name` for
    /// recruiters; the other field is omitted from the body entirely.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
        name: &str,
    ) -> Result<AuthPayload> {
        let (full_name, company_name) = match role {
            Role::Candidate => (Some(name), None),
            Role::Recruiter => (None, Some(name)),
        };
        debug!(email, role = role.as_str(), "sending register request");
        self.post_auth(
            REGISTER_PATH,
            &RegisterRequest {
                email,
                password,
                role,
                full_name,
                company_name,
            },
        )
        .await
    }

    async fn post_auth<B: Serialize>(&self, path: &str, body: &B) -> Result<AuthPayload> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = AuthClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn register_body_carries_exactly_one_name_field() {
        let candidate = RegisterRequest {
            email: "c@b.com",
            password: "pw",
            role: Role::Candidate,
            full_name: Some("Cara Diaz"),
            company_name: None,
        };
        let json = serde_json::to_string(&candidate).unwrap();
        assert!(json.contains("full_name"));
        assert!(!json.contains("company_name"));

        let recruiter = RegisterRequest {
            email: "r@b.com",
            password: "pw",
            role: Role::Recruiter,
            full_name: None,
            company_name: Some("Acme"),
        };
        let json = serde_json::to_string(&recruiter).unwrap();
        assert!(json.contains("company_name"));
        assert!(!json.contains("full_name"));
    }
}
