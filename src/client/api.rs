use serde::Deserialize;

use crate::auth::dto::{
    LoginRequest, LoginResponse, PublicUser, RegisterRequest, RegisterResponse,
};

/// Client-side failure taxonomy. Server error messages are surfaced verbatim;
/// no retries anywhere.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("A network error occurred.")]
    Network(#[from] reqwest::Error),
    #[error("failed to persist session")]
    Storage(#[source] anyhow::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the server's `{"error": …}` message from a failed response body,
/// falling back to a generic message when the body is not in that shape.
fn api_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| "Request failed.".to_string());
    ClientError::Api { status, message }
}

/// Thin JSON client for the authentication API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn check(res: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if res.status().is_success() {
            return Ok(res);
        }
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        Err(api_error(status, &body))
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        invite_code: Option<&str>,
    ) -> Result<RegisterResponse, ClientError> {
        let res = self
            .http
            .post(format!("{}/auth/register", self.base_url))
            .json(&RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
                invite_code: invite_code.map(str::to_string),
            })
            .send()
            .await?;
        Ok(Self::check(res).await?.json::<RegisterResponse>().await?)
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let res = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let body = Self::check(res).await?.json::<LoginResponse>().await?;
        Ok(body.token)
    }

    pub async fn ping(&self, token: &str) -> Result<String, ClientError> {
        let res = self
            .http
            .get(format!("{}/api/ping", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(Self::check(res).await?.text().await?)
    }

    pub async fn me(&self, token: &str) -> Result<PublicUser, ClientError> {
        let res = self
            .http
            .get(format!("{}/api/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(Self::check(res).await?.json::<PublicUser>().await?)
    }
}
