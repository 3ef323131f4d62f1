//! Client side of the authentication flow: a JSON API client, a durable
//! session store, and the route gate that decides between public and
//! protected views.

use std::path::PathBuf;

use tracing::info;

pub mod api;
pub mod gate;
pub mod session;

pub use api::{ApiClient, ClientError};
pub use gate::{decide, GateDecision, RouteKind};
pub use session::SessionStore;

use crate::auth::dto::RegisterResponse;

/// Facade tying the API client to the session store, mirroring the flow the
/// server expects: login persists the issued token, logout discards it.
pub struct AuthClient {
    pub api: ApiClient,
    pub session: SessionStore,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, session_path: impl Into<PathBuf>) -> Self {
        let mut session = SessionStore::new(session_path);
        session.load();
        Self {
            api: ApiClient::new(base_url),
            session,
        }
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        invite_code: Option<&str>,
    ) -> Result<RegisterResponse, ClientError> {
        self.api.register(email, password, invite_code).await
    }

    /// Authenticate and persist the returned token. On failure the session
    /// is left untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        let token = self.api.login(email, password).await?;
        self.session
            .store_token(&token)
            .map_err(ClientError::Storage)?;
        info!("session established");
        Ok(())
    }

    /// Drop the session from memory and durable storage. Purely client-side;
    /// the server cannot revoke an issued token.
    pub fn logout(&mut self) -> anyhow::Result<()> {
        self.session.clear()?;
        info!("session cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Gate decision for a route of the given kind under the current session.
    pub fn gate(&self, kind: RouteKind) -> GateDecision {
        gate::decide(kind, &self.session)
    }
}
