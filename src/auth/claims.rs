use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload used for authentication. Identity is the `{sub, email}` pair;
/// validity is purely signature plus expiry, nothing is held server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,    // user ID
    pub email: String,
    pub iat: usize,   // issued at (unix timestamp)
    pub exp: usize,   // expires at (unix timestamp)
    pub iss: String,  // issuer
    pub aud: String,  // audience
}
