/// JWT claim sets
///
/// Access tokens carry `{email, role}`; refresh tokens carry only `{email}`.
/// Both add the registered `iat` / `exp` claims (RFC 7519).

use serde::{Deserialize, Serialize};

/// Claims for short-lived access tokens
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    pub email: String,
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(email: String, role: String, expiry_seconds: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            email,
            role,
            iat: now,
            exp: now + expiry_seconds,
        }
    }
}

/// Claims for long-lived refresh tokens
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RefreshClaims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl RefreshClaims {
    pub fn new(email: String, expiry_seconds: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            email,
            iat: now,
            exp: now + expiry_seconds,
        }
    }
}
