//! Session token payload

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity fields asserted by the client at login (e.g. `{"email": "..."}`).
///
/// Opaque to the server: it is signed as-is and handed back on verification.
pub type IdentityClaim = Map<String, Value>;

/// Registered claim names owned by the token codec
pub const RESERVED_CLAIMS: [&str; 2] = ["iat", "exp"];

/// JWT claims carried by the session cookie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub identity: IdentityClaim,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

impl SessionClaims {
    /// Wrap an identity claim with issue/expiry timestamps.
    ///
    /// Any `iat`/`exp` keys supplied by the client are dropped.
    pub fn new(mut identity: IdentityClaim, iat: i64, exp: i64) -> Self {
        for name in RESERVED_CLAIMS {
            identity.remove(name);
        }
        Self { identity, iat, exp }
    }

    /// Email asserted at login, if the client supplied one
    pub fn email(&self) -> Option<&str> {
        self.identity.get("email").and_then(Value::as_str)
    }
}
