//! Session token codec (HS256 JWT)

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult, AuthError},
    models::session::{IdentityClaim, SessionClaims},
};

/// Signs identity claims into time-limited tokens and verifies them back.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(&config.jwt_secret, Duration::days(config.token_ttl_days))
    }

    pub fn from_secret(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` against an explicit clock, with no leeway
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign `claim`, valid from now for the configured lifetime
    pub fn issue(&self, claim: IdentityClaim) -> AppResult<String> {
        self.issue_at(claim, Utc::now())
    }

    pub fn issue_at(&self, claim: IdentityClaim, now: DateTime<Utc>) -> AppResult<String> {
        let iat = now.timestamp();
        let exp = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::Internal("Token expiry out of range".to_string()))?
            .timestamp();
        let claims = SessionClaims::new(claim, iat, exp);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Check signature and expiry, returning the signed claims
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Valid iff the signature matches and `now < exp`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError> {
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Token rejected");
                AuthError::Invalid
            })?
            .claims;

        if now.timestamp() >= claims.exp {
            tracing::debug!(exp = claims.exp, "Token expired");
            return Err(AuthError::Invalid);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    const SECRET: &str = "test-secret";

    fn codec() -> TokenCodec {
        TokenCodec::from_secret(SECRET, Duration::days(7))
    }

    fn claim(value: Value) -> IdentityClaim {
        value.as_object().cloned().unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_round_trip_returns_claim_with_timestamps() {
        let codec = codec();
        let token = codec.issue(claim(json!({ "email": "a@x.com" }))).unwrap();

        let decoded = codec.verify(&token).unwrap();

        assert_eq!(decoded.identity, claim(json!({ "email": "a@x.com" })));
        assert_eq!(decoded.exp - decoded.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_round_trip_preserves_nested_claims() {
        let codec = codec();
        let identity = claim(json!({
            "email": "reader@shelf.io",
            "name": "Reader",
            "roles": ["member"],
            "prefs": { "theme": "dark" }
        }));
        let token = codec.issue_at(identity.clone(), t0()).unwrap();

        let decoded = codec.verify_at(&token, t0() + Duration::days(1)).unwrap();

        assert_eq!(decoded.identity, identity);
        assert_eq!(decoded.iat, t0().timestamp());
    }

    #[test]
    fn test_token_from_another_key_is_invalid() {
        let other = TokenCodec::from_secret("another-secret", Duration::days(7));
        let token = other.issue(claim(json!({ "email": "a@x.com" }))).unwrap();

        assert_eq!(codec().verify(&token), Err(AuthError::Invalid));
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let codec = codec();
        let token = codec.issue(claim(json!({ "email": "a@x.com" }))).unwrap();
        let forged = codec.issue(claim(json!({ "email": "admin@x.com" }))).unwrap();

        // Graft the forged payload onto the original signature
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert_eq!(codec.verify(&tampered), Err(AuthError::Invalid));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let codec = codec();
        for token in ["", "abc", "a.b.c", "not.a.jwt.at.all"] {
            assert_eq!(codec.verify(token), Err(AuthError::Invalid), "token {:?}", token);
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = codec();
        let token = codec.issue_at(claim(json!({ "email": "a@x.com" })), t0()).unwrap();
        let expiry = t0() + Duration::days(7);

        assert!(codec.verify_at(&token, t0()).is_ok());
        assert!(codec.verify_at(&token, expiry - Duration::seconds(1)).is_ok());
        assert_eq!(codec.verify_at(&token, expiry), Err(AuthError::Invalid));
        assert_eq!(
            codec.verify_at(&token, expiry + Duration::days(30)),
            Err(AuthError::Invalid)
        );
    }

    #[test]
    fn test_expired_token_rejected_with_wall_clock() {
        let codec = codec();
        let token = codec
            .issue_at(claim(json!({ "email": "a@x.com" })), Utc::now() - Duration::days(8))
            .unwrap();

        assert_eq!(codec.verify(&token), Err(AuthError::Invalid));
    }

    #[test]
    fn test_client_supplied_exp_is_overwritten() {
        let codec = codec();
        let token = codec
            .issue_at(claim(json!({ "email": "a@x.com", "exp": 9999999999_i64 })), t0())
            .unwrap();

        let decoded = codec.verify_at(&token, t0()).unwrap();
        assert_eq!(decoded.exp, (t0() + Duration::days(7)).timestamp());
        assert_eq!(
            codec.verify_at(&token, t0() + Duration::days(7)),
            Err(AuthError::Invalid)
        );
    }

    #[test]
    fn test_audience_claim_does_not_break_verification() {
        let codec = codec();
        let token = codec
            .issue(claim(json!({ "email": "a@x.com", "aud": "shelfmaster-web" })))
            .unwrap();

        assert!(codec.verify(&token).is_ok());
    }

    #[test]
    fn test_expiry_past_calendar_end_is_an_error() {
        let codec = TokenCodec::from_secret(SECRET, Duration::days(3650));

        let result = codec.issue_at(claim(json!({ "email": "a@x.com" })), DateTime::<Utc>::MAX_UTC);

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
