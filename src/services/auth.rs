//! Session service: login, logout and token checks

use axum_extra::extract::cookie::Cookie;

use crate::{
    config::AppConfig,
    error::{AppResult, AuthError},
    models::session::{IdentityClaim, SessionClaims},
};

use super::{session_cookie::SessionCookies, token::TokenCodec};

#[derive(Clone)]
pub struct AuthService {
    codec: TokenCodec,
    cookies: SessionCookies,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self::from_parts(TokenCodec::new(&config.auth), SessionCookies::new(config.run_mode))
    }

    pub fn from_parts(codec: TokenCodec, cookies: SessionCookies) -> Self {
        Self { codec, cookies }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Sign the asserted identity and build the session cookie.
    ///
    /// The claim is taken on trust: no credentials are checked here.
    pub fn login(&self, claim: IdentityClaim) -> AppResult<Cookie<'static>> {
        let email = claim.get("email").and_then(|v| v.as_str()).map(str::to_string);
        let token = self.codec.issue(claim)?;

        tracing::info!(email = ?email, "Session token issued");

        Ok(self.cookies.build_set_cookie(token))
    }

    /// Cookie that makes the client drop its session token.
    ///
    /// The token itself stays valid until it expires.
    pub fn logout(&self) -> Cookie<'static> {
        self.cookies.build_clear_cookie()
    }

    /// Auth gate decision for a request's `token` cookie value
    pub fn authenticate(&self, token: Option<&str>) -> Result<SessionClaims, AuthError> {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => {
                tracing::debug!("No session token supplied");
                return Err(AuthError::Missing);
            }
        };

        self.codec.verify(token).map_err(|e| {
            tracing::warn!("Rejected session token: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunMode;
    use chrono::{Duration, Utc};
    use serde_json::json;

    fn service() -> AuthService {
        AuthService::from_parts(
            TokenCodec::from_secret("test-secret", Duration::days(7)),
            SessionCookies::new(RunMode::Development),
        )
    }

    fn claim() -> IdentityClaim {
        json!({ "email": "a@x.com" }).as_object().cloned().unwrap()
    }

    #[test]
    fn test_login_cookie_carries_verifiable_token() {
        let service = service();
        let cookie = service.login(claim()).unwrap();

        let claims = service.authenticate(Some(cookie.value())).unwrap();
        assert_eq!(claims.identity, claim());
    }

    #[test]
    fn test_missing_and_invalid_are_distinguished() {
        let service = service();

        assert_eq!(service.authenticate(None), Err(AuthError::Missing));
        assert_eq!(service.authenticate(Some("")), Err(AuthError::Missing));
        assert_eq!(service.authenticate(Some("garbage")), Err(AuthError::Invalid));
    }

    #[test]
    fn test_cleared_cookie_is_treated_as_missing() {
        let service = service();
        let cleared = service.logout();

        assert_eq!(service.authenticate(Some(cleared.value())), Err(AuthError::Missing));
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let service = service();
        let token = service
            .codec()
            .issue_at(claim(), Utc::now() - Duration::days(7) - Duration::seconds(1))
            .unwrap();

        assert_eq!(service.authenticate(Some(&token)), Err(AuthError::Invalid));
    }
}
