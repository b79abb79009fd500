//! Session cookie attributes

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use crate::config::RunMode;

/// Cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "token";

/// Builds the cookies that set and clear the session token.
///
/// In production the frontend lives on another domain, which needs
/// `SameSite=None` together with `Secure`. Local development runs over plain
/// HTTP, so `Secure` is off and `SameSite=Strict` is used instead.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookies {
    run_mode: RunMode,
}

impl SessionCookies {
    pub fn new(run_mode: RunMode) -> Self {
        Self { run_mode }
    }

    pub fn build_set_cookie(&self, token: String) -> Cookie<'static> {
        self.base(token)
    }

    /// Same attributes as the set cookie, with an empty value and immediate expiry
    pub fn build_clear_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.set_max_age(Duration::ZERO);
        cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
        cookie
    }

    fn base(&self, value: String) -> Cookie<'static> {
        let production = self.run_mode.is_production();
        let same_site = if production {
            SameSite::None
        } else {
            SameSite::Strict
        };

        Cookie::build((SESSION_COOKIE_NAME, value))
            .path("/")
            .http_only(true)
            .secure(production)
            .same_site(same_site)
            .build()
    }
}
