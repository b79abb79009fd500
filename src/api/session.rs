//! Session endpoints: issue and clear the `token` cookie

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::session::IdentityClaim};

#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Issue a session token for the asserted identity and set it as a cookie.
///
/// The body is any JSON object, e.g. `{"email": "a@x.com"}`.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "session",
    responses(
        (status = 200, description = "Session cookie set", body = SuccessResponse)
    )
)]
pub async fn issue_token(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Json(claim): Json<IdentityClaim>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let cookie = state.services.auth.login(claim)?;
    Ok((jar.add(cookie), Json(SuccessResponse { success: true })))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/logout",
    tag = "session",
    responses(
        (status = 200, description = "Session cookie cleared", body = SuccessResponse)
    )
)]
pub async fn logout(
    State(state): State<crate::AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let cookie = state.services.auth.logout();
    (jar.add(cookie), Json(SuccessResponse { success: true }))
}
