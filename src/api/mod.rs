//! API handlers for ShelfMaster REST endpoints

pub mod books;
pub mod borrowed_books;
pub mod health;
pub mod openapi;
pub mod session;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::CONTENT_TYPE, request::Parts, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::CorsConfig, error::AppError, models::session::SessionClaims,
    services::session_cookie::SESSION_COOKIE_NAME, AppState,
};

/// Extractor for the identity of a request that passed the auth gate
pub struct AuthenticatedUser(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Already verified by `require_session`
        if let Some(claims) = parts.extensions.get::<SessionClaims>() {
            return Ok(AuthenticatedUser(claims.clone()));
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let claims = state
            .services
            .auth
            .authenticate(jar.get(SESSION_COOKIE_NAME).map(Cookie::value))?;

        parts.extensions.insert(claims.clone());
        Ok(AuthenticatedUser(claims))
    }
}

/// Auth gate: rejects the request with 401 unless it carries a valid `token`
/// cookie, otherwise stores the decoded claims in the request extensions.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = state
        .services
        .auth
        .authenticate(jar.get(SESSION_COOKIE_NAME).map(Cookie::value))?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    // Listing and mutating endpoints need a session
    let protected = Router::new()
        .route("/addBooks", post(books::add_book))
        .route("/allBooks", get(books::all_books))
        .route("/updateBook/:id", put(books::update_book))
        .route("/deleteBooks/:id", delete(borrowed_books::delete_borrowed_book))
        .route("/borrowedBooks", post(borrowed_books::create_borrowed_book))
        .route("/borrowedBooks/:email", get(borrowed_books::list_borrowed_books))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    let public = Router::new()
        .route("/", get(health::banner))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Session
        .route("/jwt", post(session::issue_token))
        .route("/logout", post(session::logout))
        // Browsing
        .route("/categoryBooks", get(books::category_books))
        .route("/booksCategory/:category", get(books::books_by_category))
        .route("/singleBook/:id", get(books::single_book));

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Credentialed CORS for the configured frontend origins
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
