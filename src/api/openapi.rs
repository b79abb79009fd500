//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{books, borrowed_books, health, session},
    services::session_cookie::SESSION_COOKIE_NAME,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ShelfMaster API",
        version = "0.1.0",
        description = "Library Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Session
        session::issue_token,
        session::logout,
        // Books
        books::add_book,
        books::all_books,
        books::category_books,
        books::books_by_category,
        books::single_book,
        books::update_book,
        // Borrowed books
        borrowed_books::create_borrowed_book,
        borrowed_books::list_borrowed_books,
        borrowed_books::delete_borrowed_book,
    ),
    components(
        schemas(
            session::SuccessResponse,
            crate::models::book::Book,
            crate::models::borrowed_book::BorrowedBook,
            crate::models::write_result::InsertResult,
            crate::models::write_result::UpdateResult,
            crate::models::write_result::DeleteResult,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SessionCookieScheme),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "session", description = "Session cookie issue and logout"),
        (name = "books", description = "Book catalog"),
        (name = "borrowed", description = "Borrowed books")
    )
)]
pub struct ApiDoc;

/// Declares the `cookie_auth` scheme referenced by gated endpoints
struct SessionCookieScheme;

impl Modify for SessionCookieScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE_NAME))),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
