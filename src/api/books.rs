//! Book endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        document::Document,
        write_result::{InsertResult, UpdateResult},
    },
};

use super::AuthenticatedUser;

/// Add a book to the catalog.
///
/// The body is any JSON object; it is stored as sent.
#[utoipa::path(
    post,
    path = "/addBooks",
    tag = "books",
    security(("cookie_auth" = [])),
    responses(
        (status = 200, description = "Book inserted", body = InsertResult),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(body): Json<Document>,
) -> AppResult<Json<InsertResult>> {
    tracing::debug!(by = ?claims.email(), "Adding book");
    let result = state
        .services
        .books
        .create(&CreateBook::from_document(body))
        .await?;
    Ok(Json(result))
}

/// List all books
#[utoipa::path(
    get,
    path = "/allBooks",
    tag = "books",
    security(("cookie_auth" = [])),
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn all_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// List all books for category browsing
#[utoipa::path(
    get,
    path = "/categoryBooks",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn category_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// List books in a category
#[utoipa::path(
    get,
    path = "/booksCategory/{category}",
    tag = "books",
    params(("category" = String, Path, description = "Exact category name")),
    responses(
        (status = 200, description = "Books in the category", body = Vec<Book>)
    )
)]
pub async fn books_by_category(
    State(state): State<crate::AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_by_category(&category).await?;
    Ok(Json(books))
}

/// Get a book by ID (`null` when it does not exist)
#[utoipa::path(
    get,
    path = "/singleBook/{id}",
    tag = "books",
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details, or null", body = Book),
        (status = 400, description = "Malformed ID")
    )
)]
pub async fn single_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Option<Book>>> {
    let book = state.services.books.find_by_id(id).await?;
    Ok(Json(book))
}

/// Replace a book's editable fields
#[utoipa::path(
    put,
    path = "/updateBook/{id}",
    tag = "books",
    security(("cookie_auth" = [])),
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Update outcome", body = UpdateResult),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Document>,
) -> AppResult<Json<UpdateResult>> {
    let data = UpdateBook::from_document(&body);
    let result = state.services.books.update(id, &data).await?;
    Ok(Json(result))
}
