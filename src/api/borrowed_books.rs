//! Borrowed book endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        borrowed_book::{BorrowedBook, CreateBorrowedBook},
        document::Document,
        write_result::{DeleteResult, InsertResult},
    },
};

use super::AuthenticatedUser;

/// Record a borrowed book.
///
/// The body is any JSON object; it is stored as sent.
#[utoipa::path(
    post,
    path = "/borrowedBooks",
    tag = "borrowed",
    security(("cookie_auth" = [])),
    responses(
        (status = 200, description = "Borrow recorded", body = InsertResult),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrowed_book(
    State(state): State<crate::AppState>,
    Json(body): Json<Document>,
) -> AppResult<Json<InsertResult>> {
    let result = state
        .services
        .borrowed_books
        .create(&CreateBorrowedBook::from_document(body))
        .await?;
    Ok(Json(result))
}

/// List the books borrowed under an email
#[utoipa::path(
    get,
    path = "/borrowedBooks/{email}",
    tag = "borrowed",
    security(("cookie_auth" = [])),
    params(("email" = String, Path, description = "Reader email")),
    responses(
        (status = 200, description = "Borrowed books", body = Vec<BorrowedBook>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_borrowed_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<BorrowedBook>>> {
    // Any session may read any reader's list
    if claims.email() != Some(email.as_str()) {
        tracing::debug!(by = ?claims.email(), %email, "Listing another reader's borrowed books");
    }

    let books = state.services.borrowed_books.list_by_email(&email).await?;
    Ok(Json(books))
}

/// Delete a borrowed book record (return the book)
#[utoipa::path(
    delete,
    path = "/deleteBooks/{id}",
    tag = "borrowed",
    security(("cookie_auth" = [])),
    params(("id" = Uuid, Path, description = "Borrowed book record ID")),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResult),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_borrowed_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteResult>> {
    let result = state.services.borrowed_books.delete(id).await?;
    Ok(Json(result))
}
