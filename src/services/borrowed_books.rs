//! Borrowed books service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        borrowed_book::{BorrowedBook, CreateBorrowedBook},
        write_result::{DeleteResult, InsertResult},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowedBooksService {
    repository: Repository,
}

impl BorrowedBooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_by_email(&self, email: &str) -> AppResult<Vec<BorrowedBook>> {
        self.repository.borrowed_books.list_by_email(email).await
    }

    /// Record a borrow
    pub async fn create(&self, data: &CreateBorrowedBook) -> AppResult<InsertResult> {
        self.repository.borrowed_books.create(data).await
    }

    /// Remove a borrow record (the book was returned)
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteResult> {
        let result = self.repository.borrowed_books.delete(id).await?;
        if result.deleted_count == 0 {
            tracing::debug!(%id, "No borrowed book record to delete");
        }
        Ok(result)
    }
}
