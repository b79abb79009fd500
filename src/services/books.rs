//! Book catalog service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        write_result::{InsertResult, UpdateResult},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn list_by_category(&self, category: &str) -> AppResult<Vec<Book>> {
        self.repository.books.list_by_category(category).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        self.repository.books.find_by_id(id).await
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<InsertResult> {
        let result = self.repository.books.create(data).await?;
        tracing::info!(book_id = %result.inserted_id, "Book added");
        Ok(result)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<UpdateResult> {
        self.repository.books.update(id, data).await
    }
}
