//! Business logic services

pub mod auth;
pub mod books;
pub mod borrowed_books;
pub mod session_cookie;
pub mod token;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub borrowed_books: borrowed_books::BorrowedBooksService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self {
            auth: auth::AuthService::new(config),
            books: books::BooksService::new(repository.clone()),
            borrowed_books: borrowed_books::BorrowedBooksService::new(repository.clone()),
            repository,
        }
    }

    /// Check database connectivity
    pub async fn check_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
