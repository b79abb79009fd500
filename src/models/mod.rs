//! Data models for ShelfMaster

pub mod book;
pub mod borrowed_book;
pub mod document;
pub mod session;
pub mod write_result;

// Re-export commonly used types
pub use book::Book;
pub use borrowed_book::BorrowedBook;
pub use document::Document;
pub use session::{IdentityClaim, SessionClaims};
pub use write_result::{DeleteResult, InsertResult, UpdateResult};
