//! Borrowed books repository for database operations

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        borrowed_book::{BorrowedBook, CreateBorrowedBook},
        write_result::{DeleteResult, InsertResult},
    },
};

#[derive(Clone)]
pub struct BorrowedBooksRepository {
    pool: Pool<Postgres>,
}

impl BorrowedBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Borrowed books recorded for a reader email
    pub async fn list_by_email(&self, email: &str) -> AppResult<Vec<BorrowedBook>> {
        let rows = sqlx::query_as::<_, BorrowedBook>(
            "SELECT * FROM borrowed_books WHERE email = $1 ORDER BY created_at, id",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(BorrowedBook::spread_document).collect())
    }

    /// Record a borrowed book, keeping the client document alongside the columns
    pub async fn create(&self, data: &CreateBorrowedBook) -> AppResult<InsertResult> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO borrowed_books
                (book_id, email, user_name, name, image, category, borrowed_date, return_date, doc)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&data.book_id)
        .bind(&data.email)
        .bind(&data.user_name)
        .bind(&data.name)
        .bind(&data.image)
        .bind(&data.category)
        .bind(&data.borrowed_date)
        .bind(&data.return_date)
        .bind(Json(&data.doc))
        .fetch_one(&self.pool)
        .await?;
        Ok(InsertResult::new(id))
    }

    /// Delete a borrowed book record
    pub async fn delete(&self, id: Uuid) -> AppResult<DeleteResult> {
        let result = sqlx::query("DELETE FROM borrowed_books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(DeleteResult::from_rows_affected(result.rows_affected()))
    }
}
