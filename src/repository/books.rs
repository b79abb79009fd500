//! Books repository for database operations

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        write_result::{InsertResult, UpdateResult},
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List every book
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Book::spread_document).collect())
    }

    /// List books in a category (exact match)
    pub async fn list_by_category(&self, category: &str) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE category = $1 ORDER BY created_at, id",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Book::spread_document).collect())
    }

    /// Get book by ID, `None` when absent
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Book::spread_document))
    }

    /// Insert a book, keeping the client document alongside the columns
    pub async fn create(&self, data: &CreateBook) -> AppResult<InsertResult> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO books (name, author, category, quantity, rating, image, description, doc)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.author)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(data.rating)
        .bind(&data.image)
        .bind(&data.description)
        .bind(Json(&data.doc))
        .fetch_one(&self.pool)
        .await?;
        Ok(InsertResult::new(id))
    }

    /// Overwrite the editable fields of a book
    pub async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<UpdateResult> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET name = $2, category = $3, quantity = $4, rating = $5, image = $6, description = $7,
                doc = doc || $8
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(data.rating)
        .bind(&data.image)
        .bind(&data.description)
        .bind(Json(&data.patch))
        .execute(&self.pool)
        .await?;
        Ok(UpdateResult::from_rows_affected(result.rows_affected()))
    }
}
