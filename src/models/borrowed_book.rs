//! Borrowed book (loan transaction) model

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::document::{self, Document};

/// A book borrowed by a reader, identified by email
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BorrowedBook {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Borrowed book ID (not enforced as a foreign key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrowed_date: Option<String>,
    /// Date the reader promised to return the book
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub doc: Value,
    #[sqlx(skip)]
    #[serde(flatten)]
    #[schema(value_type = HashMap<String, Object>)]
    pub extra: Document,
}

impl BorrowedBook {
    /// Fill `extra` from the stored document
    pub fn spread_document(mut self) -> Self {
        let rendered: Vec<&str> = [
            ("book_id", self.book_id.is_some()),
            ("email", self.email.is_some()),
            ("user_name", self.user_name.is_some()),
            ("name", self.name.is_some()),
            ("image", self.image.is_some()),
            ("category", self.category.is_some()),
            ("borrowed_date", self.borrowed_date.is_some()),
            ("return_date", self.return_date.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, set)| set.then_some(key))
        .collect();

        self.extra = document::remainder(std::mem::take(&mut self.doc), &rendered);
        self
    }
}

/// Record borrowed book request, read from any JSON object
#[derive(Debug, Default)]
pub struct CreateBorrowedBook {
    pub book_id: Option<String>,
    pub email: Option<String>,
    pub user_name: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub borrowed_date: Option<String>,
    pub return_date: Option<String>,
    /// The request body, stored as sent
    pub doc: Document,
}

impl CreateBorrowedBook {
    pub fn from_document(doc: Document) -> Self {
        Self {
            book_id: document::text(&doc, "book_id"),
            email: document::text(&doc, "email"),
            user_name: document::text(&doc, "user_name"),
            name: document::text(&doc, "name"),
            image: document::text(&doc, "image"),
            category: document::text(&doc, "category"),
            borrowed_date: document::text(&doc, "borrowed_date"),
            return_date: document::text(&doc, "return_date"),
            doc,
        }
    }
}
