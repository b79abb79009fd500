//! Book model

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::document::{self, Document};

/// Book record.
///
/// Serializes as the client's stored document with the named columns laid
/// over it.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Copies on the shelf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// Client document as stored
    #[serde(skip)]
    pub doc: Value,
    /// Client fields without a column of their own
    #[sqlx(skip)]
    #[serde(flatten)]
    #[schema(value_type = HashMap<String, Object>)]
    pub extra: Document,
}

impl Book {
    /// Fill `extra` from the stored document
    pub fn spread_document(mut self) -> Self {
        let rendered: Vec<&str> = [
            ("name", self.name.is_some()),
            ("author", self.author.is_some()),
            ("category", self.category.is_some()),
            ("quantity", self.quantity.is_some()),
            ("rating", self.rating.is_some()),
            ("image", self.image.is_some()),
            ("description", self.description.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, set)| set.then_some(key))
        .collect();

        self.extra = document::remainder(std::mem::take(&mut self.doc), &rendered);
        self
    }
}

/// Create book request, read from any JSON object
#[derive(Debug, Default)]
pub struct CreateBook {
    pub name: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    /// The request body, stored as sent
    pub doc: Document,
}

impl CreateBook {
    pub fn from_document(doc: Document) -> Self {
        Self {
            name: document::text(&doc, "name"),
            author: document::text(&doc, "author"),
            category: document::text(&doc, "category"),
            quantity: document::integer(&doc, "quantity"),
            rating: document::float(&doc, "rating"),
            image: document::text(&doc, "image"),
            description: document::text(&doc, "description"),
            doc,
        }
    }
}

/// Update book request.
///
/// Every editable field is written; an absent field clears the stored value.
/// `author` is not updatable and other body fields are ignored.
#[derive(Debug, Default)]
pub struct UpdateBook {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    /// Raw values of the editable fields, merged into the stored document
    pub patch: Document,
}

impl UpdateBook {
    pub const FIELDS: [&'static str; 6] =
        ["name", "category", "quantity", "rating", "image", "description"];

    pub fn from_document(doc: &Document) -> Self {
        Self {
            name: document::text(doc, "name"),
            category: document::text(doc, "category"),
            quantity: document::integer(doc, "quantity"),
            rating: document::float(doc, "rating"),
            image: document::text(doc, "image"),
            description: document::text(doc, "description"),
            patch: document::patch(doc, &Self::FIELDS),
        }
    }
}
