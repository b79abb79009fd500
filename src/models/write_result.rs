//! Write outcomes returned by the mutating endpoints.
//!
//! The JSON shapes mirror document-store driver results
//! (`acknowledged`, `insertedId`, `matchedCount`, ...) which the web client
//! already understands.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Outcome of a single insert
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertResult {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Outcome of a single-row update
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Uuid>,
}

impl UpdateResult {
    /// Rows touched by a plain `UPDATE` are both matched and modified
    pub fn from_rows_affected(rows: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: rows,
            modified_count: rows,
            upserted_count: 0,
            upserted_id: None,
        }
    }
}

/// Outcome of a single-row delete
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn from_rows_affected(rows: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: rows,
        }
    }
}
