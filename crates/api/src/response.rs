//! Shared response bodies for API handlers.
//!
//! Resources are returned as bare JSON objects/arrays; only acknowledgements
//! that carry no resource get a dedicated type here.

use serde::Serialize;

/// Body returned by successful DELETE endpoints: `{ "success": true }`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
