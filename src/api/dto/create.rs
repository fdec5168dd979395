//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

/// Request to create a shortened link.
///
/// Both fields are optional at the parsing stage; presence of
/// `original_url` is a validation concern with its own error message,
/// not a deserialization failure. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRequest {
    /// The URL to shorten. Stored as-is, no normalization.
    pub original_url: Option<String>,

    /// Optional caller-chosen shorthand. Generated when absent.
    pub shorthand: Option<String>,
}

/// Response carrying the effective shorthand of a created link.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub shorthand: String,
}
