//! Patient reviews shown on the public site.

use serde::{Deserialize, Serialize};

/// One patient review.
///
/// `rating` is expected to be 1-5 but is deliberately not validated here;
/// the admin panel owns input validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub country: String,
    pub rating: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub verified: bool,
    /// Featured reviews are surfaced in the homepage carousel.
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}
