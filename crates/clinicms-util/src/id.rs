//! ULID-based identifier generation with prefixes.
//!
//! Identifiers in clinicms follow the pattern: `prefix_ulid`
//! For example: `rev_01HQXYZ...` for reviews.

use ulid::Ulid;

/// Known identifier prefixes.
///
/// Reviews are the only records the backend mints ids for; everything else
/// arrives from the admin UI with ids already assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPrefix {
    Review,
}

impl IdPrefix {
    /// Get the string prefix for this identifier type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPrefix::Review => "rev",
        }
    }

    /// Parse a prefix from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rev" => Some(IdPrefix::Review),
            _ => None,
        }
    }
}

/// Identifier generation and parsing utilities.
pub struct Identifier;

impl Identifier {
    /// Generate a new ascending identifier (newer = larger).
    ///
    /// Reviews are listed oldest-first in the admin panel, so
    /// chronological ordering is what we want.
    pub fn ascending(prefix: IdPrefix) -> String {
        let ulid = Ulid::new();
        format!("{}_{}", prefix.as_str(), ulid.to_string().to_lowercase())
    }

    /// Parse an identifier into its prefix and ULID parts.
    pub fn parse(id: &str) -> Option<(IdPrefix, Ulid)> {
        let parts: Vec<&str> = id.splitn(2, '_').collect();
        if parts.len() != 2 {
            return None;
        }

        let prefix = IdPrefix::parse(parts[0])?;
        let ulid = Ulid::from_string(&parts[1].to_uppercase()).ok()?;
        Some((prefix, ulid))
    }

    /// Generate a review ID.
    pub fn review() -> String {
        Self::ascending(IdPrefix::Review)
    }
}
