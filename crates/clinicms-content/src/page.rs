//! Marketing pages and their content sections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The page collection as persisted: an opaque numeric-string key per page.
///
/// A `BTreeMap` keeps the serialized file stable across saves.
pub type PageMap = BTreeMap<String, Page>;

/// A single marketing page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page {
    /// Matches the key in the page collection map.
    pub id: String,
    /// URL path segment. Should be unique across the collection; uniqueness
    /// is not enforced here.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Content blocks. Render order is defined by each section's `order`
    /// field, not by list position.
    pub sections: Vec<Section>,
    pub seo: Seo,
    /// Public visibility. Enforcement is the caller's responsibility.
    pub is_published: bool,
    /// ISO-8601 timestamp, set by the caller on save.
    pub last_updated: String,
    /// Free-text attribution.
    pub updated_by: String,
}

impl Page {
    /// Normalize a page after load.
    ///
    /// Sections are stably sorted by `order`; ties keep their input order.
    pub fn normalize(&mut self) {
        self.sections.sort_by_key(|s| s.order);
    }
}

/// Search metadata for a page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// One content block within a page.
///
/// All section variants share the same record shape; `section_type` only
/// selects the rendering treatment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    /// Unique within the page.
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rich HTML, trusted as-is. The admin panel is the only writer.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub order: i64,
    /// Schema-less extension bag; consumers validate at the point of use.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

/// Rendering treatment for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Hero,
    #[default]
    Text,
    ImageText,
    Features,
    Cta,
    Faq,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, order: i64) -> Section {
        Section {
            id: id.to_string(),
            order,
            ..Section::default()
        }
    }

    #[test]
    fn normalize_sorts_sections_by_order() {
        let mut page = Page {
            sections: vec![section("c", 3), section("a", 1), section("b", 2)],
            ..Page::default()
        };
        page.normalize();
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn normalize_keeps_input_order_on_ties() {
        let mut page = Page {
            sections: vec![section("first", 1), section("second", 1), section("third", 1)],
            ..Page::default()
        };
        page.normalize();
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn page_serializes_with_camel_case_fields() {
        let page = Page {
            id: "1".to_string(),
            is_published: true,
            last_updated: "2024-01-15T09:00:00Z".to_string(),
            updated_by: "admin".to_string(),
            ..Page::default()
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"isPublished\":true"));
        assert!(json.contains("\"lastUpdated\""));
        assert!(json.contains("\"updatedBy\""));
    }

    #[test]
    fn section_type_uses_kebab_case() {
        let s = Section {
            section_type: SectionType::ImageText,
            ..Section::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"type\":\"image-text\""));
    }

    #[test]
    fn section_tolerates_missing_optional_fields() {
        let s: Section =
            serde_json::from_str(r#"{"id":"s1","type":"hero","content":"<h1>Hi</h1>","order":1}"#)
                .unwrap();
        assert_eq!(s.section_type, SectionType::Hero);
        assert!(s.title.is_none());
        assert!(s.metadata.is_empty());
    }
}
