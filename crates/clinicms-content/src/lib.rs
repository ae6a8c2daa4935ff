//! Content model for clinicms.
//!
//! Three independent document types are persisted by the store:
//! - the page collection (id -> [`Page`] map),
//! - the [`SiteSettings`] record,
//! - the [`Review`] list.
//!
//! Serialized field names match the JSON files the site has always shipped
//! with (camelCase), so existing data directories keep loading unchanged.

pub mod defaults;
pub mod page;
pub mod review;
pub mod settings;

pub use page::{Page, PageMap, Section, SectionType, Seo};
pub use review::Review;
pub use settings::{ButtonConfig, ButtonRole, SiteSettings};
