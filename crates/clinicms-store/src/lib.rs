//! File-backed content store for clinicms.
//!
//! Three independent documents are persisted as pretty-printed JSON files
//! under one data directory:
//! - `pages.json` — the id -> page map,
//! - `site-settings.json` — the settings record,
//! - `reviews.json` — the review list.
//!
//! Loads never fail: a missing, unreadable, or corrupt file degrades to the
//! built-in default content so the public site always has something to
//! render. Saves are whole-file overwrites and propagate IO errors to the
//! caller unmodified.
//!
//! There is no locking and no change detection. Two concurrent
//! read-modify-write cycles against the same document race, and the last
//! write wins in full. The admin panel is operated by a single editor, so
//! this limitation is accepted rather than papered over.

pub mod error;

pub use error::{StoreError, StoreResult};

use clinicms_content::{defaults, PageMap, Review, SiteSettings};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// File name of the page collection document.
pub const PAGES_FILE: &str = "pages.json";
/// File name of the site settings document.
pub const SETTINGS_FILE: &str = "site-settings.json";
/// File name of the review collection document.
pub const REVIEWS_FILE: &str = "reviews.json";

/// File-backed store for the three content documents.
#[derive(Debug, Clone)]
pub struct ContentStore {
    data_dir: PathBuf,
}

impl ContentStore {
    /// Create a store rooted at the given data directory.
    ///
    /// Nothing is created until the first operation runs.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory the documents live in.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory (and any missing parents) if absent.
    ///
    /// Idempotent; safe to call before every operation.
    pub async fn ensure_data_dir(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }

    /// Load the page collection, falling back to the default pages on any
    /// failure. Sections are normalized (sorted by `order`) on the way out.
    pub async fn load_pages(&self) -> PageMap {
        let mut pages: PageMap = self.read_or_default(PAGES_FILE, defaults::default_pages).await;
        for page in pages.values_mut() {
            page.normalize();
        }
        pages
    }

    /// Persist the full page collection, replacing the file contents.
    pub async fn save_pages(&self, pages: &PageMap) -> StoreResult<()> {
        self.write_document(PAGES_FILE, pages).await
    }

    /// Load the site settings, falling back to the defaults on any failure.
    /// Unconfigured button roles are filled in on the way out.
    pub async fn load_settings(&self) -> SiteSettings {
        let mut settings: SiteSettings = self
            .read_or_default(SETTINGS_FILE, SiteSettings::default)
            .await;
        settings.normalize();
        settings
    }

    /// Persist the site settings, replacing the file contents.
    pub async fn save_settings(&self, settings: &SiteSettings) -> StoreResult<()> {
        self.write_document(SETTINGS_FILE, settings).await
    }

    /// Load the review list. Unlike pages and settings there is no seed
    /// content; any failure yields an empty list.
    pub async fn load_reviews(&self) -> Vec<Review> {
        self.read_or_default(REVIEWS_FILE, Vec::new).await
    }

    /// Persist the full review list, replacing the file contents.
    pub async fn save_reviews(&self, reviews: &[Review]) -> StoreResult<()> {
        self.write_document(REVIEWS_FILE, reviews).await
    }

    /// Read and parse a document, degrading to `default` on any failure.
    ///
    /// A missing file is the normal first-run case and is not logged as a
    /// problem; everything else gets a warning. The file is never created
    /// here, only `save` does that.
    async fn read_or_default<T, F>(&self, file: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.read_document(file).await {
            Ok(value) => value,
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(file, "document not found, using default content");
                default()
            }
            Err(err) => {
                warn!(file, error = %err, "failed to load document, using default content");
                default()
            }
        }
    }

    async fn read_document<T: DeserializeOwned>(&self, file: &str) -> StoreResult<T> {
        self.ensure_data_dir().await?;
        let path = self.data_dir.join(file);
        debug!(path = %path.display(), "reading document");

        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_document<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> StoreResult<()> {
        self.ensure_data_dir().await?;
        let path = self.data_dir.join(file);
        debug!(path = %path.display(), "writing document");

        // Plain overwrite, no temp-file rename. A crash mid-write can leave
        // a truncated file; the next load then falls back to defaults.
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinicms_content::{ButtonRole, Page};
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn page(id: &str, slug: &str, published: bool) -> Page {
        Page {
            id: id.to_string(),
            slug: slug.to_string(),
            title: slug.to_string(),
            is_published: published,
            ..Page::default()
        }
    }

    fn review(id: &str, name: &str) -> Review {
        Review {
            id: id.to_string(),
            name: name.to_string(),
            rating: 5,
            ..Review::default()
        }
    }

    #[tokio::test]
    async fn ensure_data_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        store.ensure_data_dir().await.unwrap();
        store.ensure_data_dir().await.unwrap();
        store.ensure_data_dir().await.unwrap();

        assert!(dir.path().join("data").is_dir());
    }

    #[tokio::test]
    async fn fresh_directory_loads_default_pages() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        let pages = store.load_pages().await;

        let keys: Vec<&String> = pages.keys().collect();
        assert_eq!(keys, vec!["1", "2", "3", "4"]);
        assert_eq!(pages["1"].slug, "dental-implants");
        assert_eq!(pages["2"].slug, "about-us");
        assert_eq!(pages["3"].slug, "all-on-four");
        assert_eq!(pages["4"].slug, "veneers");
        assert!(pages.values().all(|p| p.is_published));
    }

    #[tokio::test]
    async fn load_does_not_create_the_file() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        let _ = store.load_pages().await;
        let _ = store.load_settings().await;
        let _ = store.load_reviews().await;

        assert!(!dir.path().join("data").join(PAGES_FILE).exists());
        assert!(!dir.path().join("data").join(SETTINGS_FILE).exists());
        assert!(!dir.path().join("data").join(REVIEWS_FILE).exists());
    }

    #[tokio::test]
    async fn corrupt_pages_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join(PAGES_FILE), "{ not valid json").unwrap();

        let store = ContentStore::new(&data);
        let pages = store.load_pages().await;

        assert_eq!(pages.len(), 4);
        assert_eq!(pages["1"].slug, "dental-implants");
    }

    #[tokio::test]
    async fn corrupt_reviews_file_falls_back_to_empty_list() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join(REVIEWS_FILE), "[[[").unwrap();

        let store = ContentStore::new(&data);
        assert!(store.load_reviews().await.is_empty());
    }

    #[tokio::test]
    async fn pages_round_trip() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        let mut pages = BTreeMap::new();
        pages.insert("7".to_string(), page("7", "crowns", true));
        pages.insert("8".to_string(), page("8", "whitening", false));

        store.save_pages(&pages).await.unwrap();
        let loaded = store.load_pages().await;

        assert_eq!(loaded, pages);
    }

    #[tokio::test]
    async fn reviews_round_trip() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        let reviews = vec![review("rev_1", "Sarah"), review("rev_2", "James")];
        store.save_reviews(&reviews).await.unwrap();

        assert_eq!(store.load_reviews().await, reviews);
    }

    #[tokio::test]
    async fn settings_round_trip_keeps_overrides() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        let mut settings = SiteSettings::default();
        settings
            .buttons
            .get_mut(&ButtonRole::Hero)
            .unwrap()
            .text = "Start Your Journey".to_string();

        store.save_settings(&settings).await.unwrap();
        let loaded = store.load_settings().await;

        assert_eq!(loaded, settings);
        assert_eq!(loaded.buttons[&ButtonRole::Hero].text, "Start Your Journey");
    }

    #[tokio::test]
    async fn partial_settings_file_is_normalized_on_load() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(
            data.join(SETTINGS_FILE),
            r#"{"buttons":{"contact":{"text":"Call","url":"tel:+1","openInNewTab":false,"enabled":true}}}"#,
        )
        .unwrap();

        let store = ContentStore::new(&data);
        let settings = store.load_settings().await;

        assert_eq!(settings.buttons.len(), 3);
        assert_eq!(settings.buttons[&ButtonRole::Contact].text, "Call");
        assert_eq!(
            settings.buttons[&ButtonRole::Whatsapp],
            ButtonRole::Whatsapp.default_config()
        );
    }

    #[tokio::test]
    async fn save_replaces_the_whole_document() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        let mut first = BTreeMap::new();
        first.insert("1".to_string(), page("1", "old-page", true));
        first.insert("2".to_string(), page("2", "gone-after-save", true));
        store.save_pages(&first).await.unwrap();

        let mut second = BTreeMap::new();
        second.insert("1".to_string(), page("1", "new-page", true));
        store.save_pages(&second).await.unwrap();

        let loaded = store.load_pages().await;
        assert_eq!(loaded, second);
        assert!(!loaded.contains_key("2"));
    }

    #[tokio::test]
    async fn save_empty_reviews_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        store
            .save_reviews(&[review("rev_1", "Sarah")])
            .await
            .unwrap();
        store.save_reviews(&[]).await.unwrap();

        assert_eq!(store.load_reviews().await, Vec::<Review>::new());
    }

    // Concurrent read-modify-write is last-writer-wins by design; this
    // pins the behavior so a future "fix" is a deliberate decision.
    #[tokio::test]
    async fn concurrent_edits_lose_the_first_write_silently() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        let mut base = BTreeMap::new();
        base.insert("1".to_string(), page("1", "original", true));
        store.save_pages(&base).await.unwrap();

        // Editors A and B both start from the same snapshot.
        let mut a = store.load_pages().await;
        let mut b = store.load_pages().await;

        a.insert("2".to_string(), page("2", "added-by-a", true));
        store.save_pages(&a).await.unwrap();

        b.get_mut("1").unwrap().title = "renamed by b".to_string();
        store.save_pages(&b).await.unwrap();

        let final_pages = store.load_pages().await;
        assert_eq!(final_pages["1"].title, "renamed by b");
        assert!(!final_pages.contains_key("2")); // A's page is gone, no error
    }

    #[tokio::test]
    async fn sections_are_sorted_by_order_on_load() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("data"));

        let mut p = page("1", "sorted", true);
        p.sections = vec![
            clinicms_content::Section {
                id: "b".to_string(),
                order: 2,
                ..Default::default()
            },
            clinicms_content::Section {
                id: "a".to_string(),
                order: 1,
                ..Default::default()
            },
        ];
        let mut pages = BTreeMap::new();
        pages.insert("1".to_string(), p);
        store.save_pages(&pages).await.unwrap();

        let loaded = store.load_pages().await;
        let ids: Vec<&str> = loaded["1"].sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn saved_files_are_pretty_printed_json() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        let store = ContentStore::new(&data);

        store.save_reviews(&[review("rev_1", "Sarah")]).await.unwrap();

        let raw = std::fs::read_to_string(data.join(REVIEWS_FILE)).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("  \"id\""));
    }
}
