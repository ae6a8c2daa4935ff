//! HTTP routes for the content API.
//!
//! Public endpoints are read-only and filter publish state themselves; the
//! store hands back everything it has. Admin endpoints mutate by loading a
//! whole document, editing it in memory, and saving it back — there is no
//! partial update below this layer, and concurrent edits are
//! last-writer-wins.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{delete, get, post, put},
    Router,
};
use chrono::Utc;
use clinicms_content::{Page, Review, SiteSettings};
use clinicms_util::Identifier;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

/// Free-text attribution header set by the admin UI.
///
/// This is NOT authentication: the value is recorded as `updatedBy` and
/// never checked against any credential store.
pub const ADMIN_USER_HEADER: &str = "x-admin-user";

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        // ===================
        // Public endpoints
        // ===================
        .route("/api/pages", get(public_pages))
        .route("/api/pages/{slug}", get(public_page))
        .route("/api/settings", get(public_settings))
        .route("/api/reviews", get(public_reviews))
        // ===================
        // Admin endpoints
        // ===================
        .route("/api/admin/pages", get(admin_page_list))
        .route("/api/admin/pages/{id}", get(admin_page_get))
        .route("/api/admin/pages/{id}", put(admin_page_put))
        .route("/api/admin/pages/{id}", delete(admin_page_delete))
        .route("/api/admin/settings", get(admin_settings_get))
        .route("/api/admin/settings", put(admin_settings_put))
        .route("/api/admin/reviews", get(admin_review_list))
        .route("/api/admin/reviews", post(admin_review_create))
        .route("/api/admin/reviews/{id}", put(admin_review_update))
        .route("/api/admin/reviews/{id}", delete(admin_review_delete))
        .with_state(state)
        .layer(cors)
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
    code: String,
}

impl ApiError {
    fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    fn not_found(msg: impl Into<String>) -> (StatusCode, Json<Self>) {
        (StatusCode::NOT_FOUND, Json(Self::new(msg, "NOT_FOUND")))
    }

    fn internal(msg: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Self::new(msg, "INTERNAL_ERROR")),
        )
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Read the attribution header, defaulting when the admin UI omits it.
fn admin_user(headers: &HeaderMap) -> String {
    headers
        .get(ADMIN_USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("admin")
        .to_string()
}

// =============================================================================
// Global endpoints
// =============================================================================

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "healthy": true,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// =============================================================================
// Public endpoints
// =============================================================================

async fn public_pages(State(state): State<AppState>) -> impl IntoResponse {
    let pages = state.store.load_pages().await;
    let published: Vec<Page> = pages.into_values().filter(|p| p.is_published).collect();
    Json(published)
}

async fn public_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Page>> {
    let pages = state.store.load_pages().await;
    // Unknown slug and unpublished page are indistinguishable on purpose.
    let page = pages
        .into_values()
        .find(|p| p.slug == slug && p.is_published)
        .ok_or_else(|| ApiError::not_found(format!("No page at slug '{slug}'")))?;
    Ok(Json(page))
}

async fn public_settings(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.load_settings().await)
}

async fn public_reviews(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.load_reviews().await)
}

// =============================================================================
// Admin page endpoints
// =============================================================================

async fn admin_page_list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.load_pages().await)
}

async fn admin_page_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Page>> {
    let mut pages = state.store.load_pages().await;
    let page = pages
        .remove(&id)
        .ok_or_else(|| ApiError::not_found(format!("No page with id '{id}'")))?;
    Ok(Json(page))
}

async fn admin_page_put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(mut page): Json<Page>,
) -> ApiResult<Json<Page>> {
    let mut pages = state.store.load_pages().await;

    page.id = id.clone();
    page.last_updated = Utc::now().to_rfc3339();
    page.updated_by = admin_user(&headers);
    pages.insert(id, page.clone());

    if let Err(err) = state.store.save_pages(&pages).await {
        error!(error = %err, "failed to save pages");
        return Err(ApiError::internal("Failed to save page"));
    }
    Ok(Json(page))
}

async fn admin_page_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let mut pages = state.store.load_pages().await;
    if pages.remove(&id).is_none() {
        return Err(ApiError::not_found(format!("No page with id '{id}'")));
    }

    if let Err(err) = state.store.save_pages(&pages).await {
        error!(error = %err, "failed to save pages");
        return Err(ApiError::internal("Failed to delete page"));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

// =============================================================================
// Admin settings endpoints
// =============================================================================

async fn admin_settings_get(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.load_settings().await)
}

async fn admin_settings_put(
    State(state): State<AppState>,
    Json(mut settings): Json<SiteSettings>,
) -> ApiResult<Json<SiteSettings>> {
    // Persist a complete record so partially-filled payloads from older
    // admin UI builds do not strip button slots from the file.
    settings.normalize();

    if let Err(err) = state.store.save_settings(&settings).await {
        error!(error = %err, "failed to save settings");
        return Err(ApiError::internal("Failed to save settings"));
    }
    Ok(Json(settings))
}

// =============================================================================
// Admin review endpoints
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ReviewRequest {
    name: String,
    country: String,
    rating: i64,
    text: String,
    image: Option<String>,
    verified: bool,
    featured: bool,
}

impl Default for ReviewRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: String::new(),
            rating: 5,
            text: String::new(),
            image: None,
            verified: false,
            featured: false,
        }
    }
}

impl ReviewRequest {
    fn apply(self, review: &mut Review) {
        review.name = self.name;
        review.country = self.country;
        review.rating = self.rating;
        review.text = self.text;
        review.image = self.image;
        review.verified = self.verified;
        review.featured = self.featured;
    }
}

async fn admin_review_list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.load_reviews().await)
}

async fn admin_review_create(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let mut reviews = state.store.load_reviews().await;

    let now = Utc::now().to_rfc3339();
    let mut review = Review {
        id: Identifier::review(),
        created_at: now.clone(),
        updated_at: now,
        ..Review::default()
    };
    request.apply(&mut review);
    reviews.push(review.clone());

    if let Err(err) = state.store.save_reviews(&reviews).await {
        error!(error = %err, "failed to save reviews");
        return Err(ApiError::internal("Failed to save review"));
    }
    Ok((StatusCode::CREATED, Json(review)))
}

async fn admin_review_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReviewRequest>,
) -> ApiResult<Json<Review>> {
    let mut reviews = state.store.load_reviews().await;

    let review = reviews
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| ApiError::not_found(format!("No review with id '{id}'")))?;
    request.apply(review);
    review.updated_at = Utc::now().to_rfc3339();
    let updated = review.clone();

    if let Err(err) = state.store.save_reviews(&reviews).await {
        error!(error = %err, "failed to save reviews");
        return Err(ApiError::internal("Failed to save review"));
    }
    Ok(Json(updated))
}

async fn admin_review_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let mut reviews = state.store.load_reviews().await;

    let before = reviews.len();
    reviews.retain(|r| r.id != id);
    if reviews.len() == before {
        return Err(ApiError::not_found(format!("No review with id '{id}'")));
    }

    if let Err(err) = state.store.save_reviews(&reviews).await {
        error!(error = %err, "failed to save reviews");
        return Err(ApiError::internal("Failed to delete review"));
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
