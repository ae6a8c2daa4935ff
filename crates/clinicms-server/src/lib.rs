//! HTTP API for clinicms.
//!
//! Public routes serve published marketing content; admin routes perform
//! CRUD over the three content documents via whole-document load and save.

pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
