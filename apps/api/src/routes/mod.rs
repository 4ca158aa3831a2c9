pub mod health;
pub mod session;

use axum::{
    routing::{get, post},
    Router,
};

use crate::book::handlers as book_handlers;
use crate::content::handlers as content_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/session", post(session::handle_create_session))
        // Site content
        .route("/api/v1/site", get(content_handlers::handle_get_site))
        .route(
            "/api/v1/site/sections/:id",
            get(content_handlers::handle_get_section),
        )
        .route("/api/v1/blogs", get(content_handlers::handle_list_blogs))
        .route("/api/v1/blogs/:slug", get(content_handlers::handle_get_blog))
        // Storybook reader
        .route(
            "/api/v1/blogs/:slug/reader/open",
            post(book_handlers::handle_open),
        )
        .route(
            "/api/v1/blogs/:slug/reader/next",
            post(book_handlers::handle_next),
        )
        .route(
            "/api/v1/blogs/:slug/reader/prev",
            post(book_handlers::handle_prev),
        )
        .route(
            "/api/v1/blogs/:slug/reader/close",
            post(book_handlers::handle_close),
        )
        // Résumé builder
        .route(
            "/api/v1/resume",
            get(resume_handlers::handle_get_resume).patch(resume_handlers::handle_edit_resume),
        )
        .route(
            "/api/v1/resume/history",
            get(resume_handlers::handle_history),
        )
        .route(
            "/api/v1/resume/versions/:v",
            get(resume_handlers::handle_get_version),
        )
        .route(
            "/api/v1/resume/edit/begin",
            post(resume_handlers::handle_begin_edit),
        )
        .route(
            "/api/v1/resume/edit/event",
            post(resume_handlers::handle_edit_event),
        )
        .route("/api/v1/resume/fit", get(resume_handlers::handle_fit))
        .route("/api/v1/resume/export", post(resume_handlers::handle_export))
        // Navigation view-model
        .route("/api/v1/nav/spy", post(content_handlers::handle_nav_spy))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
