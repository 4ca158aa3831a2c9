//! Read-only site endpoints plus the navigation-shell view-model.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::book::Book;
use crate::content::TravelBlogCard;
use crate::errors::AppError;
use crate::nav::{active_section, is_scrolled, scroll_target, NavVisibility, SectionExtent};
use crate::state::AppState;

/// GET /api/v1/site
pub async fn handle_get_site(State(state): State<AppState>) -> Json<crate::content::SiteContent> {
    Json((*state.site).clone())
}

/// GET /api/v1/site/sections/:id
///
/// One in-page section's payload, addressed by its anchor id.
pub async fn handle_get_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let site = &state.site;
    let value = match id.as_str() {
        "home" => to_value(&site.hero)?,
        "about" => to_value(&site.about)?,
        "experience" => to_value(&site.experience)?,
        "skills" => to_value(&site.skill_groups)?,
        "education" => serde_json::json!({
            "education": to_value(&site.education)?,
            "certifications": to_value(&site.certifications)?,
        }),
        "contact" => to_value(&site.contact)?,
        _ => return Err(AppError::NotFound(format!("No section '{id}'"))),
    };
    Ok(Json(value))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(anyhow::anyhow!(e)))
}

/// GET /api/v1/blogs
pub async fn handle_list_blogs(State(state): State<AppState>) -> Json<Vec<TravelBlogCard>> {
    Json(state.site.blogs.clone())
}

#[derive(Serialize)]
pub struct BlogDetail {
    pub card: TravelBlogCard,
    /// Present when the card opens a storybook.
    pub book: Option<Book>,
}

/// GET /api/v1/blogs/:slug
pub async fn handle_get_blog(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogDetail>, AppError> {
    let card = state
        .site
        .blog(&slug)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No blog '{slug}'")))?;
    Ok(Json(BlogDetail {
        card,
        book: state.site.book(&slug).cloned(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Navigation view-model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct NavSpyRequest {
    pub scroll_y: f32,
    /// The previous scroll offset, for the show/hide direction comparison.
    pub previous_y: Option<f32>,
    /// Registered section extents in DOM order.
    pub sections: Vec<SectionExtent>,
    /// When set, the response includes the scroll target for this section.
    pub target_id: Option<String>,
}

#[derive(Serialize)]
pub struct NavSpyResponse {
    pub active: Option<String>,
    pub bar_visible: bool,
    pub scrolled: bool,
    pub scroll_to: Option<f32>,
}

/// POST /api/v1/nav/spy
///
/// Evaluates the scroll-spy for a client-reported geometry snapshot.
pub async fn handle_nav_spy(Json(req): Json<NavSpyRequest>) -> Json<NavSpyResponse> {
    let active = active_section(&req.sections, req.scroll_y).map(str::to_string);

    let mut visibility = NavVisibility::new();
    if let Some(previous) = req.previous_y {
        visibility.observe(previous);
    }
    let bar_visible = visibility.observe(req.scroll_y);

    let scroll_to = req.target_id.as_deref().and_then(|target| {
        req.sections
            .iter()
            .find(|s| s.id == target)
            .map(|s| scroll_target(s.top))
    });

    Json(NavSpyResponse {
        active,
        bar_visible,
        scrolled: is_scrolled(req.scroll_y),
        scroll_to,
    })
}
