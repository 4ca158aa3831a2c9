//! Reader endpoints: open/next/prev/close over a session's per-book state.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::book::{Book, BookReader, PageView};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReaderRequest {
    pub session: Uuid,
}

#[derive(Serialize)]
pub struct ReaderView {
    pub slug: String,
    pub index: usize,
    pub open: bool,
    pub page_count: usize,
    pub page: PageView,
}

fn reader_view(book: &Book, reader: &BookReader) -> Result<ReaderView, AppError> {
    let page = book
        .page_view(reader.index())
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("reader index out of range")))?;
    Ok(ReaderView {
        slug: book.slug.clone(),
        index: reader.index(),
        open: reader.is_open(),
        page_count: book.page_count(),
        page,
    })
}

fn with_reader(
    state: &AppState,
    slug: &str,
    session: Uuid,
    apply: impl FnOnce(&Book, &mut BookReader),
) -> Result<ReaderView, AppError> {
    let book = state
        .site
        .book(slug)
        .ok_or_else(|| AppError::NotFound(format!("No book '{slug}'")))?;
    state
        .sessions
        .with_session(session, |s| {
            let reader = s.reader_mut(slug);
            apply(book, reader);
            reader_view(book, reader)
        })
        .ok_or(AppError::SessionNotFound)?
}

/// POST /api/v1/blogs/:slug/reader/open
pub async fn handle_open(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<ReaderRequest>,
) -> Result<Json<ReaderView>, AppError> {
    Ok(Json(with_reader(&state, &slug, req.session, |_, reader| {
        reader.open();
    })?))
}

/// POST /api/v1/blogs/:slug/reader/next
pub async fn handle_next(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<ReaderRequest>,
) -> Result<Json<ReaderView>, AppError> {
    Ok(Json(with_reader(&state, &slug, req.session, |book, reader| {
        reader.next(book.page_count());
    })?))
}

/// POST /api/v1/blogs/:slug/reader/prev
pub async fn handle_prev(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<ReaderRequest>,
) -> Result<Json<ReaderView>, AppError> {
    Ok(Json(with_reader(&state, &slug, req.session, |_, reader| {
        reader.prev();
    })?))
}

/// POST /api/v1/blogs/:slug/reader/close
pub async fn handle_close(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<ReaderRequest>,
) -> Result<Json<ReaderView>, AppError> {
    Ok(Json(with_reader(&state, &slug, req.session, |_, reader| {
        reader.close();
    })?))
}
