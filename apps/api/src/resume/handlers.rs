//! Builder endpoints: the résumé record, the inline-edit protocol, version
//! history, fit analysis, and PDF export.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::{analyze_fit, paginate, PageFitReport};
use crate::models::resume::ResumeRecord;
use crate::render::{export_filename, resume_to_blocks};
use crate::resume::edit::{apply_edit, FieldPath, ResumeEdit};
use crate::resume::field::{FieldEditor, FieldEvent, FieldMode, FieldOutcome};
use crate::session::{ActiveEdit, VersionSummary};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session: Uuid,
}

#[derive(Serialize)]
pub struct ResumeView {
    pub record: ResumeRecord,
    pub version: usize,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<ResumeView>, AppError> {
    let view = state
        .sessions
        .with_session(params.session, |s| ResumeView {
            record: s.record().clone(),
            version: s.version(),
        })
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(view))
}

#[derive(Deserialize)]
pub struct EditRequest {
    pub session: Uuid,
    pub edit: ResumeEdit,
}

/// PATCH /api/v1/resume
///
/// The direct commit path: applies one edit, appends the new version, and
/// returns the replacement record.
pub async fn handle_edit_resume(
    State(state): State<AppState>,
    Json(req): Json<EditRequest>,
) -> Result<Json<ResumeView>, AppError> {
    let result = state
        .sessions
        .with_session(req.session, |s| {
            let next = apply_edit(s.record(), &req.edit)?;
            s.commit(next);
            Ok::<ResumeView, AppError>(ResumeView {
                record: s.record().clone(),
                version: s.version(),
            })
        })
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(result?))
}

/// GET /api/v1/resume/history
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<Vec<VersionSummary>>, AppError> {
    let history = state
        .sessions
        .with_session(params.session, |s| s.version_history())
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(history))
}

/// GET /api/v1/resume/versions/:v
pub async fn handle_get_version(
    State(state): State<AppState>,
    Path(version): Path<usize>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .sessions
        .with_session(params.session, |s| s.at_version(version).cloned())
        .ok_or(AppError::SessionNotFound)?
        .ok_or_else(|| AppError::NotFound(format!("No version {version}")))?;
    Ok(Json(record))
}

// ────────────────────────────────────────────────────────────────────────────
// Inline-edit protocol
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BeginEditRequest {
    pub session: Uuid,
    pub path: FieldPath,
}

#[derive(Serialize)]
pub struct EditorView {
    pub path: FieldPath,
    pub mode: FieldMode,
    pub draft: String,
    pub editing: bool,
}

/// POST /api/v1/resume/edit/begin
///
/// Starts editing a field. If another field is mid-edit its draft is
/// blur-committed first — focusing a new field blurs the old one.
pub async fn handle_begin_edit(
    State(state): State<AppState>,
    Json(req): Json<BeginEditRequest>,
) -> Result<Json<EditorView>, AppError> {
    let result = state
        .sessions
        .with_session(req.session, |s| {
            if let Some(mut active) = s.active_edit.take() {
                if let FieldOutcome::Committed(value) = active.editor.force_blur() {
                    let next = apply_edit(
                        s.record(),
                        &ResumeEdit::SetField {
                            path: active.path.clone(),
                            value,
                        },
                    )?;
                    s.commit(next);
                }
            }

            let mut editor = FieldEditor::new(req.path.read(s.record())?, req.path.mode());
            editor.handle(FieldEvent::Click);
            let view = EditorView {
                path: req.path.clone(),
                mode: editor.mode(),
                draft: editor.draft().to_string(),
                editing: editor.is_editing(),
            };
            s.active_edit = Some(ActiveEdit {
                path: req.path.clone(),
                editor,
            });
            Ok::<EditorView, AppError>(view)
        })
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(result?))
}

#[derive(Deserialize)]
pub struct EditEventRequest {
    pub session: Uuid,
    pub event: FieldEvent,
}

#[derive(Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditEventResponse {
    /// Still editing; the current draft is echoed back.
    Editing { draft: String },
    /// The edit committed and produced a new record version.
    Committed { record: ResumeRecord, version: usize },
    /// The edit was abandoned (Escape); the record is unchanged.
    Reverted,
    /// No edit in flight, or the event had no effect.
    Ignored,
}

/// POST /api/v1/resume/edit/event
pub async fn handle_edit_event(
    State(state): State<AppState>,
    Json(req): Json<EditEventRequest>,
) -> Result<Json<EditEventResponse>, AppError> {
    let result = state
        .sessions
        .with_session(req.session, |s| {
            let Some(mut active) = s.active_edit.take() else {
                return Ok(EditEventResponse::Ignored);
            };

            match active.editor.handle(req.event.clone()) {
                FieldOutcome::Editing => {
                    let draft = active.editor.draft().to_string();
                    s.active_edit = Some(active);
                    Ok(EditEventResponse::Editing { draft })
                }
                FieldOutcome::Committed(value) => {
                    let next = apply_edit(
                        s.record(),
                        &ResumeEdit::SetField {
                            path: active.path,
                            value,
                        },
                    )?;
                    s.commit(next);
                    Ok::<EditEventResponse, AppError>(EditEventResponse::Committed {
                        record: s.record().clone(),
                        version: s.version(),
                    })
                }
                FieldOutcome::Reverted => Ok(EditEventResponse::Reverted),
                FieldOutcome::Ignored => {
                    s.active_edit = Some(active);
                    Ok(EditEventResponse::Ignored)
                }
            }
        })
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(result?))
}

// ────────────────────────────────────────────────────────────────────────────
// Fit + export
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume/fit
///
/// Lays the current record out against the sheet and reports whether it
/// still fits the single printed page.
pub async fn handle_fit(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<PageFitReport>, AppError> {
    let record = state
        .sessions
        .with_session(params.session, |s| s.record().clone())
        .ok_or(AppError::SessionNotFound)?;
    let doc = paginate(&resume_to_blocks(&record, &state.sheet), &state.sheet);
    Ok(Json(analyze_fit(&doc, &state.sheet)))
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub session: Uuid,
    /// Optional override for the download name; defaults to the contact's
    /// full name.
    pub filename: Option<String>,
}

/// POST /api/v1/resume/export
///
/// Renders the current record to PDF and returns it as a download. Failures
/// surface as RENDER_ERROR responses — the caller always learns the outcome.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .sessions
        .with_session(req.session, |s| s.record().clone())
        .ok_or(AppError::SessionNotFound)?;

    let doc = paginate(&resume_to_blocks(&record, &state.sheet), &state.sheet);
    let bytes = state
        .renderer
        .render(doc, state.sheet.clone())
        .await
        .map_err(|e| AppError::Render(e.to_string()))?;

    let stem = req
        .filename
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| record.contact.full_name.clone());
    let filename = export_filename(&stem);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("bad filename header: {e}")))?,
    );
    Ok((headers, bytes))
}
