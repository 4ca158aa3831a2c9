use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub access_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// POST /api/v1/session
///
/// Creates a builder session seeded with the sample résumé. When an access
/// code is configured the request must present it — a mismatch gets an
/// inline 401, no lockout or rate limiting. With no code configured the
/// builder is intentionally public.
pub async fn handle_create_session(
    State(state): State<AppState>,
    payload: Option<Json<CreateSessionRequest>>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let req = payload.map(|Json(r)| r).unwrap_or_default();

    if let Some(expected) = &state.config.access_code {
        if req.access_code.as_deref() != Some(expected.as_str()) {
            return Err(AppError::IncorrectAccessCode);
        }
    }

    Ok(Json(CreateSessionResponse {
        session_id: state.sessions.create(),
    }))
}
