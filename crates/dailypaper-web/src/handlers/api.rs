use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};

use dailypaper_core::{LoadPhase, Session};

use super::{error_status, load_papers};
use crate::models::{ErrorResponse, FeedParams, PapersResponse};
use crate::state::AppState;

/// `GET /api/dates`: the available dates, default first.
pub async fn dates(State(state): State<Arc<AppState>>) -> Response {
    match state.loader.fetch_dates().await {
        Ok(dates) => Json(dates.as_slice()).into_response(),
        Err(err) => (
            error_status(&err),
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}

/// `GET /api/papers/{date}`: the filtered cards for one date.
pub async fn papers(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    Query(params): Query<FeedParams>,
) -> Response {
    let mut session = Session::new();
    if let Some(status) = load_papers(&state.loader, &mut session, &date).await {
        let error = match session.phase() {
            LoadPhase::Failed { message } => message.clone(),
            _ => status.to_string(),
        };
        return (status, Json(ErrorResponse { error })).into_response();
    }

    params.apply(&mut session);
    Json(PapersResponse::from_session(&date, &session)).into_response()
}
