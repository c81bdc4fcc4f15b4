use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use dailypaper_core::Session;

use super::{load_dates, load_papers};
use crate::models::FeedParams;
use crate::state::AppState;
use crate::template;

/// `GET /`: the feed page. Load failures are shown in the page itself.
pub async fn index(State(state): State<Arc<AppState>>, Query(params): Query<FeedParams>) -> Response {
    let mut session = Session::new();

    if load_dates(&state.loader, &mut session).await.is_none() {
        let date = params
            .date()
            .map(str::to_string)
            .or_else(|| session.dates().default_date().map(str::to_string));
        if let Some(date) = date {
            load_papers(&state.loader, &mut session, &date).await;
            params.apply(&mut session);
        }
    }

    match template::render_index(&state.templates, &session) {
        Ok(html) => html.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err).into_response()
        }
    }
}
