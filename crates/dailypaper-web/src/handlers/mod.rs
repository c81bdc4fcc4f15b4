pub mod api;
pub mod index;

use axum::http::StatusCode;
use dailypaper_core::{LoadError, Loader, Session};

/// Status a failed load maps to.
pub fn error_status(err: &LoadError) -> StatusCode {
    match err {
        LoadError::InvalidDate(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Fetch the date index into `session`. On failure the session is in its
/// error state and the status to report is returned.
pub async fn load_dates(loader: &Loader, session: &mut Session) -> Option<StatusCode> {
    match loader.fetch_dates().await {
        Ok(dates) => {
            session.set_dates(dates);
            None
        }
        Err(err) => {
            let status = error_status(&err);
            session.fail_dates(&err);
            Some(status)
        }
    }
}

/// Fetch one date's papers into `session`.
pub async fn load_papers(loader: &Loader, session: &mut Session, date: &str) -> Option<StatusCode> {
    let ticket = session.begin_load(date);
    let result = loader.fetch_papers(date).await;
    let status = result.as_ref().err().map(error_status);
    session.complete_load(&ticket, result);
    status
}
