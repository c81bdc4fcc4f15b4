use std::sync::Arc;

use dailypaper_core::Loader;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Serve fetch commands until the command channel closes.
///
/// Each fetch runs as its own task so the listener keeps accepting
/// commands. A new `LoadPapers` cancels the previous paper fetch; whatever
/// still slips through is rejected by the session's ticket check.
pub async fn run_listener(
    loader: Arc<Loader>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
) {
    let mut papers_cancel = CancellationToken::new();

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::LoadDates => {
                let loader = loader.clone();
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    let result = loader.fetch_dates().await;
                    let _ = tx.send(BackendEvent::DatesLoaded(result));
                });
            }
            BackendCommand::LoadPapers { ticket } => {
                papers_cancel.cancel();
                papers_cancel = CancellationToken::new();

                let cancel = papers_cancel.clone();
                let loader = loader.clone();
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            tracing::debug!(date = %ticket.date, "paper load superseded");
                        }
                        result = loader.fetch_papers(&ticket.date) => {
                            let _ = tx.send(BackendEvent::PapersLoaded { ticket, result });
                        }
                    }
                });
            }
        }
    }
}
