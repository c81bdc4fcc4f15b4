use dailypaper_core::{DateList, LoadError, LoadTicket, PaperSet};

/// Commands sent from the TUI to the backend.
#[derive(Debug)]
pub enum BackendCommand {
    /// Fetch `available_dates.json`.
    LoadDates,
    /// Fetch the papers for the ticket's date, superseding any earlier load.
    LoadPapers { ticket: LoadTicket },
}

/// Events flowing from backend fetch tasks to the TUI.
#[derive(Debug)]
pub enum BackendEvent {
    DatesLoaded(Result<DateList, LoadError>),
    PapersLoaded {
        ticket: LoadTicket,
        result: Result<PaperSet, LoadError>,
    },
}
