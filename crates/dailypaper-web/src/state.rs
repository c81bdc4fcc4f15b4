use dailypaper_core::Loader;
use minijinja::Environment;

/// Shared application state accessible from all handlers.
///
/// Nothing loaded is kept here: every request fetches the files again.
pub struct AppState {
    pub loader: Loader,
    pub templates: Environment<'static>,
}
