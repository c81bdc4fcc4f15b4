mod backend;
mod update;

use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc;

use dailypaper_core::Session;
use dailypaper_core::config_file::ConfigFile;

use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Which screen is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail(usize), // index into the visible list
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Main application state.
pub struct App {
    pub session: Session,
    pub screen: Screen,
    pub input_mode: InputMode,

    /// Selected row in the visible list.
    pub cursor: usize,
    /// First row drawn in the list; kept so mouse clicks map back to rows.
    pub list_offset: usize,
    pub detail_scroll: u16,
    /// Query to restore if the user backs out of search.
    pub search_backup: String,

    /// Cursor in the date picker popup, `None` when closed.
    pub date_picker: Option<usize>,
    pub show_help: bool,

    pub theme: Theme,
    pub theme_name: String,
    pub config: ConfigFile,
    /// One-line message shown in the footer (e.g. "config saved").
    pub status: Option<String>,

    pub tick: usize,
    pub visible_rows: usize,
    pub last_list_area: Option<Rect>,
    pub should_quit: bool,

    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
}

impl App {
    pub fn new(theme_name: &str, config: ConfigFile) -> Self {
        Self {
            session: Session::new(),
            screen: Screen::List,
            input_mode: InputMode::Normal,
            cursor: 0,
            list_offset: 0,
            detail_scroll: 0,
            search_backup: String::new(),
            date_picker: None,
            show_help: false,
            theme: Theme::by_name(theme_name),
            theme_name: theme_name.to_string(),
            config,
            status: None,
            tick: 0,
            visible_rows: 20,
            last_list_area: None,
            should_quit: false,
            backend_cmd_tx: None,
        }
    }

    /// Number of papers passing the current filters.
    pub fn visible_len(&self) -> usize {
        self.session.visible().len()
    }

    /// Keep the cursor inside the visible list after it shrinks.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        if let Screen::Detail(i) = self.screen
            && i >= len
        {
            self.screen = Screen::List;
        }
    }

    /// Render the full UI.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        let has_search = self.input_mode == InputMode::Search
            || !self.session.filter().search_query.is_empty();
        let mut constraints = vec![
            Constraint::Length(1), // header
            Constraint::Length(1), // category + flag bar
        ];
        if has_search {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(3));
        constraints.push(Constraint::Length(1)); // footer

        let chunks = Layout::vertical(constraints).split(area);
        let mut idx = 0;

        crate::view::render_header(f, chunks[idx], self);
        idx += 1;
        crate::view::render_filter_bar(f, chunks[idx], self);
        idx += 1;
        if has_search {
            crate::view::render_search_bar(f, chunks[idx], self);
            idx += 1;
        }
        let main_area = chunks[idx];
        let footer_area = chunks[idx + 1];

        match self.screen {
            Screen::List => crate::view::list::render_in(f, self, main_area),
            Screen::Detail(i) => crate::view::detail::render_in(f, self, i, main_area),
        }
        crate::view::render_footer(f, footer_area, self);

        if self.date_picker.is_some() {
            crate::view::date_picker::render(f, self);
        }
        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
