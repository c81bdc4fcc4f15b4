use dailypaper_core::config_file;

use super::{App, InputMode, Screen};
use crate::action::Action;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                return false;
            }
            Action::Resize(_w, h) => {
                // header, filter bar, footer, table borders and header row
                self.visible_rows = (h as usize).saturating_sub(6);
                return false;
            }
            _ => {}
        }

        // Help overlay swallows everything but its own dismissal
        if self.show_help {
            if matches!(action, Action::ToggleHelp | Action::NavigateBack) {
                self.show_help = false;
            }
            return false;
        }

        if let Some(pos) = self.date_picker {
            self.update_date_picker(action, pos);
            return false;
        }

        if self.input_mode == InputMode::Search {
            self.update_search(action);
            return false;
        }

        match action {
            Action::MoveDown => match self.screen {
                Screen::List => self.move_cursor(1),
                Screen::Detail(_) => self.detail_scroll = self.detail_scroll.saturating_add(1),
            },
            Action::MoveUp => match self.screen {
                Screen::List => self.move_cursor(-1),
                Screen::Detail(_) => self.detail_scroll = self.detail_scroll.saturating_sub(1),
            },
            Action::PageDown => match self.screen {
                Screen::List => self.move_cursor(self.visible_rows.max(1) as isize),
                Screen::Detail(_) => self.detail_scroll = self.detail_scroll.saturating_add(10),
            },
            Action::PageUp => match self.screen {
                Screen::List => self.move_cursor(-(self.visible_rows.max(1) as isize)),
                Screen::Detail(_) => self.detail_scroll = self.detail_scroll.saturating_sub(10),
            },
            Action::GoTop => match self.screen {
                Screen::List => self.cursor = 0,
                Screen::Detail(_) => self.detail_scroll = 0,
            },
            Action::GoBottom => {
                if self.screen == Screen::List {
                    self.cursor = self.visible_len().saturating_sub(1);
                }
            }
            Action::DrillIn => {
                if self.screen == Screen::List && self.cursor < self.visible_len() {
                    self.screen = Screen::Detail(self.cursor);
                    self.detail_scroll = 0;
                }
            }
            Action::NavigateBack => match self.screen {
                Screen::Detail(_) => self.screen = Screen::List,
                Screen::List => {
                    if !self.session.filter().search_query.is_empty() {
                        self.session.set_search_query("");
                        self.clamp_cursor();
                    }
                }
            },
            Action::StartSearch => {
                self.screen = Screen::List;
                self.search_backup = self.session.filter().search_query.clone();
                self.input_mode = InputMode::Search;
            }
            // Detail(i) indexes the filtered list, so refiltering leaves it.
            Action::ToggleAiOnly
            | Action::TogglePerturbationOnly
            | Action::NextCategory
            | Action::PrevCategory
                if self.screen != Screen::List =>
            {
                self.screen = Screen::List;
                self.update(action);
            }
            Action::ToggleAiOnly => {
                let on = !self.session.filter().ai_only;
                self.session.set_ai_only(on);
                self.clamp_cursor();
            }
            Action::TogglePerturbationOnly => {
                let on = !self.session.filter().perturbation_only;
                self.session.set_perturbation_only(on);
                self.clamp_cursor();
            }
            Action::NextCategory | Action::PrevCategory => {
                self.session.cycle_category(action == Action::NextCategory);
                self.cursor = 0;
                self.clamp_cursor();
            }
            Action::OpenDatePicker => {
                if !self.session.dates().is_empty() {
                    let pos = self
                        .session
                        .selected_date()
                        .and_then(|d| self.session.dates().position(d))
                        .unwrap_or(0);
                    self.date_picker = Some(pos);
                }
            }
            Action::NextDate => self.step_date(1),
            Action::PrevDate => self.step_date(-1),
            Action::Reload => match self.session.selected_date().map(str::to_string) {
                Some(date) => self.start_load(&date),
                None => self.send(BackendCommand::LoadDates),
            },
            Action::CycleTheme => {
                let next = if self.theme_name == "modern" {
                    "hacker"
                } else {
                    "modern"
                };
                self.theme = Theme::by_name(next);
                self.theme_name = next.to_string();
            }
            Action::SaveConfig => self.save_config(),
            Action::ToggleHelp => self.show_help = true,
            Action::ClickAt(x, y) => self.click_at(x, y),
            _ => {}
        }
        false
    }

    /// Begin loading `date` and hand the ticket to the backend.
    pub fn start_load(&mut self, date: &str) {
        let ticket = self.session.begin_load(date);
        self.screen = Screen::List;
        self.cursor = 0;
        self.list_offset = 0;
        self.send(BackendCommand::LoadPapers { ticket });
    }

    fn send(&self, cmd: BackendCommand) {
        if let Some(tx) = &self.backend_cmd_tx
            && tx.send(cmd).is_err()
        {
            tracing::error!("backend listener has stopped");
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    fn step_date(&mut self, delta: isize) {
        let dates = self.session.dates();
        if dates.is_empty() {
            return;
        }
        let current = self
            .session
            .selected_date()
            .and_then(|d| dates.position(d));
        let next = match current {
            Some(i) => i as isize + delta,
            None => 0,
        };
        if next < 0 || next >= dates.len() as isize {
            return;
        }
        if let Some(date) = dates.get(next as usize).map(str::to_string) {
            self.start_load(&date);
        }
    }

    fn update_date_picker(&mut self, action: Action, pos: usize) {
        let len = self.session.dates().len();
        match action {
            Action::MoveDown => self.date_picker = Some((pos + 1).min(len.saturating_sub(1))),
            Action::MoveUp => self.date_picker = Some(pos.saturating_sub(1)),
            Action::GoTop => self.date_picker = Some(0),
            Action::GoBottom => self.date_picker = Some(len.saturating_sub(1)),
            Action::DrillIn => {
                self.date_picker = None;
                if let Some(date) = self.session.dates().get(pos).map(str::to_string) {
                    self.start_load(&date);
                }
            }
            Action::NavigateBack | Action::OpenDatePicker => self.date_picker = None,
            _ => {}
        }
    }

    fn update_search(&mut self, action: Action) {
        match action {
            Action::SearchInput('\x08') => {
                let mut query = self.session.filter().search_query.clone();
                query.pop();
                self.session.set_search_query(&query);
            }
            Action::SearchInput(ch) => {
                let mut query = self.session.filter().search_query.clone();
                query.push(ch);
                self.session.set_search_query(&query);
            }
            Action::SearchConfirm => {
                self.input_mode = InputMode::Normal;
            }
            Action::SearchCancel => {
                let backup = std::mem::take(&mut self.search_backup);
                self.session.set_search_query(&backup);
                self.input_mode = InputMode::Normal;
            }
            _ => return,
        }
        self.cursor = 0;
        self.clamp_cursor();
    }

    fn click_at(&mut self, x: u16, y: u16) {
        let Some(area) = self.last_list_area else {
            return;
        };
        if self.screen != Screen::List
            || x < area.x
            || x >= area.x + area.width
            || y < area.y
            || y >= area.y + area.height
        {
            return;
        }
        // top border and header row
        let Some(row) = (y - area.y).checked_sub(2) else {
            return;
        };
        let index = self.list_offset + row as usize;
        if index < self.visible_len() {
            if self.cursor == index {
                self.screen = Screen::Detail(index);
                self.detail_scroll = 0;
            } else {
                self.cursor = index;
            }
        }
    }

    fn save_config(&mut self) {
        let mut config = self.config.clone();
        let mut display = config.display.unwrap_or_default();
        display.theme = Some(self.theme_name.clone());
        config.display = Some(display);

        self.status = Some(match config_file::save_config(&config) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "config saved");
                self.config = config;
                format!("Config saved to {}", path.display())
            }
            Err(e) => {
                tracing::warn!(error = %e, "config save failed");
                e
            }
        });
    }
}
