//! Explicit UI state: loaded papers, filters and load phase.
//!
//! Front-ends own one [`Session`] and mutate it only from their event loop.
//! Loads are started with [`Session::begin_load`] and finished with
//! [`Session::complete_load`]; a result whose ticket is no longer current
//! is dropped, so only the most recently requested date is ever shown.

use crate::LoadError;
use crate::categories::{ALL_CATEGORIES, derive_categories};
use crate::dates::DateList;
use crate::filter::{FilterState, apply_filters};
use crate::paper::{Paper, PaperSet};
use crate::view::{ListView, PaperCard, render};

/// Identifies one requested load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub date: String,
}

/// Where the paper list is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading { date: String },
    Ready,
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub struct Session {
    dates: DateList,
    papers: Vec<Paper>,
    skipped: usize,
    categories: Vec<String>,
    filter: FilterState,
    phase: LoadPhase,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            dates: DateList::default(),
            papers: Vec::new(),
            skipped: 0,
            categories: vec![ALL_CATEGORIES.to_string()],
            filter: FilterState::default(),
            phase: LoadPhase::Idle,
            generation: 0,
        }
    }

    pub fn dates(&self) -> &DateList {
        &self.dates
    }

    /// Install the date index. An empty index leaves nothing to load, so
    /// the list goes straight to the error state.
    pub fn set_dates(&mut self, dates: DateList) {
        if dates.is_empty() && !self.is_loading() {
            self.phase = LoadPhase::Failed {
                message: "No dates are available yet.".to_string(),
            };
        }
        self.dates = dates;
    }

    /// The index could not be loaded; nothing else can be either.
    pub fn fail_dates(&mut self, err: &LoadError) {
        tracing::warn!(error = %err, "date index unavailable");
        self.generation += 1;
        self.phase = LoadPhase::Failed {
            message: format!("Failed to load data. Please check connection. ({err})"),
        };
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Records dropped from the current date's file.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.filter.selected_date.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    /// Start loading `date`, superseding any load still in flight.
    ///
    /// Resets the category to "All" and keeps the flags and search query.
    pub fn begin_load(&mut self, date: &str) -> LoadTicket {
        self.generation += 1;
        self.filter.select_date(date);
        self.phase = LoadPhase::Loading {
            date: date.to_string(),
        };
        tracing::debug!(date, generation = self.generation, "load started");
        LoadTicket {
            generation: self.generation,
            date: date.to_string(),
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a finished load. Returns `false` if the ticket was superseded
    /// and the result was discarded.
    pub fn complete_load(&mut self, ticket: &LoadTicket, result: Result<PaperSet, LoadError>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                date = %ticket.date,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale load"
            );
            return false;
        }

        match result {
            Ok(set) => {
                self.categories = derive_categories(&set.papers);
                self.papers = set.papers;
                self.skipped = set.skipped;
                self.phase = LoadPhase::Ready;
            }
            Err(err) => {
                tracing::warn!(date = %ticket.date, error = %err, "load failed");
                self.papers.clear();
                self.skipped = 0;
                self.categories = vec![ALL_CATEGORIES.to_string()];
                self.phase = LoadPhase::Failed {
                    message: format!("No papers found for {}. ({err})", ticket.date),
                };
            }
        }
        true
    }

    /// Select a category from the current index. Unknown names are ignored.
    pub fn set_category(&mut self, category: &str) -> bool {
        if self.categories.iter().any(|c| c == category) {
            self.filter.active_category = category.to_string();
            true
        } else {
            false
        }
    }

    /// Step through the category index, wrapping at either end.
    pub fn cycle_category(&mut self, forward: bool) {
        let n = self.categories.len();
        if n == 0 {
            return;
        }
        let current = self
            .categories
            .iter()
            .position(|c| *c == self.filter.active_category)
            .unwrap_or(0);
        let next = if forward { (current + 1) % n } else { (current + n - 1) % n };
        self.filter.active_category = self.categories[next].clone();
    }

    pub fn set_ai_only(&mut self, on: bool) {
        self.filter.ai_only = on;
    }

    pub fn set_perturbation_only(&mut self, on: bool) {
        self.filter.perturbation_only = on;
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.filter.search_query = query.to_string();
    }

    /// Papers passing the current filters, in file order.
    pub fn visible(&self) -> Vec<&Paper> {
        apply_filters(&self.papers, &self.filter)
    }

    pub fn cards(&self) -> Vec<PaperCard> {
        render(&self.visible())
    }

    pub fn view(&self) -> ListView {
        match &self.phase {
            LoadPhase::Idle => ListView::Loading { date: None },
            LoadPhase::Loading { date } => ListView::Loading {
                date: Some(date.clone()),
            },
            LoadPhase::Failed { message } => ListView::Error {
                message: message.clone(),
            },
            LoadPhase::Ready => ListView::from_cards(self.cards()),
        }
    }
}
