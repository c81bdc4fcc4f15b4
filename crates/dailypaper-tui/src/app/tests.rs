use tokio::sync::mpsc;

use dailypaper_core::{DateList, ListView, LoadError, Paper, PaperSet, SourceAttempt};

use super::*;
use crate::action::Action;
use crate::tui_event::BackendEvent;

/// Create a minimal App for testing (no backend task, no files).
fn test_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let mut app = App::new("hacker", ConfigFile::default());
    let (tx, rx) = mpsc::unbounded_channel();
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

fn paper(title: &str, category: &str, ai: bool, perturbation: bool) -> Paper {
    Paper {
        title: title.into(),
        summary: format!("{title} summary"),
        primary_category: Some(category.into()),
        is_ai4science: ai,
        is_perturbation: perturbation,
        ..Default::default()
    }
}

fn sample() -> Vec<Paper> {
    vec![
        paper("Protein folding with transformers", "q-bio.BM", true, false),
        paper("Gene knockout prediction", "q-bio.GN", true, true),
        paper("Graph theory survey", "math.CO", false, false),
    ]
}

fn next_ticket(rx: &mut mpsc::UnboundedReceiver<BackendCommand>) -> dailypaper_core::LoadTicket {
    match rx.try_recv() {
        Ok(BackendCommand::LoadPapers { ticket }) => ticket,
        other => panic!("expected LoadPapers, got {other:?}"),
    }
}

/// Dates arrive, the default date auto-loads, and the sample papers land.
fn loaded_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (mut app, mut rx) = test_app();
    app.handle_backend_event(BackendEvent::DatesLoaded(Ok(DateList::from_raw(vec![
        "2024-03-02".into(),
        "2024-03-01".into(),
    ]))));
    let ticket = next_ticket(&mut rx);
    app.handle_backend_event(BackendEvent::PapersLoaded {
        ticket,
        result: Ok(PaperSet {
            papers: sample(),
            skipped: 0,
        }),
    });
    (app, rx)
}

fn network_error() -> LoadError {
    LoadError::Network {
        resource: "available_dates.json".into(),
        attempts: vec![SourceAttempt {
            source: "remote".into(),
            error: "HTTP 503".into(),
        }],
    }
}

// ── Loading lifecycle ───────────────────────────────────────────

#[test]
fn dates_loaded_starts_default_date() {
    let (mut app, mut rx) = test_app();
    assert!(matches!(app.session.view(), ListView::Loading { date: None }));

    app.handle_backend_event(BackendEvent::DatesLoaded(Ok(DateList::from_raw(vec![
        "2024-03-02".into(),
    ]))));

    let ticket = next_ticket(&mut rx);
    assert_eq!(ticket.date, "2024-03-02");
    assert_eq!(
        app.session.view(),
        ListView::Loading {
            date: Some("2024-03-02".into())
        }
    );
}

#[test]
fn dates_failure_shows_error() {
    let (mut app, mut rx) = test_app();
    app.handle_backend_event(BackendEvent::DatesLoaded(Err(network_error())));
    assert!(rx.try_recv().is_err());
    match app.session.view() {
        ListView::Error { message } => assert!(message.contains("Failed to load data")),
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn loaded_papers_are_listed() {
    let (app, _rx) = loaded_app();
    assert_eq!(app.session.view().cards().len(), 3);
    assert_eq!(app.cursor, 0);
}

#[test]
fn stale_paper_load_is_ignored() {
    let (mut app, mut rx) = loaded_app();

    app.update(Action::NextDate);
    let older = next_ticket(&mut rx);
    app.update(Action::PrevDate);
    let newer = next_ticket(&mut rx);
    assert_eq!(newer.date, "2024-03-02");

    app.handle_backend_event(BackendEvent::PapersLoaded {
        ticket: newer,
        result: Ok(PaperSet {
            papers: vec![paper("Fresh", "cs.LG", false, false)],
            skipped: 0,
        }),
    });
    app.handle_backend_event(BackendEvent::PapersLoaded {
        ticket: older,
        result: Ok(PaperSet {
            papers: sample(),
            skipped: 0,
        }),
    });

    let view = app.session.view();
    assert_eq!(view.cards().len(), 1);
    assert_eq!(view.cards()[0].title, "Fresh");
    assert_eq!(app.session.selected_date(), Some("2024-03-02"));
}

#[test]
fn reload_requests_current_date_again() {
    let (mut app, mut rx) = loaded_app();
    app.update(Action::Reload);
    assert_eq!(next_ticket(&mut rx).date, "2024-03-02");
    assert!(app.session.is_loading());
}

// ── Navigation ──────────────────────────────────────────────────

#[test]
fn cursor_stays_in_bounds() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::MoveUp);
    assert_eq!(app.cursor, 0);
    for _ in 0..10 {
        app.update(Action::MoveDown);
    }
    assert_eq!(app.cursor, 2);
    app.update(Action::GoTop);
    assert_eq!(app.cursor, 0);
}

#[test]
fn enter_opens_detail_and_esc_returns() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::MoveDown);
    app.update(Action::DrillIn);
    assert_eq!(app.screen, Screen::Detail(1));
    app.update(Action::NavigateBack);
    assert_eq!(app.screen, Screen::List);
}

#[test]
fn date_stepping_stops_at_the_ends() {
    let (mut app, mut rx) = loaded_app();
    app.update(Action::PrevDate);
    assert!(rx.try_recv().is_err());
    app.update(Action::NextDate);
    assert_eq!(next_ticket(&mut rx).date, "2024-03-01");
    app.update(Action::NextDate);
    assert!(rx.try_recv().is_err());
}

#[test]
fn date_picker_selects_date() {
    let (mut app, mut rx) = loaded_app();
    app.update(Action::OpenDatePicker);
    assert_eq!(app.date_picker, Some(0));
    app.update(Action::MoveDown);
    app.update(Action::DrillIn);
    assert_eq!(app.date_picker, None);
    assert_eq!(next_ticket(&mut rx).date, "2024-03-01");
}

#[test]
fn date_picker_esc_closes_without_loading() {
    let (mut app, mut rx) = loaded_app();
    app.update(Action::OpenDatePicker);
    app.update(Action::NavigateBack);
    assert_eq!(app.date_picker, None);
    assert!(rx.try_recv().is_err());
}

// ── Filtering ───────────────────────────────────────────────────

#[test]
fn ai_toggle_filters_and_clamps_cursor() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::GoBottom);
    assert_eq!(app.cursor, 2);
    app.update(Action::ToggleAiOnly);
    assert_eq!(app.visible_len(), 2);
    assert_eq!(app.cursor, 1);
    app.update(Action::ToggleAiOnly);
    assert_eq!(app.visible_len(), 3);
}

#[test]
fn filtering_from_detail_returns_to_list() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::GoBottom);
    app.update(Action::DrillIn);
    assert_eq!(app.screen, Screen::Detail(2));

    app.update(Action::ToggleAiOnly);
    assert_eq!(app.screen, Screen::List);
    assert_eq!(app.visible_len(), 2);

    app.update(Action::DrillIn);
    app.update(Action::NextCategory);
    assert_eq!(app.screen, Screen::List);
    assert_eq!(app.session.filter().active_category, "q-bio.BM");
}

#[test]
fn both_flags_narrow_to_intersection() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::ToggleAiOnly);
    app.update(Action::TogglePerturbationOnly);
    let view = app.session.view();
    assert_eq!(view.cards().len(), 1);
    assert_eq!(view.cards()[0].title, "Gene knockout prediction");
}

#[test]
fn category_cycling_wraps() {
    let (mut app, _rx) = loaded_app();
    assert_eq!(app.session.categories().len(), 4);
    app.update(Action::NextCategory);
    assert_eq!(app.session.filter().active_category, "q-bio.BM");
    assert_eq!(app.visible_len(), 1);
    app.update(Action::PrevCategory);
    app.update(Action::PrevCategory);
    assert_eq!(app.session.filter().active_category, "math.CO");
}

#[test]
fn no_matches_is_empty_not_error() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::StartSearch);
    for ch in "zebrafish".chars() {
        app.update(Action::SearchInput(ch));
    }
    assert_eq!(app.session.view(), ListView::Empty);
    assert_eq!(
        app.session.view().message().as_deref(),
        Some(dailypaper_core::view::NO_MATCHES_MESSAGE)
    );
}

#[test]
fn search_filters_live_and_backspace_edits() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::StartSearch);
    assert_eq!(app.input_mode, InputMode::Search);
    for ch in "GENE".chars() {
        app.update(Action::SearchInput(ch));
    }
    assert_eq!(app.visible_len(), 1);
    app.update(Action::SearchInput('\x08'));
    assert_eq!(app.session.filter().search_query, "GEN");
    app.update(Action::SearchConfirm);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.visible_len(), 1);
}

#[test]
fn search_cancel_restores_previous_query() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::StartSearch);
    app.update(Action::SearchInput('x'));
    app.update(Action::SearchCancel);
    assert_eq!(app.session.filter().search_query, "");
    assert_eq!(app.visible_len(), 3);
}

#[test]
fn letters_in_search_do_not_trigger_commands() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::StartSearch);
    app.update(Action::SearchInput('q'));
    assert!(!app.should_quit);
}

#[test]
fn new_date_resets_category_but_keeps_flags() {
    let (mut app, mut rx) = loaded_app();
    app.update(Action::NextCategory);
    app.update(Action::ToggleAiOnly);
    app.update(Action::NextDate);
    let _ = next_ticket(&mut rx);
    assert_eq!(app.session.filter().active_category, "All");
    assert!(app.session.filter().ai_only);
}

// ── Overlays ────────────────────────────────────────────────────

#[test]
fn help_overlay_swallows_actions() {
    let (mut app, _rx) = loaded_app();
    app.update(Action::ToggleHelp);
    assert!(app.show_help);
    app.update(Action::MoveDown);
    assert_eq!(app.cursor, 0);
    app.update(Action::NavigateBack);
    assert!(!app.show_help);
}

#[test]
fn theme_cycles() {
    let (mut app, _rx) = test_app();
    app.update(Action::CycleTheme);
    assert_eq!(app.theme_name, "modern");
    app.update(Action::CycleTheme);
    assert_eq!(app.theme_name, "hacker");
}

#[test]
fn quit_returns_true() {
    let (mut app, _rx) = test_app();
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}
