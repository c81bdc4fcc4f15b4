pub mod date_picker;
pub mod detail;
pub mod help;
pub mod list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use dailypaper_core::LoadPhase;

use crate::app::{App, InputMode, Screen};

/// Spinner frames for animated progress indication.
const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Create a centered rectangle of the given width (columns) and height (rows).
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let session = &app.session;

    let mut spans = vec![
        Span::styled(" DAILY PAPER ", theme.header_style()),
        Span::raw(" "),
    ];
    match session.selected_date() {
        Some(date) => spans.push(Span::styled(
            date.to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        None => spans.push(Span::styled("no date", Style::default().fg(theme.dim))),
    }

    match session.phase() {
        LoadPhase::Loading { .. } | LoadPhase::Idle => spans.push(Span::styled(
            format!(" {}", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        )),
        LoadPhase::Ready => {
            spans.push(Span::styled(
                format!(
                    "  {}/{} papers",
                    app.visible_len(),
                    session.papers().len()
                ),
                Style::default().fg(theme.dim),
            ));
            if session.skipped() > 0 {
                spans.push(Span::styled(
                    format!("  ({} unreadable records skipped)", session.skipped()),
                    Style::default().fg(theme.error),
                ));
            }
        }
        LoadPhase::Failed { .. } => {}
    }

    if let Screen::Detail(i) = app.screen {
        spans.push(Span::styled(" > ", Style::default().fg(theme.dim)));
        spans.push(Span::styled(
            format!("#{}", i + 1),
            Style::default().fg(theme.text),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Category strip followed by the two flag toggles.
pub fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let filter = app.session.filter();

    let mut spans = vec![Span::raw(" ")];
    for category in app.session.categories() {
        let style = if *category == filter.active_category {
            theme.toggle_style(true)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(format!(" {category} "), style));
    }
    spans.push(Span::styled(" \u{2502} ", Style::default().fg(theme.border)));
    spans.push(Span::styled(" AI4Science ", theme.toggle_style(filter.ai_only)));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        " Perturbation ",
        theme.toggle_style(filter.perturbation_only),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let cursor = if app.input_mode == InputMode::Search {
        "\u{2588}"
    } else {
        ""
    };
    let line = Line::from(vec![
        Span::styled(
            " /",
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.session.filter().search_query.clone(),
            Style::default().fg(theme.text),
        ),
        Span::styled(cursor, Style::default().fg(theme.active)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some(status) = &app.status {
        format!(" {status}")
    } else {
        match (&app.input_mode, &app.screen) {
            (InputMode::Search, _) => " Enter:apply  Esc:cancel".to_string(),
            (_, Screen::Detail(_)) => " j/k:scroll  Esc:back  ?:help  q:quit".to_string(),
            (_, Screen::List) => {
                " j/k:move  Enter:open  /:search  a:AI  p:perturbation  c/C:category  d:date  [/]:prev/next  ?:help  q:quit"
                    .to_string()
            }
        }
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, theme.footer_style()))),
        area,
    );
}
