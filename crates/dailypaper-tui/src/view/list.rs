use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use dailypaper_core::{ListView, PaperCard};

use crate::app::App;
use crate::theme::Theme;
use crate::view::{spinner_char, truncate};

/// Render the paper list, or the loading / empty / error message in its place.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style());

    match app.session.view() {
        ListView::Loading { date } => {
            let text = match date {
                Some(date) => format!("{} Loading papers for {date}...", spinner_char(app.tick)),
                None => format!("{} Loading available dates...", spinner_char(app.tick)),
            };
            let style = Style::default().fg(app.theme.spinner);
            render_message(f, area, block, text, style);
            app.last_list_area = None;
        }
        ListView::Error { message } => {
            let style = Style::default()
                .fg(app.theme.error)
                .add_modifier(Modifier::BOLD);
            render_message(f, area, block, message, style);
            app.last_list_area = None;
        }
        ListView::Empty => {
            let text = ListView::Empty.message().unwrap_or_default();
            let style = Style::default().fg(app.theme.dim);
            render_message(f, area, block, text, style);
            app.last_list_area = None;
        }
        ListView::Populated { cards } => {
            render_table(f, area, block, app, &cards);
            app.last_list_area = Some(area);
        }
    }
}

fn render_message(f: &mut Frame, area: Rect, block: Block, text: String, style: Style) {
    let inner_top = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..inner_top).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(text, style)));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_table(f: &mut Frame, area: Rect, block: Block, app: &mut App, cards: &[PaperCard]) {
    let theme = &app.theme;
    let wide = area.width >= 100;

    let header_cells: &[&str] = if wide {
        &["#", "Title", "Authors", "Published", "Category", "Tags"]
    } else {
        &["#", "Title", "Category", "Tags"]
    };
    let header = Row::new(header_cells.iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
    }))
    .height(1);

    let title_width = if wide {
        (area.width as usize).saturating_sub(80)
    } else {
        (area.width as usize).saturating_sub(36)
    };

    let rows: Vec<Row> = cards
        .iter()
        .map(|card| {
            let num = Cell::from(format!("{}", card.index)).style(Style::default().fg(theme.dim));
            let title = Cell::from(truncate(&card.title, title_width));
            let category = Cell::from(card.category.clone().unwrap_or_default())
                .style(Style::default().fg(theme.dim));
            let tags = Cell::from(tag_line(card, theme));
            if wide {
                Row::new(vec![
                    num,
                    title,
                    Cell::from(truncate(&card.authors, 22)),
                    Cell::from(card.published.clone()).style(Style::default().fg(theme.dim)),
                    category,
                    tags,
                ])
            } else {
                Row::new(vec![num, title, category, tags])
            }
        })
        .collect();

    let widths: Vec<Constraint> = if wide {
        vec![
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(22),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
        ]
    } else {
        vec![
            Constraint::Length(4),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(8),
        ]
    };

    // borders + header row
    let body_rows = (area.height as usize).saturating_sub(3).max(1);
    if app.cursor < app.list_offset {
        app.list_offset = app.cursor;
    } else if app.cursor >= app.list_offset + body_rows {
        app.list_offset = app.cursor + 1 - body_rows;
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default()
        .with_offset(app.list_offset)
        .with_selected(Some(app.cursor));
    f.render_stateful_widget(table, area, &mut state);
}

/// Compact tag badges: `AI` and `PP`.
fn tag_line(card: &PaperCard, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    if card.ai4science {
        spans.push(Span::styled(
            "AI",
            Style::default()
                .fg(theme.ai_tag)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if card.perturbation {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            "PP",
            Style::default()
                .fg(theme.perturbation_tag)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}
