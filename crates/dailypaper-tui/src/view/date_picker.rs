use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::app::App;
use crate::view::centered_rect;

/// Popup listing every available date; the loaded one is marked.
pub fn render(f: &mut Frame, app: &App) {
    let Some(cursor) = app.date_picker else {
        return;
    };
    let theme = &app.theme;
    let dates = app.session.dates();
    let selected = app.session.selected_date();

    let height = (dates.len() as u16).saturating_add(2).min(20);
    let popup = centered_rect(24, height, f.area());

    let items: Vec<ListItem> = dates
        .as_slice()
        .iter()
        .map(|date| {
            let marker = if Some(date.as_str()) == selected {
                "\u{25CF} "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.active)),
                Span::styled(date.clone(), Style::default().fg(theme.text)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.active))
                .title(" Date "),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(cursor));
    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, &mut state);
}
