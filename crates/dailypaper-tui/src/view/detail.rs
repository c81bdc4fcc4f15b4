use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use dailypaper_core::view::{AI4SCIENCE_TAG, PERTURBATION_TAG};

use crate::app::App;

/// Render one paper in full: metadata, tags, summary and the classifier's
/// reasoning. Falls back to the list's message if the card has gone away.
pub fn render_in(f: &mut Frame, app: &mut App, index: usize, area: Rect) {
    let cards = app.session.cards();
    let Some(card) = cards.get(index) else {
        crate::view::list::render_in(f, app, area);
        return;
    };
    let theme = &app.theme;

    let label = Style::default().fg(theme.dim);
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Authors:   ", label),
            Span::styled(card.authors.clone(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("  Published: ", label),
            Span::styled(card.published.clone(), Style::default().fg(theme.text)),
        ]),
    ];
    if let Some(category) = &card.category {
        lines.push(Line::from(vec![
            Span::styled("  Category:  ", label),
            Span::styled(category.clone(), Style::default().fg(theme.text)),
        ]));
    }
    if !card.url.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  Link:      ", label),
            Span::styled(
                card.url.clone(),
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    if card.ai4science || card.perturbation {
        let mut tags = vec![Span::styled("  Tags:      ", label)];
        if card.ai4science {
            tags.push(Span::styled(
                format!("[{AI4SCIENCE_TAG}] "),
                Style::default()
                    .fg(theme.ai_tag)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if card.perturbation {
            tags.push(Span::styled(
                format!("[{PERTURBATION_TAG}]"),
                Style::default()
                    .fg(theme.perturbation_tag)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(tags));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Summary",
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    )));
    if card.summary.is_empty() {
        lines.push(Line::from(Span::styled("(no summary)", label)));
    } else {
        lines.push(Line::from(Span::styled(
            card.summary.clone(),
            Style::default().fg(theme.text),
        )));
    }

    if let Some(reasoning) = &card.reasoning {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Why it was tagged",
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            reasoning.clone(),
            Style::default().fg(theme.reasoning),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(format!(" #{} ", card.index)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(paragraph, area);
}
