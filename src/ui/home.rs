//! Home screen rendering: one card per activity section.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::{ColorKind, Section};
use crate::theme::{BG_CARD, ROUNDED_BORDERS, TEXT_MUTED, section_accent, swatch};

/// Render the home screen: a prompt line and a 2x2 grid of section cards
pub fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(5), // First card row
            Constraint::Length(5), // Second card row
            Constraint::Min(0),
        ])
        .split(area);

    let prompt = Paragraph::new("What do you want to learn today?")
        .style(Style::default().fg(TEXT_MUTED))
        .alignment(Alignment::Center);
    frame.render_widget(prompt, layout[0]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[2]);

    let cells = [top[0], top[1], bottom[0], bottom[1]];
    for (index, section) in Section::ALL.into_iter().enumerate() {
        render_section_card(frame, app, section, index + 1, cells[index]);
    }
}

/// One home card: icon line, numbered label, and the section's star count
fn render_section_card(frame: &mut Frame, app: &App, section: Section, number: usize, area: Rect) {
    let accent = section_accent(section);

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(BG_CARD));

    let label_line = Line::from(vec![
        Span::styled(format!("[{number}] "), Style::default().fg(TEXT_MUTED)),
        Span::styled(
            section.label(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
    ]);

    let count = app.progress.section_count(section);
    let count_line = Line::from(Span::styled(
        format!("★ {count}"),
        Style::default().fg(TEXT_MUTED),
    ));

    let content = vec![icon_line(section), label_line, count_line];
    let card = Paragraph::new(content)
        .block(card_block)
        .alignment(Alignment::Center);

    frame.render_widget(card, area);
}

/// Decorative icon row for a section card
fn icon_line(section: Section) -> Line<'static> {
    match section {
        Section::Shapes => Line::from(Span::styled(
            "● ▲ ■",
            Style::default().fg(section_accent(section)),
        )),
        Section::Colors => Line::from(vec![
            Span::styled("▆ ", Style::default().fg(swatch(ColorKind::Red))),
            Span::styled("▆ ", Style::default().fg(swatch(ColorKind::Yellow))),
            Span::styled("▆", Style::default().fg(swatch(ColorKind::Blue))),
        ]),
        Section::Numbers => Line::from(Span::styled(
            "1 2 3",
            Style::default().fg(section_accent(section)),
        )),
        Section::Alphabet => Line::from(Span::styled(
            "A B C",
            Style::default().fg(section_accent(section)),
        )),
    }
}
