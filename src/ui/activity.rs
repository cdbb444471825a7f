//! Activity screen rendering: a grid of tappable learning items.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::{Interaction, Section, content, number_to_word};
use crate::theme::{
    BG_CARD, BG_PRIMARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, get_pulse_color,
    section_accent, swatch,
};

/// Height of one grid row of item cells, borders included
const CELL_HEIGHT: u16 = 4;

/// Render an activity screen: section header plus the item grid
pub fn render_activity(frame: &mut Frame, app: &App, section: Section, area: Rect) {
    let columns = content::grid_columns(section);
    let count = content::item_count(section);
    let rows = count.div_ceil(columns);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(std::iter::repeat_n(Constraint::Length(CELL_HEIGHT), rows));
    constraints.push(Constraint::Min(0));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_header(frame, app, section, layout[0]);

    for row in 0..rows {
        let row_constraints = vec![Constraint::Ratio(1, columns as u32); columns];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(row_constraints)
            .split(layout[row + 1]);

        for col in 0..columns {
            let index = row * columns + col;
            if index >= count {
                break;
            }
            if let Some(interaction) = content::interaction_at(section, index) {
                let selected = index == app.selected;
                render_item_cell(frame, app, interaction, selected, cells[col]);
            }
        }
    }
}

/// Section title and its star count, read-only from the progress store
fn render_header(frame: &mut Frame, app: &App, section: Section, area: Rect) {
    let count = app.progress.section_count(section);
    let line = Line::from(vec![
        Span::styled(
            section.label(),
            Style::default()
                .fg(section_accent(section))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   ★ {count} stars here"),
            Style::default().fg(TEXT_MUTED),
        ),
    ]);

    let header = Paragraph::new(vec![line]).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// One tappable cell: the item on top, its label underneath
fn render_item_cell(
    frame: &mut Frame,
    app: &App,
    interaction: Interaction,
    selected: bool,
    area: Rect,
) {
    let accent = section_accent(interaction.section());
    let border_color = if selected {
        get_pulse_color(app.animation_tick, accent, TEXT_PRIMARY)
    } else {
        BORDER_SUBTLE
    };
    let bg = if selected { BG_CARD } else { BG_PRIMARY };

    let cell_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg));

    let (display_line, label_line) = item_lines(interaction, accent);
    let cell = Paragraph::new(vec![display_line, label_line])
        .block(cell_block)
        .alignment(Alignment::Center);

    frame.render_widget(cell, area);
}

/// Display and label lines for a single item
fn item_lines(interaction: Interaction, accent: Color) -> (Line<'static>, Line<'static>) {
    let muted = Style::default().fg(TEXT_MUTED);
    match interaction {
        Interaction::Shape(shape) => (
            Line::from(Span::styled(shape.glyph(), Style::default().fg(accent))),
            Line::from(Span::styled(shape.label(), muted)),
        ),
        Interaction::Color(color) => (
            Line::from(Span::styled(
                "██████",
                Style::default().fg(swatch(color)),
            )),
            Line::from(Span::styled(color.label(), muted)),
        ),
        Interaction::Number(n) => (
            Line::from(Span::styled(
                format!("{n}"),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(number_to_word(n).to_string(), muted)),
        ),
        Interaction::Letter(letter) => (
            Line::from(Span::styled(
                format!("{letter}"),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(letter.to_lowercase().to_string(), muted)),
        ),
    }
}
