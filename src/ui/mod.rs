//! UI module for sprout-tui
//!
//! Rendering for the star banner, the home screen, the four activity
//! screens, the feedback line, and the confetti celebration strip.

mod activity;
mod effects;
mod home;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Screen;
use crate::theme::{
    ACCENT_TEAL, BG_CARD, BG_PRIMARY, BORDER_SUBTLE, ROUNDED_BORDERS, STAR_GOLD, TEXT_MUTED,
    TEXT_PRIMARY, get_pulse_color,
};

/// Render one frame of the whole interface
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Star banner
            Constraint::Length(1), // Feedback line
            Constraint::Length(2), // Confetti strip
            Constraint::Min(3),    // Screen content
            Constraint::Length(1), // Keybinding bar
        ])
        .split(area);

    render_banner(frame, app, main_layout[0]);
    render_feedback(frame, app, main_layout[1]);
    effects::render_confetti(frame, app, main_layout[2]);

    match app.screen {
        Screen::Home => home::render_home(frame, app, main_layout[3]),
        Screen::Activity(section) => activity::render_activity(frame, app, section, main_layout[3]),
    }

    render_key_hints(frame, app, main_layout[4]);
}

/// Top banner: app title and the total star tally
fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let banner_block = Block::default()
        .title(" Sproutly ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_PRIMARY));

    // Pulse the star while a celebration is running
    let star_color = if app.celebration_ticks > 0 {
        get_pulse_color(app.animation_tick, STAR_GOLD, TEXT_PRIMARY)
    } else {
        STAR_GOLD
    };

    let tally_line = Line::from(vec![
        Span::styled("★ ", Style::default().fg(star_color)),
        Span::styled(
            format!("{}", app.progress.stars()),
            Style::default().fg(STAR_GOLD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" stars earned", Style::default().fg(TEXT_MUTED)),
    ]);

    let banner = Paragraph::new(vec![tally_line])
        .block(banner_block)
        .alignment(Alignment::Center);

    frame.render_widget(banner, area);
}

/// Transient encouragement line under the banner
fn render_feedback(frame: &mut Frame, app: &App, area: Rect) {
    let Some(feedback) = &app.feedback else {
        return;
    };

    let line = Line::from(Span::styled(
        feedback.text.clone(),
        Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(vec![line]).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Bottom bar with keybinding hints for the current screen
fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.screen {
        Screen::Home => " q: Quit | 1-4: Pick an activity ",
        Screen::Activity(_) => " Arrows: Choose | Enter: Tap | Esc: Home | q: Quit ",
    };

    let bar = Paragraph::new(hints).style(Style::default().fg(BG_CARD).bg(ACCENT_TEAL));
    frame.render_widget(bar, area);
}
