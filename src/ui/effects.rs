//! Confetti celebration rendering.
//!
//! Draws a strip of scattered colored glyphs while a celebration is
//! active. Placement is a pure function of the animation tick so frames
//! stay reproducible.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::theme::CONFETTI;

const GLYPHS: [&str; 4] = ["*", "o", "+", "."];

/// Roughly one cell in five carries a confetti glyph
const DENSITY: u64 = 5;

/// xorshift scatter over a seed
fn scatter(mut seed: u64) -> u64 {
    seed ^= seed << 13;
    seed ^= seed >> 7;
    seed ^= seed << 17;
    seed
}

/// Render the confetti strip while a celebration is active
pub fn render_confetti(frame: &mut Frame, app: &App, area: Rect) {
    if app.celebration_ticks == 0 || area.width == 0 {
        return;
    }

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let seed = scatter(
                app.animation_tick
                    .wrapping_mul(31)
                    .wrapping_add((row as u64) << 32)
                    .wrapping_add(col as u64 + 1),
            );
            if seed % DENSITY == 0 {
                let glyph = GLYPHS[(seed >> 8) as usize % GLYPHS.len()];
                let color = CONFETTI[(seed >> 16) as usize % CONFETTI.len()];
                spans.push(Span::styled(glyph, Style::default().fg(color)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
