//! Theme module for sprout-tui
//!
//! Centralized color palette for the "crayon box" look: chrome colors,
//! per-section accents, the swatch table for the colors screen, and the
//! confetti palette.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::{ColorKind, Section};

/// Border set used for all cards
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color - deep twilight blue (#141129)
pub const BG_PRIMARY: Color = Color::Rgb(20, 17, 41);

/// Card background color - slightly lighter (#1e1a38)
pub const BG_CARD: Color = Color::Rgb(30, 26, 56);

/// Subtle border color (#2c2750)
pub const BORDER_SUBTLE: Color = Color::Rgb(44, 39, 80);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - warm white (#f5f0e8)
pub const TEXT_PRIMARY: Color = Color::Rgb(245, 240, 232);

/// Muted text color - for labels and hints (#8d86ad)
pub const TEXT_MUTED: Color = Color::Rgb(141, 134, 173);

// ============================================================================
// Accent Colors
// ============================================================================

/// Star gold, used for the tally banner (#ffd700)
pub const STAR_GOLD: Color = Color::Rgb(255, 215, 0);

/// Teal accent for feedback text (#4ecdc4)
pub const ACCENT_TEAL: Color = Color::Rgb(78, 205, 196);

/// Confetti palette cycled through during celebrations
pub const CONFETTI: [Color; 8] = [
    Color::Rgb(255, 107, 107), // #ff6b6b
    Color::Rgb(78, 205, 196),  // #4ecdc4
    Color::Rgb(69, 183, 209),  // #45b7d1
    Color::Rgb(249, 202, 36),  // #f9ca24
    Color::Rgb(255, 159, 243), // #ff9ff3
    Color::Rgb(84, 160, 255),  // #54a0ff
    Color::Rgb(255, 215, 0),   // #ffd700
    Color::Rgb(255, 99, 72),   // #ff6348
];

/// Accent color for a section's home card and screen header
pub fn section_accent(section: Section) -> Color {
    match section {
        Section::Shapes => Color::Rgb(255, 107, 107),   // #ff6b6b
        Section::Colors => Color::Rgb(249, 202, 36),    // #f9ca24
        Section::Numbers => Color::Rgb(69, 183, 209),   // #45b7d1
        Section::Alphabet => Color::Rgb(255, 159, 243), // #ff9ff3
    }
}

/// Display swatch for a color on the colors screen
pub fn swatch(color: ColorKind) -> Color {
    match color {
        ColorKind::Red => Color::Rgb(255, 71, 87),     // #ff4757
        ColorKind::Blue => Color::Rgb(55, 66, 250),    // #3742fa
        ColorKind::Green => Color::Rgb(46, 213, 115),  // #2ed573
        ColorKind::Yellow => Color::Rgb(255, 165, 2),  // #ffa502
        ColorKind::Purple => Color::Rgb(142, 68, 173), // #8e44ad
        ColorKind::Orange => Color::Rgb(255, 99, 72),  // #ff6348
        ColorKind::Pink => Color::Rgb(255, 56, 56),    // #ff3838
        ColorKind::Brown => Color::Rgb(139, 69, 19),   // #8b4513
    }
}

/// Alternate between two colors on the animation tick, for the pulsing
/// selection highlight
pub fn get_pulse_color(tick: u64, on: Color, off: Color) -> Color {
    if (tick / 3) % 2 == 0 { on } else { off }
}
