//! Enums used throughout sprout-tui
//!
//! Screen and section identifiers for navigation, plus the typed commands
//! produced by keyboard input.

use crate::models::content::Interaction;

/// One of the four learning activity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Shapes,
    Colors,
    Numbers,
    Alphabet,
}

impl Section {
    /// All sections in home-screen order
    pub const ALL: [Section; 4] = [
        Section::Shapes,
        Section::Colors,
        Section::Numbers,
        Section::Alphabet,
    ];

    /// Stable identifier used in durable storage and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Section::Shapes => "shapes",
            Section::Colors => "colors",
            Section::Numbers => "numbers",
            Section::Alphabet => "alphabet",
        }
    }

    /// Display label for headers and home cards
    pub fn label(&self) -> &'static str {
        match self {
            Section::Shapes => "Shapes",
            Section::Colors => "Colors",
            Section::Numbers => "Numbers",
            Section::Alphabet => "Letters",
        }
    }

    /// Parse a section identifier; unknown names are `None`
    pub fn from_key(key: &str) -> Option<Section> {
        match key {
            "shapes" => Some(Section::Shapes),
            "colors" => Some(Section::Colors),
            "numbers" => Some(Section::Numbers),
            "alphabet" => Some(Section::Alphabet),
            _ => None,
        }
    }
}

/// The single currently visible view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Activity(Section),
}

impl Screen {
    /// Screen identifier for the command line
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Activity(section) => section.key(),
        }
    }

    /// Parse a screen name. Unrecognized names are `None`; callers leave
    /// the current screen unchanged in that case.
    pub fn from_key(key: &str) -> Option<Screen> {
        if key == "home" {
            return Some(Screen::Home);
        }
        Section::from_key(key).map(Screen::Activity)
    }

    /// Section shown by this screen, if it is an activity screen
    pub fn section(&self) -> Option<Section> {
        match self {
            Screen::Home => None,
            Screen::Activity(section) => Some(*section),
        }
    }
}

/// Grid selection movement on an activity screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Typed command dispatched for each input event
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    NavigateTo(Screen),
    NavigateHome,
    Record(Interaction),
    MoveSelection(Direction),
    Quit,
}
