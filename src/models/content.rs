//! Learning catalog for the four activity screens
//!
//! Shapes, colors, numbers 1-20 and letters A-Z, plus the encouraging
//! feedback line shown after each tap.

use crate::models::enums::Section;

/// Shapes presented on the shapes screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Rectangle,
    Star,
    Heart,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Star,
        ShapeKind::Heart,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Star => "star",
            ShapeKind::Heart => "heart",
        }
    }

    /// Glyph drawn in the shape's grid cell
    pub fn glyph(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "●",
            ShapeKind::Square => "■",
            ShapeKind::Triangle => "▲",
            ShapeKind::Rectangle => "▬",
            ShapeKind::Star => "★",
            ShapeKind::Heart => "♥",
        }
    }
}

/// Colors presented on the colors screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Brown,
}

impl ColorKind {
    pub const ALL: [ColorKind; 8] = [
        ColorKind::Red,
        ColorKind::Blue,
        ColorKind::Green,
        ColorKind::Yellow,
        ColorKind::Purple,
        ColorKind::Orange,
        ColorKind::Pink,
        ColorKind::Brown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorKind::Red => "red",
            ColorKind::Blue => "blue",
            ColorKind::Green => "green",
            ColorKind::Yellow => "yellow",
            ColorKind::Purple => "purple",
            ColorKind::Orange => "orange",
            ColorKind::Pink => "pink",
            ColorKind::Brown => "brown",
        }
    }
}

/// Highest number taught on the numbers screen
pub const NUMBER_COUNT: u8 = 20;

/// Letters taught on the alphabet screen
pub const LETTER_COUNT: u8 = 26;

/// A single qualifying interaction: one item tapped in one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Shape(ShapeKind),
    Color(ColorKind),
    Number(u8),
    Letter(char),
}

impl Interaction {
    /// Section this interaction counts toward
    pub fn section(&self) -> Section {
        match self {
            Interaction::Shape(_) => Section::Shapes,
            Interaction::Color(_) => Section::Colors,
            Interaction::Number(_) => Section::Numbers,
            Interaction::Letter(_) => Section::Alphabet,
        }
    }

    /// Encouraging feedback line for this interaction
    pub fn feedback(&self) -> String {
        match self {
            Interaction::Shape(shape) => {
                format!("Great job! That's a {}! 🎉", shape.label())
            }
            Interaction::Color(color) => {
                format!("Awesome! That's {}! 🌈", color.label())
            }
            Interaction::Number(n) => format!("Amazing! That's number {n}! 🔢"),
            Interaction::Letter(letter) => {
                format!("Fantastic! That's the letter {letter}! 📚")
            }
        }
    }
}

/// Number of tappable items on a section's screen
pub fn item_count(section: Section) -> usize {
    match section {
        Section::Shapes => ShapeKind::ALL.len(),
        Section::Colors => ColorKind::ALL.len(),
        Section::Numbers => NUMBER_COUNT as usize,
        Section::Alphabet => LETTER_COUNT as usize,
    }
}

/// Columns in a section's item grid
pub fn grid_columns(section: Section) -> usize {
    match section {
        Section::Shapes => 3,
        Section::Colors => 4,
        Section::Numbers => 5,
        Section::Alphabet => 7,
    }
}

/// Interaction for the item at `index` on a section's screen.
/// Out-of-range indices are `None`.
pub fn interaction_at(section: Section, index: usize) -> Option<Interaction> {
    if index >= item_count(section) {
        return None;
    }
    Some(match section {
        Section::Shapes => Interaction::Shape(ShapeKind::ALL[index]),
        Section::Colors => Interaction::Color(ColorKind::ALL[index]),
        Section::Numbers => Interaction::Number(index as u8 + 1),
        Section::Alphabet => Interaction::Letter((b'A' + index as u8) as char),
    })
}

/// English word for a number on the numbers screen (1-20)
pub fn number_to_word(n: u8) -> &'static str {
    match n {
        1 => "One",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Eleven",
        12 => "Twelve",
        13 => "Thirteen",
        14 => "Fourteen",
        15 => "Fifteen",
        16 => "Sixteen",
        17 => "Seventeen",
        18 => "Eighteen",
        19 => "Nineteen",
        20 => "Twenty",
        _ => "",
    }
}
