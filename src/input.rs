//! Keyboard input mapping.
//!
//! Translates crossterm key events into typed commands for the current
//! screen. Keys with no mapping produce no command, leaving all state
//! untouched.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{Command, Direction, Screen, Section, content};

/// Map a key event to a command for the current screen.
///
/// `selected` is the index of the highlighted item on an activity screen;
/// it resolves Enter/Space into the concrete interaction being recorded.
pub fn map_key(screen: Screen, selected: usize, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(Command::Quit);
        }
        return None;
    }

    // Global keys: quit and direct section jumps work everywhere
    match key.code {
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Char('1') => {
            return Some(Command::NavigateTo(Screen::Activity(Section::Shapes)));
        }
        KeyCode::Char('2') => {
            return Some(Command::NavigateTo(Screen::Activity(Section::Colors)));
        }
        KeyCode::Char('3') => {
            return Some(Command::NavigateTo(Screen::Activity(Section::Numbers)));
        }
        KeyCode::Char('4') => {
            return Some(Command::NavigateTo(Screen::Activity(Section::Alphabet)));
        }
        _ => {}
    }

    match screen {
        Screen::Home => match key.code {
            KeyCode::Char('s') => Some(Command::NavigateTo(Screen::Activity(Section::Shapes))),
            KeyCode::Char('c') => Some(Command::NavigateTo(Screen::Activity(Section::Colors))),
            KeyCode::Char('n') => Some(Command::NavigateTo(Screen::Activity(Section::Numbers))),
            KeyCode::Char('l') => Some(Command::NavigateTo(Screen::Activity(Section::Alphabet))),
            _ => None,
        },
        Screen::Activity(section) => match key.code {
            KeyCode::Left => Some(Command::MoveSelection(Direction::Left)),
            KeyCode::Right => Some(Command::MoveSelection(Direction::Right)),
            KeyCode::Up => Some(Command::MoveSelection(Direction::Up)),
            KeyCode::Down => Some(Command::MoveSelection(Direction::Down)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                content::interaction_at(section, selected).map(Command::Record)
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => Some(Command::NavigateHome),
            _ => None,
        },
    }
}
