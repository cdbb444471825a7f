//! Application state and command dispatch.
//!
//! `App` is the single explicitly-constructed context owning the progress
//! store, the current screen, the grid selection, and the transient
//! feedback/celebration state. Every input event is mapped to a typed
//! `Command` and handled here synchronously, one at a time.

use crate::cli::CliConfig;
use crate::models::{Command, Direction, Interaction, Screen, content};
use crate::progress::ProgressStore;
use crate::storage::KvStore;

/// Ticks a regular feedback message stays visible (one tick ~ 100ms)
const FEEDBACK_TICKS: u32 = 15;

/// Ticks a greeting or milestone message stays visible
const BIG_FEEDBACK_TICKS: u32 = 35;

/// Ticks of confetti after a regular interaction
const CONFETTI_TICKS: u32 = 10;

/// Ticks of confetti after a milestone
const MEGA_CONFETTI_TICKS: u32 = 40;

/// Transient encouragement banner
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub text: String,
    pub ticks_left: u32,
}

/// Application state
pub struct App {
    pub progress: ProgressStore,
    pub screen: Screen,
    /// Index of the highlighted item on the current activity screen
    pub selected: usize,
    pub feedback: Option<Feedback>,
    /// Remaining ticks of confetti; zero means no celebration
    pub celebration_ticks: u32,
    pub animation_tick: u64,
    pub child_name: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: CliConfig) -> Self {
        let store = KvStore::open(config.data_dir);
        let mut progress = ProgressStore::load(store);
        if config.reset_progress {
            progress.reset();
        }

        let mut app = Self {
            progress,
            screen: config.start_screen,
            selected: 0,
            feedback: None,
            celebration_ticks: 0,
            animation_tick: 0,
            child_name: config.child_name,
            should_quit: false,
        };
        app.show_feedback(
            format!("Hi {}! Ready to learn and have fun? 🎈", app.child_name),
            BIG_FEEDBACK_TICKS,
        );
        app
    }

    /// Dispatch one typed command. Each command runs to completion before
    /// the next event is looked at.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::NavigateTo(screen) => self.navigate_to(screen),
            Command::NavigateHome => self.navigate_to(Screen::Home),
            Command::Record(interaction) => self.record(interaction),
            Command::MoveSelection(direction) => self.move_selection(direction),
            Command::Quit => self.should_quit = true,
        }
    }

    /// Switch to `screen`. The previous screen is deactivated implicitly:
    /// exactly one screen is ever current.
    pub fn navigate_to(&mut self, screen: Screen) {
        if self.screen != screen {
            self.selected = 0;
        }
        self.screen = screen;
    }

    /// Per-section count shown on the current activity screen, read
    /// straight from the progress store
    pub fn displayed_count(&self) -> Option<u64> {
        self.screen
            .section()
            .map(|section| self.progress.section_count(section))
    }

    fn record(&mut self, interaction: Interaction) {
        let total = self.progress.record_interaction(interaction.section());
        if ProgressStore::is_milestone(total) {
            self.show_feedback(
                format!(
                    "🎉 WOW! {total} STARS! You're amazing, {}! 🎉",
                    self.child_name
                ),
                BIG_FEEDBACK_TICKS,
            );
            self.celebration_ticks = MEGA_CONFETTI_TICKS;
        } else {
            self.show_feedback(interaction.feedback(), FEEDBACK_TICKS);
            self.celebration_ticks = self.celebration_ticks.max(CONFETTI_TICKS);
        }
    }

    fn move_selection(&mut self, direction: Direction) {
        let Some(section) = self.screen.section() else {
            return;
        };
        let count = content::item_count(section);
        if count == 0 {
            return;
        }
        let columns = content::grid_columns(section);
        let current = self.selected.min(count - 1);
        self.selected = match direction {
            Direction::Left => current.saturating_sub(1),
            Direction::Right => (current + 1).min(count - 1),
            Direction::Up => current.checked_sub(columns).unwrap_or(current),
            Direction::Down => {
                let next = current + columns;
                if next < count { next } else { current }
            }
        };
    }

    fn show_feedback(&mut self, text: String, ticks: u32) {
        self.feedback = Some(Feedback {
            text,
            ticks_left: ticks,
        });
    }

    /// Advance animations and expire transient state. Called on every
    /// poll timeout.
    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        if let Some(feedback) = &mut self.feedback {
            feedback.ticks_left = feedback.ticks_left.saturating_sub(1);
            if feedback.ticks_left == 0 {
                self.feedback = None;
            }
        }
        self.celebration_ticks = self.celebration_ticks.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, ShapeKind};
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let config = CliConfig {
            data_dir: dir.path().to_path_buf(),
            child_name: "Robin".to_string(),
            start_screen: Screen::Home,
            reset_progress: false,
        };
        (dir, App::new(config))
    }

    #[test]
    fn test_starts_on_home_with_greeting() {
        let (_dir, app) = test_app();
        assert_eq!(app.screen, Screen::Home);
        let feedback = app.feedback.expect("greeting shown at startup");
        assert!(feedback.text.contains("Robin"));
    }

    #[test]
    fn test_navigate_to_each_screen() {
        let (_dir, mut app) = test_app();
        for key in ["shapes", "colors", "numbers", "alphabet", "home"] {
            let screen = Screen::from_key(key).unwrap();
            app.handle_command(Command::NavigateTo(screen));
            assert_eq!(app.screen, screen);
        }
    }

    #[test]
    fn test_navigate_home_from_any_screen() {
        let (_dir, mut app) = test_app();
        for section in Section::ALL {
            app.navigate_to(Screen::Activity(section));
            app.handle_command(Command::NavigateHome);
            assert_eq!(app.screen, Screen::Home);
        }
    }

    #[test]
    fn test_navigation_resets_selection() {
        let (_dir, mut app) = test_app();
        app.navigate_to(Screen::Activity(Section::Numbers));
        app.handle_command(Command::MoveSelection(Direction::Right));
        assert_eq!(app.selected, 1);
        app.navigate_to(Screen::Activity(Section::Colors));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_record_then_navigate_shows_count() {
        let (_dir, mut app) = test_app();
        for _ in 0..3 {
            app.handle_command(Command::Record(Interaction::Number(5)));
        }
        app.handle_command(Command::NavigateTo(Screen::Activity(Section::Numbers)));
        assert_eq!(app.screen, Screen::Activity(Section::Numbers));
        assert_eq!(app.displayed_count(), Some(3));
        assert_eq!(app.progress.stars(), 3);
    }

    #[test]
    fn test_displayed_count_is_none_on_home() {
        let (_dir, app) = test_app();
        assert_eq!(app.displayed_count(), None);
    }

    #[test]
    fn test_record_shows_feedback_and_confetti() {
        let (_dir, mut app) = test_app();
        app.handle_command(Command::Record(Interaction::Shape(ShapeKind::Circle)));
        let feedback = app.feedback.as_ref().unwrap();
        assert!(feedback.text.contains("circle"));
        assert!(app.celebration_ticks > 0);
    }

    #[test]
    fn test_milestone_celebration_at_ten() {
        let (_dir, mut app) = test_app();
        for _ in 0..10 {
            app.handle_command(Command::Record(Interaction::Letter('B')));
        }
        let feedback = app.feedback.as_ref().unwrap();
        assert!(feedback.text.contains("10 STARS"));
        assert!(feedback.text.contains("Robin"));
        assert_eq!(app.celebration_ticks, 40);
    }

    #[test]
    fn test_selection_clamps_at_edges() {
        let (_dir, mut app) = test_app();
        app.navigate_to(Screen::Activity(Section::Shapes));
        app.handle_command(Command::MoveSelection(Direction::Left));
        assert_eq!(app.selected, 0);
        app.handle_command(Command::MoveSelection(Direction::Up));
        assert_eq!(app.selected, 0);
        for _ in 0..20 {
            app.handle_command(Command::MoveSelection(Direction::Right));
        }
        assert_eq!(app.selected, 5);
    }

    #[test]
    fn test_selection_moves_by_row() {
        let (_dir, mut app) = test_app();
        // Numbers grid is 5 columns wide
        app.navigate_to(Screen::Activity(Section::Numbers));
        app.handle_command(Command::MoveSelection(Direction::Down));
        assert_eq!(app.selected, 5);
        app.handle_command(Command::MoveSelection(Direction::Up));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_selection_ignored_on_home() {
        let (_dir, mut app) = test_app();
        app.handle_command(Command::MoveSelection(Direction::Down));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_quit_command() {
        let (_dir, mut app) = test_app();
        assert!(!app.should_quit);
        app.handle_command(Command::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_tick_expires_feedback() {
        let (_dir, mut app) = test_app();
        app.handle_command(Command::Record(Interaction::Number(1)));
        for _ in 0..100 {
            app.on_tick();
        }
        assert_eq!(app.feedback, None);
        assert_eq!(app.celebration_ticks, 0);
    }

    #[test]
    fn test_reset_flag_clears_saved_progress() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig {
            data_dir: dir.path().to_path_buf(),
            child_name: "Robin".to_string(),
            start_screen: Screen::Home,
            reset_progress: false,
        };
        let mut app = App::new(config);
        app.handle_command(Command::Record(Interaction::Number(1)));
        drop(app);

        let config = CliConfig {
            data_dir: dir.path().to_path_buf(),
            child_name: "Robin".to_string(),
            start_screen: Screen::Home,
            reset_progress: true,
        };
        let app = App::new(config);
        assert_eq!(app.progress.stars(), 0);
    }
}
