use tracing::{debug, info};

use crate::scroll::ScrollHost;
use crate::theme::{Palette, ThemeState};
use crate::view::View;

/// User intents, decoded from terminal events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    /// Scroll by a number of rows; negative is up
    Scroll(isize),
    PageUp,
    PageDown,
    Home,
    End,
    TogglePause,
    ToggleDebug,
    ToggleWireframe,
    Reset,
    ActivateContact,
    Resize { cols: u16, rows: u16 },
    Quit,
}

/// Application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Current display mode
    pub theme: ThemeState,
    /// Scroll position of the sections
    pub scroll: ScrollHost,
    /// Animation clock in seconds; frozen while paused
    elapsed: f64,
    /// Simulation paused
    pub paused: bool,
    /// Enable debug mode
    pub debug: bool,
    /// Wireframe mode enabled
    pub wireframe: bool,
    /// One-line message at the bottom of the screen
    pub status: Option<String>,
    pub quit: bool,
    cols: u16,
    rows: u16,
}

impl AppState {
    pub fn new(cols: u16, rows: u16) -> Self {
        AppState {
            theme: ThemeState::default(),
            scroll: ScrollHost::new(rows as usize, View::content_rows(rows as usize)),
            elapsed: 0.0,
            paused: false,
            debug: false,
            wireframe: false,
            status: None,
            quit: false,
            cols,
            rows,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Jumps the animation clock, e.g. for snapshots
    pub fn set_elapsed(&mut self, elapsed: f64) {
        self.elapsed = elapsed.max(0.0);
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// Advances the animation clock by `dt` seconds unless paused
    pub fn tick(&mut self, dt: f64) {
        if !self.paused && dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    pub fn apply(&mut self, action: Action, contact_address: &str) {
        match action {
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                info!(theme = self.theme.name(), "theme toggled");
            }
            Action::Scroll(delta) => self.scroll.scroll_by(delta),
            Action::PageUp => self.scroll.page_up(),
            Action::PageDown => self.scroll.page_down(),
            Action::Home => self.scroll.home(),
            Action::End => self.scroll.end(),
            Action::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
            }
            Action::ToggleDebug => self.debug = !self.debug,
            Action::ToggleWireframe => {
                if !self.paused {
                    self.wireframe = !self.wireframe;
                }
            }
            Action::Reset => {
                if !self.paused {
                    // Reset to default values; the theme is left alone
                    self.elapsed = 0.0;
                    self.wireframe = false;
                    self.status = None;
                    self.scroll.home();
                }
            }
            Action::ActivateContact => {
                info!(address = contact_address, "contact requested");
                self.status = Some(format!("mailto:{contact_address}  (open it in your mail client)"));
            }
            Action::Resize { cols, rows } => {
                debug!(cols, rows, "terminal resized");
                self.cols = cols;
                self.rows = rows;
                self.scroll
                    .resize(rows as usize, View::content_rows(rows as usize));
            }
            Action::Quit => self.quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::{advance, AnimatorConfig};
    use crate::scroll::ScrollProgress;

    const CONTACT: &str = "me@example.com";

    #[test]
    fn starts_dark_at_the_top() {
        let state = AppState::new(80, 24);
        assert_eq!(state.theme, ThemeState::Dark);
        assert_eq!(state.scroll.progress(), ScrollProgress::TOP);
        assert_eq!(state.elapsed(), 0.0);
        assert_eq!(state.scroll.max_offset(), 72);
    }

    #[test]
    fn toggle_swaps_palette_but_not_transforms() {
        let config = AnimatorConfig::default();
        let mut state = AppState::new(80, 24);
        let before = advance(&config, state.elapsed(), state.scroll.progress(), state.theme);
        let dark = state.palette();

        state.apply(Action::ToggleTheme, CONTACT);
        let after = advance(&config, state.elapsed(), state.scroll.progress(), state.theme);
        assert_eq!(before, after);
        assert_ne!(state.palette(), dark);

        state.apply(Action::ToggleTheme, CONTACT);
        assert_eq!(state.palette(), dark);
    }

    #[test]
    fn scrolling_to_the_end_reaches_max_offset() {
        let config = AnimatorConfig::default();
        let mut state = AppState::new(80, 24);
        state.apply(Action::End, CONTACT);
        let tr = advance(&config, 0.0, state.scroll.progress(), state.theme);
        assert_eq!(tr.group_offset_y, config.max_group_offset());
        state.apply(Action::Home, CONTACT);
        assert_eq!(state.scroll.offset(), 0);
    }

    #[test]
    fn pause_freezes_the_clock() {
        let mut state = AppState::new(80, 24);
        state.tick(0.5);
        state.apply(Action::TogglePause, CONTACT);
        state.tick(10.0);
        assert_eq!(state.elapsed(), 0.5);
        state.apply(Action::TogglePause, CONTACT);
        state.tick(0.25);
        assert_eq!(state.elapsed(), 0.75);
    }

    #[test]
    fn reset_returns_to_baseline() {
        let mut state = AppState::new(80, 24);
        state.tick(3.0);
        state.apply(Action::PageDown, CONTACT);
        state.apply(Action::ToggleWireframe, CONTACT);
        state.apply(Action::Reset, CONTACT);
        assert_eq!(state.elapsed(), 0.0);
        assert!(!state.wireframe);
        assert_eq!(state.scroll.offset(), 0);
    }

    #[test]
    fn reset_and_wireframe_wait_for_unpause() {
        let mut state = AppState::new(80, 24);
        state.tick(2.0);
        state.apply(Action::PageDown, CONTACT);
        let offset = state.scroll.offset();
        state.apply(Action::TogglePause, CONTACT);

        state.apply(Action::Reset, CONTACT);
        state.apply(Action::ToggleWireframe, CONTACT);
        assert_eq!(state.elapsed(), 2.0);
        assert_eq!(state.scroll.offset(), offset);
        assert!(!state.wireframe);

        state.apply(Action::TogglePause, CONTACT);
        state.apply(Action::ToggleWireframe, CONTACT);
        assert!(state.wireframe);
    }

    #[test]
    fn contact_shows_mailto() {
        let mut state = AppState::new(80, 24);
        state.apply(Action::ActivateContact, CONTACT);
        assert!(state.status.as_deref().unwrap().starts_with("mailto:me@example.com"));
    }

    #[test]
    fn resize_rescales_scroll_range() {
        let mut state = AppState::new(80, 24);
        state.apply(Action::End, CONTACT);
        state.apply(Action::Resize { cols: 100, rows: 30 }, CONTACT);
        assert_eq!((state.cols(), state.rows()), (100, 30));
        assert_eq!(state.scroll.max_offset(), 90);
        assert_eq!(state.scroll.progress(), ScrollProgress::BOTTOM);
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = AppState::new(80, 24);
        state.apply(Action::Quit, CONTACT);
        assert!(state.quit);
    }
}
