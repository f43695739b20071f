//! Crossterm front end: the frame loop, input dispatch and snapshot output.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use tracing::{debug, info, warn};

use crate::animator::{advance, SceneTransforms};
use crate::color::Rgb;
use crate::config::{Config, SnapshotConfig, MIN_COLS, MIN_ROWS};
use crate::error::{Error, Result};
use crate::graphics::Framebuffer;
use crate::input::action_for_event;
use crate::scene::{RenderOptions, Scene};
use crate::screen::Screen;
use crate::state::AppState;
use crate::view::{Layout, View, ViewContext};

/// Rolling frames-per-second estimate, refreshed once a second
struct FpsCounter {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl FpsCounter {
    fn new() -> Self {
        FpsCounter {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    fn frame(&mut self, now: Instant) {
        self.frames_since_last_update += 1;
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }
    }
}

/// Terminal size, preferring termsize and falling back to crossterm
fn terminal_size() -> Result<(u16, u16)> {
    match termsize::get() {
        Some(size) if size.cols > 0 && size.rows > 0 => Ok((size.cols, size.rows)),
        _ => Ok(terminal::size()?),
    }
}

fn check_size(cols: u16, rows: u16) -> Result<()> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(Error::TerminalTooSmall { cols, rows });
    }
    Ok(())
}

/// Renders the background and the overlay for the current state
fn compose(
    scene: &Scene,
    view: &mut View,
    framebuffer: &mut Framebuffer,
    state: &AppState,
    transforms: &SceneTransforms,
    hud: &[String],
    now: f64,
) -> (Screen, Layout) {
    let (cols, rows) = (state.cols() as usize, state.rows() as usize);
    let palette = state.palette();
    let options = RenderOptions {
        solid: !state.wireframe,
    };
    scene.render(framebuffer, cols, rows * 2, transforms, &palette, options);

    let mut screen = Screen::from_framebuffer(framebuffer);
    let layout = view.layout(&ViewContext {
        cols,
        rows,
        offset: state.scroll.offset(),
        palette: &palette,
        now,
        status: state.status.as_deref(),
        hud,
        paused: state.paused,
    });
    layout.paint(&mut screen);
    (screen, layout)
}

fn hud_lines(
    config: &Config,
    state: &AppState,
    transforms: &SceneTransforms,
    star_count: usize,
    fps: f64,
) -> Vec<String> {
    vec![
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        format!("Theme: {}", state.theme.name()),
        format!("Elapsed: {:.2}s", state.elapsed()),
        format!(
            "Scroll: {:.2} (row {}/{})",
            state.scroll.progress().value(),
            state.scroll.offset(),
            state.scroll.max_offset()
        ),
        format!(
            "Rotation X: {:.2}, Y: {:.2}, Z: {:.2}",
            transforms.obelisk_rotation[0],
            transforms.obelisk_rotation[1],
            transforms.obelisk_rotation[2]
        ),
        format!(
            "Float tilt X: {:.2}, Y: {:.2}, Z: {:.2}",
            transforms.float_rotation[0],
            transforms.float_rotation[1],
            transforms.float_rotation[2]
        ),
        format!("Pages: {}", config.animator.pages),
        format!(
            "Float: {:.2}, Group Y: {:.2}, Shell: {:.3}",
            transforms.float_y, transforms.group_offset_y, transforms.shell_scale
        ),
        format!("Stars: {star_count}"),
        format!("FPS: {fps:.2}"),
    ]
}

/// Runs the interactive page until the user quits
pub fn run(config: &Config) -> Result<()> {
    let (cols, rows) = terminal_size()?;
    check_size(cols, rows)?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    let result = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)
        .map_err(Error::from)
        .and_then(|_| event_loop(&mut stdout, config, cols, rows));

    // Always hand the terminal back, even when the loop failed
    let restored = execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)
        .and_then(|_| disable_raw_mode());
    result?;
    restored?;
    Ok(())
}

fn event_loop<W: Write>(out: &mut W, config: &Config, cols: u16, rows: u16) -> Result<()> {
    let scene = Scene::new(&config.starfield);
    let mut view = View::new(config.contact.clone());
    let mut state = AppState::new(cols, rows);
    let mut framebuffer = Framebuffer::new(0, 0, Rgb::BLACK);
    let mut fps = FpsCounter::new();
    let mut frames: u64 = 0;

    info!(cols, rows, stars = scene.star_count(), "starting");

    let started = Instant::now();
    let mut last_tick = started;
    while !state.quit {
        let now = Instant::now();
        state.tick(now.duration_since(last_tick).as_secs_f64());
        last_tick = now;

        let transforms = advance(
            &config.animator,
            state.elapsed(),
            state.scroll.progress(),
            state.theme,
        );
        let hud = if state.debug {
            hud_lines(config, &state, &transforms, scene.star_count(), fps.fps)
        } else {
            Vec::new()
        };
        let (screen, layout) = compose(
            &scene,
            &mut view,
            &mut framebuffer,
            &state,
            &transforms,
            &hud,
            started.elapsed().as_secs_f64(),
        );
        screen.write_to(out)?;
        out.flush()?;
        fps.frame(now);
        frames += 1;

        // Serve input until the next frame is due
        let deadline = now + config.frame_interval;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            let event = event::read()?;
            if let Some(action) = action_for_event(&event, &layout) {
                debug!(?action, "input");
                state.apply(action, view.contact_address());
            }
            if state.quit {
                break;
            }
        }
    }

    info!(frames, "shutting down");
    Ok(())
}

/// Renders one frame to stdout without taking over the terminal
pub fn snapshot(config: &Config, snapshot: &SnapshotConfig) -> Result<()> {
    let (cols, rows) = match (snapshot.width, snapshot.height) {
        (Some(cols), Some(rows)) => (cols, rows),
        (width, height) => {
            let (term_cols, term_rows) = terminal_size().unwrap_or_else(|err| {
                warn!(%err, "terminal size unavailable, using 80x24");
                (80, 24)
            });
            (width.unwrap_or(term_cols), height.unwrap_or(term_rows))
        }
    };
    check_size(cols, rows)?;

    let screen = render_snapshot(config, snapshot, cols, rows);
    let mut stdout = io::stdout().lock();
    screen.write_lines(&mut stdout)?;
    Ok(())
}

fn render_snapshot(config: &Config, snapshot: &SnapshotConfig, cols: u16, rows: u16) -> Screen {
    let scene = Scene::new(&config.starfield);
    let mut view = View::new(config.contact.clone());
    view.reveal_all();

    let mut state = AppState::new(cols, rows);
    state.theme = snapshot.theme;
    state.scroll.scroll_to(snapshot.scroll);
    state.set_elapsed(snapshot.time);

    let transforms = advance(
        &config.animator,
        state.elapsed(),
        state.scroll.progress(),
        state.theme,
    );
    let mut framebuffer = Framebuffer::new(0, 0, Rgb::BLACK);
    let (screen, _) = compose(
        &scene,
        &mut view,
        &mut framebuffer,
        &state,
        &transforms,
        &[],
        snapshot.time,
    );
    debug!(cols, rows, theme = state.theme.name(), "snapshot rendered");
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cli;
    use crate::scroll::ScrollProgress;
    use crate::theme::ThemeState;
    use clap::Parser;

    fn config() -> Config {
        Cli::parse_from(["folio3d", "--stars", "200"]).validate().unwrap()
    }

    fn snap(theme: ThemeState, scroll: f64) -> SnapshotConfig {
        SnapshotConfig {
            time: 1.0,
            scroll: ScrollProgress::new(scroll),
            theme,
            width: Some(80),
            height: Some(24),
        }
    }

    fn screen_text(screen: &Screen) -> String {
        (0..screen.rows()).map(|r| screen.row_text(r)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn snapshot_shows_nav_and_hero() {
        let screen = render_snapshot(&config(), &snap(ThemeState::Dark, 0.0), 80, 24);
        assert_eq!((screen.cols(), screen.rows()), (80, 24));
        let text = screen_text(&screen);
        assert!(screen.row_text(0).contains("KRISHNA.IO"));
        assert!(screen.row_text(0).contains("LIGHT MODE"));
        assert!(text.contains("IT'S ME, KRISHNA"));
    }

    #[test]
    fn snapshot_at_bottom_shows_contact() {
        let screen = render_snapshot(&config(), &snap(ThemeState::Light, 1.0), 80, 24);
        let text = screen_text(&screen);
        assert!(text.contains("INITIATE CONTACT"));
        assert!(text.contains("NAGPUR, INDIA"));
        assert!(screen.row_text(0).contains("DARK MODE"));
    }

    #[test]
    fn snapshot_background_follows_theme() {
        let brightness = |screen: &Screen| {
            let mut total = 0.0;
            for row in 0..screen.rows() {
                for col in 0..screen.cols() {
                    let cell = screen.cell(col, row);
                    total += (cell.fg.luminance() + cell.bg.luminance()) / 2.0;
                }
            }
            total / (screen.rows() * screen.cols()) as f64
        };
        let dark = render_snapshot(&config(), &snap(ThemeState::Dark, 0.0), 80, 24);
        let light = render_snapshot(&config(), &snap(ThemeState::Light, 0.0), 80, 24);
        assert!(brightness(&light) > 0.5);
        assert!(brightness(&dark) < brightness(&light));
    }

    #[test]
    fn too_small_is_rejected() {
        assert!(matches!(check_size(10, 3), Err(Error::TerminalTooSmall { cols: 10, rows: 3 })));
        assert!(check_size(MIN_COLS, MIN_ROWS).is_ok());
    }

    #[test]
    fn hud_reports_state() {
        let state = AppState::new(80, 24);
        let lines = hud_lines(&config(), &state, &SceneTransforms::default(), 800, 29.5);
        assert!(lines[0].starts_with("folio3d"));
        assert!(lines.iter().any(|l| l == "FPS: 29.50"));
        assert!(lines.iter().any(|l| l == "Theme: dark"));
    }

    #[test]
    fn fps_counter_updates_after_a_second() {
        let mut counter = FpsCounter::new();
        let start = counter.last_fps_calculation;
        for i in 1..=30 {
            counter.frame(start + std::time::Duration::from_millis(i * 40));
        }
        assert!(counter.fps > 0.0);
    }
}
