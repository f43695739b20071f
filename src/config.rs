//! Command line flags and their validated form.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::animator::AnimatorConfig;
use crate::content::DEFAULT_CONTACT_ADDRESS;
use crate::error::{Error, Result};
use crate::geometry::StarfieldConfig;
use crate::scroll::ScrollProgress;
use crate::theme::ThemeState;

/// Smallest terminal the layout can work with
pub const MIN_COLS: u16 = 20;
pub const MIN_ROWS: u16 = 6;

const MAX_STARS: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeState {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeState::Dark,
            ThemeArg::Light => ThemeState::Light,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "folio3d", version, about = "Parallax 3D portfolio page for the terminal")]
pub struct Cli {
    /// Frames per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Stars in the background field (dark mode only)
    #[arg(long, default_value_t = 800)]
    pub stars: usize,

    /// Seed for the star field
    #[arg(long, default_value_t = 7)]
    pub seed: u64,

    /// Pages the background travels while scrolling top to bottom
    #[arg(long, default_value_t = 3.0)]
    pub pages: f64,

    /// World units per page of scrolling
    #[arg(long, default_value_t = 1.0)]
    pub page_distance: f64,

    /// Obelisk spin in radians per second
    #[arg(long, default_value_t = 0.2)]
    pub spin_speed: f64,

    /// Address shown by the contact button
    #[arg(long, default_value = DEFAULT_CONTACT_ADDRESS)]
    pub contact: String,

    /// Print a single frame to stdout and exit
    #[arg(long)]
    pub snapshot: bool,

    /// Snapshot: animation time in seconds
    #[arg(long, default_value_t = 0.0)]
    pub time: f64,

    /// Snapshot: scroll progress between 0 and 1
    #[arg(long, default_value_t = 0.0)]
    pub scroll: f64,

    /// Snapshot: display mode
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    pub theme: ThemeArg,

    /// Snapshot: width in columns (defaults to the terminal width)
    #[arg(long)]
    pub width: Option<u16>,

    /// Snapshot: height in rows (defaults to the terminal height)
    #[arg(long)]
    pub height: Option<u16>,

    /// Write logs to this file; `RUST_LOG` sets the filter
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Single-frame render request
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotConfig {
    pub time: f64,
    pub scroll: ScrollProgress,
    pub theme: ThemeState,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub animator: AnimatorConfig,
    pub starfield: StarfieldConfig,
    pub frame_interval: Duration,
    pub contact: String,
    pub snapshot: Option<SnapshotConfig>,
}

impl Cli {
    /// Checks ranges and builds the runtime configuration
    pub fn validate(&self) -> Result<Config> {
        if !(1..=240).contains(&self.fps) {
            return Err(invalid(format!("--fps must be between 1 and 240, got {}", self.fps)));
        }
        if self.stars > MAX_STARS {
            return Err(invalid(format!("--stars must be at most {MAX_STARS}, got {}", self.stars)));
        }
        non_negative("--pages", self.pages)?;
        non_negative("--page-distance", self.page_distance)?;
        non_negative("--spin-speed", self.spin_speed)?;
        if self.contact.trim().is_empty() {
            return Err(invalid("--contact must not be empty".to_string()));
        }

        let snapshot = if self.snapshot {
            non_negative("--time", self.time)?;
            if !(0.0..=1.0).contains(&self.scroll) {
                return Err(invalid(format!("--scroll must be between 0 and 1, got {}", self.scroll)));
            }
            if self.width.is_some_and(|w| w < MIN_COLS) || self.height.is_some_and(|h| h < MIN_ROWS) {
                return Err(invalid(format!("snapshot size must be at least {MIN_COLS}x{MIN_ROWS}")));
            }
            Some(SnapshotConfig {
                time: self.time,
                scroll: ScrollProgress::new(self.scroll),
                theme: self.theme.into(),
                width: self.width,
                height: self.height,
            })
        } else {
            None
        };

        Ok(Config {
            animator: AnimatorConfig {
                spin_speed: self.spin_speed,
                pages: self.pages,
                page_distance: self.page_distance,
                ..AnimatorConfig::default()
            },
            starfield: StarfieldConfig {
                count: self.stars,
                seed: self.seed,
                ..StarfieldConfig::default()
            },
            frame_interval: Duration::from_secs_f64(1.0 / self.fps as f64),
            contact: self.contact.trim().to_string(),
            snapshot,
        })
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig(message)
}

fn non_negative(flag: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{flag} must be a non-negative number, got {value}")))
    }
}
