use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::easing::Easing;
use crate::i18n::Lang;

/// Visual used when the reset control is pressed. A confirmed reshuffle
/// always spins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResetStyle {
    #[default]
    Flip,
    Spin,
}

/// Fixed durations and curves of the flip sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// Length of each flip phase.
    pub flip: Duration,
    /// Pause between the slot swap and phase B.
    pub hold: Duration,
    /// Length of the reshuffle spin.
    pub spin: Duration,
    pub flip_easing: Easing,
    pub spin_easing: Easing,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            flip: Duration::from_millis(500),
            hold: Duration::from_millis(180),
            spin: Duration::from_millis(700),
            flip_easing: Easing::STANDARD,
            spin_easing: Easing::BOUNCY,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "flipdeck")]
#[command(about = "Draw cards one at a time from a single shuffled deck")]
pub struct Config {
    /// Directory holding the card images
    #[arg(long, env = "FLIPDECK_ASSETS", default_value = "assets/cards")]
    pub assets: PathBuf,

    /// Origin used to build absolute image URLs for the image CDN; no rewrite when unset
    #[arg(long, env = "FLIPDECK_CDN_BASE")]
    pub cdn_base: Option<String>,

    /// Interface language
    #[arg(long, env = "FLIPDECK_LANG", value_enum, default_value_t = Lang::Et)]
    pub lang: Lang,

    /// Visual for the reset command
    #[arg(long, env = "FLIPDECK_RESET_STYLE", value_enum, default_value_t = ResetStyle::Flip)]
    pub reset_style: ResetStyle,

    /// Duration of each flip phase in milliseconds
    #[arg(long, default_value_t = 500)]
    pub flip_ms: u64,

    /// Pause before the reveal in milliseconds
    #[arg(long, default_value_t = 180)]
    pub hold_ms: u64,

    /// Duration of the reshuffle spin in milliseconds
    #[arg(long, default_value_t = 700)]
    pub spin_ms: u64,

    /// Seed for a reproducible deck
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn timings(&self) -> Timings {
        Timings {
            flip: Duration::from_millis(self.flip_ms),
            hold: Duration::from_millis(self.hold_ms),
            spin: Duration::from_millis(self.spin_ms),
            ..Timings::default()
        }
    }
}
