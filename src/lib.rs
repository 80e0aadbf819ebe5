//! A single shuffled deck revealed one card at a time through a two-phase
//! flip across two alternating card slots.

pub mod assets;
pub mod card;
pub mod commands;
pub mod config;
pub mod deck;
pub mod easing;
pub mod error;
pub mod i18n;
pub mod orchestrator;
pub mod presenter;
pub mod shell;
pub mod slots;
pub mod telemetry;
pub mod terminal;

pub use card::{Card, CardId};
pub use config::{Config, ResetStyle, Timings};
pub use deck::Deck;
pub use error::AppError;
pub use orchestrator::{AnimationPhase, FlipOrchestrator, Outcome, Trigger};
pub use presenter::{Counter, HeadlessPresenter, Presenter, RenderEvent};
