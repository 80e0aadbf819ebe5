//! Shared helpers for the integration suites.

use flipdeck::{Card, Deck};
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet by default; set `TEST_LOG` (or `RUST_LOG`) to see orchestrator traces.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

#[allow(dead_code)]
pub fn cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("cards/{i:02}.png"), format!("/assets/{i:02}.png")))
        .collect()
}

#[allow(dead_code)]
pub fn deck(n: usize, seed: u64) -> Deck {
    Deck::seeded(cards(n), seed)
}
