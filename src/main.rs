use std::sync::Arc;

use clap::Parser;
use flipdeck::terminal::TerminalPresenter;
use flipdeck::{AppError, Config, Deck, FlipOrchestrator, assets, shell, telemetry};
use tokio::io::BufReader;
use tokio::sync::mpsc::unbounded_channel;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    telemetry::init_tracing();
    let config = Config::parse();

    if let Err(err) = run(config).await {
        error!(error = %err, "flipdeck stopped");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let cards = assets::collect(&config.assets, config.cdn_base.as_deref())?;
    if cards.is_empty() {
        warn!(dir = %config.assets.display(), "no card images found, draws will do nothing");
    }

    let deck = match config.seed {
        Some(seed) => Deck::seeded(cards, seed),
        None => Deck::new(cards),
    };
    info!(cards = deck.len(), reset_style = ?config.reset_style, lang = %config.lang, "deck ready");

    let orchestrator = Arc::new(
        FlipOrchestrator::new(deck, TerminalPresenter::stdout())
            .with_timings(config.timings())
            .with_reset_style(config.reset_style),
    );
    orchestrator.reveal_initial();

    let (triggers, inbox) = unbounded_channel();
    let listener = tokio::spawn(Arc::clone(&orchestrator).run(inbox));

    let stdin = BufReader::new(tokio::io::stdin());
    let result = shell::run(
        stdin,
        std::io::stdout(),
        Arc::clone(&orchestrator),
        triggers,
        config.lang,
    )
    .await;

    if let Err(err) = listener.await {
        warn!(error = %err, "trigger listener ended abnormally");
    }
    orchestrator.presenter().newline();
    result
}
