use std::io::Write;
use std::sync::Arc;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::commands::{self, Command, HELP};
use crate::error::AppError;
use crate::i18n::Lang;
use crate::orchestrator::{FlipOrchestrator, Trigger};
use crate::presenter::Presenter;

/// Reads commands line by line and forwards them as triggers until QUIT or
/// end of input. Messages start on a fresh line so they never overwrite the
/// card frame.
pub async fn run<I, W, P, R>(
    input: I,
    mut out: W,
    orchestrator: Arc<FlipOrchestrator<P, R>>,
    triggers: UnboundedSender<Trigger>,
    mut lang: Lang,
) -> Result<(), AppError>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    P: Presenter,
    R: Rng + Send,
{
    let mut lines = input.lines();
    writeln!(out, "\n{HELP}")?;

    while let Some(line) = lines.next_line().await? {
        let command = commands::parse(&line);
        debug!(?command, "shell command");
        match command {
            Command::Draw => send(&triggers, Trigger::Draw),
            Command::Reset => send(&triggers, Trigger::Reset),
            Command::Restart => {
                writeln!(out, "\n{}", lang.t("restart.title"))?;
                writeln!(out, "{}", lang.t("restart.content"))?;
                write!(
                    out,
                    "[{} / {}] ",
                    lang.t("restart.yes"),
                    lang.t("restart.no")
                )?;
                out.flush()?;
                let answer = lines.next_line().await?.unwrap_or_default();
                if commands::is_affirmative(&answer, lang) {
                    send(&triggers, Trigger::ReshuffleConfirmed);
                } else {
                    debug!("restart declined");
                }
            }
            Command::Lang(next) => {
                lang = next;
                info!(lang = %lang, "language switched");
                let name = match lang {
                    Lang::Et => lang.t("lang.estonian"),
                    Lang::En => lang.t("lang.english"),
                };
                writeln!(out, "\n{name}")?;
            }
            Command::Status => {
                let counter = orchestrator.counter();
                writeln!(out, "\n{} / {}", counter.position, counter.remaining)?;
            }
            Command::Help => writeln!(out, "\n{HELP}")?,
            Command::Quit => break,
            Command::Usage(usage) => writeln!(out, "\n{usage}")?,
            Command::Unknown(cmd) => writeln!(out, "\nUnknown command: {cmd}")?,
        }
        out.flush()?;
    }

    Ok(())
}

fn send(triggers: &UnboundedSender<Trigger>, trigger: Trigger) {
    if triggers.send(trigger).is_err() {
        debug!(?trigger, "trigger dropped, orchestrator stopped");
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc::unbounded_channel;

    use super::*;
    use crate::card::Card;
    use crate::deck::Deck;
    use crate::presenter::HeadlessPresenter;

    fn orchestrator() -> Arc<FlipOrchestrator<HeadlessPresenter>> {
        let cards = ["a", "b"].map(|id| Card::new(id, format!("{id}.png")));
        Arc::new(FlipOrchestrator::new(
            Deck::seeded(cards, 1),
            HeadlessPresenter::new(),
        ))
    }

    async fn drive(script: &str, lang: Lang) -> (Vec<Trigger>, String) {
        let (tx, mut rx) = unbounded_channel();
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, orchestrator(), tx, lang)
            .await
            .unwrap();
        let mut sent = Vec::new();
        while let Ok(trigger) = rx.try_recv() {
            sent.push(trigger);
        }
        (sent, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn forwards_draw_and_reset() {
        let (sent, _) = drive("\ndraw\nreset\n", Lang::En).await;
        assert_eq!(sent, [Trigger::Draw, Trigger::Draw, Trigger::Reset]);
    }

    #[tokio::test]
    async fn restart_needs_confirmation() {
        let (sent, out) = drive("restart\noops\nrestart\nyeap\n", Lang::En).await;
        assert_eq!(sent, [Trigger::ReshuffleConfirmed]);
        assert!(out.contains("Are you sure you want to restart?"));
    }

    #[tokio::test]
    async fn language_switch_changes_prompt() {
        let (sent, out) = drive("lang et\nrestart\njap\n", Lang::En).await;
        assert_eq!(sent, [Trigger::ReshuffleConfirmed]);
        assert!(out.contains("Segame kaardid uuesti ära?"));
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let (sent, out) = drive("quit\ndraw\n", Lang::En).await;
        assert!(sent.is_empty());
        assert!(!out.contains("Unknown"));
    }

    #[tokio::test]
    async fn status_and_unknown() {
        let (_, out) = drive("status\nfoo\n", Lang::En).await;
        assert!(out.contains("0 / 2"));
        assert!(out.contains("Unknown command: foo"));
    }
}
