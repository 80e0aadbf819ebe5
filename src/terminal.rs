//! Text-terminal renderer: the visible slot is drawn as one line that
//! narrows and widens as the card turns over.

use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::warn;

use crate::card::Card;
use crate::presenter::{Counter, Presenter};
use crate::slots::{Axis, Rotation, SlotId, Tween};

const CARD_WIDTH: usize = 24;
const FRAME: Duration = Duration::from_millis(33);
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

#[derive(Debug, Clone, Default)]
struct SlotView {
    label: Option<String>,
    visible: bool,
    y: Rotation,
    z: Rotation,
}

#[derive(Debug, Default)]
struct View {
    a: SlotView,
    b: SlotView,
    counter: Counter,
}

impl View {
    fn slot_mut(&mut self, slot: SlotId) -> &mut SlotView {
        match slot {
            SlotId::A => &mut self.a,
            SlotId::B => &mut self.b,
        }
    }

    fn set_rotation(&mut self, slot: SlotId, axis: Axis, rotation: Rotation) {
        let view = self.slot_mut(slot);
        match axis {
            Axis::Y => view.y = rotation,
            Axis::Z => view.z = rotation,
        }
    }

    fn render(&self) -> String {
        let face = [&self.a, &self.b]
            .into_iter()
            .find(|slot| slot.visible)
            .map(render_slot)
            .unwrap_or_else(|| " ".repeat(CARD_WIDTH + 2));
        format!(
            "{face}  {} / {}",
            self.counter.position, self.counter.remaining
        )
    }
}

fn render_slot(slot: &SlotView) -> String {
    let facing = slot.y.degrees().to_radians().cos();
    let width = ((facing.abs() * CARD_WIDTH as f64).round() as usize).max(1);
    let pad = (CARD_WIDTH - width) / 2;

    let body: String = if facing > 0.0 {
        let label = slot.label.as_deref().unwrap_or("");
        let clipped: String = label.chars().take(width).collect();
        format!("{clipped:^width$}")
    } else {
        "░".repeat(width)
    };

    let spin = if slot.z.degrees() != 0.0 {
        let quarter = (slot.z.degrees().rem_euclid(180.0) / 45.0) as usize % SPINNER.len();
        SPINNER[quarter]
    } else {
        ' '
    };

    format!(
        "{spin}{}[{body}]{}",
        " ".repeat(pad),
        " ".repeat(CARD_WIDTH - width - pad)
    )
}

/// Short human label for a card: its file stem when the id is a path.
fn label(card: &Card) -> String {
    Path::new(card.id().as_str())
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| card.id().to_string())
}

pub struct TerminalPresenter<W = Stdout> {
    out: Mutex<W>,
    view: Mutex<View>,
}

impl TerminalPresenter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            view: Mutex::new(View::default()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn view(&self) -> MutexGuard<'_, View> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, change: impl FnOnce(&mut View)) {
        let line = {
            let mut view = self.view();
            change(&mut view);
            view.render()
        };
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = write!(out, "\r\x1b[2K{line}").and_then(|()| out.flush()) {
            warn!(error = %err, "failed to draw frame");
        }
    }

    /// Ends the current frame line so other output starts on a fresh one.
    pub fn newline(&self) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out).and_then(|()| out.flush()) {
            warn!(error = %err, "failed to end frame");
        }
    }
}

#[async_trait]
impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    async fn animate(&self, tween: Tween) {
        let started = Instant::now();
        let mut ticker = tokio::time::interval(FRAME);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let elapsed = started.elapsed();
            if elapsed >= tween.duration {
                break;
            }
            let t = elapsed.as_secs_f64() / tween.duration.as_secs_f64();
            self.update(|view| view.set_rotation(tween.slot, tween.axis, tween.at(t)));
        }
        self.update(|view| view.set_rotation(tween.slot, tween.axis, tween.to));
    }

    fn set_rotation(&self, slot: SlotId, axis: Axis, rotation: Rotation) {
        self.update(|view| view.set_rotation(slot, axis, rotation));
    }

    fn set_image(&self, slot: SlotId, card: &Card) {
        let label = label(card);
        self.update(|view| view.slot_mut(slot).label = Some(label));
    }

    fn set_visible(&self, slot: SlotId, visible: bool) {
        self.update(|view| view.slot_mut(slot).visible = visible);
    }

    fn show_counter(&self, counter: Counter) {
        self.update(|view| view.counter = counter);
    }
}
