use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::card::Card;
use crate::slots::{Axis, Rotation, SlotId, Tween};

/// Position and remaining count published after every completed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counter {
    pub position: usize,
    pub remaining: usize,
}

/// Rendering backend driven by the orchestrator.
///
/// Instant operations (`set_*`, `show_counter`) must take effect before they
/// return. `animate` resolves only once the tween's end state is committed.
#[async_trait]
pub trait Presenter: Send + Sync {
    async fn animate(&self, tween: Tween);

    fn set_rotation(&self, slot: SlotId, axis: Axis, rotation: Rotation);

    fn set_image(&self, slot: SlotId, card: &Card);

    fn set_visible(&self, slot: SlotId, visible: bool);

    fn show_counter(&self, counter: Counter);
}

/// Everything a presenter was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    AnimationStarted(Tween),
    AnimationFinished(SlotId),
    Rotation(SlotId, Axis, Rotation),
    Image(SlotId, Card),
    Visible(SlotId, bool),
    Counter(Counter),
}

/// Presenter with no output device. Honours tween durations on the tokio
/// clock and keeps a log of every request.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPresenter {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.log().clone()
    }

    pub fn clear(&self) {
        self.log().clear();
    }

    fn log(&self) -> std::sync::MutexGuard<'_, Vec<RenderEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, event: RenderEvent) {
        self.log().push(event);
    }
}

#[async_trait]
impl Presenter for HeadlessPresenter {
    async fn animate(&self, tween: Tween) {
        self.push(RenderEvent::AnimationStarted(tween));
        tokio::time::sleep(tween.duration).await;
        self.push(RenderEvent::Rotation(tween.slot, tween.axis, tween.to));
        self.push(RenderEvent::AnimationFinished(tween.slot));
    }

    fn set_rotation(&self, slot: SlotId, axis: Axis, rotation: Rotation) {
        self.push(RenderEvent::Rotation(slot, axis, rotation));
    }

    fn set_image(&self, slot: SlotId, card: &Card) {
        self.push(RenderEvent::Image(slot, card.clone()));
    }

    fn set_visible(&self, slot: SlotId, visible: bool) {
        self.push(RenderEvent::Visible(slot, visible));
    }

    fn show_counter(&self, counter: Counter) {
        self.push(RenderEvent::Counter(counter));
    }
}
