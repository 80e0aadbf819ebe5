//! Turns draw requests into flip sequences across the two card slots.
//!
//! At most one sequence is in flight. The phase is checked and set under the
//! state lock before the first suspension point, so a trigger that arrives
//! while a sequence runs is dropped rather than queued.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::card::Card;
use crate::config::{ResetStyle, Timings};
use crate::deck::Deck;
use crate::presenter::{Counter, Presenter};
use crate::slots::{Axis, FLIPPED, FULL_TURN, MIRRORED, RESTING, SlotId, SlotPair, Tween};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Flipping,
    Shuffling,
}

/// Inbound user intents, as delivered by the UI wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Tap or click on the card.
    Draw,
    /// The reset control.
    Reset,
    /// The restart dialog was affirmed.
    ReshuffleConfirmed,
}

/// How a trigger was resolved. None of these is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Revealed(Card),
    /// Another sequence was in flight; the trigger was dropped.
    Busy,
    /// No card could be drawn even after a reshuffle.
    Empty,
}

impl Outcome {
    pub fn card(&self) -> Option<&Card> {
        match self {
            Outcome::Revealed(card) => Some(card),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct State<R> {
    deck: Deck<R>,
    phase: AnimationPhase,
    slots: SlotPair,
    counter: Counter,
}

impl<R> State<R> {
    fn deck_counter(&self) -> Counter {
        Counter {
            position: self.deck.position(),
            remaining: self.deck.remaining(),
        }
    }
}

/// What to do with the deck once a sequence is admitted.
#[derive(Debug, Clone, Copy)]
enum Preparation {
    ResetIfExhausted,
    Reset,
}

pub struct FlipOrchestrator<P, R = StdRng> {
    state: Mutex<State<R>>,
    presenter: P,
    timings: Timings,
    reset_style: ResetStyle,
}

impl<P: Presenter, R: Rng + Send> FlipOrchestrator<P, R> {
    pub fn new(deck: Deck<R>, presenter: P) -> Self {
        let counter = Counter {
            position: deck.position(),
            remaining: deck.remaining(),
        };
        Self {
            state: Mutex::new(State {
                deck,
                phase: AnimationPhase::Idle,
                slots: SlotPair::default(),
                counter,
            }),
            presenter,
            timings: Timings::default(),
            reset_style: ResetStyle::default(),
        }
    }

    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_reset_style(mut self, reset_style: ResetStyle) -> Self {
        self.reset_style = reset_style;
        self
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn phase(&self) -> AnimationPhase {
        self.state().phase
    }

    /// Last counter value published to the presenter.
    pub fn counter(&self) -> Counter {
        self.state().counter
    }

    pub fn active_slot(&self) -> SlotId {
        self.state().slots.active()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state().deck.is_exhausted()
    }

    /// Current cycle's card order, as the deck holds it.
    pub fn deck_order(&self) -> Vec<Card> {
        self.state().deck.order().to_vec()
    }

    /// Shows the first card face up without animating, as at page load.
    pub fn reveal_initial(&self) -> Outcome {
        let mut state = self.state();
        if state.phase != AnimationPhase::Idle {
            debug!(phase = ?state.phase, "initial reveal dropped, sequence in flight");
            return Outcome::Busy;
        }
        if state.deck.is_exhausted() {
            state.deck.reset();
        }
        let Some(card) = state.deck.draw() else {
            debug!("initial reveal skipped, deck has no cards");
            return Outcome::Empty;
        };

        let active = state.slots.active();
        self.presenter.set_image(active, &card);
        self.presenter.set_rotation(active, Axis::Y, RESTING);
        self.presenter.set_visible(active, true);
        self.presenter.set_visible(active.other(), false);
        state.counter = state.deck_counter();
        self.presenter.show_counter(state.counter);

        info!(card = %card, position = state.counter.position, "initial card shown");
        Outcome::Revealed(card)
    }

    pub async fn trigger(&self, trigger: Trigger) -> Outcome {
        match trigger {
            Trigger::Draw => self.request_draw().await,
            Trigger::Reset => self.request_reset().await,
            Trigger::ReshuffleConfirmed => self.confirm_reshuffle().await,
        }
    }

    /// Flips to the next card, reshuffling first if the deck is exhausted.
    pub async fn request_draw(&self) -> Outcome {
        self.flip(Preparation::ResetIfExhausted, AnimationPhase::Flipping)
            .await
    }

    /// Reshuffles and deals a fresh first card with the configured visual.
    pub async fn request_reset(&self) -> Outcome {
        let phase = match self.reset_style {
            ResetStyle::Flip => AnimationPhase::Flipping,
            ResetStyle::Spin => AnimationPhase::Shuffling,
        };
        self.flip(Preparation::Reset, phase).await
    }

    /// Reshuffles unconditionally and deals with the spin visual.
    pub async fn confirm_reshuffle(&self) -> Outcome {
        self.flip(Preparation::Reset, AnimationPhase::Shuffling).await
    }

    /// Consumes triggers until the sender side closes. Each trigger runs in
    /// its own task so a long sequence never stalls the channel. Returns only
    /// once every admitted sequence has finished.
    pub async fn run(self: Arc<Self>, mut triggers: UnboundedReceiver<Trigger>)
    where
        P: 'static,
        R: 'static,
    {
        let mut sequences = JoinSet::new();
        while let Some(trigger) = triggers.recv().await {
            debug!(?trigger, "trigger received");
            while sequences.try_join_next().is_some() {}
            let orchestrator = Arc::clone(&self);
            sequences.spawn(async move {
                orchestrator.trigger(trigger).await;
            });
        }
        debug!(in_flight = sequences.len(), "trigger channel closed");
        while sequences.join_next().await.is_some() {}
    }

    async fn flip(&self, preparation: Preparation, phase: AnimationPhase) -> Outcome {
        let (card, slots) = match self.admit(preparation, phase) {
            Ok(admitted) => admitted,
            Err(outcome) => return outcome,
        };
        let active = slots.active();
        let standby = slots.standby();
        let spin = phase == AnimationPhase::Shuffling;
        debug!(card = %card, %active, %standby, spin, "sequence admitted");

        // phase A: the active face turns away, leaving the deck back in view
        self.presenter
            .animate(Tween {
                slot: active,
                axis: Axis::Y,
                from: RESTING,
                to: FLIPPED,
                duration: self.timings.flip,
                easing: self.timings.flip_easing,
            })
            .await;

        if spin {
            self.presenter
                .animate(Tween {
                    slot: active,
                    axis: Axis::Z,
                    from: RESTING,
                    to: FULL_TURN,
                    duration: self.timings.spin,
                    easing: self.timings.spin_easing,
                })
                .await;
            debug!(%active, "reshuffle spin finished");
        }

        // Both faces show their backs here, so the swap is invisible.
        self.presenter.set_image(standby, &card);
        self.presenter.set_rotation(standby, Axis::Y, MIRRORED);
        self.presenter.set_visible(standby, true);
        self.presenter.set_visible(active, false);
        if spin {
            self.presenter.set_rotation(active, Axis::Z, RESTING);
        }

        tokio::time::sleep(self.timings.hold).await;

        // phase B: the standby face turns toward the viewer
        self.presenter
            .animate(Tween {
                slot: standby,
                axis: Axis::Y,
                from: MIRRORED,
                to: RESTING,
                duration: self.timings.flip,
                easing: self.timings.flip_easing,
            })
            .await;

        self.presenter.set_rotation(active, Axis::Y, RESTING);

        let counter = self.finish();
        info!(
            card = %card,
            position = counter.position,
            remaining = counter.remaining,
            reshuffled = spin,
            "card revealed"
        );
        Outcome::Revealed(card)
    }

    /// Check-and-set of the phase plus the deck work that decides whether
    /// the sequence runs at all. Never suspends.
    fn admit(
        &self,
        preparation: Preparation,
        phase: AnimationPhase,
    ) -> Result<(Card, SlotPair), Outcome> {
        let mut state = self.state();
        if state.phase != AnimationPhase::Idle {
            debug!(current = ?state.phase, requested = ?phase, "trigger dropped, sequence in flight");
            return Err(Outcome::Busy);
        }

        match preparation {
            Preparation::ResetIfExhausted if state.deck.is_exhausted() => {
                debug!("deck exhausted, reshuffling before draw");
                state.deck.reset();
            }
            Preparation::ResetIfExhausted => {}
            Preparation::Reset => state.deck.reset(),
        }

        let Some(card) = state.deck.draw() else {
            debug!("no card to draw, deck is empty");
            return Err(Outcome::Empty);
        };
        state.phase = phase;
        Ok((card, state.slots))
    }

    fn finish(&self) -> Counter {
        let mut state = self.state();
        state.slots.swap();
        state.counter = state.deck_counter();
        self.presenter.show_counter(state.counter);
        state.phase = AnimationPhase::Idle;
        state.counter
    }

    fn state(&self) -> MutexGuard<'_, State<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
