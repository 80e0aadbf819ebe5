//! The two interchangeable card faces the orchestrator flips between.
//!
//! A single face rotated continuously past 180° on the flip axis shows
//! back-face compositing glitches on some renderers. Alternating two faces
//! keeps each one within a half turn while the viewer still sees one card
//! turning over.

use std::fmt;
use std::time::Duration;

use crate::easing::Easing;

/// Resting orientation on every axis.
pub const RESTING: Rotation = Rotation(0.0);
/// Where phase A leaves the active face: back of the deck toward the viewer.
pub const FLIPPED: Rotation = Rotation(-180.0);
/// Mirror of `FLIPPED`; the standby face waits here before phase B.
pub const MIRRORED: Rotation = Rotation(180.0);
/// One full in-plane turn, used by the reshuffle spin.
pub const FULL_TURN: Rotation = Rotation(360.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    A,
    B,
}

impl SlotId {
    pub fn other(self) -> SlotId {
        match self {
            SlotId::A => SlotId::B,
            SlotId::B => SlotId::A,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::A => f.write_str("A"),
            SlotId::B => f.write_str("B"),
        }
    }
}

/// Rotation axis. `Y` turns the card over, `Z` spins it in its own plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Y,
    Z,
}

/// Angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rotation(pub f64);

impl Rotation {
    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn lerp(self, to: Rotation, progress: f64) -> Rotation {
        Rotation(self.0 + (to.0 - self.0) * progress)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}°", self.0)
    }
}

/// One timed rotation of one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub slot: SlotId,
    pub axis: Axis,
    pub from: Rotation,
    pub to: Rotation,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    /// Angle at normalized time `t`.
    pub fn at(&self, t: f64) -> Rotation {
        self.from.lerp(self.to, self.easing.sample(t))
    }
}

/// Role assignment for the two slots. Starts with `A` active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPair {
    active: SlotId,
}

impl Default for SlotPair {
    fn default() -> Self {
        Self { active: SlotId::A }
    }
}

impl SlotPair {
    pub fn active(&self) -> SlotId {
        self.active
    }

    pub fn standby(&self) -> SlotId {
        self.active.other()
    }

    pub fn swap(&mut self) {
        self.active = self.active.other();
    }
}
