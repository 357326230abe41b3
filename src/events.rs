//! Game event system for decoupled communication between systems.
//!
//! The effect and combat systems emit events, other systems consume them.
//! This allows passives, UI, audio, etc. to react without tight coupling
//! (and replaces the original's damage-event delegate on the player).

use hecs::Entity;

use crate::components::EffectKind;

/// Events the status and combat systems can emit
#[derive(Debug, Clone, Copy)]
pub enum GameEvent {
    /// An effect was applied (or refreshed) on a target
    EffectApplied {
        entity: Entity,
        kind: EffectKind,
        magnitude: f32,
        duration: f32,
        /// True when this overwrote an already-active effect of the same kind
        refreshed: bool,
    },
    /// An effect's timer ran out and its attribute reverted to baseline
    EffectExpired {
        entity: Entity,
        kind: EffectKind,
    },
    /// An effect was cancelled early and its attribute reverted to baseline
    EffectRemoved {
        entity: Entity,
        kind: EffectKind,
    },
    /// A target took damage (after the multiplier and defense were applied)
    DamageTaken {
        entity: Entity,
        raw: i32,
        effective: i32,
        remaining_health: i32,
    },
    /// A target's health was restored
    Healed {
        entity: Entity,
        amount: i32,
    },
    /// A target's health reached zero
    Defeated {
        entity: Entity,
    },
}

/// Simple event queue - events are pushed during update, processed at end of step
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
