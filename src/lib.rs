//! Timed status-effect engine.
//!
//! Applies temporary attribute modifiers (bullet damage, defense, fire rate,
//! incoming-damage multiplier) to target entities, tracks their expiry
//! against a tick-driven clock, and reverts attributes to baseline when
//! effects end or are cancelled early. Refreshing an effect overwrites its
//! magnitude and timer (last-writer-wins per kind, no stacking); a
//! generation counter per slot invalidates superseded timers so a stale
//! revert never clobbers a freshly refreshed effect.
//!
//! Targets are plain `hecs` entities carrying [`Health`], [`Attributes`],
//! and [`StatusEffects`] components; callers hold the `World` and `Entity`
//! explicitly. Effect state is ephemeral and never persisted.

pub mod components;
pub mod constants;
pub mod error;
pub mod events;
pub mod spawning;
pub mod systems;
pub mod time_system;

// Re-export the core API surface
pub use components::{ActiveEffect, Attributes, EffectKind, Health, Player, StatusEffects};
pub use error::StatusError;
pub use events::{EventQueue, GameEvent};
pub use spawning::TargetDef;
pub use systems::combat::{effective_damage, heal, take_damage};
pub use systems::effects::{apply_effect, has_effect, remove_effect};
pub use time_system::{tick_all_effects, tick_effects, GameClock};
