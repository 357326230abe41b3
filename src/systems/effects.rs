//! Status effect lifecycle: apply, remove, and the generation-guarded
//! expiry revert.
//!
//! Applying an effect writes the target's attribute slot immediately and
//! arms a countdown in the registry. Refreshing the same kind overwrites
//! magnitude and timer (last-writer-wins, no stacking) and bumps the slot's
//! generation, which invalidates any revert still pending for the old
//! timer. The tick driver in `time_system` hands expired entries to
//! [`expire_effect`], which reverts only if the generation it was armed
//! with is still current.

use hecs::{Entity, World};
use tracing::{debug, warn};

use crate::components::{Attributes, EffectKind, StatusEffects};
use crate::error::StatusError;
use crate::events::{EventQueue, GameEvent};

// =============================================================================
// ATTRIBUTE-MUTATION DISPATCH (pure, operates on component data)
// =============================================================================

/// Write the attribute slot `kind` maps to.
///
/// Magnitude semantics are kind-specific and the caller's responsibility:
/// damage and fire rate are replacement values, defense is a fraction in
/// [0, 1] by convention, vulnerability is a multiplier. Damage magnitudes
/// truncate to whole points.
pub fn apply_modifier(attrs: &mut Attributes, kind: EffectKind, magnitude: f32) {
    match kind {
        EffectKind::DamageBoost => attrs.bullet_damage = magnitude as i32,
        EffectKind::DefenseBoost => attrs.defense = magnitude,
        EffectKind::FireRateBoost => attrs.fire_rate = magnitude,
        EffectKind::IncomingVulnerability => attrs.damage_multiplier = magnitude,
    }
}

/// Restore the attribute slot `kind` maps to back to its baseline
pub fn clear_modifier(attrs: &mut Attributes, kind: EffectKind) {
    match kind {
        EffectKind::DamageBoost => attrs.bullet_damage = attrs.baseline(kind) as i32,
        EffectKind::DefenseBoost => attrs.defense = attrs.baseline(kind),
        EffectKind::FireRateBoost => attrs.fire_rate = attrs.baseline(kind),
        EffectKind::IncomingVulnerability => attrs.damage_multiplier = attrs.baseline(kind),
    }
}

// =============================================================================
// PURE REGISTRY QUERIES (operate on component data)
// =============================================================================

/// Get the magnitude of an active effect (None if not active)
pub fn effect_magnitude(effects: &StatusEffects, kind: EffectKind) -> Option<f32> {
    effects.get(kind).map(|e| e.magnitude)
}

/// Get the remaining duration of an active effect (None if not active)
pub fn effect_remaining(effects: &StatusEffects, kind: EffectKind) -> Option<f32> {
    effects.get(kind).map(|e| e.remaining_duration)
}

// =============================================================================
// ENTITY-LEVEL LIFECYCLE (operate on World)
// =============================================================================

/// Apply (or refresh) a timed effect on a target.
///
/// The attribute slot for `kind` is set to `magnitude` immediately and a
/// countdown of `duration` seconds is armed. If an effect of the same kind
/// is already active its magnitude and timer are replaced wholesale and the
/// pending revert for the old timer is invalidated.
///
/// Fails with `InvalidDuration` for non-positive durations and
/// `InvalidTarget` when the entity is dead or carries no status components;
/// neither failure mutates the target.
pub fn apply_effect(
    world: &mut World,
    entity: Entity,
    kind: EffectKind,
    magnitude: f32,
    duration: f32,
    events: &mut EventQueue,
) -> Result<(), StatusError> {
    if !(duration > 0.0) {
        return Err(StatusError::InvalidDuration(duration));
    }

    let Ok(mut effects) = world.get::<&mut StatusEffects>(entity) else {
        warn!(?entity, effect = kind.name(), "apply_effect on invalid target");
        return Err(StatusError::InvalidTarget);
    };
    let Ok(mut attrs) = world.get::<&mut Attributes>(entity) else {
        warn!(?entity, effect = kind.name(), "apply_effect on invalid target");
        return Err(StatusError::InvalidTarget);
    };

    let refreshed = effects.has(kind);
    let generation = effects.arm(kind, magnitude, duration);
    apply_modifier(&mut attrs, kind, magnitude);

    debug!(
        ?entity,
        effect = kind.name(),
        magnitude,
        duration,
        generation,
        refreshed,
        "effect applied"
    );
    events.push(GameEvent::EffectApplied {
        entity,
        kind,
        magnitude,
        duration,
        refreshed,
    });
    Ok(())
}

/// Cancel an active effect early, reverting the attribute to baseline.
///
/// Returns true if an effect existed and was removed, false otherwise
/// (idempotent no-op). An invalid target is logged and reported as false.
pub fn remove_effect(
    world: &mut World,
    entity: Entity,
    kind: EffectKind,
    events: &mut EventQueue,
) -> bool {
    let Ok(mut effects) = world.get::<&mut StatusEffects>(entity) else {
        warn!(?entity, effect = kind.name(), "remove_effect on invalid target");
        return false;
    };
    let Ok(mut attrs) = world.get::<&mut Attributes>(entity) else {
        warn!(?entity, effect = kind.name(), "remove_effect on invalid target");
        return false;
    };

    if !effects.disarm(kind) {
        return false;
    }
    clear_modifier(&mut attrs, kind);

    debug!(?entity, effect = kind.name(), "effect removed");
    events.push(GameEvent::EffectRemoved { entity, kind });
    true
}

/// Check if a target has a specific effect active (false for dead targets)
pub fn has_effect(world: &World, entity: Entity, kind: EffectKind) -> bool {
    world
        .get::<&StatusEffects>(entity)
        .map(|e| e.has(kind))
        .unwrap_or(false)
}

/// Deferred revert path for an expired timer.
///
/// Reverts the attribute and clears the registry entry only if `generation`
/// still matches the slot's current generation. A mismatch means the timer
/// was superseded by a refresh or an explicit removal; stale firings are
/// expected and silently discarded.
pub fn expire_effect(
    world: &mut World,
    entity: Entity,
    kind: EffectKind,
    generation: u32,
    events: &mut EventQueue,
) {
    let Ok(mut effects) = world.get::<&mut StatusEffects>(entity) else {
        return;
    };
    let stale = effects.current_generation(kind) != generation || !effects.has(kind);
    if stale {
        debug!(?entity, effect = kind.name(), generation, "stale revert discarded");
        return;
    }
    let Ok(mut attrs) = world.get::<&mut Attributes>(entity) else {
        return;
    };

    effects.disarm(kind);
    clear_modifier(&mut attrs, kind);

    debug!(?entity, effect = kind.name(), "effect expired");
    events.push(GameEvent::EffectExpired { entity, kind });
}
