//! Tick-driven effect timers.
//!
//! The driver loop calls [`tick_effects`] (or [`tick_all_effects`]) once per
//! discrete time step. Countdowns are decremented in place; entries reaching
//! zero or below are handed to the generation-guarded revert path in
//! `systems::effects`, so a countdown superseded between decrement and
//! revert does nothing. Ticks for a given target are never concurrent: the
//! cooperative driver is the single writer, which is what lets generation
//! counters stand in for real timer cancellation.

use hecs::{Entity, World};

use crate::components::{EffectKind, StatusEffects};
use crate::error::StatusError;
use crate::events::EventQueue;
use crate::systems::effects;

// =============================================================================
// GAME CLOCK
// =============================================================================

/// Global game time clock (in seconds)
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Current game time in seconds (simulation time, not real time)
    pub time: f32,
}

impl GameClock {
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Advance the clock by an elapsed step
    pub fn advance(&mut self, elapsed: f32) {
        debug_assert!(elapsed >= 0.0, "Cannot go backwards in time: {}", elapsed);
        self.time += elapsed;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// EFFECT TIMER TICK
// =============================================================================

/// Advance every active effect countdown on one target by `elapsed` seconds,
/// reverting the ones that expire.
///
/// Each expired entry takes the revert path exactly once; the generation
/// captured at decrement time guards against reverting a slot that was
/// refreshed or removed in the meantime. `elapsed <= 0` is a no-op.
pub fn tick_effects(
    world: &mut World,
    entity: Entity,
    elapsed: f32,
    events: &mut EventQueue,
) -> Result<(), StatusError> {
    if elapsed <= 0.0 {
        return Ok(());
    }

    let mut due: Vec<(EffectKind, u32)> = Vec::new();
    {
        let mut effects = world
            .get::<&mut StatusEffects>(entity)
            .map_err(|_| StatusError::InvalidTarget)?;
        for kind in EffectKind::ALL {
            if let Some(effect) = effects.get_mut(kind) {
                effect.remaining_duration -= elapsed;
                if effect.remaining_duration <= 0.0 {
                    due.push((kind, effect.generation));
                }
            }
        }
    }

    for (kind, generation) in due {
        effects::expire_effect(world, entity, kind, generation, events);
    }
    Ok(())
}

/// Advance effect countdowns for every entity carrying a registry.
///
/// The driver-loop entry point: call once per time step with the elapsed
/// simulation time.
pub fn tick_all_effects(world: &mut World, elapsed: f32, events: &mut EventQueue) {
    if elapsed <= 0.0 {
        return;
    }

    let targets: Vec<Entity> = world
        .query_mut::<&StatusEffects>()
        .into_iter()
        .filter(|(_, effects)| !effects.is_empty())
        .map(|(id, _)| id)
        .collect();

    for entity in targets {
        // Targets collected above still exist; the Err arm is unreachable
        let _ = tick_effects(world, entity, elapsed, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Attributes, EffectKind, Health};
    use crate::events::GameEvent;
    use crate::systems::effects::{apply_effect, has_effect};

    fn spawn_target(world: &mut World) -> Entity {
        world.spawn((
            Health::with_current(50, 60),
            Attributes::new(10, 0.0, 0.2),
            StatusEffects::new(),
        ))
    }

    #[test]
    fn test_effect_expires_after_duration() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world);

        apply_effect(&mut world, target, EffectKind::DamageBoost, 40.0, 5.0, &mut events).unwrap();

        // t = 3.0: still active at full magnitude
        tick_effects(&mut world, target, 3.0, &mut events).unwrap();
        assert!(has_effect(&world, target, EffectKind::DamageBoost));
        assert_eq!(world.get::<&Attributes>(target).unwrap().bullet_damage, 40);

        // t = 5.01: reverted to baseline
        tick_effects(&mut world, target, 2.01, &mut events).unwrap();
        assert!(!has_effect(&world, target, EffectKind::DamageBoost));
        assert_eq!(world.get::<&Attributes>(target).unwrap().bullet_damage, 10);
    }

    #[test]
    fn test_expiry_fires_exactly_once() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world);

        apply_effect(&mut world, target, EffectKind::DamageBoost, 40.0, 1.0, &mut events).unwrap();
        tick_effects(&mut world, target, 2.0, &mut events).unwrap();
        tick_effects(&mut world, target, 2.0, &mut events).unwrap();

        let expirations = events
            .drain()
            .filter(|e| matches!(e, GameEvent::EffectExpired { .. }))
            .count();
        assert_eq!(expirations, 1);
    }

    #[test]
    fn test_refresh_outlives_original_timer() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world);

        apply_effect(&mut world, target, EffectKind::DamageBoost, 40.0, 5.0, &mut events).unwrap();
        tick_effects(&mut world, target, 4.0, &mut events).unwrap();

        // Refresh before the first duration elapses
        apply_effect(&mut world, target, EffectKind::DamageBoost, 25.0, 5.0, &mut events).unwrap();

        // Past the original expiry; the refreshed effect must survive
        tick_effects(&mut world, target, 2.0, &mut events).unwrap();
        assert!(has_effect(&world, target, EffectKind::DamageBoost));
        assert_eq!(world.get::<&Attributes>(target).unwrap().bullet_damage, 25);

        // The refreshed duration elapses
        tick_effects(&mut world, target, 3.01, &mut events).unwrap();
        assert!(!has_effect(&world, target, EffectKind::DamageBoost));
        assert_eq!(world.get::<&Attributes>(target).unwrap().bullet_damage, 10);
    }

    #[test]
    fn test_kinds_expire_independently() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world);

        apply_effect(&mut world, target, EffectKind::DamageBoost, 40.0, 2.0, &mut events).unwrap();
        apply_effect(&mut world, target, EffectKind::FireRateBoost, 0.1, 6.0, &mut events)
            .unwrap();

        tick_effects(&mut world, target, 3.0, &mut events).unwrap();
        assert!(!has_effect(&world, target, EffectKind::DamageBoost));
        assert!(has_effect(&world, target, EffectKind::FireRateBoost));

        let attrs = world.get::<&Attributes>(target).unwrap();
        assert_eq!(attrs.bullet_damage, 10);
        assert_eq!(attrs.fire_rate, 0.1);
    }

    #[test]
    fn test_zero_elapsed_is_noop() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world);

        apply_effect(&mut world, target, EffectKind::DamageBoost, 40.0, 5.0, &mut events).unwrap();
        tick_effects(&mut world, target, 0.0, &mut events).unwrap();
        tick_effects(&mut world, target, -1.0, &mut events).unwrap();

        let effects = world.get::<&StatusEffects>(target).unwrap();
        let active = effects.get(EffectKind::DamageBoost).unwrap();
        assert_eq!(active.remaining_duration, 5.0);
    }

    #[test]
    fn test_tick_all_drives_every_target() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let a = spawn_target(&mut world);
        let b = spawn_target(&mut world);

        apply_effect(&mut world, a, EffectKind::DamageBoost, 40.0, 1.0, &mut events).unwrap();
        apply_effect(&mut world, b, EffectKind::DefenseBoost, 0.5, 4.0, &mut events).unwrap();

        tick_all_effects(&mut world, 2.0, &mut events);

        assert!(!has_effect(&world, a, EffectKind::DamageBoost));
        assert!(has_effect(&world, b, EffectKind::DefenseBoost));
    }

    #[test]
    fn test_tick_on_dead_entity_fails() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world);
        world.despawn(target).unwrap();

        let err = tick_effects(&mut world, target, 1.0, &mut events).unwrap_err();
        assert_eq!(err, StatusError::InvalidTarget);
    }

    #[test]
    fn test_clock_advances() {
        let mut clock = GameClock::new();
        clock.advance(0.5);
        clock.advance(1.5);
        assert_eq!(clock.time, 2.0);
    }
}
