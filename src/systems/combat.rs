//! Damage intake and healing.
//!
//! Both read the target's post-mutation attributes, so an active defense
//! boost or vulnerability changes the outcome for as long as it lasts.
//! Reaching zero health emits a `Defeated` event instead of despawning the
//! entity; what defeat means is the caller's decision.

use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Attributes, Health};
use crate::error::StatusError;
use crate::events::{EventQueue, GameEvent};

/// Damage after the incoming multiplier and defense fraction are applied
pub fn effective_damage(attrs: &Attributes, raw: i32) -> i32 {
    (raw as f32 * attrs.damage_multiplier * (1.0 - attrs.defense)).round() as i32
}

/// Deal damage to a target, scaled by its current vulnerability multiplier
/// and defense. Stored health clamps at zero; crossing zero emits
/// `Defeated` exactly once per call.
pub fn take_damage(
    world: &mut World,
    entity: Entity,
    raw: i32,
    events: &mut EventQueue,
) -> Result<(), StatusError> {
    let attrs = *world
        .get::<&Attributes>(entity)
        .map_err(|_| StatusError::InvalidTarget)?;
    let mut health = world
        .get::<&mut Health>(entity)
        .map_err(|_| StatusError::InvalidTarget)?;

    let effective = effective_damage(&attrs, raw);
    health.current -= effective;
    let depleted = health.is_depleted();
    if depleted {
        health.current = 0;
    }
    let remaining = health.current;
    drop(health);

    debug!(?entity, raw, effective, remaining, "damage taken");
    events.push(GameEvent::DamageTaken {
        entity,
        raw,
        effective,
        remaining_health: remaining,
    });
    if depleted {
        events.push(GameEvent::Defeated { entity });
    }
    Ok(())
}

/// Restore health without exceeding max. Emits `Healed` with the amount
/// actually applied.
pub fn heal(
    world: &mut World,
    entity: Entity,
    amount: i32,
    events: &mut EventQueue,
) -> Result<(), StatusError> {
    let mut health = world
        .get::<&mut Health>(entity)
        .map_err(|_| StatusError::InvalidTarget)?;

    let before = health.current;
    health.heal(amount);
    let applied = health.current - before;
    drop(health);

    debug!(?entity, amount, applied, "healed");
    events.push(GameEvent::Healed {
        entity,
        amount: applied,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{EffectKind, StatusEffects};
    use crate::systems::effects::apply_effect;

    fn spawn_target(world: &mut World, defense: f32) -> Entity {
        world.spawn((
            Health::with_current(50, 60),
            Attributes::new(10, defense, 0.2),
            StatusEffects::new(),
        ))
    }

    #[test]
    fn test_damage_scaled_by_defense() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world, 0.25);

        take_damage(&mut world, target, 20, &mut events).unwrap();

        // round(20 * 1.0 * 0.75) = 15
        let health = world.get::<&Health>(target).unwrap();
        assert_eq!(health.current, 35);
    }

    #[test]
    fn test_damage_reads_active_vulnerability() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world, 0.0);

        apply_effect(
            &mut world,
            target,
            EffectKind::IncomingVulnerability,
            2.0,
            5.0,
            &mut events,
        )
        .unwrap();
        take_damage(&mut world, target, 10, &mut events).unwrap();

        let health = world.get::<&Health>(target).unwrap();
        assert_eq!(health.current, 30);
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = world.spawn((
            Health::with_current(55, 60),
            Attributes::new(10, 0.0, 0.2),
            StatusEffects::new(),
        ));

        heal(&mut world, target, 10, &mut events).unwrap();

        let health = world.get::<&Health>(target).unwrap();
        assert_eq!(health.current, 60);

        let applied = events.drain().find_map(|e| match e {
            GameEvent::Healed { amount, .. } => Some(amount),
            _ => None,
        });
        assert_eq!(applied, Some(5));
    }

    #[test]
    fn test_defeated_emitted_at_zero() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world, 0.0);

        take_damage(&mut world, target, 80, &mut events).unwrap();

        let health = world.get::<&Health>(target).unwrap();
        assert_eq!(health.current, 0);
        drop(health);

        assert!(events
            .drain()
            .any(|e| matches!(e, GameEvent::Defeated { entity } if entity == target)));
        // Target state survives defeat; the caller decides what happens next
        assert!(world.contains(target));
    }

    #[test]
    fn test_damage_on_dead_entity_fails() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let target = spawn_target(&mut world, 0.0);
        world.despawn(target).unwrap();

        let err = take_damage(&mut world, target, 10, &mut events).unwrap_err();
        assert_eq!(err, StatusError::InvalidTarget);
    }
}
