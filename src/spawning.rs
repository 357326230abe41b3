//! Data-driven target spawning.
//!
//! Defines target baselines as plain data, so tuning lives in one place
//! (or in a JSON file) instead of being scattered across spawn sites.

use std::path::Path;

use hecs::{Entity, World};
use serde::Deserialize;

use crate::components::{Attributes, Health, Player, StatusEffects};
use crate::constants::*;
use crate::error::DefError;

/// Definition of a target - all the baseline data needed to spawn one
#[derive(Debug, Clone, Deserialize)]
pub struct TargetDef {
    /// Display name (for logs/UI)
    pub name: String,
    /// Health the target should not surpass
    #[serde(default = "default_max_health")]
    pub max_health: i32,
    /// Health the target starts with
    #[serde(default = "default_health")]
    pub health: i32,
    /// Baseline damage-reduction fraction
    #[serde(default)]
    pub defense: f32,
    /// Baseline delay between shots (seconds)
    #[serde(default = "default_fire_rate")]
    pub fire_rate: f32,
    /// Baseline bullet damage
    #[serde(default = "default_bullet_damage")]
    pub bullet_damage: i32,
}

fn default_max_health() -> i32 {
    PLAYER_MAX_HEALTH
}

fn default_health() -> i32 {
    PLAYER_STARTING_HEALTH
}

fn default_fire_rate() -> f32 {
    PLAYER_FIRE_RATE
}

fn default_bullet_damage() -> i32 {
    PLAYER_BULLET_DAMAGE
}

impl TargetDef {
    /// The default player baseline
    pub fn player() -> Self {
        Self {
            name: "player".to_string(),
            max_health: PLAYER_MAX_HEALTH,
            health: PLAYER_STARTING_HEALTH,
            defense: PLAYER_DEFENSE,
            fire_rate: PLAYER_FIRE_RATE,
            bullet_damage: PLAYER_BULLET_DAMAGE,
        }
    }

    /// Parse a definition from JSON
    pub fn from_json(json: &str) -> Result<Self, DefError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a definition from a JSON file
    pub fn load(path: &Path) -> Result<Self, DefError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Spawn this target with an empty effect registry
    pub fn spawn(&self, world: &mut World) -> Entity {
        world.spawn((
            Player,
            Health::with_current(self.health, self.max_health),
            Attributes::new(self.bullet_damage, self.defense, self.fire_rate),
            StatusEffects::new(),
        ))
    }
}
