//! Tuning constants organized by category.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

// =============================================================================
// PLAYER BASELINE
// =============================================================================

/// Health the player should not surpass
pub const PLAYER_MAX_HEALTH: i32 = 60;
/// Health the player starts with
pub const PLAYER_STARTING_HEALTH: i32 = 50;
/// Fraction of incoming damage shaved off (0.25 = 25% reduced)
pub const PLAYER_DEFENSE: f32 = 0.0;
/// Delay between player shots (seconds)
pub const PLAYER_FIRE_RATE: f32 = 0.2;
/// Damage a player bullet deals
pub const PLAYER_BULLET_DAMAGE: i32 = 10;

// =============================================================================
// DAMAGE MODEL
// =============================================================================

/// Incoming-damage multiplier with no vulnerability active
pub const BASE_DAMAGE_MULTIPLIER: f32 = 1.0;
