//! Error taxonomy for status and combat operations.
//!
//! Failures are local: no error path is allowed to leave the effect
//! registry in a state that violates its invariants. Removing an absent
//! effect is not an error (it is the `false` return of `remove_effect`),
//! and a stale timer firing is not an error either (it is silently
//! discarded by the generation check).

use thiserror::Error;

/// Failures reported by entity-level status and combat operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatusError {
    /// The entity was despawned or never carried the status components
    #[error("target is not alive or has no status components")]
    InvalidTarget,
    /// Effect durations must be positive
    #[error("effect duration must be positive, got {0}")]
    InvalidDuration(f32),
}

/// Failures loading a target definition from disk
#[derive(Debug, Error)]
pub enum DefError {
    #[error("failed to read target definition: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse target definition: {0}")]
    Parse(#[from] serde_json::Error),
}
