//! Engine systems organized by domain.
//!
//! - `effects`: status effect lifecycle (apply, remove, expiry revert)
//! - `combat`: damage intake and healing against the modified attributes

pub mod combat;
pub mod effects;

// Re-export commonly used items
pub use combat::{effective_damage, heal, take_damage};
pub use effects::{apply_effect, has_effect, remove_effect};
