//! Components for targets of timed status effects.
//!
//! A target is any entity carrying `Health`, `Attributes`, and
//! `StatusEffects`. Attributes hold both the current (possibly modified)
//! values and the baseline captured at construction; the effect registry
//! lives in `StatusEffects`, one slot per effect kind.

/// Temporary status effect categories that can be cast onto a target.
///
/// Each kind maps to exactly one attribute slot and the slots are disjoint,
/// so effects of different kinds never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Alters outgoing bullet damage (magnitude is the replacement value)
    DamageBoost,
    /// Alters the damage-reduction fraction (magnitude replaces `defense`)
    DefenseBoost,
    /// Alters shot cadence (magnitude replaces `fire_rate`)
    FireRateBoost,
    /// Alters the incoming-damage multiplier
    IncomingVulnerability,
}

impl EffectKind {
    /// Number of effect kinds (registry slots per target)
    pub const COUNT: usize = 4;

    /// All kinds, in slot order
    pub const ALL: [EffectKind; Self::COUNT] = [
        EffectKind::DamageBoost,
        EffectKind::DefenseBoost,
        EffectKind::FireRateBoost,
        EffectKind::IncomingVulnerability,
    ];

    /// Registry slot index for this kind
    pub fn index(self) -> usize {
        match self {
            EffectKind::DamageBoost => 0,
            EffectKind::DefenseBoost => 1,
            EffectKind::FireRateBoost => 2,
            EffectKind::IncomingVulnerability => 3,
        }
    }

    /// Display name (for logs/UI)
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::DamageBoost => "damage boost",
            EffectKind::DefenseBoost => "defense boost",
            EffectKind::FireRateBoost => "fire rate boost",
            EffectKind::IncomingVulnerability => "vulnerability",
        }
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Health component
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Health that starts below max (the original player spawns at 50/60)
    pub fn with_current(current: i32, max: i32) -> Self {
        Self { current, max }
    }

    pub fn percentage(&self) -> f32 {
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// Restore health without exceeding max
    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

/// Combat attributes: current values plus the baseline captured at
/// construction.
///
/// Baseline never changes from effect application; it changes only via
/// explicit permanent edits outside the effect engine. The current fields
/// are written by the effect dispatch and read by combat, so damage
/// calculations always see post-mutation values.
#[derive(Debug, Clone, Copy)]
pub struct Attributes {
    /// Damage a bullet from this target deals
    pub bullet_damage: i32,
    /// Fraction of incoming damage shaved off (0.25 = 25% reduced)
    pub defense: f32,
    /// Delay between shots, in seconds
    pub fire_rate: f32,
    /// Multiplier applied to incoming damage (1.0 = normal)
    pub damage_multiplier: f32,
    base_bullet_damage: i32,
    base_defense: f32,
    base_fire_rate: f32,
    base_damage_multiplier: f32,
}

impl Attributes {
    /// Capture baseline values; the damage multiplier always starts at 1.0.
    pub fn new(bullet_damage: i32, defense: f32, fire_rate: f32) -> Self {
        Self {
            bullet_damage,
            defense,
            fire_rate,
            damage_multiplier: 1.0,
            base_bullet_damage: bullet_damage,
            base_defense: defense,
            base_fire_rate: fire_rate,
            base_damage_multiplier: 1.0,
        }
    }

    /// Baseline value for the attribute slot `kind` maps to
    pub fn baseline(&self, kind: EffectKind) -> f32 {
        match kind {
            EffectKind::DamageBoost => self.base_bullet_damage as f32,
            EffectKind::DefenseBoost => self.base_defense,
            EffectKind::FireRateBoost => self.base_fire_rate,
            EffectKind::IncomingVulnerability => self.base_damage_multiplier,
        }
    }

    /// Current value for the attribute slot `kind` maps to
    pub fn current(&self, kind: EffectKind) -> f32 {
        match kind {
            EffectKind::DamageBoost => self.bullet_damage as f32,
            EffectKind::DefenseBoost => self.defense,
            EffectKind::FireRateBoost => self.fire_rate,
            EffectKind::IncomingVulnerability => self.damage_multiplier,
        }
    }
}

/// A single armed effect in a registry slot
#[derive(Debug, Clone, Copy)]
pub struct ActiveEffect {
    /// Kind-specific value written into the attribute slot
    pub magnitude: f32,
    /// Seconds until the effect expires
    pub remaining_duration: f32,
    /// Generation this effect's timer was armed with
    pub generation: u32,
}

/// Per-target registry of active timed effects, one slot per kind.
///
/// Invariants: at most one active effect per kind; a slot's generation
/// counter increases monotonically and is bumped whenever the slot is
/// overwritten or cleared, so a deferred revert armed under an older
/// generation can be recognized as stale and discarded.
#[derive(Debug, Clone, Default)]
pub struct StatusEffects {
    slots: [Option<ActiveEffect>; EffectKind::COUNT],
    generations: [u32; EffectKind::COUNT],
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active effect for `kind`, if any
    pub fn get(&self, kind: EffectKind) -> Option<&ActiveEffect> {
        self.slots[kind.index()].as_ref()
    }

    pub fn get_mut(&mut self, kind: EffectKind) -> Option<&mut ActiveEffect> {
        self.slots[kind.index()].as_mut()
    }

    /// Whether an effect of `kind` is currently active
    pub fn has(&self, kind: EffectKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Generation the slot for `kind` is currently on
    pub fn current_generation(&self, kind: EffectKind) -> u32 {
        self.generations[kind.index()]
    }

    /// Insert or overwrite the effect for `kind`, invalidating any pending
    /// revert by bumping the slot generation. Returns the new generation.
    pub fn arm(&mut self, kind: EffectKind, magnitude: f32, duration: f32) -> u32 {
        let i = kind.index();
        self.generations[i] = self.generations[i].wrapping_add(1);
        self.slots[i] = Some(ActiveEffect {
            magnitude,
            remaining_duration: duration,
            generation: self.generations[i],
        });
        self.generations[i]
    }

    /// Clear the effect for `kind`. Bumps the generation only when an entry
    /// existed (there is no timer to invalidate otherwise). Returns whether
    /// an entry was removed.
    pub fn disarm(&mut self, kind: EffectKind) -> bool {
        let i = kind.index();
        if self.slots[i].take().is_some() {
            self.generations[i] = self.generations[i].wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Iterate over the kinds with an active effect
    pub fn active_kinds(&self) -> impl Iterator<Item = EffectKind> + '_ {
        EffectKind::ALL.into_iter().filter(|k| self.has(*k))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }
}
