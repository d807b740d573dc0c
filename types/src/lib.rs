//! Shared report data model for Skydome
//!
//! This crate contains the serializable snapshot types handed to the report
//! core by the meter backend. Everything here is a value-like, immutable
//! snapshot of one encounter: no shared state, no cross-player references.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Character roster
// ─────────────────────────────────────────────────────────────────────────────

/// Playable character archetype.
///
/// Used purely as a namespace qualifier for localization keys
/// (`skills.{character}.*`, `characters.{character}`); no report logic
/// depends on the variant beyond string interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterType {
    Gran,
    Djeeta,
    Katalina,
    Rackam,
    Io,
    Eugen,
    Rosetta,
    Ferry,
    Lancelot,
    Vane,
    Percival,
    Siegfried,
    Charlotta,
    Yodarha,
    Narmaya,
    Ghandagoza,
    Zeta,
    Vaseraga,
    Cagliostro,
    Id,
}

impl CharacterType {
    /// String identifier interpolated into localization keys
    pub const fn as_str(&self) -> &'static str {
        match self {
            CharacterType::Gran => "Gran",
            CharacterType::Djeeta => "Djeeta",
            CharacterType::Katalina => "Katalina",
            CharacterType::Rackam => "Rackam",
            CharacterType::Io => "Io",
            CharacterType::Eugen => "Eugen",
            CharacterType::Rosetta => "Rosetta",
            CharacterType::Ferry => "Ferry",
            CharacterType::Lancelot => "Lancelot",
            CharacterType::Vane => "Vane",
            CharacterType::Percival => "Percival",
            CharacterType::Siegfried => "Siegfried",
            CharacterType::Charlotta => "Charlotta",
            CharacterType::Yodarha => "Yodarha",
            CharacterType::Narmaya => "Narmaya",
            CharacterType::Ghandagoza => "Ghandagoza",
            CharacterType::Zeta => "Zeta",
            CharacterType::Vaseraga => "Vaseraga",
            CharacterType::Cagliostro => "Cagliostro",
            CharacterType::Id => "Id",
        }
    }
}

impl std::fmt::Display for CharacterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Skill records
// ─────────────────────────────────────────────────────────────────────────────

/// Classification of a damage-dealing action.
///
/// Externally tagged on the wire to match the meter backend:
/// `"LinkAttack"`, `"SBA"`, `"DamageOverTime"`, or `{"Normal": 7}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    LinkAttack,
    /// Skybound Arts
    SBA,
    DamageOverTime,
    /// Numbered skill carrying its in-game skill ID
    Normal(u32),
}

/// Aggregated record for one distinct skill a player used during the
/// encounter. Constructed once per report from raw combat events and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillState {
    pub action_type: ActionType,
    pub hits: u32,
    pub total_damage: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_damage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_damage: Option<u64>,
}

impl SkillState {
    /// Average damage per hit, 0.0 when the skill never landed
    pub fn avg_hit(&self) -> f64 {
        if self.hits == 0 {
            0.0
        } else {
            self.total_damage as f64 / self.hits as f64
        }
    }
}

/// A [`SkillState`] decorated with its share of the owning player's total
/// damage. Percentages are only meaningful within one player's skill list
/// and sum to 100 there (barring float rounding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedSkillState {
    pub action_type: ActionType,
    pub hits: u32,
    pub total_damage: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_damage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_damage: Option<u64>,
    /// Share of the player's total damage, in [0, 100]
    pub percentage: f64,
}

impl ComputedSkillState {
    /// Average damage per hit, 0.0 when the skill never landed
    pub fn avg_hit(&self) -> f64 {
        if self.hits == 0 {
            0.0
        } else {
            self.total_damage as f64 / self.hits as f64
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Player and encounter snapshots
// ─────────────────────────────────────────────────────────────────────────────

/// Per-player snapshot as supplied by the upstream aggregator.
///
/// `percentage` and `dps` are raid-wide figures computed upstream (they
/// need every player's totals and the encounter duration); the report core
/// consumes them as trusted input. `skills` keeps arrival order and is not
/// yet rank-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedPlayerData {
    /// Display ordinal, 1-based
    pub index: u32,
    pub character_type: CharacterType,
    pub total_damage: u64,
    pub dps: f64,
    /// Share of total raid damage, in [0, 100]
    pub percentage: f64,
    pub skills: Vec<SkillState>,
}

/// Full report snapshot for one encounter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterReport {
    pub players: Vec<ComputedPlayerData>,
}
