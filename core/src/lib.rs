//! Damage report core for Skydome
//!
//! Pure derivation layer between the meter backend's encounter snapshot and
//! the rendering frontend: ranks each player's skills by damage contribution,
//! resolves display names through layered localization keys, and scales raw
//! damage figures for compact display. No I/O besides snapshot loading, no
//! shared state; every operation is a pure function over an immutable
//! snapshot.

pub mod breakdown;
pub mod humanize;
pub mod localization;
pub mod snapshot;
pub mod summary;

// Re-exports for convenience
pub use breakdown::aggregate;
pub use humanize::{humanize, tier_divisor};
pub use localization::{
    StaticTranslations, Translations, character_display_name, lookup, resolve_name_keys,
    skill_display_name,
};
pub use skydome_types::{
    ActionType, CharacterType, ComputedPlayerData, ComputedSkillState, EncounterReport, SkillState,
};
pub use snapshot::{SnapshotError, load_report, parse_report};
pub use summary::{Humanized, PlayerSummary, SkillRow, skill_rows, summarize};
