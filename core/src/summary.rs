//! Display rows for the report table
//!
//! Turns player and skill records into the humanized figures the frontend
//! renders: scaled damage totals with unit suffixes and percentages fixed
//! to two decimals. Percentages are never unit-scaled.

use skydome_types::{CharacterType, ComputedPlayerData, SkillState};

use crate::breakdown::aggregate;
use crate::humanize::humanize;
use crate::localization::{Translations, skill_display_name};

/// A scaled display value with its unit suffix, e.g. `12.3` + `"K"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Humanized {
    pub value: f64,
    pub unit: &'static str,
}

impl Humanized {
    pub fn of(value: f64) -> Self {
        let (value, unit) = humanize(value);
        Self { value, unit }
    }
}

impl std::fmt::Display for Humanized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{:.0}", self.value)
        } else {
            write!(f, "{:.1}{}", self.value, self.unit)
        }
    }
}

fn format_percent(pct: f64) -> String {
    format!("{pct:.2}")
}

/// Top-level row figures for one player.
///
/// `percentage` is the player's pre-computed share of raid damage, consumed
/// as-is; no raid-wide aggregation happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    pub index: u32,
    pub character_type: CharacterType,
    pub total_damage: Humanized,
    pub dps: Humanized,
    /// Formatted to exactly two decimals
    pub percentage: String,
}

/// Humanize a player's top-level figures
pub fn summarize(player: &ComputedPlayerData) -> PlayerSummary {
    PlayerSummary {
        index: player.index,
        character_type: player.character_type,
        total_damage: Humanized::of(player.total_damage as f64),
        dps: Humanized::of(player.dps),
        percentage: format_percent(player.percentage),
    }
}

/// One row of a player's expanded skill table
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRow {
    pub name: String,
    pub hits: u32,
    pub total_damage: Humanized,
    /// Absent when the skill recorded no per-hit minimum; rendered blank
    pub min_damage: Option<Humanized>,
    pub max_damage: Option<Humanized>,
    pub avg_damage: Humanized,
    /// Share of the player's damage, formatted to two decimals
    pub percentage: String,
}

/// Build the ranked, humanized skill table for one player.
///
/// Runs the breakdown aggregation, resolves each skill's display name
/// against `table`, and humanizes every numeric column. Row order is the
/// authoritative display order.
pub fn skill_rows<T: Translations + ?Sized>(
    table: &T,
    character: CharacterType,
    skills: &[SkillState],
) -> Vec<SkillRow> {
    aggregate(skills)
        .iter()
        .map(|skill| SkillRow {
            name: skill_display_name(table, character, &skill.action_type),
            hits: skill.hits,
            total_damage: Humanized::of(skill.total_damage as f64),
            min_damage: skill.min_damage.map(|v| Humanized::of(v as f64)),
            max_damage: skill.max_damage.map(|v| Humanized::of(v as f64)),
            avg_damage: Humanized::of(skill.avg_hit()),
            percentage: format_percent(skill.percentage),
        })
        .collect()
}
