//! Built-in English translation table
//!
//! Covers the character-agnostic `skills.default.*` layer and the character
//! roster. Locale packs loaded at runtime layer character-specific skill
//! names on top of these via their own [`Translations`] implementation.

use phf::phf_map;

use super::Translations;

/// English defaults, keyed by full localization key
static EN: phf::Map<&'static str, &'static str> = phf_map! {
    "skills.default.link-attack" => "Link Attack",
    "skills.default.skybound-arts" => "Skybound Arts",
    "skills.default.damage-over-time" => "Damage Over Time",
    "skills.default.unknown-skill" => "Skill {id}",
    "ui.unknown" => "Unknown",

    "characters.Gran" => "Gran",
    "characters.Djeeta" => "Djeeta",
    "characters.Katalina" => "Katalina",
    "characters.Rackam" => "Rackam",
    "characters.Io" => "Io",
    "characters.Eugen" => "Eugen",
    "characters.Rosetta" => "Rosetta",
    "characters.Ferry" => "Ferry",
    "characters.Lancelot" => "Lancelot",
    "characters.Vane" => "Vane",
    "characters.Percival" => "Percival",
    "characters.Siegfried" => "Siegfried",
    "characters.Charlotta" => "Charlotta",
    "characters.Yodarha" => "Yodarha",
    "characters.Narmaya" => "Narmaya",
    "characters.Ghandagoza" => "Ghandagoza",
    "characters.Zeta" => "Zeta",
    "characters.Vaseraga" => "Vaseraga",
    "characters.Cagliostro" => "Cagliostro",
    "characters.Id" => "Id",
};

/// Translation table backed by the compiled-in English defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTranslations;

impl Translations for StaticTranslations {
    fn get(&self, key: &str) -> Option<&str> {
        EN.get(key).copied()
    }
}
