//! Skill and character display-name resolution
//!
//! Display names come from a layered localization-key fallback chain
//! resolved against an injected translation table: the character-specific
//! key first, then the character-agnostic `default` key, then a generic
//! unknown-skill template. The first key with a registered entry wins;
//! matches are never merged.
//!
//! The table itself is a capability ([`Translations`]) handed in by the
//! caller, so the chain logic tests without any real translation data.
//! [`StaticTranslations`] ships the English defaults.

mod en;

pub use en::StaticTranslations;

use skydome_types::{ActionType, CharacterType};

/// Translation-table collaborator.
///
/// Implementations return the raw template registered for a key, or `None`
/// when the key is unregistered. Interpolation is the resolver's job.
pub trait Translations {
    fn get(&self, key: &str) -> Option<&str>;
}

/// Plain map tables (used heavily in tests, usable for loaded locales)
impl Translations for std::collections::HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        std::collections::HashMap::get(self, key).map(String::as_str)
    }
}

/// Candidate lookup keys for a skill's display name, most specific first.
///
/// The three no-payload action kinds get a two-key chain; `Normal` skills
/// get a third, terminal unknown-skill key so a name always resolves even
/// for skill IDs absent from every table.
pub fn resolve_name_keys(character: CharacterType, action: &ActionType) -> Vec<String> {
    match action {
        ActionType::LinkAttack => vec![
            format!("skills.{character}.link-attack"),
            "skills.default.link-attack".to_string(),
        ],
        ActionType::SBA => vec![
            format!("skills.{character}.skybound-arts"),
            "skills.default.skybound-arts".to_string(),
        ],
        ActionType::DamageOverTime => vec![
            format!("skills.{character}.damage-over-time"),
            "skills.default.damage-over-time".to_string(),
        ],
        ActionType::Normal(id) => vec![
            format!("skills.{character}.{id}"),
            format!("skills.default.{id}"),
            "skills.default.unknown-skill".to_string(),
        ],
    }
}

/// Resolve a key chain against `table`, interpolating `{name}` placeholders
/// from `params` into the first registered template.
///
/// When no key in the chain is registered the last key is returned verbatim,
/// mirroring the collaborator contract that lookup always yields a non-empty
/// placeholder rather than an absent value.
pub fn lookup<T: Translations + ?Sized>(
    table: &T,
    keys: &[String],
    params: &[(&str, String)],
) -> String {
    for key in keys {
        if let Some(template) = table.get(key) {
            return interpolate(template, params);
        }
    }
    keys.last().cloned().unwrap_or_default()
}

fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Display name for one skill row.
///
/// `Normal` skills pass their numeric ID as the `id` interpolation param to
/// every candidate, including the terminal unknown-skill template (which
/// renders it as "Skill {id}").
pub fn skill_display_name<T: Translations + ?Sized>(
    table: &T,
    character: CharacterType,
    action: &ActionType,
) -> String {
    let keys = resolve_name_keys(character, action);
    match action {
        ActionType::Normal(id) => lookup(table, &keys, &[("id", id.to_string())]),
        _ => lookup(table, &keys, &[]),
    }
}

/// Display name for a character, from the `characters.*` namespace
pub fn character_display_name<T: Translations + ?Sized>(
    table: &T,
    character: CharacterType,
) -> String {
    lookup(table, &[format!("characters.{character}")], &[])
}
