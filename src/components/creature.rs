use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable catalog identifier; also the catalog ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(pub u32);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value {value:?}")]
pub struct ParseEnumError {
    pub value: String,
}

/// The 18-value type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl ElementType {
    pub const ALL: [ElementType; 18] = [
        ElementType::Normal,
        ElementType::Fire,
        ElementType::Water,
        ElementType::Electric,
        ElementType::Grass,
        ElementType::Ice,
        ElementType::Fighting,
        ElementType::Poison,
        ElementType::Ground,
        ElementType::Flying,
        ElementType::Psychic,
        ElementType::Bug,
        ElementType::Rock,
        ElementType::Ghost,
        ElementType::Dragon,
        ElementType::Dark,
        ElementType::Steel,
        ElementType::Fairy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Normal => "normal",
            ElementType::Fire => "fire",
            ElementType::Water => "water",
            ElementType::Electric => "electric",
            ElementType::Grass => "grass",
            ElementType::Ice => "ice",
            ElementType::Fighting => "fighting",
            ElementType::Poison => "poison",
            ElementType::Ground => "ground",
            ElementType::Flying => "flying",
            ElementType::Psychic => "psychic",
            ElementType::Bug => "bug",
            ElementType::Rock => "rock",
            ElementType::Ghost => "ghost",
            ElementType::Dragon => "dragon",
            ElementType::Dark => "dark",
            ElementType::Steel => "steel",
            ElementType::Fairy => "fairy",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ElementType::ALL
            .into_iter()
            .find(|element| element.as_str() == needle)
            .ok_or_else(|| ParseEnumError {
                value: s.to_string(),
            })
    }
}

/// Six battle stats as published by the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Saturates instead of overflowing on out-of-range catalog values.
    pub fn total(&self) -> u32 {
        self.as_array()
            .into_iter()
            .fold(0u32, |sum, value| sum.saturating_add(value))
    }

    /// hp, attack, defense, sp. atk, sp. def, speed.
    pub fn as_array(&self) -> [u32; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }
}

/// Immutable catalog creature. Rosters hold it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sprite: String,
    #[serde(default)]
    pub types: Vec<ElementType>,
    #[serde(default)]
    pub stats: BaseStats,
}

impl Creature {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        sprite: impl Into<String>,
        types: Vec<ElementType>,
        stats: BaseStats,
    ) -> Self {
        Self {
            id: CreatureId(id),
            name: name.into(),
            sprite: sprite.into(),
            types,
            stats,
        }
    }

    pub fn total_stats(&self) -> u32 {
        self.stats.total()
    }

    /// Display name, or `None` when the catalog left it blank.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_six_stats() {
        let stats = BaseStats {
            hp: 45,
            attack: 49,
            defense: 49,
            special_attack: 65,
            special_defense: 65,
            speed: 45,
        };
        assert_eq!(stats.total(), 318);
    }

    #[test]
    fn total_saturates_on_out_of_range_values() {
        let stats = BaseStats {
            hp: u32::MAX,
            speed: 10,
            ..BaseStats::default()
        };
        assert_eq!(stats.total(), u32::MAX);
        assert_eq!(stats.as_array()[5], 10);
    }

    #[test]
    fn element_types_parse_case_insensitively() {
        assert_eq!("Fire".parse::<ElementType>(), Ok(ElementType::Fire));
        assert_eq!(" fairy ".parse::<ElementType>(), Ok(ElementType::Fairy));
        assert!("sound".parse::<ElementType>().is_err());
    }

    #[test]
    fn capitalizes_catalog_names() {
        assert_eq!(capitalize_name("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize_name("mr-mime"), "Mr-mime");
        assert_eq!(capitalize_name(""), "");
    }

    #[test]
    fn sparse_records_deserialize_with_defaults() {
        let creature: Creature = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(creature.id, CreatureId(7));
        assert!(creature.types.is_empty());
        assert_eq!(creature.total_stats(), 0);
        assert_eq!(creature.display_name(), None);
    }
}
