//! The static catalog of world content.
//!
//! Templates are immutable for the whole run. Enemies are never fought
//! directly from their template: each encounter spawns a fresh [`Enemy`] so
//! separate encounters never share health.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::creature::Enemy;
use crate::error::{CatalogError, CatalogResult};

/// Upper bound for every template stat and for the hero's starting stats.
pub const MAX_STAT: i32 = 1_000_000;

/// Which catalog category a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Equipment the hero can carry.
    Item,
    /// A hostile creature.
    Enemy,
    /// A hazard that damages the hero.
    Trap,
    /// A place where the hero recovers health.
    Rest,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Enemy => write!(f, "enemy"),
            Self::Trap => write!(f, "trap"),
            Self::Rest => write!(f, "rest spot"),
        }
    }
}

/// A piece of equipment. Carrying it raises the hero's damage and max health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTemplate {
    /// Display name; unique within a backpack.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Bonus added to the hero's damage.
    #[serde(rename = "damage", default)]
    pub damage_points: i32,
    /// Bonus added to the hero's max health.
    #[serde(rename = "armor", default)]
    pub armor_points: i32,
}

impl ItemTemplate {
    /// Create an item template.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        damage_points: i32,
        armor_points: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            damage_points,
            armor_points,
        }
    }

    /// One-line stat summary, e.g. `Damage: 5, Armor: 1`.
    pub fn stat_summary(&self) -> String {
        format!("Damage: {}, Armor: {}", self.damage_points, self.armor_points)
    }
}

/// A hostile creature definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Display name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Damage dealt to the hero each round.
    #[serde(rename = "damage")]
    pub damage_points: i32,
    /// Starting and maximum health.
    #[serde(rename = "health")]
    pub health_points: i32,
    /// Subtracted from every incoming hit.
    #[serde(rename = "armor", default)]
    pub armor_points: i32,
}

impl EnemyTemplate {
    /// Create an enemy template.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        damage_points: i32,
        health_points: i32,
        armor_points: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            damage_points,
            health_points,
            armor_points,
        }
    }

    /// Spawn a fresh, full-health enemy from this template.
    pub fn spawn(&self) -> Enemy {
        Enemy::new(
            &self.name,
            &self.description,
            self.damage_points,
            self.health_points,
            self.armor_points,
        )
    }
}

/// A hazard that hurts the hero once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapTemplate {
    /// Display name.
    pub name: String,
    /// Damage dealt when triggered.
    #[serde(rename = "damage")]
    pub damage_points: i32,
}

impl TrapTemplate {
    /// Create a trap template.
    pub fn new(name: impl Into<String>, damage_points: i32) -> Self {
        Self {
            name: name.into(),
            damage_points,
        }
    }
}

/// A place to recover health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestTemplate {
    /// Display name.
    pub name: String,
    /// Health restored, up to the hero's max.
    #[serde(rename = "healing")]
    pub heal_points: i32,
}

impl RestTemplate {
    /// Create a rest spot template.
    pub fn new(name: impl Into<String>, heal_points: i32) -> Self {
        Self {
            name: name.into(),
            heal_points,
        }
    }
}

/// Every template available to a run, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Items that can be found.
    #[serde(default)]
    pub items: Vec<ItemTemplate>,
    /// Enemies that can be encountered.
    #[serde(default)]
    pub enemies: Vec<EnemyTemplate>,
    /// Traps that can be triggered.
    #[serde(default)]
    pub traps: Vec<TrapTemplate>,
    /// Rest spots that can be found.
    #[serde(default, rename = "rest_spots")]
    pub rests: Vec<RestTemplate>,
}

impl Catalog {
    /// The reference catalog shipped with the game.
    pub fn builtin() -> Self {
        Self {
            items: vec![
                ItemTemplate::new("Helmet", "A dented iron helmet.", 0, 1),
                ItemTemplate::new("Breastplate", "Heavy, but it holds.", 0, 3),
                ItemTemplate::new("Knife", "Short and sharp.", 3, 0),
                ItemTemplate::new("Sword", "A soldier's blade.", 5, 1),
            ],
            enemies: vec![
                EnemyTemplate::new("Rat", "A small, unpleasant creature.", 1, 10, 0),
                EnemyTemplate::new("Ogre", "Big. Fat. Smells bad.", 7, 50, 2),
                EnemyTemplate::new(
                    "Skeleton",
                    "Escaped from the biology classroom.",
                    3,
                    25,
                    1,
                ),
            ],
            traps: vec![
                TrapTemplate::new("Spikes", 2),
                TrapTemplate::new("Poison Ivy", 4),
            ],
            rests: vec![RestTemplate::new("Campfire", 3)],
        }
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse, and validate a catalog file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize the catalog as pretty-printed JSON.
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every template's stat constraints and name uniqueness.
    ///
    /// Stats may not exceed [`MAX_STAT`].
    pub fn validate(&self) -> CatalogResult<()> {
        for item in &self.items {
            non_negative(TemplateKind::Item, &item.name, "damage", item.damage_points)?;
            non_negative(TemplateKind::Item, &item.name, "armor", item.armor_points)?;
        }
        for enemy in &self.enemies {
            positive(TemplateKind::Enemy, &enemy.name, "damage", enemy.damage_points)?;
            positive(TemplateKind::Enemy, &enemy.name, "health", enemy.health_points)?;
            non_negative(TemplateKind::Enemy, &enemy.name, "armor", enemy.armor_points)?;
        }
        for trap in &self.traps {
            positive(TemplateKind::Trap, &trap.name, "damage", trap.damage_points)?;
        }
        for rest in &self.rests {
            positive(TemplateKind::Rest, &rest.name, "healing", rest.heal_points)?;
        }

        unique_names(TemplateKind::Item, self.items.iter().map(|t| t.name.as_str()))?;
        unique_names(TemplateKind::Enemy, self.enemies.iter().map(|t| t.name.as_str()))?;
        unique_names(TemplateKind::Trap, self.traps.iter().map(|t| t.name.as_str()))?;
        unique_names(TemplateKind::Rest, self.rests.iter().map(|t| t.name.as_str()))?;

        let counts = [
            (TemplateKind::Item, self.items.len()),
            (TemplateKind::Enemy, self.enemies.len()),
            (TemplateKind::Trap, self.traps.len()),
            (TemplateKind::Rest, self.rests.len()),
        ];
        if let Some((kind, _)) = counts.iter().find(|(_, n)| *n == 0) {
            return Err(CatalogError::EmptyCategory(*kind));
        }
        Ok(())
    }

    /// Find an item by name (case-insensitive).
    pub fn item(&self, name: &str) -> Option<&ItemTemplate> {
        self.items.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Find an enemy by name (case-insensitive).
    pub fn enemy(&self, name: &str) -> Option<&EnemyTemplate> {
        self.enemies
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Total number of templates across all categories.
    pub fn len(&self) -> usize {
        self.items.len() + self.enemies.len() + self.traps.len() + self.rests.len()
    }

    /// Returns true if the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn positive(kind: TemplateKind, name: &str, stat: &str, value: i32) -> CatalogResult<()> {
    if value <= 0 {
        return Err(invalid(kind, name, format!("{stat} must be positive, got {value}")));
    }
    at_most_max(kind, name, stat, value)
}

fn non_negative(kind: TemplateKind, name: &str, stat: &str, value: i32) -> CatalogResult<()> {
    if value < 0 {
        return Err(invalid(kind, name, format!("{stat} must not be negative, got {value}")));
    }
    at_most_max(kind, name, stat, value)
}

fn at_most_max(kind: TemplateKind, name: &str, stat: &str, value: i32) -> CatalogResult<()> {
    if value > MAX_STAT {
        return Err(invalid(
            kind,
            name,
            format!("{stat} must be at most {MAX_STAT}, got {value}"),
        ));
    }
    Ok(())
}

fn invalid(kind: TemplateKind, name: &str, reason: String) -> CatalogError {
    CatalogError::Invalid {
        kind,
        name: name.to_string(),
        reason,
    }
}

fn unique_names<'a>(kind: TemplateKind, names: impl Iterator<Item = &'a str>) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
