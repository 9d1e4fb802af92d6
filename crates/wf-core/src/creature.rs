//! Combat state shared by the hero and enemies.
//!
//! Both creatures embed a [`Vitals`] block. The [`Creature`] trait exposes it
//! and provides the damage, healing, and liveness rules on top, so the
//! battle engine can treat either side the same way.

use crate::catalog::ItemTemplate;
use crate::inventory::{AddOutcome, Inventory};

/// Health, armor, and damage of a creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vitals {
    /// Display name.
    pub name: String,
    /// Current health. Dead at zero or below.
    pub current_health: i32,
    /// Healing never raises health above this.
    pub max_health: i32,
    /// Max health before any bonuses.
    pub base_health: i32,
    /// Subtracted from every incoming hit.
    pub armor: i32,
    /// Damage before any bonuses.
    pub base_damage: i32,
}

impl Vitals {
    /// Create vitals at full health.
    pub fn new(name: impl Into<String>, health: i32, armor: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            current_health: health,
            max_health: health,
            base_health: health,
            armor,
            base_damage: damage,
        }
    }

    /// Subtract `amount - armor` from current health.
    ///
    /// There is no floor: when armor exceeds the hit, health goes up.
    /// Arithmetic saturates at the `i32` bounds.
    pub fn take_damage(&mut self, amount: i32) {
        let net = amount.saturating_sub(self.armor);
        self.current_health = self.current_health.saturating_sub(net);
    }

    /// Add `amount` to current health, capped at max health.
    pub fn take_heal(&mut self, amount: i32) {
        self.current_health = self
            .current_health
            .saturating_add(amount)
            .min(self.max_health);
    }

    /// Returns true while current health is above zero.
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }
}

/// Anything that can fight.
pub trait Creature {
    /// Shared combat state.
    fn vitals(&self) -> &Vitals;

    /// Mutable shared combat state.
    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Damage dealt per hit.
    fn damage(&self) -> i32 {
        self.vitals().base_damage
    }

    /// Display name.
    fn name(&self) -> &str {
        &self.vitals().name
    }

    /// See [`Vitals::take_damage`].
    fn take_damage(&mut self, amount: i32) {
        self.vitals_mut().take_damage(amount);
    }

    /// See [`Vitals::take_heal`].
    fn take_heal(&mut self, amount: i32) {
        self.vitals_mut().take_heal(amount);
    }

    /// See [`Vitals::is_alive`].
    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }

    /// `current/max` health, e.g. `93/104`.
    fn health_line(&self) -> String {
        let v = self.vitals();
        format!("{}/{}", v.current_health, v.max_health)
    }
}

/// A hostile creature spawned from an enemy template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    vitals: Vitals,
    /// Flavor text.
    pub description: String,
}

impl Enemy {
    /// Create a full-health enemy.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        damage: i32,
        health: i32,
        armor: i32,
    ) -> Self {
        Self {
            vitals: Vitals::new(name, health, armor, damage),
            description: description.into(),
        }
    }
}

impl Creature for Enemy {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

/// The player character.
///
/// The hero has no armor of its own. Carried items raise damage by their
/// damage points and max health by their armor points.
#[derive(Debug, Clone)]
pub struct Hero {
    vitals: Vitals,
    inventory: Inventory,
}

impl Hero {
    /// Create a hero at full health with an empty backpack.
    pub fn new(name: impl Into<String>, base_damage: i32, base_health: i32) -> Self {
        Self {
            vitals: Vitals::new(name, base_health, 0, base_damage),
            inventory: Inventory::new(),
        }
    }

    /// Rename the hero.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.vitals.name = name.into();
    }

    /// The hero's backpack.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Put an item into the backpack and refresh max health.
    pub fn add_item(&mut self, item: ItemTemplate) -> AddOutcome {
        let outcome = self.inventory.add(item);
        self.recalculate_max_health();
        outcome
    }

    /// Drop an item by name and refresh max health. Returns the dropped item.
    pub fn remove_item(&mut self, name: &str) -> Option<ItemTemplate> {
        let dropped = self.inventory.remove(name);
        self.recalculate_max_health();
        dropped
    }

    fn recalculate_max_health(&mut self) {
        self.vitals.max_health = self
            .vitals
            .base_health
            .saturating_add(self.inventory.total_armor_bonus());
        self.vitals.current_health = self.vitals.current_health.min(self.vitals.max_health);
    }
}

impl Creature for Hero {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn damage(&self) -> i32 {
        self.vitals
            .base_damage
            .saturating_add(self.inventory.total_damage_bonus())
    }
}
