//! The hero's backpack.

use crate::catalog::ItemTemplate;

/// Result of trying to put an item into the backpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was stored.
    Added,
    /// An item with the same name is already carried; nothing changed.
    Duplicate,
}

/// An insertion-ordered set of items, unique by name.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<ItemTemplate>,
}

impl Inventory {
    /// Create an empty backpack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an item unless one with the same name is already carried.
    pub fn add(&mut self, item: ItemTemplate) -> AddOutcome {
        if self.contains(&item.name) {
            return AddOutcome::Duplicate;
        }
        self.items.push(item);
        AddOutcome::Added
    }

    /// Remove an item by name. Returns the dropped item, or `None` if it
    /// was not carried.
    pub fn remove(&mut self, name: &str) -> Option<ItemTemplate> {
        let pos = self.items.iter().position(|i| i.name == name)?;
        Some(self.items.remove(pos))
    }

    /// Returns true if an item with this name is carried.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    /// Sum of damage bonuses across all carried items, saturating.
    pub fn total_damage_bonus(&self) -> i32 {
        self.items
            .iter()
            .fold(0, |sum, i| sum.saturating_add(i.damage_points))
    }

    /// Sum of armor bonuses across all carried items, saturating.
    pub fn total_armor_bonus(&self) -> i32 {
        self.items
            .iter()
            .fold(0, |sum, i| sum.saturating_add(i.armor_points))
    }

    /// Carried items in insertion order.
    pub fn items(&self) -> &[ItemTemplate] {
        &self.items
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the backpack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", item.name, item.stat_summary())?;
        }
        Ok(())
    }
}
