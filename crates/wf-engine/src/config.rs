//! Configuration for a single run.

use wf_core::MAX_STAT;

/// Setup for a run: level count, RNG seed, and starting hero.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of levels (one event each).
    pub levels: usize,
    /// RNG seed for reproducible worlds. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Hero name until the player picks one.
    pub hero_name: String,
    /// Hero damage before items.
    pub base_damage: i32,
    /// Hero max health before items.
    pub base_health: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: 40,
            seed: None,
            hero_name: "Wanderer".to_string(),
            base_damage: 10,
            base_health: 100,
        }
    }
}

impl GameConfig {
    /// Set the number of levels.
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the placeholder hero name.
    pub fn with_hero_name(mut self, name: impl Into<String>) -> Self {
        self.hero_name = name.into();
        self
    }

    /// Set the hero's starting damage and health, each clamped to
    /// `1..=MAX_STAT`.
    pub fn with_hero_stats(mut self, base_damage: i32, base_health: i32) -> Self {
        self.base_damage = base_damage.clamp(1, MAX_STAT);
        self.base_health = base_health.clamp(1, MAX_STAT);
        self
    }
}
