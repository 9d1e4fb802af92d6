//! The game loop: greeting, levels, and the end of the road.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use wf_core::{Catalog, Creature, Hero};

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::EngineResult;
use crate::event::{DeathCause, EventOutcome};
use crate::world::{EventPools, World};

const MENU_PROMPT: &str = "1. Show hero stats\n2. Show backpack\n3. Move on\n\n";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every level survived.
    Victory {
        /// Levels completed.
        levels: usize,
    },
    /// The hero died.
    Defeat {
        /// Level (1-based) on which the hero died.
        level: usize,
        /// What killed the hero.
        cause: DeathCause,
    },
}

/// An entry of the between-levels menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show name, health, and damage.
    ShowHero,
    /// List the backpack.
    ShowBackpack,
    /// Leave the menu and face the level's event.
    Advance,
}

impl MenuChoice {
    /// Parse a menu answer. Only `1`, `2`, and `3` are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ShowHero),
            "2" => Some(Self::ShowBackpack),
            "3" => Some(Self::Advance),
            _ => None,
        }
    }
}

/// A single run: one hero walking through one pre-drawn world.
pub struct Game {
    hero: Hero,
    world: World,
    levels: usize,
}

impl Game {
    /// Create a hero and draw the whole world from the catalog.
    pub fn new(catalog: &Catalog, config: GameConfig) -> EngineResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let pools = EventPools::from_catalog(catalog);
        let world = World::generate(config.levels, &pools, &mut rng)?;
        let hero = Hero::new(config.hero_name, config.base_damage, config.base_health);
        info!(levels = config.levels, seed = ?config.seed, "world generated");
        Ok(Self::from_parts(hero, world))
    }

    /// Assemble a game from an existing hero and world. The level count is
    /// the number of events in the world.
    pub fn from_parts(hero: Hero, world: World) -> Self {
        let levels = world.len();
        Self {
            hero,
            world,
            levels,
        }
    }

    /// The hero.
    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    /// The events still ahead.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Total number of levels in this run.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Play the whole run.
    pub fn play(&mut self, console: &mut impl Console) -> EngineResult<GameOutcome> {
        self.greet(console)?;
        if let Some((level, cause)) = self.run_levels(console)? {
            info!(level, cause = %cause, "run lost");
            console.announce("Game over.")?;
            return Ok(GameOutcome::Defeat { level, cause });
        }
        self.end(console)?;
        info!(levels = self.levels, "run won");
        Ok(GameOutcome::Victory {
            levels: self.levels,
        })
    }

    /// Ask the player's name and announce the road ahead.
    pub fn greet(&mut self, console: &mut impl Console) -> EngineResult<()> {
        console.announce("Welcome to this world, wanderer. What is your name?")?;
        let name = console.read_non_empty_line("Enter your name: ")?;
        self.hero.set_name(name);
        console.announce(&format!("A fine warrior's name, {}.", self.hero.name()))?;
        console.announce(&format!(
            "Your journey begins now. {} levels lie ahead. Let the adventure begin!",
            self.levels
        ))
    }

    /// Show the between-levels menu until the player chooses to move on.
    pub fn player_menu(&self, console: &mut impl Console) -> EngineResult<()> {
        loop {
            let answer = console.read_non_empty_line(MENU_PROMPT)?;
            match MenuChoice::parse(&answer) {
                Some(MenuChoice::ShowHero) => console.announce(&self.hero_info())?,
                Some(MenuChoice::ShowBackpack) => console.announce(&self.backpack_info())?,
                Some(MenuChoice::Advance) => return Ok(()),
                None => {}
            }
        }
    }

    /// Play levels until the world runs out or the hero dies. Returns the
    /// fatal level and cause of death, if any.
    pub fn run_levels(
        &mut self,
        console: &mut impl Console,
    ) -> EngineResult<Option<(usize, DeathCause)>> {
        for level in 1..=self.levels {
            let Some(event) = self.world.pop() else {
                break;
            };
            info!(level, kind = %event.kind(), subject = event.subject(), "level started");
            console.announce(&format!(
                "Day {level} of your adventure begins. Today's event: {event}"
            ))?;

            self.player_menu(console)?;

            if let EventOutcome::HeroDied(cause) = event.apply(&mut self.hero, console)? {
                return Ok(Some((level, cause)));
            }
        }
        Ok(None)
    }

    /// Celebrate a completed run.
    pub fn end(&self, console: &mut impl Console) -> EngineResult<()> {
        console.announce(&format!(
            "Wow! You made it through all {} levels and reached the end. Congratulations!",
            self.levels
        ))
    }

    fn hero_info(&self) -> String {
        format!(
            "Name: {}\nHealth: {}\nDamage: {}",
            self.hero.name(),
            self.hero.health_line(),
            self.hero.damage()
        )
    }

    fn backpack_info(&self) -> String {
        let inventory = self.hero.inventory();
        if inventory.is_empty() {
            "Your backpack is empty.".to_string()
        } else {
            format!("Items in your backpack:\n{inventory}")
        }
    }
}
