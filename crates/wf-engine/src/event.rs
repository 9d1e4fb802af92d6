//! Level events and their effect on the hero.

use tracing::{debug, info};
use wf_core::{AddOutcome, Creature, Enemy, Hero, ItemTemplate, RestTemplate, TrapTemplate};

use crate::battle::{Battle, BattleOutcome};
use crate::console::Console;
use crate::error::EngineResult;

/// The four categories of level content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An item lies on the path.
    ItemFound,
    /// An enemy blocks the way.
    EnemyEncounter,
    /// A trap springs.
    TrapTriggered,
    /// A place to rest.
    RestFound,
}

impl EventKind {
    /// All kinds, in pool order.
    pub const ALL: [EventKind; 4] = [
        EventKind::ItemFound,
        EventKind::EnemyEncounter,
        EventKind::TrapTriggered,
        EventKind::RestFound,
    ];
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemFound => write!(f, "Item found"),
            Self::EnemyEncounter => write!(f, "Enemy encounter"),
            Self::TrapTriggered => write!(f, "Trap triggered"),
            Self::RestFound => write!(f, "Rest stop"),
        }
    }
}

/// What killed the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeathCause {
    /// Killed by a trap.
    Trap {
        /// Name of the trap.
        trap: String,
    },
    /// Killed in battle.
    Battle {
        /// Name of the enemy.
        enemy: String,
    },
}

impl std::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trap { trap } => write!(f, "killed by {trap}"),
            Self::Battle { enemy } => write!(f, "slain by {enemy}"),
        }
    }
}

/// What happened after an event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The hero survived; the run goes on.
    Continue,
    /// The hero died; the run is over.
    HeroDied(DeathCause),
}

/// One unit of level content.
///
/// Enemy events own their enemy, so every encounter fights its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Offer the hero an item.
    ItemFound(ItemTemplate),
    /// Fight an enemy to the death.
    EnemyEncounter(Enemy),
    /// Damage the hero.
    TrapTriggered(TrapTemplate),
    /// Heal the hero.
    RestFound(RestTemplate),
}

impl Event {
    /// The category of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ItemFound(_) => EventKind::ItemFound,
            Self::EnemyEncounter(_) => EventKind::EnemyEncounter,
            Self::TrapTriggered(_) => EventKind::TrapTriggered,
            Self::RestFound(_) => EventKind::RestFound,
        }
    }

    /// Name of the item, enemy, trap, or rest spot involved.
    pub fn subject(&self) -> &str {
        match self {
            Self::ItemFound(item) => &item.name,
            Self::EnemyEncounter(enemy) => enemy.name(),
            Self::TrapTriggered(trap) => &trap.name,
            Self::RestFound(rest) => &rest.name,
        }
    }

    /// Apply the event to the hero, talking to the player through `console`.
    pub fn apply(self, hero: &mut Hero, console: &mut impl Console) -> EngineResult<EventOutcome> {
        match self {
            Self::ItemFound(item) => offer_item(item, hero, console),
            Self::EnemyEncounter(mut enemy) => fight(&mut enemy, hero, console),
            Self::TrapTriggered(trap) => spring_trap(&trap, hero, console),
            Self::RestFound(rest) => rest_at(&rest, hero, console),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

fn offer_item(
    item: ItemTemplate,
    hero: &mut Hero,
    console: &mut impl Console,
) -> EngineResult<EventOutcome> {
    console.announce(&format!("You found an item: {}", item.name))?;
    console.announce(&format!("Its stats:\n{}", item.stat_summary()))?;
    console.announce(&format!("Do you want to take the {}?", item.name))?;

    if !console.read_yes_no("Yes or no? ")? {
        console.announce("The item stays where it lies.")?;
        return Ok(EventOutcome::Continue);
    }

    console.announce("Item taken.")?;
    let name = item.name.clone();
    match hero.add_item(item) {
        AddOutcome::Added => {
            debug!(item = %name, damage = hero.damage(), "item added to backpack");
            console.announce(&format!("{name} was put into your backpack."))?;
        }
        AddOutcome::Duplicate => {
            console.announce(&format!(
                "You already carry a {name}. Why would you need a second one?"
            ))?;
        }
    }
    Ok(EventOutcome::Continue)
}

/// Take an item out of the hero's backpack and tell the player how it went.
/// Returns the dropped item, or `None` if nothing by that name was carried.
pub fn drop_item(
    hero: &mut Hero,
    name: &str,
    console: &mut impl Console,
) -> EngineResult<Option<ItemTemplate>> {
    let dropped = hero.remove_item(name);
    match &dropped {
        Some(item) => {
            debug!(item = %item.name, damage = hero.damage(), "item dropped");
            console.announce(&format!("{} was dropped on the ground.", item.name))?;
        }
        None => console.announce(&format!("There is no {name} in your backpack."))?,
    }
    Ok(dropped)
}

fn fight(
    enemy: &mut Enemy,
    hero: &mut Hero,
    console: &mut impl Console,
) -> EngineResult<EventOutcome> {
    console.announce(&format!("The battle with the {} begins!", enemy.name()))?;
    let name = enemy.name().to_string();

    let mut battle = Battle::new(hero, enemy);
    match battle.run(console)? {
        BattleOutcome::EnemyDefeated => Ok(EventOutcome::Continue),
        BattleOutcome::HeroDefeated => Ok(EventOutcome::HeroDied(DeathCause::Battle { enemy: name })),
    }
}

fn spring_trap(
    trap: &TrapTemplate,
    hero: &mut Hero,
    console: &mut impl Console,
) -> EngineResult<EventOutcome> {
    hero.take_damage(trap.damage_points);
    console.announce(&format!(
        "You stumbled into the {} and took {} damage. Health: {}",
        trap.name,
        trap.damage_points,
        hero.health_line()
    ))?;

    if hero.is_alive() {
        return Ok(EventOutcome::Continue);
    }
    info!(trap = %trap.name, "hero killed by trap");
    console.announce("Sadly, the trap was the end of you.")?;
    Ok(EventOutcome::HeroDied(DeathCause::Trap {
        trap: trap.name.clone(),
    }))
}

fn rest_at(
    rest: &RestTemplate,
    hero: &mut Hero,
    console: &mut impl Console,
) -> EngineResult<EventOutcome> {
    hero.take_heal(rest.heal_points);
    console.announce(&format!(
        "You settle down by the {}. Restored {} health.",
        rest.name, rest.heal_points
    ))?;
    console.announce(&format!("Health: {}", hero.health_line()))?;
    Ok(EventOutcome::Continue)
}
