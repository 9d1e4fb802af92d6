//! World generation.
//!
//! A world is drawn in full before the first level: for every level pick one
//! of the four pools with equal odds, then one event from that pool. Levels
//! are played from the end of the sequence, so the last draw comes first.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;
use wf_core::Catalog;

use crate::error::{EngineError, EngineResult};
use crate::event::{Event, EventKind};

/// Largest number of levels a world may hold.
pub const MAX_LEVELS: usize = 10_000;

/// The candidate events for each category.
#[derive(Debug, Clone, Default)]
pub struct EventPools {
    /// Item events.
    pub items: Vec<Event>,
    /// Enemy events, each owning a freshly spawned enemy.
    pub enemies: Vec<Event>,
    /// Trap events.
    pub traps: Vec<Event>,
    /// Rest events.
    pub rests: Vec<Event>,
}

impl EventPools {
    /// Build one event per catalog template.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            items: catalog.items.iter().cloned().map(Event::ItemFound).collect(),
            enemies: catalog
                .enemies
                .iter()
                .map(|t| Event::EnemyEncounter(t.spawn()))
                .collect(),
            traps: catalog.traps.iter().cloned().map(Event::TrapTriggered).collect(),
            rests: catalog.rests.iter().cloned().map(Event::RestFound).collect(),
        }
    }

    /// The pool for one category.
    pub fn pool(&self, kind: EventKind) -> &[Event] {
        match kind {
            EventKind::ItemFound => &self.items,
            EventKind::EnemyEncounter => &self.enemies,
            EventKind::TrapTriggered => &self.traps,
            EventKind::RestFound => &self.rests,
        }
    }
}

/// The pre-drawn events of a run.
#[derive(Debug, Clone, Default)]
pub struct World {
    events: Vec<Event>,
}

impl World {
    /// Draw `level_count` events from `pools`.
    ///
    /// Each draw is a copy of the pool entry, so enemies drawn twice are two
    /// separate fights. Fails if more than [`MAX_LEVELS`] levels are
    /// requested, or if levels are requested and any pool is empty.
    pub fn generate(level_count: usize, pools: &EventPools, rng: &mut StdRng) -> EngineResult<Self> {
        if level_count > MAX_LEVELS {
            return Err(EngineError::TooManyLevels {
                requested: level_count,
                max: MAX_LEVELS,
            });
        }
        if level_count > 0 {
            let empty = EventKind::ALL.into_iter().find(|k| pools.pool(*k).is_empty());
            if let Some(kind) = empty {
                return Err(EngineError::EmptyPool(kind));
            }
        }

        let mut events = Vec::with_capacity(level_count);
        for draw in 0..level_count {
            let kind = EventKind::ALL[rng.random_range(0..EventKind::ALL.len())];
            let pool = pools.pool(kind);
            let event = pool[rng.random_range(0..pool.len())].clone();
            debug!(draw, kind = %kind, subject = event.subject(), "drew event");
            events.push(event);
        }
        Ok(Self { events })
    }

    /// Wrap an already drawn sequence (in draw order).
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Take the next event to play: the most recently drawn one.
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop()
    }

    /// Remaining events in draw order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Remaining events in the order they will be played.
    pub fn play_order(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().rev()
    }

    /// Number of events not yet played.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true once every event has been played.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use wf_core::{Creature, TrapTemplate};

    fn pools() -> EventPools {
        EventPools::from_catalog(&Catalog::builtin())
    }

    #[test]
    fn forty_levels_forty_events() {
        let pools = pools();
        let mut rng = StdRng::seed_from_u64(42);
        let world = World::generate(40, &pools, &mut rng).unwrap();
        assert_eq!(world.len(), 40);
        for event in world.events() {
            assert!(pools.pool(event.kind()).contains(event));
        }
    }

    #[test]
    fn popping_yields_draws_in_reverse() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut world = World::generate(40, &pools(), &mut rng).unwrap();
        let drawn = world.events().to_vec();
        let planned: Vec<_> = world.play_order().cloned().collect();

        let mut played = Vec::new();
        while let Some(event) = world.pop() {
            played.push(event);
        }
        assert!(world.is_empty());
        assert_eq!(played, planned);
        played.reverse();
        assert_eq!(played, drawn);
    }

    #[test]
    fn same_seed_same_world() {
        let pools = pools();
        let a = World::generate(25, &pools, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = World::generate(25, &pools, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.events(), b.events());
    }

    #[test]
    fn every_category_is_drawn() {
        let mut rng = StdRng::seed_from_u64(11);
        let world = World::generate(400, &pools(), &mut rng).unwrap();
        for kind in EventKind::ALL {
            let count = world.events().iter().filter(|e| e.kind() == kind).count();
            // Expected 100 each; a single rest spot must not make rests rarer.
            assert!((50..=150).contains(&count), "{kind}: {count}");
        }
    }

    #[test]
    fn zero_levels_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let world = World::generate(0, &EventPools::default(), &mut rng).unwrap();
        assert!(world.is_empty());
    }

    #[test]
    fn oversized_world_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(World::generate(MAX_LEVELS, &pools(), &mut rng).is_ok());
        let err = World::generate(usize::MAX, &pools(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EngineError::TooManyLevels {
                requested: usize::MAX,
                max: MAX_LEVELS
            }
        ));
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut pools = pools();
        pools.traps.clear();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            World::generate(3, &pools, &mut rng),
            Err(EngineError::EmptyPool(EventKind::TrapTriggered))
        ));
    }

    #[test]
    fn repeated_enemy_draws_do_not_share_health() {
        let pools = EventPools {
            enemies: vec![Event::EnemyEncounter(wf_core::Enemy::new("Rat", "", 1, 10, 0))],
            items: vec![Event::TrapTriggered(TrapTemplate::new("Spikes", 2))],
            traps: vec![Event::TrapTriggered(TrapTemplate::new("Spikes", 2))],
            rests: vec![Event::TrapTriggered(TrapTemplate::new("Spikes", 2))],
        };
        let mut rng = StdRng::seed_from_u64(5);
        let mut world = World::generate(60, &pools, &mut rng).unwrap();

        let mut rats = Vec::new();
        while let Some(event) = world.pop() {
            if let Event::EnemyEncounter(rat) = event {
                rats.push(rat);
            }
        }
        assert!(rats.len() >= 2);
        rats[0].take_damage(10);
        assert!(!rats[0].is_alive());
        assert!(rats[1].is_alive());
    }
}
