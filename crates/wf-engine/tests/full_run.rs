//! Full-run integration tests for the game engine.
use wf_core::{Catalog, Creature, Enemy, Hero, ItemTemplate, RestTemplate, TrapTemplate};
use wf_engine::{
    DeathCause, EngineError, Event, Game, GameConfig, GameOutcome, ScriptedConsole, World,
};

fn game(hero: Hero, draws: Vec<Event>) -> Game {
    Game::from_parts(hero, World::from_events(draws))
}

#[test]
fn trap_death_ends_run_before_remaining_levels() {
    // Drawn order: rest, item, trap. The trap is played first.
    let mut game = game(
        Hero::new("Wanderer", 10, 3),
        vec![
            Event::RestFound(RestTemplate::new("Campfire", 3)),
            Event::ItemFound(ItemTemplate::new("Helmet", "", 0, 1)),
            Event::TrapTriggered(TrapTemplate::new("Pit", 5)),
        ],
    );
    let mut console = ScriptedConsole::new(["Aria", "3"]);

    let outcome = game.play(&mut console).unwrap();
    assert_eq!(
        outcome,
        GameOutcome::Defeat {
            level: 1,
            cause: DeathCause::Trap {
                trap: "Pit".to_string()
            },
        }
    );
    assert_eq!(game.hero().vitals().current_health, -2);
    assert_eq!(game.world().len(), 2);
    assert!(!console.transcript().contains("Day 2"));
    assert!(console.transcript().ends_with("Game over."));
}

#[test]
fn battle_death_ends_run() {
    let mut game = game(
        Hero::new("Wanderer", 1, 1),
        vec![
            Event::RestFound(RestTemplate::new("Campfire", 3)),
            Event::EnemyEncounter(Enemy::new("Giant", "", 500, 1000, 0)),
        ],
    );
    let mut console = ScriptedConsole::new(["Aria", "3", ""]);

    let outcome = game.play(&mut console).unwrap();
    assert_eq!(
        outcome,
        GameOutcome::Defeat {
            level: 1,
            cause: DeathCause::Battle {
                enemy: "Giant".to_string()
            },
        }
    );
    assert_eq!(game.hero().vitals().current_health, -499);
    assert_eq!(console.remaining_inputs(), 0);
}

#[test]
fn surviving_every_level_is_victory() {
    let mut game = game(
        Hero::new("Wanderer", 10, 100),
        vec![
            Event::RestFound(RestTemplate::new("Campfire", 3)),
            Event::EnemyEncounter(Enemy::new("Skeleton", "", 3, 25, 1)),
            Event::TrapTriggered(TrapTemplate::new("Spikes", 2)),
            Event::ItemFound(ItemTemplate::new("Sword", "", 5, 1)),
        ],
    );
    let mut console = ScriptedConsole::new([
        "Aria", // name
        "3", "yes", // level 1: sword, taken
        "1", "3", // level 2: spikes, after checking stats
        "3", "", "", // level 3: skeleton, 14 net per hit, two rounds
        "2", "3", // level 4: campfire, after checking the backpack
    ]);

    let outcome = game.play(&mut console).unwrap();
    assert_eq!(outcome, GameOutcome::Victory { levels: 4 });
    assert_eq!(console.remaining_inputs(), 0);

    // 100/101 after the sword, -2 spikes, -3 skeleton, +3 campfire.
    assert_eq!(game.hero().health_line(), "98/101");
    assert_eq!(game.hero().damage(), 15);

    let transcript = console.transcript();
    assert!(transcript.contains("Name: Aria\nHealth: 100/101\nDamage: 15"));
    assert!(transcript.contains("Sword: Damage: 5, Armor: 1"));
    assert!(transcript.contains("Well done, the Skeleton is defeated!"));
    assert!(transcript.contains("all 4 levels"));
}

#[test]
fn no_healing_after_victory() {
    let mut game = game(
        Hero::new("Wanderer", 10, 100),
        vec![Event::EnemyEncounter(Enemy::new("Ogre", "", 7, 50, 2))],
    );
    // 8 net per hit: 7 rounds, 6 retaliations of 7.
    let mut console = ScriptedConsole::new(["Aria", "3", "", "", "", "", "", "", ""]);

    let outcome = game.play(&mut console).unwrap();
    assert_eq!(outcome, GameOutcome::Victory { levels: 1 });
    assert_eq!(game.hero().health_line(), "58/100");
}

#[test]
fn closed_input_is_a_fault() {
    let mut game = Game::new(
        &Catalog::builtin(),
        GameConfig::default().with_levels(3).with_seed(42),
    )
    .unwrap();
    let mut console = ScriptedConsole::new(["Aria"]);
    assert!(matches!(
        game.play(&mut console),
        Err(EngineError::InputClosed)
    ));
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = GameConfig::default().with_levels(40).with_seed(1234);
    let a = Game::new(&Catalog::builtin(), config.clone()).unwrap();
    let b = Game::new(&Catalog::builtin(), config).unwrap();
    assert_eq!(a.world().events(), b.world().events());
    assert_eq!(a.levels(), 40);
}
