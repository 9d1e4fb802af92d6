//! Turn-based combat between the hero and one enemy.
//!
//! Each round waits for the player to press enter, then the hero strikes.
//! A surviving enemy strikes back with its base damage. The battle ends when
//! either side drops to zero health. The hero keeps any lost health
//! afterwards.

use tracing::{debug, info};
use wf_core::{Creature, Enemy, Hero};

use crate::console::Console;
use crate::error::EngineResult;

/// Where a battle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    /// Waiting for the player to start the next round.
    AwaitingRound,
    /// The hero has struck this round; the enemy has not answered yet.
    HeroAttacked,
    /// The enemy is dead. Terminal.
    EnemyDefeated,
    /// The hero is dead. Terminal.
    HeroDefeated,
}

impl BattleState {
    /// Returns true for the two terminal states.
    pub fn is_over(self) -> bool {
        matches!(self, Self::EnemyDefeated | Self::HeroDefeated)
    }
}

/// How a finished battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The hero won.
    EnemyDefeated,
    /// The hero died.
    HeroDefeated,
}

/// What happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number (1-based).
    pub round: u32,
    /// Damage the hero dealt.
    pub hero_hit: i32,
    /// Enemy health after the hero's hit.
    pub enemy_health: i32,
    /// Damage the enemy dealt back, if it survived.
    pub enemy_hit: Option<i32>,
    /// Hero health at the end of the round.
    pub hero_health: i32,
}

/// A fight between the hero and one enemy.
pub struct Battle<'a> {
    hero: &'a mut Hero,
    enemy: &'a mut Enemy,
    state: BattleState,
    round: u32,
    log: Vec<RoundReport>,
}

impl<'a> Battle<'a> {
    /// Start a battle. Both sides are borrowed until it ends.
    pub fn new(hero: &'a mut Hero, enemy: &'a mut Enemy) -> Self {
        Self {
            hero,
            enemy,
            state: BattleState::AwaitingRound,
            round: 0,
            log: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Number of rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Reports of every completed round.
    pub fn log(&self) -> &[RoundReport] {
        &self.log
    }

    /// Fight rounds until one side falls.
    pub fn run(&mut self, console: &mut impl Console) -> EngineResult<BattleOutcome> {
        loop {
            match self.play_round(console)? {
                BattleState::EnemyDefeated => return Ok(BattleOutcome::EnemyDefeated),
                BattleState::HeroDefeated => return Ok(BattleOutcome::HeroDefeated),
                BattleState::AwaitingRound | BattleState::HeroAttacked => {}
            }
        }
    }

    /// Play a single round and return the state it ends in. Does nothing
    /// once the battle is over.
    pub fn play_round(&mut self, console: &mut impl Console) -> EngineResult<BattleState> {
        if self.state.is_over() {
            return Ok(self.state);
        }

        console.wait_for_proceed("Press ENTER to start the battle round...")?;
        self.round += 1;

        let hero_hit = self.hero.damage();
        self.enemy.take_damage(hero_hit);
        self.state = BattleState::HeroAttacked;
        console.announce(&format!(
            "{} attacks the {} and deals {hero_hit} damage.",
            self.hero.name(),
            self.enemy.name()
        ))?;
        console.announce(&format!(
            "{} health: {}",
            self.enemy.name(),
            self.enemy.health_line()
        ))?;

        let mut report = RoundReport {
            round: self.round,
            hero_hit,
            enemy_health: self.enemy.vitals().current_health,
            enemy_hit: None,
            hero_health: self.hero.vitals().current_health,
        };

        if !self.enemy.is_alive() {
            self.state = BattleState::EnemyDefeated;
            self.finish_round(report);
            info!(enemy = %self.enemy.name(), rounds = self.round, "enemy defeated");
            console.announce(&format!("Well done, the {} is defeated!", self.enemy.name()))?;
            return Ok(self.state);
        }

        let enemy_hit = self.enemy.vitals().base_damage;
        self.hero.take_damage(enemy_hit);
        report.enemy_hit = Some(enemy_hit);
        report.hero_health = self.hero.vitals().current_health;
        console.announce(&format!("You take {enemy_hit} damage."))?;
        console.announce(&format!("Your health: {}", self.hero.health_line()))?;

        self.state = if self.hero.is_alive() {
            BattleState::AwaitingRound
        } else {
            BattleState::HeroDefeated
        };
        self.finish_round(report);

        if self.state == BattleState::HeroDefeated {
            info!(enemy = %self.enemy.name(), rounds = self.round, "hero slain in battle");
            console.announce(&format!(
                "You lost the battle. The {} killed you!",
                self.enemy.name()
            ))?;
        }
        Ok(self.state)
    }

    fn finish_round(&mut self, report: RoundReport) {
        debug!(
            round = report.round,
            hero_hit = report.hero_hit,
            enemy_health = report.enemy_health,
            enemy_hit = ?report.enemy_hit,
            hero_health = report.hero_health,
            "battle round"
        );
        self.log.push(report);
    }
}
