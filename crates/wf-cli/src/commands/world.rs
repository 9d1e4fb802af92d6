use std::path::Path;

use colored::Colorize;
use comfy_table::Table;

use wf_engine::{Game, GameConfig};

pub fn run(path: Option<&Path>, levels: usize, seed: u64) -> Result<(), String> {
    let catalog = super::load_catalog(path)?;
    let config = GameConfig::default().with_levels(levels).with_seed(seed);
    let game = Game::new(&catalog, config).map_err(|e| e.to_string())?;

    println!("  {} {levels} levels, seed {seed}", "World".bold());

    let mut table = Table::new();
    table.set_header(vec!["Level", "Event", "Subject"]);
    for (i, event) in game.world().play_order().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            event.kind().to_string(),
            event.subject().to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
