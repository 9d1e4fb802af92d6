use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

pub fn run(path: Option<&Path>, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(path)?;

    if json {
        println!("{}", catalog.to_json().map_err(|e| e.to_string())?);
        return Ok(());
    }

    println!("  {}", "Enemies".bold());
    let mut table = Table::new();
    table.set_header(vec!["Name", "Health", "Damage", "Armor", "Description"]);
    for enemy in &catalog.enemies {
        table.add_row(vec![
            Cell::new(&enemy.name),
            Cell::new(enemy.health_points),
            Cell::new(enemy.damage_points),
            Cell::new(enemy.armor_points),
            Cell::new(&enemy.description),
        ]);
    }
    println!("{table}\n");

    println!("  {}", "Items".bold());
    let mut table = Table::new();
    table.set_header(vec!["Name", "Damage", "Armor", "Description"]);
    for item in &catalog.items {
        table.add_row(vec![
            Cell::new(&item.name),
            Cell::new(item.damage_points),
            Cell::new(item.armor_points),
            Cell::new(&item.description),
        ]);
    }
    println!("{table}\n");

    println!("  {}", "Traps".bold());
    let mut table = Table::new();
    table.set_header(vec!["Name", "Damage"]);
    for trap in &catalog.traps {
        table.add_row(vec![Cell::new(&trap.name), Cell::new(trap.damage_points)]);
    }
    println!("{table}\n");

    println!("  {}", "Rest spots".bold());
    let mut table = Table::new();
    table.set_header(vec!["Name", "Healing"]);
    for rest in &catalog.rests {
        table.add_row(vec![Cell::new(&rest.name), Cell::new(rest.heal_points)]);
    }
    println!("{table}");

    Ok(())
}
