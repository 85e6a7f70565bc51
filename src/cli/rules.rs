use comfy_table::{Cell, Table};

use crate::categorize::{self, DEFAULT_CATEGORY};
use crate::error::Result;
use crate::settings::load_settings;

pub fn list() -> Result<()> {
    let settings = load_settings();

    let mut table = Table::new();
    table.set_header(vec!["#", "Keywords", "Category", "Source"]);

    let mut idx = 1usize;
    for rule in &settings.rules {
        table.add_row(vec![
            Cell::new(idx),
            Cell::new(rule.keywords.join(" | ")),
            Cell::new(&rule.category),
            Cell::new("settings"),
        ]);
        idx += 1;
    }
    for rule in categorize::builtin_rules() {
        table.add_row(vec![
            Cell::new(idx),
            Cell::new(rule.keywords.join(" | ")),
            Cell::new(&rule.category),
            Cell::new("built-in"),
        ]);
        idx += 1;
    }
    table.add_row(vec![
        Cell::new("-"),
        Cell::new("(no match)"),
        Cell::new(DEFAULT_CATEGORY),
        Cell::new("default"),
    ]);

    println!("Category rules\n{table}");
    Ok(())
}
