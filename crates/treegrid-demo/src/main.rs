#![forbid(unsafe_code)]

//! treegrid demo binary entry point.
//!
//! Loads the fixture items on a background thread, replays a short script of
//! grid edits through the undo log and prints the resulting rows.

mod cli;

use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;
use treegrid::{
    FixtureSource, GridConfig, GridSession, ItemId, Row, check_items, join_fetch, spawn_fetch,
};

use crate::cli::{Command, Opts};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_row(row: &Row<'_>) -> String {
    let marker = match (row.has_children, row.expanded) {
        (false, _) => ' ',
        (true, true) => '-',
        (true, false) => '+',
    };
    format!(
        "{:>3} {}{} {} [{}]",
        row.ordinal,
        "  ".repeat(row.depth),
        marker,
        row.item.label,
        row.item.id
    )
}

/// Scripted session: add, rename, remove, then walk the history.
fn script(grid: &mut GridSession) {
    let added = grid.add_child(&ItemId::from("2"));
    grid.edit_label(&added.id, "Item 9");
    grid.remove(&ItemId::from(4));
    grid.undo();
    grid.undo();
    grid.redo();
    info!(
        index = grid.history().current_index(),
        records = grid.history().len(),
        "script finished"
    );
}

fn run(opts: Opts) -> Result<(), Box<dyn std::error::Error>> {
    let source = FixtureSource::new().with_latency(opts.latency);
    let items = join_fetch(spawn_fetch(source))?;
    check_items(&items)?;

    let config = GridConfig::default().with_default_expanded(opts.expand);
    let mut grid = GridSession::new(items, config);
    script(&mut grid);

    if opts.json {
        let payload = serde_json::json!({
            "items": grid.store().get_all(),
            "history": grid.history().records(),
            "currentIndex": grid.history().current_index(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for row in grid.rows() {
            println!("{}", render_row(&row));
        }
        println!(
            "undo: {}  redo: {}",
            if grid.can_undo() { "yes" } else { "no" },
            if grid.can_redo() { "yes" } else { "no" }
        );
    }
    Ok(())
}

fn main() {
    init_logging();

    let opts = match cli::parse() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{}", cli::HELP_TEXT);
            return;
        }
        Ok(Command::Version) => {
            println!("{}", cli::version_line());
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(opts) {
        eprintln!("treegrid-demo: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treegrid::fixture_items;

    #[test]
    fn script_ends_with_rename_applied_and_removal_undone() {
        let mut grid = GridSession::new(fixture_items(), GridConfig::default());
        script(&mut grid);

        let labels: Vec<String> = grid.rows().iter().map(|r| r.item.label.clone()).collect();
        assert_eq!(
            labels,
            ["Item 1", "Item 2", "Item 5", "Item 6", "Item 9", "Item 4", "Item 7", "Item 8", "Item 3"]
        );
        assert_eq!(grid.history().current_index(), 1);
        assert!(grid.can_undo());
        assert!(grid.can_redo());
    }

    #[test]
    fn rows_render_with_indent_and_marker() {
        let grid = GridSession::new(fixture_items(), GridConfig::default());
        let rows = grid.rows();
        assert_eq!(render_row(&rows[0]), "  1 - Item 1 [1]");
        assert_eq!(render_row(&rows[1]), "  2   - Item 2 [\"2\"]");
        assert_eq!(render_row(&rows[7]), "  8     Item 3 [3]");
    }
}
