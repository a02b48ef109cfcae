use anyhow::Context;
use difflens_view::DiffViewer;

use crate::cli::{Cli, OutputFormat};
use crate::input;
use crate::render;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let (left, right) = input::load_pair(&cli.left, &cli.right)?;

    let mut viewer = DiffViewer::new(&left, &right);
    viewer.set_only_changed(cli.only_changed);
    if cli.collapse_all {
        viewer.collapse_all();
    } else if cli.expand_all {
        viewer.expand_all();
    }

    match cli.format {
        OutputFormat::Json => {
            let report = render::JsonReport {
                stats: viewer.stats(),
                tree: viewer.tree(),
            };
            let encoded =
                serde_json::to_string_pretty(&report).context("encoding the diff report")?;
            println!("{encoded}");
        }
        OutputFormat::Text => {
            println!("{}", render::stats_line(viewer.stats()));
            println!();
            print!("{}", render::render_tree(&viewer));
        }
    }

    Ok(())
}
