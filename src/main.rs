mod action;
mod app;
mod canvas;
mod crossterm;
mod history;
mod input;
mod log;
mod theme;
mod ui;
mod undo;

use crate::app::Config;
use crate::crossterm::run;
use clap::{arg, command, value_parser};
use std::{error::Error, time::Duration};

fn main() -> Result<(), Box<dyn Error>> {
    let defaults = Config::default();
    let matches = command!()
        .propagate_version(true)
        .arg(
            arg!(--columns <N> "number of grid columns")
                .required(false)
                .default_value("15")
                .value_parser(value_parser!(u16).range(1..)),
        )
        .arg(
            arg!(--rows <N> "number of grid rows")
                .required(false)
                .default_value("10")
                .value_parser(value_parser!(u16).range(1..)),
        )
        .arg(
            arg!(--"cell-width" <N> "terminal columns per grid cell")
                .required(false)
                .default_value("4")
                .value_parser(value_parser!(u16).range(1..)),
        )
        .arg(
            arg!(--"cell-height" <N> "terminal rows per grid cell")
                .required(false)
                .default_value("2")
                .value_parser(value_parser!(u16).range(1..)),
        )
        .arg(
            arg!(--"tick-rate" <MS> "redraw interval in milliseconds")
                .required(false)
                .default_value("250")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(arg!(--"no-history" "paint and erase without undo/redo"))
        .arg(arg!(--"no-grid" "start with grid lines hidden"))
        .get_matches();

    let get = |id: &str, fallback: u16| matches.get_one::<u16>(id).copied().unwrap_or(fallback);
    let config = Config {
        columns: get("columns", defaults.columns),
        rows: get("rows", defaults.rows),
        cell_width: get("cell-width", defaults.cell_width),
        cell_height: get("cell-height", defaults.cell_height),
        history: !matches.is_present("no-history"),
        grid_lines: !matches.is_present("no-grid"),
    };
    let tick_rate = matches.get_one::<u64>("tick-rate").copied().unwrap_or(250);

    run(Duration::from_millis(tick_rate), config)?;
    Ok(())
}
