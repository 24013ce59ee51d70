// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver.
//!
//! ```text
//! gini-basins basins --base1 100,20,20,100 --base2 80,40,40,80 --budget 22
//! gini-basins top-k --base 10,20,20,10 --limit 20 --sign maximize
//! ```

use std::process;
use std::str::FromStr;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use gini_basins::geometry::Table;
use gini_basins::state::Counters;
use gini_basins::{
    sweep, top_k_search, HistoryStore, Result, SearchConfig, SearchError, SearchMode, Sign,
};

fn cli() -> Command {
    let sign = Arg::new("sign")
        .long("sign")
        .value_name("minimize|maximize")
        .default_value("minimize")
        .help("Which extremum of the gain difference to look for");

    Command::new("gini-basins")
        .about("Map local optima and attraction basins of the Gini split-gain landscape")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("basins")
                .about("Seed a basin search from every pair within a step budget")
                .arg(table_arg("base1", "Base of the first table"))
                .arg(table_arg("base2", "Base of the second table"))
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .value_parser(value_parser!(i32))
                        .default_value("22")
                        .help("Step budget shared by root distance and search depth"),
                )
                .arg(sign.clone())
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_name("exhaustive|greedy")
                        .default_value("exhaustive")
                        .help("Which neighbors the search descends into"),
                )
                .arg(
                    Arg::new("min-basin-size")
                        .long("min-basin-size")
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("Hide basins with this many pairs or fewer"),
                ),
        )
        .subcommand(
            Command::new("top-k")
                .about("Rank the best-scoring table pairs exhaustively")
                .arg(table_arg("base", "Base shared by both tables"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(i32))
                        .default_value("20")
                        .help("Maximum step sum"),
                )
                .arg(sign)
                .arg(
                    Arg::new("capacity")
                        .long("capacity")
                        .value_parser(value_parser!(usize))
                        .default_value("20")
                        .help("Number of solutions kept"),
                )
                .arg(
                    Arg::new("slack")
                        .long("slack")
                        .value_parser(value_parser!(f64))
                        .default_value("1.0")
                        .help("Score window above the running best"),
                ),
        )
}

fn table_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("A,B,C,D")
        .required(true)
        .help(help)
}

/// Parse four comma-separated non-negative cell counts.
fn parse_table(input: &str) -> Result<Table> {
    let invalid = |reason: String| SearchError::InvalidVector {
        input: input.to_string(),
        reason,
    };
    let cells = input
        .split(',')
        .map(|cell| {
            cell.trim()
                .parse::<i32>()
                .map_err(|e| invalid(format!("'{}': {}", cell.trim(), e)))
        })
        .collect::<Result<Vec<i32>>>()?;
    let table: Table = cells
        .as_slice()
        .try_into()
        .map_err(|_| invalid(format!("expected 4 cells, got {}", cells.len())))?;
    if table.iter().any(|&x| x < 0) {
        return Err(invalid("cells must be non-negative".to_string()));
    }
    Ok(table)
}

fn parse_choice<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T> {
    let value = matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default();
    value
        .parse()
        .map_err(|_| SearchError::InvalidConfig(format!("unknown {} '{}'", name, value)))
}

fn table(matches: &ArgMatches, name: &str) -> Result<Table> {
    parse_table(
        matches
            .get_one::<String>(name)
            .map(String::as_str)
            .unwrap_or_default(),
    )
}

fn run_basins(matches: &ArgMatches) -> Result<()> {
    let base1 = table(matches, "base1")?;
    let base2 = table(matches, "base2")?;
    let budget = *matches.get_one::<i32>("budget").expect("budget has a default");
    let sign: Sign = parse_choice(matches, "sign")?;
    let mode: SearchMode = parse_choice(matches, "mode")?;
    let config = SearchConfig::default().with_min_basin_size(
        *matches
            .get_one::<usize>("min-basin-size")
            .expect("min-basin-size has a default"),
    );
    config.validate()?;

    let mut history = HistoryStore::with_config(&config);
    let report = sweep(&base1, &base2, budget, sign, mode, &mut history)?;

    println!("{:>5} {:>9} {:>9}", "color", "count", "best");
    for (color, basin) in &report.histogram {
        println!("{:>5} {:>9} {:>9.3}", color, basin.count, basin.value);
    }
    println!(
        "{} roots, {} pairs, {} basins, {} local optima",
        report.roots,
        report.marked,
        report.colors,
        history.statistics().get(Counters::LocalOptima)
    );
    Ok(())
}

fn run_top_k(matches: &ArgMatches) -> Result<()> {
    let base = table(matches, "base")?;
    let limit = *matches.get_one::<i32>("limit").expect("limit has a default");
    let sign: Sign = parse_choice(matches, "sign")?;
    let config = SearchConfig::default()
        .with_top_k_capacity(*matches.get_one::<usize>("capacity").expect("capacity has a default"))
        .with_top_k_slack(*matches.get_one::<f64>("slack").expect("slack has a default"));

    let ranked = top_k_search(&base, limit, sign, &config)?;
    println!("{} solutions", ranked.len());
    for solution in &ranked {
        println!(
            "{:>9.3}  {:?}  {:?}",
            solution.score, solution.x1, solution.x2
        );
    }
    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match matches.subcommand() {
        Some(("basins", sub)) => run_basins(sub),
        Some(("top-k", sub)) => run_top_k(sub),
        _ => unreachable!("a subcommand is required"),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
