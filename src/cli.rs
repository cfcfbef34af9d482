// src/cli.rs
use std::env;
use std::path::PathBuf;

use chrono::{Days, Local, NaiveDate};
use color_eyre::eyre::{bail, Result};

use crate::core::net::Fetcher;
use crate::crawl::{self, Progress};
use crate::csv::Delim;
use crate::dataset;
use crate::dates;
use crate::params::Params;
use crate::store::Store;
use crate::teams;

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_teams {
        for (code, name) in teams::list() {
            println!("{code},{name}");
        }
        return Ok(());
    }

    let out_dir = params.out.clone().unwrap_or_else(|| PathBuf::from("."));

    if params.merge {
        let merged = dataset::merge_dir(&out_dir)?;
        println!("Merged into {}", merged.display());
        return Ok(());
    }

    let (start, end) = resolve_dates(&params)?;
    let days = dates::date_range(start, end)?;

    logf!("Searching for game data in date range: {start} - {end}");

    let store = Store::new(params.cache_dir.clone());
    let mut fetcher = Fetcher::new()?;
    let mut progress = ConsoleProgress;
    let summary = crawl::crawl_range(&store, &mut fetcher, &days, Some(&mut progress))?;

    let games = summary.records.len();
    let ds = dataset::build(summary.records)?;

    let stem = if start == end {
        format!("lawler_{start}")
    } else {
        format!("lawler_{start}_{end}")
    };
    let path = dataset::write(&ds, &out_dir, &stem, params.format, params.include_headers)?;

    println!("Wrote {} ({games} games)", path.display());
    if !summary.failed_dates.is_empty() || !summary.failed_games.is_empty() {
        println!(
            "Skipped {} date(s) and {} game(s) on fetch failures; see data/crawl.log",
            summary.failed_dates.len(),
            summary.failed_games.len()
        );
    }
    Ok(())
}

/// Default is yesterday's games, like a nightly run; `--end` defaults to
/// `--start` so one flag crawls one day.
fn resolve_dates(params: &Params) -> Result<(NaiveDate, NaiveDate)> {
    let today = Local::now().date_naive();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);

    let start = match &params.start {
        Some(s) => dates::parse_day(s)?,
        None => yesterday,
    };
    let end = match &params.end {
        Some(s) => dates::parse_day(s)?,
        None => start,
    };
    Ok((start, end))
}

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn date_done(&mut self, date: NaiveDate, games: usize) {
        println!("{date}: {games} game(s)");
    }
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--start" => {
                params.start = Some(args.next().ok_or_else(|| missing("--start"))?);
            }
            "--end" => {
                params.end = Some(args.next().ok_or_else(|| missing("--end"))?);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or_else(|| missing("--out"))?));
            }
            "--cache-dir" => {
                params.cache_dir = PathBuf::from(args.next().ok_or_else(|| missing("--cache-dir"))?);
            }
            "--format" => {
                let v = args.next().ok_or_else(|| missing("--format"))?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => bail!("Unknown format: {other}"),
                };
            }
            "--no-headers" => params.include_headers = false,
            "--list-teams" => params.list_teams = true,
            "--merge" => params.merge = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a} (try --help)"),
        }
    }
    Ok(())
}

fn missing(flag: &str) -> color_eyre::eyre::Error {
    color_eyre::eyre::eyre!("Missing value for {flag}")
}
