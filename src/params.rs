// src/params.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};

use crate::csv::Delim;

pub const HOST: &str = "www.basketball-reference.com";

pub const DEFAULT_CACHE_DIR: &str = "data/html";
pub const DEFAULT_OUT_DIR: &str = "data/csv";
pub const MERGED_FILENAME: &str = "lawler.csv";
pub const BACKUP_SUBDIR: &str = "backup";

pub const USER_AGENT: &str = "lawlers_law/0.3";

/// Minimum pause before every request. The site blocks crawlers that go
/// faster, so this is a correctness requirement, not a tuning knob.
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(2);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Day listing of all games, one box-score link per game.
pub fn schedule_url(date: NaiveDate) -> String {
    format!(
        "https://{}/boxscores/?month={:02}&day={:02}&year={}",
        HOST,
        date.month(),
        date.day(),
        date.year()
    )
}

/// Play-by-play page for one game, keyed by date + home-team code.
pub fn game_url(date: NaiveDate, home: &str) -> String {
    format!(
        "https://{}/boxscores/pbp/{}0{}.html",
        HOST,
        date.format("%Y%m%d"),
        home
    )
}

#[derive(Clone)]
pub struct Params {
    pub start: Option<String>,     // YYYY-MM-DD; default: yesterday
    pub end: Option<String>,       // YYYY-MM-DD; default: same as start
    pub out: Option<PathBuf>,      // output dir for the csv
    pub cache_dir: PathBuf,        // raw html cache root
    pub include_headers: bool,     // emit header row
    pub format: Delim,
    pub list_teams: bool,          // list known team codes then exit
    pub merge: bool,               // merge existing csvs instead of crawling
}

impl Params {
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            out: Some(PathBuf::from(DEFAULT_OUT_DIR)),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            include_headers: true,
            format: Delim::Csv,
            list_teams: false,
            merge: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
