// src/dataset.rs

//! Folds per-game records into the flat output table, and handles the
//! merge-and-backup pass over previously written csv files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::csv::{self, Delim};
use crate::error::Result;
use crate::outcome;
use crate::params::{BACKUP_SUBDIR, MERGED_FILENAME};
use crate::scrape::GameRecord;

/// Away code written when no metadata element named the matchup.
pub const NOT_FOUND: &str = "not_found";

pub const HEADERS: [&str; 10] = [
    "game_date",
    "away_team",
    "home_team",
    "final_score",
    "win_team",
    "lose_team",
    "reached_100_bool",
    "lawler_bool",
    "score_at_100",
    "delta_at_100",
];

pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One row per game, sorted by date then home code. Records without scores
/// keep their identity columns and leave every derived column empty; zero
/// records is a valid, zero-row table.
pub fn build(mut records: Vec<GameRecord>) -> Result<Dataset> {
    records.sort_by(|a, b| (a.date, &a.home).cmp(&(b.date, &b.home)));

    let mut rows = Vec::with_capacity(records.len());
    for rec in &records {
        rows.push(build_row(rec)?);
    }

    Ok(Dataset {
        headers: HEADERS.iter().map(|h| s!(*h)).collect(),
        rows,
    })
}

fn build_row(rec: &GameRecord) -> Result<Vec<String>> {
    let away = rec.away.clone().unwrap_or_else(|| s!(NOT_FOUND));

    let mut row = vec![
        rec.date.format("%Y-%m-%d").to_string(),
        away.clone(),
        rec.home.clone(),
    ];

    if rec.scores.is_empty() {
        row.extend(std::iter::repeat_n(s!(), 7));
        return Ok(row);
    }

    let out = outcome::derive(&away, &rec.home, &rec.scores)?;
    row.push(fmt_score(out.final_score));
    row.push(out.winner);
    row.push(out.loser);
    row.push(s!(if out.reached_100 { "true" } else { "false" }));
    row.push(out.lawler.map(|b| s!(if b { "true" } else { "false" })).unwrap_or_default());
    row.push(out.score_at_100.map(fmt_score).unwrap_or_default());
    row.push(out.margin_at_100.map(|m| m.to_string()).unwrap_or_default());
    Ok(row)
}

fn fmt_score((away, home): (u32, u32)) -> String {
    format!("{away}-{home}")
}

/// Write the table under `dir` as `lawler_<start>.csv`, or
/// `lawler_<start>_<end>.csv` for a multi-day range.
pub fn write(dataset: &Dataset, dir: &Path, stem: &str, delim: Delim, headers: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{stem}.{}", delim.ext()));
    let header_opt = headers.then(|| dataset.headers.clone());
    fs::write(&path, csv::rows_to_string(&dataset.rows, &header_opt, delim.sep()))?;
    Ok(path)
}

/// Read every csv in `dir`, concatenate, drop duplicate rows preserving
/// first occurrence, then write `lawler.csv` plus a timestamped copy under
/// `backup/`. Unreadable files are logged and skipped.
pub fn merge_dir(dir: &Path) -> Result<PathBuf> {
    let mut names: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("csv") {
            names.push(path);
        }
    }
    names.sort();

    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let header: Vec<String> = HEADERS.iter().map(|h| s!(*h)).collect();

    for path in &names {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                loge!("unable to read {}: {e}", path.display());
                continue;
            }
        };
        for row in csv::parse_rows(&text, ',') {
            if row == header {
                continue;
            }
            if seen.insert(row.clone()) {
                rows.push(row);
            }
        }
    }

    let merged = dir.join(MERGED_FILENAME);
    let contents = csv::rows_to_string(&rows, &Some(header), ',');
    fs::write(&merged, &contents)?;

    let backup_dir = dir.join(BACKUP_SUBDIR);
    fs::create_dir_all(&backup_dir)?;
    let stamp = Local::now().format("%Y-%m-%d_%H%M%S");
    fs::write(backup_dir.join(format!("lawler_{stamp}.csv")), &contents)?;

    Ok(merged)
}
