// src/scrape/mod.rs

pub mod game;
pub mod schedule;

use chrono::NaiveDate;

/// Everything parsed out of one cached play-by-play page.
/// `away` is `None` when no metadata element named the matchup; `scores`
/// may be empty when the page carried no play-by-play table. Both are
/// expected outcomes, not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub home: String,
    pub away: Option<String>,
    /// Chronological distinct running scores, (away, home) per element.
    pub scores: Vec<(u32, u32)>,
}
