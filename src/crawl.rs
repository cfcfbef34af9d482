// src/crawl.rs

//! Date-range orchestration: cache-or-fetch the schedule page, discover
//! home teams, cache-or-fetch each game page, parse into records. One date
//! at a time, one game at a time; the fetcher's rate gate orders every
//! network request. A failed fetch skips just the date or game it belongs
//! to — the crawl keeps going.

use chrono::NaiveDate;

use crate::core::net::Fetch;
use crate::error::{Error, Result};
use crate::scrape::{self, GameRecord};
use crate::store::{CacheKey, Store};

/// Optional progress sink for the CLI.
pub trait Progress {
    fn begin(&mut self, _total_dates: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn date_done(&mut self, _date: NaiveDate, _games: usize) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// What a crawl produced; skipped items are absent from `records` and
/// listed here instead.
pub struct CrawlSummary {
    pub records: Vec<GameRecord>,
    pub failed_dates: Vec<NaiveDate>,
    pub failed_games: Vec<(NaiveDate, String)>,
}

/// Crawl every date in order. Pages already cached are read back without
/// touching the network, so a second run over the same range is free.
pub fn crawl_range(
    store: &Store,
    net: &mut dyn Fetch,
    dates: &[NaiveDate],
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(dates.len());
    }

    let mut summary = CrawlSummary {
        records: Vec::new(),
        failed_dates: Vec::new(),
        failed_games: Vec::new(),
    };

    for &date in dates {
        let Some(schedule) = cached_or_fetch(store, net, &CacheKey::schedule(date))? else {
            summary.failed_dates.push(date);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{date}: schedule fetch failed, skipping date"));
            }
            continue;
        };

        let homes = scrape::schedule::home_teams(&schedule, date);
        logf!("{date}: home teams found: {homes:?}");

        let mut games = 0usize;
        for home in &homes {
            let key = CacheKey::game(date, home);
            let Some(page) = cached_or_fetch(store, net, &key)? else {
                summary.failed_games.push((date, home.clone()));
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("{date}: {home} game fetch failed, skipping game"));
                }
                continue;
            };

            summary.records.push(GameRecord {
                date,
                home: home.clone(),
                away: scrape::game::away_team(&page, home),
                scores: scrape::game::score_list(&page),
            });
            games += 1;
        }

        if let Some(p) = progress.as_deref_mut() {
            p.date_done(date, games);
        }
    }

    Ok(summary)
}

/// Cache hit → read back; miss → fetch and store. `Ok(None)` is the
/// recoverable network-failure path; store errors are fatal.
fn cached_or_fetch(store: &Store, net: &mut dyn Fetch, key: &CacheKey) -> Result<Option<String>> {
    if store.exists(key) {
        logd!("cache hit: {}", store.path(key).display());
        return store.read(key).map(Some);
    }
    match net.get(&key.url()) {
        Ok(body) => {
            store.write(key, &body)?;
            Ok(Some(body))
        }
        Err(Error::NetworkFailure { url, reason }) => {
            loge!("fetch failed for {url}: {reason}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
