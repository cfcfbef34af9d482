// tests/crawl_idempotence.rs
//
// End-to-end crawl against a scripted fetcher: discovery, caching,
// skip-and-continue on failures, and the idempotence guarantee that a
// second run over the same range touches the network zero times.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lawlers_law::core::net::Fetch;
use lawlers_law::crawl::{crawl_range, NullProgress};
use lawlers_law::params;
use lawlers_law::store::Store;
use lawlers_law::{Error, Result};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("lawler_crawl_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

struct ScriptedNet {
    pages: HashMap<String, String>,
    calls: usize,
}

impl ScriptedNet {
    fn new(pages: HashMap<String, String>) -> Self {
        Self { pages, calls: 0 }
    }
}

impl Fetch for ScriptedNet {
    fn get(&mut self, url: &str) -> Result<String> {
        self.calls += 1;
        self.pages.get(url).cloned().ok_or_else(|| Error::NetworkFailure {
            url: url.into(),
            reason: "HTTP status 404 Not Found".into(),
        })
    }
}

fn schedule_page(codes: &[&str]) -> String {
    let links: String = codes
        .iter()
        .map(|c| format!("<a href=\"/boxscores/202201050{c}.html\">Final</a>\n"))
        .collect();
    format!("<html><body>{links}</body></html>")
}

fn game_page(away: &str, home: &str, scores: &[&str]) -> String {
    let cells: String = scores
        .iter()
        .map(|sc| format!("<td class=\"center\">{sc}</td>"))
        .collect();
    format!(
        "<html><head><meta content=\"{away} vs {home}, January 5, 2022\"></head>\
         <body><table>{cells}</table></body></html>"
    )
}

fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut out = BTreeMap::new();
    if !root.exists() {
        return out;
    }
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                out.insert(path.clone(), fs::read(&path).unwrap());
            }
        }
    }
    out
}

fn scripted_pages() -> HashMap<String, String> {
    let d = day("2022-01-05");
    let mut pages = HashMap::new();
    // ZZZ is not a known team code; MIA's game page is deliberately absent.
    pages.insert(
        params::schedule_url(d),
        schedule_page(&["LAL", "BOS", "ZZZ", "MIA"]),
    );
    pages.insert(
        params::game_url(d, "LAL"),
        game_page("CHI", "LAL", &["10-12", "10-12", "98-95", "101-95", "105-101"]),
    );
    pages.insert(
        params::game_url(d, "BOS"),
        game_page("NYK", "BOS", &["40-38", "88-90"]),
    );
    pages
}

#[test]
fn crawl_discovers_caches_and_skips() {
    let root = tmp_dir("first_run");
    let store = Store::new(&root);
    let mut net = ScriptedNet::new(scripted_pages());
    let dates = vec![day("2022-01-05"), day("2022-01-06")];

    let summary = crawl_range(&store, &mut net, &dates, Some(&mut NullProgress)).unwrap();

    // BOS and LAL parsed; MIA skipped on its failed fetch; ZZZ never fetched.
    assert_eq!(summary.records.len(), 2);
    assert_eq!(summary.records[0].home, "BOS");
    assert_eq!(summary.records[0].away.as_deref(), Some("NYK"));
    assert_eq!(summary.records[1].home, "LAL");
    assert_eq!(
        summary.records[1].scores,
        vec![(10, 12), (98, 95), (101, 95), (105, 101)]
    );
    assert_eq!(summary.failed_games, vec![(day("2022-01-05"), "MIA".to_string())]);
    // The 2022-01-06 schedule is absent: date skipped, crawl continued.
    assert_eq!(summary.failed_dates, vec![day("2022-01-06")]);

    // 2 schedules + 3 game attempts (LAL, BOS, MIA); ZZZ filtered pre-fetch.
    assert_eq!(net.calls, 5);
}

#[test]
fn second_run_issues_zero_requests_for_cached_pages() {
    let root = tmp_dir("idempotent");
    let store = Store::new(&root);
    let dates = vec![day("2022-01-05")];

    let mut net = ScriptedNet::new(scripted_pages());
    let first = crawl_range(&store, &mut net, &dates, None).unwrap();
    let first_calls = net.calls;
    let before = snapshot(&root);

    let mut net2 = ScriptedNet::new(scripted_pages());
    let second = crawl_range(&store, &mut net2, &dates, None).unwrap();

    // MIA is still a cache miss (its first fetch failed), so only that one
    // request recurs; every cached page is read back from disk.
    assert_eq!(first_calls, 4);
    assert_eq!(net2.calls, 1);
    assert_eq!(second.records, first.records);

    // Cache bytes are untouched by the second run.
    assert_eq!(snapshot(&root), before);
}

#[test]
fn fully_cached_range_never_touches_the_network() {
    let root = tmp_dir("precached");
    let store = Store::new(&root);
    let dates = vec![day("2022-01-05")];

    let mut seed = ScriptedNet::new(scripted_pages());
    // Drop MIA from the schedule so every discovered game can be cached.
    seed.pages.insert(
        params::schedule_url(day("2022-01-05")),
        schedule_page(&["LAL", "BOS"]),
    );
    crawl_range(&store, &mut seed, &dates, None).unwrap();

    struct NoNet;
    impl Fetch for NoNet {
        fn get(&mut self, url: &str) -> Result<String> {
            panic!("network request issued for cached resource: {url}");
        }
    }

    let summary = crawl_range(&store, &mut NoNet, &dates, None).unwrap();
    assert_eq!(summary.records.len(), 2);
    assert!(summary.failed_dates.is_empty());
    assert!(summary.failed_games.is_empty());
}
