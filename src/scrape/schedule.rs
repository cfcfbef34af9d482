// src/scrape/schedule.rs

//! Home-team discovery from a day's schedule page. Every game that day is
//! linked as `/boxscores/<YYYYMMDD>0<HOME>.html`; the home code is the
//! three characters before the extension.

use chrono::NaiveDate;

use crate::core::html::{attr_value, next_tag_block_ci};
use crate::teams;

/// Distinct home-team codes playing on `date`, sorted for a deterministic
/// crawl order. Candidates outside the known team table are dropped.
pub fn home_teams(doc: &str, date: NaiveDate) -> Vec<String> {
    let needle = format!("/boxscores/{}", date.format("%Y%m%d"));
    let mut out: Vec<String> = Vec::new();

    let mut pos = 0usize;
    while let Some((a_s, a_e)) = next_tag_block_ci(doc, "<a", "</a>", pos) {
        let block = &doc[a_s..a_e];
        pos = a_e;

        let opener = &block[..block.find('>').unwrap_or(block.len())];
        let Some(href) = attr_value(opener, "href") else {
            continue;
        };
        if !href.contains(&needle) {
            continue;
        }
        let Some(stem) = href.strip_suffix(".html") else {
            continue;
        };
        if stem.len() < 3 || !stem.is_char_boundary(stem.len() - 3) {
            continue;
        }
        let code = &stem[stem.len() - 3..];
        if teams::is_known(code) && !out.iter().any(|c| c == code) {
            out.push(s!(code));
        }
    }

    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, 5).unwrap()
    }

    #[test]
    fn discovers_and_sorts_home_codes() {
        let doc = r#"
            <p><a href="/boxscores/202201050LAL.html">Final</a></p>
            <p><a href="/boxscores/202201050BOS.html">Final</a></p>
            <p><a href="/boxscores/202201050LAL.html">Box Score</a></p>
            <p><a href="/leagues/NBA_2022.html">Standings</a></p>
        "#;
        assert_eq!(home_teams(doc, day()), vec![s!("BOS"), s!("LAL")]);
    }

    #[test]
    fn unknown_codes_are_silently_dropped() {
        let doc = r#"
            <a href="/boxscores/202201050ZZZ.html">Final</a>
            <a href="/boxscores/202201050MIA.html">Final</a>
        "#;
        assert_eq!(home_teams(doc, day()), vec![s!("MIA")]);
    }

    #[test]
    fn links_for_other_dates_do_not_count() {
        let doc = r#"<a href="/boxscores/202201040MIA.html">Final</a>"#;
        assert!(home_teams(doc, day()).is_empty());
    }

    #[test]
    fn pageless_day_yields_empty_set() {
        assert!(home_teams("<html><body>No games today.</body></html>", day()).is_empty());
    }
}
