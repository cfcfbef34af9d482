// src/scrape/game.rs

//! Parsers for one play-by-play page: the away-team code from the page
//! metadata, and the chronological list of distinct running scores from
//! the play-by-play table cells.

use crate::core::html::{
    attr_value, inner_after_open_tag, next_tag_block_ci, next_void_tag_ci, opener_lc, strip_tags,
};
use crate::core::sanitize::normalize_entities;

/// Scan `<meta>` tags in document order for a content value of the form
/// `"<Away> vs <HOME>"`. The away code is the first three characters of
/// that value. `None` means the page named no matchup — expected for
/// malformed or stub pages, the caller records the `not_found` sentinel.
pub fn away_team(doc: &str, home: &str) -> Option<String> {
    let needle = format!(" vs {home}");

    let mut pos = 0usize;
    while let Some((m_s, m_e)) = next_void_tag_ci(doc, "<meta", pos) {
        let tag = &doc[m_s..m_e];
        pos = m_e;

        let Some(content) = attr_value(tag, "content") else {
            continue;
        };
        if !content.contains(&needle) {
            continue;
        }
        let code: String = content.chars().take(3).collect();
        if code.len() == 3 {
            return Some(code);
        }
    }
    None
}

/// Running scores from `<td class="center">` cells, document order.
/// Cells that do not read `<digits>-<digits>` are skipped; a score string
/// seen anywhere earlier is dropped, so the result is the first-seen
/// chronological sequence. Empty is valid (no play-by-play table).
pub fn score_list(doc: &str) -> Vec<(u32, u32)> {
    let mut scores: Vec<(u32, u32)> = Vec::new();

    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(doc, "<td", "</td>", pos) {
        let block = &doc[td_s..td_e];
        pos = td_e;

        if !opener_lc(block).contains("center") {
            continue;
        }
        let text = strip_tags(normalize_entities(&inner_after_open_tag(block)));
        let Some(score) = parse_score(&text) else {
            continue;
        };
        if !scores.contains(&score) {
            scores.push(score);
        }
    }

    scores
}

/// `"10-12"` → `(10, 12)`, away first. Anything else is not a score cell.
fn parse_score(text: &str) -> Option<(u32, u32)> {
    let (away, home) = text.split_once('-')?;
    if away.is_empty() || home.is_empty() {
        return None;
    }
    if !away.bytes().all(|b| b.is_ascii_digit()) || !home.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((away.parse().ok()?, home.parse().ok()?))
}
