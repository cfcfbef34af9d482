// src/outcome.rs

//! Lawler's Law: the first team to reach 100 points wins the game.
//! Pure derivation from one game's team codes and score sequence.

use crate::error::{Error, Result};

/// Derived flags for a game with at least one recorded score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Last element of the score sequence, (away, home).
    pub final_score: (u32, u32),
    pub winner: String,
    pub loser: String,
    /// Max of the final scores reached 100.
    pub reached_100: bool,
    /// Score at the first element whose max is >= 100.
    pub score_at_100: Option<(u32, u32)>,
    /// Absolute difference at that element.
    pub margin_at_100: Option<u32>,
    /// Side holding the >=100 score at that element.
    pub leader_at_100: Option<String>,
    /// True iff the leader at 100 went on to win.
    pub lawler: Option<bool>,
}

/// Derive the outcome of one game. `scores` must be non-empty; callers with
/// an empty sequence emit an all-null row instead of invoking this.
///
/// A tied final score is an error: the source data always carries the
/// overtime scores, so a tie means the page was misparsed.
pub fn derive(away: &str, home: &str, scores: &[(u32, u32)]) -> Result<Outcome> {
    let &(away_final, home_final) = scores.last().ok_or(Error::NoScores)?;

    let (winner, loser) = if away_final > home_final {
        (s!(away), s!(home))
    } else if home_final > away_final {
        (s!(home), s!(away))
    } else {
        return Err(Error::TieScore {
            away: away_final,
            home: home_final,
        });
    };

    let reached_100 = away_final.max(home_final) >= 100;

    let mut score_at_100 = None;
    let mut margin_at_100 = None;
    let mut leader_at_100 = None;
    let mut lawler = None;

    if reached_100 {
        if let Some(&(a, h)) = scores.iter().find(|(a, h)| *a.max(h) >= 100) {
            // On an exact tie at the crossing the away side is credited,
            // matching the upstream dataset.
            let leader = if a >= h { s!(away) } else { s!(home) };
            score_at_100 = Some((a, h));
            margin_at_100 = Some(a.abs_diff(h));
            lawler = Some(leader == winner);
            leader_at_100 = Some(leader);
        }
    }

    Ok(Outcome {
        final_score: (away_final, home_final),
        winner,
        loser,
        reached_100,
        score_at_100,
        margin_at_100,
        leader_at_100,
        lawler,
    })
}
