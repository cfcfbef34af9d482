// src/teams.rs

//! Fixed reference table of 3-letter team codes, covering every franchise
//! that appears in box scores since the play-by-play cutoff. Codes not in
//! this table are discarded during discovery, never fetched.

/// Sorted by code so lookups can binary-search.
/// PHO/PHX both appear; the site uses both for the Suns.
static TEAM_NAMES: &[(&str, &str)] = &[
    ("ATL", "Atlanta Hawks"),
    ("BKN", "Brooklyn Nets"),
    ("BOS", "Boston Celtics"),
    ("BUF", "Buffalo Braves"),
    ("CHA", "Charlotte Hornets"),
    ("CHH", "Charlotte Hornets"),
    ("CHI", "Chicago Bulls"),
    ("CLE", "Cleveland Cavaliers"),
    ("DAL", "Dallas Mavericks"),
    ("DEN", "Denver Nuggets"),
    ("DET", "Detroit Pistons"),
    ("GSW", "Golden State Warriors"),
    ("HOU", "Houston Rockets"),
    ("IND", "Indiana Pacers"),
    ("KCK", "Kansas City Kings"),
    ("LAC", "Los Angeles Clippers"),
    ("LAL", "Los Angeles Lakers"),
    ("MEM", "Memphis Grizzlies"),
    ("MIA", "Miami Heat"),
    ("MIL", "Milwaukee Bucks"),
    ("MIN", "Minnesota Timberwolves"),
    ("NJN", "New Jersey Nets"),
    ("NOJ", "New Orleans Jazz"),
    ("NOP", "New Orleans Pelicans"),
    ("NYK", "New York Knicks"),
    ("OKC", "Oklahoma City Thunder"),
    ("ORL", "Orlando Magic"),
    ("PHI", "Philadelphia 76ers"),
    ("PHO", "Phoenix Suns"),
    ("PHX", "Phoenix Suns"),
    ("POR", "Portland Trail Blazers"),
    ("SAC", "Sacramento Kings"),
    ("SAS", "San Antonio Spurs"),
    ("SEA", "Seattle SuperSonics"),
    ("TOR", "Toronto Raptors"),
    ("UTA", "Utah Jazz"),
    ("WAS", "Washington Wizards"),
    ("WSB", "Washington Bullets"),
];

pub fn is_known(code: &str) -> bool {
    TEAM_NAMES.binary_search_by_key(&code, |(c, _)| c).is_ok()
}

pub fn name(code: &str) -> Option<&'static str> {
    TEAM_NAMES
        .binary_search_by_key(&code, |(c, _)| c)
        .ok()
        .map(|i| TEAM_NAMES[i].1)
}

pub fn list() -> &'static [(&'static str, &'static str)] {
    TEAM_NAMES
}
