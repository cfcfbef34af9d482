// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Derive a cache file name from a source URL: keep the unique tail after
/// `boxscores/`, drop `? & =`, turn `/` into `_`.
pub fn file_name_from_url(url: &str) -> String {
    let tail = url.rsplit_once("boxscores/").map(|(_, t)| t).unwrap_or(url);
    let mut out = String::with_capacity(tail.len());
    for ch in tail.chars() {
        match ch {
            '?' | '&' | '=' => {}
            '/' => out.push('_'),
            _ => out.push(ch),
        }
    }
    out
}
