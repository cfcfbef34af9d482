// src/core/html.rs

//! Substring-level HTML traversal. The box-score pages are static,
//! machine-generated markup, so case-insensitive tag scanning is enough;
//! no DOM is built.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next `<o ...> ... </c>` block at or after `from`.
/// Returns (start, end) spanning the whole block including the close tag.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Find the next void tag (`<meta ...>`, no close tag) at or after `from`.
/// Returns (start, end) with `end` just past the `>`.
pub fn next_void_tag_ci(s: &str, o: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let start = lc.get(from..)?.find(&ol)? + from;
    let end = s[start..].find('>')? + start + 1;
    Some((start, end))
}

/// Inner text of a `<tag ...>inner</tag>` block.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Attribute value from a tag opener. Tolerates double quotes, single
/// quotes and unquoted values.
pub fn attr_value<'a>(opener: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let needle = format!("{}=", to_lower(name));
    let at = lc.find(&needle)?;
    let val = &opener[at + needle.len()..];
    let (quote, start) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start..].find(quote).map(|e| start + e).unwrap_or(val.len())
    } else {
        val[start..]
            .find(|c: char| c.is_ascii_whitespace() || c == '>')
            .map(|e| start + e)
            .unwrap_or(val.len())
    };
    Some(&val[start..end])
}

/// Opener part of a tag block (everything before the first `>`), lowercased.
pub fn opener_lc(block: &str) -> String {
    let end = block.find('>').unwrap_or(block.len());
    block[..end].to_ascii_lowercase()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
