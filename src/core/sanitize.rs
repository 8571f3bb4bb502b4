// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Collapse all whitespace runs into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Collapse runs of two or more whitespace characters into a single space,
/// leaving lone whitespace characters untouched, and trim the ends.
/// Cell text keeps its single separators this way; only layout padding goes.
pub fn collapse_ws_runs(s: &str) -> String {
    let s = s.trim();
    let mut out = String::with_capacity(s.len());
    let mut pending: Option<char> = None;
    let mut run = 0usize;
    for ch in s.chars() {
        if ch.is_whitespace() {
            run += 1;
            if run == 1 { pending = Some(ch); }
        } else {
            match run {
                0 => {}
                1 => { if let Some(ws) = pending.take() { out.push(ws); } }
                _ => { out.push(' '); pending = None; }
            }
            run = 0;
            out.push(ch);
        }
    }
    out
}
