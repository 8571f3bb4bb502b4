// src/specs/personal.rs

use std::error::Error;

use crate::calendar::AcademicYear;
use crate::core::html::{
    has_attr, inner_after_open_tag, innermost_table_containing, next_tag_block_ci, strip_tags,
    tag_attr, to_lower,
};
use crate::core::sanitize::normalize_entities;
use crate::core::net::{self, Credentials};
use crate::records::UserInfo;
use crate::urls;

pub fn fetch_user_info(
    creds: &Credentials,
    year: AcademicYear,
) -> Result<UserInfo, Box<dyn Error>> {
    logd!("Getting user info for {}", creds.username);
    let doc = net::fetch(&urls::personal_path(year.key(), &creds.username), creds)?;
    extract_user_info(&doc).ok_or_else(|| "personal data table not found or malformed".into())
}

/// Extract the flat personal fields from the homepage.
///
/// The user-info table sits nested inside two layout tables; it is located
/// as the innermost table mentioning "CID" rather than by node position.
/// Rows are fixed-position label/value pairs with values in `<b>`.
pub fn extract_user_info(doc: &str) -> Option<UserInfo> {
    let table = innermost_table_containing(doc, "CID")?;
    let rows = cell_texts(table);

    Some(UserInfo {
        name: field(&rows, 0, 1)?,
        login: field(&rows, 1, 0)?,
        cid: field(&rows, 1, 2)?,
        status: field(&rows, 2, 0)?,
        department: field(&rows, 2, 2)?,
        category: field(&rows, 3, 0)?,
        email: field(&rows, 4, 0)?,
        personal_tutor: field(&rows, 5, 0)?,
    })
}

/// The default timetable period and class, read from the checked radio
/// inputs on the personal page (period group first, class group second).
pub fn default_period_and_class(doc: &str) -> (Option<String>, Option<String>) {
    let lc = to_lower(doc);
    let mut checked = Vec::new();
    let mut from = 0usize;

    while let Some(rel) = lc[from..].find("<input") {
        let start = from + rel;
        let end = match doc[start..].find('>') {
            Some(i) => start + i + 1,
            None => break,
        };
        let tag = &doc[start..end];
        if has_attr(tag, "checked") {
            if let Some(value) = tag_attr(tag, "value") {
                checked.push(value);
            }
        }
        from = end;
    }

    let mut it = checked.into_iter();
    (it.next(), it.next())
}

/* ---------- helpers ---------- */

/// All rows of a table as cell texts, preferring the `<b>` content of each
/// cell (the value) over surrounding label text.
fn cell_texts(table: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(bold_or_text(&tr[td_s..td_e]));
            td_pos = td_e;
        }
        rows.push(cells);
    }
    rows
}

fn bold_or_text(td_block: &str) -> String {
    let inner = inner_after_open_tag(td_block);
    let value = match next_tag_block_ci(&inner, "<b>", "</b>", 0) {
        Some((b_s, b_e)) => inner_after_open_tag(&inner[b_s..b_e]),
        None => inner,
    };
    strip_tags(normalize_entities(&value))
}

fn field(rows: &[Vec<String>], row: usize, cell: usize) -> Option<String> {
    rows.get(row)?.get(cell).cloned()
}
