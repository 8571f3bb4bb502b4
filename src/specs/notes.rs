// src/specs/notes.rs

use std::error::Error;

use crate::core::html::{
    inner_after_open_tag, innermost_table_containing, next_tag_block_ci, open_tag, strip_tags,
    tag_attr,
};
use crate::core::net::{self, Credentials};
use crate::core::sanitize::normalize_entities;
use crate::records::Note;
use crate::urls;

// File keys share the showfile prefix the timetable's spec links use.
const FILE_KEY_AT: usize = 17; // "showfile.cgi?key="

/// Marker the notes listing is located by; its header row always names a
/// hit counter column.
const NOTES_MARKER: &str = "Hits";

pub fn fetch_notes(creds: &Credentials, notes_key: &str) -> Result<Vec<Note>, Box<dyn Error>> {
    logd!("Getting notes for key {notes_key}");
    let doc = net::fetch(&urls::notes_path(notes_key), creds)?;
    extract_notes(&doc).ok_or_else(|| "notes table not found".into())
}

/// Extract the plain tabular note rows: number, title, type, size, loaded,
/// owner, hits. The first row is the header and the last the upload form,
/// so both are dropped. `URL*` rows link out; everything else carries a
/// file key.
pub fn extract_notes(doc: &str) -> Option<Vec<Note>> {
    let table = innermost_table_containing(doc, NOTES_MARKER)?;

    let mut row_blocks = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        row_blocks.push(&table[tr_s..tr_e]);
        pos = tr_e;
    }
    if row_blocks.len() < 2 {
        return Some(Vec::new());
    }

    let mut notes = Vec::new();
    for tr in &row_blocks[1..row_blocks.len() - 1] {
        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(&tr[td_s..td_e]);
            td_pos = td_e;
        }
        if cells.len() < 7 {
            continue;
        }

        let text = |i: usize| strip_tags(normalize_entities(&inner_after_open_tag(cells[i])));

        let anchor = next_tag_block_ci(cells[1], "<a ", "</a>", 0).map(|(a_s, a_e)| &cells[1][a_s..a_e]);
        let kind_text = text(2);

        let (kind, url, filekey) = if kind_text == "URL*" {
            let url = anchor.and_then(|a| tag_attr(open_tag(a), "title"));
            (s!("URL"), url.map(|u| normalize_entities(&u)), None)
        } else {
            let filekey = anchor
                .and_then(|a| tag_attr(open_tag(a), "href"))
                .and_then(|href| href.get(FILE_KEY_AT..).map(str::to_string));
            (kind_text, None, filekey)
        };

        notes.push(Note {
            number: text(0),
            title: text(1),
            kind,
            size: text(3),
            loaded: text(4),
            owner: text(5),
            hits: text(6),
            url,
            filekey,
        });
    }

    Some(notes)
}
