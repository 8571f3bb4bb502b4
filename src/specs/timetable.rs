// src/specs/timetable.rs

use std::error::Error;

use crate::calendar::AcademicYear;
use crate::core::html::slice_between_ci;
use crate::core::net::{self, Credentials};
use crate::decode;
use crate::grid::Grid;
use crate::records::Exercise;
use crate::urls;

/// Fetch one exercise timetable page and decode it into exercise records.
pub fn fetch_and_decode(
    creds: &Credentials,
    period: &str,
    class: &str,
    year: AcademicYear,
) -> Result<Vec<Exercise>, Box<dyn Error>> {
    let path = urls::timetable_path(year.key(), period, class, &creds.username);
    logd!("Downloading timetable (year: {}, period: {period}, class: {class})", year.key());

    let doc = net::fetch(&path, creds)?;
    let exercises = decode_document(&doc, year)?;

    logf!("Decoded {} exercises", exercises.len());
    Ok(exercises)
}

/// Offline entry point: decode an already-fetched timetable document.
/// The timetable is the page body's one top-level table.
pub fn decode_document(doc: &str, year: AcademicYear) -> Result<Vec<Exercise>, Box<dyn Error>> {
    let body = slice_between_ci(doc, "<body", "</body>").unwrap_or(doc);
    let table = slice_between_ci(body, "<table", "</table>")
        .ok_or("timetable table not found")?;
    let grid = Grid::from_table_html(table);
    Ok(decode::decode_timetable(&grid, year)?)
}
