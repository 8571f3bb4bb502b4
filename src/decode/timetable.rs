// src/decode/timetable.rs

use chrono::{Days, NaiveDate};

use super::anchor::{self, MonthSpan};
use super::modules::{self, ModuleBlock};
use super::status;
use super::DecodeError;
use crate::calendar::AcademicYear;
use crate::core::sanitize::collapse_ws_runs;
use crate::grid::{Grid, GridRow};
use crate::records::{Exercise, ExerciseLinks};
use crate::urls;

// Fixed layout contract of the timetable grid. Rows 1 and 3-6 are
// layout-only chrome between the headers and the module body.
pub const MONTH_HEADER_ROW: usize = 0;
pub const DAY_HEADER_ROW: usize = 2;
pub const BODY_ROW_OFFSET: usize = 7;

// Leading cells to skip per block row: the first row holds the module
// label and its placeholders, later rows only the left margin.
const FIRST_ROW_LEAD_CELLS: usize = 4;
const LATER_ROW_LEAD_CELLS: usize = 1;

// File keys sit after a fixed `name.cgi?key=` prefix in the hrefs.
const SHOWFILE_KEY_AT: usize = 17; // "showfile.cgi?key="
const HANDIN_KEY_AT: usize = 16; // "handins.cgi?key="
const GIVENS_KEY_AT: usize = 14; // "given.cgi?key="

/// Decode one full timetable grid into exercise records, in module
/// encounter order. Deterministic: same grid and year in, same list out.
pub fn decode_timetable(grid: &Grid, year: AcademicYear) -> Result<Vec<Exercise>, DecodeError> {
    if grid.rows.len() <= DAY_HEADER_ROW {
        return Err(DecodeError::StructuralMismatch(format!(
            "expected header rows 0..={DAY_HEADER_ROW}, grid has {} rows",
            grid.rows.len()
        )));
    }

    // The leading cell of each header row is the corner label, not a day
    // column; both sequences drop it so their indices line up.
    let months = month_spans(&grid.rows[MONTH_HEADER_ROW]);
    let labels = day_labels(&grid.rows[DAY_HEADER_ROW]);

    let month_cols: usize = months.iter().map(|m| m.width).sum();
    let day_cols: usize = grid.rows[DAY_HEADER_ROW]
        .cells
        .iter()
        .skip(1)
        .map(|c| c.colspan)
        .sum();
    if month_cols != day_cols {
        return Err(DecodeError::StructuralMismatch(format!(
            "month spans cover {month_cols} columns, day header has {day_cols}"
        )));
    }

    let anchor_date = anchor::resolve(&months, &labels, year)?;

    let body = grid.rows.get(BODY_ROW_OFFSET..).unwrap_or(&[]);
    let blocks = modules::locate(body);

    let mut exercises = Vec::new();
    for block in &blocks {
        let start = BODY_ROW_OFFSET + block.start_row;
        let end = start + block.row_span;
        if end > grid.rows.len() {
            return Err(DecodeError::StructuralMismatch(format!(
                "module {} spans rows {start}..{end}, grid has {} rows",
                block.number,
                grid.rows.len()
            )));
        }
        exercises.extend(decode_block(block, &grid.rows[start..end], anchor_date)?);
    }

    Ok(exercises)
}

/// Walk one module block's rows and emit a record per non-empty cell.
///
/// Every row restarts the day offset at 0: all rows share the grid's
/// column-to-day mapping, the per-row lead cells just aren't part of it.
pub fn decode_block(
    block: &ModuleBlock,
    rows: &[GridRow],
    anchor: NaiveDate,
) -> Result<Vec<Exercise>, DecodeError> {
    let mut out = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        let lead = if row_index == 0 { FIRST_ROW_LEAD_CELLS } else { LATER_ROW_LEAD_CELLS };
        let mut offset = 0u64;

        for cell in row.cells.iter().skip(lead) {
            let day_offset = offset;
            offset += cell.colspan as u64;

            let text = collapse_ws_runs(&cell.text);
            if text.is_empty() {
                continue;
            }

            let start = anchor.checked_add_days(Days::new(day_offset)).ok_or_else(|| {
                DecodeError::StructuralMismatch(s!("exercise start date out of range"))
            })?;
            let end = start
                .checked_add_days(Days::new(cell.colspan.saturating_sub(1) as u64))
                .ok_or_else(|| {
                    DecodeError::StructuralMismatch(s!("exercise end date out of range"))
                })?;

            let (code, name) = match &cell.span {
                Some(span) => (span.label.trim().to_string(), span.title.clone()),
                None => match text.split_once(' ') {
                    Some((code, name)) => (code.to_string(), name.to_string()),
                    None => (text.clone(), s!()),
                },
            };

            let mut links = ExerciseLinks::default();
            let mut spec_key = None;
            for href in &cell.links {
                if href.contains("mailto") {
                    links.mailto = Some(href.clone());
                } else if href.contains("SPECS") {
                    if let Some(key) = href.get(SHOWFILE_KEY_AT..) {
                        spec_key = Some(key.to_string());
                        links.spec = Some(urls::show_file_url(key));
                    }
                } else if href.contains("handins.cgi") {
                    if let Some(key) = href.get(HANDIN_KEY_AT..) {
                        links.handin = Some(urls::handin_url(key));
                    }
                } else if href.contains("given.cgi") {
                    if let Some(key) = href.get(GIVENS_KEY_AT..) {
                        links.givens = Some(urls::givens_url(key));
                    }
                }
            }

            out.push(Exercise {
                module_number: block.number.clone(),
                module_name: block.name.clone(),
                subscription_level: block.level,
                code,
                name,
                start,
                end,
                assessed_status: status::assessed_status_of(cell.bgcolor.as_deref()),
                submission_status: status::submission_status_of(cell.style.as_deref()),
                links,
                spec_key,
            });
        }
    }

    Ok(out)
}

fn month_spans(row: &GridRow) -> Vec<MonthSpan> {
    row.cells
        .iter()
        .skip(1)
        .map(|c| MonthSpan { name: c.text.clone(), width: c.colspan })
        .collect()
}

fn day_labels(row: &GridRow) -> Vec<String> {
    row.cells.iter().skip(1).map(|c| c.text.clone()).collect()
}
