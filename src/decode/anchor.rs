// src/decode/anchor.rs

use chrono::{Days, NaiveDate};

use super::DecodeError;
use crate::calendar::{self, AcademicYear};

/// One month header cell: display name plus the number of day columns it
/// spans. Widths over a header must sum to the day-header column count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthSpan {
    pub name: String,
    pub width: usize,
}

/// Resolve the calendar date of the grid's leftmost day column.
///
/// The day header only labels some columns. The first labelled one fixes
/// the axis: every column before it is exactly one calendar day earlier,
/// and every cell in the grid then maps through `anchor + column offset`.
pub fn resolve(
    month_spans: &[MonthSpan],
    day_labels: &[String],
    year: AcademicYear,
) -> Result<NaiveDate, DecodeError> {
    let (index, label) = day_labels
        .iter()
        .map(|l| l.trim())
        .enumerate()
        .find(|(_, l)| !l.is_empty())
        .ok_or_else(|| {
            DecodeError::AnchorResolution(s!("no labelled day in the day header row"))
        })?;

    let day: u32 = label.parse().map_err(|_| {
        DecodeError::AnchorResolution(format!("day label `{label}` is not a number"))
    })?;

    let month_name = covering_month(month_spans, index).ok_or_else(|| {
        DecodeError::StructuralMismatch(format!("no month span covers day column {index}"))
    })?;

    let month = calendar::month_from_name(month_name)
        .ok_or_else(|| DecodeError::UnrecognizedMonth(month_name.trim().to_string()))?;

    // The academic year starts in September: a month earlier in the
    // calendar belongs to the pair's second year.
    let y = if month < 9 { year.end } else { year.start };

    let labelled = NaiveDate::from_ymd_opt(y, month, day).ok_or_else(|| {
        DecodeError::AnchorResolution(format!("{y}-{month:02}-{day:02} is not a calendar date"))
    })?;

    labelled
        .checked_sub_days(Days::new(index as u64))
        .ok_or_else(|| DecodeError::AnchorResolution(s!("anchor date out of range")))
}

/// The span covering column `index`: the first one whose cumulative width
/// strictly exceeds it. A label sitting exactly on a span edge therefore
/// belongs to the span that starts there, not the one that just ended.
fn covering_month(spans: &[MonthSpan], index: usize) -> Option<&str> {
    let mut total = 0usize;
    for span in spans {
        total += span.width;
        if total > index {
            return Some(&span.name);
        }
    }
    None
}
