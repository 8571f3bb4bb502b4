// src/calendar.rs

use chrono::{Datelike, NaiveDate};

/// An academic year pair; `end` is always `start + 1`.
///
/// Computed once at the edge from an explicit reference date and passed down
/// as a plain value, so the decoder never reads the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcademicYear {
    pub start: i32,
    pub end: i32,
}

impl AcademicYear {
    pub fn new(start: i32) -> Self {
        Self { start, end: start + 1 }
    }

    /// Academic year in effect at `reference`, using 1 August as the start
    /// of a new year.
    pub fn of(reference: NaiveDate) -> Self {
        if reference.month() < 8 {
            Self::new(reference.year() - 1)
        } else {
            Self::new(reference.year())
        }
    }

    /// The year token CATe keys its URLs on.
    pub fn key(&self) -> i32 {
        self.start
    }
}

/// Match a month display name to its number (1-12) by three-letter prefix,
/// ASCII case-insensitive. Anything shorter or unrecognized is None.
pub fn month_from_name(name: &str) -> Option<u32> {
    let prefix: String = name
        .trim()
        .chars()
        .take(3)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
