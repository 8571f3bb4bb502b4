// src/params.rs
use std::path::PathBuf;
use crate::csv::Delim;

// Net config
pub const HOST: &str = "cate.doc.ic.ac.uk";
pub const BASE_URL: &str = "https://cate.doc.ic.ac.uk";
pub const USER_AGENT: &str = concat!("cate_scrape/", env!("CARGO_PKG_VERSION"));

// Credential fallbacks
pub const USER_ENV: &str = "CATE_USER";
pub const PASS_ENV: &str = "CATE_PASS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Timetable,
    Personal,
    Notes,
}

#[derive(Clone)]
pub struct Params {
    pub page: PageKind,              // which CATe page to fetch
    pub username: Option<String>,    // falls back to CATE_USER
    pub password: Option<String>,    // falls back to CATE_PASS
    pub period: Option<String>,      // timetable period; default scraped from personal page
    pub class: Option<String>,       // timetable class; default scraped from personal page
    pub notes_key: Option<String>,   // required for the notes page
    pub year: Option<i32>,           // academic-year start override, e.g. 2023
    pub out: Option<PathBuf>,        // output path; None → stdout
    pub include_headers: bool,       // emit a header row
    pub format: Delim,
}

impl Params {
    pub fn new() -> Self {
        Self {
            page: PageKind::Timetable,
            username: None,
            password: None,
            period: None,
            class: None,
            notes_key: None,
            year: None,
            out: None,
            include_headers: false,
            format: Delim::Csv,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
