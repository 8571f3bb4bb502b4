// src/runner.rs
use std::error::Error;

use chrono::Utc;

use crate::{
    calendar::AcademicYear,
    core::net::{self, Credentials},
    csv, file,
    params::{PageKind, Params},
    records::{Exercise, Note, UserInfo},
    specs, urls,
};

/// Top-level runner: resolve credentials and academic year, dispatch on
/// page kind, export headers + rows.
pub fn run(params: &Params) -> Result<(), Box<dyn Error>> {
    let creds = credentials(params)?;

    // The clock is read once, here at the edge; everything below takes the
    // academic year as a plain argument.
    let year = match params.year {
        Some(start) => AcademicYear::new(start),
        None => AcademicYear::of(Utc::now().date_naive()),
    };

    let (headers, rows): (&[&str], Vec<Vec<String>>) = match params.page {
        PageKind::Timetable => {
            let (period, class) = period_and_class(params, &creds, year)?;
            let exercises = specs::timetable::fetch_and_decode(&creds, &period, &class, year)?;
            (&Exercise::CSV_HEADERS, exercises.iter().map(Exercise::to_row).collect())
        }
        PageKind::Personal => {
            let info = specs::personal::fetch_user_info(&creds, year)?;
            (&UserInfo::CSV_HEADERS, vec![info.to_row()])
        }
        PageKind::Notes => {
            let key = params
                .notes_key
                .as_deref()
                .ok_or("--key is required for --page notes")?;
            let notes = specs::notes::fetch_notes(&creds, key)?;
            (&Note::CSV_HEADERS, notes.iter().map(Note::to_row).collect())
        }
    };

    export(params, headers, &rows)
}

fn credentials(params: &Params) -> Result<Credentials, Box<dyn Error>> {
    let username = params.username.clone().ok_or("Missing username (-u or CATE_USER)")?;
    let password = params.password.clone().ok_or("Missing password (-p or CATE_PASS)")?;
    Ok(Credentials { username, password })
}

/// Period and class to query: explicit flags win, anything missing is
/// filled from the checked selections on the personal page.
fn period_and_class(
    params: &Params,
    creds: &Credentials,
    year: AcademicYear,
) -> Result<(String, String), Box<dyn Error>> {
    if let (Some(p), Some(c)) = (&params.period, &params.class) {
        return Ok((p.clone(), c.clone()));
    }

    logd!("Fetching default period/class for {}", creds.username);
    let doc = net::fetch(&urls::personal_path(year.key(), &creds.username), creds)?;
    let (default_period, default_class) = specs::personal::default_period_and_class(&doc);

    let period = params
        .period
        .clone()
        .or(default_period)
        .ok_or("No default period found; pass --period")?;
    let class = params
        .class
        .clone()
        .or(default_class)
        .ok_or("No default class found; pass --class")?;
    Ok((period, class))
}

fn export(params: &Params, headers: &[&str], rows: &[Vec<String>]) -> Result<(), Box<dyn Error>> {
    let header_row: Option<Vec<String>> = params
        .include_headers
        .then(|| headers.iter().map(|h| s!(*h)).collect());
    let contents = csv::to_export_string(header_row.as_deref(), rows, params.format);

    match &params.out {
        Some(path) => {
            file::write_export(path, &contents)?;
            logf!("Wrote {} rows to {}", rows.len(), path.display());
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{contents}"),
    }
    Ok(())
}
