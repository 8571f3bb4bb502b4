// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::{PageKind, Params, PASS_ENV, USER_ENV};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    crate::runner::run(&params)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "timetable" => PageKind::Timetable,
                    "personal" => PageKind::Personal,
                    "notes" => PageKind::Notes,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };}
            "-u" | "--user" => params.username = Some(args.next().ok_or("Missing username")?),
            "-p" | "--pass" => params.password = Some(args.next().ok_or("Missing password")?),
            "--period" => params.period = Some(args.next().ok_or("Missing value for --period")?),
            "--class" => params.class = Some(args.next().ok_or("Missing value for --class")?),
            "--key" => params.notes_key = Some(args.next().ok_or("Missing value for --key")?),
            "--year" => {
                let v: i32 = args.next().ok_or("Missing value for --year")?.parse()?;
                params.year = Some(v);}
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    // Credential fallbacks; values are kept out of the log file.
    if params.username.is_none() {
        params.username = env::var(USER_ENV).ok();
    }
    if params.password.is_none() {
        params.password = env::var(PASS_ENV).ok();
    }

    Ok(())
}
