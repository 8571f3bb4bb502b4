// src/urls.rs
// CATe endpoint construction. Query pages are addressed as paths relative to
// HOST (what core::net wants); file links stored on records are absolute.

use crate::params::BASE_URL;

pub fn personal_path(year: i32, username: &str) -> String {
    format!("/personal.cgi?keyp={year}:{username}")
}

pub fn timetable_path(year: i32, period: &str, class: &str, username: &str) -> String {
    format!("/timetable.cgi?keyt={year}:{period}:{class}:{username}")
}

pub fn notes_path(notes_key: &str) -> String {
    join!("/notes.cgi?key=", notes_key)
}

pub fn show_file_url(key: &str) -> String {
    join!(BASE_URL, "/showfile.cgi?key=", key)
}

pub fn handin_url(key: &str) -> String {
    join!(BASE_URL, "/handins.cgi?key=", key)
}

pub fn givens_url(key: &str) -> String {
    join!(BASE_URL, "/given.cgi?key=", key)
}
