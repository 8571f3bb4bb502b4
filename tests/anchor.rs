// tests/anchor.rs
//
// Calendar anchor resolution: month-span coverage, academic-year selection,
// and the error cases that must abort a decode.
//
use cate_scrape::calendar::AcademicYear;
use cate_scrape::decode::anchor::{resolve, MonthSpan};
use cate_scrape::decode::DecodeError;
use chrono::{Datelike, NaiveDate};

fn spans(widths: &[(&str, usize)]) -> Vec<MonthSpan> {
    widths
        .iter()
        .map(|(name, width)| MonthSpan { name: name.to_string(), width: *width })
        .collect()
}

fn labels(ls: &[&str]) -> Vec<String> {
    ls.iter().map(|l| l.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn anchors_to_first_labelled_day() {
    // Index 2 holds "5"; Oct covers columns 0..3, so column 0 is Oct 3rd.
    let anchor = resolve(
        &spans(&[("Oct", 3), ("Nov", 4)]),
        &labels(&["", "", "5"]),
        AcademicYear::new(2023),
    )
    .unwrap();
    assert_eq!(anchor, date(2023, 10, 3));
}

#[test]
fn autumn_months_use_the_start_year() {
    let anchor = resolve(
        &spans(&[("Oct", 3)]),
        &labels(&["", "", "5"]),
        AcademicYear::new(2023),
    )
    .unwrap();
    assert_eq!(anchor.year(), 2023);
}

#[test]
fn months_before_september_use_the_end_year() {
    let anchor = resolve(
        &spans(&[("Mar", 3), ("Apr", 4)]),
        &labels(&["", "", "5"]),
        AcademicYear::new(2023),
    )
    .unwrap();
    assert_eq!(anchor, date(2024, 3, 3));
}

#[test]
fn label_on_a_span_edge_belongs_to_the_starting_span() {
    // Widths 3 + 4: index 3 is the first Nov column, not the last Oct one.
    let anchor = resolve(
        &spans(&[("Oct", 3), ("Nov", 4)]),
        &labels(&["", "", "", "1"]),
        AcademicYear::new(2023),
    )
    .unwrap();
    // Nov 1st minus three columns.
    assert_eq!(anchor, date(2023, 10, 29));
}

#[test]
fn last_column_of_a_span_is_still_covered_by_it() {
    let anchor = resolve(
        &spans(&[("Oct", 1), ("Nov", 2)]),
        &labels(&["31"]),
        AcademicYear::new(2023),
    )
    .unwrap();
    assert_eq!(anchor, date(2023, 10, 31));
}

#[test]
fn month_prefix_matching_is_case_insensitive() {
    let anchor = resolve(
        &spans(&[("OCTOBER", 2)]),
        &labels(&["5"]),
        AcademicYear::new(2023),
    )
    .unwrap();
    assert_eq!(anchor, date(2023, 10, 5));
}

#[test]
fn unrecognized_month_is_an_error() {
    let err = resolve(
        &spans(&[("Xxx", 3)]),
        &labels(&["5"]),
        AcademicYear::new(2023),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::UnrecognizedMonth(name) if name == "Xxx"));
}

#[test]
fn all_empty_day_labels_are_an_error() {
    let err = resolve(
        &spans(&[("Oct", 2)]),
        &labels(&["", "   "]),
        AcademicYear::new(2023),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::AnchorResolution(_)));
}

#[test]
fn non_numeric_day_label_is_an_error() {
    let err = resolve(
        &spans(&[("Oct", 2)]),
        &labels(&["", "Mon"]),
        AcademicYear::new(2023),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::AnchorResolution(_)));
}

#[test]
fn label_beyond_all_spans_is_a_structural_mismatch() {
    let err = resolve(
        &spans(&[("Oct", 2)]),
        &labels(&["", "", "7"]),
        AcademicYear::new(2023),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::StructuralMismatch(_)));
}

#[test]
fn impossible_calendar_date_is_an_error() {
    let err = resolve(
        &spans(&[("Feb", 2)]),
        &labels(&["31"]),
        AcademicYear::new(2023),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::AnchorResolution(_)));
}
