// tests/decode_timetable.rs
//
// Full-grid decoding: module blocks, tier markers, cell-to-date mapping,
// links and statuses, built from in-code grids (no markup involved).
//
use cate_scrape::calendar::AcademicYear;
use cate_scrape::decode::{decode_timetable, modules, DecodeError};
use cate_scrape::grid::{Grid, GridCell, GridRow, TitledSpan};
use cate_scrape::records::{AssessedStatus, SubmissionStatus, SubscriptionLevel};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

const LEVEL_MARKER: &str = "border: 2px solid red";
const MODULE_OVERRIDE: &str = "border: 2px solid blue";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn text_cell(text: &str) -> GridCell {
    GridCell { text: text.to_string(), ..Default::default() }
}

fn gap(colspan: usize) -> GridCell {
    GridCell { colspan, ..Default::default() }
}

fn exercise_cell(text: &str, colspan: usize) -> GridCell {
    GridCell { text: text.to_string(), colspan, ..Default::default() }
}

fn module_label(text: &str, rowspan: usize) -> GridCell {
    GridCell {
        text: text.to_string(),
        rowspan,
        font_color: Some("blue".to_string()),
        ..Default::default()
    }
}

fn marker_row(text: &str) -> GridRow {
    let marker = GridCell {
        text: text.to_string(),
        style: Some(LEVEL_MARKER.to_string()),
        ..Default::default()
    };
    GridRow { cells: vec![GridCell::default(), marker] }
}

/// A module's first row: left margin, label, two placeholders, then cells.
fn module_row(label: GridCell, cells: Vec<GridCell>) -> GridRow {
    let mut all = vec![GridCell::default(), label, GridCell::default(), GridCell::default()];
    all.extend(cells);
    GridRow { cells: all }
}

/// A continuation row: one margin cell, then exercise cells.
fn continuation_row(cells: Vec<GridCell>) -> GridRow {
    let mut all = vec![GridCell::default()];
    all.extend(cells);
    GridRow { cells: all }
}

/// Seven-column grid (Oct 4 + Nov 3) anchored so that column 0 is
/// 2023-10-01, with the body rows appended after the usual chrome.
fn grid_with_body(body: Vec<GridRow>) -> Grid {
    let corner = GridCell::default;

    let month_header = GridRow {
        cells: vec![
            corner(),
            GridCell { text: "Oct".to_string(), colspan: 4, ..Default::default() },
            GridCell { text: "Nov".to_string(), colspan: 3, ..Default::default() },
        ],
    };
    let mut day_cells = vec![corner()];
    day_cells.extend(["", "2", "", "", "", "", ""].iter().map(|l| text_cell(l)));
    let day_header = GridRow { cells: day_cells };

    let mut rows = vec![
        month_header,
        GridRow::default(), // week-number chrome
        day_header,
        GridRow::default(),
        GridRow::default(),
        GridRow::default(),
        GridRow::default(),
    ];
    rows.extend(body);
    Grid { rows }
}

#[test]
fn decodes_a_single_exercise_with_resolved_dates() {
    let grid = grid_with_body(vec![module_row(
        module_label("113 - Architecture", 1),
        vec![gap(2), exercise_cell("1:CW Pipelining", 3)],
    )]);

    let exercises = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    assert_eq!(exercises.len(), 1);

    let ex = &exercises[0];
    assert_eq!(ex.module_number, "113");
    assert_eq!(ex.module_name, "Architecture");
    assert_eq!(ex.code, "1:CW");
    assert_eq!(ex.name, "Pipelining");
    assert_eq!(ex.start, date(2023, 10, 3));
    assert_eq!(ex.end, date(2023, 10, 5));
    assert_eq!(ex.assessed_status, AssessedStatus::Unknown);
    assert_eq!(ex.submission_status, SubmissionStatus::Ok);
}

#[test]
fn date_range_always_matches_the_cell_colspan() {
    let widths = [1usize, 2, 4];
    let grid = grid_with_body(vec![module_row(
        module_label("220 - Software Engineering", 1),
        widths
            .iter()
            .enumerate()
            .map(|(i, w)| exercise_cell(&format!("{}:EX Task", i + 1), *w))
            .collect(),
    )]);

    let exercises = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    assert_eq!(exercises.len(), widths.len());
    for (ex, w) in exercises.iter().zip(widths) {
        assert_eq!((ex.end - ex.start).num_days() as usize, w - 1);
    }
    // Offsets accumulate left to right within the row.
    assert_eq!(exercises[0].start, date(2023, 10, 1));
    assert_eq!(exercises[1].start, date(2023, 10, 2));
    assert_eq!(exercises[2].start, date(2023, 10, 4));
}

#[test]
fn continuation_rows_restart_the_day_offset() {
    let grid = grid_with_body(vec![
        module_row(
            module_label("140 - Logic", 2),
            vec![exercise_cell("1:TUT Truth tables", 2)],
        ),
        continuation_row(vec![gap(2), exercise_cell("2:TUT Natural deduction", 2)]),
    ]);

    let exercises = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0].start, date(2023, 10, 1));
    // Second row: one margin cell skipped, gap of 2 columns, then the cell.
    assert_eq!(exercises[1].start, date(2023, 10, 3));
}

#[test]
fn whitespace_only_cells_produce_no_records() {
    let grid = grid_with_body(vec![module_row(
        module_label("141 - Reasoning", 1),
        vec![exercise_cell(" \n  ", 2), exercise_cell("1:CW Proofs", 1)],
    )]);

    let exercises = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].code, "1:CW");
    // The blank cell still advances the day offset.
    assert_eq!(exercises[0].start, date(2023, 10, 3));
}

#[test]
fn titled_span_overrides_the_text_split() {
    let mut cell = exercise_cell("1:PMT", 1);
    cell.span = Some(TitledSpan {
        label: "1:PMT".to_string(),
        title: "Pipelining masterclass".to_string(),
    });
    let grid = grid_with_body(vec![module_row(module_label("113 - Architecture", 1), vec![cell])]);

    let exercises = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    assert_eq!(exercises[0].code, "1:PMT");
    assert_eq!(exercises[0].name, "Pipelining masterclass");
}

#[test]
fn statuses_come_from_rendering_attributes() {
    let mut cell = exercise_cell("2:CW Caches", 2);
    cell.bgcolor = Some("#ccffcc".to_string());
    cell.style = Some("border: 5px solid red".to_string());
    let grid = grid_with_body(vec![module_row(module_label("113 - Architecture", 1), vec![cell])]);

    let ex = &decode_timetable(&grid, AcademicYear::new(2023)).unwrap()[0];
    assert_eq!(ex.assessed_status, AssessedStatus::AssessedIndividual);
    assert_eq!(ex.submission_status, SubmissionStatus::NotSubmittedDueSoon);
}

#[test]
fn links_are_classified_and_keys_derived() {
    let mut cell = exercise_cell("3:CW Compilers lab", 2);
    cell.links = vec![
        "mailto:tutor@example.ac.uk".to_string(),
        "showfile.cgi?key=2023:3:000:c1:SPECS:user".to_string(),
        "handins.cgi?key=2023:1:501".to_string(),
        "given.cgi?key=2023:7:3".to_string(),
        "unrelated.cgi?x=1".to_string(),
    ];
    let grid = grid_with_body(vec![module_row(module_label("231 - Compilers", 1), vec![cell])]);

    let ex = &decode_timetable(&grid, AcademicYear::new(2023)).unwrap()[0];
    assert_eq!(ex.links.mailto.as_deref(), Some("mailto:tutor@example.ac.uk"));
    assert_eq!(ex.spec_key.as_deref(), Some("2023:3:000:c1:SPECS:user"));
    assert_eq!(
        ex.links.spec.as_deref(),
        Some("https://cate.doc.ic.ac.uk/showfile.cgi?key=2023:3:000:c1:SPECS:user")
    );
    assert_eq!(
        ex.links.handin.as_deref(),
        Some("https://cate.doc.ic.ac.uk/handins.cgi?key=2023:1:501")
    );
    assert_eq!(
        ex.links.givens.as_deref(),
        Some("https://cate.doc.ic.ac.uk/given.cgi?key=2023:7:3")
    );
}

#[test]
fn marker_rows_raise_and_lower_the_running_tier() {
    let grid = grid_with_body(vec![
        module_row(module_label("101 - Before", 1), vec![exercise_cell("1:A X", 1)]),
        marker_row("Exercises for level 3 students"),
        module_row(module_label("202 - Raised", 1), vec![exercise_cell("1:B Y", 1)]),
        marker_row("Exercises for level 2 students"),
        module_row(module_label("303 - Lowered", 1), vec![exercise_cell("1:C Z", 1)]),
    ]);

    let exercises = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    let levels: Vec<_> = exercises.iter().map(|e| e.subscription_level).collect();
    assert_eq!(
        levels,
        vec![
            SubscriptionLevel::Discard,
            SubscriptionLevel::CateSubmissions,
            SubscriptionLevel::Discard,
        ]
    );
}

#[test]
fn blue_border_label_overrides_the_running_tier() {
    let mut label = module_label("575 - Exams", 1);
    label.style = Some(MODULE_OVERRIDE.to_string());
    let grid = grid_with_body(vec![module_row(label, vec![exercise_cell("1:EXAM Final", 1)])]);

    let exercises = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    assert_eq!(exercises[0].subscription_level, SubscriptionLevel::ExamRegistration);
}

#[test]
fn module_notes_keys_come_from_the_label_link() {
    let mut label = module_label("212 - Networks", 1);
    label.links = vec!["notes.cgi?key=abc123".to_string()];
    let row = module_row(label, vec![exercise_cell("1:TUT Sockets", 1)]);

    let blocks = modules::locate(&[row]);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].notes_key.as_deref(), Some("abc123"));
    assert_eq!(blocks[0].number, "212");
    assert_eq!(blocks[0].name, "Networks");
}

#[test]
fn grids_without_module_rows_decode_to_nothing() {
    let grid = grid_with_body(vec![GridRow::default(), GridRow::default()]);
    let exercises = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    assert!(exercises.is_empty());
}

#[test]
fn decoding_is_deterministic() {
    let grid = grid_with_body(vec![
        marker_row("level 3"),
        module_row(
            module_label("113 - Architecture", 2),
            vec![gap(1), exercise_cell("1:CW Pipelining", 3)],
        ),
        continuation_row(vec![exercise_cell("2:CW Caches", 2)]),
    ]);

    let first = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    let second = decode_timetable(&grid, AcademicYear::new(2023)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_header_rows_are_a_structural_mismatch() {
    let grid = Grid { rows: vec![GridRow::default(), GridRow::default()] };
    let err = decode_timetable(&grid, AcademicYear::new(2023)).unwrap_err();
    assert!(matches!(err, DecodeError::StructuralMismatch(_)));
}

#[test]
fn module_spanning_past_the_grid_is_a_structural_mismatch() {
    let grid = grid_with_body(vec![module_row(
        module_label("113 - Architecture", 5),
        vec![exercise_cell("1:CW Pipelining", 1)],
    )]);
    let err = decode_timetable(&grid, AcademicYear::new(2023)).unwrap_err();
    assert!(matches!(err, DecodeError::StructuralMismatch(_)));
}

#[test]
fn month_width_mismatch_is_a_structural_mismatch() {
    let mut grid = grid_with_body(vec![]);
    // Shrink the Nov span so the widths no longer cover the day columns.
    grid.rows[0].cells[2].colspan = 2;
    let err = decode_timetable(&grid, AcademicYear::new(2023)).unwrap_err();
    assert!(matches!(err, DecodeError::StructuralMismatch(_)));
}
