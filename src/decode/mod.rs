// src/decode/mod.rs
//! The timetable grid decoder.
//!
//! CATe's exercise timetable is a rendered grid: cell position and width
//! encode calendar placement, background color the assessment kind, border
//! style the submission state. The modules here reverse that encoding —
//! `anchor` pins column 0 to an absolute date, `modules` partitions body
//! rows into per-module blocks, `status` maps rendering attributes to
//! enums, and `timetable` walks the cells and emits exercise records.
//!
//! Decoding is pure: no I/O, no clock reads (the academic year arrives as
//! an argument), and an error aborts the whole decode — callers never see
//! a silently truncated timetable.

use thiserror::Error;

pub mod anchor;
pub mod modules;
pub mod status;
pub mod timetable;

pub use anchor::MonthSpan;
pub use modules::ModuleBlock;
pub use timetable::decode_timetable;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The day-number header could not pin the grid to a calendar date.
    #[error("cannot anchor the grid to a date: {0}")]
    AnchorResolution(String),

    /// A month header name failed three-letter-prefix resolution. Never
    /// guessed around: a mislabeled month would shift every date.
    #[error("unrecognized month name `{0}` in the month header")]
    UnrecognizedMonth(String),

    /// Row/column structure inconsistent with the fixed grid layout.
    #[error("grid layout mismatch: {0}")]
    StructuralMismatch(String),
}
