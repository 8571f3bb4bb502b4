// src/decode/status.rs
// Rendering-attribute → status lookups. The site's color/border vocabulary
// is presentation, not contract, so these are total: unrecognized values
// degrade to Unknown instead of erroring.

use crate::records::{AssessedStatus, SubmissionStatus};

pub fn assessed_status_of(bgcolor: Option<&str>) -> AssessedStatus {
    match bgcolor {
        Some("white") => AssessedStatus::Unassessed,
        Some("#cdcdcd") => AssessedStatus::UnassessedSubmissionRequired,
        Some("#ccffcc") => AssessedStatus::AssessedIndividual,
        Some("#f0ccf0") => AssessedStatus::AssessedGroup,
        Some(_) | None => AssessedStatus::Unknown,
    }
}

/// A cell with no style attribute at all is on track (Ok); only an
/// explicitly unrecognized border value maps to Unknown.
pub fn submission_status_of(style: Option<&str>) -> SubmissionStatus {
    match style {
        None => SubmissionStatus::Ok,
        Some("border: 2px solid red") => SubmissionStatus::NotSubmitted,
        Some("border: 5px solid red") => SubmissionStatus::NotSubmittedDueSoon,
        Some("border: 2px solid yellow") => SubmissionStatus::IncompleteSubmission,
        Some("border: 5px solid yellow") => SubmissionStatus::IncompleteSubmissionDueSoon,
        Some(_) => SubmissionStatus::Unknown,
    }
}
