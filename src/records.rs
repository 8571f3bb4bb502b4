// src/records.rs
//
// Output value objects. Every record here is built once by a spec or the
// decoder and never mutated afterwards; CSV shaping lives next to the data
// so the runner only ever sees headers + rows.

use chrono::NaiveDate;

/// A module's registration/visibility tier for the current user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionLevel {
    Unknown,
    Discard,
    CateSubmissions,
    ExamRegistration,
}

impl SubscriptionLevel {
    /// The tier token the site itself uses.
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionLevel::Unknown => "UNKNOWN",
            SubscriptionLevel::Discard => "0",
            SubscriptionLevel::CateSubmissions => "2",
            SubscriptionLevel::ExamRegistration => "3",
        }
    }
}

/// Whether (and how) an exercise is graded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessedStatus {
    Unknown,
    Unassessed,
    UnassessedSubmissionRequired,
    AssessedIndividual,
    AssessedGroup,
}

impl AssessedStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AssessedStatus::Unknown => "UNKNOWN",
            AssessedStatus::Unassessed => "UA",
            AssessedStatus::UnassessedSubmissionRequired => "UA-SR",
            AssessedStatus::AssessedIndividual => "A-I",
            AssessedStatus::AssessedGroup => "A-G",
        }
    }
}

/// Current submission state of an exercise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Unknown,
    Ok,
    NotSubmitted,
    NotSubmittedDueSoon,
    IncompleteSubmission,
    IncompleteSubmissionDueSoon,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Unknown => "UNKNOWN",
            SubmissionStatus::Ok => "OK",
            SubmissionStatus::NotSubmitted => "N-S",
            SubmissionStatus::NotSubmittedDueSoon => "N-S-DS",
            SubmissionStatus::IncompleteSubmission => "I-S",
            SubmissionStatus::IncompleteSubmissionDueSoon => "I-S-DS",
        }
    }
}

/// Links attached to one exercise cell. The key set is closed: anything the
/// site may add beyond these four is dropped at decode time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExerciseLinks {
    pub mailto: Option<String>,
    pub spec: Option<String>,
    pub handin: Option<String>,
    pub givens: Option<String>,
}

/// One deliverable occupying a date range within a module block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exercise {
    pub module_number: String,
    pub module_name: String,
    pub subscription_level: SubscriptionLevel,
    pub code: String,
    pub name: String,
    pub start: NaiveDate,
    /// Inclusive: a one-column cell starts and ends on the same day.
    pub end: NaiveDate,
    pub assessed_status: AssessedStatus,
    pub submission_status: SubmissionStatus,
    pub links: ExerciseLinks,
    pub spec_key: Option<String>,
}

impl Exercise {
    pub const CSV_HEADERS: [&'static str; 14] = [
        "Module", "Module Name", "Level", "Code", "Exercise", "Start", "End",
        "Assessed", "Submission", "Mailto", "Spec", "Handin", "Givens",
        "Spec Key",
    ];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.module_number.clone(),
            self.module_name.clone(),
            s!(self.subscription_level.as_str()),
            self.code.clone(),
            self.name.clone(),
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
            s!(self.assessed_status.as_str()),
            s!(self.submission_status.as_str()),
            self.links.mailto.clone().unwrap_or_default(),
            self.links.spec.clone().unwrap_or_default(),
            self.links.handin.clone().unwrap_or_default(),
            self.links.givens.clone().unwrap_or_default(),
            self.spec_key.clone().unwrap_or_default(),
        ]
    }
}

/// Flat personal data from the homepage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInfo {
    pub name: String,
    pub login: String,
    pub cid: String,
    pub status: String,
    pub department: String,
    pub category: String,
    pub email: String,
    pub personal_tutor: String,
}

impl UserInfo {
    pub const CSV_HEADERS: [&'static str; 8] = [
        "Name", "Login", "CID", "Status", "Department", "Category", "Email",
        "Personal Tutor",
    ];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.login.clone(),
            self.cid.clone(),
            self.status.clone(),
            self.department.clone(),
            self.category.clone(),
            self.email.clone(),
            self.personal_tutor.clone(),
        ]
    }
}

/// One row of a module's notes/resources listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub number: String,
    pub title: String,
    /// "URL" for external links, otherwise the site's file-type label.
    pub kind: String,
    pub size: String,
    pub loaded: String,
    pub owner: String,
    pub hits: String,
    pub url: Option<String>,
    pub filekey: Option<String>,
}

impl Note {
    pub const CSV_HEADERS: [&'static str; 9] = [
        "Number", "Title", "Type", "Size", "Loaded", "Owner", "Hits", "URL",
        "File Key",
    ];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.title.clone(),
            self.kind.clone(),
            self.size.clone(),
            self.loaded.clone(),
            self.owner.clone(),
            self.hits.clone(),
            self.url.clone().unwrap_or_default(),
            self.filekey.clone().unwrap_or_default(),
        ]
    }
}
