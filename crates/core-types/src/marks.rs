use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Upper bound on the length of the roll number and the student name.
pub const MAX_TEXT_LEN: usize = 255;

/// One persisted row of academic performance data.
///
/// Serialized with camelCase keys, which is the shape the UI and the
/// HTTP API consume (`rollNumber`, `createdAt`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MarksRecord {
    pub id: Uuid,
    pub roll_number: String,
    pub name: String,
    pub grade: String,
    pub section: String,
    pub subject: String,
    pub marks: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated marks entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMarks {
    pub roll_number: String,
    pub name: String,
    pub grade: String,
    pub section: String,
    pub subject: String,
    pub marks: f64,
}

impl NewMarks {
    /// Builds a record for the store, stamping identifier and timestamps.
    pub fn into_record(self, id: Uuid, now: DateTime<Utc>) -> MarksRecord {
        MarksRecord {
            id,
            roll_number: self.roll_number,
            name: self.name,
            grade: self.grade,
            section: self.section,
            subject: self.subject,
            marks: self.marks,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Raw, unvalidated input as it arrives from a client or the CLI.
///
/// Every field is optional so that an absent field can be told apart from a
/// zero or an empty string. `validate` is the only way to get a `NewMarks`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksDraft {
    pub roll_number: Option<String>,
    pub name: Option<String>,
    pub grade: Option<String>,
    pub section: Option<String>,
    pub subject: Option<String>,
    pub marks: Option<f64>,
}

impl MarksDraft {
    /// Checks every field explicitly and returns the first problem found.
    ///
    /// Zero is an acceptable mark; absence, blank text, over-long roll
    /// numbers or names, and negative or non-finite marks are not.
    pub fn validate(self) -> Result<NewMarks, ValidationError> {
        let roll_number = required_text("rollNumber", self.roll_number, Some(MAX_TEXT_LEN))?;
        let name = required_text("name", self.name, Some(MAX_TEXT_LEN))?;
        let grade = required_text("grade", self.grade, None)?;
        let section = required_text("section", self.section, None)?;
        let subject = required_text("subject", self.subject, None)?;

        let marks = self.marks.ok_or(ValidationError::Missing("marks"))?;
        if !marks.is_finite() || marks < 0.0 {
            return Err(ValidationError::InvalidMarks(marks));
        }

        Ok(NewMarks {
            roll_number,
            name,
            grade,
            section,
            subject,
            marks,
        })
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    max_len: Option<usize>,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(ValidationError::TooLong { field, max });
        }
    }
    Ok(value)
}
