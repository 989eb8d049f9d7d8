use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{null_to_default, string_or_number, trimmed};
use crate::Searchable;

/// An assignment posted by a teacher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    #[serde(rename = "assignmentID", alias = "id")]
    pub id: i64,
    #[serde(rename = "assignmentTitle", default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(rename = "assignmentInFile", default)]
    pub file_url: Option<String>,
    #[serde(rename = "assignmentInText", default, deserialize_with = "null_to_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub due_date: String,
    #[serde(rename = "userID", default, deserialize_with = "string_or_number")]
    pub posted_by: String,
    #[serde(rename = "subjectID", default, deserialize_with = "string_or_number")]
    pub subject_id: String,
}

impl Assignment {
    /// Due date as a calendar date. Accepts `YYYY-MM-DD` with or without a time part.
    pub fn due_on(&self) -> Option<NaiveDate> {
        let date_part = self.due_date.get(..10)?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_on().map(|due| due < today).unwrap_or(false)
    }
}

impl Searchable for Assignment {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.text, self.subject_id)
    }
}

/// Text fields of a new assignment. The attachment travels as a `FileUpload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateAssignmentRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    pub text: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Due date is required"))
    )]
    pub due_date: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Subject ID is required"))
    )]
    pub subject_id: String,
}

impl CreateAssignmentRequest {
    pub fn new(title: &str, text: &str, due_date: &str, subject_id: &str) -> Self {
        Self {
            title: trimmed(title),
            text: text.trim().to_string(),
            due_date: trimmed(due_date),
            subject_id: trimmed(subject_id),
        }
    }

    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("assignmentTitle", self.title.clone()),
            ("assignmentInText", self.text.clone()),
            ("due_date", self.due_date.clone()),
            ("subjectID", self.subject_id.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assignment {
        serde_json::from_value(serde_json::json!({
            "assignmentID": 11,
            "assignmentTitle": "Lab report",
            "assignmentInFile": null,
            "assignmentInText": "Write up the pendulum lab",
            "created_at": "2024-02-20T09:30:00Z",
            "due_date": "2024-03-01",
            "userID": 4,
            "subjectID": "PHY1"
        }))
        .unwrap()
    }

    #[test]
    fn reads_upstream_field_names() {
        let a = sample();
        assert_eq!(a.id, 11);
        assert_eq!(a.title, "Lab report");
        assert_eq!(a.file_url, None);
        assert_eq!(a.posted_by, "4");
    }

    #[test]
    fn overdue_compares_dates() {
        let a = sample();
        let before = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert!(!a.is_overdue(before));
        assert!(a.is_overdue(after));
    }

    #[test]
    fn unparseable_due_date_is_never_overdue() {
        let mut a = sample();
        a.due_date = "soon".into();
        assert!(!a.is_overdue(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
    }

    #[cfg(feature = "validation")]
    #[test]
    fn create_requires_title_due_date_subject() {
        use crate::ValidateRequest;
        let err = CreateAssignmentRequest::new("", "notes", "", " ")
            .validate_request()
            .unwrap_err();
        assert_eq!(err.field_errors.len(), 3);
    }
}
