use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::common::{null_to_default, trimmed};
use crate::Searchable;

/// A complaint filed by a teacher or student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Complaint {
    #[serde(rename = "complainID", alias = "id")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub suggestion: String,
    #[serde(default, alias = "created_at", deserialize_with = "null_to_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub solved: bool,
    #[serde(rename = "file", alias = "attachment", default)]
    pub attachment_url: Option<String>,
}

impl Complaint {
    /// Sortable timestamp parsed from `date`; unparseable dates sort last.
    fn sort_key(&self) -> Option<NaiveDateTime> {
        let raw = self.date.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.naive_utc())
            .ok()
            .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    pub fn apply_edit(&mut self, edit: &ComplaintEdit) {
        self.title = edit.title.clone();
        self.description = edit.description.clone();
        self.suggestion = edit.suggestion.clone();
    }

    /// Solved complaints are closed to edits and deletion by their author.
    pub fn is_locked(&self) -> bool {
        self.solved
    }

    pub fn status_label(&self) -> &'static str {
        if self.solved {
            "Solved"
        } else {
            "Open"
        }
    }
}

impl Searchable for Complaint {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.suggestion)
    }
}

/// Sort complaints newest first.
pub fn sort_newest_first(complaints: &mut [Complaint]) {
    complaints.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
}

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ComplaintSummary {
    pub total: usize,
    pub solved: usize,
    pub unsolved: usize,
}

impl ComplaintSummary {
    pub fn from_complaints(complaints: &[Complaint]) -> Self {
        let solved = complaints.iter().filter(|c| c.solved).count();
        Self {
            total: complaints.len(),
            solved,
            unsolved: complaints.len() - solved,
        }
    }
}

/// Inline edit of an existing complaint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ComplaintEdit {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Description is required"))
    )]
    pub description: String,
    pub suggestion: String,
}

impl ComplaintEdit {
    pub fn new(title: &str, description: &str, suggestion: &str) -> Self {
        Self {
            title: trimmed(title),
            description: trimmed(description),
            suggestion: trimmed(suggestion),
        }
    }

    pub fn from_complaint(complaint: &Complaint) -> Self {
        Self::new(&complaint.title, &complaint.description, &complaint.suggestion)
    }

    /// Multipart text fields for filing a new complaint.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("suggestion", self.suggestion.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complaint(id: i64, date: &str, solved: bool) -> Complaint {
        Complaint {
            id,
            title: format!("Complaint {}", id),
            description: "desc".into(),
            suggestion: String::new(),
            date: date.into(),
            solved,
            attachment_url: None,
        }
    }

    #[test]
    fn reads_complain_id() {
        let c: Complaint = serde_json::from_value(serde_json::json!({
            "complainID": 5,
            "title": "Water cooler",
            "description": "Broken on floor 2",
            "suggestion": null,
            "date": "2024-04-02",
            "solved": true
        }))
        .unwrap();
        assert_eq!(c.id, 5);
        assert_eq!(c.suggestion, "");
        assert_eq!(c.status_label(), "Solved");
    }

    #[test]
    fn sorts_newest_first_with_mixed_formats() {
        let mut list = vec![
            complaint(1, "2024-01-05", false),
            complaint(2, "2024-03-01T10:00:00Z", false),
            complaint(3, "not a date", false),
            complaint(4, "2024-02-10T08:00:00.123", false),
        ];
        sort_newest_first(&mut list);
        let ids: Vec<i64> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn summary_counts_solved_and_unsolved() {
        let list = vec![
            complaint(1, "", true),
            complaint(2, "", false),
            complaint(3, "", false),
        ];
        assert_eq!(
            ComplaintSummary::from_complaints(&list),
            ComplaintSummary { total: 3, solved: 1, unsolved: 2 }
        );
    }

    #[test]
    fn apply_edit_changes_only_text() {
        let mut c = complaint(9, "2024-01-01", true);
        c.apply_edit(&ComplaintEdit::new(" New title ", "New desc", "Fix it"));
        assert_eq!(c.title, "New title");
        assert_eq!(c.suggestion, "Fix it");
        assert!(c.solved);
        assert_eq!(c.id, 9);
    }

    #[cfg(feature = "validation")]
    #[test]
    fn edit_rejects_blank_title() {
        use crate::ValidateRequest;
        let err = ComplaintEdit::new("  ", "something", "").validate_request().unwrap_err();
        assert_eq!(err.field_errors["title"], "Title is required");
        assert!(!err.field_errors.contains_key("description"));
    }

    #[test]
    fn only_solved_complaints_are_locked() {
        assert!(complaint(1, "2024-03-01", true).is_locked());
        assert!(!complaint(2, "2024-03-01", false).is_locked());
    }
}
