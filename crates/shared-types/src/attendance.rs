use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{null_to_default, string_or_number, trimmed};
use crate::{AppError, Searchable};

/// Present/absent flag. The school API stores it as the strings
/// `"True"` / `"False"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttendanceStatus {
    Present,
    #[default]
    Absent,
}

impl AttendanceStatus {
    pub fn toggled(self) -> Self {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Present,
        }
    }

    pub fn is_present(self) -> bool {
        self == AttendanceStatus::Present
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "True",
            AttendanceStatus::Absent => "False",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl Serialize for AttendanceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let present = match value {
            serde_json::Value::Bool(b) => b,
            serde_json::Value::Number(n) => n.as_i64() == Some(1),
            serde_json::Value::String(s) => {
                matches!(s.to_lowercase().as_str(), "true" | "present" | "1")
            }
            _ => false,
        };
        Ok(if present {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        })
    }
}

/// One student's mark on an attendance sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    #[serde(rename = "userID", alias = "user_id", deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default)]
    pub status: AttendanceStatus,
}

/// Attendance taken for one subject on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSheet {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "subjectID", deserialize_with = "string_or_number")]
    pub subject: String,
    #[serde(rename = "faculty_batch_sem", alias = "faculty_batch_Sem", default)]
    pub semester: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub records: Vec<AttendanceRecord>,
}

/// Flattened table row: one record with its sheet's context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRow {
    pub record_id: i64,
    pub user_id: String,
    pub subject: String,
    pub semester: i64,
    pub date: String,
    pub status: AttendanceStatus,
}

impl Searchable for AttendanceRow {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.user_id,
            self.subject,
            self.date,
            self.status.label()
        )
    }
}

pub fn flatten_sheets(sheets: &[AttendanceSheet]) -> Vec<AttendanceRow> {
    sheets
        .iter()
        .flat_map(|sheet| {
            sheet.records.iter().map(move |record| AttendanceRow {
                record_id: record.id,
                user_id: record.user_id.clone(),
                subject: sheet.subject.clone(),
                semester: sheet.semester,
                date: sheet.date.clone(),
                status: record.status,
            })
        })
        .collect()
}

/// Percentage of present marks across every sheet of `semester`, rounded to
/// two decimals. A semester without records scores 0.
pub fn attendance_percentage(sheets: &[AttendanceSheet], semester: i64) -> f64 {
    let (present, total) = sheets
        .iter()
        .filter(|sheet| sheet.semester == semester)
        .flat_map(|sheet| sheet.records.iter())
        .fold((0usize, 0usize), |(present, total), record| {
            (present + usize::from(record.status.is_present()), total + 1)
        });
    if total == 0 {
        return 0.0;
    }
    let pct = present as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

// ── Queries ─────────────────────────────────────────────────────────

/// Which filter the attendance page is applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttendanceFilter {
    #[default]
    All,
    User,
    Subject,
    Date,
    UserAndSubject,
}

/// Query parameters for `/roles/attendance/getdata/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AttendanceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = trimmed(value);
    (!value.is_empty()).then_some(value)
}

impl AttendanceQuery {
    /// Build a query for `filter` from raw form inputs, rejecting missing ids
    /// before anything is sent.
    pub fn build(
        filter: AttendanceFilter,
        user_id: &str,
        subject_id: &str,
        date: &str,
    ) -> Result<Self, AppError> {
        let user = non_empty(user_id);
        let subject = non_empty(subject_id);
        let date = non_empty(date);
        match filter {
            AttendanceFilter::All => Ok(Self::default()),
            AttendanceFilter::User => match user {
                Some(user_id) => Ok(Self {
                    user_id: Some(user_id),
                    ..Self::default()
                }),
                None => Err(AppError::field("user_id", "Please enter a User ID")),
            },
            AttendanceFilter::Subject => match subject {
                Some(subject_id) => Ok(Self {
                    subject_id: Some(subject_id),
                    ..Self::default()
                }),
                None => Err(AppError::field("subject_id", "Please enter a Subject ID")),
            },
            AttendanceFilter::Date => match date {
                Some(date) => Ok(Self {
                    date: Some(date),
                    ..Self::default()
                }),
                None => Err(AppError::field("date", "Please choose a date")),
            },
            AttendanceFilter::UserAndSubject => match (user, subject) {
                (Some(user_id), Some(subject_id)) => Ok(Self {
                    user_id: Some(user_id),
                    subject_id: Some(subject_id),
                    date: None,
                }),
                _ => Err(AppError::bad_request(
                    "Please enter both User ID and Subject ID",
                )),
            },
        }
    }

    /// Query-string pairs using the school API's parameter names.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(user_id) = &self.user_id {
            pairs.push(("userID", user_id.clone()));
        }
        if let Some(subject_id) = &self.subject_id {
            pairs.push(("subjectID", subject_id.clone()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date", date.clone()));
        }
        pairs
    }
}

// ── Mutations ───────────────────────────────────────────────────────

/// Body for `editAttendance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateAttendanceRequest {
    pub status: AttendanceStatus,
    pub date: String,
}

/// Body for `deleteAttendance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteAttendanceRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAttendanceMark {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub status: AttendanceStatus,
}

#[cfg(feature = "validation")]
fn validate_marks(marks: &[NewAttendanceMark]) -> Result<(), validator::ValidationError> {
    if marks.is_empty() {
        return Err(validator::ValidationError::new("records")
            .with_message("Add at least one student".into()));
    }
    if marks.iter().any(|m| m.user_id.trim().is_empty()) {
        return Err(validator::ValidationError::new("records")
            .with_message("Every row needs a User ID".into()));
    }
    Ok(())
}

/// A new attendance sheet taken by a teacher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateAttendanceRequest {
    #[serde(rename = "subjectID")]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Subject ID is required"))
    )]
    pub subject_id: String,
    #[serde(rename = "faculty_batch_sem")]
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 8, message = "Choose a semester between 1 and 8"))
    )]
    pub semester: i64,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Date is required"))
    )]
    pub date: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_marks"))
    )]
    pub records: Vec<NewAttendanceMark>,
}

impl CreateAttendanceRequest {
    /// Build from a subject/semester/date header plus a comma or newline
    /// separated list of present and absent user ids.
    pub fn from_roster(
        subject_id: &str,
        semester: i64,
        date: &str,
        present: &str,
        absent: &str,
    ) -> Self {
        let marks = |list: &str, status: AttendanceStatus| -> Vec<NewAttendanceMark> {
            list.split([',', '\n'])
                .filter_map(non_empty)
                .map(|user_id| NewAttendanceMark { user_id, status })
                .collect()
        };
        let mut records = marks(present, AttendanceStatus::Present);
        records.extend(marks(absent, AttendanceStatus::Absent));
        Self {
            subject_id: trimmed(subject_id),
            semester,
            date: trimmed(date),
            records,
        }
    }
}
