use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::common::{null_to_default, trimmed};
use crate::Searchable;

/// Semester (`faculty_batch_sem`) ids notices and attendance are grouped by.
pub const SEMESTERS: RangeInclusive<i64> = 1..=8;

pub fn semester_label(semester: i64) -> String {
    format!("Semester {}", semester)
}

/// A notice posted for one semester.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "noticeName", default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(rename = "faculty_batch_Sem", alias = "faculty_batch_sem", default)]
    pub semester: i64,
    #[serde(rename = "ImageFile", default)]
    pub image_url: Option<String>,
}

impl Searchable for Notice {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, semester_label(self.semester))
    }
}

/// Text fields of a new notice. The image travels as a `FileUpload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateNoticeRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Notice title is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 8, message = "Choose a semester between 1 and 8"))
    )]
    pub semester: i64,
}

impl CreateNoticeRequest {
    pub fn new(name: &str, semester: i64) -> Self {
        Self {
            name: trimmed(name),
            semester,
        }
    }

    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("noticeName", self.name.clone()),
            ("faculty_batch_sem", self.semester.to_string()),
        ]
    }
}
