use serde::{Deserialize, Serialize};

use crate::common::{null_to_default, role_from_any, string_or_number, trimmed};
use crate::{Searchable, UserRole};

// ── Directory ───────────────────────────────────────────────────────

/// A user row in the admin directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    #[serde(default, alias = "userID", alias = "user_id")]
    pub id: i64,
    #[serde(default, alias = "username", alias = "full_name", deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub email: String,
    #[serde(default)]
    pub role_id: i64,
}

impl UserSummary {
    pub fn role(&self) -> UserRole {
        UserRole::from_role_id(self.role_id)
    }
}

impl Searchable for UserSummary {
    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.role().label())
    }
}

/// One element of the `/user/list/` response, grouping users by role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserGroups {
    #[serde(default, deserialize_with = "null_to_default")]
    pub teacher: Vec<UserSummary>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub student: Vec<UserSummary>,
}

/// Flatten the grouped directory into one list, teachers first.
///
/// Users missing a `role_id` inherit it from the group they came from.
pub fn flatten_directory(groups: Vec<UserGroups>) -> Vec<UserSummary> {
    let teacher_id = UserRole::Teacher.role_id().unwrap_or_default();
    let student_id = UserRole::Student.role_id().unwrap_or_default();
    let mut teachers = Vec::new();
    let mut students = Vec::new();
    for group in groups {
        teachers.extend(group.teacher.into_iter().map(|mut u| {
            if u.role_id == 0 {
                u.role_id = teacher_id;
            }
            u
        }));
        students.extend(group.student.into_iter().map(|mut u| {
            if u.role_id == 0 {
                u.role_id = student_id;
            }
            u
        }));
    }
    teachers.extend(students);
    teachers
}

/// Request to register a new teacher or student account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateUserRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 3, message = "Select a role"))
    )]
    pub role_id: i64,
}

impl CreateUserRequest {
    pub fn new(name: &str, email: &str, password: &str, role: UserRole) -> Self {
        Self {
            name: trimmed(name),
            email: trimmed(email),
            password: password.to_string(),
            role_id: role.role_id().unwrap_or_default(),
        }
    }
}

// ── Profile ─────────────────────────────────────────────────────────

/// Personal details of the signed-in teacher or student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Profile {
    #[serde(default, alias = "userID", alias = "user_id", alias = "user")]
    pub id: i64,
    #[serde(default, alias = "username", alias = "full_name", deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub address: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone_no: String,
    #[serde(rename = "Father_name", default, deserialize_with = "null_to_default")]
    pub father_name: String,
    #[serde(rename = "Mother_name", default, deserialize_with = "null_to_default")]
    pub mother_name: String,
    #[serde(rename = "Parents_phone_no", default, deserialize_with = "string_or_number")]
    pub parents_phone_no: String,
    #[serde(rename = "DOB", default, deserialize_with = "null_to_default")]
    pub dob: String,
    #[serde(rename = "Photo", default)]
    pub photo: Option<String>,
}

/// Body of `/user/profile/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default, deserialize_with = "role_from_any")]
    pub role: UserRole,
}

/// Editable profile fields. The photo travels separately as a `FileUpload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct UpdateProfileRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Address is required"))
    )]
    pub address: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 7, max = 15, message = "Enter a valid phone number"))
    )]
    pub phone_no: String,
    pub father_name: String,
    pub mother_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 15, message = "Enter a valid phone number"))
    )]
    pub parents_phone_no: String,
    pub dob: String,
}

impl UpdateProfileRequest {
    pub fn new(
        address: &str,
        phone_no: &str,
        father_name: &str,
        mother_name: &str,
        parents_phone_no: &str,
        dob: &str,
    ) -> Self {
        Self {
            address: trimmed(address),
            phone_no: trimmed(phone_no),
            father_name: trimmed(father_name),
            mother_name: trimmed(mother_name),
            parents_phone_no: trimmed(parents_phone_no),
            dob: trimmed(dob),
        }
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self::new(
            &profile.address,
            &profile.phone_no,
            &profile.father_name,
            &profile.mother_name,
            &profile.parents_phone_no,
            &profile.dob,
        )
    }

    /// Copy with every field trimmed; validate this, not the raw draft.
    pub fn normalized(&self) -> Self {
        Self::new(
            &self.address,
            &self.phone_no,
            &self.father_name,
            &self.mother_name,
            &self.parents_phone_no,
            &self.dob,
        )
    }

    /// Text parts of the multipart form, keyed by the school API's field names.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("address", trimmed(&self.address)),
            ("phone_no", trimmed(&self.phone_no)),
            ("Father_name", trimmed(&self.father_name)),
            ("Mother_name", trimmed(&self.mother_name)),
            ("Parents_phone_no", trimmed(&self.parents_phone_no)),
            ("DOB", trimmed(&self.dob)),
        ]
    }
}
