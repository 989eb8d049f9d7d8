use serde::{Deserialize, Serialize};

/// School user role selecting which dashboard a user sees.
///
/// - `Unassigned`: unknown role string; no dashboard is available.
/// - `Admin`: manages users, roles, notices, attendance and complaints.
/// - `Teacher`: posts assignments, takes attendance, files complaints.
/// - `Student`: views notices, assignments and their own attendance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    #[default]
    Unassigned,
    Admin,
    Teacher,
    Student,
}

impl UserRole {
    /// Parse the role string returned by the profile endpoint.
    ///
    /// Accepts role names in any case as well as the numeric role ids the
    /// school API uses (`1` admin, `2` teacher, `3` student).
    pub fn from_str_or_default(s: &str) -> Self {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Self::from_role_id(id);
        }
        match s.to_lowercase().as_str() {
            "admin" | "administrator" => UserRole::Admin,
            "teacher" => UserRole::Teacher,
            "student" => UserRole::Student,
            _ => UserRole::Unassigned,
        }
    }

    pub fn from_role_id(id: i64) -> Self {
        match id {
            1 => UserRole::Admin,
            2 => UserRole::Teacher,
            3 => UserRole::Student,
            _ => UserRole::Unassigned,
        }
    }

    pub fn role_id(&self) -> Option<i64> {
        match self {
            UserRole::Admin => Some(1),
            UserRole::Teacher => Some(2),
            UserRole::Student => Some(3),
            UserRole::Unassigned => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Unassigned => "unassigned",
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }

    /// Title-case label for badges and headings.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Unassigned => "Unassigned",
            UserRole::Admin => "Admin",
            UserRole::Teacher => "Teacher",
            UserRole::Student => "Student",
        }
    }
}

/// Bearer token pair issued by the school API at login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SessionToken {
    pub access: String,
    #[serde(default)]
    pub refresh: String,
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Body returned by the school API login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: SessionToken,
    #[serde(default)]
    pub msg: String,
}

/// Body returned by the token refresh endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Authenticated user info (safe to send to client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl AuthUser {
    /// Up to two initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let source = if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        };
        source
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Generic `{"msg": "..."}` acknowledgement from mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessageResponse {
    #[serde(default, alias = "message", alias = "detail")]
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_from_names_any_case() {
        assert_eq!(UserRole::from_str_or_default("Admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("TEACHER"), UserRole::Teacher);
        assert_eq!(UserRole::from_str_or_default(" student "), UserRole::Student);
    }

    #[test]
    fn user_role_from_numeric_ids() {
        assert_eq!(UserRole::from_str_or_default("1"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("2"), UserRole::Teacher);
        assert_eq!(UserRole::from_str_or_default("3"), UserRole::Student);
        assert_eq!(UserRole::from_str_or_default("9"), UserRole::Unassigned);
    }

    #[test]
    fn user_role_unknown_is_unassigned() {
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Unassigned);
        assert_eq!(UserRole::from_str_or_default("principal"), UserRole::Unassigned);
    }

    #[test]
    fn user_role_id_roundtrip() {
        for role in [UserRole::Admin, UserRole::Teacher, UserRole::Student] {
            let id = role.role_id().unwrap();
            assert_eq!(UserRole::from_role_id(id), role);
        }
        assert_eq!(UserRole::Unassigned.role_id(), None);
    }

    #[test]
    fn login_response_deserializes_token_pair() {
        let json = r#"{"token":{"access":"a.b.c","refresh":"r.s.t"},"msg":"Login Success"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token.access, "a.b.c");
        assert_eq!(resp.token.refresh, "r.s.t");
    }

    #[test]
    fn initials_use_name_then_email() {
        let mut user = AuthUser {
            id: 1,
            name: "asha rai".into(),
            email: "asha@school.edu".into(),
            role: UserRole::Teacher,
            photo_url: None,
        };
        assert_eq!(user.initials(), "AR");
        user.name = String::new();
        assert_eq!(user.initials(), "A");
    }

    #[test]
    fn message_response_accepts_aliases() {
        let resp: MessageResponse = serde_json::from_str(r#"{"detail":"Deleted"}"#).unwrap();
        assert_eq!(resp.msg, "Deleted");
        let resp: MessageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.msg, "");
    }
}
