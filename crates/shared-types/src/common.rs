use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::UserRole;

/// One page of a paginated list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, page: i64, has_next: bool) -> Self {
        Self {
            items,
            page,
            has_next,
            has_prev: page > 1,
        }
    }
}

/// Clamp a requested page number to the first page.
pub fn normalize_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Decode a list endpoint body.
///
/// The school API answers list requests with a bare array, a paginated
/// `{"results": [...]}` object, or occasionally a message object when
/// nothing matches. Anything that is not a list decodes as empty.
pub fn list_from_value<T: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<Vec<T>, serde_json::Error> {
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        serde_json::Value::Object(mut obj) => {
            for key in ["results", "data"] {
                if let Some(inner @ serde_json::Value::Array(_)) = obj.remove(key) {
                    return serde_json::from_value(inner);
                }
            }
            Ok(Vec::new())
        }
        _ => Ok(Vec::new()),
    }
}

/// Whether a paginated body advertises a next page.
pub fn has_next_page(value: &serde_json::Value) -> bool {
    value
        .get("next")
        .map(|next| !next.is_null())
        .unwrap_or(false)
}

// ── serde helpers for loosely-typed upstream fields ──────────────

/// Treat an explicit `null` as the type's default.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a string, number, or null and keep it as a string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Resolve a role from either its name or numeric id.
pub fn role_from_any<'de, D>(deserializer: D) -> Result<UserRole, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => UserRole::from_str_or_default(&s),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(UserRole::from_role_id)
            .unwrap_or_default(),
        serde_json::Value::Object(obj) => obj
            .get("name")
            .or_else(|| obj.get("role"))
            .and_then(|v| v.as_str())
            .map(UserRole::from_str_or_default)
            .unwrap_or_default(),
        _ => UserRole::Unassigned,
    })
}

/// Trim a form value, mapping whitespace-only input to empty.
pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}
