//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::constants::{
    self, MAX_NAME_LENGTH, MAX_TITLE_LENGTH, MIN_NAME_LENGTH, MIN_TITLE_LENGTH,
};

/// Loose email shape: something, `@`, something, `.`, something
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Hostname-shaped domain such as `school.edu` or `example.co.uk`
pub static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]?\.([a-zA-Z]{2,}|[a-zA-Z]{2,}\.[a-zA-Z]{2,})$")
        .expect("valid domain regex")
});

/// Parse a strictly positive integer id from a JSON number or numeric string
pub fn parse_positive_id(value: &Value) -> Option<i32> {
    let id = match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok())?,
        Value::String(s) => s.trim().parse::<i32>().ok()?,
        _ => return None,
    };
    (id > 0).then_some(id)
}

/// An optional string field; absent and `null` both count as missing
pub fn optional_string<'a>(
    value: Option<&'a Value>,
    message: &'static str,
) -> Result<Option<&'a str>, &'static str> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(message),
    }
}

/// Validate an optional `is_public` flag
pub fn validate_boolean(value: Option<&Value>) -> Result<Option<bool>, &'static str> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err("is_public must be a boolean value"),
    }
}

/// Parse a strictly positive integer id from a path segment
pub fn parse_path_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

/// Validate and trim a user name
pub fn validate_name(name: &str) -> Result<String, &'static str> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if len < MIN_NAME_LENGTH {
        return Err("Name must be at least 2 characters long");
    }
    if len > MAX_NAME_LENGTH {
        return Err("Name must be less than 100 characters");
    }
    Ok(trimmed.to_string())
}

/// Validate and trim a course title
pub fn validate_title(title: &str) -> Result<String, &'static str> {
    let trimmed = title.trim();
    let len = trimmed.chars().count();
    if len < MIN_TITLE_LENGTH {
        return Err("Title must be at least 3 characters long");
    }
    if len > MAX_TITLE_LENGTH {
        return Err("Title must be less than 200 characters");
    }
    Ok(trimmed.to_string())
}

/// Lower-case and trim an email
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an optional domain and normalize it; blank counts as absent
pub fn normalize_domain(domain: Option<&str>) -> Result<Option<String>, &'static str> {
    match domain.map(str::trim).filter(|d| !d.is_empty()) {
        None => Ok(None),
        Some(d) if DOMAIN_REGEX.is_match(d) => Ok(Some(d.to_lowercase())),
        Some(_) => Err(INVALID_DOMAIN),
    }
}

pub const INVALID_ROLE: &str = "Invalid role. Must be student, instructor, or admin";

pub const INVALID_DOMAIN: &str = "Invalid domain format";

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err(INVALID_ROLE)
    }
}
