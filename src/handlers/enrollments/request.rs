//! Enrollment request DTOs

use serde::Deserialize;
use serde_json::Value;

/// Enroll request; ids may be JSON numbers or numeric strings
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub user_id: Option<Value>,
    pub course_id: Option<Value>,
}
