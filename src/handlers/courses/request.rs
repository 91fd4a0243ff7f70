//! Course request DTOs

use serde::Deserialize;
use serde_json::Value;

/// Create course request
///
/// Fields are kept as raw JSON and type-checked by the course service.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCourseRequest {
    pub title: Option<Value>,

    pub domain: Option<Value>,

    /// Boolean, defaults to `true`
    pub is_public: Option<Value>,

    /// Positive integer, as a JSON number or numeric string
    pub instructor_id: Option<Value>,
}
