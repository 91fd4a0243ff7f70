//! Enrollment response DTOs

use serde::Serialize;

/// Enrollment outcome
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub ok: bool,
    pub message: String,
}
