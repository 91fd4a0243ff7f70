//! Application-wide constants
//!
//! Constants are grouped by their purpose.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const STUDENT: &str = "student";
    pub const INSTRUCTOR: &str = "instructor";
    pub const ADMIN: &str = "admin";

    /// All user roles
    pub const ALL: &[&str] = &[STUDENT, INSTRUCTOR, ADMIN];

    /// Roles allowed to be assigned as a course instructor
    pub const COURSE_INSTRUCTORS: &[&str] = &[INSTRUCTOR, ADMIN];
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Minimum user name length (after trimming)
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum user name length (after trimming)
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum email length
pub const MAX_EMAIL_LENGTH: u64 = 255;

/// Minimum course title length (after trimming)
pub const MIN_TITLE_LENGTH: usize = 3;

/// Maximum course title length (after trimming)
pub const MAX_TITLE_LENGTH: usize = 200;

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

/// Plain-text banner served at `/`
pub const BANNER: &str = "EnrollHub course enrollment service";
