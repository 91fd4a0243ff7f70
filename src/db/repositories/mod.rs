//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod course_repo;
pub mod enrollment_repo;
pub mod user_repo;

pub use course_repo::CourseRepository;
pub use enrollment_repo::EnrollmentRepository;
pub use user_repo::UserRepository;
