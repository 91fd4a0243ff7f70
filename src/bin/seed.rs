//! Demo data loader
//!
//! Wipes the database and fills it with users and courses that exercise
//! every enrollment rule: domain matching, private courses, a full course
//! and a user at the enrollment cap.

use anyhow::Context;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enrollhub::{
    config::Config,
    constants::roles,
    db::{
        self,
        repositories::{CourseRepository, EnrollmentRepository, UserRepository},
    },
    models::{Course, User},
};

/// (name, email, domain, role)
const USERS: &[(&str, &str, Option<&str>, &str)] = &[
    ("Alice Johnson", "alice@example.com", Some("example.com"), roles::STUDENT),
    ("Bob Smith", "bob@example.com", Some("example.com"), roles::STUDENT),
    ("Carol Davis", "carol@example.com", Some("example.com"), roles::INSTRUCTOR),
    ("David Wilson", "david@example.com", Some("example.com"), roles::ADMIN),
    ("Eva Brown", "eva@example.com", Some("example.com"), roles::STUDENT),
    ("Frank Miller", "frank@school.edu", Some("school.edu"), roles::STUDENT),
    ("Grace Lee", "grace@school.edu", Some("school.edu"), roles::STUDENT),
    ("Henry Taylor", "henry@school.edu", Some("school.edu"), roles::INSTRUCTOR),
    ("Ivy Chen", "ivy@university.edu", Some("university.edu"), roles::STUDENT),
    ("Jack Anderson", "jack@university.edu", Some("university.edu"), roles::INSTRUCTOR),
    ("Kate Martinez", "kate@example.com", None, roles::STUDENT),
    ("Liam O'Connor", "liam@example.com", Some("example.com"), roles::STUDENT),
];

/// (title, domain, is_public, instructor email)
const COURSES: &[(&str, Option<&str>, bool, &str)] = &[
    ("Introduction to Programming", Some("example.com"), true, "carol@example.com"),
    ("Web Development Fundamentals", Some("example.com"), true, "carol@example.com"),
    ("Database Design", Some("example.com"), true, "david@example.com"),
    ("Advanced Programming Workshop", Some("example.com"), false, "carol@example.com"),
    ("Exclusive Coding Bootcamp", Some("example.com"), false, "david@example.com"),
    ("School Programming Course", Some("school.edu"), true, "henry@school.edu"),
    ("University Computer Science", Some("university.edu"), true, "jack@university.edu"),
    ("Open Programming Course", None, true, "carol@example.com"),
    ("Popular Programming Course", Some("example.com"), true, "carol@example.com"),
    ("Course 1 for Max Enrollment Test", Some("example.com"), true, "carol@example.com"),
    ("Course 2 for Max Enrollment Test", Some("example.com"), true, "carol@example.com"),
    ("Course 3 for Max Enrollment Test", Some("example.com"), true, "carol@example.com"),
    ("Course 4 for Max Enrollment Test", Some("example.com"), true, "carol@example.com"),
    ("Course 5 for Max Enrollment Test", Some("example.com"), true, "carol@example.com"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::create_pool(&config.database)
        .await
        .context("failed to connect to database")?;
    db::run_migrations(&pool).await?;

    tracing::info!("Clearing existing data...");
    clear(&pool).await?;

    let users = seed_users(&pool).await?;
    let courses = seed_courses(&pool, &users).await?;
    let enrollments = seed_enrollments(&pool, &users, &courses, config.rules.course_capacity)
        .await?;

    tracing::info!(
        users = users.len(),
        courses = courses.len(),
        enrollments,
        "Seeding complete"
    );
    pool.close().await;
    Ok(())
}

async fn clear(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query("TRUNCATE enrollments, courses, users RESTART IDENTITY CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<Vec<User>> {
    let mut users = Vec::with_capacity(USERS.len());
    for &(name, email, domain, role) in USERS {
        let user = UserRepository::create(pool, name, email, domain, role).await?;
        tracing::info!(user_id = user.id, %email, "Created user");
        users.push(user);
    }
    Ok(users)
}

async fn seed_courses(pool: &PgPool, users: &[User]) -> anyhow::Result<Vec<Course>> {
    let mut courses = Vec::with_capacity(COURSES.len());
    for &(title, domain, is_public, instructor_email) in COURSES {
        let instructor = find_user(users, instructor_email)?;
        let course =
            CourseRepository::create(pool, title, domain, is_public, Some(instructor.id)).await?;
        tracing::info!(course_id = course.id, %title, "Created course");
        courses.push(course);
    }
    Ok(courses)
}

/// Returns the number of enrollments created.
async fn seed_enrollments(
    pool: &PgPool,
    users: &[User],
    courses: &[Course],
    course_capacity: i64,
) -> anyhow::Result<usize> {
    let mut created = 0;

    let alice = find_user(users, "alice@example.com")?;
    for title in ["Introduction to Programming", "Web Development Fundamentals"] {
        EnrollmentRepository::create(pool, alice.id, find_course(courses, title)?.id).await?;
        created += 1;
    }

    let liam = find_user(users, "liam@example.com")?;
    for course in courses.iter().filter(|c| c.title.contains("Max Enrollment Test")) {
        EnrollmentRepository::create(pool, liam.id, course.id).await?;
        created += 1;
    }

    let popular = find_course(courses, "Popular Programming Course")?;
    tracing::info!(course_id = popular.id, course_capacity, "Filling course to capacity...");
    for i in 1..=course_capacity {
        let email = format!("tempuser{i}@example.com");
        let user = UserRepository::create(
            pool,
            &format!("Temp User {i}"),
            &email,
            Some("example.com"),
            roles::STUDENT,
        )
        .await?;
        EnrollmentRepository::create(pool, user.id, popular.id).await?;
        created += 1;
    }

    Ok(created)
}

fn find_user<'a>(users: &'a [User], email: &str) -> anyhow::Result<&'a User> {
    users
        .iter()
        .find(|u| u.email.as_deref() == Some(email))
        .with_context(|| format!("seed user {email} missing"))
}

fn find_course<'a>(courses: &'a [Course], title: &str) -> anyhow::Result<&'a Course> {
    courses
        .iter()
        .find(|c| c.title == title)
        .with_context(|| format!("seed course {title} missing"))
}
