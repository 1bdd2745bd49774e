//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Conversion into domain
//! values happens in the repository adapters.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{course_lectures, courses, lectures, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub photo_url: String,
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub display_name: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub photo_url: &'a str,
}

/// Insertable struct for creating lecture records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = lectures)]
pub(crate) struct NewLectureRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub is_preview_free: bool,
}

/// Insertable struct for creating course records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub level: &'a str,
    pub price_cents: i32,
    pub thumbnail_url: &'a str,
    pub creator_id: Uuid,
    pub is_published: bool,
}

/// Insertable struct for course to lecture links.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = course_lectures)]
pub(crate) struct NewCourseLectureRow {
    pub course_id: Uuid,
    pub lecture_id: Uuid,
    pub position: i32,
}
