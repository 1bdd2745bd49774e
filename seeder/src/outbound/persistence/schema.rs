//! Diesel table definitions for the course catalogue schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. `lower(email)` carries a unique index.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        display_name -> Varchar,
        password_hash -> Varchar,
        role -> Varchar,
        photo_url -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Lecture records, linked to courses through `course_lectures`.
    lectures (id) {
        id -> Uuid,
        title -> Varchar,
        is_preview_free -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Course records owned by an instructor.
    courses (id) {
        id -> Uuid,
        title -> Varchar,
        subtitle -> Text,
        description -> Text,
        category -> Varchar,
        level -> Varchar,
        price_cents -> Int4,
        thumbnail_url -> Text,
        creator_id -> Uuid,
        is_published -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Ordered course to lecture links. `position` is zero-based.
    course_lectures (course_id, position) {
        course_id -> Uuid,
        lecture_id -> Uuid,
        position -> Int4,
    }
}

diesel::joinable!(courses -> users (creator_id));
diesel::joinable!(course_lectures -> courses (course_id));
diesel::joinable!(course_lectures -> lectures (lecture_id));

diesel::allow_tables_to_appear_in_same_query!(users, lectures, courses, course_lectures);
