//! PostgreSQL-backed lecture and course adapters.
//!
//! One adapter serves both ports because a course and its ordered lecture
//! links are written together in a single transaction.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{CourseRepository, LectureRepository, SeedPersistenceError};
use crate::domain::{Course, CourseId, Lecture, LectureId, NewCourse, NewLecture};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewCourseLectureRow, NewCourseRow, NewLectureRow};
use super::pool::DbPool;
use super::schema::{course_lectures, courses, lectures};

/// Diesel-backed implementation of the lecture and course ports.
#[derive(Clone)]
pub struct DieselCourseCatalogRepository {
    pool: DbPool,
}

impl DieselCourseCatalogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_i32(value: usize, what: &str) -> Result<i32, SeedPersistenceError> {
    i32::try_from(value)
        .map_err(|_| SeedPersistenceError::validation(format!("{what} {value} exceeds INTEGER")))
}

fn to_u64(value: usize, what: &str) -> Result<u64, SeedPersistenceError> {
    u64::try_from(value)
        .map_err(|_| SeedPersistenceError::query(format!("{what} {value} exceeds u64")))
}

fn link_rows(
    course_id: Uuid,
    lecture_ids: &[LectureId],
) -> Result<Vec<NewCourseLectureRow>, SeedPersistenceError> {
    lecture_ids
        .iter()
        .enumerate()
        .map(|(position, lecture_id)| {
            Ok(NewCourseLectureRow {
                course_id,
                lecture_id: *lecture_id.as_uuid(),
                position: to_i32(position, "lecture position")?,
            })
        })
        .collect()
}

#[async_trait]
impl LectureRepository for DieselCourseCatalogRepository {
    async fn delete_all(&self) -> Result<u64, SeedPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(lectures::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        to_u64(removed, "removed lecture count")
    }

    async fn insert_many(
        &self,
        drafts: Vec<NewLecture>,
    ) -> Result<Vec<Lecture>, SeedPersistenceError> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let created: Vec<Lecture> = drafts
            .into_iter()
            .map(|lecture| Lecture {
                id: LectureId::random(),
                title: lecture.title,
                is_preview_free: lecture.is_preview_free,
            })
            .collect();
        let rows: Vec<NewLectureRow<'_>> = created
            .iter()
            .map(|lecture| NewLectureRow {
                id: *lecture.id.as_uuid(),
                title: lecture.title.as_ref(),
                is_preview_free: lecture.is_preview_free,
            })
            .collect();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(lectures::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(created)
    }
}

#[async_trait]
impl CourseRepository for DieselCourseCatalogRepository {
    async fn delete_all(&self) -> Result<u64, SeedPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // `course_lectures` rows go with their course via ON DELETE CASCADE.
        let removed = diesel::delete(courses::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        to_u64(removed, "removed course count")
    }

    async fn create(&self, course: NewCourse) -> Result<Course, SeedPersistenceError> {
        let id = CourseId::random();
        let price_cents = i32::try_from(course.price.cents()).map_err(|_| {
            SeedPersistenceError::validation(format!(
                "price {} exceeds INTEGER",
                course.price.cents()
            ))
        })?;
        let course_row = NewCourseRow {
            id: *id.as_uuid(),
            title: course.title.as_ref(),
            subtitle: &course.subtitle,
            description: &course.description,
            category: course.category.as_ref(),
            level: course.level.as_str(),
            price_cents,
            thumbnail_url: &course.thumbnail_url,
            creator_id: *course.creator_id.as_uuid(),
            is_published: course.is_published,
        };
        let links = link_rows(*id.as_uuid(), &course.lecture_ids)?;

        {
            // The row borrows `course`; release the connection before moving it.
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            conn.transaction(|conn| {
                async move {
                    diesel::insert_into(courses::table)
                        .values(&course_row)
                        .execute(conn)
                        .await?;
                    if !links.is_empty() {
                        diesel::insert_into(course_lectures::table)
                            .values(&links)
                            .execute(conn)
                            .await?;
                    }
                    Ok::<_, diesel::result::Error>(())
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        }

        debug!(course_id = %id, "inserted course with lecture links");
        Ok(course.into_course(id))
    }
}
