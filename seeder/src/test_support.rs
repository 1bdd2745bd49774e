//! Test utilities for the seeder crate.
//!
//! Provides an in-memory catalogue store that implements every repository
//! port with the same constraints as the relational schema (unique email,
//! creator and lecture references, one course per lecture) plus a cheap
//! password hasher. Compiled for unit tests and behind the `test-support`
//! feature for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    CourseRepository, LectureRepository, PasswordHashError, PasswordHasher, SeedPersistenceError,
    UserRepository,
};
use crate::domain::{
    Course, CourseId, EmailAddress, Lecture, LectureId, NewCourse, NewLecture, NewUser,
    PasswordHash, User, UserId,
};

#[derive(Debug, Default)]
struct Faults {
    unavailable: bool,
    duplicate_user_on_create: bool,
    fail_course_create_at: Option<usize>,
    course_create_calls: usize,
}

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<(User, PasswordHash)>,
    lectures: Vec<Lecture>,
    courses: Vec<Course>,
    faults: Faults,
}

impl StoreState {
    fn ensure_available(&self) -> Result<(), SeedPersistenceError> {
        if self.faults.unavailable {
            return Err(SeedPersistenceError::connection("in-memory store is offline"));
        }
        Ok(())
    }

    fn lecture_is_linked(&self, id: LectureId) -> bool {
        self.courses
            .iter()
            .any(|course| course.lecture_ids.contains(&id))
    }
}

fn removed_count(len: usize) -> Result<u64, SeedPersistenceError> {
    u64::try_from(len).map_err(|_| SeedPersistenceError::query(format!("{len} rows exceed u64")))
}

/// In-memory implementation of the user, lecture, and course ports.
///
/// # Examples
///
/// ```
/// use seeder::test_support::InMemoryCatalogueStore;
///
/// let store = InMemoryCatalogueStore::new();
/// assert_eq!(store.course_count(), 0);
/// assert_eq!(store.user_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCatalogueStore {
    state: Mutex<StoreState>,
}

impl InMemoryCatalogueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a user directly, bypassing the port.
    pub fn insert_user(&self, user: User, password_hash: PasswordHash) {
        self.state().users.push((user, password_hash));
    }

    /// Make every port call fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state().faults.unavailable = unavailable;
    }

    /// Make the next user creation fail as if a concurrent writer won.
    pub fn reject_next_user_as_duplicate(&self) {
        self.state().faults.duplicate_user_on_create = true;
    }

    /// Fail the `n`th course creation (zero-based) from now on.
    pub fn fail_course_creation_at(&self, n: usize) {
        let mut state = self.state();
        state.faults.course_create_calls = 0;
        state.faults.fail_course_create_at = Some(n);
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.state().users.len()
    }

    /// Number of stored users with the given email.
    pub fn users_with_email(&self, email: &EmailAddress) -> usize {
        self.state()
            .users
            .iter()
            .filter(|(user, _)| user.email() == email)
            .count()
    }

    /// Stored password digest for `email`.
    pub fn password_hash_for(&self, email: &EmailAddress) -> Option<PasswordHash> {
        self.state()
            .users
            .iter()
            .find(|(user, _)| user.email() == email)
            .map(|(_, hash)| hash.clone())
    }

    /// Number of stored lectures.
    pub fn lecture_count(&self) -> usize {
        self.state().lectures.len()
    }

    /// Number of stored courses.
    pub fn course_count(&self) -> usize {
        self.state().courses.len()
    }

    /// Snapshot of stored courses in creation order.
    pub fn courses(&self) -> Vec<Course> {
        self.state().courses.clone()
    }

    /// Snapshot of stored lectures in creation order.
    pub fn lectures(&self) -> Vec<Lecture> {
        self.state().lectures.clone()
    }

    /// Look up a stored lecture.
    pub fn lecture(&self, id: LectureId) -> Option<Lecture> {
        self.state()
            .lectures
            .iter()
            .find(|lecture| lecture.id == id)
            .cloned()
    }

    /// Lectures not referenced by any course.
    pub fn orphaned_lecture_count(&self) -> usize {
        let state = self.state();
        state
            .lectures
            .iter()
            .filter(|lecture| !state.lecture_is_linked(lecture.id))
            .count()
    }
}

#[async_trait]
impl UserRepository for InMemoryCatalogueStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, SeedPersistenceError> {
        let state = self.state();
        state.ensure_available()?;
        Ok(state
            .users
            .iter()
            .find(|(user, _)| user.email() == email)
            .map(|(user, _)| user.clone()))
    }

    async fn create(&self, user: NewUser) -> Result<User, SeedPersistenceError> {
        let mut state = self.state();
        state.ensure_available()?;
        if std::mem::take(&mut state.faults.duplicate_user_on_create)
            || state.users.iter().any(|(stored, _)| stored.email() == &user.email)
        {
            return Err(SeedPersistenceError::unique_violation("users_email_key"));
        }

        let NewUser {
            email,
            display_name,
            password_hash,
            role,
            photo_url,
        } = user;
        let stored = User::new(UserId::random(), email, display_name, role, photo_url);
        state.users.push((stored.clone(), password_hash));
        Ok(stored)
    }
}

#[async_trait]
impl LectureRepository for InMemoryCatalogueStore {
    async fn delete_all(&self) -> Result<u64, SeedPersistenceError> {
        let mut state = self.state();
        state.ensure_available()?;
        if state.lectures.iter().any(|lecture| state.lecture_is_linked(lecture.id)) {
            return Err(SeedPersistenceError::validation(
                "lectures are still referenced by courses",
            ));
        }
        let removed = removed_count(state.lectures.len())?;
        state.lectures.clear();
        Ok(removed)
    }

    async fn insert_many(
        &self,
        lectures: Vec<NewLecture>,
    ) -> Result<Vec<Lecture>, SeedPersistenceError> {
        let mut state = self.state();
        state.ensure_available()?;
        let created: Vec<Lecture> = lectures
            .into_iter()
            .map(|lecture| Lecture {
                id: LectureId::random(),
                title: lecture.title,
                is_preview_free: lecture.is_preview_free,
            })
            .collect();
        state.lectures.extend(created.iter().cloned());
        Ok(created)
    }
}

#[async_trait]
impl CourseRepository for InMemoryCatalogueStore {
    async fn delete_all(&self) -> Result<u64, SeedPersistenceError> {
        let mut state = self.state();
        state.ensure_available()?;
        let removed = removed_count(state.courses.len())?;
        state.courses.clear();
        Ok(removed)
    }

    async fn create(&self, course: NewCourse) -> Result<Course, SeedPersistenceError> {
        let mut state = self.state();
        state.ensure_available()?;

        let call = state.faults.course_create_calls;
        state.faults.course_create_calls += 1;
        if state.faults.fail_course_create_at == Some(call) {
            return Err(SeedPersistenceError::query("injected course creation failure"));
        }

        if !state
            .users
            .iter()
            .any(|(user, _)| user.id() == course.creator_id)
        {
            return Err(SeedPersistenceError::validation("creator does not exist"));
        }
        for id in &course.lecture_ids {
            if !state.lectures.iter().any(|lecture| lecture.id == *id) {
                return Err(SeedPersistenceError::validation(format!(
                    "lecture {id} does not exist"
                )));
            }
            if state.lecture_is_linked(*id) {
                return Err(SeedPersistenceError::unique_violation(format!(
                    "lecture {id} already belongs to a course"
                )));
            }
        }

        let stored = course.into_course(CourseId::random());
        state.courses.push(stored.clone());
        Ok(stored)
    }
}

/// Password hasher that skips the real work factor and counts calls.
#[derive(Debug, Default)]
pub struct StubPasswordHasher {
    calls: AtomicUsize,
}

impl StubPasswordHasher {
    /// Create a hasher with a zero call count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `hash` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for StubPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PasswordHash::new(format!(
            "stub-digest-{}",
            plaintext.chars().rev().collect::<String>()
        )))
    }
}
