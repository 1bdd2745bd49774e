//! Behavioural tests for course catalogue seeding against the in-memory store.
//!
//! Steps are synchronous and drive the async seeder through a runtime held
//! in the scenario state.

use std::sync::Arc;

use course_fixtures::FixtureCatalog;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use seeder::domain::{
    CourseCatalogSeeder, CourseSeedingError, DisplayName, EmailAddress, PasswordHash,
    SeedRunSummary, User, UserId, UserRole,
};
use seeder::test_support::{InMemoryCatalogueStore, StubPasswordHasher};
use tokio::runtime::Runtime;

/// Wrapper for the non-Clone runtime.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct SeedingWorld {
    runtime: Slot<RuntimeHandle>,
    store: Slot<Arc<InMemoryCatalogueStore>>,
    hasher: Slot<Arc<StubPasswordHasher>>,
    last_result: Slot<Result<SeedRunSummary, CourseSeedingError>>,
}

impl SeedingWorld {
    fn store(&self) -> Arc<InMemoryCatalogueStore> {
        self.store.get().expect("store should be set")
    }

    fn hasher(&self) -> Arc<StubPasswordHasher> {
        self.hasher.get().expect("hasher should be set")
    }

    fn run_seeder(&self) {
        let runtime = self.runtime.get().expect("runtime should be set");
        let store = self.store();
        let seeder = CourseCatalogSeeder::new(
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::clone(&store),
            self.hasher(),
        );
        let result = runtime.0.block_on(seeder.run(FixtureCatalog::builtin()));
        self.last_result.set(result);
    }

    fn result(&self) -> Result<SeedRunSummary, CourseSeedingError> {
        self.last_result.get().expect("seeder should have run")
    }
}

#[fixture]
fn world() -> SeedingWorld {
    SeedingWorld::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an empty catalogue store")]
fn an_empty_catalogue_store(world: &SeedingWorld) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("create runtime");
    world.runtime.set(RuntimeHandle(Arc::new(runtime)));
    world.store.set(Arc::new(InMemoryCatalogueStore::new()));
    world.hasher.set(Arc::new(StubPasswordHasher::new()));
}

#[given("an instructor already registered as {email}")]
fn an_instructor_already_registered_as(world: &SeedingWorld, email: String) {
    let email = EmailAddress::new(email.trim_matches('"')).expect("valid email");
    let user = User::new(
        UserId::random(),
        email,
        DisplayName::new("Saroj Kumar").expect("valid name"),
        UserRole::Instructor,
        "existing.png",
    );
    world
        .store()
        .insert_user(user, PasswordHash::new("pre-existing-digest"));
}

#[given("course creation fails for definition {position:usize}")]
fn course_creation_fails_for_definition(world: &SeedingWorld, position: usize) {
    world.store().fail_course_creation_at(position - 1);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the seeder runs")]
fn the_seeder_runs(world: &SeedingWorld) {
    world.run_seeder();
}

#[when("the seeder runs again")]
fn the_seeder_runs_again(world: &SeedingWorld) {
    world.run_seeder();
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the run succeeds")]
fn the_run_succeeds(world: &SeedingWorld) {
    if let Err(error) = world.result() {
        panic!("expected success, got: {error}");
    }
}

#[then("the store holds {count:usize} courses")]
fn the_store_holds_courses(world: &SeedingWorld, count: usize) {
    assert_eq!(world.store().course_count(), count);
}

#[then("the store holds {count:usize} lectures")]
fn the_store_holds_lectures(world: &SeedingWorld, count: usize) {
    assert_eq!(world.store().lecture_count(), count);
}

#[then("exactly one instructor has the email {email}")]
fn exactly_one_instructor_has_the_email(world: &SeedingWorld, email: String) {
    let email = EmailAddress::new(email.trim_matches('"')).expect("valid email");
    assert_eq!(world.store().users_with_email(&email), 1);
    assert_eq!(world.store().user_count(), 1);
}

#[then("every course lists its lectures in definition order")]
fn every_course_lists_its_lectures_in_definition_order(world: &SeedingWorld) {
    let store = world.store();
    let catalog = FixtureCatalog::builtin();
    for course in store.courses() {
        let definition = catalog
            .find_course(course.title.as_ref())
            .expect("course comes from the catalogue");
        let titles: Vec<String> = course
            .lecture_ids
            .iter()
            .map(|id| store.lecture(*id).expect("lecture exists").title.to_string())
            .collect();
        let expected: Vec<&str> = definition
            .lectures
            .iter()
            .map(|lecture| lecture.title())
            .collect();
        assert_eq!(titles, expected);
    }
}

#[then("the instructor was reused")]
fn the_instructor_was_reused(world: &SeedingWorld) {
    let summary = world.result().expect("run should succeed");
    assert!(!summary.instructor.created);
}

#[then("the credential was hashed once")]
fn the_credential_was_hashed_once(world: &SeedingWorld) {
    assert_eq!(world.hasher().calls(), 1);
}

#[then("the credential was hashed {count:usize} times")]
fn the_credential_was_hashed_times(world: &SeedingWorld, count: usize) {
    assert_eq!(world.hasher().calls(), count);
}

#[then("the run fails at the course {title}")]
fn the_run_fails_at_the_course(world: &SeedingWorld, title: String) {
    match world.result() {
        Err(CourseSeedingError::Definition {
            title: failed_title,
            ..
        }) => assert_eq!(failed_title, title.trim_matches('"')),
        other => panic!("expected a definition failure, got: {other:?}"),
    }
}

#[then("the failure reports {count:usize} courses already persisted")]
fn the_failure_reports_courses_already_persisted(world: &SeedingWorld, count: usize) {
    let error = world.result().expect_err("run should fail");
    let progress = error.progress().expect("failure carries progress");
    assert_eq!(progress.courses_created, count);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/course_seeding.feature",
    name = "First run populates an empty store"
)]
fn first_run_populates_an_empty_store(world: SeedingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/course_seeding.feature",
    name = "Rerunning replaces the catalogue without duplicating the instructor"
)]
fn rerunning_replaces_the_catalogue(world: SeedingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/course_seeding.feature",
    name = "An existing instructor is reused"
)]
fn an_existing_instructor_is_reused(world: SeedingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/course_seeding.feature",
    name = "A failing course creation aborts the remaining definitions"
)]
fn a_failing_course_creation_aborts_the_remaining_definitions(world: SeedingWorld) {
    let _ = world;
}
