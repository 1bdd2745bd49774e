//! Tests for the course catalogue seeder.

use std::collections::HashSet;
use std::sync::Arc;

use course_fixtures::{
    CourseDefinition, CourseLevelSeed, FixtureCatalog, InstructorDefinition, LectureDefinition,
};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockCourseRepository, MockLectureRepository};
use crate::domain::{Course, CourseId, Lecture};
use crate::test_support::{InMemoryCatalogueStore, StubPasswordHasher};

type StoreSeeder = CourseCatalogSeeder<
    InMemoryCatalogueStore,
    InMemoryCatalogueStore,
    InMemoryCatalogueStore,
    StubPasswordHasher,
>;

struct Harness {
    store: Arc<InMemoryCatalogueStore>,
    hasher: Arc<StubPasswordHasher>,
    seeder: StoreSeeder,
}

#[fixture]
fn harness() -> Harness {
    let store = Arc::new(InMemoryCatalogueStore::new());
    let hasher = Arc::new(StubPasswordHasher::new());
    let seeder = CourseCatalogSeeder::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&hasher),
    );
    Harness {
        store,
        hasher,
        seeder,
    }
}

const INSTRUCTOR: InstructorDefinition =
    InstructorDefinition::new("Test Instructor", "mentor@example.com", "secret", "me.png");

const fn definition(
    title: &'static str,
    price_cents: u32,
    lectures: &'static [LectureDefinition],
) -> CourseDefinition {
    CourseDefinition {
        title,
        subtitle: "subtitle",
        description: "description",
        category: "Testing",
        level: CourseLevelSeed::Medium,
        price_cents,
        thumbnail_url: "thumb.png",
        lectures,
    }
}

const TWO_LECTURES: &[LectureDefinition] = &[
    LectureDefinition::new("Part one", true),
    LectureDefinition::new("Part two", false),
];

const THREE_LECTURES: &[LectureDefinition] = &[
    LectureDefinition::new("Alpha", true),
    LectureDefinition::new("Beta", false),
    LectureDefinition::new("Gamma", false),
];

#[rstest]
#[tokio::test]
async fn builtin_catalogue_seeds_twelve_courses_and_sixty_two_lectures(harness: Harness) {
    let summary = harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect("seeding succeeds");

    assert_eq!(summary.course_count, 12);
    assert_eq!(summary.lecture_count, 62);
    assert_eq!(harness.store.course_count(), 12);
    assert_eq!(harness.store.lecture_count(), 62);
    assert_eq!(harness.store.user_count(), 1);
    assert!(summary.instructor.created);
    assert_eq!(summary.instructor.email.as_str(), "saroj@gmail.com");
}

#[rstest]
#[tokio::test]
async fn summary_lists_titles_in_catalogue_order(harness: Harness) {
    let catalog = FixtureCatalog::builtin();
    let summary = harness.seeder.run(catalog).await.expect("seeding succeeds");

    let expected: Vec<String> = catalog
        .courses()
        .iter()
        .map(|course| course.title.to_owned())
        .collect();
    assert_eq!(summary.course_titles, expected);
}

#[rstest]
#[tokio::test]
async fn stored_lecture_ids_follow_definition_order(harness: Harness) {
    let catalog = FixtureCatalog::builtin();
    harness.seeder.run(catalog).await.expect("seeding succeeds");

    for course in harness.store.courses() {
        let definition = catalog
            .find_course(course.title.as_ref())
            .expect("stored course comes from the catalogue");
        let stored_titles: Vec<String> = course
            .lecture_ids
            .iter()
            .map(|id| {
                harness
                    .store
                    .lecture(*id)
                    .expect("lecture exists")
                    .title
                    .to_string()
            })
            .collect();
        let expected: Vec<&str> = definition.lectures.iter().map(|l| l.title()).collect();
        assert_eq!(stored_titles, expected, "{}", definition.title);
    }
}

#[rstest]
#[tokio::test]
async fn every_course_references_lectures_from_this_run(harness: Harness) {
    harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect("seeding succeeds");

    let lecture_ids: HashSet<LectureId> = harness
        .store
        .lectures()
        .into_iter()
        .map(|lecture| lecture.id)
        .collect();
    let creator_ids: HashSet<_> = harness
        .store
        .courses()
        .into_iter()
        .map(|course| {
            assert!(
                course.lecture_ids.iter().all(|id| lecture_ids.contains(id)),
                "{} references a missing lecture",
                course.title
            );
            course.creator_id
        })
        .collect();
    assert_eq!(creator_ids.len(), 1);
    assert_eq!(harness.store.orphaned_lecture_count(), 0);
}

#[rstest]
#[tokio::test]
async fn rerun_replaces_catalogue_and_reuses_instructor(harness: Harness) {
    let first = harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect("first run succeeds");
    let second = harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect("second run succeeds");

    assert_eq!(harness.store.course_count(), 12);
    assert_eq!(harness.store.lecture_count(), 62);
    assert_eq!(harness.store.user_count(), 1);
    assert_eq!(second.removed_courses, 12);
    assert_eq!(second.removed_lectures, 62);
    assert!(!second.instructor.created);
    assert_eq!(first.instructor.id, second.instructor.id);
    assert_eq!(harness.hasher.calls(), 1);
}

#[rstest]
#[tokio::test]
async fn failure_at_definition_keeps_earlier_courses_only(harness: Harness) {
    harness.store.fail_course_creation_at(3);

    let error = harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect_err("injected failure aborts the run");

    let catalog = FixtureCatalog::builtin();
    let failing = &catalog.courses()[3];
    match &error {
        CourseSeedingError::Definition {
            index,
            title,
            step,
            progress,
            ..
        } => {
            assert_eq!(*index, 3);
            assert_eq!(title, failing.title);
            assert_eq!(*step, SeedStep::CreateCourse);
            assert_eq!(progress.courses_created, 3);
            assert_eq!(progress.lectures_created, 5 + 5 + 7 + 5);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(error.kind(), FailureKind::Unknown);

    let stored: Vec<String> = harness
        .store
        .courses()
        .iter()
        .map(|course| course.title.to_string())
        .collect();
    let expected: Vec<&str> = catalog.courses()[..3].iter().map(|c| c.title).collect();
    assert_eq!(stored, expected);
    assert_eq!(harness.store.orphaned_lecture_count(), failing.lectures.len());
}

#[rstest]
#[tokio::test]
async fn invalid_catalogue_is_rejected_before_reset(harness: Harness) {
    harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect("initial seeding succeeds");

    const DUPLICATES: &[CourseDefinition] = &[
        definition("Same", 100, TWO_LECTURES),
        definition("Same", 200, THREE_LECTURES),
    ];
    let catalog = FixtureCatalog::new(INSTRUCTOR, DUPLICATES);
    let error = harness
        .seeder
        .run(&catalog)
        .await
        .expect_err("duplicate titles are rejected");

    assert!(matches!(error, CourseSeedingError::Catalog(_)));
    assert_eq!(error.kind(), FailureKind::Validation);
    assert_eq!(harness.store.course_count(), 12);
}

#[rstest]
#[tokio::test]
async fn unstorable_price_is_a_validation_failure(harness: Harness) {
    const COURSES: &[CourseDefinition] = &[
        definition("Affordable", 1_000, TWO_LECTURES),
        definition("Priceless", u32::MAX, THREE_LECTURES),
    ];
    let catalog = FixtureCatalog::new(INSTRUCTOR, COURSES);

    let error = harness
        .seeder
        .run(&catalog)
        .await
        .expect_err("price beyond storage fails");

    assert!(matches!(
        error,
        CourseSeedingError::Definition {
            index: 1,
            step: SeedStep::Prepare,
            source: DefinitionFailure::Validation(CourseValidationError::PriceOutOfRange { .. }),
            ..
        }
    ));
    assert_eq!(error.kind(), FailureKind::Validation);
    assert_eq!(harness.store.course_count(), 1);
    assert_eq!(harness.store.lecture_count(), 2);
}

#[rstest]
#[tokio::test]
async fn unreachable_store_fails_during_reset(harness: Harness) {
    harness.store.set_unavailable(true);

    let error = harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect_err("offline store fails");

    assert!(matches!(
        error,
        CourseSeedingError::Reset {
            collection: SeedCollection::Courses,
            ..
        }
    ));
    assert_eq!(error.kind(), FailureKind::Connection);
    assert_eq!(error.progress(), None);
}

#[rstest]
#[tokio::test]
async fn instructor_race_aborts_before_any_course(harness: Harness) {
    harness.store.reject_next_user_as_duplicate();

    let error = harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect_err("race aborts the run");

    assert_eq!(error.kind(), FailureKind::UniquenessViolation);
    assert_eq!(harness.store.course_count(), 0);
    assert_eq!(harness.store.lecture_count(), 0);
}

#[tokio::test]
async fn courses_are_cleared_before_lectures() {
    let mut sequence = mockall::Sequence::new();
    let mut courses = MockCourseRepository::new();
    let mut lectures = MockLectureRepository::new();
    courses
        .expect_delete_all()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Ok(4));
    lectures
        .expect_delete_all()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Err(SeedPersistenceError::query("lecture reset failed")));
    courses.expect_create().never();
    lectures.expect_insert_many().never();

    let seeder = CourseCatalogSeeder::new(
        Arc::new(InMemoryCatalogueStore::new()),
        Arc::new(lectures),
        Arc::new(courses),
        Arc::new(StubPasswordHasher::new()),
    );
    let error = seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect_err("lecture reset fails");

    assert!(matches!(
        error,
        CourseSeedingError::Reset {
            collection: SeedCollection::Lectures,
            ..
        }
    ));
}

#[tokio::test]
async fn short_lecture_batch_is_reported_as_mismatch() {
    const COURSES: &[CourseDefinition] = &[definition("Short", 500, THREE_LECTURES)];
    let catalog = FixtureCatalog::new(INSTRUCTOR, COURSES);

    let mut courses = MockCourseRepository::new();
    courses.expect_delete_all().returning(|| Ok(0));
    courses.expect_create().never();
    let mut lectures = MockLectureRepository::new();
    lectures.expect_delete_all().returning(|| Ok(0));
    lectures.expect_insert_many().times(1).returning(|drafts| {
        Ok(drafts
            .into_iter()
            .take(2)
            .map(|draft| Lecture {
                id: LectureId::random(),
                title: draft.title,
                is_preview_free: draft.is_preview_free,
            })
            .collect())
    });

    let seeder = CourseCatalogSeeder::new(
        Arc::new(InMemoryCatalogueStore::new()),
        Arc::new(lectures),
        Arc::new(courses),
        Arc::new(StubPasswordHasher::new()),
    );
    let error = seeder.run(&catalog).await.expect_err("mismatch fails");

    assert!(matches!(
        error,
        CourseSeedingError::Definition {
            step: SeedStep::CreateLectures,
            source: DefinitionFailure::LectureCountMismatch {
                expected: 3,
                actual: 2
            },
            progress: SeedProgress {
                courses_created: 0,
                lectures_created: 2
            },
            ..
        }
    ));
}

#[tokio::test]
async fn course_receives_lecture_ids_and_creator() {
    const COURSES: &[CourseDefinition] = &[definition("Linked", 2_500, THREE_LECTURES)];
    let catalog = FixtureCatalog::new(INSTRUCTOR, COURSES);
    let issued = vec![LectureId::random(), LectureId::random(), LectureId::random()];

    let users = Arc::new(InMemoryCatalogueStore::new());
    let mut lectures = MockLectureRepository::new();
    lectures.expect_delete_all().returning(|| Ok(0));
    let ids = issued.clone();
    lectures.expect_insert_many().times(1).returning(move |drafts| {
        Ok(drafts
            .into_iter()
            .zip(ids.iter().copied())
            .map(|(draft, id)| Lecture {
                id,
                title: draft.title,
                is_preview_free: draft.is_preview_free,
            })
            .collect())
    });
    let mut courses = MockCourseRepository::new();
    courses.expect_delete_all().returning(|| Ok(0));
    let expected_ids = issued.clone();
    courses
        .expect_create()
        .withf(move |course: &NewCourse| {
            course.lecture_ids == expected_ids
                && course.level == CourseLevel::Medium
                && course.price.cents() == 2_500
                && course.is_published
        })
        .times(1)
        .returning(|course: NewCourse| -> Result<Course, SeedPersistenceError> {
            Ok(course.into_course(CourseId::random()))
        });

    let seeder = CourseCatalogSeeder::new(
        Arc::clone(&users),
        Arc::new(lectures),
        Arc::new(courses),
        Arc::new(StubPasswordHasher::new()),
    );
    let summary = seeder.run(&catalog).await.expect("seeding succeeds");

    assert_eq!(summary.course_titles, vec!["Linked".to_owned()]);
    assert_eq!(summary.lecture_count, 3);
    assert_eq!(users.user_count(), 1);
}

#[rstest]
#[tokio::test]
async fn summary_renders_counts_and_titles(harness: Harness) {
    let summary = harness
        .seeder
        .run(FixtureCatalog::builtin())
        .await
        .expect("seeding succeeds");

    let rendered = summary.to_string();
    assert!(rendered.contains("Seeded 12 courses with 62 lectures"));
    assert!(rendered.contains("Saroj Kumar <saroj@gmail.com> (created"));
    assert!(rendered.contains(" 1. Complete Python Programming Course"));
}
