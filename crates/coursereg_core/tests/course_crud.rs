use coursereg_core::{
    Course, CourseRepository, CourseService, CourseValidationError, DatabaseConfig,
    InMemoryCourseRepository, RepoError, ServiceError, SqliteCourseRepository,
};
use tempfile::TempDir;

fn sqlite_repo() -> (TempDir, SqliteCourseRepository) {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::for_path(dir.path().join("courses.db"));
    (dir, SqliteCourseRepository::new(config))
}

fn intro() -> Course {
    Course::new("ABCD101", "Intro", 3, "Lee")
}

fn analytics() -> Course {
    Course::new("ITLDA601", "Data Analytics", 15, "Dr. Mokoena")
}

#[test]
fn insert_then_list_assigns_ids_in_order() {
    let (_dir, repo) = sqlite_repo();

    assert_eq!(repo.insert_course(&intro()).unwrap(), 1);
    assert_eq!(repo.insert_course(&analytics()).unwrap(), 1);

    let courses = repo.list_courses().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0], Course::with_id(1, "ABCD101", "Intro", 3, "Lee"));
    assert_eq!(courses[1].id, 2);
    assert!(courses[1].same_fields(&analytics()));
}

#[test]
fn insert_ignores_caller_supplied_id() {
    let (_dir, repo) = sqlite_repo();

    repo.insert_course(&Course::with_id(99, "ABCD101", "Intro", 3, "Lee"))
        .unwrap();

    assert!(repo.fetch_course(99).unwrap().is_none());
    assert_eq!(repo.list_courses().unwrap()[0].id, 1);
}

#[test]
fn fetch_returns_row_or_none() {
    let (_dir, repo) = sqlite_repo();
    repo.insert_course(&intro()).unwrap();

    let fetched = repo.fetch_course(1).unwrap().unwrap();
    assert!(fetched.same_fields(&intro()));
    assert!(repo.fetch_course(2).unwrap().is_none());
}

#[test]
fn update_overwrites_only_the_matching_row() {
    let (_dir, repo) = sqlite_repo();
    repo.insert_course(&intro()).unwrap();
    repo.insert_course(&analytics()).unwrap();

    let changed = Course::with_id(1, "WXYZ202", "Intro II", 4, "Park");
    assert_eq!(repo.update_course(&changed).unwrap(), 1);

    let courses = repo.list_courses().unwrap();
    assert_eq!(courses[0], changed);
    assert!(courses[1].same_fields(&analytics()));
}

#[test]
fn update_and_delete_of_missing_rows_affect_nothing() {
    let (_dir, repo) = sqlite_repo();
    repo.insert_course(&intro()).unwrap();
    let before = repo.list_courses().unwrap();

    let ghost = Course::with_id(42, "WXYZ202", "Ghost", 4, "Nobody");
    assert_eq!(repo.update_course(&ghost).unwrap(), 0);
    assert_eq!(repo.delete_course(42).unwrap(), 0);

    assert_eq!(repo.list_courses().unwrap(), before);
}

#[test]
fn delete_removes_row_and_ids_are_not_reused() {
    let (_dir, repo) = sqlite_repo();
    repo.insert_course(&intro()).unwrap();
    repo.insert_course(&analytics()).unwrap();

    assert_eq!(repo.delete_course(2).unwrap(), 1);
    repo.insert_course(&analytics()).unwrap();

    let ids: Vec<_> = repo
        .list_courses()
        .unwrap()
        .into_iter()
        .map(|course| course.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn unreachable_store_is_a_db_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let repo = SqliteCourseRepository::new(DatabaseConfig::for_path(dir.path()));

    assert!(matches!(repo.list_courses(), Err(RepoError::Db(_))));
    assert!(matches!(repo.insert_course(&intro()), Err(RepoError::Db(_))));
}

#[test]
fn blank_url_is_a_config_error() {
    let repo = SqliteCourseRepository::new(DatabaseConfig::new(" ", "user", "secret"));
    assert!(matches!(repo.list_courses(), Err(RepoError::Config(_))));
}

#[test]
fn service_add_then_list_round_trips_fields() {
    let (_dir, repo) = sqlite_repo();
    let service = CourseService::new(repo);

    service.add(&intro()).unwrap();
    let before = service.list().unwrap().len();
    service.add(&analytics()).unwrap();

    let courses = service.list().unwrap();
    assert_eq!(courses.len(), before + 1);
    let stored = courses
        .iter()
        .find(|course| course.code == "ITLDA601")
        .expect("added course should be listed");
    assert!(stored.same_fields(&analytics()));
    assert!(stored.is_persisted());
}

#[test]
fn first_course_in_empty_store_gets_id_one() {
    let expected = vec![Course::with_id(1, "ABCD101", "Intro", 3, "Lee")];

    let (_dir, repo) = sqlite_repo();
    let sqlite_service = CourseService::new(repo);
    sqlite_service.add(&intro()).unwrap();
    assert_eq!(sqlite_service.list().unwrap(), expected);

    let memory_service = CourseService::new(InMemoryCourseRepository::new());
    memory_service.add(&intro()).unwrap();
    assert_eq!(memory_service.list().unwrap(), expected);
}

#[test]
fn invalid_code_leaves_store_empty() {
    let (_dir, repo) = sqlite_repo();
    let service = CourseService::new(repo);

    let err = service.add(&Course::new("cs1", "Intro", 3, "Lee")).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(CourseValidationError::InvalidCode(_))
    ));
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn out_of_range_credits_are_rejected_for_add_and_update() {
    let service = CourseService::new(InMemoryCourseRepository::new());
    service.add(&intro()).unwrap();

    for credits in [0, 36, -5] {
        let add_err = service
            .add(&Course::new("ABCD101", "Intro", credits, "Lee"))
            .unwrap_err();
        assert!(add_err.is_validation());

        let update_err = service
            .update(&Course::with_id(1, "ABCD101", "Intro", credits, "Lee"))
            .unwrap_err();
        assert!(update_err.is_validation());
    }
    assert_eq!(
        service.list().unwrap(),
        vec![Course::with_id(1, "ABCD101", "Intro", 3, "Lee")]
    );
}

#[test]
fn update_without_id_fails_and_store_is_untouched() {
    let (_dir, repo) = sqlite_repo();
    let service = CourseService::new(repo);
    service.add(&intro()).unwrap();
    let before = service.list().unwrap();

    let err = service
        .update(&Course::new("WXYZ202", "Other", 4, "Park"))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(CourseValidationError::MissingId)
    ));
    assert_eq!(service.list().unwrap(), before);
}

#[test]
fn service_update_changes_exactly_one_row() {
    let (_dir, repo) = sqlite_repo();
    let service = CourseService::new(repo);
    service.add(&intro()).unwrap();
    service.add(&analytics()).unwrap();

    let changed = Course::with_id(2, "ITLDA602", "Data Analytics II", 20, "Dr. Mokoena");
    assert_eq!(service.update(&changed).unwrap(), 1);

    let courses = service.list().unwrap();
    assert!(courses[0].same_fields(&intro()));
    assert_eq!(courses[1], changed);

    let missing = Course::with_id(9, "ITLDA603", "Nowhere", 5, "Nobody");
    assert_eq!(service.update(&missing).unwrap(), 0);
}

#[test]
fn service_delete_semantics() {
    let (_dir, repo) = sqlite_repo();
    let service = CourseService::new(repo);
    service.add(&intro()).unwrap();

    assert_eq!(service.delete(5).unwrap(), 0);
    assert_eq!(service.list().unwrap().len(), 1);

    let err = service.delete(0).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(CourseValidationError::InvalidDeleteId(0))
    ));

    assert_eq!(service.delete(1).unwrap(), 1);
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn duplicate_codes_are_accepted() {
    let (_dir, repo) = sqlite_repo();
    let service = CourseService::new(repo);

    service.add(&intro()).unwrap();
    service.add(&intro()).unwrap();

    assert_eq!(service.list().unwrap().len(), 2);
}

#[test]
fn service_surfaces_store_failures_as_persistence_errors() {
    let dir = tempfile::tempdir().unwrap();
    let service = CourseService::new(SqliteCourseRepository::new(DatabaseConfig::for_path(
        dir.path(),
    )));

    let err = service.add(&intro()).unwrap_err();
    assert!(err.is_persistence());
    assert!(service.list().unwrap_err().is_persistence());
}
