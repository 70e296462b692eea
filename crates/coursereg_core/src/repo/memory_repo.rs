//! In-memory course gateway.
//!
//! Same contract as the SQLite gateway without a database file: ids start at
//! 1 and are never reused, rows stay ordered by id, and no call ever fails.
//! Single-threaded only.

use crate::model::course::{Course, CourseId};
use crate::repo::course_repo::{CourseRepository, RepoResult};
use std::cell::RefCell;

#[derive(Debug)]
struct MemoryState {
    rows: Vec<Course>,
    next_id: CourseId,
}

/// `Vec`-backed implementation of [`CourseRepository`].
#[derive(Debug)]
pub struct InMemoryCourseRepository {
    state: RefCell<MemoryState>,
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(MemoryState {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.state.borrow().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn insert_course(&self, course: &Course) -> RepoResult<usize> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.rows.push(Course {
            id,
            ..course.clone()
        });
        Ok(1)
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        Ok(self.state.borrow().rows.clone())
    }

    fn fetch_course(&self, id: CourseId) -> RepoResult<Option<Course>> {
        Ok(self
            .state
            .borrow()
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    fn update_course(&self, course: &Course) -> RepoResult<usize> {
        let mut state = self.state.borrow_mut();
        match state.rows.iter_mut().find(|row| row.id == course.id) {
            Some(row) => {
                row.code = course.code.clone();
                row.name = course.name.clone();
                row.credits = course.credits;
                row.instructor = course.instructor.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_course(&self, id: CourseId) -> RepoResult<usize> {
        let mut state = self.state.borrow_mut();
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        Ok(before - state.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryCourseRepository;
    use crate::model::course::Course;
    use crate::repo::course_repo::CourseRepository;

    #[test]
    fn ids_are_assigned_in_order_and_never_reused() {
        let repo = InMemoryCourseRepository::new();
        repo.insert_course(&Course::new("ABCD101", "A", 3, "X")).unwrap();
        repo.insert_course(&Course::new("ABCD102", "B", 3, "Y")).unwrap();
        assert_eq!(repo.delete_course(2).unwrap(), 1);
        repo.insert_course(&Course::new("ABCD103", "C", 3, "Z")).unwrap();

        let ids: Vec<_> = repo
            .list_courses()
            .unwrap()
            .into_iter()
            .map(|course| course.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn insert_ignores_caller_supplied_id() {
        let repo = InMemoryCourseRepository::new();
        repo.insert_course(&Course::with_id(42, "ABCD101", "A", 3, "X"))
            .unwrap();
        assert!(repo.fetch_course(42).unwrap().is_none());
        assert_eq!(repo.fetch_course(1).unwrap().unwrap().code, "ABCD101");
    }

    #[test]
    fn update_and_delete_of_missing_rows_affect_nothing() {
        let repo = InMemoryCourseRepository::new();
        repo.insert_course(&Course::new("ABCD101", "A", 3, "X")).unwrap();

        assert_eq!(
            repo.update_course(&Course::with_id(9, "WXYZ999", "B", 4, "Y"))
                .unwrap(),
            0
        );
        assert_eq!(repo.delete_course(9).unwrap(), 0);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.fetch_course(1).unwrap().unwrap().name, "A");
    }
}
