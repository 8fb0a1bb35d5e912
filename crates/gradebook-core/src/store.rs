//! # Store
//!
//! The single owner of the three collections.
//!
//! A `Store` is an ordinary value: the server wraps one in a lock and hands
//! it to the GraphQL schema, tests build as many isolated stores as they need.

use crate::collection::{Collection, IdStrategy, Repository};
use crate::error::FixtureError;
use crate::fixtures::Fixtures;
use crate::record::{Course, Grade, Student};
use crate::relations;
use serde::{Deserialize, Serialize};

/// Record counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub courses: usize,
    pub students: usize,
    pub grades: usize,
}

/// Courses, students and grades held in process memory.
#[derive(Debug, Clone, Default)]
pub struct Store {
    courses: Collection<Course>,
    students: Collection<Student>,
    grades: Collection<Grade>,
}

impl Store {
    /// Create a store with three empty collections.
    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            courses: Collection::new(strategy),
            students: Collection::new(strategy),
            grades: Collection::new(strategy),
        }
    }

    /// Create a store seeded with `fixtures`.
    #[must_use]
    pub fn from_fixtures(fixtures: Fixtures, strategy: IdStrategy) -> Self {
        Self {
            courses: Collection::from_records(fixtures.courses, strategy),
            students: Collection::from_records(fixtures.students, strategy),
            grades: Collection::from_records(fixtures.grades, strategy),
        }
    }

    /// Create a store seeded with the bundled dataset.
    pub fn seeded(strategy: IdStrategy) -> Result<Self, FixtureError> {
        Ok(Self::from_fixtures(Fixtures::embedded()?, strategy))
    }

    pub fn courses(&self) -> &Collection<Course> {
        &self.courses
    }

    pub fn courses_mut(&mut self) -> &mut Collection<Course> {
        &mut self.courses
    }

    pub fn students(&self) -> &Collection<Student> {
        &self.students
    }

    pub fn students_mut(&mut self) -> &mut Collection<Student> {
        &mut self.students
    }

    pub fn grades(&self) -> &Collection<Grade> {
        &self.grades
    }

    pub fn grades_mut(&mut self) -> &mut Collection<Grade> {
        &mut self.grades
    }

    /// The course `student` references, resolved against the current courses.
    pub fn course_of(&self, student: &Student) -> Option<&Course> {
        relations::course_of(student, self.courses.list_all())
    }

    /// Current record counts.
    #[must_use]
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            courses: self.courses.len(),
            students: self.students.len(),
            grades: self.grades.len(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::{NewCourse, NewGrade, NewStudent};

    #[test]
    fn new_store_is_empty() {
        let store = Store::new(IdStrategy::Monotonic);
        assert_eq!(store.counts(), StoreCounts::default());
    }

    #[test]
    fn seeded_store_matches_embedded_fixtures() {
        let fixtures = Fixtures::embedded().unwrap();
        let store = Store::seeded(IdStrategy::Monotonic).unwrap();

        assert_eq!(store.courses().list_all(), fixtures.courses.as_slice());
        assert_eq!(store.students().list_all(), fixtures.students.as_slice());
        assert_eq!(store.grades().list_all(), fixtures.grades.as_slice());
    }

    #[test]
    fn every_collection_uses_the_store_strategy() {
        let store = Store::seeded(IdStrategy::Legacy).unwrap();

        assert_eq!(store.courses().strategy(), IdStrategy::Legacy);
        assert_eq!(store.students().strategy(), IdStrategy::Legacy);
        assert_eq!(store.grades().strategy(), IdStrategy::Legacy);
    }

    #[test]
    fn seeded_store_continues_numbering_after_fixtures() {
        let mut store = Store::seeded(IdStrategy::Monotonic).unwrap();
        let highest = store.grades().iter().map(|g| g.id).max().unwrap();

        let grade = store.grades_mut().add(NewGrade::new(1, 1, 5));

        assert_eq!(grade.id, highest + 1);
    }

    #[test]
    fn student_course_follows_course_lifecycle() {
        let mut store = Store::new(IdStrategy::Monotonic);
        let algebra = store.courses_mut().add(NewCourse::new("Algebra", "Intro"));
        let ana = store
            .students_mut()
            .add(NewStudent::new("Ana", "Li", algebra.id));

        assert_eq!(store.course_of(&ana), Some(&algebra));

        store.courses_mut().remove_by_id(algebra.id);

        assert!(store.course_of(&ana).is_none());
        assert_eq!(store.students().get_by_id(ana.id), Some(&ana));
    }

    #[test]
    fn course_added_after_student_resolves() {
        let mut store = Store::new(IdStrategy::Monotonic);
        let ana = store.students_mut().add(NewStudent::new("Ana", "Li", 1));
        assert!(store.course_of(&ana).is_none());

        store.courses_mut().add(NewCourse::new("Algebra", "Intro"));

        assert_eq!(store.course_of(&ana).map(|c| c.name.as_str()), Some("Algebra"));
    }

    #[test]
    fn collections_number_independently() {
        let mut store = Store::new(IdStrategy::Legacy);
        let course = store.courses_mut().add(NewCourse::new("Algebra", "Intro"));
        let student = store.students_mut().add(NewStudent::new("Ana", "Li", 1));
        let grade = store.grades_mut().add(NewGrade::new(1, 1, 9));

        assert_eq!((course.id, student.id, grade.id), (1, 1, 1));
        assert_eq!(
            store.counts(),
            StoreCounts {
                courses: 1,
                students: 1,
                grades: 1,
            }
        );
    }
}
