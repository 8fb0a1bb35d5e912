//! # Fixtures
//!
//! The static dataset a store is seeded with at startup.
//!
//! Three JSON documents, one per collection, each an array of records with
//! camelCase field names. The default dataset is compiled into the crate;
//! a directory holding the same three files can replace it.

use crate::error::FixtureError;
use crate::record::{Course, Grade, Student};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the course fixture.
pub const COURSES_FILE: &str = "courses.json";
/// File name of the student fixture.
pub const STUDENTS_FILE: &str = "students.json";
/// File name of the grade fixture.
pub const GRADES_FILE: &str = "grades.json";

const EMBEDDED_COURSES: &str = include_str!("../fixtures/courses.json");
const EMBEDDED_STUDENTS: &str = include_str!("../fixtures/students.json");
const EMBEDDED_GRADES: &str = include_str!("../fixtures/grades.json");

/// A parsed fixture dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub grades: Vec<Grade>,
}

impl Fixtures {
    /// The dataset bundled with the crate.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_COURSES, EMBEDDED_STUDENTS, EMBEDDED_GRADES)
    }

    /// Parse the three fixture documents.
    pub fn from_json(courses: &str, students: &str, grades: &str) -> Result<Self, FixtureError> {
        Ok(Self {
            courses: parse("courses", courses)?,
            students: parse("students", students)?,
            grades: parse("grades", grades)?,
        })
    }

    /// Load `courses.json`, `students.json` and `grades.json` from `dir`.
    ///
    /// All three files must exist.
    pub fn load_dir(dir: &Path) -> Result<Self, FixtureError> {
        let courses = read(dir, COURSES_FILE)?;
        let students = read(dir, STUDENTS_FILE)?;
        let grades = read(dir, GRADES_FILE)?;
        Self::from_json(&courses, &students, &grades)
    }
}

fn read(dir: &Path, file: &str) -> Result<String, FixtureError> {
    let path = dir.join(file);
    std::fs::read_to_string(&path).map_err(|source| FixtureError::Io { path, source })
}

fn parse<T: DeserializeOwned>(collection: &'static str, text: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(text).map_err(|source| FixtureError::Json { collection, source })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::relations::dangling_students;

    #[test]
    fn embedded_fixtures_parse() {
        let fixtures = Fixtures::embedded().unwrap();

        assert!(!fixtures.courses.is_empty());
        assert!(!fixtures.students.is_empty());
        assert!(!fixtures.grades.is_empty());
    }

    #[test]
    fn embedded_students_reference_existing_courses() {
        let fixtures = Fixtures::embedded().unwrap();
        assert!(dangling_students(&fixtures.students, &fixtures.courses).is_empty());
    }

    #[test]
    fn from_json_reports_failing_collection() {
        let err = Fixtures::from_json("[]", "{not json", "[]").unwrap_err();
        assert!(matches!(err, FixtureError::Json { collection: "students", .. }));
    }

    #[test]
    fn from_json_rejects_missing_field() {
        let err = Fixtures::from_json(r#"[{"id": 1, "name": "Algebra"}]"#, "[]", "[]").unwrap_err();
        assert!(matches!(err, FixtureError::Json { collection: "courses", .. }));
    }

    #[test]
    fn load_dir_reads_all_three_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(COURSES_FILE),
            r#"[{"id": 3, "name": "Algebra", "description": "Intro"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(STUDENTS_FILE),
            r#"[{"id": 1, "name": "Ana", "lastname": "Li", "courseId": 3}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join(GRADES_FILE), "[]").unwrap();

        let fixtures = Fixtures::load_dir(dir.path()).unwrap();

        assert_eq!(fixtures.courses.len(), 1);
        assert_eq!(fixtures.students[0].course_id, 3);
        assert!(fixtures.grades.is_empty());
    }

    #[test]
    fn load_dir_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(COURSES_FILE), "[]").unwrap();

        let err = Fixtures::load_dir(dir.path()).unwrap_err();

        match err {
            FixtureError::Io { path, .. } => assert!(path.ends_with(STUDENTS_FILE)),
            FixtureError::Json { .. } => unreachable!("expected an io error"),
        }
    }
}
