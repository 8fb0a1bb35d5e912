//! # Records
//!
//! The three entity kinds held by the store, plus the drafts used to
//! create them. A draft carries every field except `id`, which the owning
//! collection assigns at insertion time.
//!
//! Field names serialize in camelCase so the fixture files and the GraphQL
//! surface share one vocabulary (`courseId`, `studentId`).

use serde::{Deserialize, Serialize};

/// Integer identifier of a record.
///
/// `i32` matches the range of the GraphQL `Int` scalar.
pub type RecordId = i32;

// =============================================================================
// RECORD TRAIT
// =============================================================================

/// A record that lives in a [`Collection`](crate::Collection).
pub trait Record: Clone {
    /// Fields supplied by the caller when creating a record.
    type Draft;

    /// The record's identifier.
    fn id(&self) -> RecordId;

    /// Build a record from a draft and the id chosen by the collection.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
}

// =============================================================================
// COURSE
// =============================================================================

/// A course students can enrol in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

/// Fields of a course to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
}

impl NewCourse {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Record for Course {
    type Draft = NewCourse;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewCourse) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }
}

// =============================================================================
// STUDENT
// =============================================================================

/// A student, enrolled in one course.
///
/// `course_id` is expected to reference a [`Course`] but nothing enforces it.
/// Use [`relations::course_of`](crate::relations::course_of) to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub lastname: String,
    pub course_id: RecordId,
}

/// Fields of a student to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub lastname: String,
    pub course_id: RecordId,
}

impl NewStudent {
    #[must_use]
    pub fn new(name: impl Into<String>, lastname: impl Into<String>, course_id: RecordId) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            course_id,
        }
    }
}

impl Record for Student {
    type Draft = NewStudent;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewStudent) -> Self {
        Self {
            id,
            name: draft.name,
            lastname: draft.lastname,
            course_id: draft.course_id,
        }
    }
}

// =============================================================================
// GRADE
// =============================================================================

/// A score a student obtained in a course.
///
/// Both references are plain data and are never resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: RecordId,
    pub course_id: RecordId,
    pub student_id: RecordId,
    pub grade: i32,
}

/// Fields of a grade to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGrade {
    pub course_id: RecordId,
    pub student_id: RecordId,
    pub grade: i32,
}

impl NewGrade {
    #[must_use]
    pub fn new(course_id: RecordId, student_id: RecordId, grade: i32) -> Self {
        Self {
            course_id,
            student_id,
            grade,
        }
    }
}

impl Record for Grade {
    type Draft = NewGrade;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewGrade) -> Self {
        Self {
            id,
            course_id: draft.course_id,
            student_id: draft.student_id,
            grade: draft.grade,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
