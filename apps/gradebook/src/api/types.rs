//! GraphQL object types.
//!
//! Thin wrappers over the core records. `Course` and `Grade` are plain
//! field-for-field copies; `Student` keeps its record and resolves the
//! derived `course` field against the live store on every read.

use super::SharedStore;
use async_graphql::{Context, Object, Result, SimpleObject};
use gradebook_core::{Course, Grade, Student};

/// Represent courses
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Course")]
pub struct CourseObject {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<&Course> for CourseObject {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            name: course.name.clone(),
            description: course.description.clone(),
        }
    }
}

impl From<Course> for CourseObject {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
        }
    }
}

/// Represent grades
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Grade")]
pub struct GradeObject {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub grade: i32,
}

impl From<&Grade> for GradeObject {
    fn from(grade: &Grade) -> Self {
        Self {
            id: grade.id,
            course_id: grade.course_id,
            student_id: grade.student_id,
            grade: grade.grade,
        }
    }
}

impl From<Grade> for GradeObject {
    fn from(grade: Grade) -> Self {
        Self::from(&grade)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentObject(pub Student);

impl From<&Student> for StudentObject {
    fn from(student: &Student) -> Self {
        Self(student.clone())
    }
}

impl From<Student> for StudentObject {
    fn from(student: Student) -> Self {
        Self(student)
    }
}

/// Represent students
#[Object(name = "Student")]
impl StudentObject {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn lastname(&self) -> &str {
        &self.0.lastname
    }

    async fn course_id(&self) -> i32 {
        self.0.course_id
    }

    /// The course referenced by `courseId`, or null when no such course exists.
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<CourseObject>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        Ok(store.course_of(&self.0).map(CourseObject::from))
    }
}
