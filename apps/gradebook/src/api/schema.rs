//! # GraphQL Schema
//!
//! The query and mutation roots: the externally invokable operation set.
//!
//! Every resolver takes the store lock for the duration of one repository
//! call and releases it before returning, so nested fields such as
//! `Student.course` acquire it afresh.

use super::SharedStore;
use super::types::{CourseObject, GradeObject, StudentObject};
use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use gradebook_core::{NewCourse, NewGrade, NewStudent, Repository};
use tracing::{debug, info};

/// The complete Gradebook schema.
pub type GradebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around `store`.
pub fn build_schema(store: SharedStore) -> GradebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// The schema in GraphQL SDL.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn shared_store<'a>(ctx: &Context<'a>) -> Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

// =============================================================================
// QUERY ROOT
// =============================================================================

#[derive(Debug, Default)]
pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// List of All Courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<CourseObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.courses().iter().map(CourseObject::from).collect())
    }

    /// List of All Students
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<StudentObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.students().iter().map(StudentObject::from).collect())
    }

    /// List of All Grades
    async fn grades(&self, ctx: &Context<'_>) -> Result<Vec<GradeObject>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.grades().iter().map(GradeObject::from).collect())
    }

    /// Particular Course
    async fn course(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<CourseObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = shared_store(ctx)?.read().await;
        let found = store.courses().get_by_id(id).map(CourseObject::from);
        debug!(id, found = found.is_some(), "course lookup");
        Ok(found)
    }

    /// Particular Student
    async fn student(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<StudentObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = shared_store(ctx)?.read().await;
        let found = store.students().get_by_id(id).map(StudentObject::from);
        debug!(id, found = found.is_some(), "student lookup");
        Ok(found)
    }

    /// Particular Grade
    async fn grade(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<GradeObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = shared_store(ctx)?.read().await;
        let found = store.grades().get_by_id(id).map(GradeObject::from);
        debug!(id, found = found.is_some(), "grade lookup");
        Ok(found)
    }
}

// =============================================================================
// MUTATION ROOT
// =============================================================================

#[derive(Debug, Default)]
pub struct MutationRoot;

/// Root Mutation
///
/// Delete mutations return the surviving collection rather than the
/// removed record.
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<CourseObject> {
        let mut store = shared_store(ctx)?.write().await;
        let course = store.courses_mut().add(NewCourse::new(name, description));
        info!(id = course.id, name = %course.name, "course added");
        Ok(course.into())
    }

    /// Add a student
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        lastname: String,
        course_id: i32,
    ) -> Result<StudentObject> {
        let mut store = shared_store(ctx)?.write().await;
        let student = store
            .students_mut()
            .add(NewStudent::new(name, lastname, course_id));
        info!(id = student.id, course_id, "student added");
        Ok(student.into())
    }

    /// Add a grade
    async fn add_grade(
        &self,
        ctx: &Context<'_>,
        course_id: i32,
        student_id: i32,
        grade: i32,
    ) -> Result<GradeObject> {
        let mut store = shared_store(ctx)?.write().await;
        let grade = store
            .grades_mut()
            .add(NewGrade::new(course_id, student_id, grade));
        info!(id = grade.id, course_id, student_id, "grade added");
        Ok(grade.into())
    }

    /// Delete a course, returning the remaining courses
    async fn delete_course(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<CourseObject>> {
        let mut store = shared_store(ctx)?.write().await;
        let before = store.courses().len();
        let survivors = store.courses_mut().remove_by_id(id);
        info!(id, removed = before - survivors.len(), "course delete");
        Ok(survivors.iter().map(CourseObject::from).collect())
    }

    /// Delete a student, returning the remaining students
    async fn delete_student(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<StudentObject>> {
        let mut store = shared_store(ctx)?.write().await;
        let before = store.students().len();
        let survivors = store.students_mut().remove_by_id(id);
        info!(id, removed = before - survivors.len(), "student delete");
        Ok(survivors.iter().map(StudentObject::from).collect())
    }

    /// Delete a grade, returning the remaining grades
    async fn delete_grade(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<GradeObject>> {
        let mut store = shared_store(ctx)?.write().await;
        let before = store.grades().len();
        let survivors = store.grades_mut().remove_by_id(id);
        info!(id, removed = before - survivors.len(), "grade delete");
        Ok(survivors.iter().map(GradeObject::from).collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
