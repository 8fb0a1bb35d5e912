//! # Relations
//!
//! Lazy resolution of the student → course reference.
//!
//! References are never enforced on write. They are resolved at read time
//! against whatever the course collection holds at that moment, so a student
//! whose course was deleted simply resolves to `None`.

use crate::record::{Course, Student};

/// The course a student is enrolled in, if it still exists.
///
/// Returns the first course whose id equals `student.course_id`.
pub fn course_of<'a>(student: &Student, courses: &'a [Course]) -> Option<&'a Course> {
    courses.iter().find(|course| course.id == student.course_id)
}

/// Students whose `course_id` matches no course.
pub fn dangling_students<'a>(students: &'a [Student], courses: &[Course]) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|student| course_of(student, courses).is_none())
        .collect()
}
