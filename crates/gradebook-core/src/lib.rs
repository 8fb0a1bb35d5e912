//! # Gradebook Core
//!
//! The in-memory record engine behind the Gradebook GraphQL server.
//!
//! This crate holds three ordered collections (courses, students, grades)
//! and every operation that reads or mutates them. It is synchronous and
//! knows nothing about HTTP or GraphQL; the app crate wraps a [`Store`]
//! in a lock and exposes it through its schema.
//!
//! ## Layout
//!
//! - [`record`]: the three record types and their creation drafts
//! - [`collection`]: the [`Repository`] trait and its [`Collection`] implementation
//! - [`store`]: the [`Store`] owning all three collections
//! - [`relations`]: lazy student → course resolution
//! - [`fixtures`]: the static dataset loaded at startup

pub mod collection;
pub mod error;
pub mod fixtures;
pub mod record;
pub mod relations;
pub mod store;

pub use collection::{Collection, IdStrategy, Repository};
pub use error::FixtureError;
pub use fixtures::Fixtures;
pub use record::{Course, Grade, NewCourse, NewGrade, NewStudent, Record, RecordId, Student};
pub use store::{Store, StoreCounts};
