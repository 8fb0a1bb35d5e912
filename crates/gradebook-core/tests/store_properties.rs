//! Property tests for the record store.
//!
//! Exercise add/get/delete over arbitrary operation sequences.

#![allow(clippy::unwrap_used, clippy::panic)]

use gradebook_core::{Course, IdStrategy, NewCourse, NewStudent, Repository, Store};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Delete(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z ]{0,12}".prop_map(Op::Add),
        (0i32..12).prop_map(Op::Delete),
    ]
}

fn apply(store: &mut Store, ops: &[Op]) {
    for op in ops {
        match op {
            Op::Add(name) => {
                store.courses_mut().add(NewCourse::new(name.clone(), "generated"));
            }
            Op::Delete(id) => {
                store.courses_mut().remove_by_id(*id);
            }
        }
    }
}

proptest! {
    #[test]
    fn added_course_echoes_fields_and_is_listed(
        name in ".{0,24}",
        description in ".{0,48}",
    ) {
        let mut store = Store::seeded(IdStrategy::Monotonic).unwrap();

        let created = store.courses_mut().add(NewCourse::new(name.clone(), description.clone()));

        prop_assert_eq!(&created.name, &name);
        prop_assert_eq!(&created.description, &description);
        prop_assert_eq!(store.courses().get_by_id(created.id), Some(&created));
        prop_assert!(store.courses().list_all().contains(&created));
    }

    #[test]
    fn monotonic_ids_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = Store::new(IdStrategy::Monotonic);
        apply(&mut store, &ops);

        let ids: Vec<i32> = store.courses().iter().map(|c| c.id).collect();
        let unique: BTreeSet<i32> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn legacy_ids_are_length_plus_one(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = Store::new(IdStrategy::Legacy);
        apply(&mut store, &ops);

        let expected = store.courses().len() as i32 + 1;
        let created = store.courses_mut().add(NewCourse::new("next", ""));
        prop_assert_eq!(created.id, expected);
    }

    #[test]
    fn delete_present_id_removes_it(ops in prop::collection::vec(op(), 1..40)) {
        let mut store = Store::new(IdStrategy::Monotonic);
        apply(&mut store, &ops);
        let target = store.courses_mut().add(NewCourse::new("target", ""));
        let before = store.courses().len();

        let survivors: Vec<Course> = store.courses_mut().remove_by_id(target.id).to_vec();

        prop_assert_eq!(survivors.len(), before - 1);
        prop_assert!(survivors.iter().all(|c| c.id != target.id));
        prop_assert!(store.courses().get_by_id(target.id).is_none());
    }

    #[test]
    fn delete_absent_id_is_noop(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = Store::new(IdStrategy::Monotonic);
        apply(&mut store, &ops);
        let before = store.courses().list_all().to_vec();

        let after = store.courses_mut().remove_by_id(-1).to_vec();

        prop_assert_eq!(before, after);
    }

    #[test]
    fn student_course_resolution_tracks_deletes(course_count in 1usize..8, pick in 0usize..8) {
        let mut store = Store::new(IdStrategy::Monotonic);
        for i in 0..course_count {
            store.courses_mut().add(NewCourse::new(format!("course {i}"), ""));
        }
        let course_id = (pick % course_count) as i32 + 1;
        let student = store.students_mut().add(NewStudent::new("Ana", "Li", course_id));

        prop_assert_eq!(store.course_of(&student).map(|c| c.id), Some(course_id));

        store.courses_mut().remove_by_id(course_id);
        prop_assert!(store.course_of(&student).is_none());
    }
}

#[test]
fn example_scenario_from_empty_store() {
    let mut store = Store::new(IdStrategy::Monotonic);

    let algebra = store.courses_mut().add(NewCourse::new("Algebra", "Intro"));
    assert_eq!(algebra.id, 1);

    let ana = store.students_mut().add(NewStudent::new("Ana", "Li", 1));
    assert_eq!(ana.id, 1);
    assert_eq!(store.course_of(&ana).map(|c| c.name.as_str()), Some("Algebra"));

    store.courses_mut().remove_by_id(1);

    let ana = store.students().get_by_id(1).unwrap();
    assert!(store.course_of(ana).is_none());
}
