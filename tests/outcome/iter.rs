use std::cell::Cell;

use outcome_rail::Outcome;

#[test]
fn iterators_yield_only_success_values() {
    let ok = Outcome::<i32, &str>::ok(3);
    assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![3]);

    let err = Outcome::<i32, &str>::err("e");
    assert_eq!(err.iter().count(), 0);
    assert_eq!((&err).into_iter().count(), 0);
}

#[test]
fn iter_mut_edits_the_value_in_place() {
    let mut outcome = Outcome::<i32, &str>::ok(3);
    for value in &mut outcome {
        *value = 4;
    }
    assert_eq!(outcome, Outcome::ok(4));
}

#[test]
fn collecting_all_successes_builds_a_collection() {
    let steps = vec![Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)];
    let collected: Outcome<Vec<i32>, &str> = steps.into_iter().collect();

    assert_eq!(collected, Outcome::ok(vec![1, 2, 3]));
}

#[test]
fn collecting_stops_at_the_first_error() {
    let pulled = Cell::new(0);
    let steps = [Outcome::ok(1), Outcome::err("err1"), Outcome::err("err2"), Outcome::ok(4)];

    let collected: Outcome<Vec<i32>, &str> = steps
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1))
        .collect();

    assert_eq!(collected, Outcome::err("err1"));
    assert_eq!(pulled.get(), 2);
}

#[test]
fn collecting_an_empty_sequence_is_a_success() {
    let collected: Outcome<Vec<i32>, &str> = Vec::<Outcome<i32, &str>>::new().into_iter().collect();
    assert_eq!(collected, Outcome::ok(Vec::new()));
}
