//! Algebraic laws of the chaining combinators, checked over every variant.

use outcome_rail::Outcome;

type Step = fn(i32) -> Outcome<i32, String>;

fn half(x: i32) -> Outcome<i32, String> {
    if x % 2 == 0 {
        Outcome::ok(x / 2)
    } else {
        Outcome::err(format!("{x} is odd"))
    }
}

fn positive(x: i32) -> Outcome<i32, String> {
    if x > 0 {
        Outcome::ok(x)
    } else {
        Outcome::err(format!("{x} is not positive"))
    }
}

fn samples() -> Vec<Outcome<i32, String>> {
    vec![
        Outcome::ok(8),
        Outcome::ok(3),
        Outcome::ok(-4),
        Outcome::ok(0),
        Outcome::err("upstream".to_string()),
    ]
}

#[test]
fn on_ok_is_associative() {
    let steps: [(Step, Step); 2] = [(half, positive), (positive, half)];

    for m in samples() {
        for (f, g) in steps {
            let left = m.clone().on_ok(f).on_ok(g);
            let right = m.clone().on_ok(|x| f(x).on_ok(g));
            assert_eq!(left, right, "associativity failed for {m:?}");
        }
    }
}

#[test]
fn ok_is_a_left_identity_of_on_ok() {
    for x in [8, 3, -4, 0] {
        assert_eq!(Outcome::<i32, String>::ok(x).on_ok(half), half(x));
    }
}

#[test]
fn ok_is_a_right_identity_of_on_ok() {
    for m in samples() {
        assert_eq!(m.clone().on_ok(Outcome::ok), m);
    }
}

#[test]
fn err_is_an_identity_of_on_err() {
    for m in samples() {
        assert_eq!(m.clone().on_err(Outcome::err), m);
    }

    let recover = |e: String| Outcome::<i32, usize>::ok(e.len() as i32);
    assert_eq!(
        Outcome::<i32, String>::err("abc".to_string()).on_err(recover),
        recover("abc".to_string())
    );
}

#[test]
fn chaining_never_loses_the_payload() {
    for m in samples() {
        let through_ok = m.clone().on_ok_map(|x| x);
        let through_err = m.clone().on_err_map(|e| e);
        let through_match = m.clone().match_with(Outcome::ok, Outcome::err);

        assert_eq!(through_ok, m);
        assert_eq!(through_err, m);
        assert_eq!(through_match, m);
    }
}

#[test]
fn match_with_agrees_with_sequential_single_sided_steps() {
    for m in samples() {
        let combined = m.clone().match_with(half, |e| Outcome::err(e.to_uppercase()));
        let sequential = match m.clone() {
            Outcome::Ok(v) => half(v),
            Outcome::Err(e) => Outcome::err(e.to_uppercase()),
        };
        assert_eq!(combined, sequential);
    }
}
