use outcome_rail::convert::*;
use outcome_rail::Outcome;

#[test]
fn result_to_outcome_preserves_state() {
    let ok: Result<i32, &str> = Ok(3);
    assert_eq!(result_to_outcome(ok), Outcome::ok(3));

    let err: Result<i32, &str> = Err("fail");
    let outcome = result_to_outcome(err);
    assert!(outcome.is_error());
    assert_eq!(outcome.into_error(), Some("fail"));
}

#[test]
fn outcome_to_result_handles_both_variants() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::ok(7)), Ok(7));
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::err("boom")), Err("boom"));
}

#[test]
fn option_to_outcome_uses_error_for_none() {
    assert_eq!(option_to_outcome(Some("v"), 404), Outcome::ok("v"));
    assert_eq!(option_to_outcome(None::<&str>, 404), Outcome::err(404));
}

#[test]
fn from_impls_convert_both_directions() {
    let outcome: Outcome<i32, &str> = Ok::<i32, &str>(5).into();
    assert_eq!(outcome, Outcome::ok(5));

    let result: Result<i32, &str> = Outcome::<i32, &str>::err("e").into();
    assert_eq!(result, Err("e"));
}

#[test]
fn into_result_enables_question_mark() {
    fn step(input: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
        let value = input.into_result()?;
        Ok(value + 1)
    }

    assert_eq!(step(Outcome::ok(1)), Ok(2));
    assert_eq!(step(Outcome::err("stop")), Err("stop"));
}
