use std::cell::RefCell;

use salvation::{Matcher, MatcherConfig, Possibly, PossiblyConfig};

fn all_cases() -> MatcherConfig {
    MatcherConfig::new().with_evaluate_all_cases(true)
}

#[test]
fn first_match_wins() {
    let calls = RefCell::new(Vec::new());
    let m = Possibly::new(5)
        .into_matcher()
        .case(
            |v| {
                calls.borrow_mut().push(1);
                *v > 3
            },
            |_| calls.borrow_mut().push(10),
        )
        .case(
            |v| {
                calls.borrow_mut().push(2);
                *v > 0
            },
            |_| calls.borrow_mut().push(20),
        );
    assert!(m.is_matched());
    assert_eq!(calls.into_inner(), [1, 10]);
}

#[test]
fn all_cases_run_in_order() {
    let calls = RefCell::new(Vec::new());
    let m = Possibly::new(5)
        .into_matcher_with(all_cases())
        .case(
            |v| {
                calls.borrow_mut().push(1);
                *v > 3
            },
            |_| calls.borrow_mut().push(10),
        )
        .case(
            |v| {
                calls.borrow_mut().push(2);
                *v > 0
            },
            |_| calls.borrow_mut().push(20),
        );
    assert!(m.is_matched());
    assert_eq!(calls.into_inner(), [1, 10, 2, 20]);
}

#[test]
fn all_cases_skips_failed_predicates() {
    let hits = RefCell::new(Vec::new());
    let m = Possibly::new(5)
        .into_matcher_with(all_cases())
        .case(|v| *v > 10, |_| hits.borrow_mut().push("big"))
        .case(|v| *v % 2 == 1, |_| hits.borrow_mut().push("odd"))
        .case(|v| *v > 0, |_| hits.borrow_mut().push("positive"));
    assert!(m.is_matched());
    assert_eq!(hits.into_inner(), ["odd", "positive"]);
}

#[test]
fn pointer_to_int_first_match() {
    let five = 5;
    let log = RefCell::new(Vec::new());
    Possibly::new(&five)
        .into_matcher()
        .case(|v| **v > 3, |_| log.borrow_mut().push("A"))
        .case(|v| **v > 0, |_| log.borrow_mut().push("B"))
        .default(|_| log.borrow_mut().push("default"));
    assert_eq!(log.into_inner(), ["A"]);
}

#[test]
fn pointer_to_int_all_cases() {
    let log = RefCell::new(Vec::new());
    Possibly::new(Some(5i32))
        .into_matcher_with(all_cases())
        .case(|v| v.is_some_and(|n| n > 3), |_| log.borrow_mut().push("A"))
        .case(|v| v.is_some_and(|n| n > 0), |_| log.borrow_mut().push("B"))
        .default(|_| log.borrow_mut().push("default"));
    assert_eq!(log.into_inner(), ["A", "B"]);
}

#[test]
fn default_skipped_after_match() {
    let mut fell_through = false;
    Possibly::new(5)
        .into_matcher()
        .case(|v| *v > 1, |_| {})
        .default(|_| fell_through = true);
    assert!(!fell_through);
}

#[test]
fn default_runs_without_match() {
    let mut seen = None;
    Possibly::new(1)
        .into_matcher()
        .case(|v| *v > 10, |_| {})
        .default(|p| seen = Some(p.extract_or_panic()));
    assert_eq!(seen, Some(1));
}

#[test]
fn absent_subject_never_evaluates_cases() {
    let calls = RefCell::new(Vec::new());
    let mut fallback = None;
    Possibly::new(None::<i32>)
        .into_matcher_with(all_cases())
        .case(
            |_| {
                calls.borrow_mut().push(1);
                true
            },
            |_| calls.borrow_mut().push(10),
        )
        .case(
            |_| {
                calls.borrow_mut().push(2);
                true
            },
            |_| calls.borrow_mut().push(20),
        )
        .default(|p| fallback = Some(p.is_absent()));
    assert!(calls.into_inner().is_empty());
    // No case could match, so the fallback sees the absent subject.
    assert_eq!(fallback, Some(true));
}

#[test]
fn cached_absence_drives_matching() {
    let strong = std::rc::Rc::new(1);
    let weak = std::rc::Rc::downgrade(&strong);
    let p = Possibly::with_config(weak, PossiblyConfig::new().with_precompute(true));
    drop(strong);

    // The cache still says present, so the predicate runs on a dead handle.
    let m = p.into_matcher().case(|w| w.upgrade().is_none(), |_| {});
    assert!(m.is_matched());
}

#[test]
fn explicit_constructor_matches_convenience() {
    let m = Matcher::from_possibly(Possibly::new(3u8), all_cases());
    assert!(m.config().evaluate_all_cases);
    assert!(!m.is_matched());
    let m = m.case(|v| *v == 3, |_| {});
    assert!(m.is_matched());
    assert_eq!(m.subject().reveal(), (&3, true));
}
