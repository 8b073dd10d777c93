//! Integration tests for rule composition.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use rstest::rstest;
use rulekit::prelude::*;

/// A rule that counts its applications and passes or fails as configured.
fn counting(calls: &Arc<AtomicUsize>, pass: bool, code: &'static str) -> BoxedRule<i64> {
    let calls = Arc::clone(calls);
    from_fn(move |v: &i64| {
        calls.fetch_add(1, Ordering::SeqCst);
        ensure_with(pass, || ValidationError::new(code, format!("{v} rejected by {code}")))
    })
    .boxed()
}

// ============================================================================
// CHAIN ALL
// ============================================================================

#[test]
fn chain_all_stops_at_first_failure() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let rule = chain_all([counting(&first, false, "f1"), counting(&second, true, "f2")]);

    let err = rule.validate(&5).unwrap_err();
    assert_eq!(err, ValidationError::new("f1", "5 rejected by f1"));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
}

#[test]
fn chain_all_runs_every_rule_when_passing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rule = chain_all((0..4).map(|_| counting(&calls, true, "ok")));
    assert!(rule.validate(&1).is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn chain_all_mixes_rule_types_when_boxed() {
    let rule: ChainAll<BoxedRule<i64>> = chain_all([
        min(0_i64).boxed(),
        max(100_i64).boxed(),
        one_of(vec![0_i64, 50, 100]).boxed(),
    ]);
    assert!(rule.validate(&50).is_ok());
    assert_eq!(rule.validate(&-1).unwrap_err().code, "min");
    assert_eq!(rule.validate(&25).unwrap_err().code, "one_of");
}

#[test]
fn empty_chain_all_passes() {
    let rule: ChainAll<Min<i32>> = chain_all([]);
    assert!(rule.validate(&i32::MIN).is_ok());
}

// ============================================================================
// CHAIN ANY
// ============================================================================

#[rstest]
#[case(13, true)]
#[case(60, true)]
#[case(20, false)]
#[case(9, false)]
#[case(68, false)]
fn chain_any_over_disjoint_ranges(#[case] value: i16, #[case] ok: bool) {
    let rule = chain_any([in_range(10_i16, 16), in_range(56, 67)]);
    assert_eq!(rule.validate(&value).is_ok(), ok);
}

#[test]
fn chain_any_aggregates_every_branch_in_order() {
    let rule = chain_any([in_range(10_i16, 16), in_range(56, 67)]);
    let err = rule.validate(&20).unwrap_err();

    assert_eq!(err.code, "any_failed");
    assert_eq!(
        err.nested,
        vec![
            ValidationError::above_max(16_i16, 20),
            ValidationError::below_min(56_i16, 20),
        ]
    );
    assert_eq!(
        err.message,
        "all 2 alternatives failed: 20 is greater than the maximum of 16; \
         20 is less than the minimum of 56"
    );
}

#[test]
fn chain_any_stops_at_first_success() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let third = Arc::new(AtomicUsize::new(0));
    let rule = chain_any([
        counting(&first, false, "a"),
        counting(&second, true, "b"),
        counting(&third, true, "c"),
    ]);

    assert!(rule.validate(&0).is_ok());
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
    assert_eq!(third.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_chain_any_fails() {
    let rule: ChainAny<Min<u8>> = chain_any([]);
    let err = rule.validate(&0).unwrap_err();
    assert_eq!(err.code, "any_failed");
    assert!(err.nested.is_empty());
}

#[test]
fn or_matches_chain_any_on_two_branches() {
    let pair = in_range(10_i16, 16).or(in_range(56, 67));
    let chain = chain_any([in_range(10_i16, 16), in_range(56, 67)]);
    for v in [5, 13, 20, 60, 70] {
        assert_eq!(pair.validate(&v), chain.validate(&v));
    }
}

// ============================================================================
// EACH
// ============================================================================

#[test]
fn each_passes_when_every_element_passes() {
    let rule = each(min(7_u32));
    assert!(rule.validate(&[9, 10, 18, 14]).is_ok());
}

#[test]
fn each_reports_first_failing_index() {
    let rule = each(min(7_u32));
    let err = rule.validate(&[9, 10, 6, 14]).unwrap_err();

    assert_eq!(err.code, "element");
    assert_eq!(err.message, "value at index 2: 6 is less than the minimum of 7");
    assert_eq!(err.nested, vec![ValidationError::below_min(7_u32, 6)]);
}

#[test]
fn each_on_empty_slice_passes() {
    let never = from_fn(|v: &u32| Err(ValidationError::new("never", format!("{v}"))));
    assert!(never.each().validate(&[]).is_ok());
}

#[test]
fn each_collect_all_reports_every_index() {
    let rule = min(7_u32).each().collect_all();
    let err = rule.validate(&[1, 10, 6, 14]).unwrap_err();

    assert_eq!(err.code, "elements");
    assert_eq!(err.nested.len(), 2);
    assert!(err.nested[0].message.starts_with("value at index 0"));
    assert!(err.nested[1].message.starts_with("value at index 2"));
}

#[test]
fn each_over_strings_with_pattern() {
    let rule = pattern::<String>("^[a-z]+$").each();
    let tags = vec!["api".to_string(), "DB".to_string()];
    let err = rule.validate(&tags).unwrap_err();
    assert!(err.message.starts_with("value at index 1: "));
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn compose_and_any_of_build_nested_chains() {
    let rule = any_of![compose![min(10_i32), max(16)], compose![min(56), max(67)]];
    assert!(rule.validate(&12).is_ok());
    assert!(rule.validate(&60).is_ok());
    assert_eq!(rule.validate(&30).unwrap_err().nested.len(), 2);
}

validator! {
    /// Rejects strings with surrounding whitespace.
    Trimmed { allow_empty: bool } for str;
    rule(self, input) { (self.allow_empty || !input.is_empty()) && input.trim() == input }
    error(self, input) { ValidationError::new("trimmed", format!("{input:?} is not trimmed")) }
    fn trimmed(allow_empty: bool);
}

#[test]
fn user_declared_rule_composes_with_builtins() {
    let rule = trimmed(false).and(pattern("^[a-z ]+$"));
    assert!(rule.validate("hello world").is_ok());
    assert_eq!(rule.validate(" hello").unwrap_err().code, "trimmed");
    assert_eq!(rule.validate("Hello").unwrap_err().code, "pattern");
}

// ============================================================================
// SHARING
// ============================================================================

#[test]
fn rules_are_shared_across_threads() {
    let rule: Arc<ChainAny<BoxedRule<str>>> = Arc::new(chain_any([
        pattern::<str>("^[0-9]+$").boxed(),
        pattern::<str>("^(none|auto)$").boxed(),
    ]));

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let rule = Arc::clone(&rule);
            scope.spawn(move || {
                for i in 0..100 {
                    let value = (worker * 1000 + i).to_string();
                    assert!(rule.validate(value.as_str()).is_ok());
                }
                assert!(rule.validate("auto").is_ok());
                assert!(rule.validate("manual").is_err());
            });
        }
    });
}
