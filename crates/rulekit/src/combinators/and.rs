//! AND combinators - every rule must pass
//!
//! [`And`] joins two rules of possibly different types; [`ChainAll`] runs a
//! list of rules of one type (use [`BoxedRule`](crate::foundation::BoxedRule)
//! to mix types). Both stop at the first failure and return it unchanged.
//!
//! # Examples
//!
//! ```
//! use rulekit::prelude::*;
//!
//! let rule = chain_all(vec![min(3), min(5), min(7)]);
//! assert!(rule.validate(&9).is_ok());
//! assert_eq!(rule.validate(&6).unwrap_err().message, "6 is less than the minimum of 7");
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical AND.
///
/// The right rule is never evaluated when the left one fails.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

// ============================================================================
// CHAIN ALL
// ============================================================================

/// Runs a list of rules in order; all must pass.
///
/// Short-circuits: once a rule fails, later rules are not invoked and that
/// failure is returned verbatim. An empty list always passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAll<V> {
    rules: Vec<V>,
}

impl<V> ChainAll<V> {
    /// Creates a chain from rules in evaluation order.
    pub fn new(rules: impl IntoIterator<Item = V>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[V] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the chain holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<V> Validate for ChainAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for rule in &self.rules {
            rule.validate(input)?;
        }
        Ok(())
    }
}

/// Creates a [`ChainAll`] from rules in evaluation order.
pub fn chain_all<V>(rules: impl IntoIterator<Item = V>) -> ChainAll<V>
where
    V: Validate,
{
    ChainAll::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use std::cell::Cell;

    struct AtLeast(i32);

    impl Validate for AtLeast {
        type Input = i32;
        fn validate(&self, input: &i32) -> Result<(), ValidationError> {
            if *input >= self.0 {
                Ok(())
            } else {
                Err(ValidationError::below_min(self.0, *input))
            }
        }
    }

    struct Counting<'a> {
        calls: &'a Cell<usize>,
        pass: bool,
    }

    impl Validate for Counting<'_> {
        type Input = i32;
        fn validate(&self, _input: &i32) -> Result<(), ValidationError> {
            self.calls.set(self.calls.get() + 1);
            if self.pass {
                Ok(())
            } else {
                Err(ValidationError::new("counting", "configured to fail"))
            }
        }
    }

    #[test]
    fn test_and_both_pass() {
        let rule = And::new(AtLeast(1), AtLeast(2));
        assert!(rule.validate(&5).is_ok());
    }

    #[test]
    fn test_and_returns_left_failure_verbatim() {
        let calls = Cell::new(0);
        let rule = AtLeast(10).and(Counting {
            calls: &calls,
            pass: true,
        });

        let err = rule.validate(&3).unwrap_err();
        assert_eq!(err, ValidationError::below_min(10, 3));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_and_right_fails() {
        let rule = and(AtLeast(1), AtLeast(10));
        assert_eq!(rule.validate(&5).unwrap_err().code, "min");
    }

    #[test]
    fn test_chain_all_stops_at_first_failure() {
        let calls = Cell::new(0);
        let rules = vec![
            Counting {
                calls: &calls,
                pass: true,
            },
            Counting {
                calls: &calls,
                pass: false,
            },
            Counting {
                calls: &calls,
                pass: true,
            },
        ];
        let chain = chain_all(rules);

        assert_eq!(chain.validate(&0).unwrap_err().code, "counting");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_chain_all_empty_passes() {
        let chain = chain_all(Vec::<AtLeast>::new());
        assert!(chain.is_empty());
        assert!(chain.validate(&i32::MIN).is_ok());
    }
}
