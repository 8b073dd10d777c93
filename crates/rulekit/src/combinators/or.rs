//! OR combinators - at least one rule must pass
//!
//! [`Or`] joins two rules; [`ChainAny`] tries a list of rules in order.
//! Both return as soon as one branch passes. When every branch fails, the
//! error aggregates all branch failures in evaluation order, so a caller
//! checking "10..=16 or 56..=67" sees why each range rejected the value.
//!
//! # Examples
//!
//! ```
//! use rulekit::prelude::*;
//!
//! let rule = chain_any(vec![in_range(10_i16, 16), in_range(56, 67)]);
//! assert!(rule.validate(&13).is_ok());
//! assert!(rule.validate(&60).is_ok());
//!
//! let err = rule.validate(&20).unwrap_err();
//! assert_eq!(err.code, "any_failed");
//! assert_eq!(err.nested.len(), 2);
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical OR.
///
/// The right rule is only evaluated when the left one fails.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => Err(ValidationError::all_alternatives_failed(vec![
                    left_error,
                    right_error,
                ])),
            },
        }
    }
}

/// Creates an `Or` combinator from two rules.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

// ============================================================================
// CHAIN ANY
// ============================================================================

/// Tries a list of rules in order until one passes.
///
/// If all fail, returns one aggregate error whose `nested` list holds every
/// branch failure. An empty list always fails: no branch could have passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAny<V> {
    rules: Vec<V>,
}

impl<V> ChainAny<V> {
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

impl<V> Validate for ChainAny<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            match rule.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => errors.push(e),
            }
        }

        Err(ValidationError::all_alternatives_failed(errors))
    }
}

/// Creates a [`ChainAny`] from rules in evaluation order.
pub fn chain_any<V>(rules: impl IntoIterator<Item = V>) -> ChainAny<V>
where
    V: Validate,
{
    ChainAny::new(rules)
}
