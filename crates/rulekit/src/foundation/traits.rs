//! Core traits for the rule system
//!
//! [`Validate`] is the one trait every rule implements. [`ValidateExt`]
//! is implemented automatically and adds the fluent combinator methods.

use std::borrow::Cow;
use std::sync::Arc;

use crate::foundation::ValidationError;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The core trait that all rules implement.
///
/// A rule is an immutable value checking one input. Applying it never
/// mutates the rule or the input, so the same rule can be shared across
/// threads and applied any number of times.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for `str` and `[T]`)
///
/// # Examples
///
/// ```
/// use rulekit::foundation::{Validate, ValidationError, ensure_with};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         ensure_with(input % 2 == 0, || {
///             ValidationError::new("even", format!("{input} is odd"))
///         })
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&5).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` on success, or the failure describing which
    /// constraint the input violated.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased rule.
///
/// Lets rules of different concrete types share one `chain_all` /
/// `chain_any` list.
pub type BoxedRule<T> = Box<dyn Validate<Input = T> + Send + Sync>;

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use rulekit::prelude::*;
///
/// let rule = min(10).and(max(16)).or(min(56).and(max(67)));
/// assert!(rule.validate(&13).is_ok());
/// assert!(rule.validate(&60).is_ok());
/// assert!(rule.validate(&20).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two rules with logical AND.
    ///
    /// `other` is only evaluated when `self` passes; the first failure is
    /// returned unchanged.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two rules with logical OR.
    ///
    /// `other` is only evaluated when `self` fails. If both fail, the error
    /// aggregates both failures in order.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Lifts this rule to a rule over slices of its input.
    fn each(self) -> Each<Self>
    where
        Self::Input: Sized,
    {
        Each::new(self)
    }

    /// Emits a `tracing` event with the outcome of every application.
    fn logged(self, name: impl Into<Cow<'static, str>>, level: tracing::Level) -> Logged<Self> {
        Logged::new(self, name, level)
    }

    /// Erases the concrete rule type.
    fn boxed(self) -> BoxedRule<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::each::Each;
pub use crate::combinators::logged::Logged;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty;

    impl Validate for NonEmpty {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.is_empty() {
                Err(ValidationError::new("non_empty", "must not be empty"))
            } else {
                Ok(())
            }
        }
    }

    fn check<V: Validate<Input = str>>(rule: V, input: &str) -> Result<(), ValidationError> {
        rule.validate(input)
    }

    #[test]
    fn test_validate_through_pointers() {
        let rule = NonEmpty;
        assert!(check(&rule, "x").is_ok());
        assert!(check(&rule, "").is_err());
        assert!(check(&&rule, "x").is_ok());
        assert!(check(Box::new(NonEmpty), "").is_err());
        assert!(check(Arc::new(NonEmpty), "x").is_ok());
    }

    #[test]
    fn test_boxed_erases_type() {
        let rule = NonEmpty.boxed();
        assert!(rule.validate("x").is_ok());
        assert!(rule.validate("").is_err());
    }
}
