//! Closures as rules

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// A rule backed by a closure.
///
/// The closure receives the input by reference and returns the rule result.
/// It should be pure: combinators rely on a rule giving the same answer for
/// the same input.
///
/// # Examples
///
/// ```
/// use rulekit::prelude::*;
///
/// let even = from_fn(|v: &u32| {
///     ensure_with(v % 2 == 0, || ValidationError::new("even", format!("{v} is odd")))
/// });
/// assert!(even.validate(&4).is_ok());
/// assert_eq!(even.validate(&3).unwrap_err().message, "3 is odd");
/// ```
pub struct FnRule<F, T: ?Sized> {
    check: F,
    _input: PhantomData<fn(&T)>,
}

impl<F, T: ?Sized> FnRule<F, T>
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    /// Wraps a closure.
    pub fn new(check: F) -> Self {
        Self {
            check,
            _input: PhantomData,
        }
    }
}

impl<F, T: ?Sized> Validate for FnRule<F, T>
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        (self.check)(input)
    }
}

impl<F: Clone, T: ?Sized> Clone for FnRule<F, T> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            _input: PhantomData,
        }
    }
}

impl<F, T: ?Sized> fmt::Debug for FnRule<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Creates a rule from a closure.
pub fn from_fn<T: ?Sized, F>(check: F) -> FnRule<F, T>
where
    F: Fn(&T) -> Result<(), ValidationError>,
{
    FnRule::new(check)
}
