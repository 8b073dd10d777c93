//! Core rule types and traits
//!
//! This module contains the building blocks everything else is made of:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`RuleError`]
//! - **Domain constraints**: [`Numeric`], [`Textual`], [`Comparable`]
//! - **Condition helpers**: [`ensure`], [`ensure_with`]
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Rules are generic over their input type, so applying a numeric bound to a
//! string is a compile error rather than a runtime failure:
//!
//! ```compile_fail
//! use rulekit::prelude::*;
//!
//! let _ = min(3).validate("abc");
//! ```
//!
//! ## 2. Composition
//!
//! Rules compose with logical combinators:
//!
//! ```
//! use rulekit::prelude::*;
//!
//! let port = min(1024_u32).and(max(49151));
//! assert!(port.validate(&8080).is_ok());
//! ```
//!
//! ## 3. Purity
//!
//! Rules hold only the parameters captured at construction. Applying a rule
//! twice to the same input yields the same result.

pub mod domain;
pub mod error;
pub mod traits;

pub use domain::{Comparable, Numeric, Textual};
pub use error::{RuleError, ValidationError};
pub use traits::{BoxedRule, Validate, ValidateExt};

// ============================================================================
// CONDITION HELPERS
// ============================================================================

/// Turns a condition and a prepared failure into a rule result.
///
/// Returns `Ok(())` when `condition` holds, otherwise exactly `error`.
///
/// # Examples
///
/// ```
/// use rulekit::foundation::{ValidationError, ensure};
///
/// assert!(ensure(3 > 2, ValidationError::new("gt", "3 must exceed 2")).is_ok());
///
/// let error = ValidationError::new("gt", "2 must exceed 3");
/// assert_eq!(ensure(2 > 3, error.clone()), Err(error));
/// ```
#[inline]
pub fn ensure(condition: bool, error: ValidationError) -> Result<(), ValidationError> {
    if condition { Ok(()) } else { Err(error) }
}

/// Lazy form of [`ensure`]: the failure is only built when `condition` is false.
///
/// Every built-in primitive reports through this function, so message
/// formatting costs nothing on the passing path.
#[inline]
pub fn ensure_with<F>(condition: bool, error: F) -> Result<(), ValidationError>
where
    F: FnOnce() -> ValidationError,
{
    if condition { Ok(()) } else { Err(error()) }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A rule result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
