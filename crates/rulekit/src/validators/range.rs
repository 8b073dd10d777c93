//! Numeric bound rules

use crate::combinators::And;
use crate::foundation::{Numeric, ValidateExt, ValidationError};

crate::validator! {
    /// Validates that a value is at least a minimum (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: Numeric> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) { ValidationError::below_min(self.min, *input) }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum (inclusive).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: Numeric> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) { ValidationError::above_max(self.max, *input) }
    fn max(value: T);
}

/// Inclusive range: `Min(low)` then `Max(high)`.
///
/// The reported failure is the one from whichever bound fails first, so a
/// value below the range always reports the `min` failure.
pub type InRange<T> = And<Min<T>, Max<T>>;

/// Creates an inclusive range rule, `low <= value <= high`.
///
/// `low <= high` is not checked; an inverted range rejects every value.
///
/// # Examples
///
/// ```
/// use rulekit::validators::in_range;
/// use rulekit::foundation::Validate;
///
/// let rule = in_range(10_u64, 16);
/// assert!(rule.validate(&10).is_ok());
/// assert!(rule.validate(&16).is_ok());
/// assert_eq!(rule.validate(&9).unwrap_err().code, "min");
/// assert_eq!(rule.validate(&17).unwrap_err().code, "max");
/// ```
#[must_use]
pub fn in_range<T: Numeric>(low: T, high: T) -> InRange<T> {
    min(low).and(max(high))
}

// ============================================================================
// TESTS
// ============================================================================
