//! Error types for rule failures
//!
//! [`ValidationError`] is the single failure value every rule returns. It
//! carries a short kind code, a human-readable message, and the nested
//! failures of combinators that wrap or aggregate other rules.
//!
//! Code and message use `Cow<'static, str>` so static failures never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A descriptive rule failure.
///
/// # Examples
///
/// ```
/// use rulekit::foundation::ValidationError;
///
/// let error = ValidationError::below_min(10, 8);
/// assert_eq!(error.code, "min");
/// assert!(error.message.contains("8"));
/// assert!(error.message.contains("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Kind of failure: "min", "max", "one_of", "pattern", ...
    pub code: Cow<'static, str>,

    /// Human-readable description naming the offending value and the
    /// constraint it violated.
    pub message: Cow<'static, str>,

    /// Underlying failures, in evaluation order.
    ///
    /// Filled by `Each` (the failing element) and by the any-combinators
    /// (one entry per failed branch).
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            nested: Vec::new(),
        }
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Appends a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Returns true if this error wraps other errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A value fell below its lower bound.
    pub fn below_min<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new("min", format!("{actual} is less than the minimum of {min}"))
    }

    /// A value exceeded its upper bound.
    pub fn above_max<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new("max", format!("{actual} is greater than the maximum of {max}"))
    }

    /// A value is not a member of the allowed set.
    pub fn not_one_of<T: fmt::Debug>(actual: &T, allowed: &[T]) -> Self {
        Self::new("one_of", format!("{actual:?} is not one of {allowed:?}"))
    }

    /// A string did not match a pattern.
    pub fn pattern_mismatch(actual: &str, pattern: &str) -> Self {
        Self::new(
            "pattern",
            format!("{actual:?} does not match pattern `{pattern}`"),
        )
    }

    /// A pattern could not be compiled.
    pub fn invalid_pattern(pattern: &str, error: &regex::Error) -> Self {
        Self::new(
            "invalid_pattern",
            format!("pattern `{pattern}` failed to compile: {error}"),
        )
    }

    /// Wraps the failure of the sequence element at `index`.
    pub fn element(index: usize, error: ValidationError) -> Self {
        Self::new(
            "element",
            format!("value at index {index}: {}", error.message),
        )
        .with_nested_error(error)
    }

    /// Aggregates the failures of every branch of an any-combinator.
    ///
    /// An empty list means there was no branch that could have passed.
    pub fn all_alternatives_failed(errors: Vec<ValidationError>) -> Self {
        let message = if errors.is_empty() {
            Cow::Borrowed("no alternatives to satisfy")
        } else {
            let reasons: Vec<&str> = errors.iter().map(|e| e.message.as_ref()).collect();
            Cow::Owned(format!(
                "all {} alternatives failed: {}",
                errors.len(),
                reasons.join("; ")
            ))
        };
        Self::new("any_failed", message).with_nested(errors)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

/// Errors raised while building a rule eagerly.
///
/// Rules never fail at construction unless the caller asks for it, e.g.
/// through [`Pattern::compile`](crate::validators::Pattern::compile).
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The pattern text is not a valid regular expression.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl From<RuleError> for ValidationError {
    fn from(error: RuleError) -> Self {
        match error {
            RuleError::InvalidPattern { pattern, source } => {
                ValidationError::invalid_pattern(&pattern, &source)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
