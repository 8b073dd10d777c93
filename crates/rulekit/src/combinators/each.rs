//! EACH combinator - lifts a rule to a rule over slices

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies a rule to every element of a slice, in order.
///
/// By default stops at the first failing element and reports its zero-based
/// index together with the element's own failure. [`Each::collect_all`]
/// keeps going and reports every failing element instead.
///
/// An empty slice always passes.
///
/// # Examples
///
/// ```
/// use rulekit::prelude::*;
///
/// let rule = each(min(7_u32));
/// assert!(rule.validate(&[9, 10, 18, 14]).is_ok());
///
/// let err = rule.validate(&[9, 10, 6, 14]).unwrap_err();
/// assert_eq!(err.code, "element");
/// assert!(err.message.starts_with("value at index 2"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Each<V> {
    inner: V,
    fail_fast: bool,
}

impl<V> Each<V> {
    /// Creates a new EACH combinator that stops on the first failure.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            fail_fast: true,
        }
    }

    /// Validates every element and reports all failures.
    #[must_use = "builder methods must be chained or built"]
    pub fn collect_all(mut self) -> Self {
        self.fail_fast = false;
        self
    }

    /// Returns true if validation stops at the first failing element.
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors: Vec<(usize, ValidationError)> = Vec::new();

        for (index, element) in input.iter().enumerate() {
            if let Err(e) = self.inner.validate(element) {
                if self.fail_fast {
                    return Err(ValidationError::element(index, e));
                }
                errors.push((index, e));
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        let messages: Vec<String> = errors
            .iter()
            .map(|(i, e)| format!("[{}]: {}", i, e.message))
            .collect();

        Err(ValidationError::new(
            "elements",
            format!(
                "{} of {} elements failed: {}",
                errors.len(),
                input.len(),
                messages.join("; ")
            ),
        )
        .with_nested(
            errors
                .into_iter()
                .map(|(index, e)| ValidationError::element(index, e))
                .collect(),
        ))
    }
}

/// Creates an EACH combinator that stops on the first failure.
pub fn each<V>(rule: V) -> Each<V> {
    Each::new(rule)
}

// ============================================================================
// TESTS
// ============================================================================
