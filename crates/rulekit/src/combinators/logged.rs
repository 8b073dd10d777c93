//! LOGGED combinator - tracing instrumentation for a rule

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Applies the inner rule unchanged and emits a `tracing` event with the
/// outcome.
///
/// The event carries the rule name, `outcome` (`"passed"` / `"failed"`) and,
/// on failure, the rendered error. No subscriber is installed by this crate.
///
/// # Examples
///
/// ```
/// use rulekit::prelude::*;
///
/// let port = in_range(1_u16, 1023).logged("privileged_port", tracing::Level::DEBUG);
/// assert!(port.validate(&80).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Logged<V> {
    inner: V,
    name: Cow<'static, str>,
    level: tracing::Level,
}

impl<V> Logged<V> {
    /// Wraps `inner`, logging at `level` under `name`.
    pub fn new(inner: V, name: impl Into<Cow<'static, str>>, level: tracing::Level) -> Self {
        Self {
            inner,
            name: name.into(),
            level,
        }
    }

    /// Returns the name used in log events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the level events are emitted at.
    pub fn level(&self) -> tracing::Level {
        self.level
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

impl<V> Validate for Logged<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let result = self.inner.validate(input);

        // tracing macros need a constant level, so dispatch once per level
        macro_rules! log_at_level {
            ($level:expr, $($fields:tt)+) => {
                match $level {
                    tracing::Level::ERROR => tracing::error!($($fields)+),
                    tracing::Level::WARN => tracing::warn!($($fields)+),
                    tracing::Level::INFO => tracing::info!($($fields)+),
                    tracing::Level::DEBUG => tracing::debug!($($fields)+),
                    _ => tracing::trace!($($fields)+),
                }
            };
        }

        match &result {
            Ok(()) => log_at_level!(
                self.level,
                rule = %self.name,
                outcome = "passed",
                "validation passed"
            ),
            Err(error) => log_at_level!(
                self.level,
                rule = %self.name,
                outcome = "failed",
                code = %error.code,
                error = %error.message,
                "validation failed"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct Never;

    impl Validate for Never {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            Err(ValidationError::new("never", format!("{input:?} rejected")))
        }
    }

    #[test]
    fn test_logged_returns_inner_result() {
        let rule = Never.logged("never", tracing::Level::WARN);
        assert_eq!(rule.name(), "never");
        assert_eq!(rule.level(), tracing::Level::WARN);
        assert_eq!(
            rule.validate("x").unwrap_err(),
            ValidationError::new("never", "\"x\" rejected")
        );
    }
}
