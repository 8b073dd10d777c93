//! Regular-expression rule
//!
//! A [`Pattern`] keeps its source text and compiles it the first time it is
//! applied. The compiled program (or the compile failure) is cached, so a
//! rule is compiled at most once no matter how often or from how many
//! threads it is used.

use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::PatternConfig;
use crate::foundation::{RuleError, Textual, Validate, ValidationError, ensure_with};

/// Validates that a string-like value contains a match of a regular
/// expression.
///
/// Matching is unanchored: `foo[1-7].*y` accepts `"foo1ttthsyy"`. Add `^`
/// and `$` for whole-value matches.
///
/// A malformed pattern never panics. Every application of a lazily built
/// rule returns an `invalid_pattern` failure instead; use
/// [`Pattern::compile`] to surface the problem at construction.
///
/// # Examples
///
/// ```
/// use rulekit::validators::pattern;
/// use rulekit::foundation::Validate;
///
/// let rule = pattern("foo[1-7].*y");
/// assert!(rule.validate("foo1y").is_ok());
/// assert!(rule.validate("fooy").is_err());
///
/// let broken = pattern("foo[");
/// assert_eq!(broken.validate("foo").unwrap_err().code, "invalid_pattern");
/// ```
pub struct Pattern<S: ?Sized = str> {
    source: String,
    config: PatternConfig,
    compiled: OnceLock<Result<Regex, ValidationError>>,
    _input: PhantomData<fn(&S)>,
}

impl<S: Textual + ?Sized> Pattern<S> {
    /// Creates a lazily compiled rule with default options.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_config(source, PatternConfig::default())
    }

    /// Creates a lazily compiled rule with the given options.
    pub fn with_config(source: impl Into<String>, config: PatternConfig) -> Self {
        Self {
            source: source.into(),
            config,
            compiled: OnceLock::new(),
            _input: PhantomData,
        }
    }

    /// Compiles the pattern now, failing if it is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] when the source is not a valid
    /// regular expression.
    pub fn compile(source: impl Into<String>) -> Result<Self, RuleError> {
        Self::compile_with(source, PatternConfig::default())
    }

    /// Eager form of [`with_config`](Self::with_config).
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] when the source is not a valid
    /// regular expression under `config`.
    pub fn compile_with(source: impl Into<String>, config: PatternConfig) -> Result<Self, RuleError> {
        let source = source.into();
        match config.build(&source) {
            Ok(regex) => Ok(Self {
                source,
                config,
                compiled: OnceLock::from(Ok(regex)),
                _input: PhantomData,
            }),
            Err(source_error) => Err(RuleError::InvalidPattern {
                pattern: source,
                source: source_error,
            }),
        }
    }
}

impl<S: ?Sized> Pattern<S> {
    /// Returns the pattern text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the compile options.
    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Returns true once compilation has been attempted.
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    fn regex(&self) -> Result<&Regex, ValidationError> {
        self.compiled
            .get_or_init(|| {
                self.config.build(&self.source).map_err(|error| {
                    tracing::warn!(
                        pattern = %self.source,
                        error = %error,
                        "pattern failed to compile"
                    );
                    ValidationError::invalid_pattern(&self.source, &error)
                })
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl<S: Textual + ?Sized> Validate for Pattern<S> {
    type Input = S;

    fn validate(&self, input: &S) -> Result<(), ValidationError> {
        let regex = self.regex()?;
        let text = input.as_text();
        ensure_with(regex.is_match(text), || {
            ValidationError::pattern_mismatch(text, &self.source)
        })
    }
}

impl<S: ?Sized> Clone for Pattern<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            config: self.config.clone(),
            compiled: self.compiled.clone(),
            _input: PhantomData,
        }
    }
}

impl<S: ?Sized> fmt::Debug for Pattern<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("config", &self.config)
            .field("compiled", &self.is_compiled())
            .finish()
    }
}

/// Creates a lazily compiled pattern rule.
#[must_use]
pub fn pattern<S: Textual + ?Sized>(source: impl Into<String>) -> Pattern<S> {
    Pattern::new(source)
}

/// Creates a lazily compiled pattern rule with custom options.
#[must_use]
pub fn pattern_with<S: Textual + ?Sized>(source: impl Into<String>, config: PatternConfig) -> Pattern<S> {
    Pattern::with_config(source, config)
}

// ============================================================================
// TESTS
// ============================================================================
