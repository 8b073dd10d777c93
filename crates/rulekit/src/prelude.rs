//! Prelude module for convenient imports.
//!
//! Provides a single `use rulekit::prelude::*;` import that brings in the
//! traits, primitives and combinators needed to declare and apply rules.
//!
//! # Examples
//!
//! ```
//! use rulekit::prelude::*;
//!
//! let port = in_range(1_u16, 65535);
//! let scheme = one_of(vec!["http", "https"]);
//! let tags = pattern::<String>("^[a-z]+$").each();
//!
//! assert!(port.validate(&8080).is_ok());
//! assert!(scheme.validate(&"ftp").is_err());
//! assert!(tags.validate(&["db".to_string(), "Web".to_string()]).is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, helpers
// ============================================================================

pub use crate::foundation::{
    BoxedRule, Comparable, Numeric, RuleError, Textual, Validate, ValidateExt, ValidationError,
    ValidationResult, ensure, ensure_with,
};

// ============================================================================
// CONFIG
// ============================================================================

pub use crate::config::PatternConfig;

// ============================================================================
// VALIDATORS: All built-in primitives
// ============================================================================

pub use crate::validators::{
    InRange, Max, Min, OneOf, Pattern, in_range, max, min, one_of, pattern, pattern_with,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, ChainAll, ChainAny, Each, FnRule, Logged, Or, and, chain_all, chain_any, each, from_fn, or,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{any_of, compose, validator};
