//! # rulekit
//!
//! Composable, type-safe validation rules.
//!
//! A rule checks one value and returns `Ok(())` or a [`ValidationError`]
//! naming the offending value and the constraint it broke. Rules are
//! immutable, cheap to share, and compose into larger rules.
//!
//! ## Quick Start
//!
//! ```
//! use rulekit::prelude::*;
//!
//! // two disjoint ranges: [10, 16] or [56, 67]
//! let rule = chain_any([in_range(10_i16, 16), in_range(56, 67)]);
//! assert!(rule.validate(&12).is_ok());
//! assert!(rule.validate(&60).is_ok());
//!
//! let err = rule.validate(&20).unwrap_err();
//! assert_eq!(err.code, "any_failed");
//! assert_eq!(err.nested.len(), 2);
//!
//! // element-wise over a slice
//! let readings = min(10_u32).each();
//! assert_eq!(
//!     readings.validate(&[9, 10, 6, 14]).unwrap_err().message,
//!     "value at index 0: 9 is less than the minimum of 10"
//! );
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`validator!`] macro for zero-boilerplate rules, [`from_fn`]
//! for one-off closures, or implement [`Validate`] manually.
//!
//! ## Built-in Rules
//!
//! - **Bounds**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`InRange`](validators::InRange)
//! - **Membership**: [`OneOf`](validators::OneOf)
//! - **Text**: [`Pattern`](validators::Pattern), configured by
//!   [`PatternConfig`](config::PatternConfig)
//!
//! ## Combinators
//!
//! - [`ChainAll`](combinators::ChainAll) / `.and()` - every rule, first failure wins
//! - [`ChainAny`](combinators::ChainAny) / `.or()` - any rule, failures aggregated
//! - [`Each`](combinators::Each) / `.each()` - every element of a slice
//! - [`Logged`](combinators::Logged) / `.logged()` - `tracing` event per application
//!
//! [`ValidationError`]: foundation::ValidationError
//! [`Validate`]: foundation::Validate
//! [`from_fn`]: combinators::from_fn

// ValidationError is returned by value from every rule; boxing it would add
// an allocation to every failure.
#![allow(clippy::result_large_err)]
// Nested combinators (And<Or<..>, Each<..>>) produce long types by construction.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
