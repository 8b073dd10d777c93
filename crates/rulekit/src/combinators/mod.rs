//! Combinators for composing rules
//!
//! - [`And`] / [`ChainAll`] - every rule must pass, first failure wins
//! - [`Or`] / [`ChainAny`] - one rule must pass, failures are aggregated
//! - [`Each`] - apply a rule to every element of a slice
//! - [`FnRule`] - use a closure as a rule
//! - [`Logged`] - emit a `tracing` event per application

pub mod and;
pub mod each;
pub mod func;
pub mod logged;
pub mod or;

pub use and::{And, ChainAll, and, chain_all};
pub use each::{Each, each};
pub use func::{FnRule, from_fn};
pub use logged::Logged;
pub use or::{ChainAny, Or, chain_any, or};
