//! Built-in rule primitives
//!
//! - **Bounds**: [`Min`], [`Max`], [`InRange`]
//! - **Membership**: [`OneOf`]
//! - **Text**: [`Pattern`]

pub mod pattern;
pub mod range;
pub mod set;

pub use pattern::{Pattern, pattern, pattern_with};
pub use range::{InRange, Max, Min, in_range, max, min};
pub use set::{OneOf, one_of};
