//! Domain constraints on the value types a rule accepts
//!
//! - [`Numeric`] - totally comparable numbers (every integer width, `f32`, `f64`)
//! - [`Textual`] - anything viewable as `&str`
//! - [`Comparable`] - anything with equality and a debug rendering
//!
//! `Numeric` is sealed: bound rules only make sense for the primitive number
//! types, and sealing keeps that list closed.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Marker for the primitive numeric types accepted by `Min`, `Max` and
/// `InRange`.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Numeric: PartialOrd + fmt::Display + fmt::Debug + Copy + sealed::Sealed {}

macro_rules! impl_numeric {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Numeric for $ty {}
        )+
    };
}

impl_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// A value that can be viewed as text, used by `Pattern`.
///
/// Implemented for every `AsRef<str>` type, including caller newtypes.
pub trait Textual {
    /// Returns the text to match against.
    fn as_text(&self) -> &str;
}

impl<T: AsRef<str> + ?Sized> Textual for T {
    fn as_text(&self) -> &str {
        self.as_ref()
    }
}

/// A value that supports equality, used by `OneOf`.
pub trait Comparable: PartialEq + fmt::Debug {}

impl<T: PartialEq + fmt::Debug + ?Sized> Comparable for T {}
