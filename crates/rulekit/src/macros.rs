//! Macros for declaring rules with minimal boilerplate.
//!
//! - [`validator!`] - declare a rule (struct + `Validate` impl + factory fn)
//! - [`compose!`] - AND-chain rules of different types
//! - [`any_of!`] - OR-chain rules of different types

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a rule: struct definition, `new` constructor, `Validate`
/// implementation routed through [`ensure_with`](crate::foundation::ensure_with),
/// and an optional factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// **Struct with fields**:
/// ```
/// use rulekit::validator;
/// use rulekit::foundation::{Validate, ValidationError};
///
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxLen { max: usize } for str;
///     rule(self, input) { input.len() <= self.max }
///     error(self, input) {
///         ValidationError::new("max_len", format!("{input:?} is longer than {}", self.max))
///     }
///     fn max_len(max: usize);
/// }
///
/// assert!(max_len(3).validate("abc").is_ok());
/// assert!(MaxLen::new(2).validate("abc").is_err());
/// ```
///
/// **Generic rule** (bounds must be plain identifiers in scope):
/// ```
/// use rulekit::validator;
/// use rulekit::foundation::{Numeric, Validate, ValidationError};
///
/// validator! {
///     pub Above<T: Numeric> { bound: T } for T;
///     rule(self, input) { *input > self.bound }
///     error(self, input) {
///         ValidationError::new("above", format!("{input} is not above {}", self.bound))
///     }
///     fn above(bound: T);
/// }
///
/// assert!(above(1.5).validate(&2.0).is_ok());
/// ```
#[macro_export]
macro_rules! validator {
    // ── Struct with fields + factory fn ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields, no factory ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                $crate::foundation::ensure_with($rule, || {
                    let $einp = $inp;
                    $err
                })
            }
        }
    };

    // ── Generic struct + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$param:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$param: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory<$param: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$param> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$param:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$param> {
            $(pub $field: $fty,)+
        }

        impl<$param: $first_bound $(+ $rest_bound)*> $name<$param> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$param: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$param> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                $crate::foundation::ensure_with($rule, || {
                    let $einp = $inp;
                    $err
                })
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes rules of different types using AND logic.
///
/// Folds to the left, `a.and(b).and(c)`, so rules run in the order written.
/// Needs [`ValidateExt`](crate::foundation::ValidateExt) in scope.
///
/// ```
/// use rulekit::prelude::*;
///
/// let rule = compose![min(10), max(16)];
/// assert!(rule.validate(&12).is_ok());
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes rules of different types using OR logic.
///
/// Folds to the left, `a.or(b).or(c)`. Each `or` aggregates two branches,
/// so when all of `n > 2` rules fail the error nests: the outer
/// `any_failed` holds the aggregate of the first `n - 1` rules followed by
/// the last rule's failure. Use [`chain_any`](crate::combinators::chain_any)
/// for a flat list. Needs [`ValidateExt`](crate::foundation::ValidateExt)
/// in scope.
///
/// ```
/// use rulekit::prelude::*;
///
/// let rule = any_of![one_of(vec![0]), min(100)];
/// assert!(rule.validate(&0).is_ok());
/// assert!(rule.validate(&150).is_ok());
/// assert!(rule.validate(&50).is_err());
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
