//! Membership rules

use crate::foundation::{Comparable, ValidationError};

crate::validator! {
    /// Validates that a value equals one of an allowed set.
    ///
    /// Members are compared in order and the first match wins. An empty set
    /// rejects every value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulekit::validators::one_of;
    /// use rulekit::foundation::Validate;
    ///
    /// let rule = one_of(vec!["hello", "bar", "foo"]);
    /// assert!(rule.validate(&"bar").is_ok());
    /// assert!(rule.validate(&"helloee").is_err());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub OneOf<T: Comparable> { allowed: Vec<T> } for T;
    rule(self, input) { self.allowed.iter().any(|member| member == input) }
    error(self, input) { ValidationError::not_one_of(input, &self.allowed) }
    fn one_of(allowed: Vec<T>);
}

impl<T: Comparable> FromIterator<T> for OneOf<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
