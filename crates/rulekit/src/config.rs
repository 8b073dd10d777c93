//! Pattern compilation settings
//!
//! [`PatternConfig`] is plain data: it can be built in code or loaded from
//! any serde format alongside the rest of an application's settings.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Default compiled-program size limit for patterns, 10 MiB.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Options applied when a [`Pattern`](crate::validators::Pattern) compiles
/// its regular expression.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use rulekit::config::PatternConfig;
///
/// let config: PatternConfig = serde_json::from_str(r#"{ "case_insensitive": true }"#).unwrap();
/// assert!(config.case_insensitive);
/// assert!(!config.multi_line);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Match letters regardless of case.
    pub case_insensitive: bool,

    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,

    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,

    /// Upper bound on the compiled program size, in bytes.
    pub size_limit: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

impl PatternConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets case-insensitive matching.
    #[must_use = "builder methods must be chained or built"]
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Sets multi-line mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Lets `.` match newlines.
    #[must_use = "builder methods must be chained or built"]
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Sets the compiled program size limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = bytes;
        self
    }

    /// Compiles `pattern` with these options.
    pub fn build(&self, pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .size_limit(self.size_limit)
            .build()
    }
}
