//! Analysis run options
//!
//! One explicit options value per analysis run, passed into every entry
//! point. There is no ambient global state: two runs over different
//! programs can live in the same process with independent options.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StratumError};

/// Canonical name of the thread class used by the escape root rule.
pub const DEFAULT_THREAD_CLASS: &str = "java.lang.Thread";

/// What the translator does with a binary operator it cannot classify.
///
/// The statement itself is always abandoned; the policy only decides
/// whether the rest of the method is still translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedOperatorPolicy {
    /// Record the statement as skipped and continue the method (default)
    SkipStatement,

    /// Abort translation of the enclosing method
    AbortMethod,
}

impl Default for UnresolvedOperatorPolicy {
    fn default() -> Self {
        UnresolvedOperatorPolicy::SkipStatement
    }
}

/// Options for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Canonical name of the class whose constructor receivers seed the
    /// thread-spawn escape rule
    pub thread_class: String,

    /// Continuation policy for unresolvable binary operators
    pub unresolved_operator_policy: UnresolvedOperatorPolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            thread_class: DEFAULT_THREAD_CLASS.to_string(),
            unresolved_operator_policy: UnresolvedOperatorPolicy::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: override the thread class name
    pub fn with_thread_class(mut self, name: impl Into<String>) -> Self {
        self.thread_class = name.into();
        self
    }

    /// Builder: override the unresolved-operator policy
    pub fn with_unresolved_operator_policy(mut self, policy: UnresolvedOperatorPolicy) -> Self {
        self.unresolved_operator_policy = policy;
        self
    }

    /// Validate option values
    pub fn validate(&self) -> Result<()> {
        if self.thread_class.is_empty() {
            return Err(StratumError::config("thread_class must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = AnalysisOptions::default();
        assert_eq!(options.thread_class, "java.lang.Thread");
        assert_eq!(
            options.unresolved_operator_policy,
            UnresolvedOperatorPolicy::SkipStatement
        );
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = AnalysisOptions::new()
            .with_thread_class("my.runtime.Task")
            .with_unresolved_operator_policy(UnresolvedOperatorPolicy::AbortMethod);
        assert_eq!(options.thread_class, "my.runtime.Task");
        assert_eq!(
            options.unresolved_operator_policy,
            UnresolvedOperatorPolicy::AbortMethod
        );
    }

    #[test]
    fn test_validate_rejects_empty_thread_class() {
        let options = AnalysisOptions::new().with_thread_class("");
        assert!(options.validate().is_err());
    }
}
