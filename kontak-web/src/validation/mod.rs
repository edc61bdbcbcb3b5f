//! Form validation
//!
//! A [`Validator`] is an ordered chain of independent checks. Each check
//! looks at one field and either passes or yields a [`FieldError`]. Every
//! check runs, and failures come back in declaration order so re-rendered
//! forms list messages deterministically.
//!
//! Format checks are pure predicates ([`FormatRule`]). Uniqueness checks
//! query the store through an injected [`NameLookup`].

mod forms;
mod rules;
mod unique;

pub use forms::*;
pub use rules::FormatRule;
pub use unique::{NameLookup, UniqueCheck};

use async_trait::async_trait;
use kontak_common::Result;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Reads one string field out of a form
pub type Extract<T> = fn(&T) -> &str;

/// A single validation step over form `T`
///
/// `Ok(None)` means the input passed. `Err` is reserved for store faults.
#[async_trait]
pub trait Check<T: Sync>: Send + Sync {
    async fn check(&self, input: &T) -> Result<Option<FieldError>>;
}

/// Format rule applied to one field
pub struct FieldCheck<T> {
    field: &'static str,
    extract: Extract<T>,
    rule: FormatRule,
    message: String,
}

impl<T> FieldCheck<T> {
    pub fn new(
        field: &'static str,
        extract: Extract<T>,
        rule: FormatRule,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field,
            extract,
            rule,
            message: message.into(),
        }
    }
}

#[async_trait]
impl<T: Sync> Check<T> for FieldCheck<T> {
    async fn check(&self, input: &T) -> Result<Option<FieldError>> {
        if self.rule.accepts((self.extract)(input)) {
            Ok(None)
        } else {
            Ok(Some(FieldError::new(self.field, self.message.clone())))
        }
    }
}

/// Ordered chain of checks for form `T`
pub struct Validator<T> {
    checks: Vec<Box<dyn Check<T>>>,
}

impl<T: Sync + 'static> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sync + 'static> Validator<T> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append any check
    pub fn check(mut self, check: impl Check<T> + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Append a format rule on one field
    pub fn field(
        self,
        field: &'static str,
        extract: Extract<T>,
        rule: FormatRule,
        message: impl Into<String>,
    ) -> Self {
        self.check(FieldCheck::new(field, extract, rule, message))
    }

    /// Append a uniqueness rule on one field
    ///
    /// `own_id` names the record being edited so it never collides with itself.
    pub fn unique(
        self,
        field: &'static str,
        extract: Extract<T>,
        own_id: fn(&T) -> Option<Uuid>,
        lookup: Arc<dyn NameLookup>,
        message: impl Into<String>,
    ) -> Self {
        self.check(UniqueCheck::new(field, extract, own_id, lookup, message))
    }

    /// Run every check in declaration order and collect the failures
    pub async fn validate(&self, input: &T) -> Result<Vec<FieldError>> {
        let mut errors = Vec::new();
        for check in &self.checks {
            if let Some(error) = check.check(input).await? {
                errors.push(error);
            }
        }
        Ok(errors)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Pair {
        a: String,
        b: String,
    }

    fn pair_a(p: &Pair) -> &str {
        &p.a
    }

    fn pair_b(p: &Pair) -> &str {
        &p.b
    }

    fn validator() -> Validator<Pair> {
        Validator::new()
            .field("b", pair_b, FormatRule::MinLength(3), "b too short")
            .field("a", pair_a, FormatRule::Required, "a required")
            .field("a", pair_a, FormatRule::MinLength(2), "a too short")
    }

    #[tokio::test]
    async fn test_all_pass() {
        let input = Pair {
            a: "ok".to_string(),
            b: "fine".to_string(),
        };
        assert!(validator().validate(&input).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failures_in_declaration_order() {
        let errors = validator().validate(&Pair::default()).await.unwrap();

        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["b too short", "a required", "a too short"]);
        assert_eq!(errors[0].field, "b");
    }

    #[tokio::test]
    async fn test_one_field_failing_does_not_stop_others() {
        let input = Pair {
            a: "fine".to_string(),
            b: "x".to_string(),
        };
        let errors = validator().validate(&input).await.unwrap();
        assert_eq!(errors, vec![FieldError::new("b", "b too short")]);
    }

    #[test]
    fn test_len() {
        assert_eq!(validator().len(), 3);
        assert!(Validator::<Pair>::new().is_empty());
    }
}
