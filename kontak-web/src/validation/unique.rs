//! Uniqueness rule backed by a store lookup

use async_trait::async_trait;
use kontak_common::Result;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::{Check, Extract, FieldError};

/// Store capability needed by uniqueness checks
#[async_trait]
pub trait NameLookup: Send + Sync {
    /// Surrogate id of the record currently holding `name`, if any
    async fn find_id_by_name(&self, name: &str) -> Result<Option<Uuid>>;
}

/// Rejects a value already held by a *different* record
///
/// On update the form carries the edited record's id; a match on that same
/// id is the record itself and passes.
pub struct UniqueCheck<T> {
    field: &'static str,
    extract: Extract<T>,
    own_id: fn(&T) -> Option<Uuid>,
    lookup: Arc<dyn NameLookup>,
    message: String,
}

impl<T> UniqueCheck<T> {
    pub fn new(
        field: &'static str,
        extract: Extract<T>,
        own_id: fn(&T) -> Option<Uuid>,
        lookup: Arc<dyn NameLookup>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field,
            extract,
            own_id,
            lookup,
            message: message.into(),
        }
    }
}

#[async_trait]
impl<T: Sync> Check<T> for UniqueCheck<T> {
    async fn check(&self, input: &T) -> Result<Option<FieldError>> {
        let value = (self.extract)(input);
        let holder = self.lookup.find_id_by_name(value).await?;

        match holder {
            Some(existing) if Some(existing) != (self.own_id)(input) => {
                debug!("Duplicate {} '{}' held by {}", self.field, value, existing);
                Ok(Some(FieldError::new(self.field, self.message.clone())))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontak_common::Error;
    use std::collections::HashMap;

    struct FakeNames(HashMap<String, Uuid>);

    #[async_trait]
    impl NameLookup for FakeNames {
        async fn find_id_by_name(&self, name: &str) -> Result<Option<Uuid>> {
            Ok(self.0.get(name).copied())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl NameLookup for BrokenStore {
        async fn find_id_by_name(&self, _name: &str) -> Result<Option<Uuid>> {
            Err(Error::Internal("store offline".to_string()))
        }
    }

    struct Named {
        id: Option<Uuid>,
        name: String,
    }

    fn name_of(n: &Named) -> &str {
        &n.name
    }

    fn id_of(n: &Named) -> Option<Uuid> {
        n.id
    }

    fn check_with(lookup: Arc<dyn NameLookup>) -> UniqueCheck<Named> {
        UniqueCheck::new("name", name_of, id_of, lookup, "Name is already taken!")
    }

    fn alice_store(alice: Uuid) -> Arc<dyn NameLookup> {
        Arc::new(FakeNames(HashMap::from([("Alice".to_string(), alice)])))
    }

    #[tokio::test]
    async fn test_free_name_passes() {
        let check = check_with(alice_store(Uuid::new_v4()));
        let input = Named {
            id: None,
            name: "Bob".to_string(),
        };
        assert_eq!(check.check(&input).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_taken_name_fails_on_create() {
        let check = check_with(alice_store(Uuid::new_v4()));
        let input = Named {
            id: None,
            name: "Alice".to_string(),
        };
        assert_eq!(
            check.check(&input).await.unwrap(),
            Some(FieldError::new("name", "Name is already taken!"))
        );
    }

    #[tokio::test]
    async fn test_own_name_passes_on_update() {
        let alice = Uuid::new_v4();
        let check = check_with(alice_store(alice));
        let input = Named {
            id: Some(alice),
            name: "Alice".to_string(),
        };
        assert_eq!(check.check(&input).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_other_records_name_fails_on_update() {
        let check = check_with(alice_store(Uuid::new_v4()));
        let input = Named {
            id: Some(Uuid::new_v4()),
            name: "Alice".to_string(),
        };
        assert!(check.check(&input).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_store_fault_propagates() {
        let check = check_with(Arc::new(BrokenStore));
        let input = Named {
            id: None,
            name: "Alice".to_string(),
        };
        assert!(check.check(&input).await.is_err());
    }
}
