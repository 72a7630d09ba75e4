//! Base repository trait for persistence operations.
//!
//! Entity repositories extend `Repository<T, ID>` with their own query
//! methods instead of redeclaring the CRUD surface:
//!
//! ```ignore
//! #[async_trait]
//! pub trait FighterRepository: Repository<Fighter, FighterId> {
//!     async fn find_all(&self) -> Result<Vec<Fighter>, DomainError>;
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::DomainError;

/// Base trait for entity repositories.
///
/// All methods return `DomainError` so adapters translate their own
/// failures (lock poisoning, I/O, driver errors) into the shared vocabulary.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Finds an entity by its identifier.
    ///
    /// Returns `Ok(None)` if it doesn't exist; `Err` only for storage failures.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, DomainError>;

    /// Persists a new entity.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if an entity with the same id already exists
    async fn save(&self, entity: &T) -> Result<(), DomainError>;

    /// Replaces an existing entity.
    ///
    /// # Errors
    ///
    /// - a not-found code if the entity doesn't exist
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Deletes an entity by its identifier.
    ///
    /// # Errors
    ///
    /// - a not-found code if the entity doesn't exist
    async fn delete(&self, id: &ID) -> Result<(), DomainError>;

    /// Checks if an entity with the given id exists.
    async fn exists(&self, id: &ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    struct NoteRepo {
        data: Mutex<HashMap<String, Note>>,
    }

    impl NoteRepo {
        fn new() -> Self {
            Self {
                data: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl Repository<Note, String> for NoteRepo {
        async fn find_by_id(&self, id: &String) -> Result<Option<Note>, DomainError> {
            Ok(self.data.lock().unwrap().get(id).cloned())
        }

        async fn save(&self, entity: &Note) -> Result<(), DomainError> {
            let mut data = self.data.lock().unwrap();
            if data.contains_key(&entity.id) {
                return Err(DomainError::new(ErrorCode::DuplicateId, "exists"));
            }
            data.insert(entity.id.clone(), entity.clone());
            Ok(())
        }

        async fn update(&self, entity: &Note) -> Result<(), DomainError> {
            self.data
                .lock()
                .unwrap()
                .insert(entity.id.clone(), entity.clone());
            Ok(())
        }

        async fn delete(&self, id: &String) -> Result<(), DomainError> {
            self.data.lock().unwrap().remove(id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn exists_default_uses_find_by_id() {
        let repo = NoteRepo::new();
        let note = Note {
            id: "n1".to_string(),
            text: "jab".to_string(),
        };
        repo.save(&note).await.unwrap();

        assert!(repo.exists(&"n1".to_string()).await.unwrap());
        assert!(!repo.exists(&"n2".to_string()).await.unwrap());
    }

    #[tokio::test]
    async fn exists_reflects_deletion() {
        let repo = NoteRepo::new();
        let note = Note {
            id: "n1".to_string(),
            text: "cross".to_string(),
        };
        repo.save(&note).await.unwrap();
        repo.delete(&note.id).await.unwrap();

        assert!(!repo.exists(&note.id).await.unwrap());
    }

    #[test]
    fn repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn Repository<Note, String>) {}
    }
}
