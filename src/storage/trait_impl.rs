//! `PersonStore` implementation for `SqlStore`.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::{Person, PersonStore, SortKey};

use super::core::SqlStore;

#[async_trait]
impl PersonStore for SqlStore {
    async fn create(&self, person: &Person) -> Result<(), StorageError> {
        self.insert_person(person).await
    }

    async fn delete(&self, email: &str) -> Result<(), StorageError> {
        self.delete_person(email).await
    }

    async fn list(&self, sort_key: SortKey) -> Result<Vec<Person>, StorageError> {
        self.list_persons(sort_key).await
    }

    async fn retrieve(&self, email: &str) -> Result<Person, StorageError> {
        self.get_person(email).await
    }

    async fn update(&self, email: &str, person: &Person) -> Result<(), StorageError> {
        self.update_person(email, person).await
    }
}
