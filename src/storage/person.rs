//! Person storage operations.

#![allow(clippy::missing_errors_doc)]

use sqlx::any::AnyRow;
use sqlx::Row;

use super::core::SqlStore;
use crate::error::StorageError;
use crate::traits::{Person, SortKey};

const INSERT_PERSON: &str =
    "INSERT INTO persons (name, age, balance, email, address) VALUES (?, ?, ?, ?, ?)";

const DELETE_PERSON: &str = "DELETE FROM persons WHERE email = ?";

const SELECT_PERSON: &str =
    "SELECT name, age, balance, email, address FROM persons WHERE email = ?";

const UPDATE_PERSON: &str = "UPDATE persons SET name = ?, age = ?, balance = ?, email = ?, address = ? WHERE email = ?";

/// Precomposed list query for a sort key. Ordering is always descending.
const fn list_query(sort_key: SortKey) -> &'static str {
    match sort_key {
        SortKey::Name => {
            "SELECT name, age, balance, email, address FROM persons ORDER BY name DESC"
        }
        SortKey::Email => {
            "SELECT name, age, balance, email, address FROM persons ORDER BY email DESC"
        }
    }
}

impl SqlStore {
    /// Insert a new person.
    pub async fn insert_person(&self, person: &Person) -> Result<(), StorageError> {
        sqlx::query(INSERT_PERSON)
            .bind(&person.name)
            .bind(person.age)
            .bind(person.balance)
            .bind(&person.email)
            .bind(&person.address)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("INSERT persons", format!("{e}")))?;

        Ok(())
    }

    /// Delete a person by email. Zero matched rows is not an error.
    pub async fn delete_person(&self, email: &str) -> Result<(), StorageError> {
        let result = sqlx::query(DELETE_PERSON)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("DELETE persons", format!("{e}")))?;

        tracing::debug!(email, rows = result.rows_affected(), "Deleted person");
        Ok(())
    }

    /// List all persons, descending by the sort key's column.
    pub async fn list_persons(&self, sort_key: SortKey) -> Result<Vec<Person>, StorageError> {
        let rows = sqlx::query(list_query(sort_key))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT persons", format!("{e}")))?;

        rows.iter().map(person_from_row).collect()
    }

    /// Get a person by email.
    pub async fn get_person(&self, email: &str) -> Result<Person, StorageError> {
        let row = sqlx::query(SELECT_PERSON)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT persons", format!("{e}")))?;

        match row {
            Some(row) => person_from_row(&row),
            None => Err(StorageError::NotFound {
                email: email.to_string(),
            }),
        }
    }

    /// Overwrite the person stored under `email`. Zero matched rows is not
    /// an error.
    pub async fn update_person(&self, email: &str, person: &Person) -> Result<(), StorageError> {
        let result = sqlx::query(UPDATE_PERSON)
            .bind(&person.name)
            .bind(person.age)
            .bind(person.balance)
            .bind(&person.email)
            .bind(&person.address)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("UPDATE persons", format!("{e}")))?;

        tracing::debug!(email, rows = result.rows_affected(), "Updated person");
        Ok(())
    }
}

fn person_from_row(row: &AnyRow) -> Result<Person, StorageError> {
    let decode = |e: sqlx::Error| SqlStore::query_error("decode persons", format!("{e}"));

    Ok(Person {
        name: row.try_get("name").map_err(decode)?,
        age: row.try_get("age").map_err(decode)?,
        balance: row.try_get("balance").map_err(decode)?,
        email: row.try_get("email").map_err(decode)?,
        address: row.try_get("address").map_err(decode)?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::storage::core::tests::test_store;
    use pretty_assertions::assert_eq;

    fn john() -> Person {
        Person::new("john@gmail.com")
            .with_name("John Doe")
            .with_age(31)
            .with_balance(100.25)
            .with_address("12 High St")
    }

    #[test]
    fn test_list_query_orders_descending_by_fixed_column() {
        assert!(list_query(SortKey::Name).ends_with("ORDER BY name DESC"));
        assert!(list_query(SortKey::Email).ends_with("ORDER BY email DESC"));
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = test_store().await;
        store.insert_person(&john()).await.unwrap();

        let fetched = store.get_person("john@gmail.com").await.unwrap();
        assert_eq!(fetched, john());
    }

    #[tokio::test]
    async fn test_insert_email_only() {
        let store = test_store().await;
        store.insert_person(&Person::new("min@mail.com")).await.unwrap();

        let fetched = store.get_person("min@mail.com").await.unwrap();
        assert_eq!(fetched, Person::new("min@mail.com"));
    }

    #[tokio::test]
    async fn test_insert_duplicate_email_fails() {
        let store = test_store().await;
        store.insert_person(&john()).await.unwrap();

        let err = store.insert_person(&john()).await.unwrap_err();
        assert!(matches!(err, StorageError::QueryFailed { query, .. } if query == "INSERT persons"));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = test_store().await;

        let err = store.get_person("ghost@mail.com").await.unwrap_err();
        assert_eq!(
            err,
            StorageError::NotFound {
                email: "ghost@mail.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let store = test_store().await;
        store.insert_person(&john()).await.unwrap();

        store.delete_person("john@gmail.com").await.unwrap();
        assert!(store.get_person("john@gmail.com").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_missing_twice_is_ok() {
        let store = test_store().await;
        assert!(store.delete_person("ghost@mail.com").await.is_ok());
        assert!(store.delete_person("ghost@mail.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_by_email_descending() {
        let store = test_store().await;
        for email in ["b@mail.com", "c@mail.com", "a@mail.com"] {
            store.insert_person(&Person::new(email)).await.unwrap();
        }

        let emails: Vec<String> = store
            .list_persons(SortKey::Email)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.email)
            .collect();
        assert_eq!(emails, vec!["c@mail.com", "b@mail.com", "a@mail.com"]);
    }

    #[tokio::test]
    async fn test_list_by_name_descending() {
        let store = test_store().await;
        store
            .insert_person(&Person::new("1@mail.com").with_name("Alice"))
            .await
            .unwrap();
        store
            .insert_person(&Person::new("2@mail.com").with_name("Carol"))
            .await
            .unwrap();
        store
            .insert_person(&Person::new("3@mail.com").with_name("Bob"))
            .await
            .unwrap();

        let names: Vec<String> = store
            .list_persons(SortKey::Name)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let store = test_store().await;
        assert!(store.list_persons(SortKey::Email).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields_including_email() {
        let store = test_store().await;
        store.insert_person(&john()).await.unwrap();

        let updated = Person::new("johnny@gmail.com").with_name("Johnny");
        store
            .update_person("john@gmail.com", &updated)
            .await
            .unwrap();

        assert!(store.get_person("john@gmail.com").await.is_err());
        assert_eq!(store.get_person("johnny@gmail.com").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_silent() {
        let store = test_store().await;

        let result = store
            .update_person("ghost@mail.com", &Person::new("ghost@mail.com"))
            .await;
        assert!(result.is_ok());
        assert!(store.list_persons(SortKey::Email).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_into_existing_email_fails() {
        let store = test_store().await;
        store.insert_person(&john()).await.unwrap();
        store
            .insert_person(&Person::new("jane@gmail.com"))
            .await
            .unwrap();

        let err = store
            .update_person("jane@gmail.com", &Person::new("john@gmail.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::QueryFailed { query, .. } if query == "UPDATE persons"));
    }
}
