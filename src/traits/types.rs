//! Shared domain types.
//!
//! - [`Person`]: the stored record, keyed by email
//! - [`SortKey`]: the closed set of columns the list operation may order by

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A person record.
///
/// `email` is the unique business key; there is no surrogate id. Every other
/// field is optional on the wire: absent keys and explicit `null` decode to
/// the zero value, and zero values are omitted when encoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Display name.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    /// Age in years. Not validated; negative values are stored as given.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero_i64"
    )]
    pub age: i64,
    /// Account balance.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero_f64"
    )]
    pub balance: f64,
    /// Unique email address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Postal address.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub address: String,
}

impl Person {
    /// Create a person with only the email set.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the age.
    #[must_use]
    pub const fn with_age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    /// Set the balance.
    #[must_use]
    pub const fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::float_cmp)]
fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}

/// Column the list operation orders by.
///
/// Each variant maps to a fixed column identifier, so no caller-provided
/// text ever reaches the `ORDER BY` clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Order by `name`.
    Name,
    /// Order by `email`.
    #[default]
    Email,
}

impl SortKey {
    /// The column identifier this key orders by.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Error returned when a string names no [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    /// Exact, case-sensitive match on `name` or `email`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}
