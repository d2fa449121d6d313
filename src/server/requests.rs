//! Request decoding and validation.
//!
//! Turns raw bodies and query parameters into domain values before any
//! storage call is made. Only `email` is mandatory.

use super::responses::ApiError;
use crate::traits::{Person, SortKey};

/// Query string as decoded key/value pairs, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// First value for `key`. Later repeats of the same key are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Query parameters for `DELETE /app/people`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteParams {
    /// Email of the person to delete.
    pub email: Option<String>,
}

impl DeleteParams {
    /// Pick `email` out of the query pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            email: first_value(pairs, "email"),
        }
    }
}

/// Query parameters for `GET /app/people`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Column to order by: `name` or `email`.
    pub order_by: Option<String>,
}

impl ListParams {
    /// Pick `orderBy` out of the query pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            order_by: first_value(pairs, "orderBy"),
        }
    }
}

/// Decode a JSON body into a [`Person`] and check its mandatory fields.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPayload`] on malformed JSON or an empty email.
pub fn decode_person(body: &[u8]) -> Result<Person, ApiError> {
    let person: Person = serde_json::from_slice(body).map_err(|e| ApiError::InvalidPayload {
        reason: e.to_string(),
    })?;

    validate_person(&person)?;
    Ok(person)
}

/// Check mandatory fields on a person.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPayload`] if `email` is empty.
pub fn validate_person(person: &Person) -> Result<(), ApiError> {
    if person.email.is_empty() {
        return Err(ApiError::InvalidPayload {
            reason: "Missing mandatory field 'email'".into(),
        });
    }

    Ok(())
}

/// Resolve the `orderBy` parameter.
///
/// Absent or empty means [`SortKey::Email`].
///
/// # Errors
///
/// Returns [`ApiError::UnsupportedSortColumn`] for anything other than an
/// exact `name` or `email`.
pub fn parse_sort_key(order_by: Option<&str>) -> Result<SortKey, ApiError> {
    match order_by {
        None | Some("") => Ok(SortKey::default()),
        Some(value) => value
            .parse()
            .map_err(|_| ApiError::UnsupportedSortColumn(value.to_string())),
    }
}

/// Extract the mandatory `email` query parameter.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameter`] if it is absent or empty.
pub fn require_email(email: Option<&str>) -> Result<&str, ApiError> {
    match email {
        Some(email) if !email.is_empty() => Ok(email),
        _ => Err(ApiError::MissingParameter("email")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_decode_full_person() {
        let body = br#"{"name":"John Doe","age":40,"balance":3.5,"email":"john@gmail.com","address":"Main St"}"#;
        let person = decode_person(body).unwrap();
        assert_eq!(
            person,
            Person::new("john@gmail.com")
                .with_name("John Doe")
                .with_age(40)
                .with_balance(3.5)
                .with_address("Main St")
        );
    }

    #[test]
    fn test_decode_null_fields_as_zero() {
        let body = br#"{"name":null,"age":null,"balance":null,"email":"a@b.c","address":null}"#;
        assert_eq!(decode_person(body).unwrap(), Person::new("a@b.c"));
    }

    #[test]
    fn test_decode_lax_fields_accepted() {
        let body = br#"{"name":"","age":-7,"balance":-1e9,"email":"x@y.z","address":""}"#;
        let person = decode_person(body).unwrap();
        assert_eq!(person.age, -7);
        assert!(person.balance < 0.0);
    }

    #[test_case(br#"{"name":"John Doe"}"# ; "missing email")]
    #[test_case(br#"{"name":"John Doe","email":null}"# ; "null email")]
    #[test_case(br#"{"email":""}"# ; "empty email")]
    #[test_case(br#"{"email":"#; "truncated")]
    #[test_case(b"not json" ; "garbage")]
    #[test_case(br#"{"email":"a@b.c","age":"old"}"# ; "wrong type")]
    #[test_case(b"" ; "empty body")]
    fn test_decode_rejects(body: &[u8]) {
        let err = decode_person(body).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPayload { .. }));
        assert_eq!(err.to_string(), "Invalid payload.");
    }

    #[test_case(None, SortKey::Email ; "absent defaults to email")]
    #[test_case(Some(""), SortKey::Email ; "empty defaults to email")]
    #[test_case(Some("name"), SortKey::Name ; "name")]
    #[test_case(Some("email"), SortKey::Email ; "email")]
    fn test_parse_sort_key(input: Option<&str>, expected: SortKey) {
        assert_eq!(parse_sort_key(input).unwrap(), expected);
    }

    #[test_case("age" ; "unlisted column")]
    #[test_case("NAME" ; "upper case")]
    #[test_case("name DESC" ; "trailing clause")]
    fn test_parse_sort_key_rejects(input: &str) {
        let err = parse_sort_key(Some(input)).unwrap_err();
        assert_eq!(err.to_string(), format!("Unsupported sorting column: {input}"));
    }

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_params_take_first_of_repeated_keys() {
        let query = pairs(&[
            ("orderBy", "name"),
            ("email", "a@b.c"),
            ("orderBy", "email"),
            ("email", "x@y.z"),
        ]);
        assert_eq!(ListParams::from_pairs(&query).order_by.as_deref(), Some("name"));
        assert_eq!(DeleteParams::from_pairs(&query).email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_params_absent_keys() {
        let query = pairs(&[("name", "john")]);
        assert_eq!(ListParams::from_pairs(&query), ListParams::default());
        assert_eq!(DeleteParams::from_pairs(&query), DeleteParams::default());
    }

    #[test]
    fn test_require_email() {
        assert_eq!(require_email(Some("john@gmail.com")).unwrap(), "john@gmail.com");
        assert!(matches!(
            require_email(None),
            Err(ApiError::MissingParameter("email"))
        ));
        assert!(matches!(
            require_email(Some("")),
            Err(ApiError::MissingParameter("email"))
        ));
    }
}
