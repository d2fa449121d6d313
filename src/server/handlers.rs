//! HTTP handlers for the person endpoints.
//!
//! Each handler parses its input, calls the store once, and shapes the
//! result. A parse failure returns before the store is touched.

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

use super::requests::{
    decode_person, parse_sort_key, require_email, DeleteParams, ListParams, QueryPairs,
};
use super::responses::{ApiError, Envelope, CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
use super::types::AppState;
use crate::traits::Person;

fn query_pairs(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<QueryPairs, ApiError> {
    query
        .map(|Query(pairs)| pairs)
        .map_err(|e| ApiError::InvalidQuery {
            reason: e.body_text(),
        })
}

fn path_email(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(email)| email)
        .map_err(|e| ApiError::InvalidPath {
            reason: e.body_text(),
        })
}

/// `POST /app/people`
pub async fn create_person(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope>, ApiError> {
    let person = decode_person(&body)?;
    state.store.create(&person).await?;

    tracing::info!(email = %person.email, "Created person");
    Ok(Json(Envelope::message(CREATED_MESSAGE)))
}

/// `DELETE /app/people?email=E`
pub async fn delete_person(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let params = DeleteParams::from_pairs(&query_pairs(query)?);
    let email = require_email(params.email.as_deref())?;
    state.store.delete(email).await?;

    tracing::info!(email, "Deleted person");
    Ok(Json(Envelope::message(DELETED_MESSAGE)))
}

/// `GET /app/people?orderBy=name|email`
///
/// Returns the store's ordering unchanged.
pub async fn list_persons(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let params = ListParams::from_pairs(&query_pairs(query)?);
    let sort_key = parse_sort_key(params.order_by.as_deref())?;
    let persons = state.store.list(sort_key).await?;

    Ok(Json(persons))
}

/// `GET /app/people/{email}`
pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Person>, ApiError> {
    let email = path_email(path)?;
    let person = state.store.retrieve(&email).await?;
    Ok(Json(person))
}

/// `PUT /app/people/{email}`
///
/// The path email selects the row; the body may carry a different email.
pub async fn update_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Envelope>, ApiError> {
    let email = path_email(path)?;
    let person = decode_person(&body)?;
    state.store.update(&email, &person).await?;

    tracing::info!(email = %email, new_email = %person.email, "Updated person");
    Ok(Json(Envelope::message(UPDATED_MESSAGE)))
}
