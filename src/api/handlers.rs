//! Request handlers.
//!
//! The CRUD handlers are generic over the record type and its client, so every collection is
//! served by the same six functions. Reads return the bare record or array; writes wrap the
//! record in a `{message, data}` envelope.

use super::error::ApiError;
use crate::clients::ProductClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{Brand, BrandId, Category, CategoryId, Movie, Product, User};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::str::FromStr;

/// A record type served over HTTP.
pub trait Resource: ActorEntity + Serialize {
    /// Singular name used in response messages.
    const LABEL: &'static str;
}

impl Resource for Brand {
    const LABEL: &'static str = "Brand";
}

impl Resource for Category {
    const LABEL: &'static str = "Category";
}

impl Resource for Product {
    const LABEL: &'static str = "Product";
}

impl Resource for User {
    const LABEL: &'static str = "User";
}

impl Resource for Movie {
    const LABEL: &'static str = "Movie";
}

/// Response body of every write.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

fn envelope<T: Resource>(action: &str, data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        message: format!("{} {}", T::LABEL, action),
        data,
    })
}

fn not_found(label: &str, raw: &str) -> ApiError {
    ApiError::NotFound(format!("{} not found: {}", label, raw))
}

// An id that does not parse cannot name a record.
fn parse_id<T>(raw: &str) -> Result<T::Id, ApiError>
where
    T: Resource,
    T::Id: FromStr,
{
    raw.parse().map_err(|_| not_found(T::LABEL, raw))
}

pub async fn root() -> &'static str {
    "Welcome to the catalog store API"
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list<T, C>(State(client): State<C>) -> Result<Json<Vec<T>>, ApiError>
where
    T: Resource,
    C: ActorClient<T> + Clone + 'static,
    ApiError: From<C::Error>,
{
    Ok(Json(client.list().await?))
}

pub async fn get_one<T, C>(
    State(client): State<C>,
    Path(raw): Path<String>,
) -> Result<Json<T>, ApiError>
where
    T: Resource,
    T::Id: FromStr,
    C: ActorClient<T> + Clone + 'static,
    ApiError: From<C::Error>,
{
    let id = parse_id::<T>(&raw)?;
    client
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(T::LABEL, &raw))
}

pub async fn create<T, C>(
    State(client): State<C>,
    payload: Result<Json<T::Create>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<T>>), ApiError>
where
    T: Resource,
    T::Create: DeserializeOwned,
    C: ActorClient<T> + Clone + 'static,
    ApiError: From<C::Error>,
{
    let Json(params) = payload?;
    let record = client.create(params).await?;
    Ok((StatusCode::CREATED, envelope("created", record)))
}

/// `PUT`: every required field must be supplied.
pub async fn update<T, C>(
    State(client): State<C>,
    Path(raw): Path<String>,
    payload: Result<Json<T::Update>, JsonRejection>,
) -> Result<Json<Envelope<T>>, ApiError>
where
    T: Resource,
    T::Id: FromStr,
    T::Update: DeserializeOwned,
    C: ActorClient<T> + Clone + 'static,
    ApiError: From<C::Error>,
{
    let id = parse_id::<T>(&raw)?;
    let Json(changes) = payload?;
    let record = client.update(id, changes).await?;
    Ok(envelope("updated", record))
}

/// `PATCH`: only the supplied fields change.
pub async fn patch<T, C>(
    State(client): State<C>,
    Path(raw): Path<String>,
    payload: Result<Json<T::Update>, JsonRejection>,
) -> Result<Json<Envelope<T>>, ApiError>
where
    T: Resource,
    T::Id: FromStr,
    T::Update: DeserializeOwned,
    C: ActorClient<T> + Clone + 'static,
    ApiError: From<C::Error>,
{
    let id = parse_id::<T>(&raw)?;
    let Json(changes) = payload?;
    let record = client.patch(id, changes).await?;
    Ok(envelope("partially updated", record))
}

pub async fn delete<T, C>(
    State(client): State<C>,
    Path(raw): Path<String>,
) -> Result<Json<Envelope<T>>, ApiError>
where
    T: Resource,
    T::Id: FromStr,
    C: ActorClient<T> + Clone + 'static,
    ApiError: From<C::Error>,
{
    let id = parse_id::<T>(&raw)?;
    let record = client.delete(id).await?;
    Ok(envelope("deleted", record))
}

pub async fn products_by_category(
    State(client): State<ProductClient>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let category_id =
        CategoryId::from_str(&raw).map_err(|_| not_found(Category::LABEL, &raw))?;
    Ok(Json(client.list_by_category(category_id).await?))
}

pub async fn products_by_brand(
    State(client): State<ProductClient>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let brand_id = BrandId::from_str(&raw).map_err(|_| not_found(Brand::LABEL, &raw))?;
    Ok(Json(client.list_by_brand(brand_id).await?))
}
