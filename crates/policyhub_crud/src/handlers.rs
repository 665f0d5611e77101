// --- File: crates/policyhub_crud/src/handlers.rs ---
//! Pass-through CRUD over one repository-backed table.
//!
//! Reads of an unknown id answer `null`. Update and delete answer 200 whether
//! or not a row matched.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use policyhub_common::{json_rejection, validation_error, PolicyHubError};
use policyhub_db::Repository;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, info};

/// A row type that can travel through the CRUD endpoints as JSON.
pub trait Record: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {}

impl<T> Record for T where T: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {}

pub struct CrudState<R> {
    pub repository: R,
    /// Singular noun used in log lines, e.g. "member"
    pub label: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatedResponse {
    pub id: i64,
}

fn record_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, PolicyHubError> {
    id.map(|Path(id)| id)
        .map_err(|e| validation_error(e.body_text()))
}

pub async fn list_handler<T, R>(
    State(state): State<Arc<CrudState<R>>>,
) -> Result<Json<Vec<T>>, PolicyHubError>
where
    T: Record,
    R: Repository<T> + 'static,
{
    let records = state.repository.find_all().await?;
    debug!("Listing {} {} rows", records.len(), state.label);
    Ok(Json(records))
}

pub async fn read_handler<T, R>(
    State(state): State<Arc<CrudState<R>>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Option<T>>, PolicyHubError>
where
    T: Record,
    R: Repository<T> + 'static,
{
    let id = record_id(id)?;
    Ok(Json(state.repository.read(id).await?))
}

pub async fn create_handler<T, R>(
    State(state): State<Arc<CrudState<R>>>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<CreatedResponse>, PolicyHubError>
where
    T: Record,
    R: Repository<T> + 'static,
{
    let Json(record) = payload.map_err(json_rejection)?;
    debug!("Creating {}: {:?}", state.label, record);
    let id = state.repository.create(record).await?;
    info!("Created {} {}", state.label, id);
    Ok(Json(CreatedResponse { id }))
}

pub async fn update_handler<T, R>(
    State(state): State<Arc<CrudState<R>>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<StatusCode, PolicyHubError>
where
    T: Record,
    R: Repository<T> + 'static,
{
    let id = record_id(id)?;
    let Json(record) = payload.map_err(json_rejection)?;
    let updated = state.repository.update(id, record).await?;
    debug!("Update of {} {} touched {} rows", state.label, id, updated);
    Ok(StatusCode::OK)
}

pub async fn delete_handler<T, R>(
    State(state): State<Arc<CrudState<R>>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, PolicyHubError>
where
    T: Record,
    R: Repository<T> + 'static,
{
    let id = record_id(id)?;
    let deleted = state.repository.delete(id).await?;
    debug!("Delete of {} {} touched {} rows", state.label, id, deleted);
    Ok(StatusCode::OK)
}
