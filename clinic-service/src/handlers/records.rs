use crate::ident;
use crate::models::{record, Record, Resource};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use serde_json::json;
use service_core::error::AppError;

/// Fetch every record in the collection. Order is the store's natural
/// iteration order and is not guaranteed stable.
pub async fn list_records(
    State(state): State<AppState>,
    Extension(resource): Extension<Resource>,
) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .records(resource)
        .find(None, None)
        .await
        .map_err(AppError::from)?;

    let mut records = Vec::new();
    while let Some(rec) = cursor.try_next().await.map_err(AppError::from)? {
        records.push(record::into_json(rec));
    }

    Ok(Json(records))
}

/// Insert the body verbatim and report the identifier the store assigned.
/// The document's shape is not validated.
pub async fn create_record(
    State(state): State<AppState>,
    Extension(resource): Extension<Resource>,
    Json(new_record): Json<Record>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .db
        .records(resource)
        .insert_one(&new_record, None)
        .await
        .map_err(|e| {
            tracing::error!(
                collection = resource.collection_name(),
                "Failed to insert record: {}",
                e
            );
            AppError::from(e)
        })?;

    // The store normally assigns an ObjectId; a client-supplied _id is
    // inserted verbatim and reported back as stored.
    let assigned_id = match result.inserted_id.as_object_id() {
        Some(oid) => json!(oid.to_hex()),
        None => result.inserted_id.into_relaxed_extjson(),
    };

    tracing::info!(
        collection = resource.collection_name(),
        id = %assigned_id,
        "Record created"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": resource.created_message(),
            (resource.id_key()): assigned_id,
        })),
    ))
}

/// Partial merge: fields present in the patch overwrite, fields absent are
/// untouched. The identifier is stripped before the store call and the id
/// itself is validated before any round-trip.
pub async fn update_record(
    State(state): State<AppState>,
    Extension(resource): Extension<Resource>,
    Path(id): Path<String>,
    Json(mut patch): Json<Record>,
) -> Result<impl IntoResponse, AppError> {
    let oid = ident::parse(&id)?;

    // Identifiers are immutable.
    patch.remove("_id");

    let result = state
        .db
        .records(resource)
        .update_one(doc! { "_id": oid }, doc! { "$set": patch }, None)
        .await
        .map_err(|e| {
            tracing::error!(
                collection = resource.collection_name(),
                "Failed to update record {}: {}",
                id,
                e
            );
            AppError::from(e)
        })?;

    if result.matched_count == 1 {
        Ok(Json(json!({
            "message": format!("{} updated successfully", resource.singular())
        })))
    } else {
        Err(AppError::NotFound(anyhow::anyhow!(
            "{} not found",
            resource.singular()
        )))
    }
}

/// Remove at most one record.
pub async fn delete_record(
    State(state): State<AppState>,
    Extension(resource): Extension<Resource>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let oid = ident::parse(&id)?;

    let result = state
        .db
        .records(resource)
        .delete_one(doc! { "_id": oid }, None)
        .await
        .map_err(|e| {
            tracing::error!(
                collection = resource.collection_name(),
                "Failed to delete record {}: {}",
                id,
                e
            );
            AppError::from(e)
        })?;

    if result.deleted_count == 1 {
        Ok(Json(json!({
            "message": format!("{} deleted successfully", resource.singular())
        })))
    } else {
        Err(AppError::NotFound(anyhow::anyhow!(
            "{} not found",
            resource.singular()
        )))
    }
}
