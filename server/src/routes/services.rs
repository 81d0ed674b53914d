//! Catalog REST routes.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::ServiceRecord;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AdminAuth;
use crate::services::catalog::{self, CatalogError, NewService, ServicePatch};
use crate::state::AppState;

fn default_icon() -> String {
    "spark".to_owned()
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize)]
pub struct CreateServiceBody {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl CreateServiceBody {
    fn into_draft(self) -> NewService {
        NewService {
            slug: self.slug,
            title: self.title,
            description: self.description,
            icon: self.icon,
            active: self.active,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct UpdateServiceBody {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl UpdateServiceBody {
    fn into_patch(self) -> ServicePatch {
        ServicePatch {
            slug: self.slug,
            title: self.title,
            description: self.description,
            icon: self.icon,
            active: self.active,
            sort_order: self.sort_order,
        }
    }
}

pub(crate) fn catalog_error_to_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::InvalidSlug(_) => StatusCode::BAD_REQUEST,
        CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_and_map(err: &CatalogError) -> StatusCode {
    let status = catalog_error_to_status(err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "catalog query failed");
    }
    status
}

/// `GET /api/services` — the public read: active rows in display order.
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceRecord>>, StatusCode> {
    let rows = catalog::list_active(&state.pool)
        .await
        .map_err(|e| log_and_map(&e))?;

    Ok(Json(rows.into_iter().map(catalog::ServiceRow::into_record).collect()))
}

/// `GET /api/services/all` — admin listing, inactive rows included.
pub async fn list_all_services(
    State(state): State<AppState>,
    _admin: AdminAuth,
) -> Result<Json<Vec<ServiceRecord>>, StatusCode> {
    let rows = catalog::list_all(&state.pool)
        .await
        .map_err(|e| log_and_map(&e))?;

    Ok(Json(rows.into_iter().map(catalog::ServiceRow::into_record).collect()))
}

/// `POST /api/services` — create a service row.
pub async fn create_service(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(body): Json<CreateServiceBody>,
) -> Result<(StatusCode, Json<ServiceRecord>), StatusCode> {
    let row = catalog::create_service(&state.pool, body.into_draft())
        .await
        .map_err(|e| log_and_map(&e))?;

    Ok((StatusCode::CREATED, Json(row.into_record())))
}

/// `PATCH /api/services/:id` — partial update of one service row.
pub async fn update_service(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateServiceBody>,
) -> Result<Json<ServiceRecord>, StatusCode> {
    let row = catalog::update_service(&state.pool, id, body.into_patch())
        .await
        .map_err(|e| log_and_map(&e))?;

    Ok(Json(row.into_record()))
}

/// `DELETE /api/services/:id` — remove one service row.
pub async fn delete_service(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    catalog::delete_service(&state.pool, id)
        .await
        .map_err(|e| log_and_map(&e))?;

    Ok(Json(serde_json::json!({ "ok": true })))
}
