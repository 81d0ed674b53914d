//! Catalog service — queries against the `services` table.
//!
//! DESIGN
//! ======
//! The public site only ever reads the active slice, already filtered and
//! ordered by the database. The admin surface sees every row and performs
//! the writes. Ordering ties break on `id` so repeated reads of the same
//! data return the same sequence.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use records::ServiceRecord;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("service not found: {0}")]
    NotFound(Uuid),
    #[error("invalid slug: {0}")]
    InvalidSlug(#[from] records::SlugError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row from the `services` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ServiceRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub active: bool,
    pub sort_order: i32,
}

impl ServiceRow {
    /// Convert a stored row into the shared wire record.
    #[must_use]
    pub fn into_record(self) -> ServiceRecord {
        ServiceRecord {
            id: self.id.to_string(),
            slug: self.slug,
            title: self.title,
            description: self.description,
            icon: self.icon,
            active: self.active,
            sort_order: self.sort_order,
        }
    }
}

/// Fields for a new service row.
#[derive(Debug, Clone)]
pub struct NewService {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub active: bool,
    pub sort_order: i32,
}

/// Partial update for an existing service row. `None` keeps the stored
/// value.
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// List the rows the public site displays: active only, ordered by
/// `sort_order`, ties by `id`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_active(pool: &PgPool) -> Result<Vec<ServiceRow>, CatalogError> {
    let rows = sqlx::query_as::<_, ServiceRow>(
        "SELECT id, slug, title, description, icon, active, sort_order
         FROM services
         WHERE active = TRUE
         ORDER BY sort_order ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// List every row, inactive included, for the admin surface.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<ServiceRow>, CatalogError> {
    let rows = sqlx::query_as::<_, ServiceRow>(
        "SELECT id, slug, title, description, icon, active, sort_order
         FROM services
         ORDER BY sort_order ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a new service row.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidSlug`] for a malformed slug or a database
/// error if the insert fails.
pub async fn create_service(pool: &PgPool, draft: NewService) -> Result<ServiceRow, CatalogError> {
    let slug = records::parse_slug(&draft.slug)?;

    let row = sqlx::query_as::<_, ServiceRow>(
        "INSERT INTO services (slug, title, description, icon, active, sort_order)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, slug, title, description, icon, active, sort_order",
    )
    .bind(slug)
    .bind(draft.title)
    .bind(draft.description)
    .bind(draft.icon)
    .bind(draft.active)
    .bind(draft.sort_order)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Apply a partial update to one service row.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] if the id does not exist,
/// [`CatalogError::InvalidSlug`] for a malformed slug, or a database error
/// if the update fails.
pub async fn update_service(
    pool: &PgPool,
    id: Uuid,
    patch: ServicePatch,
) -> Result<ServiceRow, CatalogError> {
    let slug = match patch.slug.as_deref() {
        Some(raw) => Some(records::parse_slug(raw)?),
        None => None,
    };

    let row = sqlx::query_as::<_, ServiceRow>(
        "UPDATE services SET
             slug = COALESCE($2, slug),
             title = COALESCE($3, title),
             description = COALESCE($4, description),
             icon = COALESCE($5, icon),
             active = COALESCE($6, active),
             sort_order = COALESCE($7, sort_order),
             updated_at = now()
         WHERE id = $1
         RETURNING id, slug, title, description, icon, active, sort_order",
    )
    .bind(id)
    .bind(slug)
    .bind(patch.title)
    .bind(patch.description)
    .bind(patch.icon)
    .bind(patch.active)
    .bind(patch.sort_order)
    .fetch_optional(pool)
    .await?;

    row.ok_or(CatalogError::NotFound(id))
}

/// Delete one service row.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] if the id does not exist or a database
/// error if the delete fails.
pub async fn delete_service(pool: &PgPool, id: Uuid) -> Result<(), CatalogError> {
    let result = sqlx::query("DELETE FROM services WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::NotFound(id));
    }
    Ok(())
}
