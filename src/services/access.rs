use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{Salon, Service};
use crate::db::repositories::{SalonRepository, ServiceRepository};
use crate::error::{AppError, AppResult};

/// Resolves the salon and checks that `acting_user` owns it. Callers run
/// this before any owner-side operation.
pub async fn require_salon_owner(
    pool: &PgPool,
    salon_id: Uuid,
    acting_user: Uuid,
) -> AppResult<Salon> {
    let salon = SalonRepository::get_by_id(pool, salon_id)
        .await?
        .ok_or_else(|| AppError::NotFound("salon".into()))?;

    if salon.owner_user_id != acting_user {
        return Err(AppError::Forbidden("not the owner of this salon".into()));
    }

    Ok(salon)
}

/// Resolves a service together with its salon, requiring ownership. Keeps
/// one owner from ever touching another salon's catalog.
pub async fn require_service_owner(
    pool: &PgPool,
    service_id: Uuid,
    acting_user: Uuid,
) -> AppResult<(Salon, Service)> {
    let service = ServiceRepository::get(pool, service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("service".into()))?;

    let salon = require_salon_owner(pool, service.salon_id, acting_user).await?;

    Ok((salon, service))
}
