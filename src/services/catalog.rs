use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::db::models::{NewService, Service, UpdateService};
use crate::db::repositories::ServiceRepository;
use crate::error::AppResult;
use crate::services::access::{require_salon_owner, require_service_owner};

pub async fn create_service(
    pool: &PgPool,
    acting_user: Uuid,
    salon_id: Uuid,
    new_service: &NewService,
) -> AppResult<Service> {
    new_service.validate()?;
    require_salon_owner(pool, salon_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    let service = ServiceRepository::create(&mut tx, salon_id, new_service).await?;
    tx.commit().await?;

    info!(service_id = %service.id, %salon_id, "service created");
    Ok(service)
}

pub async fn update_service(
    pool: &PgPool,
    acting_user: Uuid,
    service_id: Uuid,
    update: &UpdateService,
) -> AppResult<Service> {
    update.validate()?;
    require_service_owner(pool, service_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    let service = ServiceRepository::update(&mut tx, service_id, update).await?;
    tx.commit().await?;

    Ok(service)
}

/// Removes a service from the catalog. Its appointments go with it, the
/// same way the salon's other cascading data does.
pub async fn delete_service(pool: &PgPool, acting_user: Uuid, service_id: Uuid) -> AppResult<()> {
    require_service_owner(pool, service_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    ServiceRepository::delete(&mut tx, service_id).await?;
    tx.commit().await?;

    info!(%service_id, "service deleted");
    Ok(())
}

pub async fn list_services(pool: &PgPool, salon_id: Uuid) -> AppResult<Vec<Service>> {
    Ok(ServiceRepository::list_for_salon(pool, salon_id).await?)
}
