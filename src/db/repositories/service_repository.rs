use sqlx::{PgExecutor, Postgres, Transaction};
use uuid::Uuid;

use crate::db::models::{NewService, Service, UpdateService};
use crate::db::DatabaseError;

pub struct ServiceRepository;

impl ServiceRepository {
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        salon_id: Uuid,
        new_service: &NewService,
    ) -> Result<Service, DatabaseError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (id, salon_id, name, description, price, duration_minutes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, salon_id, name, description, price, duration_minutes
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(salon_id)
        .bind(&new_service.name)
        .bind(&new_service.description)
        .bind(new_service.price)
        .bind(new_service.duration_minutes)
        .fetch_one(&mut **tx)
        .await?;

        Ok(service)
    }

    pub async fn get(
        executor: impl PgExecutor<'_>,
        service_id: Uuid,
    ) -> Result<Option<Service>, DatabaseError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, salon_id, name, description, price, duration_minutes
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(service_id)
        .fetch_optional(executor)
        .await?;

        Ok(service)
    }

    pub async fn list_for_salon(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
    ) -> Result<Vec<Service>, DatabaseError> {
        let services = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, salon_id, name, description, price, duration_minutes
            FROM services
            WHERE salon_id = $1
            ORDER BY name
            "#,
        )
        .bind(salon_id)
        .fetch_all(executor)
        .await?;

        Ok(services)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Postgres>,
        service_id: Uuid,
        update: &UpdateService,
    ) -> Result<Service, DatabaseError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET
                name = COALESCE($1, name),
                description = COALESCE($2, description),
                price = COALESCE($3, price),
                duration_minutes = COALESCE($4, duration_minutes)
            WHERE id = $5
            RETURNING id, salon_id, name, description, price, duration_minutes
            "#,
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.price)
        .bind(update.duration_minutes)
        .bind(service_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(service)
    }

    pub async fn delete(
        tx: &mut Transaction<'_, Postgres>,
        service_id: Uuid,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(service_id)
            .execute(&mut **tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound);
        }
        Ok(())
    }
}
