use sqlx::{PgExecutor, Postgres, Transaction};
use uuid::Uuid;

use crate::db::models::{NewSalon, Salon, UpdateSalon};
use crate::db::DatabaseError;

pub struct SalonRepository;

impl SalonRepository {
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        new_salon: &NewSalon,
    ) -> Result<Salon, DatabaseError> {
        let salon = sqlx::query_as::<_, Salon>(
            r#"
            INSERT INTO salons (id, owner_user_id, name, address, phone_number, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, owner_user_id, name, address, phone_number, description, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(new_salon.owner_user_id)
        .bind(&new_salon.name)
        .bind(&new_salon.address)
        .bind(&new_salon.phone_number)
        .bind(&new_salon.description)
        .fetch_one(&mut **tx)
        .await?;

        Ok(salon)
    }

    pub async fn get_by_id(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
    ) -> Result<Option<Salon>, DatabaseError> {
        let salon = sqlx::query_as::<_, Salon>(
            r#"
            SELECT id, owner_user_id, name, address, phone_number, description, created_at
            FROM salons
            WHERE id = $1
            "#,
        )
        .bind(salon_id)
        .fetch_optional(executor)
        .await?;

        Ok(salon)
    }

    pub async fn get_by_owner(
        executor: impl PgExecutor<'_>,
        owner_user_id: Uuid,
    ) -> Result<Option<Salon>, DatabaseError> {
        let salon = sqlx::query_as::<_, Salon>(
            r#"
            SELECT id, owner_user_id, name, address, phone_number, description, created_at
            FROM salons
            WHERE owner_user_id = $1
            "#,
        )
        .bind(owner_user_id)
        .fetch_optional(executor)
        .await?;

        Ok(salon)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Postgres>,
        salon_id: Uuid,
        update: &UpdateSalon,
    ) -> Result<Salon, DatabaseError> {
        let salon = sqlx::query_as::<_, Salon>(
            r#"
            UPDATE salons
            SET
                name = COALESCE($1, name),
                address = COALESCE($2, address),
                phone_number = COALESCE($3, phone_number),
                description = COALESCE($4, description)
            WHERE id = $5
            RETURNING id, owner_user_id, name, address, phone_number, description, created_at
            "#,
        )
        .bind(&update.name)
        .bind(&update.address)
        .bind(&update.phone_number)
        .bind(&update.description)
        .bind(salon_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(salon)
    }

    /// Takes the salon's row lock for the rest of the transaction. Every
    /// slot-affecting write acquires this first, so two bookings (or a
    /// booking and an hours edit) for the same salon serialize instead of
    /// racing the overlap check.
    pub async fn lock(
        tx: &mut Transaction<'_, Postgres>,
        salon_id: Uuid,
    ) -> Result<(), DatabaseError> {
        sqlx::query("SELECT id FROM salons WHERE id = $1 FOR UPDATE")
            .bind(salon_id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or(DatabaseError::NotFound)?;

        Ok(())
    }

    /// Salons that are ready for the public listing: at least one service
    /// and at least one working-hours range.
    pub async fn list_published(
        executor: impl PgExecutor<'_>,
    ) -> Result<Vec<Salon>, DatabaseError> {
        let salons = sqlx::query_as::<_, Salon>(
            r#"
            SELECT s.id, s.owner_user_id, s.name, s.address, s.phone_number, s.description, s.created_at
            FROM salons AS s
            WHERE EXISTS (SELECT 1 FROM services AS sv WHERE sv.salon_id = s.id)
              AND EXISTS (SELECT 1 FROM working_hours AS wh WHERE wh.salon_id = s.id)
            ORDER BY s.name
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(salons)
    }
}
