use sqlx::{PgExecutor, Postgres, Transaction};
use time::Date;
use uuid::Uuid;

use crate::db::models::{NewOffer, Offer, UpdateOffer};
use crate::db::DatabaseError;

pub struct OfferRepository;

impl OfferRepository {
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        salon_id: Uuid,
        new_offer: &NewOffer,
    ) -> Result<Offer, DatabaseError> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            INSERT INTO offers (id, salon_id, title, description, discount_percentage, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, salon_id, title, description, discount_percentage, start_date, end_date, is_active
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(salon_id)
        .bind(&new_offer.title)
        .bind(&new_offer.description)
        .bind(new_offer.discount_percentage)
        .bind(new_offer.start_date)
        .bind(new_offer.end_date)
        .fetch_one(&mut **tx)
        .await?;

        Ok(offer)
    }

    pub async fn get(
        executor: impl PgExecutor<'_>,
        offer_id: Uuid,
    ) -> Result<Option<Offer>, DatabaseError> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            SELECT id, salon_id, title, description, discount_percentage, start_date, end_date, is_active
            FROM offers
            WHERE id = $1
            "#,
        )
        .bind(offer_id)
        .fetch_optional(executor)
        .await?;

        Ok(offer)
    }

    pub async fn list_for_salon(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
    ) -> Result<Vec<Offer>, DatabaseError> {
        let offers = sqlx::query_as::<_, Offer>(
            r#"
            SELECT id, salon_id, title, description, discount_percentage, start_date, end_date, is_active
            FROM offers
            WHERE salon_id = $1
            ORDER BY start_date DESC
            "#,
        )
        .bind(salon_id)
        .fetch_all(executor)
        .await?;

        Ok(offers)
    }

    /// Offers currently running on `today`: active and inside their date
    /// window.
    pub async fn list_running(
        executor: impl PgExecutor<'_>,
        salon_id: Uuid,
        today: Date,
    ) -> Result<Vec<Offer>, DatabaseError> {
        let offers = sqlx::query_as::<_, Offer>(
            r#"
            SELECT id, salon_id, title, description, discount_percentage, start_date, end_date, is_active
            FROM offers
            WHERE salon_id = $1
              AND is_active
              AND start_date <= $2
              AND end_date >= $2
            ORDER BY start_date
            "#,
        )
        .bind(salon_id)
        .bind(today)
        .fetch_all(executor)
        .await?;

        Ok(offers)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Postgres>,
        offer_id: Uuid,
        update: &UpdateOffer,
    ) -> Result<Offer, DatabaseError> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            UPDATE offers
            SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                discount_percentage = COALESCE($3, discount_percentage),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                is_active = COALESCE($6, is_active)
            WHERE id = $7
            RETURNING id, salon_id, title, description, discount_percentage, start_date, end_date, is_active
            "#,
        )
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.discount_percentage)
        .bind(update.start_date)
        .bind(update.end_date)
        .bind(update.is_active)
        .bind(offer_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(offer)
    }

    pub async fn delete(
        tx: &mut Transaction<'_, Postgres>,
        offer_id: Uuid,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(offer_id)
            .execute(&mut **tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound);
        }
        Ok(())
    }
}
