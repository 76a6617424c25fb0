use sqlx::{PgExecutor, Postgres, Transaction};
use uuid::Uuid;

use crate::db::models::{NewReview, Review, UpdateReview};
use crate::db::DatabaseError;

pub struct ReviewRepository;

impl ReviewRepository {
    /// Inserts a review. The unique constraint on `appointment_id` turns a
    /// second review for the same appointment into `Duplicate`.
    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        appointment_id: Uuid,
        new_review: &NewReview,
    ) -> Result<Review, DatabaseError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, appointment_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, appointment_id, rating, comment, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(appointment_id)
        .bind(new_review.rating)
        .bind(&new_review.comment)
        .fetch_one(&mut **tx)
        .await?;

        Ok(review)
    }

    pub async fn get(
        executor: impl PgExecutor<'_>,
        review_id: Uuid,
    ) -> Result<Option<Review>, DatabaseError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, appointment_id, rating, comment, created_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(review_id)
        .fetch_optional(executor)
        .await?;

        Ok(review)
    }

    pub async fn get_by_appointment(
        executor: impl PgExecutor<'_>,
        appointment_id: Uuid,
    ) -> Result<Option<Review>, DatabaseError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, appointment_id, rating, comment, created_at
            FROM reviews
            WHERE appointment_id = $1
            "#,
        )
        .bind(appointment_id)
        .fetch_optional(executor)
        .await?;

        Ok(review)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Postgres>,
        review_id: Uuid,
        update: &UpdateReview,
    ) -> Result<Review, DatabaseError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews
            SET
                rating = COALESCE($1, rating),
                comment = COALESCE($2, comment)
            WHERE id = $3
            RETURNING id, appointment_id, rating, comment, created_at
            "#,
        )
        .bind(update.rating)
        .bind(&update.comment)
        .bind(review_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(review)
    }

    pub async fn delete(
        tx: &mut Transaction<'_, Postgres>,
        review_id: Uuid,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(review_id)
            .execute(&mut **tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound);
        }
        Ok(())
    }
}
