use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::db::models::{NewOffer, Offer, UpdateOffer};
use crate::db::repositories::OfferRepository;
use crate::error::{AppError, AppResult};
use crate::services::access::require_salon_owner;

pub async fn create_offer(
    pool: &PgPool,
    acting_user: Uuid,
    salon_id: Uuid,
    new_offer: &NewOffer,
) -> AppResult<Offer> {
    new_offer.validate()?;
    if new_offer.start_date > new_offer.end_date {
        return Err(AppError::Validation(
            "an offer cannot end before it starts".into(),
        ));
    }
    require_salon_owner(pool, salon_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    let offer = OfferRepository::create(&mut tx, salon_id, new_offer).await?;
    tx.commit().await?;

    info!(offer_id = %offer.id, %salon_id, "offer created");
    Ok(offer)
}

pub async fn update_offer(
    pool: &PgPool,
    acting_user: Uuid,
    offer_id: Uuid,
    update: &UpdateOffer,
) -> AppResult<Offer> {
    update.validate()?;

    let offer = OfferRepository::get(pool, offer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("offer".into()))?;
    require_salon_owner(pool, offer.salon_id, acting_user).await?;

    // Check the dates as they will land, mixing in the unchanged side.
    let start = update.start_date.unwrap_or(offer.start_date);
    let end = update.end_date.unwrap_or(offer.end_date);
    if start > end {
        return Err(AppError::Validation(
            "an offer cannot end before it starts".into(),
        ));
    }

    let mut tx = pool.begin().await?;
    let offer = OfferRepository::update(&mut tx, offer_id, update).await?;
    tx.commit().await?;

    Ok(offer)
}

pub async fn delete_offer(pool: &PgPool, acting_user: Uuid, offer_id: Uuid) -> AppResult<()> {
    let offer = OfferRepository::get(pool, offer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("offer".into()))?;
    require_salon_owner(pool, offer.salon_id, acting_user).await?;

    let mut tx = pool.begin().await?;
    OfferRepository::delete(&mut tx, offer_id).await?;
    tx.commit().await?;

    info!(%offer_id, "offer deleted");
    Ok(())
}

/// The owner's full list, newest window first.
pub async fn list_offers(pool: &PgPool, salon_id: Uuid) -> AppResult<Vec<Offer>> {
    Ok(OfferRepository::list_for_salon(pool, salon_id).await?)
}

/// Offers currently running for a salon, by the server's date.
pub async fn running_offers(pool: &PgPool, salon_id: Uuid) -> AppResult<Vec<Offer>> {
    let today = OffsetDateTime::now_utc().date();
    Ok(OfferRepository::list_running(pool, salon_id, today).await?)
}
