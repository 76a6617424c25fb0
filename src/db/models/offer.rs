use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::Date;
use validator::Validate;

/// A promotion run by a salon over a date window.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub title: String,
    pub description: String,
    pub discount_percentage: Option<Decimal>,
    pub start_date: Date,
    pub end_date: Date,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewOffer {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    pub description: String,
    pub discount_percentage: Option<Decimal>,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateOffer {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount_percentage: Option<Decimal>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_active: Option<bool>,
}
