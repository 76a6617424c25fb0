use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::Duration;
use validator::Validate;

/// A bookable service offered by a salon. `duration_minutes` drives the
/// scheduler; price and description are catalog data.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: i32,
}

impl Service {
    /// Length of one booking of this service.
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes as i64)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewService {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration_minutes: i32,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateService {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration_minutes: Option<i32>,
}
