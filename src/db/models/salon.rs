use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

/// A salon, linked one-to-one with its owning user account.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Salon {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub description: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSalon {
    pub owner_user_id: Uuid,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 255))]
    pub address: String,
    #[validate(length(max = 20))]
    pub phone_number: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSalon {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
    pub description: Option<String>,
}
