use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::zodiac::ZodiacSign;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String, // Argon2 PHC string
    pub birthdate: Date,
    pub zodiac_sign: ZodiacSign, // always derived from birthdate
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Validated registration data ready to be stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub birthdate: Date,
    pub zodiac_sign: ZodiacSign,
}
