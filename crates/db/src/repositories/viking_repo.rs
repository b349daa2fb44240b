//! Repository for the `vikings` table.

use sqlx::types::Json;
use sqlx::PgPool;
use vikings_core::metadata::VikingRecord;
use vikings_core::types::VikingNumber;

use crate::models::viking::Viking;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, number, name, image, description, \
     beard, body, face, top, \
     boots_type, boots_condition, speed, \
     bottoms_type, bottoms_condition, stamina, \
     helmet_type, helmet_condition, intelligence, \
     shield_type, shield_condition, defence, \
     weapon_type, weapon_condition, attack, \
     raw_input, created_at, updated_at";

/// Provides write-once storage and reads for minted Vikings.
pub struct VikingRepo;

impl VikingRepo {
    /// Insert a new Viking, returning the created row.
    ///
    /// A second insert for the same number fails with a unique violation on
    /// `uq_vikings_number`.
    pub async fn create(pool: &PgPool, record: &VikingRecord) -> Result<Viking, sqlx::Error> {
        let query = format!(
            "INSERT INTO vikings (
                number, name, image, description,
                beard, body, face, top,
                boots_type, boots_condition, speed,
                bottoms_type, bottoms_condition, stamina,
                helmet_type, helmet_condition, intelligence,
                shield_type, shield_condition, defence,
                weapon_type, weapon_condition, attack,
                raw_input)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Viking>(&query)
            .bind(record.number)
            .bind(&record.name)
            .bind(&record.image)
            .bind(&record.description)
            .bind(&record.beard)
            .bind(&record.body)
            .bind(&record.face)
            .bind(&record.top)
            .bind(&record.boots_type)
            .bind(&record.boots_condition)
            .bind(record.speed)
            .bind(&record.bottoms_type)
            .bind(&record.bottoms_condition)
            .bind(record.stamina)
            .bind(&record.helmet_type)
            .bind(&record.helmet_condition)
            .bind(record.intelligence)
            .bind(&record.shield_type)
            .bind(&record.shield_condition)
            .bind(record.defence)
            .bind(&record.weapon_type)
            .bind(&record.weapon_condition)
            .bind(record.attack)
            .bind(Json(record.raw_input))
            .fetch_one(pool)
            .await
    }

    /// Find a Viking by its token number.
    pub async fn find_by_number(
        pool: &PgPool,
        number: VikingNumber,
    ) -> Result<Option<Viking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vikings WHERE number = $1");
        sqlx::query_as::<_, Viking>(&query)
            .bind(number)
            .fetch_optional(pool)
            .await
    }

    /// `true` if a Viking with this number has been stored.
    pub async fn exists(pool: &PgPool, number: VikingNumber) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM vikings WHERE number = $1)")
            .bind(number)
            .fetch_one(pool)
            .await
    }

    /// List Vikings ordered by number ascending.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Viking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vikings
             ORDER BY number ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Viking>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of stored Vikings.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM vikings")
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a Viking. Returns `true` if a row was removed.
    ///
    /// Records are otherwise write-once; this is the administrative path.
    pub async fn delete_by_number(
        pool: &PgPool,
        number: VikingNumber,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vikings WHERE number = $1")
            .bind(number)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
