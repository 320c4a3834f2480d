//! Repository for the `album_pricing_tiers` table.

use sqlx::PgPool;

use shutterdesk_core::types::DbId;

use crate::models::pricing_tier::{PricingTier, SaveTier};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, album_id, quantity, price, created_at";

/// Provides the tier schedule for an album.
pub struct PricingTierRepo;

impl PricingTierRepo {
    /// Replace an album's whole tier schedule in one transaction.
    pub async fn replace_for_album(
        pool: &PgPool,
        album_id: DbId,
        tiers: &[SaveTier],
    ) -> Result<Vec<PricingTier>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM album_pricing_tiers WHERE album_id = $1")
            .bind(album_id)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO album_pricing_tiers (album_id, quantity, price)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let mut saved = Vec::with_capacity(tiers.len());
        for tier in tiers {
            let row = sqlx::query_as::<_, PricingTier>(&insert)
                .bind(album_id)
                .bind(tier.quantity)
                .bind(tier.price)
                .fetch_one(&mut *tx)
                .await?;
            saved.push(row);
        }

        tx.commit().await?;
        saved.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        Ok(saved)
    }

    /// List an album's tiers, largest bundle first.
    pub async fn list_for_album(
        pool: &PgPool,
        album_id: DbId,
    ) -> Result<Vec<PricingTier>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM album_pricing_tiers \
             WHERE album_id = $1 ORDER BY quantity DESC"
        );
        sqlx::query_as::<_, PricingTier>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }
}
