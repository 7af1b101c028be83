use serde::Serialize;
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::prelude::FromRow;

use super::Tabular;
use crate::error::DbError;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProviderTypeContribution {
    pub provider_type: Option<String>,
    pub total_quantity: i64,
}

impl ProviderTypeContribution {
    pub async fn fetch(pool: &PgPool) -> Result<Vec<ProviderTypeContribution>, DbError> {
        let rows = sqlx::query_as::<_, ProviderTypeContribution>(
            r#"
            SELECT
                provider_type,
                SUM(quantity)::BIGINT AS total_quantity
            FROM
                food_listings
            GROUP BY
                provider_type
            ORDER BY
                total_quantity DESC;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for ProviderTypeContribution {
    const COLUMNS: &'static [&'static str] = &["provider_type", "total_quantity"];

    fn cells(&self) -> Vec<Value> {
        vec![json!(self.provider_type), json!(self.total_quantity)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TotalAvailable {
    pub total_available_quantity: Option<i64>,
}

impl TotalAvailable {
    /// Grand total over all listings. `SUM` over an empty table is `NULL`; that
    /// case comes back as no rows rather than a row holding a null.
    pub async fn fetch(pool: &PgPool) -> Result<Vec<TotalAvailable>, DbError> {
        let row = sqlx::query_as::<_, TotalAvailable>(
            "SELECT SUM(quantity)::BIGINT AS total_available_quantity FROM food_listings;",
        )
        .fetch_one(pool)
        .await?;

        if row.total_available_quantity.is_some() {
            Ok(vec![row])
        } else {
            Ok(Vec::new())
        }
    }
}

impl Tabular for TotalAvailable {
    const COLUMNS: &'static [&'static str] = &["total_available_quantity"];

    fn cells(&self) -> Vec<Value> {
        vec![json!(self.total_available_quantity)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct LocationListings {
    pub location: Option<String>,
    pub listing_count: i64,
}

impl LocationListings {
    /// Locations by number of listings, busiest first.
    pub async fn fetch(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<LocationListings>, DbError> {
        let rows = sqlx::query_as::<_, LocationListings>(
            r#"
            SELECT
                location,
                COUNT(*) AS listing_count
            FROM
                food_listings
            GROUP BY
                location
            ORDER BY
                listing_count DESC
            LIMIT $1;
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for LocationListings {
    const COLUMNS: &'static [&'static str] = &["location", "listing_count"];

    fn cells(&self) -> Vec<Value> {
        vec![json!(self.location), json!(self.listing_count)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct FoodTypeCount {
    pub food_type: Option<String>,
    pub total_count: i64,
}

impl FoodTypeCount {
    pub async fn fetch(pool: &PgPool) -> Result<Vec<FoodTypeCount>, DbError> {
        let rows = sqlx::query_as::<_, FoodTypeCount>(
            r#"
            SELECT
                food_type,
                COUNT(*) AS total_count
            FROM
                food_listings
            GROUP BY
                food_type
            ORDER BY
                total_count DESC;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for FoodTypeCount {
    const COLUMNS: &'static [&'static str] = &["food_type", "total_count"];

    fn cells(&self) -> Vec<Value> {
        vec![json!(self.food_type), json!(self.total_count)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProviderDonation {
    pub provider_name: Option<String>,
    pub city: Option<String>,
    pub total_donated_quantity: i64,
}

impl ProviderDonation {
    /// Quantity donated per provider and city over all listings, largest first.
    pub async fn fetch(pool: &PgPool) -> Result<Vec<ProviderDonation>, DbError> {
        let rows = sqlx::query_as::<_, ProviderDonation>(
            r#"
            SELECT
                p.name AS provider_name,
                p.city,
                SUM(f.quantity)::BIGINT AS total_donated_quantity
            FROM
                food_listings f
            JOIN
                providers p ON f.provider_id = p.provider_id
            GROUP BY
                p.name, p.city
            ORDER BY
                total_donated_quantity DESC;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for ProviderDonation {
    const COLUMNS: &'static [&'static str] = &["provider_name", "city", "total_donated_quantity"];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.provider_name),
            json!(self.city),
            json!(self.total_donated_quantity),
        ]
    }
}

/// Donations summed per provider name across cities. This is what the chart
/// ranks, so one name is one bar.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProviderDonationTotal {
    pub provider_name: Option<String>,
    pub total_donated_quantity: i64,
}

impl ProviderDonationTotal {
    pub async fn fetch(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<ProviderDonationTotal>, DbError> {
        let rows = sqlx::query_as::<_, ProviderDonationTotal>(
            r#"
            SELECT
                p.name AS provider_name,
                SUM(f.quantity)::BIGINT AS total_donated_quantity
            FROM
                food_listings f
            JOIN
                providers p ON f.provider_id = p.provider_id
            GROUP BY
                p.name
            ORDER BY
                total_donated_quantity DESC
            LIMIT $1;
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
