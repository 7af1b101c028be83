use serde::Serialize;
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::prelude::FromRow;

use super::Tabular;
use crate::error::DbError;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ReceiverClaimTotal {
    pub receiver_name: Option<String>,
    pub city: Option<String>,
    pub total_claimed_quantity: i64,
}

impl ReceiverClaimTotal {
    /// Quantity claimed per receiver, counting Completed claims only.
    pub async fn fetch(pool: &PgPool) -> Result<Vec<ReceiverClaimTotal>, DbError> {
        let rows = sqlx::query_as::<_, ReceiverClaimTotal>(
            r#"
            SELECT
                r.name AS receiver_name,
                r.city,
                SUM(f.quantity)::BIGINT AS total_claimed_quantity
            FROM
                claims c
            JOIN
                receivers r ON c.receiver_id = r.receiver_id
            JOIN
                food_listings f ON c.food_id = f.food_id
            WHERE
                c.status = 'Completed'
            GROUP BY
                r.receiver_id, r.name, r.city
            ORDER BY
                total_claimed_quantity DESC;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for ReceiverClaimTotal {
    const COLUMNS: &'static [&'static str] = &["receiver_name", "city", "total_claimed_quantity"];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.receiver_name),
            json!(self.city),
            json!(self.total_claimed_quantity),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct FoodItemClaims {
    pub food_name: Option<String>,
    pub total_claims: i64,
}

impl FoodItemClaims {
    /// Claims of every status per food item.
    pub async fn fetch(pool: &PgPool) -> Result<Vec<FoodItemClaims>, DbError> {
        let rows = sqlx::query_as::<_, FoodItemClaims>(
            r#"
            SELECT
                f.food_name,
                COUNT(c.claim_id) AS total_claims
            FROM
                claims c
            JOIN
                food_listings f ON c.food_id = f.food_id
            GROUP BY
                f.food_name
            ORDER BY
                total_claims DESC;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for FoodItemClaims {
    const COLUMNS: &'static [&'static str] = &["food_name", "total_claims"];

    fn cells(&self) -> Vec<Value> {
        vec![json!(self.food_name), json!(self.total_claims)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProviderSuccessfulClaims {
    pub provider_name: Option<String>,
    pub successful_claims: i64,
}

impl ProviderSuccessfulClaims {
    /// Providers ranked by Completed claims on their listings.
    pub async fn fetch(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<ProviderSuccessfulClaims>, DbError> {
        let rows = sqlx::query_as::<_, ProviderSuccessfulClaims>(
            r#"
            SELECT
                p.name AS provider_name,
                COUNT(c.claim_id) AS successful_claims
            FROM
                claims c
            JOIN
                food_listings f ON c.food_id = f.food_id
            JOIN
                providers p ON f.provider_id = p.provider_id
            WHERE
                c.status = 'Completed'
            GROUP BY
                p.name
            ORDER BY
                successful_claims DESC
            LIMIT $1;
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for ProviderSuccessfulClaims {
    const COLUMNS: &'static [&'static str] = &["provider_name", "successful_claims"];

    fn cells(&self) -> Vec<Value> {
        vec![json!(self.provider_name), json!(self.successful_claims)]
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ClaimStatusShare {
    pub status: Option<String>,
    pub total: i64,
    pub percentage: f64,
}

impl ClaimStatusShare {
    /// Claims per status with each status' share of all claims, in percent
    /// rounded to two decimals.
    pub async fn fetch(pool: &PgPool) -> Result<Vec<ClaimStatusShare>, DbError> {
        let rows = sqlx::query_as::<_, ClaimStatusShare>(
            r#"
            SELECT
                status,
                COUNT(*) AS total,
                ROUND(100.0 * COUNT(*) / SUM(COUNT(*)) OVER (), 2)::FLOAT8 AS percentage
            FROM
                claims
            GROUP BY
                status
            ORDER BY
                total DESC;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for ClaimStatusShare {
    const COLUMNS: &'static [&'static str] = &["status", "total", "percentage"];

    fn cells(&self) -> Vec<Value> {
        vec![json!(self.status), json!(self.total), json!(self.percentage)]
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ReceiverAverageClaim {
    pub receiver_name: Option<String>,
    pub city: Option<String>,
    pub avg_claimed_quantity: f64,
}

impl ReceiverAverageClaim {
    /// Mean quantity per Completed claim for each receiver, two decimals.
    pub async fn fetch(pool: &PgPool) -> Result<Vec<ReceiverAverageClaim>, DbError> {
        let rows = sqlx::query_as::<_, ReceiverAverageClaim>(
            r#"
            SELECT
                r.name AS receiver_name,
                r.city,
                ROUND(AVG(f.quantity), 2)::FLOAT8 AS avg_claimed_quantity
            FROM
                claims c
            JOIN
                receivers r ON c.receiver_id = r.receiver_id
            JOIN
                food_listings f ON c.food_id = f.food_id
            WHERE
                c.status = 'Completed'
            GROUP BY
                r.receiver_id, r.name, r.city
            ORDER BY
                avg_claimed_quantity DESC;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for ReceiverAverageClaim {
    const COLUMNS: &'static [&'static str] = &["receiver_name", "city", "avg_claimed_quantity"];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.receiver_name),
            json!(self.city),
            json!(self.avg_claimed_quantity),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MealTypeClaims {
    pub meal_type: Option<String>,
    pub total_claims: i64,
}

impl MealTypeClaims {
    /// Completed claims per meal type.
    pub async fn fetch(pool: &PgPool) -> Result<Vec<MealTypeClaims>, DbError> {
        let rows = sqlx::query_as::<_, MealTypeClaims>(
            r#"
            SELECT
                f.meal_type,
                COUNT(c.claim_id) AS total_claims
            FROM
                claims c
            JOIN
                food_listings f ON c.food_id = f.food_id
            WHERE
                c.status = 'Completed'
            GROUP BY
                f.meal_type
            ORDER BY
                total_claims DESC;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for MealTypeClaims {
    const COLUMNS: &'static [&'static str] = &["meal_type", "total_claims"];

    fn cells(&self) -> Vec<Value> {
        vec![json!(self.meal_type), json!(self.total_claims)]
    }
}
