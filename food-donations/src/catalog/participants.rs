use serde::Serialize;
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::prelude::FromRow;

use super::Tabular;
use crate::error::DbError;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CityParticipants {
    pub city: Option<String>,
    pub provider_count: i64,
    pub receiver_count: i64,
}

impl CityParticipants {
    pub fn total(&self) -> i64 {
        self.provider_count + self.receiver_count
    }

    /// Distinct providers and receivers per city, cities ascending.
    pub async fn fetch(pool: &PgPool) -> Result<Vec<CityParticipants>, DbError> {
        let rows = sqlx::query_as::<_, CityParticipants>(
            r#"
            SELECT
                city,
                COUNT(DISTINCT provider_id) AS provider_count,
                COUNT(DISTINCT receiver_id) AS receiver_count
            FROM (
                SELECT city, provider_id, NULL::int AS receiver_id FROM providers
                UNION ALL
                SELECT city, NULL::int AS provider_id, receiver_id FROM receivers
            ) AS all_participants
            GROUP BY
                city
            ORDER BY
                city;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for CityParticipants {
    const COLUMNS: &'static [&'static str] = &["city", "provider_count", "receiver_count"];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.city),
            json!(self.provider_count),
            json!(self.receiver_count),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ProviderContact {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub provider_type: Option<String>,
    pub city: Option<String>,
}

impl ProviderContact {
    /// Providers located in `city`. A city without providers yields no rows.
    pub async fn fetch(pool: &PgPool, city: &str) -> Result<Vec<ProviderContact>, DbError> {
        let rows = sqlx::query_as::<_, ProviderContact>(
            r#"
            SELECT
                name, contact, type AS provider_type, city
            FROM
                providers
            WHERE
                city = $1;
            "#,
        )
        .bind(city)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

impl Tabular for ProviderContact {
    const COLUMNS: &'static [&'static str] = &["name", "contact", "type", "city"];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.name),
            json!(self.contact),
            json!(self.provider_type),
            json!(self.city),
        ]
    }
}

/// Distinct provider cities, ascending. Feeds the city selector.
pub async fn provider_cities(pool: &PgPool) -> Result<Vec<String>, DbError> {
    let cities = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT city FROM providers WHERE city IS NOT NULL ORDER BY city;",
    )
    .fetch_all(pool)
    .await?;

    Ok(cities)
}
