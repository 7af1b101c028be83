use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::prelude::FromRow;
use sqlx::query::Query;
use validator::Validate;

use crate::catalog::Tabular;
use crate::error::DbError;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct FoodListing {
    pub food_id: i32,
    pub food_name: Option<String>,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub provider_id: i32,
    pub provider_type: Option<String>,
    pub location: Option<String>,
    pub food_type: Option<String>,
    pub meal_type: Option<String>,
}

impl Tabular for FoodListing {
    const COLUMNS: &'static [&'static str] = &[
        "food_id",
        "food_name",
        "quantity",
        "expiry_date",
        "provider_id",
        "provider_type",
        "location",
        "food_type",
        "meal_type",
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.food_id),
            json!(self.food_name),
            json!(self.quantity),
            json!(self.expiry_date),
            json!(self.provider_id),
            json!(self.provider_type),
            json!(self.location),
            json!(self.food_type),
            json!(self.meal_type),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderType {
    Restaurant,
    #[serde(rename = "Grocery Store")]
    GroceryStore,
    Supermarket,
}

impl ProviderType {
    pub const ALL: [ProviderType; 3] = [
        ProviderType::Restaurant,
        ProviderType::GroceryStore,
        ProviderType::Supermarket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Restaurant => "Restaurant",
            ProviderType::GroceryStore => "Grocery Store",
            ProviderType::Supermarket => "Supermarket",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodType {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [FoodType::Vegetarian, FoodType::NonVegetarian, FoodType::Vegan];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Vegetarian => "Vegetarian",
            FoodType::NonVegetarian => "Non-Vegetarian",
            FoodType::Vegan => "Vegan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateListingPayload {
    #[validate(length(min = 1, message = "food name must not be empty"))]
    pub food_name: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    #[validate(range(min = 1, message = "provider id must be at least 1"))]
    pub provider_id: i32,
    pub provider_type: ProviderType,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    pub food_type: FoodType,
    pub meal_type: MealType,
}

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct UpdateQuantityPayload {
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

impl FoodListing {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<FoodListing>, DbError> {
        let listings = sqlx::query_as::<_, FoodListing>(
            r#"
            SELECT
                food_id, food_name, quantity, expiry_date, provider_id,
                provider_type, location, food_type, meal_type
            FROM
                food_listings
            ORDER BY
                food_id;
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(listings)
    }

    pub async fn find(pool: &PgPool, food_id: i32) -> Result<Option<FoodListing>, DbError> {
        let listing = sqlx::query_as::<_, FoodListing>(
            r#"
            SELECT
                food_id, food_name, quantity, expiry_date, provider_id,
                provider_type, location, food_type, meal_type
            FROM
                food_listings
            WHERE
                food_id = $1;
            "#,
        )
        .bind(food_id)
        .fetch_optional(pool)
        .await?;

        Ok(listing)
    }

    #[tracing::instrument(skip_all, fields(food_name = %payload.food_name))]
    pub async fn create(pool: &PgPool, payload: &CreateListingPayload) -> Result<(), DbError> {
        let query = sqlx::query(
            r#"
            INSERT INTO food_listings
                (food_name, quantity, expiry_date, provider_id, provider_type, location, food_type, meal_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8);
            "#,
        )
        .bind(&payload.food_name)
        .bind(payload.quantity)
        .bind(payload.expiry_date)
        .bind(payload.provider_id)
        .bind(payload.provider_type.as_str())
        .bind(&payload.location)
        .bind(payload.food_type.as_str())
        .bind(payload.meal_type.as_str());

        execute_scoped(pool, query).await
    }

    /// Sets the quantity of a listing. An unknown `food_id` touches no rows and
    /// is not an error.
    #[tracing::instrument(skip(pool))]
    pub async fn update_quantity(
        pool: &PgPool,
        food_id: i32,
        quantity: i32,
    ) -> Result<(), DbError> {
        let query = sqlx::query("UPDATE food_listings SET quantity = $1 WHERE food_id = $2;")
            .bind(quantity)
            .bind(food_id);

        execute_scoped(pool, query).await
    }

    /// Removes a listing. An unknown `food_id` touches no rows and is not an
    /// error.
    #[tracing::instrument(skip(pool))]
    pub async fn delete(pool: &PgPool, food_id: i32) -> Result<(), DbError> {
        let query = sqlx::query("DELETE FROM food_listings WHERE food_id = $1;")
            .bind(food_id);

        execute_scoped(pool, query).await
    }
}

/// Runs one write statement in its own transaction: commit on success,
/// rollback on failure. The statement's error is what gets reported, even if
/// the rollback itself also fails.
async fn execute_scoped(
    pool: &PgPool,
    query: Query<'_, Postgres, PgArguments>,
) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;

    match query.execute(&mut *tx).await {
        Ok(result) => {
            tx.commit().await?;
            tracing::info!(
                rows_affected = result.rows_affected(),
                "listing change committed"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = ?e, "listing change failed, rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = ?rollback_err, "rollback failed");
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> serde_json::Value {
        json!({
            "food_name": "Bread",
            "quantity": 5,
            "expiry_date": "2025-03-17",
            "provider_id": 12,
            "provider_type": "Grocery Store",
            "location": "Springfield",
            "food_type": "Non-Vegetarian",
            "meal_type": "Breakfast",
        })
    }

    #[test]
    fn form_labels_deserialize_into_enums() {
        let payload: CreateListingPayload = serde_json::from_value(payload()).unwrap();

        assert_eq!(payload.provider_type, ProviderType::GroceryStore);
        assert_eq!(payload.food_type, FoodType::NonVegetarian);
        assert_eq!(payload.meal_type, MealType::Breakfast);
        assert_eq!(
            payload.expiry_date,
            NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()
        );
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn unknown_enum_labels_are_rejected() {
        let mut raw = payload();
        raw["meal_type"] = json!("Brunch");
        let parsed = serde_json::from_value::<CreateListingPayload>(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn as_str_matches_the_serialized_label() {
        for provider_type in ProviderType::ALL {
            assert_eq!(json!(provider_type), json!(provider_type.as_str()));
        }
        for food_type in FoodType::ALL {
            assert_eq!(json!(food_type), json!(food_type.as_str()));
        }
        for meal_type in MealType::ALL {
            assert_eq!(json!(meal_type), json!(meal_type.as_str()));
        }
    }

    #[test]
    fn form_constraints_are_enforced() {
        let mut raw = payload();
        raw["quantity"] = json!(0);
        raw["provider_id"] = json!(0);
        raw["food_name"] = json!("");
        let payload: CreateListingPayload = serde_json::from_value(raw).unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("quantity"));
        assert!(fields.contains_key("provider_id"));
        assert!(fields.contains_key("food_name"));
        assert!(!fields.contains_key("location"));
    }

    #[test]
    fn update_quantity_must_be_positive() {
        assert!(UpdateQuantityPayload { quantity: 0 }.validate().is_err());
        assert!(UpdateQuantityPayload { quantity: 9 }.validate().is_ok());
    }
}
