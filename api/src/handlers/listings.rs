use food_donations::QueryOutcome;
use food_donations::models::food_listings::{
    CreateListingPayload, FoodListing, UpdateQuantityPayload,
};
use food_donations::report::table;
use sqlx::PgPool;
use validator::Validate;

use crate::error::AppError;
use crate::models::views::{ListingFormOptions, ManagePage, MutationOutcome};

#[tracing::instrument(skip_all)]
pub async fn manage_page(db: &PgPool) -> ManagePage {
    let outcome = QueryOutcome::classify("All food listings", FoodListing::list_all(db).await);

    ManagePage {
        title: "Manage Food Listings",
        listings: table(outcome, "No food listings available."),
        form: ListingFormOptions::new(),
    }
}

#[tracing::instrument(skip_all)]
pub async fn add_listing(
    db: &PgPool,
    payload: CreateListingPayload,
) -> Result<MutationOutcome, AppError> {
    payload.validate()?;
    FoodListing::create(db, &payload).await?;

    Ok(MutationOutcome {
        message: "Food item added successfully!",
    })
}

#[tracing::instrument(skip(db, payload))]
pub async fn update_quantity(
    db: &PgPool,
    food_id: i32,
    payload: UpdateQuantityPayload,
) -> Result<MutationOutcome, AppError> {
    ensure_food_id(food_id)?;
    payload.validate()?;
    FoodListing::update_quantity(db, food_id, payload.quantity).await?;

    Ok(MutationOutcome {
        message: "Quantity updated!",
    })
}

#[tracing::instrument(skip(db))]
pub async fn delete_listing(db: &PgPool, food_id: i32) -> Result<MutationOutcome, AppError> {
    ensure_food_id(food_id)?;
    FoodListing::delete(db, food_id).await?;

    Ok(MutationOutcome {
        message: "Food item deleted successfully!",
    })
}

fn ensure_food_id(food_id: i32) -> Result<(), AppError> {
    if food_id < 1 {
        return Err(AppError::BadRequest(
            "food id must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_ids_start_at_one() {
        assert!(ensure_food_id(1).is_ok());
        assert!(matches!(ensure_food_id(0), Err(AppError::BadRequest(_))));
        assert!(matches!(ensure_food_id(-4), Err(AppError::BadRequest(_))));
    }
}
