use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use food_donations::models::food_listings::{CreateListingPayload, UpdateQuantityPayload};

use super::HttpResponse;
use crate::error::AppError;
use crate::models::views::{ManagePage, MutationOutcome};
use crate::{AppState, handlers};

pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/listings", get(manage).post(add_listing))
        .route("/listings/{food_id}/quantity", put(update_quantity))
        .route("/listings/{food_id}", delete(delete_listing))
}

async fn manage(State(state): State<AppState>) -> Json<HttpResponse<ManagePage>> {
    let page = handlers::listings::manage_page(&state.db).await;
    Json(page.into())
}

async fn add_listing(
    State(state): State<AppState>,
    payload: Result<Json<CreateListingPayload>, JsonRejection>,
) -> Result<Json<HttpResponse<MutationOutcome>>, AppError> {
    let Json(payload) = payload?;
    let outcome = handlers::listings::add_listing(&state.db, payload).await?;
    Ok(Json(outcome.into()))
}

async fn update_quantity(
    State(state): State<AppState>,
    food_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateQuantityPayload>, JsonRejection>,
) -> Result<Json<HttpResponse<MutationOutcome>>, AppError> {
    let Path(food_id) = food_id?;
    let Json(payload) = payload?;
    let outcome = handlers::listings::update_quantity(&state.db, food_id, payload).await?;
    Ok(Json(outcome.into()))
}

async fn delete_listing(
    State(state): State<AppState>,
    food_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<HttpResponse<MutationOutcome>>, AppError> {
    let Path(food_id) = food_id?;
    let outcome = handlers::listings::delete_listing(&state.db, food_id).await?;
    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{get, json_request, send};

    fn listing(quantity: i32, food_type: &str) -> serde_json::Value {
        json!({
            "food_name": "Rice",
            "quantity": quantity,
            "expiry_date": "2025-03-20",
            "provider_id": 1,
            "provider_type": "Restaurant",
            "location": "Austin",
            "food_type": food_type,
            "meal_type": "Lunch",
        })
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected_before_the_database() {
        let (status, body) = send(json_request("POST", "/listings", listing(0, "Vegan"))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["ok"], false);
        assert!(body["message"].as_str().unwrap().contains("quantity"));
    }

    #[tokio::test]
    async fn unknown_food_types_are_rejected() {
        let (status, _) = send(json_request("POST", "/listings", listing(3, "Pescatarian"))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn food_id_zero_is_a_bad_request() {
        let request = json_request("PUT", "/listings/0/quantity", json!({ "quantity": 2 }));
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "food id must be at least 1");
    }

    #[tokio::test]
    async fn non_numeric_food_ids_are_rejected() {
        let (status, _) = send(json_request("DELETE", "/listings/abc", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn writes_report_an_unreachable_database() {
        let (status, body) = send(json_request("DELETE", "/listings/7", json!({}))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], 503);
        assert_eq!(body["statusText"], "Service Unavailable");
    }

    #[tokio::test]
    async fn manage_page_shows_the_failure_inline() {
        let (status, body) = send(get("/listings")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["body"]["listings"]["kind"], "error");
        assert_eq!(body["body"]["form"]["food_types"][1], "Non-Vegetarian");
    }
}
