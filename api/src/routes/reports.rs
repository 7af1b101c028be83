use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use food_donations::catalog::provider_cities;
use serde::Deserialize;

use super::HttpResponse;
use crate::error::AppError;
use crate::models::views::ReportPage;
use crate::{AppState, handlers};

pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/queries", get(query_results))
        .route("/visualizations", get(visualizations))
        .route("/cities", get(cities))
}

#[derive(Debug, Deserialize)]
struct CityParams {
    city: Option<String>,
}

async fn query_results(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Json<HttpResponse<ReportPage>> {
    let page = handlers::reports::query_results(&state.db, params.city).await;
    Json(page.into())
}

async fn visualizations(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Json<HttpResponse<ReportPage>> {
    let page = handlers::reports::visualizations(&state.db, params.city).await;
    Json(page.into())
}

async fn cities(
    State(state): State<AppState>,
) -> Result<Json<HttpResponse<Vec<String>>>, AppError> {
    let cities = provider_cities(&state.db).await?;
    Ok(Json(cities.into()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{get, send};

    #[tokio::test]
    async fn every_query_reports_its_own_failure() {
        let (status, body) = send(get("/queries")).await;

        assert_eq!(status, StatusCode::OK);
        let sections = body["body"]["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 13);
        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section["number"], i + 1);
            assert_eq!(section["visual"]["kind"], "error");
        }
        assert_eq!(
            body["body"]["city_selector"]["selected"],
            serde_json::Value::Null
        );
    }

    #[tokio::test]
    async fn visualizations_keep_the_chart_titles() {
        let (status, body) = send(get("/visualizations?city=Austin")).await;

        assert_eq!(status, StatusCode::OK);
        let sections = body["body"]["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 13);
        assert_eq!(
            sections[0]["title"],
            "Top 20 Cities: Food Providers and Receivers"
        );
        assert_eq!(body["body"]["city_selector"]["selected"], "Austin");
    }

    #[tokio::test]
    async fn city_lookup_needs_the_database() {
        let (status, body) = send(get("/cities")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["ok"], false);
    }
}
