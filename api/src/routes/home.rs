use axum::routing::get;
use axum::{Json, Router};

use super::HttpResponse;
use crate::AppState;
use crate::models::views::HomePage;

pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

async fn home() -> Json<HttpResponse<HomePage>> {
    Json(HomePage::new().into())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{get, send};

    #[tokio::test]
    async fn home_lists_every_view() {
        let (status, body) = send(get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);

        let nav = body["body"]["navigation"].as_array().unwrap();
        let labels: Vec<&str> = nav.iter().map(|n| n["label"].as_str().unwrap()).collect();
        assert_eq!(
            labels,
            ["Home", "Query Results", "Visualizations", "Manage Listings"]
        );
        assert_eq!(nav[3]["path"], "/listings");
    }
}
