use axum::Router;
use axum::http::StatusCode;
use serde::Serialize;

use crate::AppState;
use crate::middlewares::log_request;

pub mod home;
pub mod listings;
pub mod reports;

#[derive(Serialize)]
pub struct HttpResponse<B> {
    ok: bool,
    status: u16,
    #[serde(rename = "statusText")]
    status_text: String,
    body: B,
}

impl<B> From<B> for HttpResponse<B> {
    fn from(body: B) -> Self {
        let status = StatusCode::OK;
        Self {
            ok: true,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(home::home_routes())
        .merge(reports::report_routes())
        .merge(listings::listing_routes())
        .layer(axum::middleware::from_fn(log_request))
        .with_state(state)
}
