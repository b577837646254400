use super::AppState;
use super::error::AppError;
use super::models::{BillEvent, MenuResponse, PricesResponse};
use crate::error::PricingError;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
};
use tracing::debug;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn menu(State(state): State<AppState>) -> Json<MenuResponse> {
    Json(state.feed.menu().into())
}

pub async fn prices(State(state): State<AppState>) -> Json<PricesResponse> {
    Json(state.feed.board().await.into())
}

/// Applies every product on the bill. Unknown products are skipped; any
/// other purchase failure aborts the rest of the bill with a 500.
pub async fn events(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let event: BillEvent =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    for product in event.bill.products {
        match state.feed.apply_purchase(product.id).await {
            Ok(_) => {}
            Err(PricingError::ProductNotFound(id)) => {
                debug!(product_id = id, "skipping purchase of unknown product");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
