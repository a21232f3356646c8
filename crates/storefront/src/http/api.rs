//! Routes, handlers, and the server entry point.
//!
//! Success responses wrap their payload as `{"success": true, "data": …}`;
//! failures render through [`ApiError`](super::error::ApiError). The router
//! is built separately from the listener so tests can drive it with
//! `tower::ServiceExt::oneshot`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::auth::Admin;
use super::error::ApiError;
use crate::clients::{OrderClient, RatingClient};
use crate::model::{
    Caller, LineItem, Order, OrderCreate, OrderId, PaymentMethod, Rating, RatingCreate, RatingId,
    RatingSummary, RepaymentIntent, ShippingSnapshot, StatusPatch,
};
use crate::rating_actor::RatingError;
use resource_actor::ActorClient;

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
    pub ratings: RatingClient,
    /// Bearer token table from configuration.
    pub tokens: Arc<HashMap<String, Caller>>,
}

/// Starts the HTTP server on `addr`.
///
/// The actual bound address is logged, so an ephemeral port (`:0`) can be
/// discovered.
pub async fn serve(
    addr: SocketAddr,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "storefront API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the axum router (separated for testing).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/orders", post(place_order))
        .route("/orders/my-orders", get(my_orders))
        .route("/orders/:id", get(order_detail))
        .route("/orders/:id/cancel", put(cancel_order))
        .route("/orders/:id/repayment", get(order_repayment))
        .route("/admin/orders/:id/status", put(update_order_status))
        .route("/ratings", post(submit_rating).put(upsert_rating))
        .route("/ratings/by-product/:id", get(ratings_by_product))
        .route("/ratings/by-product/:id/summary", get(ratings_summary))
        .route("/ratings/by-user/:id", get(ratings_by_user))
        .route("/admin/ratings/:id/reply", put(reply_to_rating))
        .with_state(state)
}

/// Success envelope: `{"success": true, "data": …}`.
#[derive(Serialize)]
struct Envelope<T> {
    success: bool,
    data: T,
}

fn success<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        data,
    })
}

// ============================================================================
// Request bodies
// ============================================================================

/// Checkout payload. The customer is always the authenticated caller, so
/// the body does not carry one.
#[derive(Debug, Deserialize)]
struct PlaceOrderRequest {
    #[serde(default)]
    code: Option<String>,
    items: Vec<LineItem>,
    shipping: ShippingSnapshot,
    #[serde(default)]
    discount: u64,
    payment_method: PaymentMethod,
}

/// Body of the admin reply route.
#[derive(Debug, Deserialize)]
struct ReplyRequest {
    reply: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn place_order(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<Envelope<Order>>), ApiError> {
    let params = OrderCreate {
        customer: caller.user.clone(),
        code: req.code,
        items: req.items,
        shipping: req.shipping,
        discount: req.discount,
        payment_method: req.payment_method,
    };
    let id = state.orders.place(params).await?;
    let order = state.orders.detail(id, &caller).await?;
    Ok((StatusCode::CREATED, success(order)))
}

async fn my_orders(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    let orders = state.orders.list_for(&caller).await?;
    Ok(success(orders))
}

async fn order_detail(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let order = state.orders.detail(OrderId(id), &caller).await?;
    Ok(success(order))
}

async fn cancel_order(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let order = state.orders.cancel(OrderId(id), &caller).await?;
    Ok(success(order))
}

async fn order_repayment(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Envelope<RepaymentIntent>>, ApiError> {
    let intent = state.orders.request_repayment(OrderId(id), &caller).await?;
    Ok(success(intent))
}

async fn update_order_status(
    State(state): State<AppState>,
    Admin(_caller): Admin,
    Path(id): Path<String>,
    Json(patch): Json<StatusPatch>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let order = state.orders.apply_status(OrderId(id), patch).await?;
    Ok(success(order))
}

async fn submit_rating(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<RatingCreate>,
) -> Result<(StatusCode, Json<Envelope<Rating>>), ApiError> {
    let id = state.ratings.submit(params, &caller).await?;
    let rating = fetch_rating(&state, id).await?;
    Ok((StatusCode::CREATED, success(rating)))
}

async fn upsert_rating(
    State(state): State<AppState>,
    caller: Caller,
    Json(params): Json<RatingCreate>,
) -> Result<Json<Envelope<Rating>>, ApiError> {
    let id = state.ratings.upsert(params, &caller).await?;
    let rating = fetch_rating(&state, id).await?;
    Ok(success(rating))
}

async fn ratings_by_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Vec<Rating>>>, ApiError> {
    let ratings = state.ratings.list_for_product(id).await?;
    Ok(success(ratings))
}

async fn ratings_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<RatingSummary>>, ApiError> {
    let summary = state.ratings.summary(id).await?;
    Ok(success(summary))
}

async fn ratings_by_user(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Vec<Rating>>>, ApiError> {
    let ratings = state.ratings.list_for_user(id, &caller).await?;
    Ok(success(ratings))
}

async fn reply_to_rating(
    State(state): State<AppState>,
    Admin(caller): Admin,
    Path(id): Path<String>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<Envelope<Rating>>, ApiError> {
    let rating = state
        .ratings
        .admin_reply(RatingId(id), req.reply, &caller)
        .await?;
    Ok(success(rating))
}

/// Reads back a rating that was just written.
async fn fetch_rating(state: &AppState, id: RatingId) -> Result<Rating, ApiError> {
    let rating = state
        .ratings
        .get(id.clone())
        .await?
        .ok_or_else(|| RatingError::NotFound(id.to_string()))?;
    Ok(rating)
}
