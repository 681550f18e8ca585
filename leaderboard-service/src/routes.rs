// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use leaderboard_core::{Error as CoreError, LeaderboardService};
use rust_decimal::Decimal;

use crate::dto::{CustomerRankingDto, ErrorBody, MetricsDto, NeighborsQuery, RangeQuery};

/// Wire up the five endpoints onto a shared, `Arc`-owned coordinator.
pub fn build_router(service: Arc<LeaderboardService>) -> Router {
	Router::new()
		.route("/customer/{customer_id}/score/{score}", post(update_score))
		.route("/leaderboard", get(get_leaderboard))
		.route("/leaderboard/{customer_id}", get(get_leaderboard_neighbors))
		.route("/monitoring/health", get(health))
		.route("/monitoring/metrics", get(metrics))
		.with_state(service)
}

struct ApiError(CoreError);

impl From<CoreError> for ApiError {
	fn from(err: CoreError) -> Self {
		ApiError(err)
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let (status, message) = match &self.0 {
			CoreError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
			CoreError::NotFound(id) => (StatusCode::NOT_FOUND, format!("customer {id} not found")),
			CoreError::Internal(msg) => {
				log::warn!("internal leaderboard error: {msg}");
				(StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
			}
		};
		(status, Json(ErrorBody { error: message })).into_response()
	}
}

fn bad_request(message: impl Into<String>) -> ApiError {
	ApiError(CoreError::InvalidArgument(message.into()))
}

async fn update_score(
	State(service): State<Arc<LeaderboardService>>,
	Path((customer_id, score)): Path<(String, String)>,
) -> Result<String, ApiError> {
	let customer_id = i64::from_str(&customer_id).map_err(|_| bad_request("customerId must be an integer"))?;
	let delta = Decimal::from_str(&score).map_err(|_| bad_request("score must be a decimal number"))?;
	let new_score = service.update_score(customer_id, delta)?;
	Ok(new_score.to_string())
}

async fn get_leaderboard(
	State(service): State<Arc<LeaderboardService>>,
	Query(range): Query<RangeQuery>,
) -> Result<Json<Vec<CustomerRankingDto>>, ApiError> {
	if range.start < 1 || range.end < range.start {
		return Err(bad_request("start must be >= 1 and end must be >= start"));
	}
	let rankings = service.get_by_rank(range.start as usize, range.end as usize)?;
	Ok(Json(rankings.into_iter().map(CustomerRankingDto::from).collect()))
}

async fn get_leaderboard_neighbors(
	State(service): State<Arc<LeaderboardService>>,
	Path(customer_id): Path<String>,
	Query(neighbors): Query<NeighborsQuery>,
) -> Result<Json<Vec<CustomerRankingDto>>, ApiError> {
	let customer_id = i64::from_str(&customer_id).map_err(|_| bad_request("customerId must be an integer"))?;
	let rankings = service.get_with_neighbors(customer_id, neighbors.high, neighbors.low)?;
	Ok(Json(rankings.into_iter().map(CustomerRankingDto::from).collect()))
}

async fn health() -> &'static str {
	"Healthy"
}

async fn metrics(State(service): State<Arc<LeaderboardService>>) -> Json<MetricsDto> {
	Json(MetricsDto::from_metrics(service.get_metrics(), Utc::now()))
}
