// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use leaderboard_core::{CustomerRanking, ServiceMetrics};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire representation of [`CustomerRanking`]. Kept separate from the core
/// type so the core never has to derive a serialization format.
#[derive(Debug, Serialize)]
pub struct CustomerRankingDto {
	#[serde(rename = "customerId")]
	pub customer_id: i64,
	pub score: Decimal,
	pub rank: usize,
}

impl From<CustomerRanking> for CustomerRankingDto {
	fn from(r: CustomerRanking) -> Self {
		CustomerRankingDto { customer_id: r.customer_id, score: r.score, rank: r.rank }
	}
}

/// Wire representation of [`ServiceMetrics`], decorated with a response
/// timestamp the core metrics snapshot does not carry.
#[derive(Debug, Serialize)]
pub struct MetricsDto {
	#[serde(rename = "totalCustomers")]
	pub total_customers: usize,
	#[serde(rename = "leaderboardCustomers")]
	pub leaderboard_customers: usize,
	#[serde(rename = "topScore")]
	pub top_score: Decimal,
	pub timestamp: DateTime<Utc>,
}

impl MetricsDto {
	pub fn from_metrics(metrics: ServiceMetrics, timestamp: DateTime<Utc>) -> Self {
		MetricsDto {
			total_customers: metrics.total_customers,
			leaderboard_customers: metrics.leaderboard_customers,
			top_score: metrics.top_score,
			timestamp,
		}
	}
}

/// Query parameters for `GET /leaderboard`.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
	pub start: i64,
	pub end: i64,
}

/// Query parameters for `GET /leaderboard/{customerId}`.
#[derive(Debug, Deserialize)]
pub struct NeighborsQuery {
	#[serde(default)]
	pub high: i64,
	#[serde(default)]
	pub low: i64,
}

/// Body of the `POST /customer/{id}/score/{score}` error/success path is a
/// bare decimal, so it needs no dedicated struct; errors share this shape.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub error: String,
}
