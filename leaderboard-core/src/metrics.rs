// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rust_decimal::Decimal;

/// Point-in-time snapshot of the service's size and top score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetrics {
	/// Number of customers ever seen by the service (including score <= 0).
	pub total_customers: usize,
	/// Number of customers currently held in the ranked index (score > 0).
	pub leaderboard_customers: usize,
	/// Score of the rank-1 customer, or zero when the index is empty.
	pub top_score: Decimal,
}
