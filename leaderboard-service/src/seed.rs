// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rust_decimal::Decimal;

/// A small, fixed set of `(customerId, score)` pairs loaded via
/// [`leaderboard_core::LeaderboardService::initialize_from_seed`] when the
/// `--seed` flag is set. Exists purely so a freshly started instance has
/// non-empty, demo-able state; never reachable over HTTP.
pub fn sample_dataset() -> Vec<(i64, Decimal)> {
	// (customerId, score) with two decimal places, expressed as scaled i64s.
	[
		(1001, 98750i64),
		(1002, 87425),
		(1003, 87425),
		(1004, 65000),
		(1005, 43210),
		(1006, 30175),
		(1007, 15000),
		(1008, 4200),
		(1009, 0),
		(1010, -1550),
	]
	.into_iter()
	.map(|(customer_id, scaled)| (customer_id, Decimal::new(scaled, 2)))
	.collect()
}
