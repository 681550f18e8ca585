// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::index::RankedIndex;
use crate::metrics::ServiceMetrics;
use crate::registry::ScoreRegistry;
use crate::score::{CustomerRanking, CustomerScore};

/// Largest magnitude a single `update_score` delta may carry.
const MAX_DELTA: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

struct State {
	registry: ScoreRegistry,
	index: RankedIndex,
}

/// The concurrency coordinator and public service facade: a single
/// [`parking_lot::RwLock`] guards the registry and the ranked index together
/// so the two never observe an inconsistent intermediate state, the same
/// discipline `kvdb-memorydb`'s `InMemory` uses to guard its column maps.
///
/// Readers (`get_by_rank`, `get_with_neighbors`, `get_metrics`) take the
/// shared lock; writers (`update_score`, `initialize_from_seed`) take the
/// exclusive lock for their entire body. No operation performs I/O or yields
/// while holding the lock.
#[derive(Default)]
pub struct LeaderboardService {
	state: RwLock<State>,
}

impl Default for State {
	fn default() -> Self {
		State { registry: ScoreRegistry::new(), index: RankedIndex::new() }
	}
}

impl LeaderboardService {
	/// An empty leaderboard: no customers, no ranked entries.
	pub fn new() -> Self {
		LeaderboardService::default()
	}

	/// Apply `delta` to `customer_id`'s score and return the new total.
	///
	/// `delta` must lie in `[-1000, 1000]`. The registry and index are
	/// updated atomically: a reader never observes the registry holding the
	/// new score while the index still holds the old one, or vice versa.
	pub fn update_score(&self, customer_id: i64, delta: Decimal) -> Result<Decimal> {
		if delta < -MAX_DELTA || delta > MAX_DELTA {
			return Err(Error::InvalidArgument(format!("delta {delta} is outside the allowed range [-1000, 1000]")));
		}

		let mut state = self.state.write();

		let old_score = state.registry.get(customer_id);
		let new_score =
			old_score.checked_add(delta).ok_or_else(|| Error::Internal("score addition overflowed".to_string()))?;

		state.registry.set(customer_id, new_score);

		if old_score > Decimal::ZERO {
			state.index.remove(&CustomerScore::new(customer_id, old_score));
		}
		if new_score > Decimal::ZERO {
			state.index.insert(CustomerScore::new(customer_id, new_score));
		}

		Ok(new_score)
	}

	/// Customers ranked `start..=end` (1-based, inclusive), clamped to the
	/// current size of the index.
	pub fn get_by_rank(&self, start: usize, end: usize) -> Result<Vec<CustomerRanking>> {
		if start < 1 {
			return Err(Error::InvalidArgument("start must be >= 1".to_string()));
		}
		if end < start {
			return Err(Error::InvalidArgument("end must be >= start".to_string()));
		}

		let state = self.state.read();
		Ok(rankings_from(start, state.index.range_by_rank(start, end)))
	}

	/// A window of `high` better-ranked and `low` worse-ranked neighbors
	/// around `customer_id`, clamped at the top and bottom of the index.
	pub fn get_with_neighbors(&self, customer_id: i64, high: i64, low: i64) -> Result<Vec<CustomerRanking>> {
		if high < 0 {
			return Err(Error::InvalidArgument("high must be >= 0".to_string()));
		}
		if low < 0 {
			return Err(Error::InvalidArgument("low must be >= 0".to_string()));
		}

		let state = self.state.read();
		let score = state.registry.get(customer_id);
		if score <= Decimal::ZERO {
			return Err(Error::NotFound(customer_id));
		}
		let rank = state
			.index
			.rank_of(&CustomerScore::new(customer_id, score))
			.ok_or(Error::NotFound(customer_id))?;

		let start = rank.saturating_sub(high as usize).max(1);
		let end = rank.saturating_add(low as usize);
		Ok(rankings_from(start, state.index.range_by_rank(start, end)))
	}

	/// Snapshot of registry size, index size, and the current top score.
	pub fn get_metrics(&self) -> ServiceMetrics {
		let state = self.state.read();
		let top_score = state.index.range_by_rank(1, 1).first().map(|cs| cs.score).unwrap_or(Decimal::ZERO);
		ServiceMetrics {
			total_customers: state.registry.len(),
			leaderboard_customers: state.index.count(),
			top_score,
		}
	}

	/// Replace all state with the given `(customerId, score)` pairs. Never
	/// reachable over HTTP; used only by the process's startup bootstrap.
	pub fn initialize_from_seed<I: IntoIterator<Item = (i64, Decimal)>>(&self, pairs: I) {
		let mut ordered: Vec<(i64, Decimal)> = pairs.into_iter().collect();
		ordered.sort_by(|a, b| CustomerScore::new(a.0, a.1).cmp(&CustomerScore::new(b.0, b.1)));

		let mut state = self.state.write();
		state.registry.clear();
		state.index = RankedIndex::new();
		for (customer_id, score) in ordered {
			state.registry.set(customer_id, score);
			if score > Decimal::ZERO {
				state.index.insert(CustomerScore::new(customer_id, score));
			}
		}
	}
}

fn rankings_from(start: usize, scores: Vec<CustomerScore>) -> Vec<CustomerRanking> {
	scores
		.into_iter()
		.enumerate()
		.map(|(offset, cs)| CustomerRanking { customer_id: cs.customer_id, score: cs.score, rank: start + offset })
		.collect()
}
