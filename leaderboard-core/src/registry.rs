// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Authoritative map of customer id to current score, including customers
/// whose score has fallen to zero or below. Entries are created lazily on
/// first update and are never removed.
#[derive(Default)]
pub struct ScoreRegistry {
	scores: HashMap<i64, Decimal>,
}

impl ScoreRegistry {
	pub fn new() -> Self {
		ScoreRegistry::default()
	}

	pub fn get(&self, customer_id: i64) -> Decimal {
		self.scores.get(&customer_id).copied().unwrap_or(Decimal::ZERO)
	}

	pub fn set(&mut self, customer_id: i64, score: Decimal) {
		self.scores.insert(customer_id, score);
	}

	pub fn len(&self) -> usize {
		self.scores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scores.is_empty()
	}

	pub fn clear(&mut self) {
		self.scores.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_customer_reads_as_zero() {
		let registry = ScoreRegistry::new();
		assert_eq!(registry.get(1), Decimal::ZERO);
	}

	#[test]
	fn set_then_get_round_trips() {
		let mut registry = ScoreRegistry::new();
		registry.set(1, Decimal::from(42));
		assert_eq!(registry.get(1), Decimal::from(42));
		assert_eq!(registry.len(), 1);
	}
}
