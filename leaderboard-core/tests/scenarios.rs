// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration tests for the concrete leaderboard scenarios: insertion-order
//! tie-breaks, transitions through zero, neighbor clamping and concurrent
//! access.

use std::sync::Arc;
use std::thread;

use leaderboard_core::LeaderboardService;
use rust_decimal::Decimal;

fn d(v: i64) -> Decimal {
	Decimal::from(v)
}

#[test]
fn insertion_order_tie_break() {
	let svc = LeaderboardService::new();
	svc.update_score(2, d(50)).unwrap();
	svc.update_score(1, d(50)).unwrap();
	svc.update_score(3, d(50)).unwrap();

	let top3 = svc.get_by_rank(1, 3).unwrap();
	let ids: Vec<i64> = top3.iter().map(|r| r.customer_id).collect();
	assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn transition_through_zero() {
	let svc = LeaderboardService::new();
	svc.update_score(7, d(10)).unwrap();
	assert_eq!(svc.get_metrics().leaderboard_customers, 1);

	svc.update_score(7, d(-10)).unwrap();
	assert_eq!(svc.get_metrics().leaderboard_customers, 0);

	svc.update_score(7, d(5)).unwrap();
	assert_eq!(svc.get_metrics().leaderboard_customers, 1);
	let ranking = svc.get_with_neighbors(7, 0, 0).unwrap();
	assert_eq!(ranking[0].rank, 1);
}

#[test]
fn neighbors_with_clamp_at_both_edges() {
	let svc = LeaderboardService::new();
	for i in 1..=100i64 {
		svc.update_score(i, d(101 - i)).unwrap();
	}

	let head = svc.get_with_neighbors(1, 5, 5).unwrap();
	assert_eq!(head.len(), 6);
	assert_eq!(head.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);

	let tail = svc.get_with_neighbors(100, 5, 5).unwrap();
	assert_eq!(tail.len(), 6);
	assert_eq!(tail.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![95, 96, 97, 98, 99, 100]);

	let middle = svc.get_with_neighbors(50, 2, 3).unwrap();
	assert_eq!(middle.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![48, 49, 50, 51, 52, 53]);
	assert_eq!(middle[2].customer_id, 50);
}

#[test]
fn update_return_value_matches_committed_state() {
	let svc = LeaderboardService::new();
	assert_eq!(svc.update_score(42, d(123)).unwrap(), d(123));
	assert_eq!(svc.update_score(42, d(-23)).unwrap(), d(100));
	assert_eq!(svc.get_with_neighbors(42, 0, 0).unwrap()[0].rank, 1);
	assert_eq!(svc.get_metrics().top_score, d(100));
}

#[test]
fn concurrent_updates_preserve_per_customer_sum() {
	let svc = Arc::new(LeaderboardService::new());
	const CUSTOMERS: i64 = 20;
	const UPDATES_PER_CUSTOMER: i64 = 25;

	thread::scope(|scope| {
		for customer_id in 1..=CUSTOMERS {
			let svc = Arc::clone(&svc);
			scope.spawn(move || {
				for _ in 0..UPDATES_PER_CUSTOMER {
					svc.update_score(customer_id, d(1)).unwrap();
				}
			});
		}
	});

	for customer_id in 1..=CUSTOMERS {
		let ranking = svc.get_with_neighbors(customer_id, 0, 0).unwrap();
		assert_eq!(ranking[0].score, d(UPDATES_PER_CUSTOMER));
	}
	assert_eq!(svc.get_metrics().leaderboard_customers, CUSTOMERS as usize);
}

#[test]
fn readers_see_a_consistent_rank_window_during_concurrent_writes() {
	let svc = Arc::new(LeaderboardService::new());
	for customer_id in 1..=50i64 {
		svc.update_score(customer_id, d(51 - customer_id)).unwrap();
	}

	let writer_svc = Arc::clone(&svc);
	thread::scope(|scope| {
		scope.spawn(move || {
			for round in 0..200i64 {
				let customer_id = (round % 50) + 1;
				writer_svc.update_score(customer_id, d(1)).unwrap();
			}
		});

		for _ in 0..200 {
			let window = svc.get_by_rank(1, 10).unwrap();
			assert_eq!(window.len(), 10);
			let ids: std::collections::HashSet<_> = window.iter().map(|r| r.customer_id).collect();
			assert_eq!(ids.len(), 10, "ranks 1..10 must name ten distinct customers");
			for pair in window.windows(2) {
				assert!(pair[0].score >= pair[1].score, "rank window must be non-increasing by score");
			}
		}
	});
}
