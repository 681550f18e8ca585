// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory ranked customer leaderboard.
//!
//! Three collaborating pieces:
//!
//! - [`registry::ScoreRegistry`] — authoritative customer id -> score map,
//!   including non-positive scores.
//! - [`index::RankedIndex`] — an order-statistic skip list over customers
//!   with a positive score, supporting `O(log N)` insert/remove/rank-of and
//!   `O(log N + k)` rank-window retrieval.
//! - [`service::LeaderboardService`] — the single-writer/multi-reader
//!   coordinator that keeps the two in lockstep and is the only thing
//!   external callers (the HTTP layer, tests, a REPL) should hold onto.
//!
//! This crate never performs I/O and never logs; it is a pure, synchronous,
//! in-process data structure meant to sit behind whatever transport a
//! caller wires up.
#![warn(missing_docs)]

mod error;
mod index;
mod metrics;
mod registry;
mod score;
mod service;

pub use error::{Error, Result};
pub use metrics::ServiceMetrics;
pub use score::{CustomerRanking, CustomerScore};
pub use service::LeaderboardService;
