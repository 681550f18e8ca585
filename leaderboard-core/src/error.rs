// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::result;

use thiserror::Error;

/// Leaderboard result alias.
pub type Result<T> = result::Result<T, Error>;

/// Error conditions surfaced by the score registry, ranked index and coordinator.
#[derive(Debug, Error)]
pub enum Error {
	/// A caller-supplied argument violated a precondition (out-of-range delta,
	/// malformed rank window, negative neighbor counts, ...).
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The requested customer is not present in the ranked index.
	#[error("customer {0} is not present in the leaderboard")]
	NotFound(i64),

	/// An internal invariant was violated (e.g. decimal overflow). Never caused
	/// by caller input.
	#[error("internal leaderboard error: {0}")]
	Internal(String),
}

#[cfg(test)]
impl PartialEq for Error {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Error::InvalidArgument(a), Error::InvalidArgument(b)) => a == b,
			(Error::NotFound(a), Error::NotFound(b)) => a == b,
			(Error::Internal(a), Error::Internal(b)) => a == b,
			_ => false,
		}
	}
}
