// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;

/// Process-level configuration: parsed once at startup from CLI flags with
/// environment-variable fallbacks. There is no config file and no
/// hot-reload.
#[derive(Debug, Parser)]
#[command(name = "leaderboard-service", about = "In-memory ranked customer leaderboard service")]
pub struct Config {
	/// Address to bind the HTTP listener to.
	#[arg(long, env = "LEADERBOARD_HOST", default_value = "127.0.0.1")]
	pub host: IpAddr,

	/// Port to bind the HTTP listener to.
	#[arg(long, env = "LEADERBOARD_PORT", default_value_t = 8080)]
	pub port: u16,

	/// Load the hard-coded sample dataset before accepting connections.
	#[arg(long, env = "LEADERBOARD_SEED", default_value_t = false)]
	pub seed: bool,
}

impl Config {
	pub fn bind_addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}
}
