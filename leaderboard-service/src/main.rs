// Copyright 2023 Parity Technologies (UK) Ltd.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Process entrypoint for the leaderboard HTTP service.
//!
//! Parses configuration, builds the in-process coordinator, optionally loads
//! the sample seed dataset, then serves the router until a shutdown signal
//! arrives. The coordinator lives for the process lifetime and is dropped
//! with it; there is no persistence step.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use clap::Parser;
use leaderboard_core::LeaderboardService;
use leaderboard_service::config::Config;
use leaderboard_service::{routes, seed};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();

	let service = Arc::new(LeaderboardService::new());
	if config.seed {
		service.initialize_from_seed(seed::sample_dataset());
		log::info!("seeded leaderboard with the sample dataset");
	}

	let router = routes::build_router(Arc::clone(&service)).route_layer(middleware::from_fn(log_request));

	let addr = config.bind_addr();
	let listener = TcpListener::bind(addr).await?;
	log::info!("listening on {addr}, seed={}", config.seed);

	axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

	log::info!("shutdown complete");
	Ok(())
}

/// Logs one line per handled request at debug level: method, path and
/// outcome status. Runs entirely outside the coordinator's lock, which is
/// only ever held inside the handlers this middleware wraps.
async fn log_request(req: Request, next: Next) -> Response {
	let method = req.method().clone();
	let path = req
		.extensions()
		.get::<MatchedPath>()
		.map(|p| p.as_str().to_string())
		.unwrap_or_else(|| req.uri().path().to_string());

	let start = Instant::now();
	let response = next.run(req).await;
	log::debug!("{method} {path} -> {} ({:?})", response.status(), start.elapsed());
	response
}

/// Resolves once SIGINT or (on unix) SIGTERM arrives, letting `axum::serve`
/// stop accepting new connections and drain in-flight ones before exiting.
async fn shutdown_signal() {
	let ctrl_c = async {
		tokio::signal::ctrl_c().await.expect("failed to install SIGINT handler");
	};

	#[cfg(unix)]
	let terminate = async {
		tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
			.expect("failed to install SIGTERM handler")
			.recv()
			.await;
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {}
		_ = terminate => {}
	}

	log::info!("shutdown signal received");
}
