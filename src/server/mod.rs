//! actix-web HTTP API
//!
//! Exposes the aggregated portfolio data and the contact endpoint. The
//! server holds no mutable state: every request reads fresh from the
//! upstream services, which degrade independently per section.

mod error;
mod handlers;

pub use error::ApiError;

use crate::config::FolioConfig;
use crate::github::GithubClient;
use crate::mail::Mailer;
use crate::projects::{ProjectAggregator, ProjectFilter};
use crate::stats::{CodeChefProvider, CodeforcesProvider, LeetCodeProvider, StatsService};
use actix_web::{web, App, HttpServer};
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub aggregator: ProjectAggregator,
    pub stats: StatsService,
    pub mailer: Mailer,
}

/// Builds the shared application state from configuration.
pub fn build_state(config: &FolioConfig) -> AppState {
    let timeout = config.request_timeout();

    let github = Arc::new(GithubClient::new(config.github_token.clone(), timeout));
    let aggregator = ProjectAggregator::new(
        github,
        config.github_username.clone(),
        ProjectFilter::new(config.project_filters.clone()),
    );

    let stats_client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client");
    let stats = StatsService::new(vec![
        Box::new(LeetCodeProvider::new(
            stats_client.clone(),
            config.leetcode_user.clone(),
        )),
        Box::new(CodeforcesProvider::new(
            stats_client.clone(),
            config.codeforces_user.clone(),
        )),
        Box::new(CodeChefProvider::new(
            stats_client,
            config.codechef_user.clone(),
        )),
    ]);

    let mailer = Mailer::new(config.mail.clone(), timeout);

    AppState {
        aggregator,
        stats,
        mailer,
    }
}

/// Runs the HTTP server until shutdown.
pub async fn run(config: FolioConfig) -> std::io::Result<()> {
    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(build_state(&config));

    info!(%bind_addr, "Starting folio API server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/health", web::get().to(handlers::health))
            .route("/api/projects", web::get().to(handlers::get_projects))
            .route("/api/stats", web::get().to(handlers::get_stats))
            .route("/api/contact", web::post().to(handlers::post_contact))
    })
    .bind(bind_addr)?
    .run()
    .await
}
