//! Subcommand handlers
//!
//! Each handler returns a process exit code; errors are printed, not
//! propagated, so the binary always exits cleanly.

use anyhow::Result;
use reqwest::Client;
use tracing::{error, info};

use super::commands::{HealthArgs, ProjectsArgs, ServeArgs, StatsArgs};
use super::output::{HealthReport, OutputFormatter};
use crate::config::FolioConfig;
use crate::github::GithubClient;
use crate::projects::{ProjectAggregator, ProjectFilter};
use crate::server;
use crate::stats::{CodeChefProvider, CodeforcesProvider, LeetCodeProvider, StatsService};
use std::sync::Arc;

/// Runs the HTTP API server until shutdown.
pub async fn handle_serve(args: &ServeArgs) -> i32 {
    let mut config = FolioConfig::default();
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.clone();
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        return 1;
    }

    info!("{}", config);

    match server::run(config).await {
        Ok(()) => 0,
        Err(e) => {
            error!("Server error: {}", e);
            1
        }
    }
}

/// One-shot project aggregation.
pub async fn handle_projects(args: &ProjectsArgs) -> i32 {
    let mut config = FolioConfig::default();
    if let Some(username) = &args.username {
        config.github_username = username.clone();
    }
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        return 1;
    }

    match run_projects(&config, args).await {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Project aggregation failed: {}", e);
            1
        }
    }
}

async fn run_projects(config: &FolioConfig, args: &ProjectsArgs) -> Result<String> {
    let github = Arc::new(GithubClient::new(
        config.github_token.clone(),
        config.request_timeout(),
    ));
    let aggregator = ProjectAggregator::new(
        github,
        config.github_username.clone(),
        ProjectFilter::new(config.project_filters.clone()),
    );

    let listing = aggregator.aggregate().await;
    OutputFormatter::new(args.format.into()).format_projects(&listing)
}

/// One-shot stats fetch.
pub async fn handle_stats(args: &StatsArgs) -> i32 {
    let config = FolioConfig::default();

    match run_stats(&config, args).await {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Stats fetch failed: {}", e);
            1
        }
    }
}

async fn run_stats(config: &FolioConfig, args: &StatsArgs) -> Result<String> {
    let client = probe_client(config)?;
    let service = StatsService::new(vec![
        Box::new(LeetCodeProvider::new(
            client.clone(),
            config.leetcode_user.clone(),
        )),
        Box::new(CodeforcesProvider::new(
            client.clone(),
            config.codeforces_user.clone(),
        )),
        Box::new(CodeChefProvider::new(client, config.codechef_user.clone())),
    ]);

    let stats = service.gather().await;
    OutputFormatter::new(args.format.into()).format_stats(&stats)
}

/// Probes upstream reachability.
pub async fn handle_health(args: &HealthArgs) -> i32 {
    let config = FolioConfig::default();

    match run_health(&config, args).await {
        Ok((output, all_healthy)) => {
            println!("{}", output);
            if all_healthy {
                0
            } else {
                1
            }
        }
        Err(e) => {
            error!("Health check failed: {}", e);
            1
        }
    }
}

async fn run_health(config: &FolioConfig, args: &HealthArgs) -> Result<(String, bool)> {
    let github = GithubClient::new(config.github_token.clone(), config.request_timeout());
    let client = probe_client(config)?;

    let mut reports = vec![HealthReport {
        name: "github".to_string(),
        healthy: github.health_check().await,
    }];

    let probes = [
        ("leetcode", "https://leetcode-stats-api.herokuapp.com/"),
        ("codeforces", "https://codeforces.com/api/"),
        ("codechef", "https://competeapi.vercel.app/"),
    ];
    for (name, url) in probes {
        reports.push(HealthReport {
            name: name.to_string(),
            healthy: probe(&client, url).await,
        });
    }

    reports.push(HealthReport {
        name: "email".to_string(),
        healthy: config.mail.user.is_some() && config.mail.password.is_some(),
    });

    let all_healthy = reports.iter().all(|r| r.healthy);
    let output = OutputFormatter::new(args.format.into()).format_health(&reports)?;
    Ok((output, all_healthy))
}

fn probe_client(config: &FolioConfig) -> Result<Client> {
    Ok(Client::builder()
        .timeout(config.request_timeout())
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

async fn probe(client: &Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) => !response.status().is_server_error(),
        Err(_) => false,
    }
}
