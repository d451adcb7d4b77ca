use anyhow::Result;
use botswana_jobs::config::{Args, Settings};
use botswana_jobs::fetch::HttpFetcher;
use botswana_jobs::registry::SourceRegistry;
use botswana_jobs::server::{self, AppState};
use botswana_jobs::sources::jobs_botswana::JobsBotswanaScraper;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings: Settings = Args::parse().into();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("botswana_jobs=info".parse().unwrap()),
        )
        .init();

    info!("starting jobs-api v{}", env!("CARGO_PKG_VERSION"));

    let fetcher = Arc::new(HttpFetcher::new(settings.request_timeout));
    let scraper = JobsBotswanaScraper::new(fetcher).with_cache_ttl(settings.cache_ttl);

    let mut registry = SourceRegistry::new();
    registry.register(Arc::new(scraper));
    info!("registered sources: {:?}", registry.source_ids());

    let state = Arc::new(AppState { registry });
    server::serve(&settings.bind, state).await
}
