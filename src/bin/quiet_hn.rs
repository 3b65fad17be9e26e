//! quiet-hn - a calm Hacker News front page.
//!
//! Serves the top stories that link somewhere, refreshed at most once per
//! cache TTL no matter how many requests arrive.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use quiet_hn::server::config::Config;
use quiet_hn::server::{AppState, HtmlRenderer, router};
use quiet_hn::{Limit, QuietHn};

/// quiet-hn web server.
#[derive(Parser)]
#[command(name = "quiet-hn")]
#[command(version)]
#[command(about = "Serve a quiet Hacker News front page")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The port to start the web server on [default: 3000].
    #[arg(short, long, env = "QUIET_HN_PORT")]
    port: Option<u16>,

    /// The number of top stories to display, -1 for all [default: 30].
    #[arg(short, long, env = "QUIET_HN_NUM_STORIES", allow_hyphen_values = true)]
    num_stories: Option<Limit>,

    /// Seconds a fetched page is served from cache [default: 3].
    #[arg(long, env = "QUIET_HN_CACHE_TTL_SECS")]
    cache_ttl_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // CLI flags override the config file
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.set_port(port)?;
    }
    let num_stories = match args.num_stories {
        Some(limit) => limit,
        None => config.frontpage.limit()?,
    };
    let cache_ttl = args
        .cache_ttl_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.frontpage.cache_ttl());

    let front_page = QuietHn::builder()
        .hacker_news_url(&config.upstream.base_url)
        .upstream_timeout(config.upstream.timeout())
        .num_stories(num_stories)
        .cache_ttl(cache_ttl)
        .build()?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, %num_stories, ?cache_ttl, "quiet-hn listening");

    let app = router(AppState::new(front_page, HtmlRenderer));
    axum::serve(listener, app).await?;

    Ok(())
}
