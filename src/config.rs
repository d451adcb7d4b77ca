//! Runtime settings for the API binary.

use clap::Parser;
use std::time::Duration;

/// Command-line arguments for `jobs-api`.
#[derive(Debug, Parser)]
#[command(name = "jobs-api", version, about = "Botswana job listings API")]
pub struct Args {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// Upstream request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Facet cache time-to-live in seconds.
    #[arg(long, default_value_t = 300)]
    pub cache_ttl_secs: u64,
}

/// Resolved settings passed down explicitly; no globals.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            bind: args.bind,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            cache_ttl: Duration::from_secs(args.cache_ttl_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: Settings = Args::parse_from(["jobs-api"]).into();
        assert_eq!(settings.bind, "0.0.0.0:8000");
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_overrides() {
        let settings: Settings =
            Args::parse_from(["jobs-api", "--bind", "127.0.0.1:9000", "--cache-ttl-secs", "60"])
                .into();
        assert_eq!(settings.bind, "127.0.0.1:9000");
        assert_eq!(settings.cache_ttl, Duration::from_secs(60));
    }
}
