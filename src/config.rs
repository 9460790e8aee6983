use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub upstream: UpstreamConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "WEBHOOK_PROXY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "WEBHOOK_PROXY_PORT", default_value_t = 8000)]
    pub port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct UpstreamConfig {
    /// Base URL of the upstream webhook API
    #[arg(
        long,
        env = "WEBHOOK_PROXY_UPSTREAM_BASE",
        default_value = "https://discord.com/api/webhooks"
    )]
    pub api_base: String,

    /// Timeout for a single upstream call in seconds
    #[arg(long, env = "WEBHOOK_PROXY_UPSTREAM_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "WEBHOOK_PROXY_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
