use std::{io::IsTerminal, net::SocketAddr, path::PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod log;

pub(crate) use log::{LogLevel, LogStyle};

#[derive(Debug, Parser)]
#[command(name = "speedrun-gateway", version)]
/// GraphQL gateway over the speedrun.com REST API
pub struct Args {
    /// IP address on which the server will listen for incoming connections. Defaults to 127.0.0.1:5000.
    #[arg(short, long, env = "SPEEDRUN_LISTEN_ADDRESS")]
    pub listen_address: Option<SocketAddr>,
    /// Base url of the upstream REST API. Defaults to https://www.speedrun.com/api/v1.
    #[arg(short, long, env = "SPEEDRUN_BASE_URL")]
    pub base_url: Option<String>,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "SPEEDRUN_CONFIG_PATH", default_value = "./speedrun.toml")]
    pub config: PathBuf,
    /// Set the logging level
    #[arg(long = "log", env = "SPEEDRUN_LOG")]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "SPEEDRUN_LOG_STYLE", default_value_t = LogStyle::Text)]
    pub log_style: LogStyle,
}

impl Args {
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    /// Installs the global subscriber.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(self.log_level().as_filter_str())?;
        let layer = tracing_subscriber::fmt::layer();

        let layer = match self.log_style {
            // for interactive terminals we provide colored output
            LogStyle::Text if std::io::stdout().is_terminal() => layer.with_ansi(true).boxed(),
            // for server logs, colors are off
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        };

        tracing_subscriber::registry().with(layer.with_filter(filter)).try_init()?;

        Ok(())
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
