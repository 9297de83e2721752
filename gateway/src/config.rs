use std::{
    fs,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
    time::Duration,
};

use serde::Deserialize;
use speedrun::{LoaderConfig, DEFAULT_BASE_URL};

use crate::args::Args;

pub(crate) const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000);

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub network: NetworkConfig,
    pub graph: GraphConfig,
    pub upstream: UpstreamConfig,
    pub loader: LoaderSettings,
    pub health: HealthConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub listen_address: Option<SocketAddr>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Path of the GraphQL endpoint. Default: /graphql.
    pub path: String,
    /// Whether the schema answers introspection queries. Default: true.
    pub introspection: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            path: "/graphql".to_string(),
            introspection: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: 30,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Batching knobs of the per-request entity loader.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderSettings {
    pub max_batch_size: usize,
    pub delay_ms: u64,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        let defaults = LoaderConfig::default();

        LoaderSettings {
            max_batch_size: defaults.max_batch_size,
            delay_ms: 1,
        }
    }
}

impl LoaderSettings {
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            max_batch_size: self.max_batch_size.max(1),
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        HealthConfig {
            enabled: true,
            path: "/health".to_string(),
        }
    }
}

impl Config {
    /// Reads the file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Config, crate::Error> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                return Ok(Config::default());
            }
            Err(error) => return Err(crate::Error::ConfigRead(error)),
        };

        toml::from_str(&contents).map_err(crate::Error::ConfigParse)
    }

    /// Command line flags win over the file.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(listen_address) = args.listen_address {
            self.network.listen_address = Some(listen_address);
        }

        if let Some(base_url) = &args.base_url {
            self.upstream.base_url.clone_from(base_url);
        }

        self
    }

    pub fn listen_address(&self) -> SocketAddr {
        self.network.listen_address.unwrap_or(DEFAULT_LISTEN_ADDRESS)
    }
}
