/// The gateway error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file exists but cannot be read
    #[error("reading configuration: {0}")]
    ConfigRead(#[source] std::io::Error),
    /// The configuration file is not valid
    #[error("parsing configuration: {0}")]
    ConfigParse(#[source] toml::de::Error),
    /// Internal error
    #[error("internal error: {0}")]
    InternalError(String),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
