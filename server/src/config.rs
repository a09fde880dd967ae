use std::{env, error::Error, fmt, num::NonZeroUsize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Errors produced while reading the server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    /// A variable is set but its value can't be used.
    InvalidValue {
        /// The variable's name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::InvalidValue { var, value } => {
                write!(f, "invalid value for {var}: {value:?}")
            }
        }
    }
}

impl Error for ConfigErr {}

/// Immutable settings for a server instance, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
    body_limit: NonZeroUsize,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Recognised variables are `HOST`, `PORT` and `BODY_LIMIT`; any of them may be
    /// left unset to use its default.
    ///
    /// # Returns
    /// A `ServerConfig` or the first invalid variable found.
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// * `lookup` - Returns the value of a variable, or `None` if it's unset.
    ///
    /// # Returns
    /// A `ServerConfig` or the first invalid variable found.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => parse("PORT", value)?,
            None => DEFAULT_PORT,
        };

        let body_limit = match lookup("BODY_LIMIT") {
            Some(value) => parse("BODY_LIMIT", value)?,
            None => default_body_limit(),
        };

        Ok(Self {
            host,
            port,
            body_limit,
        })
    }

    /// Returns the address to bind, in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the maximum accepted request body size in bytes.
    pub fn body_limit(&self) -> usize {
        self.body_limit.get()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit: default_body_limit(),
        }
    }
}

fn default_body_limit() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_BODY_LIMIT).unwrap_or(NonZeroUsize::MIN)
}

fn parse<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigErr> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigErr::InvalidValue { var, value })
}
