use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use thiserror::Error;

/// The default port the server will listen on.
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{variable} must be a port number, got \"{value}\"")]
    InvalidPort {
        variable: &'static str,
        value: String,
    },
    #[error("{variable} must be an IP address, got \"{value}\"")]
    InvalidHost {
        variable: &'static str,
        value: String,
    },
    #[error("Could not find the client build directory: {0}")]
    MissingStaticDir(PathBuf),
}

/// How the wavefy server is set up
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// A directory with a built client to serve next to the API
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    const PORT_VARIABLES: [&'static str; 2] = ["WAVEFY_SERVER_PORT", "PORT"];
    const HOST_VARIABLE: &'static str = "WAVEFY_SERVER_HOST";
    const STATIC_DIR_VARIABLE: &'static str = "WAVEFY_STATIC_DIR";

    /// Reads the config from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the config through `lookup`, which returns the value of a variable if it is set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = Self::PORT_VARIABLES
            .into_iter()
            .find_map(|variable| lookup(variable).map(|value| (variable, value)))
            .map(|(variable, value)| {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort { variable, value })
            })
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        let host = lookup(Self::HOST_VARIABLE)
            .map(|value| {
                value
                    .trim()
                    .parse::<IpAddr>()
                    .map_err(|_| ConfigError::InvalidHost {
                        variable: Self::HOST_VARIABLE,
                        value,
                    })
            })
            .transpose()?
            .unwrap_or(DEFAULT_HOST);

        let static_dir = lookup(Self::STATIC_DIR_VARIABLE)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    pub fn address(&self) -> SocketAddr {
        (self.host, self.port).into()
    }

    /// Ensures the configured static directory exists
    pub fn check_static_dir(&self) -> Result<(), ConfigError> {
        match &self.static_dir {
            Some(dir) if !dir.is_dir() => Err(ConfigError::MissingStaticDir(dir.clone())),
            _ => Ok(()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            static_dir: None,
        }
    }
}
