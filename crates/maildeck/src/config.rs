//! Server configuration.

use std::net::SocketAddr;

use tracing::warn;

/// Address the server binds when `MAILDECK_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Runtime configuration for the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Socket address to bind.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// An unparsable `MAILDECK_ADDR` falls back to the default with a
    /// warning rather than refusing to start.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_addr(std::env::var("MAILDECK_ADDR").ok().as_deref())
    }

    fn from_addr(addr: Option<&str>) -> Self {
        let bind_addr = addr
            .and_then(|raw| {
                raw.parse()
                    .map_err(|err| warn!("ignoring invalid MAILDECK_ADDR {raw:?}: {err}"))
                    .ok()
            })
            .unwrap_or_else(default_addr);

        Self { bind_addr }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_addr(),
        }
    }
}

#[allow(clippy::expect_used)] // the constant is a valid socket address
fn default_addr() -> SocketAddr {
    DEFAULT_ADDR.parse().expect("default bind address parses")
}
