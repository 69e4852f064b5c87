//! Process configuration loaded from environment variables.

use std::path::PathBuf;

use tracing::info;

/// Environment variable holding the `host:port` to listen on.
pub const LISTEN_ADDR_VAR: &str = "SIGNUP_LISTEN_ADDR";
/// Environment variable holding the directory served under `/static`.
pub const STATIC_DIR_VAR: &str = "SIGNUP_STATIC_DIR";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Runtime settings for the gateway binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Socket address passed to `TcpListener::bind`.
    pub listen_addr: String,
    /// Directory holding `index.html` and the front-end assets.
    pub static_dir: PathBuf,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            static_dir: default_static_dir(),
        }
    }
}

impl GatewayConfig {
    /// Load settings from the process environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let listen_addr = lookup(LISTEN_ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                info!("{LISTEN_ADDR_VAR} not set, using default: {}", defaults.listen_addr);
                defaults.listen_addr
            });
        let static_dir = lookup(STATIC_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map_or_else(
                || {
                    info!(
                        "{STATIC_DIR_VAR} not set, using default: {}",
                        defaults.static_dir.display()
                    );
                    defaults.static_dir
                },
                PathBuf::from,
            );
        Self { listen_addr, static_dir }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}
