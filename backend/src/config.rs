use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub cors_permissive: bool,
    pub request_timeout: Duration,
    pub shutdown_grace: Duration,
    /// JSON product list replacing the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "80".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            debug: flag(lookup("DEBUG"), false),
            cors_permissive: flag(lookup("CORS_PERMISSIVE"), true),
            request_timeout: Duration::from_secs(
                lookup("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|| "60".to_string())
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            shutdown_grace: Duration::from_secs(
                lookup("SHUTDOWN_GRACE_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("SHUTDOWN_GRACE_SECS must be a whole number of seconds")?,
            ),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug,mnml_shop=debug"
        } else {
            "info,mnml_shop=info"
        }
    }
}

/// Only a case-insensitive "true" switches a flag on.
fn flag(value: Option<String>, default: bool) -> bool {
    match value {
        Some(v) => v.trim().eq_ignore_ascii_case("true"),
        None => default,
    }
}
