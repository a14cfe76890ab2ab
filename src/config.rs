use std::env;
use anyhow::{Context, Result};

/// Default request body cap, 100 MiB
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub debug: bool,
    pub max_body_bytes: usize,
    pub api_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 8888,
            service_host: "0.0.0.0".to_string(),
            debug: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            api_docs: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Every variable is optional; absent ones fall back to `Config::default()`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let service_port = match lookup("SERVICE_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            None => defaults.service_port,
        };

        let service_host = lookup("SERVICE_HOST").unwrap_or(defaults.service_host);

        let debug = match lookup("DEBUG") {
            Some(raw) => parse_bool(&raw).context("DEBUG must be a boolean (true/false)")?,
            None => defaults.debug,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a non-negative integer")?,
            None => defaults.max_body_bytes,
        };

        let api_docs = match lookup("API_DOCS") {
            Some(raw) => parse_bool(&raw).context("API_DOCS must be a boolean (true/false)")?,
            None => defaults.api_docs,
        };

        Ok(Config {
            service_port,
            service_host,
            debug,
            max_body_bytes,
            api_docs,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Debug mode: {}", self.debug);
        tracing::info!("  Max body size: {} bytes", self.max_body_bytes);
        tracing::info!("  API docs: {}", if self.api_docs { "enabled" } else { "disabled" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("invalid boolean value '{}'", other)),
    }
}
