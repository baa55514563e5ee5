use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: IpAddr,
    pub port: u16,

    // Directory served as static files (client bundles)
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse()
                .context("HOST is not a valid IP address")?,
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "build".to_string()),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
