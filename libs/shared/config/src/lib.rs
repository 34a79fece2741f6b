use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: IpAddr,
    pub server_port: u16,
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 3000,
            seed_sample_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_host: env::var("SERVER_HOST")
                .ok()
                .and_then(|value| {
                    value.parse().map_err(|_| {
                        warn!("SERVER_HOST '{}' is not a valid IP address, using default", value);
                    }).ok()
                })
                .unwrap_or_else(|| {
                    warn!("SERVER_HOST not set, using {}", defaults.server_host);
                    defaults.server_host
                }),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|value| {
                    value.parse().map_err(|_| {
                        warn!("SERVER_PORT '{}' is not a valid port, using default", value);
                    }).ok()
                })
                .unwrap_or_else(|| {
                    warn!("SERVER_PORT not set, using {}", defaults.server_port);
                    defaults.server_port
                }),
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .ok()
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.seed_sample_data),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("SEED_SAMPLE_DATA '{}' is not a boolean, using default", other);
            None
        }
    }
}
