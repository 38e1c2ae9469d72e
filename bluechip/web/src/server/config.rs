use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Bind address override (`SERVER_IP`)
    pub server_ip: Option<IpAddr>,
    /// Bind port override (`SERVER_PORT`)
    pub server_port: Option<u16>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Address to bind. Explicit configuration wins over the address the
    /// Dioxus CLI hands us, which wins over `127.0.0.1:8080`.
    pub fn bind_address(&self, cli_ip: Option<IpAddr>, cli_port: Option<u16>) -> SocketAddr {
        let ip = self.server_ip.or(cli_ip).unwrap_or(DEFAULT_IP);
        let port = self.server_port.or(cli_port).unwrap_or(DEFAULT_PORT);
        SocketAddr::new(ip, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_fall_back_to_default_address() {
        let config = ServerConfig::default();

        assert_eq!(
            config.bind_address(None, None),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn can_prefer_cli_address_over_default() {
        let config = ServerConfig::default();
        let cli_ip: IpAddr = "0.0.0.0".parse().unwrap();

        assert_eq!(
            config.bind_address(Some(cli_ip), Some(9000)),
            SocketAddr::new(cli_ip, 9000)
        );
    }

    #[test]
    fn can_override_cli_address_from_config() {
        let config = ServerConfig {
            server_ip: Some("10.0.0.5".parse().unwrap()),
            server_port: None,
        };

        assert_eq!(
            config.bind_address(Some(IpAddr::V4(Ipv4Addr::LOCALHOST)), Some(9000)),
            "10.0.0.5:9000".parse::<SocketAddr>().unwrap()
        );
    }
}
