//! Server configuration.
//!
//! The signaling port and upgrade path are the only tunable parameters.
//! Both can be set as CLI flags or through the environment variables used by
//! the reference deployment (`SIGNALING_PORT`, `SIGNALING_PATH`).

use clap::Parser;

/// Signaling relay server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "signaling-server", version)]
#[command(about = "WebSocket signaling relay for WebRTC session establishment")]
pub struct Config {
    /// Port the server listens on
    #[arg(long, env = "SIGNALING_PORT", default_value_t = 3001)]
    pub port: u16,

    /// URL path accepting WebSocket upgrade requests
    #[arg(long = "path", env = "SIGNALING_PATH", default_value = "/ws")]
    pub ws_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            ws_path: "/ws".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // given/when:
        let config = Config::default();

        // then: defaults match the reference deployment
        assert_eq!(config.port, 3001);
        assert_eq!(config.ws_path, "/ws");
    }

    #[test]
    fn test_parse_without_args_uses_defaults() {
        // when:
        let config = Config::parse_from(["signaling-server"]);

        // then:
        assert_eq!(config.port, 3001);
        assert_eq!(config.ws_path, "/ws");
    }

    #[test]
    fn test_parse_flags_override_defaults() {
        // when:
        let config =
            Config::parse_from(["signaling-server", "--port", "4000", "--path", "/signal"]);

        // then:
        assert_eq!(config.port, 4000);
        assert_eq!(config.ws_path, "/signal");
    }
}
