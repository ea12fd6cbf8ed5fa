use std::path::PathBuf;
use std::time::Duration;

/// Application configuration and constants
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Cadence of the carousel autoplay timer
    pub autoplay_interval: Duration,
    /// Minimum horizontal displacement, in pixels, for a touch gesture to
    /// count as a swipe rather than a tap
    pub swipe_threshold: f32,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5006,
            static_dir: PathBuf::from("static"),
            autoplay_interval: Duration::from_millis(5000),
            swipe_threshold: 50.0,
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        static_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
        autoplay_interval: Option<Duration>,
    ) -> Self {
        let defaults = Self::new();
        Self {
            host: host.unwrap_or(defaults.host),
            port: port.unwrap_or(defaults.port),
            static_dir,
            autoplay_interval: autoplay_interval.unwrap_or(defaults.autoplay_interval),
            swipe_threshold: defaults.swipe_threshold,
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
