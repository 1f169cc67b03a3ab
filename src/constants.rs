//! Service-wide constants for paths and timeouts.

/// Default configuration values
pub mod defaults {
    /// Path to the service configuration file
    pub const CONFIG_PATH: &str = "config/maintenance.toml";
}

/// Notification constants
pub mod notifications {
    /// Webhook request timeout in seconds
    pub const WEBHOOK_TIMEOUT_SECONDS: u64 = 10;
}
