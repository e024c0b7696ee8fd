/*
 * Copyright (c) 2025. Courier Contributors
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Configuration for the Courier messaging substrate.
///
/// Loaded from TOML files in XDG-compliant directories; every value has a
/// default so the substrate works without any configuration file present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourierConfig {
    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
    /// Limits and capacity configuration.
    pub limits: LimitsConfig,
    /// Behavioral configuration switches.
    pub behavior: BehaviorConfig,
}

/// Timeout-related configuration values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Deadline applied to requests sent without an explicit one, in
    /// milliseconds. Zero disables the implicit deadline.
    pub default_request_timeout_ms: u64,
}

/// Limits and capacity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Mailbox backlog above which a warning is logged.
    pub mailbox_high_water_mark: usize,
}

/// Behavioral configuration switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Enable tracing.
    pub enable_tracing: bool,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { default_request_timeout_ms: 0 }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { mailbox_high_water_mark: 10_000 }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { enable_tracing: true }
    }
}

impl CourierConfig {
    /// The implicit request deadline, or `None` when disabled.
    pub fn default_request_timeout(&self) -> Option<Duration> {
        match self.timeouts.default_request_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Load configuration from XDG-compliant locations.
    ///
    /// Attempts `$XDG_CONFIG_HOME/courier/config.toml` (with the usual
    /// platform fallbacks). If no configuration file is found, returns the
    /// default configuration; if one exists but is malformed, logs an error
    /// and uses defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("courier") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let Some(path) = xdg_dirs.find_config_file("config.toml") else {
            info!("No configuration file found, using defaults");
            return Self::default();
        };

        info!("Loading configuration from: {}", path.display());
        match std::fs::read_to_string(&path) {
            Ok(config_str) => match toml::from_str::<Self>(&config_str) {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to parse configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations.
    pub static ref CONFIG: CourierConfig = CourierConfig::load();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_implicit_deadline() {
        let config = CourierConfig::default();
        assert_eq!(config.default_request_timeout(), None);
        assert_eq!(config.limits.mailbox_high_water_mark, 10_000);
    }

    #[test]
    fn parses_partial_config() {
        let config: CourierConfig =
            toml::from_str("[timeouts]\ndefault_request_timeout_ms = 250\n").unwrap();
        assert_eq!(config.default_request_timeout(), Some(Duration::from_millis(250)));
        // Unspecified sections keep their defaults.
        assert!(config.behavior.enable_tracing);
    }
}
