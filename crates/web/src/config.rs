// =============================================================================
// CS:GO Pro Web - Page Configuration
// =============================================================================
// Table of Contents:
// 1. Defaults
// 2. PageConfig
// 3. Tests
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Defaults
// -----------------------------------------------------------------------------

/// Scroll offset (CSS px) past which the header turns opaque.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Distance (CSS px) the viewport is shrunk by before a section counts as entered.
pub const DEFAULT_REVEAL_MARGIN: f64 = 100.0;

/// Entrance delay added per child of a revealed section, in seconds.
pub const DEFAULT_STAGGER_INTERVAL: f64 = 0.1;

// -----------------------------------------------------------------------------
// 2. PageConfig
// -----------------------------------------------------------------------------

/// Tunables for page interaction, provided via Leptos context.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub scroll_threshold: f64,
    pub reveal_margin: f64,
    pub stagger_interval: f64,
    /// Build environment name ("development", "production", ...).
    pub environment: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            reveal_margin: DEFAULT_REVEAL_MARGIN,
            stagger_interval: DEFAULT_STAGGER_INTERVAL,
            environment: "production".to_string(),
        }
    }
}

impl PageConfig {
    /// Build config from the `ENVIRONMENT` variable captured at compile time.
    pub fn from_build_env() -> Self {
        let environment = option_env!("ENVIRONMENT").unwrap_or("production");
        Self {
            environment: environment.to_string(),
            ..Self::default()
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Console log level for this environment.
    pub fn log_level(&self) -> log::Level {
        if self.is_development() {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.reveal_margin, 100.0);
        assert_eq!(config.stagger_interval, 0.1);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_build_env_keeps_tunables() {
        let config = PageConfig::from_build_env();
        assert_eq!(config.scroll_threshold, DEFAULT_SCROLL_THRESHOLD);
        assert_eq!(config.reveal_margin, DEFAULT_REVEAL_MARGIN);
        assert_eq!(config.stagger_interval, DEFAULT_STAGGER_INTERVAL);
    }

    #[test]
    fn test_development_logs_debug() {
        let config = PageConfig {
            environment: "development".to_string(),
            ..PageConfig::default()
        };
        assert!(config.is_development());
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
