// =============================================================================
// Application Configuration
// =============================================================================
//
// Environment-driven settings with validated defaults. Unset variables fall
// back to defaults; set-but-invalid values are hard errors rather than being
// silently coerced.
//
//   PULSEBOT_TIMEFRAME   default candle interval (default "1h")
//   PULSEBOT_CACHE_TTL   provider cache TTL in seconds (default 60)
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::Timeframe;

const ENV_TIMEFRAME: &str = "PULSEBOT_TIMEFRAME";
const ENV_CACHE_TTL: &str = "PULSEBOT_CACHE_TTL";

const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Runtime settings for the bot glue around the analysis engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Candle interval used when the user does not specify one.
    pub default_timeframe: Timeframe,
    /// TTL for cached market-data responses, in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_timeframe: Timeframe::H1,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_TIMEFRAME) {
            config.default_timeframe = raw
                .parse()
                .with_context(|| format!("invalid {ENV_TIMEFRAME}: {raw}"))?;
        }

        if let Ok(raw) = std::env::var(ENV_CACHE_TTL) {
            let ttl: u64 = raw
                .parse()
                .with_context(|| format!("invalid {ENV_CACHE_TTL}: {raw}"))?;
            anyhow::ensure!(ttl > 0, "{ENV_CACHE_TTL} must be positive (got {ttl})");
            config.cache_ttl_secs = ttl;
        }

        info!(
            timeframe = %config.default_timeframe,
            cache_ttl_secs = config.cache_ttl_secs,
            "configuration loaded"
        );
        Ok(config)
    }
}
