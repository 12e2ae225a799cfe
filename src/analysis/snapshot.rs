// =============================================================================
// Market Snapshot Composition
// =============================================================================
//
// Assembles the indicator and level outputs into the single structured value
// the narrative generator and presentation layer consume. Pure except for the
// timestamp; all heavy lifting happens in the indicator and analysis modules.
// =============================================================================

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::analysis::support_resistance::{calculate_support_resistance, SupportResistance};
use crate::indicators::ema::{ema_crossover, EmaCrossover};
use crate::indicators::rsi::{self, interpret_rsi, RsiSignal};
use crate::types::{Candle, MarketData, Timeframe};

/// How many support/resistance levels a snapshot reports per side.
const MAX_LEVELS: usize = 2;

/// Everything the bot knows about a market at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub market: MarketData,
    pub ema: EmaCrossover,
    pub rsi: RsiSignal,
    pub levels: SupportResistance,
    /// ISO 8601 timestamp of when the snapshot was assembled.
    pub generated_at: String,
}

/// Build a full snapshot for `symbol` from its candle series and ticker
/// stats.
///
/// Insufficient history never fails: indicators degrade to neutral/absent and
/// the level set to its defined empty state.
pub fn analyze_market(
    symbol: &str,
    timeframe: Timeframe,
    market: MarketData,
    candles: &[Candle],
) -> MarketSnapshot {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let ema = ema_crossover(&closes);
    // DEFAULT_PERIOD is non-zero, so the period validation cannot trip.
    let latest = rsi::latest_rsi(&closes, rsi::DEFAULT_PERIOD)
        .ok()
        .flatten();
    let rsi = interpret_rsi(latest);
    let levels = calculate_support_resistance(candles, MAX_LEVELS);

    MarketSnapshot {
        symbol: symbol.to_string(),
        timeframe,
        market,
        ema,
        rsi,
        levels,
        generated_at: Utc::now().to_rfc3339(),
    }
}
