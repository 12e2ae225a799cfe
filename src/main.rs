// =============================================================================
// Pulsebot — Market Snapshot Runner
// =============================================================================
//
// Loads one or more captured market-data fixtures (JSON files with ticker
// stats and a candle series, as the market-data provider would deliver them)
// and prints the computed snapshot for each. The Discord and HTTP glue lives
// outside this crate; this binary is the reference consumer of the analysis
// engine.
//
// Usage: pulsebot <fixture.json> [more fixtures...]
// =============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pulsebot::analysis::snapshot::{analyze_market, MarketSnapshot};
use pulsebot::cache::MemoryCache;
use pulsebot::config::AppConfig;
use pulsebot::symbol::normalize_symbol;
use pulsebot::types::{Candle, MarketData, Timeframe};

/// A captured market-data provider response.
#[derive(Debug, Deserialize)]
struct Fixture {
    symbol: String,
    #[serde(default)]
    timeframe: Option<Timeframe>,
    market: MarketData,
    candles: Vec<Candle>,
}

fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let snapshots: MemoryCache<MarketSnapshot> =
        MemoryCache::new(Duration::from_secs(config.cache_ttl_secs));

    let paths: Vec<String> = std::env::args().skip(1).collect();
    anyhow::ensure!(!paths.is_empty(), "usage: pulsebot <fixture.json> [...]");

    for path in &paths {
        let snapshot = snapshot_from_fixture(path, &config, &snapshots)?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}

/// Load `path`, normalize its symbol and produce (or reuse) a snapshot.
fn snapshot_from_fixture(
    path: &str,
    config: &AppConfig,
    snapshots: &MemoryCache<MarketSnapshot>,
) -> Result<MarketSnapshot> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading fixture {path}"))?;
    let fixture: Fixture =
        serde_json::from_str(&raw).with_context(|| format!("parsing fixture {path}"))?;

    let symbol = normalize_symbol(&fixture.symbol)?;
    let timeframe = fixture.timeframe.unwrap_or(config.default_timeframe);

    let key = format!("snapshot:{symbol}:{timeframe}");
    if let Some(cached) = snapshots.get(&key) {
        return Ok(cached);
    }

    if fixture.candles.len() < 50 {
        warn!(
            symbol = %symbol,
            candles = fixture.candles.len(),
            "short candle series: levels and slow indicators will be empty"
        );
    }

    let snapshot = analyze_market(&symbol, timeframe, fixture.market, &fixture.candles);
    info!(
        symbol = %symbol,
        %timeframe,
        trend = %snapshot.ema.trend,
        momentum = %snapshot.rsi.signal,
        "snapshot computed"
    );

    snapshots.set(key, snapshot.clone());
    Ok(snapshot)
}
