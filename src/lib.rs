// =============================================================================
// Pulsebot — Indicator & Level-Detection Engine
// =============================================================================
//
// Pure technical analysis over OHLCV candle series: dual-EMA trend
// classification, Wilder RSI momentum, and support/resistance discovery from
// swing points, clustering and classic pivots — plus the thin glue (symbol
// normalization, TTL cache, configuration) the bot around it needs.
//
// The engine is deterministic and side-effect-free: invalid parameters are
// errors, insufficient history is a defined empty/absent result, and nothing
// here knows about Discord, LLMs or HTTP.
// =============================================================================

pub mod analysis;
pub mod cache;
pub mod config;
pub mod indicators;
pub mod symbol;
pub mod types;
