// =============================================================================
// Support / Resistance Orchestration
// =============================================================================
//
// Combines swing-point detection, level clustering and classic pivots into
// the final level set around the current price:
//
//   1. Pivot points from the last *completed* candle (second-to-last).
//   2. Swing detection over the trailing 100 candles (lookback 10).
//   3. Cluster swing highs -> resistance candidates, swing lows -> support
//      candidates (1% threshold), ranked by cluster significance.
//   4. Keep supports strictly below / resistances strictly above the latest
//      close, truncated to `max_levels` *in significance order*.
//   5. Backfill one pivot level per side (S1 / R1) when a side came up short.
//      The truncation in step 4 runs before this append, so the caps hold.
//   6. Sort each side by proximity to price: support descending, resistance
//      ascending.
//
// Fewer than 50 candles is a defined empty state, not an error.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::analysis::cluster::cluster_levels;
use crate::analysis::pivot::{calculate_pivot_points, PivotPoints};
use crate::analysis::swing::{find_swing_points, DEFAULT_LOOKBACK};
use crate::types::Candle;

/// Minimum history required before any levels are reported.
const MIN_CANDLES: usize = 50;
/// Swing detection only looks at this many trailing candles.
const SWING_WINDOW: usize = 100;
/// Relative gap threshold used when clustering swing prices.
const CLUSTER_THRESHOLD: f64 = 0.01;

/// Final level set. Supports descend and resistances ascend, so the first
/// element of each side is the level closest to the current price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportResistance {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
    pub pivot_points: Option<PivotPoints>,
}

impl SupportResistance {
    fn empty() -> Self {
        Self {
            support: Vec::new(),
            resistance: Vec::new(),
            pivot_points: None,
        }
    }
}

/// Compute up to `max_levels` support and resistance levels from `candles`.
pub fn calculate_support_resistance(candles: &[Candle], max_levels: usize) -> SupportResistance {
    if candles.len() < MIN_CANDLES {
        return SupportResistance::empty();
    }

    // Second-to-last candle is the last completed one.
    let pivot_points = candles
        .len()
        .checked_sub(2)
        .and_then(|i| candles.get(i))
        .map(|c| calculate_pivot_points(c.high, c.low, c.close));

    let tail = &candles[candles.len().saturating_sub(SWING_WINDOW)..];
    let swings = find_swing_points(tail, DEFAULT_LOOKBACK);

    let resistance_candidates = cluster_levels(&swings.highs, CLUSTER_THRESHOLD);
    let support_candidates = cluster_levels(&swings.lows, CLUSTER_THRESHOLD);

    let current_price = match candles.last() {
        Some(c) => c.close,
        None => return SupportResistance::empty(),
    };

    // Filter each side against the current price and cap at `max_levels`
    // while still in cluster-significance order.
    let mut support: Vec<f64> = support_candidates
        .into_iter()
        .filter(|&level| level < current_price)
        .take(max_levels)
        .collect();
    let mut resistance: Vec<f64> = resistance_candidates
        .into_iter()
        .filter(|&level| level > current_price)
        .take(max_levels)
        .collect();

    // Pivot backfill: one check per side, after truncation, so each side can
    // only grow back up to the cap.
    if let Some(pp) = &pivot_points {
        if support.len() < max_levels && pp.s1 < current_price {
            support.push(pp.s1);
        }
        if resistance.len() < max_levels && pp.r1 > current_price {
            resistance.push(pp.r1);
        }
    }

    // Closest-to-price first on both sides.
    support.sort_by(|a, b| b.total_cmp(a));
    resistance.sort_by(|a, b| a.total_cmp(b));

    SupportResistance {
        support,
        resistance,
        pivot_points,
    }
}
