// =============================================================================
// Swing-Point Detection (fractal highs / lows)
// =============================================================================
//
// A candle at index `i` is a swing high when its high is *strictly* greater
// than the high of every other candle in the window [i-lookback, i+lookback];
// swing lows are the mirror image on lows. A tie with any neighbour
// disqualifies the candidate, so plateaus never count as pivots.
//
// Candles within `lookback` of either end of the slice have no full window
// and are never candidates; a slice of `2*lookback` candles or fewer yields
// no swings at all.
// =============================================================================

use crate::types::Candle;

/// Default symmetric neighbourhood used by the orchestrator.
pub const DEFAULT_LOOKBACK: usize = 10;

/// Swing prices extracted from a candle window, in scan (ascending-index)
/// order — not sorted by price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwingPoints {
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
}

/// Scan `candles` for local extrema with a symmetric `lookback` window.
pub fn find_swing_points(candles: &[Candle], lookback: usize) -> SwingPoints {
    let mut swings = SwingPoints::default();

    if candles.len() <= 2 * lookback {
        return swings;
    }

    for i in lookback..candles.len() - lookback {
        let current_high = candles[i].high;
        let current_low = candles[i].low;

        let mut is_swing_high = true;
        let mut is_swing_low = true;

        for (j, other) in candles[i - lookback..=i + lookback].iter().enumerate() {
            if j == lookback {
                continue; // the candidate itself
            }
            if other.high >= current_high {
                is_swing_high = false;
            }
            if other.low <= current_low {
                is_swing_low = false;
            }
            if !is_swing_high && !is_swing_low {
                break;
            }
        }

        if is_swing_high {
            swings.highs.push(current_high);
        }
        if is_swing_low {
            swings.lows.push(current_low);
        }
    }

    swings
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Candle with the given high/low; remaining fields are irrelevant here.
    fn candle(high: f64, low: f64) -> Candle {
        Candle {
            open_time: 0,
            open: (high + low) / 2.0,
            high,
            low,
            close: (high + low) / 2.0,
            volume: 1.0,
            close_time: 0,
        }
    }

    /// Series where both high and low follow `f(i)`.
    fn series(values: impl IntoIterator<Item = f64>) -> Vec<Candle> {
        values.into_iter().map(|v| candle(v + 1.0, v - 1.0)).collect()
    }

    #[test]
    fn short_window_yields_no_swings() {
        let candles = series((0..20).map(|i| i as f64));
        // 20 candles, lookback 10: no index has a full window.
        let swings = find_swing_points(&candles, 10);
        assert!(swings.highs.is_empty());
        assert!(swings.lows.is_empty());
    }

    #[test]
    fn monotonic_series_has_no_interior_extrema() {
        let candles = series((0..60).map(|i| i as f64));
        let swings = find_swing_points(&candles, 3);
        assert!(swings.highs.is_empty());
        assert!(swings.lows.is_empty());
    }

    #[test]
    fn isolated_peak_and_trough_are_found() {
        // Flat series with a spike at index 10 and a dip at index 20.
        let mut candles = series(std::iter::repeat(100.0).take(30));
        candles[10] = candle(110.0, 99.5);
        candles[20] = candle(100.5, 90.0);

        let swings = find_swing_points(&candles, 3);
        assert_eq!(swings.highs, vec![110.0]);
        assert_eq!(swings.lows, vec![90.0]);
    }

    #[test]
    fn tie_with_neighbour_disqualifies() {
        // Twin peaks of equal height: neither is strictly greater.
        let mut candles = series(std::iter::repeat(100.0).take(30));
        candles[10] = candle(110.0, 99.0);
        candles[12] = candle(110.0, 99.0);

        let swings = find_swing_points(&candles, 3);
        assert!(swings.highs.is_empty());
    }

    #[test]
    fn swings_come_back_in_scan_order() {
        let mut candles = series(std::iter::repeat(100.0).take(40));
        candles[8] = candle(105.0, 99.0); // earlier, lower peak
        candles[25] = candle(120.0, 99.0); // later, higher peak

        let swings = find_swing_points(&candles, 3);
        assert_eq!(swings.highs, vec![105.0, 120.0]);
    }

    #[test]
    fn spike_candle_counts_on_both_sides() {
        // A spike candle has the greatest high but also the smallest low:
        // it registers as a swing high and a swing low simultaneously.
        let mut candles = series(std::iter::repeat(100.0).take(20));
        candles[10] = Candle {
            open_time: 0,
            open: 100.0,
            high: 115.0,
            low: 85.0,
            close: 100.0,
            volume: 1.0,
            close_time: 0,
        };
        let swings = find_swing_points(&candles, 2);
        assert_eq!(swings.highs, vec![115.0]);
        assert_eq!(swings.lows, vec![85.0]);
    }
}
