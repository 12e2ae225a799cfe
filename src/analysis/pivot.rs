// =============================================================================
// Classic Floor-Trader Pivot Points
// =============================================================================
//
// Derived from a single completed candle:
//   PP = (H + L + C) / 3
//   R1 = 2*PP - L          S1 = 2*PP - H
//   R2 = PP + (H - L)      S2 = PP - (H - L)
//
// Pure arithmetic with no history dependency. The caller must pass the last
// *completed* candle — the still-forming one produces meaningless levels.
// =============================================================================

use serde::{Deserialize, Serialize};

/// The five classic pivot levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotPoints {
    pub pp: f64,
    pub r1: f64,
    pub r2: f64,
    pub s1: f64,
    pub s2: f64,
}

/// Compute pivot points from one candle's high, low and close.
pub fn calculate_pivot_points(high: f64, low: f64, close: f64) -> PivotPoints {
    let pp = (high + low + close) / 3.0;
    PivotPoints {
        pp,
        r1: 2.0 * pp - low,
        r2: pp + (high - low),
        s1: 2.0 * pp - high,
        s2: pp - (high - low),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_arithmetic_exact() {
        let p = calculate_pivot_points(110.0, 100.0, 105.0);
        assert_eq!(p.pp, 105.0);
        assert_eq!(p.r1, 110.0);
        assert_eq!(p.r2, 115.0);
        assert_eq!(p.s1, 100.0);
        assert_eq!(p.s2, 95.0);
    }

    #[test]
    fn pivot_levels_are_ordered() {
        let p = calculate_pivot_points(51_234.5, 50_120.0, 50_900.25);
        assert!(p.s2 < p.s1);
        assert!(p.s1 < p.pp);
        assert!(p.pp < p.r1);
        assert!(p.r1 < p.r2);
    }

    #[test]
    fn degenerate_candle_collapses_to_one_level() {
        // High == low == close: every level equals the price.
        let p = calculate_pivot_points(100.0, 100.0, 100.0);
        assert_eq!(p.pp, 100.0);
        assert_eq!(p.r1, 100.0);
        assert_eq!(p.r2, 100.0);
        assert_eq!(p.s1, 100.0);
        assert_eq!(p.s2, 100.0);
    }
}
