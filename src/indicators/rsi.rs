// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to judge
// whether an asset is overbought or oversold.
//
// Step 1 — Compute signed deltas from consecutive values, split into gains
//          (`max(delta, 0)`) and losses (`max(-delta, 0)`).
// Step 2 — Seed average gain / average loss with the SMA of the first
//          `period` gains / losses.
// Step 3 — Wilder's smoothing for every later delta:
//            avg_gain = (avg_gain * (period - 1) + gain) / period
//            avg_loss = (avg_loss * (period - 1) + loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS), clamped to 100 when avg_loss is zero.
//
// Only fully-smoothed steps emit an RSI value; the seed step itself does not.
// Thresholds: RSI > 70 => overbought, RSI < 30 => oversold, else neutral.
// =============================================================================

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Default look-back used across the bot.
pub const DEFAULT_PERIOD: usize = 14;

/// Momentum reading derived from the latest RSI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Oversold,
    Overbought,
    Neutral,
}

impl std::fmt::Display for Momentum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oversold => write!(f, "oversold"),
            Self::Overbought => write!(f, "overbought"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// The latest RSI value together with its classification.
///
/// `value` is `None` when there was not enough history to compute RSI; the
/// signal is then `Neutral`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiSignal {
    pub value: Option<f64>,
    pub signal: Momentum,
}

/// Compute the RSI series for `values` with the given look-back `period`.
///
/// One value is produced per Wilder-smoothed step, so the output is
/// `values.len() - period - 1` entries long (and empty when the input has
/// exactly `period + 1` values — the seed consumes them all).
///
/// # Errors
/// `period == 0` is an invalid parameter and fails immediately.
///
/// # Edge cases
/// - `values.len() < period + 1` => empty vec (not an error).
/// - `avg_loss == 0` (no down moves in the window) => RSI clamped to 100.
pub fn calculate_rsi(values: &[f64], period: usize) -> Result<Vec<f64>> {
    ensure!(period > 0, "RSI period must be positive (got {period})");

    if values.len() < period + 1 {
        return Ok(Vec::new());
    }

    // Signed deltas, split into gain/loss components.
    let deltas: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();

    let period_f = period as f64;
    let (seed_gain, seed_loss) = deltas[..period]
        .iter()
        .fold((0.0_f64, 0.0_f64), |(g, l), &d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l - d)
            }
        });

    let mut avg_gain = seed_gain / period_f;
    let mut avg_loss = seed_loss / period_f;

    let mut rsi = Vec::with_capacity(deltas.len().saturating_sub(period));
    for &delta in &deltas[period..] {
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        if avg_loss == 0.0 {
            rsi.push(100.0);
        } else {
            let rs = avg_gain / avg_loss;
            rsi.push(100.0 - 100.0 / (1.0 + rs));
        }
    }

    Ok(rsi)
}

/// Most recent RSI value, or `None` when the input is too short.
///
/// # Errors
/// `period == 0` is an invalid parameter.
pub fn latest_rsi(values: &[f64], period: usize) -> Result<Option<f64>> {
    Ok(calculate_rsi(values, period)?.last().copied())
}

/// Classify an RSI value against the 30/70 thresholds.
///
/// The boundaries themselves are neutral: only `< 30` is oversold and only
/// `> 70` is overbought. An absent value maps to `Neutral` with the value
/// kept absent.
pub fn interpret_rsi(value: Option<f64>) -> RsiSignal {
    let signal = match value {
        None => Momentum::Neutral,
        Some(v) if v < 30.0 => Momentum::Oversold,
        Some(v) if v > 70.0 => Momentum::Overbought,
        Some(_) => Momentum::Neutral,
    };
    RsiSignal { value, signal }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // ---- calculate_rsi -----------------------------------------------------

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).unwrap().is_empty());
    }

    #[test]
    fn rsi_period_zero_is_an_error() {
        assert!(calculate_rsi(&[1.0, 2.0, 3.0], 0).is_err());
    }

    #[test]
    fn rsi_insufficient_data() {
        // 14 closes give 13 deltas — not enough to seed a 14-period RSI.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(calculate_rsi(&closes, 14).unwrap().is_empty());
    }

    #[test]
    fn rsi_seed_window_alone_emits_nothing() {
        // Exactly period+1 values seed the averages but leave no smoothed
        // step, so the output stays empty.
        let closes: Vec<f64> = (1..=15).map(|x| x as f64).collect();
        assert!(calculate_rsi(&closes, 14).unwrap().is_empty());
    }

    #[test]
    fn rsi_all_gains_clamps_to_100() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let series = calculate_rsi(&closes, 14).unwrap();
        assert!(!series.is_empty());
        for &v in &series {
            assert!((v - 100.0).abs() < 1e-10, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses_reaches_zero() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let series = calculate_rsi(&closes, 14).unwrap();
        assert!(!series.is_empty());
        for &v in &series {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_stays_within_bounds() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
            45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64, 46.21, 46.25, 45.71, 46.45,
        ];
        let series = calculate_rsi(&closes, 14).unwrap();
        assert!(!series.is_empty());
        for &v in &series {
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }

    #[test]
    fn latest_rsi_none_on_short_input() {
        assert_eq!(latest_rsi(&[100.0, 101.0, 102.0], 14).unwrap(), None);
    }

    // ---- interpret_rsi -------------------------------------------------------

    #[test]
    fn interpret_thresholds_are_strict() {
        assert_eq!(interpret_rsi(Some(29.999)).signal, Momentum::Oversold);
        assert_eq!(interpret_rsi(Some(30.0)).signal, Momentum::Neutral);
        assert_eq!(interpret_rsi(Some(70.0)).signal, Momentum::Neutral);
        assert_eq!(interpret_rsi(Some(70.001)).signal, Momentum::Overbought);
    }

    #[test]
    fn interpret_absent_value_is_neutral() {
        let signal = interpret_rsi(None);
        assert_eq!(signal.signal, Momentum::Neutral);
        assert!(signal.value.is_none());
    }

    #[test]
    fn interpret_keeps_the_value() {
        let signal = interpret_rsi(Some(55.5));
        assert_eq!(signal.value, Some(55.5));
        assert_eq!(signal.signal, Momentum::Neutral);
    }
}
