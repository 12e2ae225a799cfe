// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = (close_t - EMA_{t-1}) * multiplier + EMA_{t-1}
//
// The very first EMA value is seeded with the SMA of the first `period`
// closes and sits at input index `period - 1`.  The trend classifier compares
// the latest EMA-20 against the latest EMA-50.
// =============================================================================

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Period of the fast EMA used by the trend classifier.
const FAST_PERIOD: usize = 20;
/// Period of the slow EMA used by the trend classifier.
const SLOW_PERIOD: usize = 50;
/// Relative EMA-20/EMA-50 gap beyond which the trend is directional.
const TREND_THRESHOLD: f64 = 0.001;

/// An EMA series aligned to its input.
///
/// The first `first_index` input slots have no EMA (the seed window is still
/// filling); `values[0]` corresponds to input index `first_index`.  An empty
/// `values` means the input was too short for the requested period.
#[derive(Debug, Clone, PartialEq)]
pub struct EmaSeries {
    values: Vec<f64>,
    first_index: usize,
}

impl EmaSeries {
    fn empty() -> Self {
        Self {
            values: Vec::new(),
            first_index: 0,
        }
    }

    /// Index of the input element the first EMA value is aligned with.
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    /// EMA at input index `i`, or `None` while the seed window is filling.
    pub fn value_at(&self, i: usize) -> Option<f64> {
        if i < self.first_index {
            return None;
        }
        self.values.get(i - self.first_index).copied()
    }

    /// Most recent EMA value, or `None` when the series is empty.
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Defined EMA values, oldest first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Direction of the EMA-20/EMA-50 crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "bullish"),
            Self::Bearish => write!(f, "bearish"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Result of the dual-EMA trend classification.
///
/// When either EMA cannot be computed the trend is `Neutral` and both values
/// are reported as absent, so a caller can tell "no signal" from "flat".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaCrossover {
    pub ema20: Option<f64>,
    pub ema50: Option<f64>,
    pub trend: Trend,
}

/// Compute the EMA series for `values` with the given look-back `period`.
///
/// # Errors
/// `period == 0` is an invalid parameter and fails immediately.
///
/// # Edge cases
/// - Empty input, or fewer than `period` values => empty series (not an
///   error; the caller branches on `is_empty`).
pub fn calculate_ema(values: &[f64], period: usize) -> Result<EmaSeries> {
    ensure!(period > 0, "EMA period must be positive (got {period})");
    Ok(ema_unchecked(values, period))
}

/// Core EMA recurrence for an already-validated period.
///
/// Computed strictly left-to-right; each step folds the new value into the
/// previous EMA rather than re-deriving from scratch.
fn ema_unchecked(values: &[f64], period: usize) -> EmaSeries {
    if values.len() < period {
        return EmaSeries::empty();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` values, aligned at index `period - 1`.
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);

    let mut prev = seed;
    for &value in &values[period..] {
        let ema = (value - prev) * multiplier + prev;
        out.push(ema);
        prev = ema;
    }

    EmaSeries {
        values: out,
        first_index: period - 1,
    }
}

/// Most recent EMA value, or `None` when the input is too short.
///
/// # Errors
/// `period == 0` is an invalid parameter.
pub fn latest_ema(values: &[f64], period: usize) -> Result<Option<f64>> {
    Ok(calculate_ema(values, period)?.latest())
}

/// Classify the trend from the EMA-20/EMA-50 crossover on `closes`.
///
/// Let `diff = (ema20 - ema50) / ema50`:
/// - `diff >  0.001` => `Bullish`
/// - `diff < -0.001` => `Bearish`
/// - otherwise       => `Neutral`
///
/// Fewer than 50 closes leave the slow EMA undefined; the result is then
/// `Neutral` with both EMA values absent.
pub fn ema_crossover(closes: &[f64]) -> EmaCrossover {
    let ema20 = ema_unchecked(closes, FAST_PERIOD).latest();
    let ema50 = ema_unchecked(closes, SLOW_PERIOD).latest();

    match (ema20, ema50) {
        (Some(fast), Some(slow)) => {
            let diff = (fast - slow) / slow;
            let trend = if diff > TREND_THRESHOLD {
                Trend::Bullish
            } else if diff < -TREND_THRESHOLD {
                Trend::Bearish
            } else {
                Trend::Neutral
            };
            EmaCrossover {
                ema20: Some(fast),
                ema50: Some(slow),
                trend,
            }
        }
        _ => EmaCrossover {
            ema20: None,
            ema50: None,
            trend: Trend::Neutral,
        },
    }
}
