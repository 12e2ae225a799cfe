// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators behind the market
// snapshot.  Invalid parameters (a zero period) are hard errors; insufficient
// history never is — it surfaces as an empty series or an absent value that
// classification layers map to `Neutral`.

pub mod ema;
pub mod rsi;
