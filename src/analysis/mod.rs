// =============================================================================
// Market Structure Analysis Module
// =============================================================================
//
// Level discovery and snapshot composition. Everything here is a pure
// function over an oldest-first candle slice; insufficient history always
// yields a defined empty result rather than an error.

pub mod cluster;
pub mod pivot;
pub mod snapshot;
pub mod support_resistance;
pub mod swing;
