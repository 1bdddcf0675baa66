//! Mathematical utilities for entropy bookkeeping

/// Entropy memoisation helpers
pub mod entropy;
