//! Signal Accumulator
//!
//! Append-only history of the belief signals observed so far. Owned
//! exclusively by one agent instance and discarded with it at run end.

use pivot_core::Signal;
use rust_decimal::Decimal;

/// Append-only signal history
#[derive(Debug, Clone, Default)]
pub struct SignalHistory {
    samples: Vec<Signal>,
}

impl SignalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observed signal. No validation, no bound on growth.
    pub fn record(&mut self, signal: Signal) {
        self.samples.push(signal);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Signal] {
        &self.samples
    }

    /// Arithmetic mean of the suffix starting at `start`.
    /// An empty suffix (including `start` past the end) is defined as 0.
    pub fn mean_from(&self, start: usize) -> Decimal {
        let suffix = match self.samples.get(start..) {
            Some(s) if !s.is_empty() => s,
            _ => return Decimal::ZERO,
        };
        let sum: Decimal = suffix.iter().sum();
        sum / Decimal::from(suffix.len() as u64)
    }
}
