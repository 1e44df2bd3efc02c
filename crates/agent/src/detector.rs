//! Jump Detector
//!
//! Streaming structural-break heuristic over the signal history. Compares a
//! harmonically weighted moving average of the most recent window against the
//! window immediately before it; when the difference sets a new magnitude
//! record and clears the threshold, the point between the two windows is
//! declared a jump and becomes the new baseline.
//!
//! This is a heuristic, not a statistical test: it carries no false-positive
//! guarantee. It is cheap, streaming, and good enough to re-anchor the fair
//! value estimate after an abrupt move.

use pivot_core::Signal;
use rust_decimal::Decimal;

use crate::signal::SignalHistory;

/// Detects jumps in the underlying value from the accumulated signal stream.
///
/// The baseline index marks the position in history after which the most
/// recent confirmed jump occurred; it starts at 0 and never decreases.
#[derive(Debug, Clone)]
pub struct JumpDetector {
    window_size: usize,
    threshold: Decimal,
    /// One moving-average difference per eligible opportunity
    diffs: Vec<Decimal>,
    baseline: usize,
}

impl JumpDetector {
    pub fn new(window_size: usize, threshold: Decimal) -> Self {
        Self {
            window_size,
            threshold,
            diffs: Vec::new(),
            baseline: 0,
        }
    }

    /// Index into the signal history after which the current regime started
    pub fn baseline(&self) -> usize {
        self.baseline
    }

    /// Number of moving-average differences recorded so far
    pub fn diff_count(&self) -> usize {
        self.diffs.len()
    }

    /// Run one detection step over the current history.
    ///
    /// Does nothing until the history holds more than two full windows. Each
    /// eligible call appends one difference; a difference whose magnitude
    /// strictly exceeds every earlier one and the threshold confirms a jump.
    /// Returns the new baseline when a jump is confirmed.
    pub fn update(&mut self, history: &SignalHistory) -> Option<usize> {
        let len = history.len();
        if len <= 2 * self.window_size {
            return None;
        }

        let samples = history.as_slice();
        let recent = weighted_average(&samples[len - self.window_size..]);
        let prior =
            weighted_average(&samples[len - 2 * self.window_size..len - self.window_size]);
        let diff = recent - prior;
        self.diffs.push(diff);

        // Earliest index wins magnitude ties, so the argmax lands on the
        // entry just appended only for a strictly new record. Re-running the
        // detector without new signals therefore never re-triggers.
        let mut record = 0;
        for (index, value) in self.diffs.iter().enumerate() {
            if value.abs() > self.diffs[record].abs() {
                record = index;
            }
        }

        if record == self.diffs.len() - 1 && diff.abs() > self.threshold {
            self.baseline = self.diffs.len() + self.window_size;
            log::debug!(
                "Jump confirmed: diff={}, baseline moved to {}",
                diff,
                self.baseline
            );
            return Some(self.baseline);
        }

        None
    }
}

/// Weighted average over one window, weight of the i-th sample from the
/// window start being `1 / (window_len - i)`. The newest sample carries
/// weight 1, the oldest `1 / window_len`, so recent signals dominate.
/// Normalized by the weight sum to stay within the signal range.
fn weighted_average(window: &[Signal]) -> Decimal {
    let len = window.len();
    let mut weighted_sum = Decimal::ZERO;
    let mut weight_sum = Decimal::ZERO;
    for (i, signal) in window.iter().enumerate() {
        let weight = Decimal::ONE / Decimal::from((len - i) as u64);
        weighted_sum += weight * signal;
        weight_sum += weight;
    }
    weighted_sum / weight_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn history_of(signals: &[Decimal]) -> SignalHistory {
        let mut history = SignalHistory::new();
        for &signal in signals {
            history.record(signal);
        }
        history
    }

    #[test]
    fn test_weighted_average_favors_recent_samples() {
        // Newest sample is 1, the rest 0: weight 1 out of H_4 = 1/4+1/3+1/2+1
        let avg = weighted_average(&[dec!(0), dec!(0), dec!(0), dec!(1)]);
        let weight_sum = dec!(0.25) + Decimal::ONE / dec!(3) + dec!(0.5) + dec!(1);
        assert_eq!(avg, Decimal::ONE / weight_sum);

        // Constant window averages to the constant
        let flat = weighted_average(&[dec!(1); 8]);
        assert_eq!(flat, dec!(1));
    }

    #[test]
    fn test_no_update_until_two_full_windows() {
        let mut detector = JumpDetector::new(3, dec!(0.15));
        let history = history_of(&[dec!(1); 6]);

        assert_eq!(detector.update(&history), None);
        assert_eq!(detector.diff_count(), 0);
        assert_eq!(detector.baseline(), 0);
    }

    #[test]
    fn test_flat_history_never_jumps() {
        let mut detector = JumpDetector::new(3, dec!(0.15));
        let mut history = SignalHistory::new();

        for _ in 0..20 {
            history.record(dec!(1));
            detector.update(&history);
        }

        assert_eq!(detector.baseline(), 0);
        // One diff per opportunity once the history exceeds 6 samples
        assert_eq!(detector.diff_count(), 14);
    }

    #[test]
    fn test_step_change_confirms_jump() {
        let mut detector = JumpDetector::new(3, dec!(0.15));
        let mut history = history_of(&[dec!(1); 8]);

        // Step down to zero; the first zero lands in the recent window with
        // the heaviest weight and the diff sets a record past the threshold.
        history.record(dec!(0));
        let jumped = detector.update(&history);

        assert!(jumped.is_some());
        assert_eq!(detector.baseline(), detector.diff_count() + 3);
    }

    #[test]
    fn test_rerun_without_new_signals_does_not_retrigger() {
        let mut detector = JumpDetector::new(3, dec!(0.15));
        let mut history = history_of(&[dec!(1); 8]);
        history.record(dec!(0));

        assert!(detector.update(&history).is_some());
        let baseline = detector.baseline();

        // Same history again: the duplicate diff ties the record and must
        // not move the baseline.
        assert_eq!(detector.update(&history), None);
        assert_eq!(detector.baseline(), baseline);
    }

    #[test]
    fn test_baseline_never_decreases() {
        let mut detector = JumpDetector::new(3, dec!(0.15));
        let mut history = SignalHistory::new();
        let mut last_baseline = 0;

        // Two regime flips with noise-free plateaus between them
        let stream: Vec<Decimal> = [dec!(1); 10]
            .into_iter()
            .chain([dec!(0); 10])
            .chain([dec!(1); 10])
            .collect();

        for signal in stream {
            history.record(signal);
            detector.update(&history);
            assert!(detector.baseline() >= last_baseline);
            last_baseline = detector.baseline();
        }

        assert!(last_baseline > 0);
    }
}
