//! Progress tracking for a single file transfer.
//!
//! The storage client reports `(loaded, total)` byte counts; the UI only ever
//! shows a whole-number percentage.

/// Byte counts reported by the storage client during a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    /// Bytes handed to the transport so far
    pub loaded: u64,
    /// Size of the whole body
    pub total: u64,
}

impl TransferProgress {
    pub fn new(loaded: u64, total: u64) -> Self {
        Self { loaded, total }
    }

    /// Percentage for this event, see [`percentage`].
    pub fn percentage(&self) -> u8 {
        percentage(self.loaded, self.total)
    }
}

/// `round(loaded / total * 100)`, clamped to `0..=100`.
///
/// A zero `total` reads as 0%.
pub fn percentage(loaded: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = (loaded as f64 / total as f64) * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}

/// Lifecycle of one transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferState {
    #[default]
    Idle,
    InFlight,
    Completed,
    /// The transfer failed; the last percentage is kept as-is.
    Abandoned,
}

/// Tracks the percentage of the transfer in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    percentage: u8,
    total: u64,
    state: TransferState,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to 0% for a new transfer of `total` bytes.
    pub fn start(&mut self, total: u64) {
        self.percentage = 0;
        self.total = total;
        self.state = TransferState::InFlight;
    }

    /// Recomputes the percentage from a progress event and returns it.
    pub fn record(&mut self, event: TransferProgress) -> u8 {
        self.total = event.total;
        self.percentage = event.percentage();
        self.percentage
    }

    pub fn complete(&mut self) {
        self.percentage = 100;
        self.state = TransferState::Completed;
    }

    pub fn abandon(&mut self) {
        self.state = TransferState::Abandoned;
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TransferState::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(percentage(0, 200), 0);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds away from zero
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(200, 200), 100);
    }

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(percentage(300, 200), 100);
        assert_eq!(percentage(5, 0), 0);
        assert_eq!(percentage(u64::MAX, 1), 100);
    }

    #[test]
    fn test_tracker_lifecycle() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.state(), TransferState::Idle);

        tracker.start(1000);
        assert_eq!(tracker.percentage(), 0);
        assert_eq!(tracker.state(), TransferState::InFlight);

        assert_eq!(tracker.record(TransferProgress::new(250, 1000)), 25);
        assert_eq!(tracker.record(TransferProgress::new(999, 1000)), 100);

        tracker.complete();
        assert!(tracker.is_complete());
        assert_eq!(tracker.percentage(), 100);
    }

    #[test]
    fn test_abandon_keeps_last_percentage() {
        let mut tracker = ProgressTracker::new();
        tracker.start(100);
        tracker.record(TransferProgress::new(40, 100));
        tracker.abandon();
        assert_eq!(tracker.state(), TransferState::Abandoned);
        assert_eq!(tracker.percentage(), 40);
    }

    #[test]
    fn test_start_resets_previous_transfer() {
        let mut tracker = ProgressTracker::new();
        tracker.start(10);
        tracker.record(TransferProgress::new(10, 10));
        tracker.complete();

        tracker.start(50);
        assert_eq!(tracker.percentage(), 0);
        assert_eq!(tracker.total(), 50);
        assert!(!tracker.is_complete());
    }
}
