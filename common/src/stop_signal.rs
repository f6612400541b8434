use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared cooperative stop flag. Cloning yields a handle to the same flag,
/// so a request made from any thread is visible to every holder.
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    requested: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop. Idempotent: repeated calls are indistinguishable
    /// from a single one.
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::StopSignal;

    #[test]
    fn test_stop_signal_starts_unset() {
        // Given
        let signal = StopSignal::new();

        // Then
        assert!(!signal.is_requested());
    }

    #[test]
    fn test_stop_signal_request_is_idempotent() {
        // Given
        let signal = StopSignal::new();

        // When
        for _ in 0..5 {
            signal.request();
        }

        // Then
        assert!(signal.is_requested());
    }

    #[test]
    fn test_stop_signal_is_shared_across_threads() {
        // Given
        let signal = StopSignal::new();
        let handle = signal.clone();

        // When
        thread::spawn(move || handle.request()).join().unwrap();

        // Then
        assert!(signal.is_requested());
    }
}
