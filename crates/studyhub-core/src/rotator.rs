//! Featured course rotation.
//!
//! `Rotator` is the pure state machine; `RotatorHandle` wraps it in a
//! timer-driven tokio task for the landing view carousel. The task is owned
//! by the handle's lifecycle and aborted on drop, so no advance can fire
//! after teardown.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

/// Carousel advance interval.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Cyclic index over a featured sequence of known length.
#[derive(Debug, Clone)]
pub struct Rotator {
    index: usize,
    len: usize,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Currently highlighted index, or `None` when the sequence is empty.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Timer-driven advance: `(index + 1) mod len`. A no-op on an empty
    /// sequence; harmless on a single-element one.
    pub fn tick(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Manual selection. Out-of-range picks are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Rebind to a sequence of a new length, keeping the highlight where
    /// possible.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}

/// A rotator advanced every [`ROTATION_PERIOD`] by a background task.
///
/// Manual selection resets the interval's relative timing, matching the
/// carousel behavior where picking a dot restarts the five second window.
pub struct RotatorHandle {
    shared: Arc<Mutex<Rotator>>,
    reset_tx: mpsc::UnboundedSender<()>,
    task: JoinHandle<()>,
}

impl RotatorHandle {
    pub fn spawn(len: usize) -> Self {
        Self::spawn_with_period(len, ROTATION_PERIOD)
    }

    pub fn spawn_with_period(len: usize, period: Duration) -> Self {
        let shared = Arc::new(Mutex::new(Rotator::new(len)));
        let (reset_tx, mut reset_rx) = mpsc::unbounded_channel();

        let ticker = Arc::clone(&shared);
        let task = tokio::spawn(async move {
            // interval_at so the first advance happens one full period in,
            // not immediately on mount.
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        ticker.lock().expect("rotator lock poisoned").tick();
                    }
                    msg = reset_rx.recv() => match msg {
                        Some(()) => interval.reset(),
                        None => break,
                    },
                }
            }
        });

        Self {
            shared,
            reset_tx,
            task,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.shared.lock().expect("rotator lock poisoned").current()
    }

    /// Override the highlight and restart the advance window.
    pub fn select(&self, index: usize) {
        self.shared
            .lock()
            .expect("rotator lock poisoned")
            .select(index);
        let _ = self.reset_tx.send(());
    }
}

impl Drop for RotatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
