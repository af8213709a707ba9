use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// One deferred, cancellable action. Arming spawns a helper thread that parks
/// on the cancel channel for the requested delay; if nothing cancels it, a
/// generation-tagged fire lands on the owner's channel. Fires from an earlier
/// arm that was since cancelled or replaced are stale and ignored by `poll`.
pub struct DeferredAction {
    fire_tx: Sender<u64>,
    fire_rx: Receiver<u64>,
    cancel_tx: Option<Sender<()>>,
    generation: u64,
}

impl DeferredAction {
    pub fn new() -> Self {
        let (fire_tx, fire_rx) = mpsc::channel();
        Self {
            fire_tx,
            fire_rx,
            cancel_tx: None,
            generation: 0,
        }
    }

    /// Schedules a fire after `delay`, replacing any pending one.
    pub fn arm(&mut self, delay: Duration) {
        self.cancel();

        let (cancel_tx, cancel_rx) = mpsc::channel();
        self.cancel_tx = Some(cancel_tx);

        let fire_tx = self.fire_tx.clone();
        let generation = self.generation;
        thread::Builder::new()
            .name("vocab-trainer::deferred".to_string())
            .spawn(move || {
                if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                    let _ = fire_tx.send(generation);
                }
            })
            .expect("Failed to spawn deferred-action thread");
    }

    /// Discards the pending fire, if any.
    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        self.generation += 1;
    }

    pub fn is_armed(&self) -> bool {
        self.cancel_tx.is_some()
    }

    /// True exactly once per armed delay that has elapsed; drains stale fires.
    pub fn poll(&mut self) -> bool {
        while let Ok(generation) = self.fire_rx.try_recv() {
            if generation == self.generation && self.cancel_tx.is_some() {
                self.cancel_tx = None;
                self.generation += 1;
                return true;
            }
        }
        false
    }
}

impl Default for DeferredAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DeferredAction {
    fn drop(&mut self) {
        self.cancel();
    }
}
