//! Background level clock.
//!
//! The elapsed-time counter ticks on its own OS thread, independent of the
//! frame rate: one increment per real-time interval while the level is
//! running and not paused. The main thread only ever reads the atomic
//! counter, so a HUD read may lag a just-written tick by at most one frame.
//!
//! Lifecycle mirrors the audio thread: the owning scene starts the clock on
//! setup and must call [`LevelClock::stop`] on teardown or level end, which
//! signals the thread and joins it before returning. Dropping the resource
//! without stopping also terminates the thread (the signal channel
//! disconnects), just without the synchronous join.

use bevy_ecs::prelude::Resource;
use crossbeam_channel::{Sender, bounded};
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

/// Elapsed-seconds counter backed by a dedicated timer thread.
#[derive(Resource)]
pub struct LevelClock {
    seconds: Arc<AtomicU32>,
    paused: Arc<AtomicBool>,
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl LevelClock {
    /// Start a clock ticking once per second.
    pub fn start() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    /// Start a clock with a custom tick interval. Tests use short intervals.
    pub fn with_interval(interval: Duration) -> Self {
        let seconds = Arc::new(AtomicU32::new(0));
        let paused = Arc::new(AtomicBool::new(false));
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let thread_seconds = Arc::clone(&seconds);
        let thread_paused = Arc::clone(&paused);
        let handle = std::thread::spawn(move || {
            debug!("clock thread starting (id={:?})", std::thread::current().id());
            // recv_timeout doubles as the tick timer and the cancel signal:
            // a timeout is a tick, anything else means shut down.
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                        if !thread_paused.load(Ordering::Relaxed) {
                            thread_seconds.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                    _ => break,
                }
            }
            debug!("clock thread exiting");
        });

        Self {
            seconds,
            paused,
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Elapsed seconds counted so far.
    pub fn seconds(&self) -> u32 {
        self.seconds.load(Ordering::Relaxed)
    }

    /// Suspend or resume counting. Pausing does not reset the interval in
    /// progress; the tick cadence continues and paused ticks are skipped.
    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Stop the clock permanently: signal the thread and join it.
    ///
    /// Idempotent; the counter keeps its final value for display.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.stop_tx.send(());
            let _ = handle.join();
        }
    }

    /// Whether [`LevelClock::stop`] has been called.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_stopped(&self) -> bool {
        self.handle.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ticks_on_its_interval() {
        let clock = LevelClock::with_interval(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(60));
        assert!(clock.seconds() >= 3);
    }

    #[test]
    fn pause_suspends_counting() {
        let clock = LevelClock::with_interval(Duration::from_millis(5));
        clock.set_paused(true);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(clock.seconds(), 0);

        clock.set_paused(false);
        std::thread::sleep(Duration::from_millis(50));
        assert!(clock.seconds() > 0);
    }

    #[test]
    fn stop_joins_and_freezes_the_counter() {
        let mut clock = LevelClock::with_interval(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(30));
        clock.stop();
        assert!(clock.is_stopped());

        let frozen = clock.seconds();
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(clock.seconds(), frozen);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = LevelClock::with_interval(Duration::from_millis(5));
        clock.stop();
        clock.stop();
        assert!(clock.is_stopped());
    }
}
