//! Background driver for automatic dealer play.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use super::Engine;

/// A background thread that calls [`Engine::tick`] every
/// [`dealer_delay`](crate::TableOptions::dealer_delay).
///
/// The thread sleeps between ticks, so whoever drives the player's actions is
/// never blocked by the delay. Dropping the loop stops and joins the thread.
#[derive(Debug)]
pub struct DealerLoop {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl DealerLoop {
    /// Starts ticking `engine` on a new thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(engine: Arc<Engine>) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let delay = engine.options().dealer_delay;

        let handle = thread::Builder::new()
            .name("dealer-loop".into())
            .spawn(move || {
                log::debug!("dealer loop started, {delay:?} between ticks");
                while !flag.load(Ordering::Acquire) {
                    engine.tick();
                    thread::park_timeout(delay);
                }
                log::debug!("dealer loop stopped");
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Returns whether the thread is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stops the loop and waits for the thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                log::error!("dealer loop panicked");
            }
        }
    }
}

impl Drop for DealerLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}
