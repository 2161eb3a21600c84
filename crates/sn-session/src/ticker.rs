//! Background thread that drives the librarian's attention cycle.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender};
use sn_core::Clock;
use tracing::{debug, warn};

use crate::{SessionObserver, SessionResult, SharedSession};

/// Handle to a running ticker thread.
///
/// The thread locks the session once per `period` and calls
/// [`Session::tick`][crate::Session::tick].  Transitions are decided by the
/// session's clock, so scheduling jitter only delays a transition by up to
/// one period; it never changes the drawn durations.
///
/// [`stop`][Self::stop] signals the thread and joins it.  Dropping the handle
/// does the same.
pub struct AttentionTicker {
    stop_tx: Option<Sender<()>>,
    handle:  Option<JoinHandle<u64>>,
}

impl AttentionTicker {
    /// Start ticking `session` every `period`, reporting transitions to
    /// `observer`.
    pub fn spawn<C, O>(session: SharedSession<C>, period: Duration, mut observer: O) -> SessionResult<Self>
    where
        C: Clock,
        O: SessionObserver + Send + 'static,
    {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("attention-ticker".into())
            .spawn(move || {
                let mut ticks = 0u64;
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            session.lock().tick(&mut observer);
                            ticks += 1;
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!(ticks, "attention ticker stopped");
                ticks
            })?;

        debug!(period_ms = period.as_millis() as u64, "attention ticker started");
        Ok(Self {
            stop_tx: Some(stop_tx),
            handle:  Some(handle),
        })
    }

    /// Stop the thread and wait for it.  Returns the number of ticks run.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        // Dropping the sender disconnects the channel and wakes the thread.
        self.stop_tx.take();
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(ticks)) => ticks,
            Some(Err(_)) => {
                warn!("attention ticker thread panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for AttentionTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
