//! Host-level timeout watchdog.
//!
//! The core decision procedure is synchronous and has no notion of
//! cancellation, so the only way to bound its wall-clock time is from the
//! outside: run it on a dedicated thread and race it against a timer on
//! the calling thread. On timeout the worker thread is simply detached;
//! the core has no process-wide mutable state, so letting it run to
//! completion unobserved (or get dropped when the process exits) is safe.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct TimedOut;

pub fn run_with_timeout<T, F>(timeout_ms: u64, f: F) -> Result<T, TimedOut>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.recv_timeout(Duration::from_millis(timeout_ms))
        .map_err(|_| TimedOut)
}
