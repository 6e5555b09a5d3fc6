//! UiThread: the single thread that touches UI state.
//!
//! Accessibility hosts expect every tree walk and node action to happen on
//! one thread.  Callers may sit on any thread (an HTTP handler, an MQTT
//! callback), so `run_sync` ships the work to the UI thread and blocks until
//! it returns.  Work submitted from the UI thread itself runs inline, which
//! keeps re-entrant calls from deadlocking.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle, ThreadId};

use thiserror::Error;
use tracing::{debug, error};

type Job = Box<dyn FnOnce() + Send>;

/// Error type for UI thread submission.
#[derive(Debug, Error)]
pub enum UiThreadError {
    #[error("failed to start UI thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("UI thread has stopped")]
    Stopped,
    #[error("UI job panicked")]
    JobPanicked,
}

pub struct UiThread {
    sender: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
    thread_id: ThreadId,
}

impl UiThread {
    /// Starts the thread.
    pub fn spawn(name: &str) -> Result<Self, UiThreadError> {
        let (sender, receiver) = mpsc::channel::<Job>();
        let handle = thread::Builder::new().name(name.to_string()).spawn(move || {
            while let Ok(job) = receiver.recv() {
                if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                    error!("UI job panicked; thread keeps running");
                }
            }
            debug!("UI thread exiting");
        })?;
        let thread_id = handle.thread().id();
        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            thread_id,
        })
    }

    /// Returns `true` when called from the UI thread.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    /// Runs `job` on the UI thread and waits for its result.
    pub fn run_sync<R, F>(&self, job: F) -> Result<R, UiThreadError>
    where
        R: Send + 'static,
        F: FnOnce() -> R + Send + 'static,
    {
        if self.is_current() {
            return Ok(job());
        }

        let sender = self.sender.as_ref().ok_or(UiThreadError::Stopped)?;
        let (reply_tx, reply_rx) = mpsc::sync_channel(1);
        sender
            .send(Box::new(move || {
                let _ = reply_tx.send(job());
            }))
            .map_err(|_| UiThreadError::Stopped)?;

        // The reply sender is dropped without a value only if the job panicked.
        reply_rx.recv().map_err(|_| UiThreadError::JobPanicked)
    }
}

impl Drop for UiThread {
    fn drop(&mut self) {
        // Closing the channel ends the receive loop.
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            if handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_job_runs_on_the_ui_thread() {
        // Arrange
        let ui = UiThread::spawn("ui-test").unwrap();

        // Act
        let name = ui
            .run_sync(|| thread::current().name().map(str::to_owned))
            .unwrap();

        // Assert
        assert_eq!(name.as_deref(), Some("ui-test"));
        assert!(!ui.is_current());
    }

    #[test]
    fn test_nested_submission_runs_inline() {
        let ui = Arc::new(UiThread::spawn("ui-nested").unwrap());
        let inner = Arc::clone(&ui);

        let value = ui.run_sync(move || inner.run_sync(|| 41).unwrap() + 1).unwrap();

        assert_eq!(value, 42);
    }

    #[test]
    fn test_panicking_job_is_reported_and_thread_survives() {
        let ui = UiThread::spawn("ui-panic").unwrap();

        let first = ui.run_sync(|| -> u32 { panic!("boom") });
        let second = ui.run_sync(|| 7);

        assert!(matches!(first, Err(UiThreadError::JobPanicked)));
        assert_eq!(second.unwrap(), 7);
    }

    #[test]
    fn test_calls_from_many_threads_are_serialized() {
        let ui = Arc::new(UiThread::spawn("ui-many").unwrap());
        let counter = Arc::new(std::sync::Mutex::new(Vec::new()));

        let workers: Vec<_> = (0..8)
            .map(|i| {
                let ui = Arc::clone(&ui);
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    ui.run_sync(move || {
                        counter.lock().unwrap().push(thread::current().name().map(str::to_owned));
                        i
                    })
                    .unwrap()
                })
            })
            .collect();
        let mut results: Vec<i32> = workers.into_iter().map(|w| w.join().unwrap()).collect();
        results.sort_unstable();

        assert_eq!(results, (0..8).collect::<Vec<_>>());
        let names = counter.lock().unwrap();
        assert_eq!(names.len(), 8);
        assert!(names.iter().all(|n| n.as_deref() == Some("ui-many")));
    }
}
