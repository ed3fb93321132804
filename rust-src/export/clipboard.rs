//! Clipboard export.
//!
//! Writes happen on a dedicated worker thread so the event loop never waits
//! on the platform clipboard. Each request produces exactly one
//! [`Notification`], drained by the UI with [`ClipboardWorker::try_next`].

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::Notification;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Rejected(String),

    #[error("clipboard worker is not running")]
    WorkerStopped,
}


/// Anything that can take a text blob and report success or failure.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}


/// The system clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}


impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}


impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("not initialised".to_string()))?;

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}


/// Background thread owning a clipboard sink.
pub struct ClipboardWorker {
    requests: Option<Sender<String>>,
    completions: Receiver<Notification>,
    handle: Option<JoinHandle<()>>,
}


impl ClipboardWorker {
    /// Start a worker backed by the system clipboard.
    pub fn system() -> std::io::Result<Self> {
        Self::spawn(SystemClipboard::new)
    }

    /// Start a worker; the sink is built on the worker thread itself.
    pub fn spawn<F, S>(make_sink: F) -> std::io::Result<Self>
    where
        F: FnOnce() -> S + Send + 'static,
        S: ClipboardSink,
    {
        let (request_tx, request_rx) = mpsc::channel::<String>();
        let (done_tx, done_rx) = mpsc::channel::<Notification>();

        let handle = thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || {
                let mut sink = make_sink();
                for text in request_rx {
                    let notice = match sink.write_text(&text) {
                        Ok(()) => {
                            info!(bytes = text.len(), "table copied to clipboard");
                            Notification::table_copied()
                        }
                        Err(e) => {
                            warn!(error = %e, "clipboard write failed");
                            Notification::copy_failed(&e)
                        }
                    };
                    if done_tx.send(notice).is_err() {
                        break;
                    }
                }
                debug!("clipboard worker exiting");
            })?;

        Ok(Self {
            requests: Some(request_tx),
            completions: done_rx,
            handle: Some(handle),
        })
    }

    /// Queue a write. Returns immediately; the outcome arrives later.
    pub fn submit(&self, text: String) -> Result<(), ClipboardError> {
        self.requests
            .as_ref()
            .ok_or(ClipboardError::WorkerStopped)?
            .send(text)
            .map_err(|_| ClipboardError::WorkerStopped)
    }

    /// Next finished write, if any, without blocking.
    pub fn try_next(&self) -> Option<Notification> {
        self.completions.try_recv().ok()
    }

    /// Next finished write, waiting at most `timeout`.
    #[cfg(test)]
    pub fn wait_next(&self, timeout: std::time::Duration) -> Option<Notification> {
        self.completions.recv_timeout(timeout).ok()
    }
}


impl Drop for ClipboardWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}


#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Sink recording every write, optionally refusing them.
    pub(crate) struct RecordingSink {
        pub written: Arc<Mutex<Vec<String>>>,
        pub refuse: bool,
    }

    impl ClipboardSink for RecordingSink {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.refuse {
                return Err(ClipboardError::Rejected("permission denied".to_string()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    pub(crate) fn recording_worker(refuse: bool) -> (ClipboardWorker, Arc<Mutex<Vec<String>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let shared = Arc::clone(&written);
        let worker = ClipboardWorker::spawn(move || RecordingSink { written: shared, refuse })
            .unwrap();
        (worker, written)
    }

    #[test]
    fn test_successful_write_notifies() {
        let (worker, written) = recording_worker(false);
        worker.submit("a\tb".to_string()).unwrap();

        let notice = worker.wait_next(Duration::from_secs(5)).unwrap();
        assert_eq!(notice, Notification::table_copied());
        assert_eq!(written.lock().unwrap().as_slice(), ["a\tb".to_string()]);
    }

    #[test]
    fn test_rejected_write_notifies_with_error_text() {
        let (worker, written) = recording_worker(true);
        worker.submit("x".to_string()).unwrap();

        let notice = worker.wait_next(Duration::from_secs(5)).unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message(), "Failed to copy table: permission denied");
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_try_next_is_empty_without_requests() {
        let (worker, _) = recording_worker(false);
        assert_eq!(worker.try_next(), None);
    }

    #[test]
    fn test_one_notice_per_request() {
        let (worker, written) = recording_worker(false);
        for i in 0..3 {
            worker.submit(i.to_string()).unwrap();
        }
        for _ in 0..3 {
            assert!(worker.wait_next(Duration::from_secs(5)).is_some());
        }
        assert_eq!(worker.try_next(), None);
        assert_eq!(written.lock().unwrap().len(), 3);
    }
}
