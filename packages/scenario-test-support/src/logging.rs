//! Unified test logging initialization
//!
//! This module provides a single source of truth for test logging initialization
//! that works for both unit tests and integration tests. It uses a one-time guard
//! to prevent double initialization and integrates cleanly with cargo/nextest output capture.

use std::io;
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// This function is idempotent and race-safe. The logging level is controlled
/// in this order of precedence:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, quiet)
///
/// ```bash
/// TEST_LOG=scenario_state=debug cargo test -p scenario-state
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        // Read log level in order: TEST_LOG -> RUST_LOG -> "warn"
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time() // Stable output
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}

/// In-memory log sink for tests that assert on emitted events.
///
/// Use with `tracing::subscriber::with_default` so capture stays local to
/// the calling thread and does not fight the global test subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriber writing JSON lines at `debug` and above into this sink.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        fmt()
            .json()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(self.clone())
            .without_time()
            .finish()
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

pub struct CapturedWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}
