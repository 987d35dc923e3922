use std::sync::Mutex;
use std::time::Instant;

use log::{set_boxed_logger, set_max_level, LevelFilter, Log, Metadata, Record};

/// Messages of every test in process, tests run in parallel so only search them.
static MESSAGES: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct TestLogger {
    start: Instant,
}

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        println!(
            "{:.4} {} [{}] {}",
            self.start.elapsed().as_secs_f32(),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            message
        );
        if let Ok(mut messages) = MESSAGES.lock() {
            messages.push(message);
        }
    }

    fn flush(&self) {}
}

/// Prints and keeps log records of rescaling passes, repeated calls keep the first logger.
pub fn setup_tests_logging() {
    let logger = TestLogger {
        start: Instant::now(),
    };
    if set_boxed_logger(Box::new(logger)).is_ok() {
        set_max_level(LevelFilter::Debug);
    }
}

/// Whether any test logged exactly this message.
pub fn logged(message: &str) -> bool {
    MESSAGES
        .lock()
        .map(|messages| messages.iter().any(|logged| logged == message))
        .unwrap_or(false)
}
