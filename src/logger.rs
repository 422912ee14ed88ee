//! Logging for TaskMaster
//!
//! Two sinks exist side by side:
//!
//! * the `log` facade, routed to a file through `fern` when file logging is
//!   enabled in the configuration
//! * [`Logger`], an in-memory buffer shown by the logs dialog (`G`)
//!
//! Every entry recorded through [`Logger::log`] goes to both.

use crate::constants::MAX_LOG_ENTRIES;
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
#[derive(Clone, Debug)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(MAX_LOG_ENTRIES)))),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f");
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Route the `log` facade to `path`.
///
/// Can only succeed once per process since it installs the global logger.
pub fn init_file_logging(path: &Path, level: log::LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file =
        fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(log_file)
        .apply()
        .context("Failed to install file logger")?;

    Ok(())
}
