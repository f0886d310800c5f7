//! Progress display while polling long-running jobs

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::OutputFormat;
use crate::client::JobState;
use crate::error::{Error, Result};

/// Spinner on stderr showing the last observed status of a job.
///
/// Hidden for JSON output so scripts get a clean stream.
pub struct WaitProgress {
    bar: ProgressBar,
    label: String,
}

impl WaitProgress {
    pub fn start(format: OutputFormat, label: impl Into<String>) -> Self {
        let bar = if format == OutputFormat::Json {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };

        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
            bar.set_style(style);
        }

        let label = label.into();
        bar.set_message(format!("Waiting for {}", label));
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar, label }
    }

    /// Show a freshly observed status.
    pub fn update(&self, status: &str) {
        debug!("{} is {}", self.label, status);
        self.bar.set_message(format!("{}: {}", self.label, status));
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

/// Fail unless a finished job ended in the completed state.
pub fn ensure_completed(kind: &str, id: &str, status: &str) -> Result<()> {
    match JobState::from_status(status) {
        JobState::Completed => Ok(()),
        state => Err(Error::Other(format!("{} {} ended {}", kind, id, state))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_completed() {
        assert!(ensure_completed("scan", "s-1", "completed").is_ok());

        let err = ensure_completed("report", "r-1", "failed").unwrap_err();
        assert_eq!(err.to_string(), "Operation failed: report r-1 ended failed");
    }

    #[test]
    fn test_hidden_progress_accepts_updates() {
        let progress = WaitProgress::start(OutputFormat::Json, "scan s-1");
        progress.update("processing");
        progress.update("completed");
        progress.finish();
    }
}
