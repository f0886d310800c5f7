//! Arguments for commands that wait on scans, reports, and exports

use std::time::Duration;

use clap::Args;

/// Polling options for wait commands.
#[derive(Args, Debug, Default, Clone)]
pub struct WaitArgs {
    /// Seconds between status checks (defaults to the configured interval)
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Give up after this many seconds (waits indefinitely when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl WaitArgs {
    /// Poll interval, falling back to `default_secs`.
    pub fn interval(&self, default_secs: u64) -> Duration {
        Duration::from_secs(self.interval.unwrap_or(default_secs).max(1))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_falls_back_to_default() {
        assert_eq!(WaitArgs::default().interval(30), Duration::from_secs(30));
    }

    #[test]
    fn test_interval_override_and_floor() {
        let args = WaitArgs {
            interval: Some(0),
            timeout: Some(600),
        };
        assert_eq!(args.interval(30), Duration::from_secs(1));
        assert_eq!(args.timeout(), Some(Duration::from_secs(600)));
    }
}
