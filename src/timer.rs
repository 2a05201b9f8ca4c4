//! Cooperative countdown for timed quick actions.
//!
//! Presentational only: the countdown renders remaining time and progress,
//! and the caller decides what (if anything) to log afterwards. Ctrl-C flips
//! a shared flag that the tick loop checks, so a replaced or abandoned view
//! never leaves a timer running.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{PraxisError, Result};

const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Completed,
    Cancelled,
}

/// Shared cancel flag set by Ctrl-C.
#[derive(Clone)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Register the Ctrl-C handler. Only one handler can exist per process.
    pub fn install() -> Result<Self> {
        let flag = Arc::new(AtomicBool::new(false));
        let handler_flag = Arc::clone(&flag);
        ctrlc::set_handler(move || {
            handler_flag.store(true, Ordering::SeqCst);
        })
        .map_err(|e| PraxisError::SignalHandler(e.to_string()))?;
        Ok(Self { flag })
    }

    #[cfg(test)]
    pub fn noop() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    #[cfg(test)]
    pub fn trip(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Run a countdown for `duration`, labeled with the action title. Returns
/// whether the countdown ran to completion or was cancelled.
pub fn countdown(label: &str, duration: Duration, cancel: &CancelFlag) -> Result<TimerOutcome> {
    let total_secs = duration.as_secs().max(1);
    let bar = ProgressBar::new(total_secs);
    bar.set_style(
        ProgressStyle::with_template("{prefix:.cyan.bold} [{bar:30}] {msg}")
            .expect("invalid template")
            .progress_chars("█▓░"),
    );
    bar.set_prefix(label.to_string());

    let started = Instant::now();
    let outcome = loop {
        if cancel.is_cancelled() {
            break TimerOutcome::Cancelled;
        }
        let elapsed = started.elapsed();
        if elapsed >= duration {
            break TimerOutcome::Completed;
        }
        let remaining = total_secs.saturating_sub(elapsed.as_secs());
        bar.set_position(elapsed.as_secs());
        bar.set_message(format!("{:02}:{:02} left", remaining / 60, remaining % 60));
        thread::sleep(TICK);
    };

    match outcome {
        TimerOutcome::Completed => bar.finish_with_message("done"),
        TimerOutcome::Cancelled => bar.abandon_with_message("cancelled"),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_completes_for_tiny_durations() {
        let cancel = CancelFlag::noop();
        let outcome = countdown("Test", Duration::from_millis(300), &cancel).unwrap();
        assert_eq!(outcome, TimerOutcome::Completed);
    }

    #[test]
    fn tripped_flag_cancels_immediately() {
        let cancel = CancelFlag::noop();
        cancel.trip();
        let outcome = countdown("Test", Duration::from_secs(600), &cancel).unwrap();
        assert_eq!(outcome, TimerOutcome::Cancelled);
    }
}
