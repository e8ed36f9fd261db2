//! Caret blink timer
//!
//! Runs on its own thread and posts [`UiMsg::BlinkCaret`] to the coordinating
//! queue every period. The timer never touches editor state itself.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::messages::{Msg, UiMsg};

enum Control {
    /// Start a fresh period
    Reset,
    Stop,
}

/// Repeating, restartable blink ticker
pub struct BlinkTimer {
    control: Sender<Control>,
    handle: Option<JoinHandle<()>>,
    interval: Duration,
}

impl BlinkTimer {
    /// Spawn the timer thread
    pub fn spawn(interval: Duration, msg_tx: Sender<Msg>) -> Result<Self> {
        let (control, control_rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("caret-blink".to_string())
            .spawn(move || loop {
                match control_rx.recv_timeout(interval) {
                    Ok(Control::Reset) => continue,
                    Ok(Control::Stop) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        if msg_tx.send(Msg::Ui(UiMsg::BlinkCaret)).is_err() {
                            break;
                        }
                    }
                }
            })
            .context("Failed to spawn caret blink thread")?;

        tracing::debug!(interval_ms = interval.as_millis() as u64, "blink timer started");
        Ok(Self {
            control,
            handle: Some(handle),
            interval,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Restart the current period
    pub fn reset(&self) {
        let _ = self.control.send(Control::Reset);
    }

    /// Stop the thread and wait for it to exit
    pub fn stop(&mut self) {
        let _ = self.control.send(Control::Stop);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for BlinkTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_arrive_on_queue() {
        let (tx, rx) = mpsc::channel();
        let mut timer = BlinkTimer::spawn(Duration::from_millis(10), tx).unwrap();
        let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(msg, Msg::Ui(UiMsg::BlinkCaret));
        timer.stop();
    }

    #[test]
    fn test_stop_ends_ticks() {
        let (tx, rx) = mpsc::channel();
        let mut timer = BlinkTimer::spawn(Duration::from_millis(5), tx).unwrap();
        timer.stop();
        while rx.try_recv().is_ok() {}
        // The thread has exited and dropped its sender
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(50)),
            Err(RecvTimeoutError::Disconnected)
        ));
    }
}
