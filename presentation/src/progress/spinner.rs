//! Terminal spinner shown while the completion request is in flight
//!
//! The spinner runs as a tokio task that waits on the stop token and the
//! frame timer together, so it notices a stop within one frame:
//!
//! ```text
//! start ─▶ render "\r{msg} {frame}" ─▶ select! { cancelled ─▶ erase, exit
//!                 ▲                            sleep(100ms) ─┐ }
//!                 └──────────────────────────────────────────┘
//! ```
//!
//! [`SpinnerHandle::stop`] cancels the token and joins the task, so once it
//! returns the line has been erased and nothing more will be written.
//! Dropping the handle without `stop` still cancels the task; it erases the
//! line on its next poll.

use async_trait::async_trait;
use std::io::{self, Write};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use trivia_application::ports::progress::{ActiveProgress, ProgressIndicator};

/// Spinner frames, in display order.
pub const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// How long each frame stays on screen.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// The bytes that blank out a rendered spinner line.
pub fn erase_sequence(message: &str) -> String {
    // message + space + frame
    let width = message.chars().count() + 2;
    format!("\r{}\r", " ".repeat(width))
}

/// A running spinner.
pub struct SpinnerHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl SpinnerHandle {
    /// Spawn the spinner task writing to `writer`. Must be called inside a
    /// tokio runtime.
    pub fn start<W>(message: impl Into<String>, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let token = CancellationToken::new();
        let task = tokio::spawn(spin(message.into(), writer, token.clone()));
        Self { token, task }
    }

    /// Stop the spinner and wait until its line has been erased.
    pub async fn stop(mut self) {
        self.token.cancel();
        // A panicked spinner has nothing left to erase.
        let _ = (&mut self.task).await;
    }
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[async_trait]
impl ActiveProgress for SpinnerHandle {
    async fn stop(self: Box<Self>) {
        SpinnerHandle::stop(*self).await;
    }
}

async fn spin<W: Write>(message: String, mut writer: W, token: CancellationToken) {
    for frame in FRAMES.iter().cycle() {
        if token.is_cancelled() {
            break;
        }
        // Terminal write failures are not worth aborting the game over.
        let _ = write!(writer, "\r{} {}", message, frame).and_then(|_| writer.flush());

        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(FRAME_INTERVAL) => {}
        }
    }

    let _ = writer
        .write_all(erase_sequence(&message).as_bytes())
        .and_then(|_| writer.flush());
}

/// [`ProgressIndicator`] that draws a spinner on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinnerProgress;

impl SpinnerProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressIndicator for SpinnerProgress {
    fn start(&self, message: &str) -> Box<dyn ActiveProgress> {
        Box::new(SpinnerHandle::start(message, io::stdout()))
    }
}
