//! Progress indication port
//!
//! Defines how a long-running call signals that it is in flight. The
//! indicator runs in the background between [`ProgressIndicator::start`] and
//! [`ActiveProgress::stop`]; `stop` consumes the handle so the stop signal is
//! sent exactly once.

use async_trait::async_trait;

/// Starts a progress display for a long-running call.
///
/// Implementations live in the presentation layer (e.g. a terminal spinner).
pub trait ProgressIndicator: Send + Sync {
    /// Begin showing progress with the given message.
    fn start(&self, message: &str) -> Box<dyn ActiveProgress>;
}

/// A running progress display.
#[async_trait]
pub trait ActiveProgress: Send {
    /// Stop the display. Returns once the display has been cleared and will
    /// not render again.
    async fn stop(self: Box<Self>);
}

/// No-op progress indicator for when progress reporting is not needed
pub struct NoProgress;

struct NoActiveProgress;

impl ProgressIndicator for NoProgress {
    fn start(&self, _message: &str) -> Box<dyn ActiveProgress> {
        Box::new(NoActiveProgress)
    }
}

#[async_trait]
impl ActiveProgress for NoActiveProgress {
    async fn stop(self: Box<Self>) {}
}
