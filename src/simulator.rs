//! Deferred synthetic bot replies on the tokio clock.
//!
//! Stands in for a real inference backend: every submission schedules a
//! templated reply after `base_delay + [0, jitter)`. Handles stay cancellable
//! until the timer fires; once delivered a reply cannot be retracted.

use crate::config::ChatConfig;
use crate::message::Message;
use rand::Rng;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

// Delay envelope observed in the widget: 1 s floor plus up to 2 s of jitter.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_JITTER: Duration = Duration::from_millis(2000);

/// `{input}` is replaced with the submitted text verbatim.
pub const DEFAULT_TEMPLATE: &str = "I received your message: \"{input}\". \
    This is a demo response. In a real implementation, this would connect to an AI service.";

#[derive(Debug, Clone)]
pub struct ResponseSimulator {
    base_delay: Duration,
    jitter: Duration,
    template: String,
}

/// A scheduled-but-undelivered reply. Dropping the handle does NOT cancel
/// the timer; call [`PendingReply::cancel`].
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<()>,
}

impl PendingReply {
    /// Suppress the reply if it has not fired yet. No-op after delivery.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl ResponseSimulator {
    pub fn new() -> Self {
        Self::with_timing(DEFAULT_BASE_DELAY, DEFAULT_JITTER)
    }

    pub fn with_timing(base_delay: Duration, jitter: Duration) -> Self {
        Self {
            base_delay,
            jitter,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            base_delay: config.base_delay(),
            jitter: config.jitter(),
            template: config.reply_template.clone(),
        }
    }

    /// Schedule a reply to `input`. Must be called from within a tokio
    /// runtime; `on_reply` runs on the runtime when the timer fires.
    ///
    /// Concurrent submissions pend independently and complete in whatever
    /// order their delay draws dictate, not submission order.
    pub fn submit<F>(&self, input: &str, on_reply: F) -> PendingReply
    where
        F: FnOnce(Message) + Send + 'static,
    {
        self.submit_after(self.draw_delay(), input, on_reply)
    }

    // Split out so tests can pin exact delays.
    pub(crate) fn submit_after<F>(&self, delay: Duration, input: &str, on_reply: F) -> PendingReply
    where
        F: FnOnce(Message) + Send + 'static,
    {
        let content = self.render(input);
        debug!(delay_ms = delay.as_millis() as u64, "reply scheduled");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_reply(Message::bot(content));
        });
        PendingReply { handle }
    }

    fn render(&self, input: &str) -> String {
        self.template.replace("{input}", input)
    }

    fn draw_delay(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.base_delay;
        }
        let jitter_ms = rand::thread_rng().gen_range(0..self.jitter.as_millis() as u64);
        self.base_delay + Duration::from_millis(jitter_ms)
    }
}

impl Default for ResponseSimulator {
    fn default() -> Self {
        Self::new()
    }
}
