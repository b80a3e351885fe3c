//! Append-only conversation sequence with change notifications.

use crate::message::Message;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::debug;

/// Public handle to the message sequence. Cloning shares the underlying
/// store; all handles observe the same conversation.
#[derive(Clone)]
pub struct MessageStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    messages: Vec<Message>,
    revision: u64,
    changed: watch::Sender<u64>,
}

impl MessageStore {
    pub fn new() -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                messages: Vec::new(),
                revision: 0,
                changed,
            })),
        }
    }

    /// Push a message to the end of the sequence.
    pub fn append(&self, message: Message) {
        let mut inner = self.inner.lock().unwrap();
        debug!(id = %message.id, sender = ?message.sender, "message appended");
        inner.messages.push(message);
        inner.bump();
    }

    /// Drop every message. The shell swaps back to the welcome screen on the
    /// resulting notification.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.messages.clear();
        inner.bump();
    }

    /// Owned copy of the current sequence, in insertion order.
    pub fn snapshot(&self) -> Vec<Message> {
        self.inner.lock().unwrap().messages.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receiver over a revision counter bumped on every append/clear. The
    /// shell watches it for scroll-to-latest behavior.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.lock().unwrap().changed.subscribe()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    fn bump(&mut self) {
        self.revision += 1;
        // send_replace keeps the value current even with no receivers, so a
        // late subscriber still starts from the live revision.
        self.changed.send_replace(self.revision);
    }
}
