//! Conversation orchestration: message store + reply simulator + the widget
//! state the shell observes (loading flag, sidebar, selected category).

mod state;

use crate::config::ChatConfig;
use crate::message::{Attachment, Message};
use crate::sidebar::SidebarState;
use crate::simulator::ResponseSimulator;
use crate::store::MessageStore;
use crate::welcome;
use state::ControllerInner;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Public handle to one conversation session. Cloning shares the session;
/// the shell keeps one clone per view that emits intents.
#[derive(Clone)]
pub struct ConversationController {
    store: MessageStore,
    simulator: ResponseSimulator,
    config: ChatConfig,
    inner: Arc<Mutex<ControllerInner>>,
}

impl ConversationController {
    pub fn new() -> Self {
        Self::with_config(ChatConfig::default())
    }

    pub fn with_config(config: ChatConfig) -> Self {
        let store = MessageStore::new();
        if let Some(greeting) = &config.greeting {
            store.append(Message::bot(greeting.clone()));
        }
        Self {
            store,
            simulator: ResponseSimulator::from_config(&config),
            config,
            inner: Arc::new(Mutex::new(ControllerInner::new())),
        }
    }

    /// Append the user's message and schedule its simulated reply.
    ///
    /// Returns the appended message's id, or `None` for whitespace-only text
    /// with no attachments, which is ignored. Must be called from within a
    /// tokio runtime.
    pub fn send_message(
        &self,
        text: impl Into<String>,
        files: Vec<Attachment>,
    ) -> Option<String> {
        let text = text.into();
        if text.trim().is_empty() && files.is_empty() {
            debug!("ignoring empty send");
            return None;
        }

        let user = Message::user(text.clone(), files);
        let user_id = user.id.clone();
        // User message lands synchronously, before the reply is scheduled.
        self.store.append(user);

        let mut inner = self.inner.lock().unwrap();
        let session = inner.session;
        let ticket = Uuid::new_v4().to_string();

        let store = self.store.clone();
        let shared = Arc::clone(&self.inner);
        let done = ticket.clone();
        let pending = self.simulator.submit(&text, move |reply| {
            let mut inner = shared.lock().unwrap();
            if inner.session != session {
                debug!("dropping reply for a reset conversation");
                return;
            }
            store.append(reply);
            inner.pending.remove(&done);
        });
        inner.pending.insert(ticket, pending);

        info!(id = %user_id, pending = inner.pending.len(), "user message sent");
        Some(user_id)
    }

    /// Reset the session: empty the store, discard every pending reply,
    /// close the sidebar overlay, and re-seed the greeting if configured.
    pub fn new_chat(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.session += 1;
        let discarded = inner.pending.len();
        for (_, reply) in inner.pending.drain() {
            reply.cancel();
        }
        inner.sidebar.open = false;

        self.store.clear();
        if let Some(greeting) = &self.config.greeting {
            self.store.append(Message::bot(greeting.clone()));
        }
        info!(discarded, "conversation reset");
    }

    pub fn toggle_sidebar(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.sidebar.open = !inner.sidebar.open;
        debug!(open = inner.sidebar.open, "sidebar toggled");
    }

    /// Cosmetic welcome-screen selection; never touches the store. Unknown
    /// names are kept as-is since the operation is total.
    pub fn select_category(&self, name: impl Into<String>) {
        let name = name.into();
        if !welcome::is_known_category(&name) {
            warn!(category = %name, "selecting a category the shell does not list");
        }
        self.inner.lock().unwrap().selected_category = name;
    }

    /// Flip a sidebar folder's expansion. Returns false for unknown ids.
    pub fn toggle_folder(&self, id: &str) -> bool {
        self.inner.lock().unwrap().sidebar.toggle_folder(id)
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.inner.lock().unwrap().sidebar.search_query = query.into();
    }

    /* ---------- observable state ---------- */

    pub fn messages(&self) -> Vec<Message> {
        self.store.snapshot()
    }

    /// True while at least one simulated reply is in flight.
    pub fn is_loading(&self) -> bool {
        !self.inner.lock().unwrap().pending.is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.inner.lock().unwrap().pending.len()
    }

    pub fn sidebar_open(&self) -> bool {
        self.inner.lock().unwrap().sidebar.open
    }

    pub fn selected_category(&self) -> String {
        self.inner.lock().unwrap().selected_category.clone()
    }

    /// Snapshot of the sidebar state for rendering.
    pub fn sidebar(&self) -> SidebarState {
        self.inner.lock().unwrap().sidebar.clone()
    }

    /// Change notifications, delegated to the store (scroll-to-latest).
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    pub fn store(&self) -> MessageStore {
        self.store.clone()
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

impl Default for ConversationController {
    fn default() -> Self {
        Self::new()
    }
}
