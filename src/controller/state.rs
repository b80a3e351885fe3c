//! Shared widget state behind the controller's mutex.

use crate::sidebar::SidebarState;
use crate::simulator::PendingReply;
use crate::welcome;
use std::collections::HashMap;

pub(crate) struct ControllerInner {
    /// Bumped on every new-chat; replies scheduled under an older session
    /// are dropped on arrival instead of landing in the cleared store.
    pub session: u64,
    /// In-flight replies keyed by ticket. Loading is "any entry present".
    pub pending: HashMap<String, PendingReply>,
    pub sidebar: SidebarState,
    pub selected_category: String,
}

impl ControllerInner {
    pub fn new() -> Self {
        Self {
            session: 0,
            pending: HashMap::new(),
            sidebar: SidebarState::default(),
            selected_category: welcome::DEFAULT_CATEGORY.to_string(),
        }
    }
}
