//! Sidebar state the shell renders: chat folders, saved chats, search.
//!
//! Purely cosmetic; nothing here touches the message store. Folder and chat
//! seeds mirror the widget's stock sidebar content.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChatFolder {
    pub id: String,
    pub name: String,
    pub is_expanded: bool,
}

/// A saved conversation entry shown under "Chats".
#[derive(Debug, Clone, Serialize)]
pub struct ChatSummary {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarState {
    pub open: bool,
    pub search_query: String,
    pub folders: Vec<ChatFolder>,
    pub chats: Vec<ChatSummary>,
}

impl SidebarState {
    /// Flip a folder's expansion. Returns false when no folder has that id.
    pub fn toggle_folder(&mut self, id: &str) -> bool {
        match self.folders.iter_mut().find(|f| f.id == id) {
            Some(folder) => {
                folder.is_expanded = !folder.is_expanded;
                true
            }
            None => false,
        }
    }

    /// Saved chats matching the search query (case-insensitive, over title
    /// and preview). An empty query matches everything.
    pub fn filtered_chats(&self) -> Vec<&ChatSummary> {
        let query = self.search_query.trim().to_lowercase();
        self.chats
            .iter()
            .filter(|chat| {
                query.is_empty()
                    || chat.title.to_lowercase().contains(&query)
                    || chat.preview.to_lowercase().contains(&query)
            })
            .collect()
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        let folder = |id: &str, name: &str| ChatFolder {
            id: id.to_string(),
            name: name.to_string(),
            is_expanded: true,
        };
        let chat = |id: &str, title: &str, preview: &str| ChatSummary {
            id: id.to_string(),
            title: title.to_string(),
            preview: preview.to_string(),
            is_active: false,
        };
        Self {
            open: false,
            search_query: String::new(),
            folders: vec![
                folder("work", "Work chats"),
                folder("life", "Life chats"),
                folder("projects", "Projects chats"),
                folder("clients", "Clients chats"),
            ],
            chats: vec![
                chat(
                    "plan-trip",
                    "Plan a 3-day trip",
                    "A 3-day trip to see the northern lights in Norway...",
                ),
                chat(
                    "loyalty-program",
                    "Ideas for a customer loyalty program",
                    "Here are seven ideas for a customer loyalty...",
                ),
                chat(
                    "help-pick",
                    "Help me pick",
                    "Here are some gift ideas for your friend doing...",
                ),
            ],
        }
    }
}
