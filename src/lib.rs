//! # Parley
//!
//! Headless core for a chat-widget UI. The rendering shell (sidebar, header,
//! message list, input box, welcome screen) lives elsewhere; this crate owns
//! the state the shell observes and the intents it emits:
//!
//! ```text
//! shell intent → ConversationController → MessageStore (append/clear)
//!                        │                      │
//!                        └── ResponseSimulator ─┘  (deferred bot reply)
//! ```
//!
//! Replies are simulated: each user message schedules a templated bot answer
//! after a randomized 1–3 s delay on the tokio clock. Starting a new chat
//! cancels every reply still in flight.

pub mod config;
pub mod controller;
pub mod message;
pub mod sidebar;
pub mod simulator;
pub mod store;
pub mod welcome;

pub use config::ChatConfig;
pub use controller::ConversationController;
pub use message::{Attachment, Message, Sender};
pub use simulator::{PendingReply, ResponseSimulator};
pub use store::MessageStore;
