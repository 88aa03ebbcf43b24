//! Per-sender conversation state machine and session storage.

pub mod engine;
pub mod fields;
pub mod prompts;
pub mod state;
pub mod store;

pub use engine::ConversationEngine;
pub use state::{ConversationState, Session};
pub use store::{spawn_prune_task, InMemorySessionStore, SessionStore};
