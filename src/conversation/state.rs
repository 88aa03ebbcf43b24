//! Conversation state machine — tracks where each sender is in the
//! intake flow.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fields::FIELDS;
use crate::documents::DocumentType;

/// The phases of an intake conversation.
///
/// Progresses linearly: Initial → SelectingType → Collecting →
/// Confirming. There is no terminal phase: generation and cancellation
/// both route back to Initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Initial,
    SelectingType,
    Collecting,
    Confirming,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::Initial
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Initial => "initial",
            Self::SelectingType => "selecting_type",
            Self::Collecting => "collecting",
            Self::Confirming => "confirming",
        };
        write!(f, "{s}")
    }
}

/// Per-sender session.
///
/// One session per sender identifier, created on first contact and
/// reset after successful generation or explicit cancellation.
///
/// Invariant: `current_field` is a valid index into [`FIELDS`] while
/// in `Collecting`; it equals `FIELDS.len()` only transiently when
/// transitioning to `Confirming`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub state: ConversationState,
    /// Selected document type, set while leaving `SelectingType`.
    pub document_type: Option<DocumentType>,
    /// Collected answers, keyed by field key.
    pub data: HashMap<String, String>,
    /// Index into [`FIELDS`]; meaningful only while `Collecting`.
    pub current_field: usize,
    /// Last inbound message time, used by idle pruning.
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: ConversationState::Initial,
            document_type: None,
            data: HashMap::new(),
            current_field: 0,
            last_activity: Utc::now(),
        }
    }

    /// Reset to the initial state, dropping all collected data.
    pub fn reset(&mut self) {
        self.state = ConversationState::Initial;
        self.document_type = None;
        self.data.clear();
        self.current_field = 0;
    }

    /// Record inbound activity.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Whether all ten fields have been collected.
    pub fn all_fields_collected(&self) -> bool {
        self.current_field >= FIELDS.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
