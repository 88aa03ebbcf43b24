//! The per-sender transition function: one inbound message in, one
//! outbound reply out.

use std::sync::Arc;

use super::fields::FIELDS;
use super::prompts;
use super::state::{ConversationState, Session};
use super::store::SessionStore;
use crate::documents::{DocumentFiller, DocumentType};

/// Drives every conversation: loads the sender's session, applies one
/// transition, and produces the reply text.
///
/// Conversation-level failures (bad input, generation errors) are
/// always recovered into a reply; nothing here is fatal.
pub struct ConversationEngine {
    store: Arc<dyn SessionStore>,
    filler: Arc<DocumentFiller>,
}

impl ConversationEngine {
    pub fn new(store: Arc<dyn SessionStore>, filler: Arc<DocumentFiller>) -> Self {
        Self { store, filler }
    }

    /// Handle one inbound message from `sender`.
    ///
    /// The session stays locked for the whole transition, so messages
    /// from the same sender are processed one at a time.
    pub async fn handle_message(&self, sender: &str, body: &str) -> String {
        let session = self.store.session(sender).await;
        let mut session = session.lock().await;
        session.touch();

        let text = body.trim();
        let command = text.to_lowercase();
        tracing::info!(sender, state = %session.state, "Inbound message");

        match session.state {
            ConversationState::Initial => Self::handle_initial(&mut session, &command),
            ConversationState::SelectingType => Self::handle_selecting_type(&mut session, &command),
            ConversationState::Collecting => Self::handle_collecting(&mut session, text),
            ConversationState::Confirming => self.handle_confirming(&mut session, &command),
        }
    }

    fn handle_initial(session: &mut Session, command: &str) -> String {
        match command {
            "hola" | "hello" | "hi" => prompts::welcome(),
            "convenio" => {
                session.state = ConversationState::SelectingType;
                prompts::menu()
            }
            _ => prompts::start_hint(),
        }
    }

    fn handle_selecting_type(session: &mut Session, command: &str) -> String {
        let Ok(choice) = command.parse::<i64>() else {
            return prompts::enter_a_number();
        };
        let Some(doc_type) = usize::try_from(choice)
            .ok()
            .and_then(DocumentType::from_menu_choice)
        else {
            return prompts::invalid_option();
        };

        session.document_type = Some(doc_type);
        session.state = ConversationState::Collecting;
        session.current_field = 0;
        format!(
            "{}\n\n{}",
            prompts::selection_confirmed(doc_type),
            Self::next_prompt(session)
        )
    }

    /// Consume one answer for the current field.
    ///
    /// On validation failure the field index is unchanged and the same
    /// prompt is re-emitted; the answer is stored verbatim (trimmed,
    /// not case-folded) only once it validates.
    fn handle_collecting(session: &mut Session, answer: &str) -> String {
        let Some(field) = FIELDS.get(session.current_field) else {
            // Collecting with an exhausted index; recover by moving to
            // confirmation.
            return Self::next_prompt(session);
        };

        if let Some(validator) = field.validator {
            if !validator.accepts(answer) {
                tracing::debug!(field = field.key, "Rejected field value");
                return prompts::invalid_field(field);
            }
        }

        session.data.insert(field.key.to_string(), answer.to_string());
        session.current_field += 1;
        Self::next_prompt(session)
    }

    /// Emit the prompt for the current field, or switch to confirmation
    /// once all ten fields are collected.
    fn next_prompt(session: &mut Session) -> String {
        if session.all_fields_collected() {
            session.state = ConversationState::Confirming;
            prompts::summary(session)
        } else {
            // In range: all_fields_collected is current_field >= FIELDS.len().
            prompts::field_prompt(&FIELDS[session.current_field])
        }
    }

    fn handle_confirming(&self, session: &mut Session, command: &str) -> String {
        match command {
            "si" | "sí" | "yes" | "y" => self.generate(session),
            "no" | "n" => {
                session.reset();
                prompts::cancelled()
            }
            _ => prompts::confirm_retry(),
        }
    }

    fn generate(&self, session: &mut Session) -> String {
        let Some(doc_type) = session.document_type else {
            // Confirming without a selected type; nothing to generate.
            session.reset();
            return prompts::generation_failed();
        };

        match self.filler.fill(doc_type, &session.data) {
            Ok(path) => {
                tracing::info!(
                    doc_type = %doc_type,
                    path = %path.display(),
                    "Document generated"
                );
                session.reset();
                prompts::generated(doc_type)
            }
            Err(e) => {
                // The session stays in Confirming so the user can retry
                // with another 'sí' once the template issue is fixed.
                tracing::error!(error = %e, doc_type = %doc_type, "Document generation failed");
                prompts::generation_failed()
            }
        }
    }
}
