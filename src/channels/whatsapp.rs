//! Twilio WhatsApp webhook — inbound messages arrive as form posts,
//! replies go back as TwiML.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::conversation::ConversationEngine;

/// Shared state for the webhook routes.
#[derive(Clone)]
pub struct WhatsAppRouteState {
    pub engine: Arc<ConversationEngine>,
}

/// The fields we consume from Twilio's inbound message payload.
#[derive(Debug, Deserialize)]
pub struct TwilioWebhook {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: String,
}

/// POST /whatsapp
///
/// Always returns 200: conversation-level failures ride in the reply
/// text, never in the HTTP status.
async fn whatsapp_webhook(
    State(state): State<WhatsAppRouteState>,
    Form(payload): Form<TwilioWebhook>,
) -> impl IntoResponse {
    tracing::debug!(from = %payload.from, "Webhook request");
    let reply = state
        .engine
        .handle_message(&payload.from, &payload.body)
        .await;
    (
        [(header::CONTENT_TYPE, "text/xml")],
        twiml_message(&reply),
    )
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// Wrap an outbound message in Twilio's TwiML envelope.
fn twiml_message(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        quick_xml::escape::escape(text)
    )
}

/// Build the webhook routes.
pub fn whatsapp_routes(state: WhatsAppRouteState) -> Router {
    Router::new()
        .route("/whatsapp", post(whatsapp_webhook))
        .route("/health", get(health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twiml_wraps_the_message() {
        let xml = twiml_message("Envía 'convenio' para comenzar.");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<Response><Message>"));
        assert!(xml.contains("Envía &apos;convenio&apos; para comenzar."));
        assert!(xml.ends_with("</Message></Response>"));
    }

    #[test]
    fn twiml_escapes_markup_characters() {
        let xml = twiml_message("a < b & c > d");
        assert!(xml.contains("a &lt; b &amp; c &gt; d"));
        assert!(!xml.contains("a < b"));
    }
}
