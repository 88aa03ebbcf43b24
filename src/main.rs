use std::sync::Arc;

use convenio_bot::channels::{whatsapp_routes, WhatsAppRouteState};
use convenio_bot::config::{AppConfig, TwilioConfig};
use convenio_bot::conversation::{
    spawn_prune_task, ConversationEngine, InMemorySessionStore, SessionStore,
};
use convenio_bot::documents::DocumentFiller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("📄 Convenio Bot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Webhook: http://0.0.0.0:{}/whatsapp", config.port);
    eprintln!("   Templates: {}", config.templates_dir.display());
    eprintln!("   Output: {}", config.output_dir.display());

    match TwilioConfig::from_env() {
        Some(twilio) if !twilio.whatsapp_number.is_empty() => {
            eprintln!("   Twilio: enabled ({})", twilio.whatsapp_number);
        }
        Some(_) => eprintln!("   Twilio: enabled"),
        None => eprintln!("   Twilio: not configured (replies served, delivery disabled)"),
    }

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let filler = Arc::new(DocumentFiller::new(
        config.templates_dir.clone(),
        config.output_dir.clone(),
        config.place.clone(),
    ));
    let engine = Arc::new(ConversationEngine::new(Arc::clone(&store), filler));

    let _prune_handle = spawn_prune_task(
        Arc::clone(&store),
        config.session_idle_timeout,
        config.prune_interval,
    );

    let app = whatsapp_routes(WhatsAppRouteState { engine })
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "WhatsApp webhook server started");
    axum::serve(listener, app).await?;

    Ok(())
}
