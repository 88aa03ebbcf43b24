//! Inbound message transports.

pub mod whatsapp;

pub use whatsapp::{whatsapp_routes, WhatsAppRouteState};
