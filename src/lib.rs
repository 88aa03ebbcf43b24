//! Convenio Bot — WhatsApp intake agent for legal convenio documents.

pub mod channels;
pub mod config;
pub mod conversation;
pub mod documents;
pub mod error;
pub mod validators;
