//! Error types for Convenio Bot.

use std::path::PathBuf;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Document generation errors.
///
/// These never reach the transport layer: the conversation engine
/// catches them and replies with a generic failure message.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("No template registered for document type: {doc_type}")]
    TemplateNotFound { doc_type: String },

    #[error("Template file not found: {path}")]
    TemplateFileMissing { path: PathBuf },

    #[error("Failed to parse template {path}: {reason}")]
    TemplateParse { path: PathBuf, reason: String },

    #[error("Failed to write document {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
