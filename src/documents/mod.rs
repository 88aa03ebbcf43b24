//! Document types and template filling.

pub mod filler;
pub mod registry;

pub use filler::DocumentFiller;
pub use registry::DocumentType;
