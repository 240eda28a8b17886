//! draw.io Validator - structural validation for generated .drawio files
//!
//! Provides unified building blocks for checking diagram files before
//! draw.io consumes them:
//! - XML tree parsing (element names and attributes only)
//! - Structural validation (required element chain, unique cell ids,
//!   edge references, forbidden elements, component counts)
//! - Summary statistics for reporting
//! - CLI support (feature-gated)

pub mod validation;
pub mod xml;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use validation::{DiagramStats, DrawioValidator, ValidationResult};
pub use xml::{XmlElement, XmlParseError};
