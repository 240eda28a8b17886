//! Diagram summary counts
//!
//! Shape and edge counts for the success summary line. Counts come
//! from an independent re-parse of the file, not from the validator's
//! bookkeeping, and report as zero whenever the file cannot be parsed.

use std::path::Path;

use serde::Serialize;

use crate::xml::parse_document;

use super::{CELL_ELEMENT, CONTAINER_ELEMENT};

/// Shape and edge counts of one diagram file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiagramStats {
    pub shapes: usize,
    pub edges: usize,
}

impl DiagramStats {
    /// Count shapes and edges in the file at `path`.
    ///
    /// Any failure (missing file, unreadable content, malformed XML,
    /// no cell container) reports both counts as zero.
    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_content(&content),
            Err(_) => Self::default(),
        }
    }

    /// Count shapes and edges in document content.
    pub fn from_content(content: &str) -> Self {
        let Ok(document) = parse_document(content) else {
            return Self::default();
        };
        let Some(container) = document.find_descendant(CONTAINER_ELEMENT) else {
            return Self::default();
        };

        // Raw cell counts; a cell flagged as both counts in both
        let mut stats = Self::default();
        for cell in container.children() {
            if cell.name() != CELL_ELEMENT {
                continue;
            }
            if cell.attr("vertex") == Some("1") {
                stats.shapes += 1;
            }
            if cell.attr("edge") == Some("1") {
                stats.edges += 1;
            }
        }
        stats
    }
}
