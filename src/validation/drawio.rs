//! draw.io structural validation
//!
//! Checks a `.drawio` file for the structural problems that crash
//! draw.io or leave a generated diagram visually broken: a malformed
//! or misnamed element chain, duplicate or missing cell ids, edges
//! referencing cells that do not exist, and forbidden `<Array>`
//! elements. Findings are accumulated as plain message strings so the
//! caller always sees everything wrong with the file, not just the
//! first problem.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Serialize;

use crate::xml::{XmlElement, parse_document};

use super::{
    CELL_ELEMENT, CONTAINER_ELEMENT, DIAGRAM_ELEMENT, FORBIDDEN_ELEMENT, GEOMETRY_ELEMENT,
    GRAPH_MODEL_ELEMENT, ROOT_ELEMENT,
};

/// draw.io reserves id=0 (the background) and id=1 (the default layer)
const MIN_CELL_COUNT: usize = 2;

/// Length of the serialized-cell snippet quoted when a cell has no id
const SNIPPET_LEN: usize = 100;

/// Result of validating one document
///
/// `errors` and `warnings` are ordered by check, in the order the
/// checks run. Errors always make the document invalid; warnings only
/// do so in strict mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// draw.io file validator
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawioValidator {
    strict: bool,
}

impl DrawioValidator {
    /// Create a validator; in strict mode warnings also fail validation
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Validate the file at `path`, read as UTF-8.
    ///
    /// A missing or unreadable file is reported as the sole entry in
    /// `errors` rather than as a separate failure mode.
    pub fn validate_file(&self, path: &Path) -> ValidationResult {
        if !path.exists() {
            return self.finish(vec![format!("File not found: {}", path.display())], Vec::new());
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return self.finish(
                    vec![format!("Failed to read {}: {}", path.display(), e)],
                    Vec::new(),
                );
            }
        };

        self.validate(&content)
    }

    /// Validate draw.io file content.
    ///
    /// Runs a single linear pass; only a parse failure or a missing
    /// element in the required ancestor chain stops the remaining
    /// checks.
    pub fn validate(&self, content: &str) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // 1. XML well-formedness
        let document = match parse_document(content) {
            Ok(document) => document,
            Err(e) => {
                tracing::debug!("rejecting input that is not well-formed XML: {}", e);
                return self.finish(vec![e.to_string()], warnings);
            }
        };

        // 2. Root structure validation
        if document.name() != ROOT_ELEMENT {
            errors.push(format!(
                "Root element is '{}', expected 'mxfile'",
                document.name()
            ));
        }

        let Some(diagram) = document.find_child(DIAGRAM_ELEMENT) else {
            errors.push("Missing <diagram> element under <mxfile>".to_string());
            return self.finish(errors, warnings);
        };

        let Some(graph_model) = diagram.find_child(GRAPH_MODEL_ELEMENT) else {
            errors.push("Missing <mxGraphModel> element under <diagram>".to_string());
            return self.finish(errors, warnings);
        };

        let Some(container) = graph_model.find_child(CONTAINER_ELEMENT) else {
            errors.push("Missing <root> element under <mxGraphModel>".to_string());
            return self.finish(errors, warnings);
        };

        // 3. Collect all cells
        let cells: Vec<&XmlElement> = container
            .children()
            .iter()
            .filter(|child| child.name() == CELL_ELEMENT)
            .collect();
        if cells.len() < MIN_CELL_COUNT {
            errors.push(format!(
                "Found only {} mxCell elements (need at least id=0 and id=1)",
                cells.len()
            ));
        }

        // 4. Check unique ids and classify vertices/edges
        let mut all_ids: HashMap<&str, &XmlElement> = HashMap::new();
        let mut vertex_ids: HashSet<&str> = HashSet::new();
        let mut edge_cells: Vec<&XmlElement> = Vec::new();

        for &cell in &cells {
            let Some(cell_id) = cell.attr("id") else {
                errors.push(format!(
                    "mxCell missing 'id' attribute: {}",
                    cell_snippet(cell)
                ));
                continue;
            };

            if all_ids.contains_key(cell_id) {
                errors.push(format!("Duplicate id='{}'", cell_id));
            }
            // Later cell wins the id mapping
            all_ids.insert(cell_id, cell);

            if cell.attr("vertex") == Some("1") {
                vertex_ids.insert(cell_id);
            }
            if cell.attr("edge") == Some("1") {
                edge_cells.push(cell);
            }
        }

        // 5. Validate edge references
        for edge in &edge_cells {
            let edge_id = edge.attr("id").unwrap_or("?");
            // An empty source/target attribute counts as absent
            let source = edge.attr("source").filter(|value| !value.is_empty());
            let target = edge.attr("target").filter(|value| !value.is_empty());

            if let Some(source) = source {
                if !all_ids.contains_key(source) {
                    errors.push(format!(
                        "Edge '{}' references non-existent source='{}'",
                        edge_id, source
                    ));
                }
            } else {
                warnings.push(format!("Edge '{}' has no source attribute", edge_id));
            }

            if let Some(target) = target {
                if !all_ids.contains_key(target) {
                    errors.push(format!(
                        "Edge '{}' references non-existent target='{}'",
                        edge_id, target
                    ));
                }
            } else {
                warnings.push(format!("Edge '{}' has no target attribute", edge_id));
            }
        }

        // 6. Check for forbidden <Array> elements
        scan_forbidden_elements(container, None, &mut errors);
        scan_geometry_children(container, &mut errors);

        // 7. Component count check
        let shape_count = vertex_ids.len();
        let edge_count = edge_cells.len();

        if shape_count < 3 {
            warnings.push(format!(
                "Only {} shapes — diagram may be too simple (recommend 8-15)",
                shape_count
            ));
        }

        if edge_count == 0 && shape_count > 1 {
            warnings.push("No edges/connectors found — shapes are unconnected".to_string());
        }

        tracing::debug!(
            "validated draw.io document: {} errors, {} warnings, {} shapes, {} edges",
            errors.len(),
            warnings.len(),
            shape_count,
            edge_count
        );

        self.finish(errors, warnings)
    }

    fn finish(&self, errors: Vec<String>, warnings: Vec<String>) -> ValidationResult {
        let is_valid = errors.is_empty() && !(self.strict && !warnings.is_empty());
        ValidationResult {
            is_valid,
            errors,
            warnings,
        }
    }
}

/// Depth-first scan for forbidden elements anywhere under `element`,
/// labelling each hit with the id of the nearest enclosing cell (`?`
/// when that cell has no id, `unknown` when there is no cell ancestor).
fn scan_forbidden_elements(
    element: &XmlElement,
    enclosing_cell: Option<&XmlElement>,
    errors: &mut Vec<String>,
) {
    let enclosing_cell = if element.name() == CELL_ELEMENT {
        Some(element)
    } else {
        enclosing_cell
    };

    for child in element.children() {
        if child.name() == FORBIDDEN_ELEMENT {
            let near = match enclosing_cell {
                Some(cell) => cell.attr("id").unwrap_or("?"),
                None => "unknown",
            };
            errors.push(format!(
                "Forbidden <Array> element found (near cell '{}') — this crashes draw.io!",
                near
            ));
        }
        scan_forbidden_elements(child, enclosing_cell, errors);
    }
}

/// Second, geometry-specific scan: a forbidden element directly inside
/// `<mxGeometry>` gets its own message, in addition to the general one.
fn scan_geometry_children(element: &XmlElement, errors: &mut Vec<String>) {
    for child in element.children() {
        if child.name() == GEOMETRY_ELEMENT {
            for geometry_child in child.children() {
                if geometry_child.name() == FORBIDDEN_ELEMENT {
                    errors.push(
                        "Forbidden <Array> inside <mxGeometry> — remove it and use self-closing geometry"
                            .to_string(),
                    );
                }
            }
        }
        scan_geometry_children(child, errors);
    }
}

fn cell_snippet(cell: &XmlElement) -> String {
    cell.to_xml_string().chars().take(SNIPPET_LEN).collect()
}
