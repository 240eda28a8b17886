//! Validation functionality
//!
//! Provides validation logic for:
//! - draw.io structural checks (required element chain, unique cell
//!   ids, edge references, forbidden elements)
//! - Diagram summary counts for reporting

pub mod drawio;
pub mod stats;

pub use drawio::{DrawioValidator, ValidationResult};
pub use stats::DiagramStats;

/// Required element chain from the document root down to the cell
/// container: `<mxfile>` > `<diagram>` > `<mxGraphModel>` > `<root>`.
pub(crate) const ROOT_ELEMENT: &str = "mxfile";
pub(crate) const DIAGRAM_ELEMENT: &str = "diagram";
pub(crate) const GRAPH_MODEL_ELEMENT: &str = "mxGraphModel";
pub(crate) const CONTAINER_ELEMENT: &str = "root";

/// Cell and geometry element names inside the container
pub(crate) const CELL_ELEMENT: &str = "mxCell";
pub(crate) const GEOMETRY_ELEMENT: &str = "mxGeometry";

/// draw.io fails to load files containing this element
pub(crate) const FORBIDDEN_ELEMENT: &str = "Array";
