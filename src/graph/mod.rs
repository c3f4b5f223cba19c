/// Graph layer - Read-only view over a deserialized SPDX 3 object graph
///
/// The baseline extractor consumes this layer through its query interface
/// only; how the graph was materialized (JSON-LD, test builders) is an
/// adapter concern.
pub mod index;
pub mod inspect;
pub mod node;

pub use index::GraphIndex;
pub use node::{iri_suffix, AttrValue, NodeKind, SpdxNode};
