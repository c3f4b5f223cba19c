use crate::graph::GraphIndex;
use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for obtaining a queryable object graph
///
/// This port abstracts the upstream deserializer: the core consumes the
/// resulting GraphIndex through its query interface and never touches
/// the wire format itself.
pub trait DocumentReader {
    /// Reads an SPDX document and materializes its object graph
    ///
    /// # Arguments
    /// * `path` - Path to the SPDX 3 document file
    ///
    /// # Returns
    /// A fully materialized, immutable GraphIndex
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not contain a
    /// parseable document
    fn read_document(&self, path: &Path) -> Result<GraphIndex>;
}
