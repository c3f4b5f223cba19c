use std::path::Path;

use sbom_baseline::prelude::*;

/// Mock DocumentReader for testing
///
/// Serves a pre-built node set as the materialized graph, or fails on
/// demand, so use-case tests never touch the filesystem.
pub struct MockDocumentReader {
    nodes: Vec<SpdxNode>,
    should_fail: bool,
}

impl MockDocumentReader {
    pub fn new(nodes: Vec<SpdxNode>) -> Self {
        Self {
            nodes,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            nodes: Vec::new(),
            should_fail: true,
        }
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, _path: &Path) -> Result<GraphIndex> {
        if self.should_fail {
            anyhow::bail!("Mock document read failure");
        }
        Ok(GraphIndex::new(self.nodes.clone()))
    }
}
