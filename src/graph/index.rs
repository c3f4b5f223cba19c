use std::collections::{BTreeMap, HashMap};

use super::node::{AttrValue, NodeKind, SpdxNode};

/// GraphIndex - read-only, type-indexed view over a materialized graph
///
/// Built once from the deserialized node set and treated as immutable for
/// the duration of an extraction. Nodes are indexed by identity, by kind,
/// and relationships additionally by their `from` identity so license
/// collection does not rescan the full relationship set per component.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    nodes: Vec<SpdxNode>,
    by_id: HashMap<String, usize>,
    by_kind: HashMap<NodeKind, Vec<usize>>,
    relationships_by_from: HashMap<String, Vec<usize>>,
}

impl GraphIndex {
    pub fn new(nodes: Vec<SpdxNode>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_kind: HashMap<NodeKind, Vec<usize>> = HashMap::new();
        let mut relationships_by_from: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, node) in nodes.iter().enumerate() {
            by_id.insert(node.spdx_id().to_string(), i);
            by_kind.entry(node.kind().clone()).or_default().push(i);

            if node.kind() == &NodeKind::Relationship {
                if let Some(from) = node.attr("from").and_then(AttrValue::as_identity) {
                    relationships_by_from
                        .entry(from.to_string())
                        .or_default()
                        .push(i);
                }
            }
        }

        Self {
            nodes,
            by_id,
            by_kind,
            relationships_by_from,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &SpdxNode> {
        self.nodes.iter()
    }

    /// Looks up a node by its identity.
    pub fn node(&self, spdx_id: &str) -> Option<&SpdxNode> {
        self.by_id.get(spdx_id).map(|&i| &self.nodes[i])
    }

    /// All nodes of one kind. The enumeration is stable and complete
    /// within a call; ordering across kinds is unspecified.
    pub fn nodes_of_kind<'a>(&'a self, kind: &NodeKind) -> impl Iterator<Item = &'a SpdxNode> + 'a {
        self.by_kind
            .get(kind)
            .into_iter()
            .flatten()
            .map(move |&i| &self.nodes[i])
    }

    /// Every software-artifact node in the graph, across all artifact
    /// subtypes.
    pub fn software_artifacts(&self) -> impl Iterator<Item = &SpdxNode> {
        self.nodes
            .iter()
            .filter(|node| node.kind().is_software_artifact())
    }

    /// All relationship nodes whose `from` is the given identity.
    pub fn relationships_from<'a>(
        &'a self,
        spdx_id: &str,
    ) -> impl Iterator<Item = &'a SpdxNode> + 'a {
        self.relationships_by_from
            .get(spdx_id)
            .into_iter()
            .flatten()
            .map(move |&i| &self.nodes[i])
    }

    /// Dereferences an attribute value to the node it names, covering
    /// both explicit `Ref` values and JSON-LD idref strings.
    pub fn resolve<'a>(&'a self, value: &AttrValue) -> Option<&'a SpdxNode> {
        value.as_identity().and_then(|id| self.node(id))
    }

    /// Node count per kind tag, sorted by tag. Used by the graph summary
    /// listing.
    pub fn kind_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for node in &self.nodes {
            *counts.entry(node.kind().type_tag().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> GraphIndex {
        GraphIndex::new(vec![
            SpdxNode::new(NodeKind::SpdxDocument, "urn:doc"),
            SpdxNode::new(NodeKind::Package, "urn:pkg-a").with_text("name", "a"),
            SpdxNode::new(NodeKind::Package, "urn:pkg-b").with_text("name", "b"),
            SpdxNode::new(NodeKind::File, "urn:file-1"),
            SpdxNode::new(NodeKind::Relationship, "urn:rel-1")
                .with_ref("from", "urn:pkg-a")
                .with_text("relationshipType", "hasConcludedLicense"),
            SpdxNode::new(NodeKind::Relationship, "urn:rel-2")
                .with_text("from", "urn:pkg-b")
                .with_text("relationshipType", "dependsOn"),
        ])
    }

    #[test]
    fn test_nodes_of_kind() {
        let index = sample_graph();
        assert_eq!(index.nodes_of_kind(&NodeKind::Package).count(), 2);
        assert_eq!(index.nodes_of_kind(&NodeKind::SpdxDocument).count(), 1);
        assert_eq!(index.nodes_of_kind(&NodeKind::Snippet).count(), 0);
    }

    #[test]
    fn test_nodes_of_kind_restartable() {
        let index = sample_graph();
        let first: Vec<&str> = index
            .nodes_of_kind(&NodeKind::Package)
            .map(SpdxNode::spdx_id)
            .collect();
        let second: Vec<&str> = index
            .nodes_of_kind(&NodeKind::Package)
            .map(SpdxNode::spdx_id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_node_lookup() {
        let index = sample_graph();
        assert!(index.node("urn:pkg-a").is_some());
        assert!(index.node("urn:missing").is_none());
    }

    #[test]
    fn test_software_artifacts_span_subtypes() {
        let index = sample_graph();
        let ids: Vec<&str> = index.software_artifacts().map(SpdxNode::spdx_id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&"urn:file-1"));
        assert!(!ids.contains(&"urn:rel-1"));
    }

    #[test]
    fn test_relationships_from_ref_and_idref() {
        let index = sample_graph();
        // `from` stored as an explicit Ref
        assert_eq!(index.relationships_from("urn:pkg-a").count(), 1);
        // `from` stored as an idref string
        assert_eq!(index.relationships_from("urn:pkg-b").count(), 1);
        assert_eq!(index.relationships_from("urn:doc").count(), 0);
    }

    #[test]
    fn test_resolve_idref_text() {
        let index = sample_graph();
        let resolved = index.resolve(&AttrValue::Text("urn:pkg-a".to_string())).unwrap();
        assert_eq!(resolved.text("name"), Some("a"));
        assert!(index.resolve(&AttrValue::Text("not a node".to_string())).is_none());
    }

    #[test]
    fn test_kind_counts() {
        let index = sample_graph();
        let counts = index.kind_counts();
        assert_eq!(counts.get("software_Package"), Some(&2));
        assert_eq!(counts.get("Relationship"), Some(&2));
        assert_eq!(counts.values().sum::<usize>(), index.len());
    }

    #[test]
    fn test_empty_graph() {
        let index = GraphIndex::new(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.software_artifacts().count(), 0);
    }
}
