//! Human-readable listings over a graph, backing the `--tree` and
//! `--relationships` CLI flags.

use super::index::GraphIndex;
use super::node::{iri_suffix, NodeKind, SpdxNode};

/// Renders a per-kind node count summary, one kind per line, with a
/// trailing total.
pub fn kind_summary(index: &GraphIndex) -> String {
    let mut lines = vec!["SPDX object graph:".to_string()];
    for (tag, count) in index.kind_counts() {
        lines.push(format!("- {}: {}", tag, count));
    }
    lines.push(format!("{} objects found.", index.len()));
    lines.join("\n")
}

/// Renders every relationship in the graph as
/// `<from> --type--> <to, ...>`, with the relationship type reduced to
/// its bare term, plus a trailing count.
pub fn relationship_listing(index: &GraphIndex) -> String {
    let relationships: Vec<&SpdxNode> =
        index.nodes_of_kind(&NodeKind::Relationship).collect();

    let mut lines = vec!["Relationships:".to_string()];
    for rel in &relationships {
        let from = rel
            .attr("from")
            .and_then(|v| v.as_identity())
            .unwrap_or("(unknown)");
        let rel_type = rel
            .text("relationshipType")
            .map(iri_suffix)
            .unwrap_or("(untyped)");
        let to: Vec<&str> = rel
            .values("to")
            .into_iter()
            .filter_map(|v| v.as_identity())
            .collect();
        lines.push(format!("{} --{}--> {}", from, rel_type, to.join(", ")));
    }
    lines.push(format!("{} relationships found.", relationships.len()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::AttrValue;

    fn sample_graph() -> GraphIndex {
        GraphIndex::new(vec![
            SpdxNode::new(NodeKind::SpdxDocument, "urn:doc"),
            SpdxNode::new(NodeKind::Package, "urn:pkg"),
            SpdxNode::new(NodeKind::Relationship, "urn:rel")
                .with_ref("from", "urn:pkg")
                .with_text(
                    "relationshipType",
                    "https://spdx.org/rdf/3.0.1/terms/Core/RelationshipType/hasConcludedLicense",
                )
                .with_attr(
                    "to",
                    AttrValue::List(vec![AttrValue::Text("urn:license".to_string())]),
                ),
        ])
    }

    #[test]
    fn test_kind_summary_counts_and_total() {
        let summary = kind_summary(&sample_graph());
        assert!(summary.contains("- SpdxDocument: 1"));
        assert!(summary.contains("- software_Package: 1"));
        assert!(summary.contains("- Relationship: 1"));
        assert!(summary.ends_with("3 objects found."));
    }

    #[test]
    fn test_relationship_listing_strips_type_iri() {
        let listing = relationship_listing(&sample_graph());
        assert!(listing.contains("urn:pkg --hasConcludedLicense--> urn:license"));
        assert!(listing.ends_with("1 relationships found."));
        assert!(!listing.contains("spdx.org/rdf"));
    }

    #[test]
    fn test_relationship_listing_empty_graph() {
        let listing = relationship_listing(&GraphIndex::new(Vec::new()));
        assert!(listing.ends_with("0 relationships found."));
    }
}
