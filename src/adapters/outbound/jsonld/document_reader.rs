use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::graph::{AttrValue, GraphIndex, NodeKind, SpdxNode};
use crate::ports::outbound::DocumentReader;
use crate::shared::error::BaselineError;
use crate::shared::Result;

/// JsonLdDocumentReader adapter for SPDX 3 JSON serializations
///
/// Materializes the flat `@graph` array of an SPDX 3.x JSON-LD document
/// into graph nodes. Inline objects become nodes of their own (elements
/// without an spdxId get a synthesized blank-node id), and idref strings
/// stay as text values that the index resolves at query time. No JSON-LD
/// expansion or SHACL validation happens here; the graph reflects the
/// document as serialized.
pub struct JsonLdDocumentReader;

impl JsonLdDocumentReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonLdDocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for JsonLdDocumentReader {
    fn read_document(&self, path: &Path) -> Result<GraphIndex> {
        let content = fs::read_to_string(path).map_err(|e| BaselineError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| BaselineError::DocumentParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let nodes = materialize_graph(&document).map_err(|details| {
            BaselineError::DocumentParseError {
                path: path.to_path_buf(),
                details,
            }
        })?;

        Ok(GraphIndex::new(nodes))
    }
}

/// Materializes every entry of the `@graph` array, depth-first so inline
/// objects land in the node set before their parents reference them.
fn materialize_graph(document: &Value) -> std::result::Result<Vec<SpdxNode>, String> {
    let graph = document
        .get("@graph")
        .and_then(Value::as_array)
        .ok_or_else(|| "document has no top-level @graph array".to_string())?;

    let mut nodes = Vec::new();
    let mut blank_counter = 0usize;
    for entry in graph {
        let object = entry
            .as_object()
            .ok_or_else(|| "@graph entries must be objects".to_string())?;
        materialize_object(object, &mut nodes, &mut blank_counter)?;
    }
    Ok(nodes)
}

/// Materializes one JSON object into a node, returning its identity so a
/// parent attribute can reference it.
fn materialize_object(
    object: &serde_json::Map<String, Value>,
    nodes: &mut Vec<SpdxNode>,
    blank_counter: &mut usize,
) -> std::result::Result<String, String> {
    let type_tag = object
        .get("type")
        .or_else(|| object.get("@type"))
        .and_then(Value::as_str)
        .ok_or_else(|| "graph object is missing a type tag".to_string())?;

    let spdx_id = object
        .get("spdxId")
        .or_else(|| object.get("@id"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            *blank_counter += 1;
            format!("_:anon{}", blank_counter)
        });

    let mut node = SpdxNode::new(NodeKind::from_type_tag(type_tag), spdx_id.clone());
    for (key, value) in object {
        if matches!(key.as_str(), "type" | "@type" | "spdxId" | "@id" | "@context") {
            continue;
        }
        if let Some(attr) = materialize_value(value, nodes, blank_counter)? {
            node = node.with_attr(key.clone(), attr);
        }
    }
    nodes.push(node);

    Ok(spdx_id)
}

fn materialize_value(
    value: &Value,
    nodes: &mut Vec<SpdxNode>,
    blank_counter: &mut usize,
) -> std::result::Result<Option<AttrValue>, String> {
    let attr = match value {
        Value::Null => return Ok(None),
        Value::String(s) => AttrValue::Text(s.clone()),
        Value::Bool(b) => AttrValue::Text(b.to_string()),
        Value::Number(n) => AttrValue::Text(n.to_string()),
        Value::Object(inner) => {
            let id = materialize_object(inner, nodes, blank_counter)?;
            AttrValue::Ref(id)
        }
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                if let Some(attr) = materialize_value(item, nodes, blank_counter)? {
                    list.push(attr);
                }
            }
            AttrValue::List(list)
        }
    };
    Ok(Some(attr))
}
