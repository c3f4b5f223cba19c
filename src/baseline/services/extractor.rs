use std::collections::BTreeSet;

use crate::baseline::domain::ComplianceRecord;
use crate::baseline::error::ExtractionError;
use crate::graph::{iri_suffix, AttrValue, GraphIndex, NodeKind, SpdxNode};

/// Relationship types that attach license information to a component.
const LICENSE_RELATIONSHIP_TYPES: [&str; 2] = ["hasConcludedLicense", "hasDeclaredLicense"];

/// Placeholder for license-information nodes we cannot render. Keeping
/// the entry preserves the cardinality of the license relationship even
/// when its content can't be shown.
const UNKNOWN_LICENSE: &str = "Unknown license object";

/// ComplianceExtractor - one-pass population of a ComplianceRecord
///
/// Pure function of the graph's contents: resolves the document root,
/// unwraps BOM/SBOM wrapper nodes to the primary component, collects its
/// identifiers, hashes, licenses, and supplier, and aggregates the
/// all-components conjunctions over every software artifact. Structural
/// violations fail the whole extraction; missing content never does.
pub struct ComplianceExtractor;

impl ComplianceExtractor {
    pub fn extract(index: &GraphIndex) -> Result<ComplianceRecord, ExtractionError> {
        let mut record = ComplianceRecord::default();

        let documents: Vec<&SpdxNode> =
            index.nodes_of_kind(&NodeKind::SpdxDocument).collect();
        if documents.len() != 1 {
            return Err(ExtractionError::MultipleOrMissingDocument {
                count: documents.len(),
            });
        }
        let document = documents[0];

        Self::collect_creation_info(index, document, &mut record);

        let primary = Self::resolve_primary_component(index, document, &mut record)?;
        record.sbom_has_primary_component = true;

        record.primary_component_name = non_blank(primary.text("name"));
        record.primary_component_version = non_blank(primary.text("software_packageVersion"));
        record.primary_component_unique_ids = Self::collect_unique_ids(index, primary);

        if let Some(supplier) = primary.attr("suppliedBy").and_then(|v| index.resolve(v)) {
            record.primary_component_supplier_name = non_blank(supplier.text("name"));
        }

        record.primary_component_hashes = Self::collect_hashes(index, primary);

        let licenses = Self::collect_licenses(index, primary);
        if !licenses.is_empty() {
            record.primary_component_licenses = Some(licenses);
        }

        record.primary_component_copyright_holder =
            non_blank(primary.text("software_copyrightText"));

        Self::audit_artifacts(index, &mut record);

        Ok(record)
    }

    /// Creator names (skipping unnamed agents) and the verbatim creation
    /// timestamp from the document's creation metadata.
    fn collect_creation_info(
        index: &GraphIndex,
        document: &SpdxNode,
        record: &mut ComplianceRecord,
    ) {
        let Some(creation_info) = document
            .attr("creationInfo")
            .and_then(|v| index.resolve(v))
        else {
            return;
        };

        record.sbom_author_names = creation_info
            .values("createdBy")
            .into_iter()
            .filter_map(|agent| index.resolve(agent))
            .filter_map(|agent| non_blank(agent.text("name")))
            .collect();

        record.sbom_timestamp = creation_info.text("created").map(str::to_string);
    }

    /// Resolves the document's single root element, unwrapping one level
    /// of Bom/Sbom wrapper. The wrapper's lifecycle-phase tags are
    /// captured on the way through. The final candidate must be a
    /// software package.
    fn resolve_primary_component<'a>(
        index: &'a GraphIndex,
        document: &SpdxNode,
        record: &mut ComplianceRecord,
    ) -> Result<&'a SpdxNode, ExtractionError> {
        let roots = document.values("rootElement");
        if roots.len() != 1 {
            return Err(ExtractionError::InvalidRootElementCount { count: roots.len() });
        }
        let mut candidate = Self::resolve_element(index, roots[0])?;

        if candidate.kind().is_bom_wrapper() {
            if candidate.kind() == &NodeKind::Sbom {
                let sbom_types: Vec<String> = candidate
                    .values("software_sbomType")
                    .into_iter()
                    .filter_map(AttrValue::as_text)
                    .map(|tag| iri_suffix(tag).to_string())
                    .collect();
                if !sbom_types.is_empty() {
                    record.sbom_type = Some(sbom_types);
                }
            }

            let wrapped_roots = candidate.values("rootElement");
            if wrapped_roots.len() != 1 {
                return Err(ExtractionError::InvalidBomRootElementCount {
                    count: wrapped_roots.len(),
                });
            }
            candidate = Self::resolve_element(index, wrapped_roots[0])?;
        }

        if candidate.kind() != &NodeKind::Package {
            return Err(ExtractionError::RootElementNotPackage {
                kind: candidate.kind().type_tag().to_string(),
            });
        }

        Ok(candidate)
    }

    /// Dereferences a root-element entry. A reference that names no node
    /// in the graph cannot be a package, and is reported as such.
    fn resolve_element<'a>(
        index: &'a GraphIndex,
        value: &AttrValue,
    ) -> Result<&'a SpdxNode, ExtractionError> {
        index
            .resolve(value)
            .ok_or_else(|| ExtractionError::RootElementNotPackage {
                kind: "unresolved reference".to_string(),
            })
    }

    /// Union of the component's identifier kinds: its own spdxId, content
    /// identifiers, and external identifiers, deduplicated.
    fn collect_unique_ids(index: &GraphIndex, primary: &SpdxNode) -> BTreeSet<(String, String)> {
        let mut ids = BTreeSet::new();

        if !primary.spdx_id().trim().is_empty() {
            ids.insert(("spdxId".to_string(), primary.spdx_id().to_string()));
        }

        for value in primary.values("software_contentIdentifier") {
            let content = value.as_text().map(str::to_string).or_else(|| {
                index
                    .resolve(value)
                    .and_then(|node| non_blank(node.text("software_contentIdentifierValue")))
            });
            if let Some(content) = content.filter(|c| !c.trim().is_empty()) {
                ids.insert(("contentIdentifier".to_string(), content));
            }
        }

        for value in primary.values("externalIdentifier") {
            let identifier = value.as_text().map(str::to_string).or_else(|| {
                index
                    .resolve(value)
                    .and_then(|node| non_blank(node.text("identifier")))
            });
            if let Some(identifier) = identifier.filter(|i| !i.trim().is_empty()) {
                ids.insert(("externalIdentifier".to_string(), identifier));
            }
        }

        ids
    }

    /// (algorithm, value) pairs from the component's integrity methods.
    /// Entries with a blank algorithm or value are skipped; the algorithm
    /// keeps only its bare term.
    fn collect_hashes(index: &GraphIndex, primary: &SpdxNode) -> BTreeSet<(String, String)> {
        let mut hashes = BTreeSet::new();
        for value in primary.values("verifiedUsing") {
            let Some(method) = index.resolve(value) else {
                continue;
            };
            let algorithm = method.text("algorithm").map(str::trim).unwrap_or("");
            let hash_value = method.text("hashValue").map(str::trim).unwrap_or("");
            if algorithm.is_empty() || hash_value.is_empty() {
                continue;
            }
            hashes.insert((iri_suffix(algorithm).to_string(), hash_value.to_string()));
        }
        hashes
    }

    /// License strings reachable through concluded/declared license
    /// relationships whose source is the primary component. Only
    /// relationships from the final resolved component count; a wrapper's
    /// own license relationships do not.
    fn collect_licenses(index: &GraphIndex, primary: &SpdxNode) -> BTreeSet<String> {
        let mut licenses = BTreeSet::new();
        for relationship in index.relationships_from(primary.spdx_id()) {
            let rel_type = relationship
                .text("relationshipType")
                .map(iri_suffix)
                .unwrap_or("");
            if !LICENSE_RELATIONSHIP_TYPES.contains(&rel_type) {
                continue;
            }
            for target in relationship.values("to") {
                let Some(node) = index.resolve(target) else {
                    continue;
                };
                if !node.kind().is_license_info() {
                    continue;
                }
                licenses.insert(Self::license_display(node));
            }
        }
        licenses
    }

    fn license_display(node: &SpdxNode) -> String {
        let text = match node.kind() {
            NodeKind::LicenseExpression => node.text("simplelicensing_licenseExpression"),
            NodeKind::SimpleLicensingText => node.text("simplelicensing_licenseText"),
            _ => None,
        };
        text.map_or_else(|| UNKNOWN_LICENSE.to_string(), str::to_string)
    }

    /// Running conjunctions over every software artifact: non-blank id,
    /// name, supplier name, and (packages only) version. A graph with
    /// zero artifacts leaves all four vacuously true.
    fn audit_artifacts(index: &GraphIndex, record: &mut ComplianceRecord) {
        let mut all_have_id = true;
        let mut all_have_name = true;
        let mut all_have_supplier = true;
        let mut all_have_version = true;

        for artifact in index.software_artifacts() {
            all_have_id = all_have_id && !artifact.spdx_id().trim().is_empty();
            all_have_name = all_have_name && has_non_blank_text(artifact, "name");

            let supplier_name = artifact
                .attr("suppliedBy")
                .and_then(|v| index.resolve(v))
                .and_then(|supplier| non_blank(supplier.text("name")));
            all_have_supplier = all_have_supplier && supplier_name.is_some();

            if artifact.kind() == &NodeKind::Package {
                all_have_version =
                    all_have_version && has_non_blank_text(artifact, "software_packageVersion");
            }
        }

        record.component_unique_ids = all_have_id;
        record.component_name = all_have_name;
        record.component_supplier_name = all_have_supplier;
        record.component_version = all_have_version;
    }
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

fn has_non_blank_text(node: &SpdxNode, attr: &str) -> bool {
    node.text(attr).is_some_and(|s| !s.trim().is_empty())
}
