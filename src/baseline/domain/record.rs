use std::collections::BTreeSet;

use serde::Serialize;

/// Identifies one field of a [`ComplianceRecord`]. Label sets, evaluation,
/// and diagnostics all address record content through this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    SbomAuthorNames,
    SbomTimestamp,
    SbomType,
    SbomHasPrimaryComponent,
    PrimaryComponentName,
    PrimaryComponentVersion,
    PrimaryComponentSupplierName,
    PrimaryComponentHashes,
    PrimaryComponentUniqueIds,
    PrimaryComponentLicenses,
    PrimaryComponentCopyrightHolder,
    ComponentName,
    ComponentVersion,
    ComponentSupplierName,
    ComponentUniqueIds,
}

impl FieldId {
    /// Every record field, in the canonical reporting order.
    pub const ALL: [FieldId; 15] = [
        FieldId::SbomAuthorNames,
        FieldId::SbomTimestamp,
        FieldId::SbomType,
        FieldId::SbomHasPrimaryComponent,
        FieldId::PrimaryComponentName,
        FieldId::PrimaryComponentVersion,
        FieldId::PrimaryComponentSupplierName,
        FieldId::PrimaryComponentHashes,
        FieldId::PrimaryComponentUniqueIds,
        FieldId::PrimaryComponentLicenses,
        FieldId::PrimaryComponentCopyrightHolder,
        FieldId::ComponentName,
        FieldId::ComponentVersion,
        FieldId::ComponentSupplierName,
        FieldId::ComponentUniqueIds,
    ];

    /// Stable camelCase key, matching the record's serialized field names.
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::SbomAuthorNames => "sbomAuthorNames",
            FieldId::SbomTimestamp => "sbomTimestamp",
            FieldId::SbomType => "sbomType",
            FieldId::SbomHasPrimaryComponent => "sbomHasPrimaryComponent",
            FieldId::PrimaryComponentName => "primaryComponentName",
            FieldId::PrimaryComponentVersion => "primaryComponentVersion",
            FieldId::PrimaryComponentSupplierName => "primaryComponentSupplierName",
            FieldId::PrimaryComponentHashes => "primaryComponentHashes",
            FieldId::PrimaryComponentUniqueIds => "primaryComponentUniqueIds",
            FieldId::PrimaryComponentLicenses => "primaryComponentLicenses",
            FieldId::PrimaryComponentCopyrightHolder => "primaryComponentCopyrightHolder",
            FieldId::ComponentName => "componentName",
            FieldId::ComponentVersion => "componentVersion",
            FieldId::ComponentSupplierName => "componentSupplierName",
            FieldId::ComponentUniqueIds => "componentUniqueIds",
        }
    }
}

/// Borrowed view of one record field, typed by content shape. Rendering
/// and rule evaluation both go through this view so the two can never
/// disagree about what a field holds.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// An optional scalar string (name, version, timestamp, ...).
    Text(Option<&'a str>),
    /// The creator-name list; empty when no named creator was found.
    Names(&'a [String]),
    /// Lifecycle-phase tags; absent when the wrapper carried none.
    Tags(Option<&'a Vec<String>>),
    /// Deduplicated (kind, value) pairs: hashes and unique identifiers.
    Pairs(&'a BTreeSet<(String, String)>),
    /// License strings; absent means "unknown", distinct from an empty set.
    Licenses(Option<&'a BTreeSet<String>>),
    /// One of the aggregate "all components have X" conjunctions, or the
    /// primary-component marker.
    Flag(bool),
}

impl FieldValue<'_> {
    /// Whether this value satisfies a mandatory-field requirement:
    /// present, non-blank, non-empty, or `true` depending on shape.
    pub fn is_satisfied(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.is_some_and(|s| !s.trim().is_empty()),
            FieldValue::Names(names) => !names.is_empty(),
            FieldValue::Tags(tags) => tags.is_some_and(|t| !t.is_empty()),
            FieldValue::Pairs(pairs) => !pairs.is_empty(),
            FieldValue::Licenses(licenses) => licenses.is_some_and(|l| !l.is_empty()),
            FieldValue::Flag(flag) => *flag,
        }
    }

    /// Display form used by the line-per-label record rendering. Missing
    /// content renders as `None` so the report still accounts for every
    /// checklist entry.
    pub fn render(&self) -> String {
        fn join(items: impl IntoIterator<Item = String>) -> String {
            let joined: Vec<String> = items.into_iter().collect();
            if joined.is_empty() {
                "None".to_string()
            } else {
                joined.join("; ")
            }
        }

        match self {
            FieldValue::Text(None) => "None".to_string(),
            FieldValue::Text(Some(value)) => value.to_string(),
            FieldValue::Names(names) => join(names.iter().cloned()),
            FieldValue::Tags(None) | FieldValue::Licenses(None) => "None".to_string(),
            FieldValue::Tags(Some(tags)) => join(tags.iter().cloned()),
            FieldValue::Pairs(pairs) => {
                join(pairs.iter().map(|(kind, value)| format!("{}:{}", kind, value)))
            }
            FieldValue::Licenses(Some(licenses)) => join(licenses.iter().cloned()),
            FieldValue::Flag(flag) => flag.to_string(),
        }
    }
}

/// ComplianceRecord - the normalized output of one extraction pass
///
/// Constructed empty, populated by exactly one traversal of an immutable
/// graph, then treated as read-only. Only scalar values and reference
/// identities are copied out of the graph; no node is owned or aliased.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRecord {
    /// Names of all creators on the document's creation metadata.
    pub sbom_author_names: Vec<String>,
    /// Creation timestamp, copied verbatim from the document.
    pub sbom_timestamp: Option<String>,
    /// Lifecycle-phase tags of the SBOM wrapper, IRI prefix stripped.
    pub sbom_type: Option<Vec<String>>,
    /// True iff a primary component was successfully resolved.
    pub sbom_has_primary_component: bool,
    pub primary_component_name: Option<String>,
    pub primary_component_version: Option<String>,
    pub primary_component_supplier_name: Option<String>,
    /// Deduplicated (algorithm, value) pairs from integrity methods.
    pub primary_component_hashes: BTreeSet<(String, String)>,
    /// Deduplicated (kind, value) identifier pairs.
    pub primary_component_unique_ids: BTreeSet<(String, String)>,
    /// Resolved license strings; `None` when no concluded/declared
    /// license relationship exists, never an empty set.
    pub primary_component_licenses: Option<BTreeSet<String>>,
    pub primary_component_copyright_holder: Option<String>,
    /// Conjunctions over every software artifact in the graph.
    pub component_name: bool,
    pub component_version: bool,
    pub component_supplier_name: bool,
    pub component_unique_ids: bool,
}

impl ComplianceRecord {
    /// Typed view of one field, addressed by id.
    pub fn value(&self, field: FieldId) -> FieldValue<'_> {
        match field {
            FieldId::SbomAuthorNames => FieldValue::Names(&self.sbom_author_names),
            FieldId::SbomTimestamp => FieldValue::Text(self.sbom_timestamp.as_deref()),
            FieldId::SbomType => FieldValue::Tags(self.sbom_type.as_ref()),
            FieldId::SbomHasPrimaryComponent => {
                FieldValue::Flag(self.sbom_has_primary_component)
            }
            FieldId::PrimaryComponentName => {
                FieldValue::Text(self.primary_component_name.as_deref())
            }
            FieldId::PrimaryComponentVersion => {
                FieldValue::Text(self.primary_component_version.as_deref())
            }
            FieldId::PrimaryComponentSupplierName => {
                FieldValue::Text(self.primary_component_supplier_name.as_deref())
            }
            FieldId::PrimaryComponentHashes => {
                FieldValue::Pairs(&self.primary_component_hashes)
            }
            FieldId::PrimaryComponentUniqueIds => {
                FieldValue::Pairs(&self.primary_component_unique_ids)
            }
            FieldId::PrimaryComponentLicenses => {
                FieldValue::Licenses(self.primary_component_licenses.as_ref())
            }
            FieldId::PrimaryComponentCopyrightHolder => {
                FieldValue::Text(self.primary_component_copyright_holder.as_deref())
            }
            FieldId::ComponentName => FieldValue::Flag(self.component_name),
            FieldId::ComponentVersion => FieldValue::Flag(self.component_version),
            FieldId::ComponentSupplierName => FieldValue::Flag(self.component_supplier_name),
            FieldId::ComponentUniqueIds => FieldValue::Flag(self.component_unique_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = ComplianceRecord::default();
        assert!(record.sbom_author_names.is_empty());
        assert!(record.sbom_timestamp.is_none());
        assert!(record.sbom_type.is_none());
        assert!(!record.sbom_has_primary_component);
        assert!(record.primary_component_hashes.is_empty());
        assert!(record.primary_component_unique_ids.is_empty());
        assert!(record.primary_component_licenses.is_none());
        assert!(!record.component_name);
    }

    #[test]
    fn test_text_satisfaction_trims_whitespace() {
        assert!(!FieldValue::Text(None).is_satisfied());
        assert!(!FieldValue::Text(Some("   ")).is_satisfied());
        assert!(FieldValue::Text(Some("libfoo")).is_satisfied());
    }

    #[test]
    fn test_collection_satisfaction_requires_content() {
        let empty = BTreeSet::new();
        assert!(!FieldValue::Pairs(&empty).is_satisfied());

        let mut pairs = BTreeSet::new();
        pairs.insert(("SHA256".to_string(), "abc".to_string()));
        assert!(FieldValue::Pairs(&pairs).is_satisfied());

        assert!(!FieldValue::Names(&[]).is_satisfied());
        assert!(FieldValue::Names(&["Alice".to_string()]).is_satisfied());
    }

    #[test]
    fn test_license_none_and_empty_both_unsatisfied() {
        assert!(!FieldValue::Licenses(None).is_satisfied());
        let empty = BTreeSet::new();
        assert!(!FieldValue::Licenses(Some(&empty)).is_satisfied());
    }

    #[test]
    fn test_flag_satisfaction() {
        assert!(FieldValue::Flag(true).is_satisfied());
        assert!(!FieldValue::Flag(false).is_satisfied());
    }

    #[test]
    fn test_render_missing_as_none() {
        assert_eq!(FieldValue::Text(None).render(), "None");
        assert_eq!(FieldValue::Licenses(None).render(), "None");
        assert_eq!(FieldValue::Names(&[]).render(), "None");
    }

    #[test]
    fn test_render_pairs_with_delimiter() {
        let mut pairs = BTreeSet::new();
        pairs.insert(("SHA256".to_string(), "abc123".to_string()));
        pairs.insert(("MD5".to_string(), "d41d8c".to_string()));
        // BTreeSet iteration is sorted, so rendering is deterministic.
        assert_eq!(FieldValue::Pairs(&pairs).render(), "MD5:d41d8c; SHA256:abc123");
    }

    #[test]
    fn test_render_names_joined() {
        let names = vec!["Alice".to_string(), "Bob".to_string()];
        assert_eq!(FieldValue::Names(&names).render(), "Alice; Bob");
    }

    #[test]
    fn test_value_addresses_every_field() {
        let record = ComplianceRecord {
            sbom_has_primary_component: true,
            primary_component_name: Some("libfoo".to_string()),
            ..Default::default()
        };
        assert!(record.value(FieldId::SbomHasPrimaryComponent).is_satisfied());
        assert!(record.value(FieldId::PrimaryComponentName).is_satisfied());
        for field in FieldId::ALL {
            // render() must be total over the field set
            let _ = record.value(field).render();
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let record = ComplianceRecord {
            primary_component_name: Some("libfoo".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["primaryComponentName"], "libfoo");
        assert_eq!(json["sbomHasPrimaryComponent"], false);
    }
}
