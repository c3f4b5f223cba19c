use std::collections::HashMap;

/// Returns the text after the final `/` of an IRI, or the whole string
/// when it contains no slash. SPDX 3 serializations use both bare terms
/// ("sha256") and full IRIs for enum-valued properties; downstream code
/// always works with the bare term.
pub fn iri_suffix(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

/// Closed set of node-kind tags used for pattern matching during root
/// resolution and artifact enumeration. Tags follow the SPDX 3.0.1
/// JSON-LD type names; anything outside the closed set is carried as
/// `Other` so unknown graph content is never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    SpdxDocument,
    Bom,
    Sbom,
    Package,
    File,
    Snippet,
    Person,
    Organization,
    SoftwareAgent,
    Agent,
    CreationInfo,
    Relationship,
    Hash,
    ExternalIdentifier,
    LicenseExpression,
    SimpleLicensingText,
    Other(String),
}

impl NodeKind {
    /// Maps an SPDX 3.0.1 JSON-LD type tag to a kind.
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            "SpdxDocument" => NodeKind::SpdxDocument,
            "Bom" => NodeKind::Bom,
            "software_Sbom" => NodeKind::Sbom,
            "software_Package" => NodeKind::Package,
            "software_File" => NodeKind::File,
            "software_Snippet" => NodeKind::Snippet,
            "Person" => NodeKind::Person,
            "Organization" => NodeKind::Organization,
            "SoftwareAgent" => NodeKind::SoftwareAgent,
            "Agent" => NodeKind::Agent,
            "CreationInfo" => NodeKind::CreationInfo,
            "Relationship" => NodeKind::Relationship,
            "Hash" => NodeKind::Hash,
            "ExternalIdentifier" => NodeKind::ExternalIdentifier,
            "simplelicensing_LicenseExpression" => NodeKind::LicenseExpression,
            "simplelicensing_SimpleLicensingText" => NodeKind::SimpleLicensingText,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// The JSON-LD type tag this kind was parsed from.
    pub fn type_tag(&self) -> &str {
        match self {
            NodeKind::SpdxDocument => "SpdxDocument",
            NodeKind::Bom => "Bom",
            NodeKind::Sbom => "software_Sbom",
            NodeKind::Package => "software_Package",
            NodeKind::File => "software_File",
            NodeKind::Snippet => "software_Snippet",
            NodeKind::Person => "Person",
            NodeKind::Organization => "Organization",
            NodeKind::SoftwareAgent => "SoftwareAgent",
            NodeKind::Agent => "Agent",
            NodeKind::CreationInfo => "CreationInfo",
            NodeKind::Relationship => "Relationship",
            NodeKind::Hash => "Hash",
            NodeKind::ExternalIdentifier => "ExternalIdentifier",
            NodeKind::LicenseExpression => "simplelicensing_LicenseExpression",
            NodeKind::SimpleLicensingText => "simplelicensing_SimpleLicensingText",
            NodeKind::Other(tag) => tag,
        }
    }

    /// Packages, files, and snippets count as software artifacts for the
    /// all-components checks.
    pub fn is_software_artifact(&self) -> bool {
        matches!(self, NodeKind::Package | NodeKind::File | NodeKind::Snippet)
    }

    /// A Bom or software Sbom node wrapping the actual primary component.
    pub fn is_bom_wrapper(&self) -> bool {
        matches!(self, NodeKind::Bom | NodeKind::Sbom)
    }

    /// Any license-information variant: the two simple-licensing kinds we
    /// can render, plus every other node from the licensing profiles
    /// (those surface as a placeholder string rather than being dropped).
    pub fn is_license_info(&self) -> bool {
        match self {
            NodeKind::LicenseExpression | NodeKind::SimpleLicensingText => true,
            NodeKind::Other(tag) => {
                tag.starts_with("simplelicensing_") || tag.starts_with("expandedlicensing_")
            }
            _ => false,
        }
    }
}

/// Attribute value on a graph node.
///
/// `Text` holds scalar content; `Ref` holds the identity of another node;
/// `List` holds either. JSON-LD idref strings arrive as `Text` and are
/// resolved against the index at query time, so callers never have to
/// guess whether a scalar was meant as content or as a reference.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Ref(String),
    List(Vec<AttrValue>),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The node identity this value points at, for `Ref` values and for
    /// `Text` values used as idrefs.
    pub fn as_identity(&self) -> Option<&str> {
        match self {
            AttrValue::Ref(id) => Some(id),
            AttrValue::Text(s) => Some(s),
            AttrValue::List(_) => None,
        }
    }
}

/// A single node of the deserialized document graph: a kind tag, a unique
/// identifier, and named attributes. Nodes are immutable once built; the
/// extractor only copies scalar values and reference identities out.
#[derive(Debug, Clone, PartialEq)]
pub struct SpdxNode {
    kind: NodeKind,
    spdx_id: String,
    attrs: HashMap<String, AttrValue>,
}

impl SpdxNode {
    pub fn new(kind: NodeKind, spdx_id: impl Into<String>) -> Self {
        Self {
            kind,
            spdx_id: spdx_id.into(),
            attrs: HashMap::new(),
        }
    }

    /// Builder-style attribute attachment, used by the deserializer and
    /// by test graph construction.
    pub fn with_attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    pub fn with_text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_attr(name, AttrValue::Text(value.into()))
    }

    pub fn with_ref(self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.with_attr(name, AttrValue::Ref(id.into()))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }

    /// Capability-checked attribute lookup. Absence is an explicit `None`,
    /// never an empty placeholder value.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Scalar text content of an attribute, if it has any.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(AttrValue::as_text)
    }

    /// All values of an attribute, normalizing scalar-vs-list so callers
    /// iterate uniformly. An absent attribute yields an empty sequence.
    pub fn values(&self, name: &str) -> Vec<&AttrValue> {
        match self.attr(name) {
            None => Vec::new(),
            Some(AttrValue::List(items)) => items.iter().collect(),
            Some(value) => vec![value],
        }
    }
}
