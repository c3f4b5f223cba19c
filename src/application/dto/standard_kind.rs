use crate::baseline::ComplianceStandard;

/// Selects which compliance standard a document is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardKind {
    /// NTIA Minimum Elements (default)
    Ntia,
    /// CISA Framing of Software Component Transparency baseline
    Fsct,
}

impl StandardKind {
    /// Constructs the immutable label set for this standard.
    pub fn standard(&self) -> ComplianceStandard {
        match self {
            StandardKind::Ntia => ComplianceStandard::ntia_minimum_elements(),
            StandardKind::Fsct => ComplianceStandard::fsct_baseline_attributes(),
        }
    }
}

impl std::str::FromStr for StandardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ntia" => Ok(StandardKind::Ntia),
            "fsct" => Ok(StandardKind::Fsct),
            _ => Err(format!(
                "Invalid standard: {}. Please specify 'ntia' or 'fsct'",
                s
            )),
        }
    }
}

impl std::fmt::Display for StandardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StandardKind::Ntia => write!(f, "ntia"),
            StandardKind::Fsct => write!(f, "fsct"),
        }
    }
}
