use std::fmt;

/// One of the four external capability providers whose version is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    HttpClient,
    HumanFormatter,
    ConfigSerializer,
    CliToolkit,
}

impl Capability {
    /// Report order. Lookups happen in this order and the first failure aborts.
    pub const ALL: [Capability; 4] = [
        Capability::HttpClient,
        Capability::HumanFormatter,
        Capability::ConfigSerializer,
        Capability::CliToolkit,
    ];

    /// Name of the crate that provides this capability.
    pub fn crate_name(self) -> &'static str {
        match self {
            Capability::HttpClient => "reqwest",
            Capability::HumanFormatter => "humantime",
            Capability::ConfigSerializer => "toml",
            Capability::CliToolkit => "clap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Capability::HttpClient => "HTTP client",
            Capability::HumanFormatter => "human-readable formatter",
            Capability::ConfigSerializer => "structured-config serializer",
            Capability::CliToolkit => "CLI toolkit",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A capability paired with its opaque version identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyVersion {
    pub capability: Capability,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_order() {
        let crates: Vec<&str> = Capability::ALL.iter().map(|c| c.crate_name()).collect();
        assert_eq!(crates, vec!["reqwest", "humantime", "toml", "clap"]);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Capability::CliToolkit.to_string(), "CLI toolkit");
        assert_eq!(Capability::HttpClient.to_string(), "HTTP client");
    }
}
