use std::fmt;

/// The operating system product installed on the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledProduct {
    pub identifier: String,
    pub version: String,
    pub arch: String,
    pub vendor: Option<String>,
}

impl InstalledProduct {
    pub fn new(
        identifier: impl Into<String>,
        version: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            version: version.into(),
            arch: arch.into(),
            vendor: None,
        }
    }
}

impl fmt::Display for InstalledProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.identifier, self.version, self.arch)
    }
}
