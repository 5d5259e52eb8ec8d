/// Failure reported by a platform facility
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("{0} is not available on this platform")]
    Unavailable(&'static str),

    #[error("{facility} query failed: {reason}")]
    Query {
        facility: &'static str,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlatformError {
    #[must_use]
    pub fn query(facility: &'static str, reason: impl Into<String>) -> Self {
        Self::Query {
            facility,
            reason: reason.into(),
        }
    }
}

/// Result type for platform facility queries.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Errors for application manifest parsing
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Malformed manifest XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed manifest attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
}

/// Errors surfaced by the fallible parts of the crate (configuration, output)
#[derive(Debug, thiserror::Error)]
pub enum DeviceInfoError {
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Config file does not exist: {}", .0.display())]
    ConfigFileMissing(std::path::PathBuf),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<figment::Error> for DeviceInfoError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}
