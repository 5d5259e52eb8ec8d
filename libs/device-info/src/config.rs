use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::DeviceInfoError;
use crate::manifest::MANIFEST_FILE_NAME;

/// Prefix for environment overrides, e.g. `DEVICE_INFO__DEVICE_ID`.
pub const ENV_PREFIX: &str = "DEVICE_INFO__";

/// Configuration for the device info provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceInfoConfig {
    /// Identifier reported instead of the platform open identifier.
    #[serde(default)]
    pub device_id: Option<String>,
    /// Root of the application package; the manifest is read from here.
    #[serde(default = "default_package_root")]
    pub package_root: PathBuf,
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
}

impl Default for DeviceInfoConfig {
    fn default() -> Self {
        Self {
            device_id: None,
            package_root: default_package_root(),
            manifest_file: default_manifest_file(),
        }
    }
}

impl DeviceInfoConfig {
    /// Layered load: defaults, then the YAML file (if given), then
    /// `DEVICE_INFO__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, DeviceInfoError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(DeviceInfoError::ConfigFileMissing(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        tracing::debug!(
            package_root = %config.package_root.display(),
            manifest_file = %config.manifest_file,
            device_id_override = config.device_id.is_some(),
            "Loaded device info configuration"
        );
        Ok(config)
    }

    /// Full path of the application manifest.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.package_root.join(&self.manifest_file)
    }
}

fn default_package_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_manifest_file() -> String {
    MANIFEST_FILE_NAME.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_package_root_manifest() {
        let config = DeviceInfoConfig::default();
        assert_eq!(config.device_id, None);
        assert_eq!(config.manifest_path(), Path::new(".").join("WMAppManifest.xml"));
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "device_id: from-yaml\npackage_root: /opt/app").unwrap();

        temp_env::with_vars_unset(
            ["DEVICE_INFO__DEVICE_ID", "DEVICE_INFO__PACKAGE_ROOT"],
            || {
                let config = DeviceInfoConfig::load(Some(file.path())).unwrap();
                assert_eq!(config.device_id.as_deref(), Some("from-yaml"));
                assert_eq!(config.package_root, PathBuf::from("/opt/app"));
                assert_eq!(config.manifest_file, "WMAppManifest.xml");
            },
        );
    }

    #[test]
    fn env_overrides_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "device_id: from-yaml").unwrap();

        temp_env::with_var("DEVICE_INFO__DEVICE_ID", Some("from-env"), || {
            let config = DeviceInfoConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.device_id.as_deref(), Some("from-env"));
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "screen: big").unwrap();

        let err = DeviceInfoConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, DeviceInfoError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = DeviceInfoConfig::load(Some(Path::new("/nonexistent/device-info.yaml")))
            .unwrap_err();
        assert!(matches!(err, DeviceInfoError::ConfigFileMissing(_)));
    }
}
