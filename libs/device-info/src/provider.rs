//! Device and environment metadata for analytics payloads.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::DeviceInfoConfig;
use crate::error::PlatformResult;
use crate::host::HostPlatform;
use crate::manifest;
use crate::model::{DeviceSnapshot, Orientation};
use crate::model_names;
use crate::platform::Platform;
use crate::resolution;

/// Read surface over the platform facilities.
///
/// Every accessor returns a value. Platform failures are logged and masked
/// into an empty string, zero or `false`; nothing propagates to the caller.
/// Values are read from the platform on every call.
pub struct DeviceInfoProvider {
    platform: Arc<dyn Platform>,
    device_id: RwLock<Option<String>>,
}

impl DeviceInfoProvider {
    #[must_use]
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self {
            platform,
            device_id: RwLock::new(None),
        }
    }

    /// Provider over the host platform, with the identifier override and
    /// manifest location taken from `config`.
    #[must_use]
    pub fn from_config(config: &DeviceInfoConfig) -> Self {
        let provider = Self::new(Arc::new(HostPlatform::from_config(config)));
        if let Some(id) = &config.device_id {
            provider.set_device_id(id.clone());
        }
        provider
    }

    /// Override returned by [`Self::device_id`] when set and non-empty.
    pub fn set_device_id(&self, device_id: impl Into<String>) {
        *self.device_id.write() = Some(device_id.into());
    }

    /// The override if set and non-empty, else the platform open identifier.
    #[must_use]
    pub fn device_id(&self) -> String {
        if let Some(id) = self.device_id.read().as_ref().filter(|id| !id.is_empty()) {
            return id.clone();
        }

        match self.platform.open_identifier() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to get open device identifier");
                String::new()
            }
        }
    }

    #[must_use]
    pub fn os_name(&self) -> String {
        self.platform.os_name()
    }

    /// Dotted OS version, e.g. `8.0.10521`.
    #[must_use]
    pub fn os_version(&self) -> String {
        masked("os version", self.platform.os_version().map(|v| v.to_string()))
    }

    #[must_use]
    pub fn manufacturer(&self) -> String {
        masked("manufacturer", self.platform.manufacturer())
    }

    /// Canonical model name, e.g. `Nokia Lumia 920` for `NOKIA`/`RM-821_eu_euro1_342`.
    #[must_use]
    pub fn device_model(&self) -> String {
        let name = self.platform.manufacturer().and_then(|manufacturer| {
            let model = self.platform.model()?;
            Ok(model_names::resolve(&manufacturer, &model).full_canonical_name())
        });
        masked("device model", name)
    }

    /// `App/@Version` from the application manifest.
    ///
    /// Empty when the manifest is missing, unreadable, malformed or has no
    /// version attribute.
    #[must_use]
    pub fn app_version(&self) -> String {
        let bytes = match self.platform.read_manifest() {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "Application manifest not readable");
                return String::new();
            }
        };

        match manifest::parse_app_version(&bytes) {
            Ok(Some(version)) => version,
            Ok(None) => {
                tracing::debug!("Application manifest has no App/@Version");
                String::new()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Application manifest is malformed");
                String::new()
            }
        }
    }

    /// Screen resolution as `WIDTHxHEIGHT`.
    #[must_use]
    pub fn resolution(&self) -> String {
        let resolution = self
            .platform
            .os_version()
            .and_then(|version| {
                let min_major = self.platform.direct_resolution_min_major();
                resolution::resolve(version, min_major, &*self.platform)
            });
        masked("resolution", resolution)
    }

    /// Cellular operator; empty without a cellular radio.
    #[must_use]
    pub fn carrier(&self) -> String {
        masked("carrier", self.platform.cellular_operator())
    }

    /// Bytes used by the current process.
    #[must_use]
    pub fn current_memory_usage(&self) -> u64 {
        masked("memory usage", self.platform.app_memory_usage())
    }

    /// Bytes of device memory.
    #[must_use]
    pub fn total_memory(&self) -> u64 {
        masked("total memory", self.platform.total_memory())
    }

    /// Remaining battery charge, 0 to 100.
    #[must_use]
    pub fn battery_level(&self) -> u8 {
        masked(
            "battery level",
            self.platform.remaining_charge_percent().map(|p| p.min(100)),
        )
    }

    /// `landscape` when the viewport is wider than tall, `portrait` otherwise.
    #[must_use]
    pub fn orientation(&self) -> String {
        masked(
            "orientation",
            self.platform
                .content_size()
                .map(|size| Orientation::from_size(size).to_string()),
        )
    }

    /// Online only over Wi-Fi or mobile broadband (GSM, CDMA).
    #[must_use]
    pub fn is_online(&self) -> bool {
        masked(
            "online status",
            self.platform.interface_kind().map(|kind| kind.is_online()),
        )
    }

    /// Every field read in one pass.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            device_id: self.device_id(),
            os_name: self.os_name(),
            os_version: self.os_version(),
            manufacturer: self.manufacturer(),
            device_model: self.device_model(),
            app_version: self.app_version(),
            resolution: self.resolution(),
            carrier: self.carrier(),
            current_memory_usage: self.current_memory_usage(),
            total_memory: self.total_memory(),
            battery_level: self.battery_level(),
            orientation: self.orientation(),
            online: self.is_online(),
            collected_at: chrono::Utc::now(),
        }
    }
}

/// Log a failed query and fall back to the type's empty value.
fn masked<T: Default>(field: &'static str, result: PlatformResult<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::debug!(field, error = %e, "Platform query failed, reporting empty value");
        T::default()
    })
}
