use serde::Serialize;
use std::fmt;

use crate::error::DeviceInfoError;

/// Operating system version as reported by the platform.
///
/// Displays the same way the platform prints it: `major.minor`, followed by
/// `build` and `revision` only when they are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: Option<u32>,
    pub revision: Option<u32>,
}

impl OsVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            build: None,
            revision: None,
        }
    }

    #[must_use]
    pub const fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    #[must_use]
    pub const fn with_revision(mut self, revision: u32) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Parse the leading dotted numeric prefix of `raw`.
    ///
    /// Anything after the first non-numeric component is ignored, so kernel
    /// style strings such as `6.5.0-14-generic` yield `6.5.0`. Returns `None`
    /// when `raw` does not start with a number.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts: Vec<u32> = Vec::with_capacity(4);
        let mut rest = raw.trim();

        while parts.len() < 4 {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits_end == 0 {
                break;
            }
            let Ok(value) = rest[..digits_end].parse::<u32>() else {
                break;
            };
            parts.push(value);

            match rest[digits_end..].strip_prefix('.') {
                Some(next) => rest = next,
                None => break,
            }
        }

        let (&major, tail) = parts.split_first()?;
        Some(Self {
            major,
            minor: tail.first().copied().unwrap_or(0),
            build: tail.get(1).copied(),
            revision: tail.get(2).copied(),
        })
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{build}")?;
            if let Some(revision) = self.revision {
                write!(f, ".{revision}")?;
            }
        }
        Ok(())
    }
}

/// Screen or viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Kind of the network interface currently carrying traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkInterfaceKind {
    Wireless80211,
    MobileBroadbandGsm,
    MobileBroadbandCdma,
    Ethernet,
    None,
    Other,
}

impl NetworkInterfaceKind {
    /// Only Wi-Fi and mobile broadband count as online.
    #[must_use]
    pub const fn is_online(self) -> bool {
        matches!(
            self,
            Self::Wireless80211 | Self::MobileBroadbandGsm | Self::MobileBroadbandCdma
        )
    }
}

/// Display orientation derived from the viewport size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Landscape only when width strictly exceeds height.
    #[must_use]
    pub fn from_size(size: ScreenSize) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All device fields captured in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSnapshot {
    pub device_id: String,
    pub os_name: String,
    pub os_version: String,
    pub manufacturer: String,
    pub device_model: String,
    pub app_version: String,
    pub resolution: String,
    pub carrier: String,
    pub current_memory_usage: u64,
    pub total_memory: u64,
    pub battery_level: u8,
    pub orientation: String,
    pub online: bool,
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl DeviceSnapshot {
    pub fn to_json(&self, pretty: bool) -> Result<String, DeviceInfoError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
