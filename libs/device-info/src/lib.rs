#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Device Information Library
//!
//! Reads device and environment metadata for analytics payloads:
//! - Identity (open identifier, overridable)
//! - OS name and version
//! - Hardware (manufacturer, canonical model, memory, battery)
//! - Display (resolution, orientation)
//! - Connectivity (online status, carrier)
//! - Application version from the package manifest
//!
//! Platform access goes through the capability traits in [`platform`];
//! [`HostPlatform`] implements them for the machine the code runs on.

mod host;
mod resolution;

pub mod config;
pub mod error;
pub mod manifest;
pub mod model;
pub mod model_names;
pub mod platform;

mod provider;

pub use config::DeviceInfoConfig;
pub use error::{DeviceInfoError, ManifestError, PlatformError, PlatformResult};
pub use host::HostPlatform;
pub use model::*;
pub use model_names::CanonicalPhoneName;
pub use platform::Platform;
pub use provider::DeviceInfoProvider;
pub use resolution::{LEGACY_RESOLUTION, resolution_for_scale};
