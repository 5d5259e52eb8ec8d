//! Screen resolution lookup with legacy and scale-factor fallbacks.

use crate::error::PlatformResult;
use crate::model::{OsVersion, ScreenSize};
use crate::platform::DisplaySource;

/// First phone OS major version that reports the physical resolution directly.
pub const DIRECT_RESOLUTION_MIN_MAJOR: u32 = 8;

/// Resolution assumed for older systems and unknown scale factors.
pub const LEGACY_RESOLUTION: &str = "480x800";

/// Map a display scale factor to the resolution it implies.
#[must_use]
pub fn resolution_for_scale(scale: u32) -> &'static str {
    match scale {
        150 => "720x1280",
        160 => "768x1280",
        // 100 and anything unrecognized
        _ => LEGACY_RESOLUTION,
    }
}

/// Format pixel dimensions as `WIDTHxHEIGHT` with no decimals.
#[must_use]
pub fn format_resolution(size: ScreenSize) -> String {
    format!("{:.0}x{:.0}", size.width, size.height)
}

/// Resolve the screen resolution for a device running `os_version`.
///
/// Versions below `min_major` get [`LEGACY_RESOLUTION`] without asking the
/// display.
pub fn resolve<D>(os_version: OsVersion, min_major: u32, display: &D) -> PlatformResult<String>
where
    D: DisplaySource + ?Sized,
{
    if os_version.major < min_major {
        return Ok(LEGACY_RESOLUTION.to_owned());
    }

    if let Some(size) = display.physical_resolution()? {
        return Ok(format_resolution(size));
    }

    let scale = display.scale_factor()?;
    tracing::debug!(scale, "No physical resolution reported, using scale factor");
    Ok(resolution_for_scale(scale).to_owned())
}
