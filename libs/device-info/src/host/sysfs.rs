//! Linux sysfs and procfs readers for the host platform.
//!
//! The routing table comes from `procfs`; DMI, DRM and interface details are
//! read straight from sysfs.

use std::fs;
use std::path::{Path, PathBuf};

use procfs::net::RouteEntry;

use crate::error::{PlatformError, PlatformResult};
use crate::model::{NetworkInterfaceKind, ScreenSize};

pub const DMI_ROOT: &str = "/sys/class/dmi/id";
pub const DRM_ROOT: &str = "/sys/class/drm";
pub const NET_ROOT: &str = "/sys/class/net";

/// `ARPHRD_ETHER` from `if_arp.h`
const ARPHRD_ETHER: &str = "1";
/// `RTF_UP` from `route.h`
const RTF_UP: u16 = 0x1;

/// Prefixes used by cellular modem drivers (MBIM/QMI, Qualcomm rmnet, USB modems).
const BROADBAND_PREFIXES: &[&str] = &["wwan", "rmnet", "wwp"];

fn read_trimmed(path: &Path) -> PlatformResult<String> {
    Ok(fs::read_to_string(path)?.trim().to_owned())
}

/// Read one DMI attribute such as `sys_vendor` or `product_name`.
pub fn dmi_attribute(root: &Path, name: &'static str) -> PlatformResult<String> {
    let value = read_trimmed(&root.join(name))?;
    if value.is_empty() {
        return Err(PlatformError::Unavailable(name));
    }
    Ok(value)
}

/// Preferred mode of the first connected DRM connector.
pub fn connected_display_mode(root: &Path) -> PlatformResult<Option<ScreenSize>> {
    let mut connectors: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().contains('-'))
        .map(|entry| entry.path())
        .collect();
    connectors.sort();

    for connector in connectors {
        let Ok(status) = read_trimmed(&connector.join("status")) else {
            continue;
        };
        if status != "connected" {
            continue;
        }
        let Ok(modes) = fs::read_to_string(connector.join("modes")) else {
            continue;
        };
        if let Some(size) = modes.lines().next().and_then(parse_mode) {
            tracing::debug!(
                connector = %connector.display(),
                width = size.width,
                height = size.height,
                "Found connected display"
            );
            return Ok(Some(size));
        }
    }

    Ok(None)
}

/// Parse a DRM mode line like `1920x1080` or `1920x1080i`.
fn parse_mode(line: &str) -> Option<ScreenSize> {
    let (width, height) = line.trim().split_once('x')?;
    let height_end = height
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(height.len());
    let width: u32 = width.parse().ok()?;
    let height: u32 = height[..height_end].parse().ok()?;
    Some(ScreenSize::new(f64::from(width), f64::from(height)))
}

/// Interface carrying the default route with the lowest metric.
#[must_use]
pub fn default_route_interface(routes: &[RouteEntry]) -> Option<&str> {
    routes
        .iter()
        .filter(|route| route.destination.is_unspecified() && route.mask.is_unspecified())
        .filter(|route| route.flags & RTF_UP != 0)
        .min_by_key(|route| route.metrics)
        .map(|route| route.iface.as_str())
}

/// Classify a network interface from its sysfs directory.
pub fn classify_interface(net_root: &Path, name: &str) -> NetworkInterfaceKind {
    let dir = net_root.join(name);

    if dir.join("wireless").exists() || dir.join("phy80211").exists() {
        return NetworkInterfaceKind::Wireless80211;
    }
    if BROADBAND_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return NetworkInterfaceKind::MobileBroadbandGsm;
    }
    match read_trimmed(&dir.join("type")) {
        Ok(kind) if kind == ARPHRD_ETHER => NetworkInterfaceKind::Ethernet,
        _ => NetworkInterfaceKind::Other,
    }
}

/// Kind of the interface holding the default route, `None` when offline.
#[must_use]
pub fn active_interface_kind(routes: &[RouteEntry], net_root: &Path) -> NetworkInterfaceKind {
    let Some(iface) = default_route_interface(routes) else {
        tracing::debug!("No default route, reporting no network");
        return NetworkInterfaceKind::None;
    };
    let kind = classify_interface(net_root, iface);
    tracing::debug!(iface, kind = ?kind, "Classified default route interface");
    kind
}

/// Read the kernel routing table and classify its default route.
pub fn host_interface_kind(net_root: &Path) -> PlatformResult<NetworkInterfaceKind> {
    let routes = procfs::net::route()
        .map_err(|e| PlatformError::query("route table", e.to_string()))?;
    Ok(active_interface_kind(&routes, net_root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use procfs::FromRead;
    use procfs::net::RouteEntries;
    use tempfile::tempdir;

    const HEADER: &str = concat!(
        "Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\t",
        "Metric\tMask\t\tMTU\tWindow\tIRTT\n"
    );

    fn routes(rows: &[&str]) -> Vec<RouteEntry> {
        let table = format!("{HEADER}{}", rows.join(""));
        RouteEntries::from_read(table.as_bytes()).unwrap().0
    }

    #[test]
    fn picks_lowest_metric_default_route() {
        let routes = routes(&[
            "eth0\t00000000\t0101A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0\n",
            "wlan0\t00000000\t0101A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0\n",
            "wlan0\t0001A8C0\t00000000\t0001\t0\t0\t100\t00FFFFFF\t0\t0\t0\n",
        ]);
        assert_eq!(default_route_interface(&routes), Some("wlan0"));
    }

    #[test]
    fn no_default_route() {
        let routes = routes(&["eth0\t0001A8C0\t00000000\t0001\t0\t0\t100\t00FFFFFF\t0\t0\t0\n"]);
        assert_eq!(default_route_interface(&routes), None);
    }

    #[test]
    fn down_default_route_is_skipped() {
        let routes = routes(&["eth0\t00000000\t0101A8C0\t0002\t0\t0\t100\t00000000\t0\t0\t0\n"]);
        assert_eq!(default_route_interface(&routes), None);
    }

    #[test]
    fn active_kind_follows_default_route() {
        let net = tempdir().unwrap();
        fs::create_dir_all(net.path().join("wlan0/phy80211")).unwrap();
        fs::create_dir_all(net.path().join("eth0")).unwrap();
        fs::write(net.path().join("eth0/type"), "1\n").unwrap();

        let routes = routes(&[
            "eth0\t00000000\t0101A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0\n",
            "wlan0\t00000000\t0101A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0\n",
        ]);
        assert_eq!(
            active_interface_kind(&routes, net.path()),
            NetworkInterfaceKind::Wireless80211
        );
    }

    #[test]
    fn active_kind_without_route_is_none() {
        let net = tempdir().unwrap();
        assert_eq!(
            active_interface_kind(&routes(&[]), net.path()),
            NetworkInterfaceKind::None
        );
    }

    #[test]
    fn classifies_interfaces() {
        let net = tempdir().unwrap();
        fs::create_dir_all(net.path().join("wlp2s0/wireless")).unwrap();
        fs::create_dir_all(net.path().join("enp3s0")).unwrap();
        fs::write(net.path().join("enp3s0/type"), "1\n").unwrap();
        fs::create_dir_all(net.path().join("wwan0")).unwrap();
        fs::create_dir_all(net.path().join("wwp0s20f0u6")).unwrap();
        fs::create_dir_all(net.path().join("tun0")).unwrap();
        fs::write(net.path().join("tun0/type"), "65534\n").unwrap();

        assert_eq!(
            classify_interface(net.path(), "wlp2s0"),
            NetworkInterfaceKind::Wireless80211
        );
        assert_eq!(
            classify_interface(net.path(), "enp3s0"),
            NetworkInterfaceKind::Ethernet
        );
        assert_eq!(
            classify_interface(net.path(), "wwan0"),
            NetworkInterfaceKind::MobileBroadbandGsm
        );
        assert_eq!(
            classify_interface(net.path(), "wwp0s20f0u6"),
            NetworkInterfaceKind::MobileBroadbandGsm
        );
        assert_eq!(
            classify_interface(net.path(), "tun0"),
            NetworkInterfaceKind::Other
        );
    }

    #[test]
    fn reads_first_connected_display() {
        let drm = tempdir().unwrap();
        let off = drm.path().join("card0-HDMI-A-1");
        let on = drm.path().join("card0-eDP-1");
        fs::create_dir_all(&off).unwrap();
        fs::create_dir_all(&on).unwrap();
        fs::create_dir_all(drm.path().join("card0")).unwrap();
        fs::write(off.join("status"), "disconnected\n").unwrap();
        fs::write(on.join("status"), "connected\n").unwrap();
        fs::write(on.join("modes"), "2560x1600\n1920x1200\n").unwrap();

        let size = connected_display_mode(drm.path()).unwrap();
        assert_eq!(size, Some(ScreenSize::new(2560.0, 1600.0)));
    }

    #[test]
    fn parses_interlaced_mode() {
        assert_eq!(parse_mode("1920x1080i"), Some(ScreenSize::new(1920.0, 1080.0)));
        assert_eq!(parse_mode("garbage"), None);
    }

    #[test]
    fn empty_dmi_attribute_is_unavailable() {
        let dmi = tempdir().unwrap();
        fs::write(dmi.path().join("sys_vendor"), "\n").unwrap();
        fs::write(dmi.path().join("product_name"), "ThinkPad X1 Carbon\n").unwrap();

        assert!(matches!(
            dmi_attribute(dmi.path(), "sys_vendor"),
            Err(PlatformError::Unavailable("sys_vendor"))
        ));
        assert_eq!(
            dmi_attribute(dmi.path(), "product_name").unwrap(),
            "ThinkPad X1 Carbon"
        );
    }
}
