use uuid::Uuid;

use crate::error::{PlatformError, PlatformResult};

/// Namespace mixed into hashed machine ids so the open identifier never
/// equals the raw machine id.
const NAMESPACE_BYTES: &[u8] = b"device-open-id";

/// Open identifier for this machine, stable across reboots.
///
/// The machine id comes from `machine-uid`:
/// - Linux: /etc/machine-id or /var/lib/dbus/machine-id
/// - macOS: `IOPlatformUUID`
/// - Windows: `MachineGuid` from the registry
///
/// A UUID-shaped id is used as is, anything else is hashed into a UUID v5.
pub fn open_identifier() -> PlatformResult<String> {
    let machine_id =
        machine_uid::get().map_err(|e| PlatformError::query("identity", e.to_string()))?;
    Ok(from_machine_id(&machine_id).to_string())
}

fn from_machine_id(machine_id: &str) -> Uuid {
    let machine_id = machine_id.trim();
    if let Ok(uuid) = Uuid::parse_str(machine_id) {
        tracing::debug!(open_id = %uuid, "Using machine UUID as open identifier");
        return uuid;
    }

    let combined = [NAMESPACE_BYTES, b":", machine_id.as_bytes()].concat();
    let uuid = Uuid::new_v5(&Uuid::NAMESPACE_DNS, &combined);
    tracing::debug!(open_id = %uuid, "Derived open identifier from machine id hash");
    uuid
}
