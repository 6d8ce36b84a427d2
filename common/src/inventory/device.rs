/// Which of the two inventory namespaces a device was loaded from.
///
/// Carried on every [`Device`] so updates are routed by provenance instead
/// of guessing the category from the device's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Router,
    Switch,
}

impl DeviceKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Router => "router",
            DeviceKind::Switch => "switch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub address: String,
    pub kind: DeviceKind,
}

/// The merged equipment inventory, in original load order: every router in
/// router-file order, then every switch in switch-file order.
///
/// The namespaces are never deduplicated against each other; a router and a
/// switch may share a name, and lookups resolve to the router first.
#[derive(Debug, Default)]
pub struct Inventory {
    devices: Vec<Device>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: String, address: String, kind: DeviceKind) {
        self.devices.push(Device {
            name,
            address,
            kind,
        });
    }

    /// Case-insensitive lookup across both namespaces.
    pub fn find(&self, name: &str) -> Option<&Device> {
        self.devices
            .iter()
            .find(|device| device.name.eq_ignore_ascii_case(name))
    }

    /// Assigns a new address to the device `find` would resolve `name` to.
    ///
    /// Returns `false` when no device matches.
    pub fn assign(&mut self, name: &str, address: &str) -> bool {
        match self
            .devices
            .iter_mut()
            .find(|device| device.name.eq_ignore_ascii_case(name))
        {
            Some(device) => {
                device.address = address.to_string();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Widest device name, used for aligned terminal output.
    pub fn name_width(&self) -> usize {
        self.devices
            .iter()
            .map(|device| device.name.len())
            .max()
            .unwrap_or(0)
    }
}
