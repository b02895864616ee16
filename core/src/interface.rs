use pnet::datalink::{self, NetworkInterface};
use pnet::util::MacAddr;

use macshift_common::system::InterfaceRepository;

/// Reads interface details through pnet's datalink layer.
pub struct DatalinkInterfaces;

impl InterfaceRepository for DatalinkInterfaces {
    fn hardware_address(&self, interface: &str) -> Option<MacAddr> {
        find_mac(&datalink::interfaces(), interface)
    }
}

fn find_mac(interfaces: &[NetworkInterface], name: &str) -> Option<MacAddr> {
    interfaces
        .iter()
        .find(|interface| interface.name == name)
        .and_then(|interface| interface.mac)
}
