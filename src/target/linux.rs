use libc::{sockaddr_ll, AF_PACKET};

use crate::target::{getifaddrs, link_level_address, make_netifa_name, merge_entry};
use crate::{MacAddress, NetworkInterface, Result};

/// Lists interfaces in `getifaddrs` order. The hardware address comes from
/// the interface's `AF_PACKET` entry.
pub fn show() -> Result<Vec<NetworkInterface>> {
    let mut network_interfaces: Vec<NetworkInterface> = Vec::new();

    for netifa in getifaddrs()? {
        let name = make_netifa_name(&netifa)?;
        let netifa_addr = netifa.ifa_addr;

        let mac_addr = if netifa_addr.is_null() {
            None
        } else {
            match unsafe { (*netifa_addr).sa_family as i32 } {
                AF_PACKET => make_mac_addr(netifa_addr as *const sockaddr_ll),
                _ => None,
            }
        };

        merge_entry(&mut network_interfaces, name, mac_addr);
    }

    Ok(network_interfaces)
}

/// Reads the link-level address of a `sockaddr_ll`. Hardware addresses that
/// are not six octets long (InfiniBand, tunnels) are reported as absent.
///
/// ## References
///
/// https://man7.org/linux/man-pages/man7/packet.7.html
fn make_mac_addr(socket_addr: *const sockaddr_ll) -> Option<MacAddress> {
    let link_address = unsafe { &*socket_addr };
    let len = link_address.sll_halen as usize;

    link_level_address(&link_address.sll_addr, 0, 0, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_network_interfaces() {
        let network_interfaces = show().unwrap();

        // every Linux host has at least a loopback device
        assert!(!network_interfaces.is_empty());
    }

    #[test]
    fn loopback_has_nil_or_no_address() {
        let network_interfaces = show().unwrap();

        if let Some(lo) = network_interfaces.iter().find(|i| i.name == "lo") {
            assert!(lo.usable_address().is_none());
        }
    }
}
