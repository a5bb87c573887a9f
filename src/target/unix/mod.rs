use std::mem::offset_of;
use std::ptr::addr_of;
use std::slice::from_raw_parts;

use libc::{sockaddr_dl, AF_LINK};

use crate::target::{getifaddrs, link_level_address, make_netifa_name, merge_entry};
use crate::{MacAddress, NetworkInterface, Result};

/// Lists interfaces in `getifaddrs` order. The hardware address comes from
/// the interface's `AF_LINK` entry.
pub fn show() -> Result<Vec<NetworkInterface>> {
    let mut network_interfaces: Vec<NetworkInterface> = Vec::new();

    for netifa in getifaddrs()? {
        let name = make_netifa_name(&netifa)?;
        let netifa_addr = netifa.ifa_addr;

        let mac_addr = if netifa_addr.is_null() {
            None
        } else {
            match unsafe { (*netifa_addr).sa_family as i32 } {
                AF_LINK => make_mac_addr(netifa_addr as *const sockaddr_dl),
                _ => None,
            }
        };

        merge_entry(&mut network_interfaces, name, mac_addr);
    }

    Ok(network_interfaces)
}

/// Reads the link-level address of a `sockaddr_dl`, stored right after the
/// `sdl_nlen` bytes of the interface name (the `LLADDR` macro). The name and
/// address may run past the declared `sdl_data` array, so the read is bounded
/// by `sdl_len` instead.
///
/// ## References
///
/// https://man.freebsd.org/cgi/man.cgi?query=link_addr&sektion=3
fn make_mac_addr(socket_addr: *const sockaddr_dl) -> Option<MacAddress> {
    let (sdl_len, name_len, len) = unsafe {
        (
            addr_of!((*socket_addr).sdl_len).read() as usize,
            addr_of!((*socket_addr).sdl_nlen).read() as usize,
            addr_of!((*socket_addr).sdl_alen).read() as usize,
        )
    };
    let data_offset = offset_of!(sockaddr_dl, sdl_data);

    if sdl_len < data_offset {
        return None;
    }

    let sockaddr = unsafe { from_raw_parts(socket_addr as *const u8, sdl_len) };

    link_level_address(sockaddr, data_offset, name_len, len)
}
