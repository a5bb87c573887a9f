use std::mem;
use std::slice::from_raw_parts;

use libc::strlen;

use crate::mac::MAC_ADDR_LEN;
use crate::{Error, MacAddress, NetworkInterface, Result};

pub struct IfAddrIterator {
    base: *mut libc::ifaddrs,
    next: *mut libc::ifaddrs,
}

impl Iterator for IfAddrIterator {
    type Item = libc::ifaddrs;

    fn next(&mut self) -> Option<Self::Item> {
        match unsafe { self.next.as_ref() } {
            Some(ifaddrs) => {
                self.next = ifaddrs.ifa_next;
                Some(ifaddrs.to_owned())
            }
            None => None,
        }
    }
}

impl Drop for IfAddrIterator {
    fn drop(&mut self) {
        unsafe { libc::freeifaddrs(self.base) }
    }
}

pub fn getifaddrs() -> Result<IfAddrIterator> {
    let mut addr = mem::MaybeUninit::<*mut libc::ifaddrs>::uninit();
    match unsafe { libc::getifaddrs(addr.as_mut_ptr()) } {
        0 => Ok(IfAddrIterator {
            base: unsafe { addr.assume_init() },
            next: unsafe { addr.assume_init() },
        }),
        getifaddrs_result => {
            // `getifaddrs` returns -1 and leaves the reason in errno
            let code = std::io::Error::last_os_error()
                .raw_os_error()
                .unwrap_or(getifaddrs_result);
            Err(Error::platform("getifaddrs", code))
        }
    }
}

/// Retrieves the network interface name
pub fn make_netifa_name(netifa: &libc::ifaddrs) -> Result<String> {
    let data = netifa.ifa_name as *const u8;
    let len = unsafe { strlen(data as *const _) };
    let bytes_slice = unsafe { from_raw_parts(data, len) };
    let string = String::from_utf8(bytes_slice.to_vec()).map_err(Error::from)?;

    Ok(string)
}

/// Records `mac_addr` under `name`, keeping the order in which names were
/// first seen. A name already holding an address keeps it.
pub fn merge_entry(
    network_interfaces: &mut Vec<NetworkInterface>,
    name: String,
    mac_addr: Option<MacAddress>,
) {
    match network_interfaces.iter_mut().find(|i| i.name == name) {
        Some(existing) => {
            if existing.mac_addr.is_none() {
                existing.mac_addr = mac_addr;
            }
        }
        None => network_interfaces.push(NetworkInterface { name, mac_addr }),
    }
}

/// Reads a six octet link-level address out of the raw bytes of a socket
/// address. The address sits `name_len` bytes past `data_offset` (BSD
/// `sockaddr_dl` stores the interface name first); anything outside
/// `sockaddr` or of another length is reported as absent.
pub fn link_level_address(
    sockaddr: &[u8],
    data_offset: usize,
    name_len: usize,
    addr_len: usize,
) -> Option<MacAddress> {
    if addr_len != MAC_ADDR_LEN {
        return None;
    }

    let start = data_offset.checked_add(name_len)?;
    let end = start.checked_add(addr_len)?;

    MacAddress::from_slice(sockaddr.get(start..end)?).ok()
}
