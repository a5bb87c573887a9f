use std::iter::Iterator;
use std::marker::PhantomData;
use std::ptr::null_mut;
use std::slice::from_raw_parts;

use libc::{wchar_t, wcslen};
use winapi::{
    shared::{ntdef::ULONG, winerror, ws2def::AF_UNSPEC},
    um::{iphlpapi::GetAdaptersAddresses, iptypes::IP_ADAPTER_ADDRESSES},
};

use crate::mac::MAC_ADDR_LEN;
use crate::utils::ffialloc::FFIAlloc;
use crate::{Error, MacAddress, NetworkInterface, Result};

/// An alias for `IP_ADAPTER_ADDRESSES_LH`
type AdapterAddress = IP_ADAPTER_ADDRESSES;

/// Both IPv4 and IPv6 adapters are of interest, only their physical address is read.
///
/// Source: https://docs.microsoft.com/en-us/windows/win32/api/iphlpapi/nf-iphlpapi-getadaptersaddresses#parameters
const GET_ADAPTERS_ADDRESSES_FAMILY: u32 = AF_UNSPEC as u32;

/// Skip the per-adapter address lists, none of them carry the hardware address.
const GET_ADAPTERS_ADDRESSES_FLAGS: ULONG = winapi::um::iptypes::GAA_FLAG_SKIP_UNICAST
    | winapi::um::iptypes::GAA_FLAG_SKIP_ANYCAST
    | winapi::um::iptypes::GAA_FLAG_SKIP_MULTICAST
    | winapi::um::iptypes::GAA_FLAG_SKIP_DNS_SERVER;

macro_rules! iterable_raw_pointer {
    ($t: ty, $n: ident) => {
        impl IterableRawPointer for $t {
            type Pointer = *const $t;
            type Value = $t;

            fn next(&self) -> Self::Pointer {
                self.$n
            }
        }
    };
}

iterable_raw_pointer!(IP_ADAPTER_ADDRESSES, Next);

/// Lists adapters in the order `GetAdaptersAddresses` returns them.
pub fn show() -> Result<Vec<NetworkInterface>> {
    // Allocate a 15 KB buffer to start with.
    let mut buffer_size: u32 = 15000;
    // Limit retries
    const MAX_TRIES: i32 = 10;
    let mut try_no = 1;

    let adapter_address = loop {
        let adapter_address = FFIAlloc::alloc(buffer_size as usize)
            .ok_or_else(|| Error::platform("GetAdaptersAddresses: alloc error", 1))?;

        let res = unsafe {
            GetAdaptersAddresses(
                GET_ADAPTERS_ADDRESSES_FAMILY,
                GET_ADAPTERS_ADDRESSES_FLAGS,
                null_mut(),
                adapter_address.as_mut_ptr(),
                &mut buffer_size,
            )
        };
        match res {
            winerror::ERROR_SUCCESS => {
                break Ok(adapter_address);
            }
            winerror::ERROR_BUFFER_OVERFLOW => {
                // `buffer_size` now holds the size the adapter list needs.
                //
                // Source: https://docs.microsoft.com/en-us/windows/win32/api/iphlpapi/nf-iphlpapi-getadaptersaddresses#return-value
                if try_no == MAX_TRIES {
                    break Err(Error::platform(
                        "GetAdaptersAddresses: alloc error",
                        res as i32,
                    ));
                }
                try_no += 1;
            }
            winerror::ERROR_NO_DATA => {
                return Ok(Vec::new());
            }
            _ => {
                break Err(Error::platform("GetAdaptersAddresses", res as i32));
            }
        }
    }?;

    let mut network_interfaces = Vec::<NetworkInterface>::new();

    for adapter_address in RawPointerWrapper::new(adapter_address.as_ptr()) {
        let name = make_adapter_address_name(adapter_address)?;
        let mac_addr = make_mac_address(adapter_address);

        network_interfaces.push(NetworkInterface { name, mac_addr });
    }

    Ok(network_interfaces)
}

/// Retrieves the network interface name
fn make_adapter_address_name(adapter_address: &AdapterAddress) -> Result<String> {
    let address_name = adapter_address.FriendlyName;
    let address_name_length = unsafe { wcslen(address_name as *const wchar_t) };
    let byte_slice = unsafe { from_raw_parts(address_name, address_name_length) };
    let string = String::from_utf16(byte_slice).map_err(Error::from)?;

    Ok(string)
}

/// Creates a `MacAddress` from the adapter's physical address, which is
/// absent (length 0) for loopback and tunnel adapters.
fn make_mac_address(adapter_address: &AdapterAddress) -> Option<MacAddress> {
    // see https://docs.microsoft.com/en-us/windows/win32/api/iphlpapi/nf-iphlpapi-getadaptersaddresses#examples
    let mac_addr_len = adapter_address.PhysicalAddressLength as usize;
    match mac_addr_len {
        MAC_ADDR_LEN => MacAddress::from_slice(&adapter_address.PhysicalAddress[..mac_addr_len]).ok(),
        _ => None,
    }
}

/// Trait for linked lists in Windows API structures iteration
trait IterableRawPointer {
    type Pointer;
    type Value;

    ///  Returns: pointer to the next element in the linked list
    ///           null at the end
    fn next(&self) -> Self::Pointer;
}

/// Raw pointer container
struct RawPointerWrapper<'a, T>(*const T, PhantomData<&'a T>)
where
    T: IterableRawPointer<Value = T, Pointer = *const T>;

impl<'a, T> RawPointerWrapper<'a, T>
where
    T: IterableRawPointer<Value = T, Pointer = *const T>,
{
    fn new(ptr: *const T) -> RawPointerWrapper<'a, T> {
        Self(ptr, PhantomData)
    }
}

/// Iterator implementation for RawPointer
impl<'a, T> Iterator for RawPointerWrapper<'a, T>
where
    T: IterableRawPointer<Value = T, Pointer = *const T>,
{
    type Item = &'a T::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let ret = unsafe { self.0.as_ref() };
        if let Some(v) = ret {
            self.0 = v.next();
        }
        ret
    }
}
