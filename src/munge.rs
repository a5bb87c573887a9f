//! Decorrelating hardware addresses from their real values.
//!
//! A munged address is the XOR of the input with six fresh random octets.
//! The mask is dropped as soon as the result is built, so the original
//! address cannot be recovered from the output.
use log::debug;

use crate::broadcast::broadcast_address_from;
use crate::entropy::{random_octets, EntropySource, OsEntropy};
use crate::interface::list_interfaces;
use crate::{InterfaceDirectory, MacAddress, Result, SystemDirectory};

/// Munges `address` with randomness from the operating system.
///
/// # Errors
///
/// [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) when the
/// OS random source cannot be read. No weaker source is substituted.
pub fn munge(address: MacAddress) -> Result<MacAddress> {
    munge_with(&OsEntropy, address)
}

/// Munges `address` with six octets drawn from `source`.
///
/// # Errors
///
/// Whatever `source` reports, normally
/// [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable).
pub fn munge_with<E>(source: &E, address: MacAddress) -> Result<MacAddress>
where
    E: EntropySource + ?Sized,
{
    let mask = random_octets(source)?;
    let mut octets = address.octets();
    octets
        .iter_mut()
        .zip(mask.iter())
        .for_each(|(octet, mask)| *octet ^= mask);

    Ok(MacAddress::from(octets))
}

/// Munges the first usable hardware address of this host, or a synthesized
/// broadcast address when the host has none.
///
/// # Errors
///
/// Only [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable);
/// enumeration failures fall back instead of surfacing.
pub fn munge_host() -> Result<MacAddress> {
    munge_from(&SystemDirectory, &OsEntropy)
}

/// Munges the first usable address `directory` reports.
///
/// Any enumeration failure, like an empty listing, falls back to a
/// synthesized broadcast address.
///
/// # Errors
///
/// Only when `source` fails, with its error unchanged.
pub fn munge_from<D, E>(directory: &D, source: &E) -> Result<MacAddress>
where
    D: InterfaceDirectory + ?Sized,
    E: EntropySource + ?Sized,
{
    let base = match list_interfaces(directory) {
        Ok(interfaces) => match interfaces.into_iter().next() {
            Some(interface) => {
                debug!("munging hardware address of interface {}", interface.name);
                Some(interface.address)
            }
            None => {
                debug!("no interface with a usable hardware address");
                None
            }
        },
        Err(e) => {
            debug!("interface enumeration failed: {e}");
            None
        }
    };

    let base = match base {
        Some(address) => address,
        None => {
            debug!("falling back to a synthesized broadcast address");
            broadcast_address_from(source)?
        }
    };

    munge_with(source, base)
}
