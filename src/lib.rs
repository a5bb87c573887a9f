//! Hardware (MAC) address utilities: delimited hex transcoding, host
//! interface enumeration, and randomized addresses that stand in for a real
//! one without revealing it.
mod broadcast;
mod codec;
mod entropy;
mod error;
mod interface;
mod mac;
mod munge;
pub mod strict;
mod target;
mod test;

mod utils;

pub use broadcast::*;
pub use codec::*;
pub use entropy::{random_bytes, random_bytes_from, EntropySource, OsEntropy};
pub use error::*;
pub use interface::*;
pub use mac::*;
pub use munge::*;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Supplier of the host's network interfaces and their link-level addresses.
#[cfg_attr(test, mockall::automock)]
pub trait InterfaceDirectory {
    /// List every interface the platform reports, in platform order.
    fn interfaces(&self) -> Result<Vec<NetworkInterface>>;
}

/// The operating system's interface table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDirectory;

impl InterfaceDirectory for SystemDirectory {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>> {
        target::show()
    }
}

/// Interfaces of this host that have a usable hardware address.
pub fn interfaces() -> Result<Vec<Interface>> {
    list_interfaces(&SystemDirectory)
}

/// Hardware address of this host's interface called `name`.
pub fn interface(name: &str) -> Result<MacAddress> {
    find_interface(&SystemDirectory, name)
}
