//! Network interface records as reported by the platform and as handed to
//! callers once entries without a usable hardware address are dropped.
use log::trace;

use crate::{Error, InterfaceDirectory, MacAddress, Result};

/// A system's network interface, as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    /// Interface's name
    pub name: String,
    /// Interface's link-level address, if it has a six octet one
    pub mac_addr: Option<MacAddress>,
}

impl NetworkInterface {
    pub fn new(name: &str, mac_addr: Option<MacAddress>) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            mac_addr,
        }
    }

    /// The hardware address, unless it is missing or nil.
    pub fn usable_address(&self) -> Option<MacAddress> {
        self.mac_addr.filter(|mac| !mac.is_nil())
    }
}

/// An interface with a usable hardware address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interface {
    pub name: String,
    pub address: MacAddress,
}

impl TryFrom<NetworkInterface> for Interface {
    type Error = NetworkInterface;

    fn try_from(network_interface: NetworkInterface) -> std::result::Result<Self, Self::Error> {
        match network_interface.usable_address() {
            Some(address) => Ok(Interface {
                name: network_interface.name,
                address,
            }),
            None => Err(network_interface),
        }
    }
}

/// Lists the directory's interfaces that carry a usable hardware address,
/// in the order the directory reported them.
pub fn list_interfaces<D>(directory: &D) -> Result<Vec<Interface>>
where
    D: InterfaceDirectory + ?Sized,
{
    let interfaces = directory
        .interfaces()?
        .into_iter()
        .filter_map(|network_interface| match Interface::try_from(network_interface) {
            Ok(interface) => Some(interface),
            Err(skipped) => {
                trace!(
                    "skipping interface {} without a usable hardware address",
                    skipped.name
                );
                None
            }
        })
        .collect();

    Ok(interfaces)
}

/// Looks up the hardware address of the interface called `name`.
pub fn find_interface<D>(directory: &D, name: &str) -> Result<MacAddress>
where
    D: InterfaceDirectory + ?Sized,
{
    list_interfaces(directory)?
        .into_iter()
        .find(|interface| interface.name == name)
        .map(|interface| interface.address)
        .ok_or_else(|| Error::NotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockInterfaceDirectory;

    fn directory(entries: Vec<NetworkInterface>) -> MockInterfaceDirectory {
        let mut directory = MockInterfaceDirectory::new();
        directory
            .expect_interfaces()
            .returning(move || Ok(entries.clone()));
        directory
    }

    fn sample() -> Vec<NetworkInterface> {
        vec![
            NetworkInterface::new("lo", Some(MacAddress::NIL)),
            NetworkInterface::new("eth0", Some(MacAddress::new(0x84, 0x62, 0x7a, 0x03, 0xbd, 0x01))),
            NetworkInterface::new("tun0", None),
            NetworkInterface::new("wlan0", Some(MacAddress::new(0x02, 0x42, 0xac, 0x11, 0x00, 0x02))),
        ]
    }

    #[test]
    fn drops_missing_and_nil_addresses() {
        let interfaces = list_interfaces(&directory(sample())).unwrap();

        let names: Vec<_> = interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["eth0", "wlan0"]);
    }

    #[test]
    fn keeps_directory_order() {
        let mut entries = sample();
        entries.reverse();

        let interfaces = list_interfaces(&directory(entries)).unwrap();

        let names: Vec<_> = interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["wlan0", "eth0"]);
    }

    #[test]
    fn finds_interface_by_name() {
        let mac = find_interface(&directory(sample()), "wlan0").unwrap();

        assert_eq!(mac, MacAddress::new(0x02, 0x42, 0xac, 0x11, 0x00, 0x02));
    }

    #[test]
    fn unknown_or_unusable_interface_is_not_found() {
        for name in ["eth9", "lo", "tun0"] {
            match find_interface(&directory(sample()), name) {
                Err(Error::NotFound(missing)) => assert_eq!(missing, name),
                other => panic!("expected NotFound for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn platform_errors_are_propagated() {
        let mut directory = MockInterfaceDirectory::new();
        directory
            .expect_interfaces()
            .returning(|| Err(Error::PlatformError { call: "getifaddrs".to_string(), code: 12 }));

        match list_interfaces(&directory) {
            Err(Error::PlatformError { call, code }) => {
                assert_eq!(call, "getifaddrs");
                assert_eq!(code, 12);
            }
            other => panic!("expected PlatformError, got {other:?}"),
        }
        assert!(matches!(
            find_interface(&directory, "eth0"),
            Err(Error::PlatformError { .. })
        ));
    }
}
