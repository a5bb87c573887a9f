//! Fixed-size hardware address value.
use std::fmt;
use std::str::FromStr;

use crate::codec::{parse_hex, ParseOptions};
use crate::utils::hex::HexSlice;
use crate::{Error, Result};

/// Number of octets in an IEEE-802 MAC-48 address
pub const MAC_ADDR_LEN: usize = 6;

/// An IEEE-802 hardware address of exactly six octets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MacAddress([u8; MAC_ADDR_LEN]);

impl MacAddress {
    /// The all-zero address, reported by interfaces with no real hardware address.
    pub const NIL: MacAddress = MacAddress([0; MAC_ADDR_LEN]);

    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        MacAddress([a, b, c, d, e, f])
    }

    /// Builds an address from a byte slice, failing with
    /// [`Error::InvalidLength`] unless it holds exactly six bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let octets: [u8; MAC_ADDR_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidLength(bytes.len()))?;

        Ok(MacAddress(octets))
    }

    pub const fn octets(&self) -> [u8; MAC_ADDR_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0 == [0; MAC_ADDR_LEN]
    }

    /// Whether the group (multicast/broadcast) bit of the first octet is set.
    pub fn is_group(&self) -> bool {
        self.0[0] & 0x01 == 0x01
    }

    /// Whether the locally administered bit of the first octet is set.
    pub fn is_local(&self) -> bool {
        self.0[0] & 0x02 == 0x02
    }
}

impl From<[u8; MAC_ADDR_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_ADDR_LEN]) -> Self {
        MacAddress(octets)
    }
}

impl From<MacAddress> for [u8; MAC_ADDR_LEN] {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

/// Big-endian 48-bit value, suitable as the node component of an ID generator.
impl From<MacAddress> for u64 {
    fn from(mac: MacAddress) -> Self {
        mac.0
            .iter()
            .fold(0u64, |acc, octet| (acc << 8) | u64::from(*octet))
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        MacAddress::from_slice(bytes)
    }
}

impl AsRef<[u8]> for MacAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&HexSlice::new(self), f)
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({self})")
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s, &ParseOptions::default())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let text = crate::codec::format_hex(*self, &crate::codec::FormatOptions::default());
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<MacAddress, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MacVisitor;

        impl<'de> serde::de::Visitor<'de> for MacVisitor {
            type Value = MacAddress;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a string containing a hex MAC address")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                MacAddress::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MacVisitor)
    }
}
