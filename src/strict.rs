//! Fail-loudly wrappers for callers that treat any error as fatal.
//!
//! Each function panics with the full [`Error`](crate::Error) message, so the
//! distinct failure (malformed text, missing interface, platform error code)
//! remains visible in the panic.
use crate::codec::{parse_hex, ParseOptions};
use crate::{MacAddress, Result};

pub trait Strict<T> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// When `self` is an error, with that error's message.
    fn strict(self) -> T;
}

impl<T> Strict<T> for Result<T> {
    #[track_caller]
    fn strict(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

#[track_caller]
pub fn parse_hex_strict(text: &str, options: &ParseOptions) -> MacAddress {
    parse_hex(text, options).strict()
}

#[track_caller]
pub fn munge_strict(address: MacAddress) -> MacAddress {
    crate::munge::munge(address).strict()
}

#[track_caller]
pub fn munge_host_strict() -> MacAddress {
    crate::munge::munge_host().strict()
}

#[track_caller]
pub fn broadcast_address_strict() -> MacAddress {
    crate::broadcast::broadcast_address().strict()
}

#[track_caller]
pub fn interface_strict(name: &str) -> MacAddress {
    crate::interface(name).strict()
}
