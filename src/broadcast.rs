use crate::entropy::{random_octets, EntropySource, OsEntropy};
use crate::{MacAddress, Result};

/// Least significant bit of the first octet: the IEEE-802 group bit.
pub const GROUP_BIT: u8 = 0x01;

/// Synthesizes a random address with the group/broadcast bit set.
///
/// The remaining 47 bits come straight from the OS entropy source, so the
/// result is never [`MacAddress::NIL`].
///
/// # Errors
///
/// [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) when the
/// OS random source cannot be read. No weaker source is substituted.
pub fn broadcast_address() -> Result<MacAddress> {
    broadcast_address_from(&OsEntropy)
}

/// Like [`broadcast_address`], drawing from `source`.
///
/// # Errors
///
/// Whatever `source` reports, unchanged.
pub fn broadcast_address_from<E>(source: &E) -> Result<MacAddress>
where
    E: EntropySource + ?Sized,
{
    let mut octets = random_octets(source)?;
    octets[0] |= GROUP_BIT;

    Ok(MacAddress::from(octets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::MockEntropySource;
    use crate::Error;

    fn fixed_source(byte: u8) -> MockEntropySource {
        let mut source = MockEntropySource::new();
        source.expect_fill().returning(move |dest| {
            dest.fill(byte);
            Ok(())
        });
        source
    }

    #[test]
    fn group_bit_is_always_set() {
        for _ in 0..256 {
            let mac = broadcast_address().unwrap();

            assert_ne!(mac, MacAddress::NIL);
            assert_eq!(mac.octets()[0] & GROUP_BIT, GROUP_BIT);
            assert!(mac.is_group());
        }
    }

    #[test]
    fn all_zero_entropy_still_yields_group_address() {
        let mac = broadcast_address_from(&fixed_source(0x00)).unwrap();

        assert_eq!(mac, MacAddress::new(0x01, 0, 0, 0, 0, 0));
    }

    #[test]
    fn other_bits_are_untouched() {
        let mac = broadcast_address_from(&fixed_source(0xa4)).unwrap();

        assert_eq!(mac, MacAddress::new(0xa5, 0xa4, 0xa4, 0xa4, 0xa4, 0xa4));

        let mac = broadcast_address_from(&fixed_source(0xff)).unwrap();

        assert_eq!(mac, MacAddress::new(0xff, 0xff, 0xff, 0xff, 0xff, 0xff));
    }

    #[test]
    fn entropy_failure_propagates() {
        let mut source = MockEntropySource::new();
        source
            .expect_fill()
            .returning(|_| Err(Error::EntropyUnavailable("closed".to_string())));

        assert!(matches!(
            broadcast_address_from(&source),
            Err(Error::EntropyUnavailable(_))
        ));
    }
}
