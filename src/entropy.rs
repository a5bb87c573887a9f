//! Cryptographically strong randomness for munging and address synthesis.
use rand::rngs::OsRng;
use rand::RngCore;

use crate::mac::MAC_ADDR_LEN;
use crate::{Error, Result};

/// A source of unpredictable bytes.
///
/// Implementations must fail with [`Error::EntropyUnavailable`] rather than
/// hand back bytes from a weaker generator.
#[cfg_attr(test, mockall::automock)]
pub trait EntropySource {
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system's CSPRNG (`getrandom(2)`, `BCryptGenRandom`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::EntropyUnavailable(e.to_string()))
    }
}

/// Returns `n` bytes drawn from the operating system's entropy source.
pub fn random_bytes(n: usize) -> Result<Vec<u8>> {
    random_bytes_from(&OsEntropy, n)
}

pub fn random_bytes_from<E>(source: &E, n: usize) -> Result<Vec<u8>>
where
    E: EntropySource + ?Sized,
{
    let mut bytes = vec![0u8; n];
    source.fill(&mut bytes)?;
    Ok(bytes)
}

pub(crate) fn random_octets<E>(source: &E) -> Result<[u8; MAC_ADDR_LEN]>
where
    E: EntropySource + ?Sized,
{
    let mut octets = [0u8; MAC_ADDR_LEN];
    source.fill(&mut octets)?;
    Ok(octets)
}
