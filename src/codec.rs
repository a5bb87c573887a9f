//! Conversion between [`MacAddress`] values and delimited hex text.
//!
//! Decoding strips every configured separator from the input before reading
//! the remaining characters as hex digits, so text mixing `-` and `:` (or any
//! other listed separator) is accepted. A side effect is that some oddly
//! grouped inputs such as `7:5df402c60a2` also decode.
use hex::FromHexError;

use crate::mac::{MacAddress, MAC_ADDR_LEN};
use crate::utils::hex::HexSlice;
use crate::{Error, Result};

/// Separators stripped by [`ParseOptions::default`].
pub const DEFAULT_SEPARATORS: [&str; 2] = [":", "-"];

/// Separator inserted by [`FormatOptions::default`].
pub const DEFAULT_SEPARATOR: &str = ":";

/// Letter case of the hex digits `a`-`f` when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Case {
    Upper,
    #[default]
    Lower,
}

/// Decoding configuration.
///
/// `separators` defaults to `[":", "-"]`. Each entry is removed as a whole
/// string, in list order, so multi-character separators work.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    pub separators: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the separator set.
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one separator to the set.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.push(separator.into());
        self
    }
}

/// Encoding configuration: lowercase digits joined by `:` unless told otherwise.
/// An empty `separator` produces the bare 12 digit form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    pub case: Case,
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            case: Case::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    pub fn upper(self) -> Self {
        self.case(Case::Upper)
    }

    pub fn lower(self) -> Self {
        self.case(Case::Lower)
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Decodes delimited or bare hex text into a [`MacAddress`].
///
/// ```
/// use macmunge::{parse_hex, MacAddress, ParseOptions};
///
/// let mac = parse_hex("75-df-40:2c:60-a2", &ParseOptions::default()).unwrap();
/// assert_eq!(mac, MacAddress::new(0x75, 0xdf, 0x40, 0x2c, 0x60, 0xa2));
/// ```
pub fn parse_hex(text: &str, options: &ParseOptions) -> Result<MacAddress> {
    let digits = strip_separators(text, &options.separators);

    let mut octets = [0u8; MAC_ADDR_LEN];
    hex::decode_to_slice(&digits, &mut octets).map_err(|e| {
        let reason = match e {
            FromHexError::InvalidHexCharacter { c, index } => {
                format!("invalid character {c:?} at position {index} in {text:?}")
            }
            FromHexError::OddLength => {
                format!("odd number of hex digits ({}) in {text:?}", digits.len())
            }
            FromHexError::InvalidStringLength => format!(
                "{text:?} decodes to {} bytes, expected {MAC_ADDR_LEN}",
                digits.len() / 2
            ),
        };
        Error::MalformedHex(reason)
    })?;

    Ok(MacAddress::from(octets))
}

/// Encodes a [`MacAddress`] as six two-digit hex groups.
///
/// ```
/// use macmunge::{format_hex, FormatOptions, MacAddress};
///
/// let mac = MacAddress::new(0x75, 0xdf, 0x40, 0x2c, 0x60, 0xa2);
/// assert_eq!(format_hex(mac, &FormatOptions::new().upper().separator("-")), "75-DF-40-2C-60-A2");
/// ```
pub fn format_hex(address: MacAddress, options: &FormatOptions) -> String {
    HexSlice::new(&address).with_options(options).to_string()
}

fn strip_separators(text: &str, separators: &[String]) -> String {
    separators
        .iter()
        .filter(|separator| !separator.is_empty())
        .fold(text.to_string(), |acc, separator| acc.replace(separator.as_str(), ""))
}
