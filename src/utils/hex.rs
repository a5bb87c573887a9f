use std::fmt::Display;

use crate::codec::{Case, FormatOptions};

/// Renders a byte slice as two-digit hex groups joined by a separator.
pub(crate) struct HexSlice<'a> {
    data: &'a [u8],
    case: Case,
    separator: &'a str,
}

impl<'a> HexSlice<'a> {
    pub(crate) fn new<T>(data: &'a T) -> HexSlice<'a>
    where
        T: ?Sized + AsRef<[u8]> + 'a,
    {
        HexSlice {
            data: data.as_ref(),
            case: Case::Lower,
            separator: ":",
        }
    }

    pub(crate) fn with_options(mut self, options: &'a FormatOptions) -> HexSlice<'a> {
        self.case = options.case;
        self.separator = &options.separator;
        self
    }
}

impl<'a> Display for HexSlice<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, byte) in self.data.iter().enumerate() {
            if index > 0 {
                f.write_str(self.separator)?;
            }

            match self.case {
                Case::Lower => write!(f, "{byte:02x}")?,
                Case::Upper => write!(f, "{byte:02X}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_only_between_groups() {
        let options = FormatOptions::new().separator(" BBQ ");
        let rendered = HexSlice::new(&[0x0au8, 0xb0, 0x01]).with_options(&options).to_string();

        assert_eq!(rendered, "0a BBQ b0 BBQ 01");
    }

    #[test]
    fn empty_slice_renders_nothing() {
        let empty: [u8; 0] = [];
        assert_eq!(HexSlice::new(&empty).to_string(), "");
    }
}
