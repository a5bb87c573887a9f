#[cfg(test)]
mod tests {
    use std::thread;

    #[cfg(feature = "serde")]
    use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

    #[allow(unused_imports)]
    use crate::{
        broadcast_address, format_hex, interfaces, munge, parse_hex, Case, FormatOptions,
        Interface, MacAddress, ParseOptions,
    };

    fn sample_addresses() -> Vec<MacAddress> {
        let mut samples = vec![
            MacAddress::NIL,
            MacAddress::new(0x75, 0xdf, 0x40, 0x2c, 0x60, 0xa2),
            MacAddress::new(0xff, 0xff, 0xff, 0xff, 0xff, 0xff),
            MacAddress::new(0x00, 0x0e, 0xf6, 0xe0, 0x35, 0x60),
        ];
        for _ in 0..16 {
            samples.push(broadcast_address().unwrap());
            samples.push(munge(MacAddress::NIL).unwrap());
        }
        samples
    }

    #[test]
    fn format_then_parse_round_trips() {
        for address in sample_addresses() {
            for case in [Case::Lower, Case::Upper] {
                for separator in [":", "-", "", ".", " ", "BBQ"] {
                    let format_options = FormatOptions::new().case(case).separator(separator);
                    let parse_options = ParseOptions::new().separators([separator]);

                    let text = format_hex(address, &format_options);

                    assert_eq!(parse_hex(&text, &parse_options).unwrap(), address, "{text}");
                }
            }
        }
    }

    #[test]
    fn formatting_is_idempotent() {
        let options = FormatOptions::new().upper().separator("-");

        for address in sample_addresses() {
            assert_eq!(format_hex(address, &options), format_hex(address, &options));
        }
    }

    #[test]
    fn formatted_length_matches_separator() {
        let address = MacAddress::new(0x75, 0xdf, 0x40, 0x2c, 0x60, 0xa2);

        for separator in ["", ":", "::", "BBQ"] {
            let text = format_hex(address, &FormatOptions::new().separator(separator));
            assert_eq!(text.len(), 12 + 5 * separator.len());
            assert!(!text.starts_with(separator) || separator.is_empty());
            assert!(!text.ends_with(separator) || separator.is_empty());
        }
    }

    #[test]
    fn randomized_operations_run_concurrently() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    (0..64)
                        .map(|_| {
                            let broadcast = broadcast_address().unwrap();
                            let munged = munge(broadcast).unwrap();
                            assert_ne!(munged, broadcast);
                            broadcast
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let addresses = handle.join().unwrap();
            assert!(addresses.iter().all(|mac| mac.is_group() && !mac.is_nil()));
        }
    }

    #[test]
    fn show_network_interfaces() {
        let network_interfaces = interfaces().unwrap();

        println!("{:#?}", network_interfaces);
        assert!(network_interfaces.iter().all(|i| !i.address.is_nil()));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn mac_address_serializes_as_canonical_text() {
        let mac = MacAddress::new(0x84, 0x62, 0x7a, 0x03, 0xbd, 0x01);

        assert_tokens(&mac, &[Token::Str("84:62:7a:03:bd:01")]);
        assert_de_tokens(&mac, &[Token::Str("84-62-7A-03-BD-01")]);
        assert_de_tokens_error::<MacAddress>(
            &[Token::Str("84:62")],
            "Malformed hex hardware address: \"84:62\" decodes to 2 bytes, expected 6",
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn interface_serialization() {
        let interface = Interface {
            name: String::from("Supercool"),
            address: MacAddress::new(0x84, 0x62, 0x7a, 0x03, 0xbd, 0x01),
        };

        assert_tokens(
            &interface,
            &[
                Token::Struct {
                    name: "Interface",
                    len: 2,
                },
                Token::Str("name"),
                Token::Str("Supercool"),
                Token::Str("address"),
                Token::Str("84:62:7a:03:bd:01"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn options_deserialize_with_defaults() {
        assert_de_tokens(
            &ParseOptions::default(),
            &[
                Token::Struct {
                    name: "ParseOptions",
                    len: 0,
                },
                Token::StructEnd,
            ],
        );

        assert_tokens(
            &FormatOptions::new().upper().separator("-"),
            &[
                Token::Struct {
                    name: "FormatOptions",
                    len: 2,
                },
                Token::Str("case"),
                Token::UnitVariant {
                    name: "Case",
                    variant: "upper",
                },
                Token::Str("separator"),
                Token::Str("-"),
                Token::StructEnd,
            ],
        );
    }
}
