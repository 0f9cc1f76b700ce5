use crate::encoding::{Encoding, ErrorPolicy};
use crate::error::{Error, Result};

const REPLACEMENT: char = '\u{FFFD}';

#[derive(Clone, Copy)]
enum ByteOrder {
    Little,
    Big,
}

/// Decode `bytes` under `encoding` with the given error policy.
///
/// Strict fails on the first invalid sequence. Ignore and replace always
/// succeed; ignore drops exactly the offending bytes, which is lossy by
/// design (a UTF-16 file decoded as UTF-8 with ignore keeps its
/// interleaved NUL bytes).
pub fn decode(bytes: &[u8], encoding: Encoding, policy: ErrorPolicy) -> Result<String> {
    match encoding {
        Encoding::Utf8 => decode_utf8(bytes, policy),
        Encoding::Utf16 => match bytes {
            // A BOM selects the byte order and is not part of the text.
            [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, ByteOrder::Little, "utf-16", 2, policy),
            [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, ByteOrder::Big, "utf-16", 2, policy),
            _ => decode_utf16(bytes, ByteOrder::Little, "utf-16", 0, policy),
        },
        Encoding::Utf16Le => decode_utf16(bytes, ByteOrder::Little, "utf-16le", 0, policy),
        Encoding::Utf16Be => decode_utf16(bytes, ByteOrder::Big, "utf-16be", 0, policy),
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

fn decode_utf8(bytes: &[u8], policy: ErrorPolicy) -> Result<String> {
    let err = match std::str::from_utf8(bytes) {
        Ok(text) => return Ok(text.to_owned()),
        Err(err) => err,
    };
    if policy == ErrorPolicy::Strict {
        return Err(Error::InvalidSequence {
            encoding: "utf-8",
            offset: err.valid_up_to(),
        });
    }

    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(tail) => {
                out.push_str(tail);
                return Ok(out);
            }
            Err(err) => {
                let (valid, invalid) = rest.split_at(err.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or(""));
                if policy == ErrorPolicy::Replace {
                    out.push(REPLACEMENT);
                }
                // error_len() is None for a sequence truncated at the end.
                match err.error_len() {
                    Some(len) => rest = &invalid[len..],
                    None => return Ok(out),
                }
            }
        }
    }
}

fn decode_utf16(
    bytes: &[u8],
    order: ByteOrder,
    encoding: &'static str,
    base: usize,
    policy: ErrorPolicy,
) -> Result<String> {
    let even = bytes.len() & !1;
    let units = bytes[..even].chunks_exact(2).map(|pair| match order {
        ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
        ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
    });

    let mut out = String::with_capacity(even / 2);
    let mut unit_index = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => {
                unit_index += c.len_utf16();
                out.push(c);
            }
            Err(_) => {
                match policy {
                    ErrorPolicy::Strict => {
                        return Err(Error::InvalidSequence {
                            encoding,
                            offset: base + unit_index * 2,
                        });
                    }
                    ErrorPolicy::Ignore => {}
                    ErrorPolicy::Replace => out.push(REPLACEMENT),
                }
                unit_index += 1;
            }
        }
    }

    if bytes.len() != even {
        match policy {
            ErrorPolicy::Strict => {
                return Err(Error::Truncated {
                    encoding,
                    offset: base + even,
                });
            }
            ErrorPolicy::Ignore => {}
            ErrorPolicy::Replace => out.push(REPLACEMENT),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UTF16_TEXT: &str = "Hello, UTF-16 world!\n";

    fn utf16_bytes(text: &str, order: ByteOrder, bom: bool) -> Vec<u8> {
        let mut bytes = Vec::new();
        if bom {
            bytes.extend_from_slice(match order {
                ByteOrder::Little => &[0xFF, 0xFE],
                ByteOrder::Big => &[0xFE, 0xFF],
            });
        }
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&match order {
                ByteOrder::Little => unit.to_le_bytes(),
                ByteOrder::Big => unit.to_be_bytes(),
            });
        }
        bytes
    }

    #[test]
    fn utf8_strict_accepts_valid_text() {
        let text = decode("Hello, UTF-8 world!\n".as_bytes(), Encoding::Utf8, ErrorPolicy::Strict)
            .unwrap();
        assert_eq!(text, "Hello, UTF-8 world!\n");
    }

    #[test]
    fn utf8_strict_rejects_invalid_byte() {
        let err = decode(b"abc\xFFdef", Encoding::Utf8, ErrorPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSequence {
                encoding: "utf-8",
                offset: 3
            }
        ));
    }

    #[test]
    fn utf8_ignore_drops_invalid_bytes() {
        let text = decode(b"abc\xFF\xFEdef", Encoding::Utf8, ErrorPolicy::Ignore).unwrap();
        assert_eq!(text, "abcdef");
    }

    #[test]
    fn utf8_replace_substitutes_per_rejected_span() {
        let text = decode(b"abc\xF0\x28def", Encoding::Utf8, ErrorPolicy::Replace).unwrap();
        assert_eq!(text, "abc\u{FFFD}(def");
    }

    #[test]
    fn utf8_replace_matches_std_lossy() {
        let bytes: &[u8] = b"ok\xE2\x82\xAC bad\xFF tail\xE2\x82";
        let text = decode(bytes, Encoding::Utf8, ErrorPolicy::Replace).unwrap();
        assert_eq!(text, String::from_utf8_lossy(bytes));
    }

    #[test]
    fn utf8_truncated_suffix() {
        let bytes: &[u8] = b"ok\xE2\x82";
        assert!(decode(bytes, Encoding::Utf8, ErrorPolicy::Strict).is_err());
        assert_eq!(decode(bytes, Encoding::Utf8, ErrorPolicy::Ignore).unwrap(), "ok");
        assert_eq!(
            decode(bytes, Encoding::Utf8, ErrorPolicy::Replace).unwrap(),
            "ok\u{FFFD}"
        );
    }

    #[test]
    fn utf16_le_bom_is_consumed() {
        let bytes = utf16_bytes(UTF16_TEXT, ByteOrder::Little, true);
        let text = decode(&bytes, Encoding::Utf16, ErrorPolicy::Strict).unwrap();
        assert_eq!(text, UTF16_TEXT);
    }

    #[test]
    fn utf16_be_bom_is_consumed() {
        let bytes = utf16_bytes(UTF16_TEXT, ByteOrder::Big, true);
        let text = decode(&bytes, Encoding::Utf16, ErrorPolicy::Strict).unwrap();
        assert_eq!(text, UTF16_TEXT);
    }

    #[test]
    fn utf16_without_bom_defaults_to_little_endian() {
        let bytes = utf16_bytes(UTF16_TEXT, ByteOrder::Little, false);
        let text = decode(&bytes, Encoding::Utf16, ErrorPolicy::Strict).unwrap();
        assert_eq!(text, UTF16_TEXT);
    }

    #[test]
    fn fixed_endianness_keeps_the_bom() {
        let bytes = utf16_bytes(UTF16_TEXT, ByteOrder::Little, true);
        let text = decode(&bytes, Encoding::Utf16Le, ErrorPolicy::Strict).unwrap();
        assert_eq!(text, format!("\u{FEFF}{UTF16_TEXT}"));
    }

    #[test]
    fn utf16_big_endian_fixed() {
        let bytes = utf16_bytes("héllo", ByteOrder::Big, false);
        let text = decode(&bytes, Encoding::Utf16Be, ErrorPolicy::Strict).unwrap();
        assert_eq!(text, "héllo");
    }

    #[test]
    fn utf16_odd_length() {
        let mut bytes = utf16_bytes("hi", ByteOrder::Little, false);
        bytes.push(0x41);
        let err = decode(&bytes, Encoding::Utf16, ErrorPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                encoding: "utf-16",
                offset: 4
            }
        ));
        assert_eq!(decode(&bytes, Encoding::Utf16, ErrorPolicy::Ignore).unwrap(), "hi");
        assert_eq!(
            decode(&bytes, Encoding::Utf16, ErrorPolicy::Replace).unwrap(),
            "hi\u{FFFD}"
        );
    }

    #[test]
    fn utf16_unpaired_surrogate() {
        // A lone high surrogate followed by 'a'.
        let bytes = [0x00, 0xD8, 0x61, 0x00];
        let err = decode(&bytes, Encoding::Utf16Le, ErrorPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSequence {
                encoding: "utf-16le",
                offset: 0
            }
        ));
        assert_eq!(
            decode(&bytes, Encoding::Utf16Le, ErrorPolicy::Ignore).unwrap(),
            "a"
        );
        assert_eq!(
            decode(&bytes, Encoding::Utf16Le, ErrorPolicy::Replace).unwrap(),
            "\u{FFFD}a"
        );
    }

    #[test]
    fn utf16_surrogate_pair_roundtrip() {
        let bytes = utf16_bytes("a🦀b", ByteOrder::Little, true);
        let text = decode(&bytes, Encoding::Utf16, ErrorPolicy::Strict).unwrap();
        assert_eq!(text, "a🦀b");
    }

    #[test]
    fn utf16_as_utf8_ignore_keeps_interleaved_nuls() {
        // The lossy-by-design artifact: a BOM'd UTF-16LE file scanned as
        // UTF-8 with ignore drops the BOM bytes and keeps every NUL.
        let bytes = utf16_bytes(UTF16_TEXT, ByteOrder::Little, true);
        let text = decode(&bytes, Encoding::Utf8, ErrorPolicy::Ignore).unwrap();
        assert_eq!(
            text,
            "H\u{0}e\u{0}l\u{0}l\u{0}o\u{0},\u{0} \u{0}U\u{0}T\u{0}F\u{0}-\u{0}1\u{0}6\u{0} \
             \u{0}w\u{0}o\u{0}r\u{0}l\u{0}d\u{0}!\u{0}\n\u{0}"
        );
    }

    #[test]
    fn latin1_never_fails() {
        let text = decode(b"caf\xE9 \xFF", Encoding::Latin1, ErrorPolicy::Strict).unwrap();
        assert_eq!(text, "café ÿ");
    }

    #[test]
    fn empty_input_decodes_to_empty_string() {
        for encoding in [
            Encoding::Utf8,
            Encoding::Utf16,
            Encoding::Utf16Le,
            Encoding::Utf16Be,
            Encoding::Latin1,
        ] {
            assert_eq!(decode(&[], encoding, ErrorPolicy::Strict).unwrap(), "");
        }
    }
}
