use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Character encoding of a text resource.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Encoding {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// UTF-16 with BOM sniffing; little-endian when no BOM is present.
    Utf16,
    /// UTF-16 little-endian, no BOM handling.
    Utf16Le,
    /// UTF-16 big-endian, no BOM handling.
    Utf16Be,
    /// ISO-8859-1; every byte maps to U+0000..=U+00FF, so decoding is total.
    Latin1,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16 => "utf-16",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Latin1 => "latin-1",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Error> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-16" | "utf16" => Ok(Encoding::Utf16),
            "utf-16le" | "utf16le" => Ok(Encoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Encoding::Utf16Be),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            _ => Err(Error::UnknownLabel(label.to_string())),
        }
    }
}

/// What to do with byte sequences that are invalid for the encoding.
///
/// Only `Strict` can fail a decode; the other two are defined
/// transformations of the invalid-byte case, not errors.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Fail on the first invalid sequence.
    #[default]
    Strict,
    /// Drop invalid sequences from the output. Lossy.
    Ignore,
    /// Substitute U+FFFD for each invalid sequence.
    Replace,
}

impl ErrorPolicy {
    pub fn name(self) -> &'static str {
        match self {
            ErrorPolicy::Strict => "strict",
            ErrorPolicy::Ignore => "ignore",
            ErrorPolicy::Replace => "replace",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorPolicy {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Error> {
        match label.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ErrorPolicy::Strict),
            "ignore" => Ok(ErrorPolicy::Ignore),
            "replace" => Ok(ErrorPolicy::Replace),
            _ => Err(Error::UnknownPolicy(label.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_utf8_strict() {
        assert_eq!(Encoding::default(), Encoding::Utf8);
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Strict);
    }

    #[test]
    fn encoding_labels_parse() {
        assert_eq!("utf-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("UTF8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("utf-16".parse::<Encoding>().unwrap(), Encoding::Utf16);
        assert_eq!("utf_16le".parse::<Encoding>().unwrap(), Encoding::Utf16Le);
        assert_eq!("UTF-16BE".parse::<Encoding>().unwrap(), Encoding::Utf16Be);
        assert_eq!("iso-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert!(matches!(
            "koi8-r".parse::<Encoding>(),
            Err(Error::UnknownLabel(_))
        ));
    }

    #[test]
    fn policy_labels_parse() {
        assert_eq!("strict".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Strict);
        assert_eq!("Ignore".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Ignore);
        assert_eq!(
            "replace".parse::<ErrorPolicy>().unwrap(),
            ErrorPolicy::Replace
        );
        assert!(matches!(
            "backslashreplace".parse::<ErrorPolicy>(),
            Err(Error::UnknownPolicy(_))
        ));
    }

    #[test]
    fn display_matches_labels() {
        assert_eq!(Encoding::Utf16Le.to_string(), "utf-16le");
        assert_eq!(ErrorPolicy::Replace.to_string(), "replace");
    }
}
