use std::{fmt, str::FromStr};

use crate::errors::*;

/// Character encoding of binary MARC field data.
///
/// MARC-8 is not an `Encoding`: converting MARC-8 needs character set tables that live outside
/// this crate. Decode such fields with [`map_marc8_field`](crate::map_marc8_field) and a MARC-8
/// decoder of your choice, then write them as UTF-8.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Encoding {
    /// UCS/Unicode records (leader position 09 is `a`).
    Utf8,
    /// ISO-8859-1, one byte per character.
    Latin1,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "iso-8859-1",
        }
    }

    /// Encodes `text` into bytes.
    ///
    /// ### Errors
    /// `Latin1` fails with `Error::UnencodableCharacter` on characters above U+00FF.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| Error::UnencodableCharacter {
                        encoding: *self,
                        character: c,
                    })
                })
                .collect(),
        }
    }

    /// Decodes `bytes` into text.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => Ok(std::str::from_utf8(bytes)?.to_owned()),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
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

    fn from_str(label: &str) -> Result<Encoding> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Ok(Encoding::Utf8),
            "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin-1" | "latin1" | "l1" => {
                Ok(Encoding::Latin1)
            }
            _ => Err(Error::UnknownEncoding(label.to_owned())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Encoding;
    use crate::Error;

    #[test]
    fn should_parse_labels() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("utf8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("ISO8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("latin-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert!(matches!(
            "marc-9".parse::<Encoding>(),
            Err(Error::UnknownEncoding(ref label)) if label == "marc-9"
        ));
    }

    #[test]
    fn should_encode_latin1() {
        assert_eq!(Encoding::Latin1.encode("León").unwrap(), b"Le\xf3n");
        assert_eq!(Encoding::Utf8.encode("León").unwrap(), "León".as_bytes());
        assert!(matches!(
            Encoding::Latin1.encode("Санкт"),
            Err(Error::UnencodableCharacter {
                encoding: Encoding::Latin1,
                character: 'С',
            })
        ));
    }

    #[test]
    fn should_decode() {
        assert_eq!(Encoding::Latin1.decode(b"Le\xf3n").unwrap(), "León");
        assert_eq!(Encoding::Utf8.decode("León".as_bytes()).unwrap(), "León");
        assert!(matches!(
            Encoding::Utf8.decode(b"Le\xf3n"),
            Err(Error::Utf8Error(_))
        ));
    }
}
