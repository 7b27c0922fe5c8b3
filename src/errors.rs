use crate::{Encoding, Identifier, Tag};

pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// Errors of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// More than one subfield matched a single-subfield update.
    #[error("More than one subfield with code {code} in field {tag}")]
    DuplicateCode { tag: Tag, code: Identifier },
    /// A data field needs exactly two indicators.
    #[error("Data field requires exactly 2 indicators, {0} given")]
    IndicatorArity(usize),
    /// Subfield operation on a control field.
    #[error("Field {0} is a control field and has no subfields")]
    NotADataField(Tag),
    /// Indicators and subfield codes take a single byte in binary MARC.
    #[error("Indicator or subfield code {character:?} of field {tag} does not fit in a byte")]
    WideMarker { tag: Tag, character: char },
    #[error("Character {character:?} can not be encoded as {encoding}")]
    UnencodableCharacter { encoding: Encoding, character: char },
    #[error("Unknown encoding label {0:?}")]
    UnknownEncoding(String),
    #[error("Unexpected EOF")]
    UnexpectedEof,
    #[error("UTF8 error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),
    #[error("XML error: {0}")]
    Xml(String),
}
