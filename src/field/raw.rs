use super::{push_marker, subfield::Subfield, Content, Field};
use crate::{errors::*, Encoding, Indicator, Tag, FIELD_TERMINATOR, SUBFIELD_DELIMITER};

/// MARC field that keeps its values as raw, undecoded bytes.
///
/// Should only be used when the declared encoding of input records can't be trusted.
pub type RawField = Field<Vec<u8>>;

impl Field<Vec<u8>> {
    /// Will parse field data as found in the data area of a record.
    ///
    /// Trailing field terminator is optional. Parsing of subfields stops at the first malformed
    /// subfield (a delimiter without an identifier).
    ///
    /// ### Errors
    /// Will return `Error::UnexpectedEof` if data field is shorter than its indicators.
    pub fn parse<T: Into<Tag>>(tag: T, data: &[u8]) -> Result<RawField> {
        let tag = tag.into();
        let data = match data.split_last() {
            Some((&FIELD_TERMINATOR, rest)) => rest,
            _ => data,
        };

        if tag.is_control_field() {
            return Ok(Field {
                tag,
                content: Content::Control(data.to_vec()),
            });
        }

        if data.len() < 2 {
            return Err(Error::UnexpectedEof);
        }
        let indicator = Indicator([data[0] as char, data[1] as char]);
        let subfields = RawSubfields::new(&data[2..])
            .map(|(identifier, value)| Subfield::new(identifier, value.to_vec()))
            .collect();

        Ok(Field {
            tag,
            content: Content::Data {
                indicator,
                subfields,
            },
        })
    }

    /// Binary MARC representation of the field, including field terminator.
    ///
    /// Values are written unchanged. A given `encoding` is ignored with a warning.
    ///
    /// ### Errors
    /// Will return `Error::WideMarker` for an indicator or code above U+00FF.
    pub fn as_marc(&self, encoding: Option<Encoding>) -> Result<Vec<u8>> {
        if let Some(encoding) = encoding {
            tracing::warn!(
                tag = %self.tag,
                %encoding,
                "Attempt to force a raw field into an encoding, raw bytes are used"
            );
        }

        let mut marc = Vec::new();
        match &self.content {
            Content::Control(data) => marc.extend_from_slice(data),
            Content::Data {
                indicator,
                subfields,
            } => {
                push_marker(&mut marc, &self.tag, indicator.first())?;
                push_marker(&mut marc, &self.tag, indicator.second())?;
                for sf in subfields {
                    marc.push(SUBFIELD_DELIMITER);
                    push_marker(&mut marc, &self.tag, sf.get_identifier().as_char())?;
                    marc.extend_from_slice(sf.get_data());
                }
            }
        }
        marc.push(FIELD_TERMINATOR);
        Ok(marc)
    }

    /// Decodes every value with `encoding`.
    pub fn decode(self, encoding: Encoding) -> Result<Field<String>> {
        self.try_map_values(|value| encoding.decode(&value))
    }
}

/// Iterator over subfields of binary field data (indicators excluded).
struct RawSubfields<'a> {
    data: &'a [u8],
    state: State,
}

impl<'a> RawSubfields<'a> {
    fn new(data: &'a [u8]) -> RawSubfields<'a> {
        RawSubfields {
            data,
            state: State::Initial,
        }
    }
}

impl<'a> Iterator for RawSubfields<'a> {
    type Item = (u8, &'a [u8]);

    fn next(&mut self) -> Option<(u8, &'a [u8])> {
        loop {
            match self.state {
                State::Initial => match self.data.first() {
                    Some(&SUBFIELD_DELIMITER) => self.state = State::SubfieldStart(1),
                    Some(_) => {
                        tracing::debug!("Field data does not start with a subfield delimiter");
                        self.state = State::Done;
                    }
                    None => self.state = State::Done,
                },
                State::SubfieldStart(offset) => match self.data.get(offset) {
                    Some(&SUBFIELD_DELIMITER) | None => {
                        // Subfield ends unexpectedly
                        tracing::debug!(offset, "Subfield without identifier");
                        self.state = State::Done;
                    }
                    Some(&identifier) => self.state = State::Subfield(identifier, offset + 1),
                },
                State::Subfield(identifier, start) => {
                    let rest = &self.data[start..];
                    return match rest.iter().position(|&b| b == SUBFIELD_DELIMITER) {
                        Some(len) => {
                            self.state = State::SubfieldStart(start + len + 1);
                            Some((identifier, &rest[..len]))
                        }
                        None => {
                            self.state = State::Done;
                            Some((identifier, rest))
                        }
                    };
                }
                State::Done => return None,
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone)]
enum State {
    Initial,
    SubfieldStart(usize),
    Subfield(u8, usize),
    Done,
}
