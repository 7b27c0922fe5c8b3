pub mod raw;
pub mod subfield;

use std::{borrow::Cow, collections::BTreeMap, fmt};

use self::subfield::{subfields::Subfields, Subfield};
use crate::{
    errors::*, Encoding, Identifier, Indicator, RawField, Tag, FIELD_TERMINATOR,
    SUBFIELD_DELIMITER,
};

/// Value representation of a field: decoded text or raw bytes.
pub trait FieldData: Clone + Eq + fmt::Debug {
    fn as_bytes(&self) -> &[u8];

    /// Text used by `value`, `format_field` and MARCMaker output.
    fn as_text(&self) -> Cow<'_, str>;
}

impl FieldData for String {
    fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl FieldData for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

#[derive(Eq, PartialEq, Clone, Debug, Hash)]
enum Content<V> {
    Control(V),
    Data {
        indicator: Indicator,
        subfields: Vec<Subfield<V>>,
    },
}

/// MARC field.
///
/// Either a control field (tags `000`-`009`) holding data only, or a data field holding two
/// indicators and an ordered list of subfields. Subfield codes may repeat.
///
/// `V` is the value representation: `String` for decoded text, `Vec<u8>` for a [`RawField`].
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct Field<V = String> {
    tag: Tag,
    content: Content<V>,
}

impl<V> Field<V> {
    /// Creates a field.
    ///
    /// For a control tag the field gets default (empty) data and `indicators` and `subfields` are
    /// ignored.
    ///
    /// ### Errors
    /// Will return `Error::IndicatorArity` if `indicators` of a data field are not exactly two.
    pub fn new<T, I, Ident, D>(tag: T, indicators: &[char], subfields: I) -> Result<Field<V>>
    where
        T: Into<Tag>,
        I: IntoIterator<Item = (Ident, D)>,
        Ident: Into<Identifier>,
        D: Into<V>,
        V: Default,
    {
        let tag = tag.into();
        if tag.is_control_field() {
            return Ok(Field {
                tag,
                content: Content::Control(V::default()),
            });
        }

        let indicator = Indicator::from_slice(indicators)?;
        let subfields = subfields
            .into_iter()
            .map(|(identifier, data)| Subfield::new(identifier, data.into()))
            .collect();
        Ok(Field {
            tag,
            content: Content::Data {
                indicator,
                subfields,
            },
        })
    }

    /// Creates a control field.
    ///
    /// ### Errors
    /// Data fields need indicators, so a non-control `tag` gives `Error::IndicatorArity(0)`.
    pub fn with_data<T: Into<Tag>, D: Into<V>>(tag: T, data: D) -> Result<Field<V>> {
        let tag = tag.into();
        if !tag.is_control_field() {
            return Err(Error::IndicatorArity(0));
        }
        Ok(Field {
            tag,
            content: Content::Control(data.into()),
        })
    }

    /// Returns tag of the field.
    pub fn get_tag(&self) -> &Tag {
        &self.tag
    }

    pub fn is_control_field(&self) -> bool {
        self.tag.is_control_field()
    }

    pub fn is_subject_field(&self) -> bool {
        self.tag.is_subject_field()
    }

    /// Returns data of a control field.
    pub fn get_data(&self) -> Option<&V> {
        match &self.content {
            Content::Control(data) => Some(data),
            Content::Data { .. } => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut V> {
        match &mut self.content {
            Content::Control(data) => Some(data),
            Content::Data { .. } => None,
        }
    }

    /// Returns indicator of a data field.
    pub fn get_indicator(&self) -> Option<Indicator> {
        match &self.content {
            Content::Control(_) => None,
            Content::Data { indicator, .. } => Some(*indicator),
        }
    }

    pub fn set_indicator<Ind: Into<Indicator>>(&mut self, new: Ind) -> Result<&mut Self> {
        match &mut self.content {
            Content::Data { indicator, .. } => *indicator = new.into(),
            Content::Control(_) => return Err(Error::NotADataField(self.tag.clone())),
        }
        Ok(self)
    }

    /// Will return iterator over subfields of the field.
    ///
    /// Yields nothing for a control field.
    pub fn subfields(&self) -> Subfields<'_, V> {
        Subfields::new(self.subfield_slice())
    }

    /// Will find all subfields with identifier `ident`.
    pub fn subfield<Ident: Into<Identifier>>(&self, ident: Ident) -> Vec<&Subfield<V>> {
        let identifier = ident.into();
        self.subfields()
            .filter(|sf| sf.get_identifier() == identifier)
            .collect()
    }

    /// Returns the number of subfields with identifier `ident`.
    pub fn count<Ident: Into<Identifier>>(&self, ident: Ident) -> usize {
        let identifier = ident.into();
        self.subfields()
            .filter(|sf| sf.get_identifier() == identifier)
            .count()
    }

    /// Returns values of subfields whose code is one of `codes`, in field order.
    ///
    /// Empty `codes` selects every subfield.
    pub fn get_subfields(&self, codes: &[char]) -> Vec<&V> {
        self.get_subfields_with_codes(codes)
            .into_iter()
            .map(Subfield::get_data)
            .collect()
    }

    /// Like `get_subfields` but keeps codes along with values.
    pub fn get_subfields_with_codes(&self, codes: &[char]) -> Vec<&Subfield<V>> {
        self.subfields()
            .filter(|sf| codes.is_empty() || codes.contains(&sf.get_identifier().as_char()))
            .collect()
    }

    /// Groups subfield values by code.
    ///
    /// Values of one code keep their order; order between different codes is lost.
    pub fn subfields_as_map(&self) -> BTreeMap<Identifier, Vec<&V>> {
        let mut map: BTreeMap<Identifier, Vec<&V>> = BTreeMap::new();
        for sf in self.subfields() {
            let values = map.entry(sf.get_identifier()).or_default();
            values.push(sf.get_data());
        }
        map
    }

    /// Returns value of the first subfield with identifier `ident`.
    pub fn get<Ident: Into<Identifier>>(&self, ident: Ident) -> Option<&V> {
        let identifier = ident.into();
        self.subfields()
            .find(|sf| sf.get_identifier() == identifier)
            .map(Subfield::get_data)
    }

    pub fn contains<Ident: Into<Identifier>>(&self, ident: Ident) -> bool {
        self.get(ident).is_some()
    }

    /// Appends a subfield.
    ///
    /// ### Errors
    /// Will return `Error::NotADataField` for a control field.
    pub fn add_subfield<Ident, D>(&mut self, ident: Ident, data: D) -> Result<&mut Self>
    where
        Ident: Into<Identifier>,
        D: Into<V>,
    {
        let subfields = self.subfields_mut()?;
        subfields.push(Subfield::new(ident, data.into()));
        Ok(self)
    }

    /// Removes the first subfield with identifier `ident` and returns its value.
    pub fn delete_subfield<Ident: Into<Identifier>>(&mut self, ident: Ident) -> Option<V> {
        let identifier = ident.into();
        self.remove_first(|sf| sf.get_identifier() == identifier)
    }

    /// Removes the first subfield with identifier `ident` and value `value`.
    pub fn delete_subfield_matching<Ident, M>(&mut self, ident: Ident, value: &M) -> Option<V>
    where
        Ident: Into<Identifier>,
        M: ?Sized,
        V: PartialEq<M>,
    {
        let identifier = ident.into();
        self.remove_first(|sf| sf.get_identifier() == identifier && *sf.get_data() == *value)
    }

    /// Removes every subfield with identifier `ident`, returns the number removed.
    pub fn delete_all_subfields<Ident: Into<Identifier>>(&mut self, ident: Ident) -> usize {
        let identifier = ident.into();
        match &mut self.content {
            Content::Data { subfields, .. } => {
                let before = subfields.len();
                subfields.retain(|sf| sf.get_identifier() != identifier);
                before - subfields.len()
            }
            Content::Control(_) => 0,
        }
    }

    /// Renames every subfield code `from` to `to`.
    pub fn change_code<A, B>(&mut self, from: A, to: B)
    where
        A: Into<Identifier>,
        B: Into<Identifier>,
    {
        let (from, to) = (from.into(), to.into());
        if let Content::Data { subfields, .. } = &mut self.content {
            for sf in subfields.iter_mut().filter(|sf| sf.get_identifier() == from) {
                sf.set_identifier(to);
            }
        }
    }

    /// Sorts subfields by code. Subfields sharing a code keep their order.
    pub fn sort(&mut self) {
        self.sort_by_key(|identifier| identifier)
    }

    /// Sorts subfields by `fun` applied to their code. The sort is stable.
    pub fn sort_by_key<K, F>(&mut self, mut fun: F)
    where
        K: Ord,
        F: FnMut(Identifier) -> K,
    {
        if let Content::Data { subfields, .. } = &mut self.content {
            subfields.sort_by_key(|sf| fun(sf.get_identifier()));
        }
    }

    /// Sets value of the only subfield with identifier `ident`.
    ///
    /// Appends a new subfield if there is none.
    ///
    /// ### Errors
    /// Will return `Error::DuplicateCode` (leaving the field untouched) if more than one subfield
    /// has this identifier, and `Error::NotADataField` for a control field.
    pub fn set<Ident, D>(&mut self, ident: Ident, data: D) -> Result<()>
    where
        Ident: Into<Identifier>,
        D: Into<V>,
    {
        let identifier = ident.into();
        let subfields = match &mut self.content {
            Content::Data { subfields, .. } => subfields,
            Content::Control(_) => return Err(Error::NotADataField(self.tag.clone())),
        };

        match subfields
            .iter()
            .filter(|sf| sf.get_identifier() == identifier)
            .count()
        {
            0 => subfields.push(Subfield::new(identifier, data.into())),
            1 => {
                if let Some(sf) = subfields
                    .iter_mut()
                    .find(|sf| sf.get_identifier() == identifier)
                {
                    *sf.get_data_mut() = data.into();
                }
            }
            _ => {
                return Err(Error::DuplicateCode {
                    tag: self.tag.clone(),
                    code: identifier,
                })
            }
        }
        Ok(())
    }

    /// Converts every value (control data or subfield values) with `fun`.
    ///
    /// Tag, indicators and subfield codes are kept.
    pub fn map_values<W, F: FnMut(V) -> W>(self, mut fun: F) -> Field<W> {
        let content = match self.content {
            Content::Control(data) => Content::Control(fun(data)),
            Content::Data {
                indicator,
                subfields,
            } => Content::Data {
                indicator,
                subfields: subfields.into_iter().map(|sf| sf.map(&mut fun)).collect(),
            },
        };
        Field {
            tag: self.tag,
            content,
        }
    }

    pub(crate) fn try_map_values<W, F>(self, mut fun: F) -> Result<Field<W>>
    where
        F: FnMut(V) -> Result<W>,
    {
        let content = match self.content {
            Content::Control(data) => Content::Control(fun(data)?),
            Content::Data {
                indicator,
                subfields,
            } => Content::Data {
                indicator,
                subfields: subfields
                    .into_iter()
                    .map(|sf| {
                        let identifier = sf.get_identifier();
                        Ok(Subfield::new(identifier, fun(sf.into_data())?))
                    })
                    .collect::<Result<Vec<_>>>()?,
            },
        };
        Ok(Field {
            tag: self.tag,
            content,
        })
    }

    fn subfield_slice(&self) -> &[Subfield<V>] {
        match &self.content {
            Content::Data { subfields, .. } => subfields,
            Content::Control(_) => &[],
        }
    }

    fn subfields_mut(&mut self) -> Result<&mut Vec<Subfield<V>>> {
        match &mut self.content {
            Content::Data { subfields, .. } => Ok(subfields),
            Content::Control(_) => Err(Error::NotADataField(self.tag.clone())),
        }
    }

    fn remove_first<F>(&mut self, fun: F) -> Option<V>
    where
        F: FnMut(&Subfield<V>) -> bool,
    {
        match &mut self.content {
            Content::Data { subfields, .. } => {
                let pos = subfields.iter().position(fun)?;
                Some(subfields.remove(pos).into_data())
            }
            Content::Control(_) => None,
        }
    }
}

impl<V: FieldData> Field<V> {
    /// Returns the field as a string without tag, indicators and subfield codes.
    ///
    /// Subfield values are trimmed and joined with a space.
    pub fn value(&self) -> String {
        match &self.content {
            Content::Control(data) => data.as_text().into_owned(),
            Content::Data { subfields, .. } => subfields
                .iter()
                .map(|sf| sf.get_data().as_text().trim().to_owned())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Like `value` but formats subject headings.
    ///
    /// Linkage (`$6`) is skipped; in `6XX` fields subdivisions `$v`, `$x`, `$y` and `$z` are
    /// separated with ` -- `.
    pub fn format_field(&self) -> String {
        let subfields = match &self.content {
            Content::Control(data) => return data.as_text().into_owned(),
            Content::Data { subfields, .. } => subfields,
        };

        let subject = self.is_subject_field();
        let mut text = String::new();
        for sf in subfields {
            let code = sf.get_identifier().as_char();
            if code == '6' {
                continue;
            }
            if subject && matches!(code, 'v' | 'x' | 'y' | 'z') {
                text.push_str(" -- ");
            } else {
                text.push(' ');
            }
            text.push_str(&sf.get_data().as_text());
        }
        text.trim().to_owned()
    }
}

impl Field<String> {
    /// Parses field data as found in a record (terminator is optional) and decodes it.
    pub fn parse<T: Into<Tag>>(tag: T, data: &[u8], encoding: Encoding) -> Result<Field<String>> {
        RawField::parse(tag, data)?.decode(encoding)
    }

    /// Binary MARC representation of the field, including field terminator.
    ///
    /// Values are encoded with `encoding`. Indicators and subfield codes are written one byte per
    /// character, the way `parse` reads them.
    ///
    /// ### Errors
    /// Will return `Error::UnencodableCharacter` if `encoding` can not represent a value and
    /// `Error::WideMarker` for an indicator or code above U+00FF.
    pub fn as_marc(&self, encoding: Encoding) -> Result<Vec<u8>> {
        let mut marc = Vec::new();
        match &self.content {
            Content::Control(data) => marc.extend(encoding.encode(data)?),
            Content::Data {
                indicator,
                subfields,
            } => {
                push_marker(&mut marc, &self.tag, indicator.first())?;
                push_marker(&mut marc, &self.tag, indicator.second())?;
                for sf in subfields {
                    marc.push(SUBFIELD_DELIMITER);
                    push_marker(&mut marc, &self.tag, sf.get_identifier().as_char())?;
                    marc.extend(encoding.encode(sf.get_data())?);
                }
            }
        }
        marc.push(FIELD_TERMINATOR);
        Ok(marc)
    }

    /// Encodes every value into a `RawField`.
    pub fn to_raw(&self, encoding: Encoding) -> Result<RawField> {
        self.clone().try_map_values(|value| encoding.encode(&value))
    }
}

/// Writes an indicator or subfield code as a single byte.
fn push_marker(marc: &mut Vec<u8>, tag: &Tag, marker: char) -> Result<()> {
    let byte = u8::try_from(u32::from(marker)).map_err(|_| Error::WideMarker {
        tag: tag.clone(),
        character: marker,
    })?;
    marc.push(byte);
    Ok(())
}

/// MARCMaker representation, e.g. `=245  10$aTitle`.
///
/// Blank indicators and spaces of control data are written as `\`. Mnemonics for special
/// characters are not supported.
impl<V: FieldData> fmt::Display for Field<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "={}  ", self.tag)?;
        match &self.content {
            Content::Control(data) => f.write_str(&data.as_text().replace(' ', "\\")),
            Content::Data {
                indicator,
                subfields,
            } => {
                for &ind in indicator.0.iter() {
                    match ind {
                        ' ' | '\\' => f.write_str("\\")?,
                        other => write!(f, "{}", other)?,
                    }
                }
                for sf in subfields {
                    write!(f, "${}{}", sf.get_identifier(), sf.get_data().as_text())?;
                }
                Ok(())
            }
        }
    }
}

impl<'a, V> IntoIterator for &'a Field<V> {
    type Item = &'a Subfield<V>;
    type IntoIter = Subfields<'a, V>;

    fn into_iter(self) -> Subfields<'a, V> {
        self.subfields()
    }
}

/// Decodes a field from MARC-8 with the given `decode` function.
///
/// Control data or every subfield value is passed through `decode`; tag, indicators and codes are
/// not touched.
pub fn map_marc8_field<V, F>(field: Field<V>, mut decode: F) -> Field<String>
where
    V: FieldData,
    F: FnMut(&[u8]) -> String,
{
    field.map_values(|value| decode(value.as_bytes()))
}
