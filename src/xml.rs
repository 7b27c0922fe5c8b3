//! # Module to convert MARC 21 fields to MARC XML

use crate::{Error, Field, Result, Subfield};
use std::io::Write;
use xml::writer::{EmitterConfig, EventWriter, XmlEvent};

const MARCXML_NS: &[(&str, &str)] = &[
    ("xmlns:marc", "http://www.loc.gov/MARC21/slim"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    (
        "xsi:schemaLocation",
        "http://www.loc.gov/MARC21/slim http://www.loc.gov/standards/marcxml/schema/MARC21slim.xsd",
    ),
];

/// Writes `self` as an element of an enclosing MARC XML document.
pub trait XmlElement {
    fn xml_element<W: Write>(&self, w: &mut EventWriter<W>) -> Result<()>;
}

/// Output a single field as a standalone MARC XML document.
///
/// ```rust
/// # use marc_field::{field, xml::MarcXml, Result};
/// # fn main() -> Result<()> {
/// let field = field!("979", [' ', ' '], ['a' => "autoref"])?;
/// assert_eq!(String::from_utf8(field.xml_minified()?).unwrap(), "<?xml version=\"1.0\" \
/// encoding=\"utf-8\"?><marc:datafield xmlns:marc=\"http://www.loc.gov/MARC21/slim\" xmlns:xsi\
/// =\"http://www.w3.org/2001/XMLSchema-instance\" xsi:schemaLocation=\"http://www.loc.gov/MARC21\
/// /slim http://www.loc.gov/standards/marcxml/schema/MARC21slim.xsd\" tag=\"979\" ind1=\" \" ind2\
/// =\" \"><marc:subfield code=\"a\">autoref</marc:subfield></marc:datafield>");
/// # Ok(())
/// # }
/// ```
pub trait MarcXml {
    fn xml_root_element<W: Write>(&self, w: &mut EventWriter<W>) -> Result<()>;

    /// Output MARC XML
    fn xml(&self, pretty_print: bool) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut writer = EmitterConfig::new()
            .perform_indent(pretty_print)
            .create_writer(&mut buffer);

        self.xml_root_element(&mut writer)?;
        Ok(buffer)
    }

    /// Output minified (outdented) MARC XML
    fn xml_minified(&self) -> Result<Vec<u8>> {
        Self::xml(self, false)
    }

    /// Output pretty-print (indented) MARC XML
    fn xml_pretty(&self) -> Result<Vec<u8>> {
        Self::xml(self, true)
    }
}

impl MarcXml for Field {
    fn xml_root_element<W: Write>(&self, w: &mut EventWriter<W>) -> Result<()> {
        write_field(self, MARCXML_NS, w)
    }
}

impl XmlElement for Field {
    fn xml_element<W: Write>(&self, w: &mut EventWriter<W>) -> Result<()> {
        write_field(self, &[], w)
    }
}

impl XmlElement for Subfield {
    fn xml_element<W: Write>(&self, w: &mut EventWriter<W>) -> Result<()> {
        let code: &str = &self.get_identifier().to_string();
        let attributes = vec![("code", code)];
        write_element("marc:subfield", attributes, w, |w| {
            w.write(XmlEvent::Characters(self.get_data()))
                .map_err(Into::into)
        })?;
        Ok(())
    }
}

fn write_field<W: Write>(
    field: &Field,
    namespaces: &[(&str, &str)],
    w: &mut EventWriter<W>,
) -> Result<()> {
    let tag = field.get_tag();
    let mut attributes = namespaces.to_vec();
    attributes.push(("tag", tag.as_str()));

    match (field.get_data(), field.get_indicator()) {
        (Some(data), _) => write_element("marc:controlfield", attributes, w, |w| {
            w.write(XmlEvent::Characters(data)).map_err(Into::into)
        }),
        (None, indicator) => {
            let indicator = indicator.unwrap_or_default();
            let (ind1, ind2) = (indicator.first().to_string(), indicator.second().to_string());
            attributes.push(("ind1", ind1.as_str()));
            attributes.push(("ind2", ind2.as_str()));
            write_element("marc:datafield", attributes, w, |w| {
                for subfield in field.subfields() {
                    subfield.xml_element(w)?;
                }
                Ok(())
            })
        }
    }
}

fn write_element<W: Write, F: Fn(&mut EventWriter<W>) -> Result<()>>(
    element: &str,
    attr: Vec<(&str, &str)>,
    w: &mut EventWriter<W>,
    f: F,
) -> Result<()> {
    let mut event_builder = XmlEvent::start_element(element);

    for &(k, v) in attr.iter() {
        event_builder = event_builder.attr(k, v);
    }

    let mut event: XmlEvent<'_> = event_builder.into();
    w.write(event)?;
    f(w)?;
    event = XmlEvent::end_element().into();
    w.write(event).map_err(Into::into)
}

impl From<xml::writer::Error> for Error {
    fn from(error: xml::writer::Error) -> Error {
        Error::Xml(error.to_string())
    }
}
