use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use rust_decimal::Decimal;
use std::io::Cursor;

use crate::core::JaarrekeningError;

fn xml_io(e: std::io::Error) -> JaarrekeningError {
    JaarrekeningError::Xml(format!("XML write error: {e}"))
}

/// Pretty-printing XML writer (two-space indent, UTF-8 declaration).
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, JaarrekeningError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, JaarrekeningError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| JaarrekeningError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, JaarrekeningError> {
        self.start_element_with_attrs(name, &[])
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, JaarrekeningError> {
        self.writer
            .write_event(Event::Start(with_attrs(name, attrs)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// Write `<name attr="..."/>`.
    pub fn empty_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, JaarrekeningError> {
        self.writer
            .write_event(Event::Empty(with_attrs(name, attrs)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, JaarrekeningError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, JaarrekeningError> {
        self.text_element_with_attrs(name, text, &[])
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, JaarrekeningError> {
        self.start_element_with_attrs(name, attrs)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }
}

fn with_attrs<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    elem
}

/// Format an amount with exactly `decimals` fraction digits (`15000` → `15000.00`).
///
/// The amount is expected to be rounded already.
pub fn format_amount(amount: Decimal, decimals: u32) -> String {
    let mut value = amount;
    value.rescale(decimals);
    value.to_string()
}
