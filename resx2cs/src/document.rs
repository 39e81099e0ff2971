//! Streaming reader for `.resx` documents.
//!
//! Only `<data>` elements that are direct children of the root element are
//! resources. Everything else (`<resheader>`, `<metadata>`, the embedded XSD
//! schema, etc.) is skipped without being materialized.

use std::io::BufRead;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{
    error::Error,
    traits::Parser,
    types::{ResourceDocument, ResourceEntry},
};

/// Depth of `<data>` elements, counting the root element as 1.
const DATA_DEPTH: usize = 2;
/// Depth of the `<value>` child inside `<data>`.
const VALUE_DEPTH: usize = DATA_DEPTH + 1;

/// Parses resource document text into its entries.
pub fn parse(text: &str) -> Result<ResourceDocument, Error> {
    ResourceDocument::from_str(text)
}

#[derive(Debug, Default)]
struct PendingEntry {
    name: String,
    value: String,
    in_value: bool,
    value_seen: bool,
}

impl Parser for ResourceDocument {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut entries = Vec::new();
        let mut depth = 0usize;
        let mut root_seen = false;
        let mut pending: Option<PendingEntry> = None;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    if depth == 0 && root_seen {
                        return Err(Error::malformed("document has more than one root element"));
                    }
                    depth += 1;
                    root_seen = true;
                    match (depth, e.name().as_ref()) {
                        (DATA_DEPTH, b"data") => {
                            pending = Some(PendingEntry {
                                name: read_name_attribute(e)?,
                                ..Default::default()
                            });
                        }
                        (VALUE_DEPTH, b"value") => {
                            if let Some(entry) = pending.as_mut().filter(|p| !p.value_seen) {
                                entry.in_value = true;
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    if depth == 0 && root_seen {
                        return Err(Error::malformed("document has more than one root element"));
                    }
                    root_seen = true;
                    match (depth + 1, e.name().as_ref()) {
                        (DATA_DEPTH, b"data") => {
                            entries.push(ResourceEntry::new(read_name_attribute(e)?, ""));
                        }
                        (VALUE_DEPTH, b"value") => {
                            if let Some(entry) = pending.as_mut() {
                                entry.value_seen = true;
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Text(e)) => {
                    if depth == 0 {
                        let text = e.unescape().map_err(Error::malformed)?;
                        if !text.trim().is_empty() {
                            return Err(Error::malformed("text outside the root element"));
                        }
                    } else if let Some(entry) = pending.as_mut().filter(|p| p.in_value) {
                        entry.value.push_str(&e.unescape().map_err(Error::malformed)?);
                    }
                }
                Ok(Event::CData(e)) => {
                    if depth == 0 {
                        return Err(Error::malformed("text outside the root element"));
                    } else if let Some(entry) = pending.as_mut().filter(|p| p.in_value) {
                        entry.value.push_str(&e.decode().map_err(Error::malformed)?);
                    }
                }
                Ok(Event::End(_)) => {
                    if depth == VALUE_DEPTH {
                        if let Some(entry) = pending.as_mut().filter(|p| p.in_value) {
                            entry.in_value = false;
                            entry.value_seen = true;
                        }
                    } else if depth == DATA_DEPTH {
                        if let Some(entry) = pending.take() {
                            entries.push(ResourceEntry::new(entry.name, entry.value));
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(Error::malformed(format!(
                        "{} (at byte {})",
                        e,
                        xml_reader.buffer_position()
                    )));
                }
            }
            buf.clear();
        }

        if depth != 0 {
            return Err(Error::malformed(format!(
                "unexpected end of document: {} unclosed element(s)",
                depth
            )));
        }
        if !root_seen {
            return Err(Error::malformed("document has no root element"));
        }

        tracing::trace!(entries = entries.len(), "parsed resource document");
        Ok(ResourceDocument { entries })
    }
}

fn read_name_attribute(e: &BytesStart) -> Result<String, Error> {
    for attr in e.attributes() {
        let attr = attr.map_err(Error::malformed)?;
        if attr.key.as_ref() == b"name" {
            return Ok(attr.unescape_value().map_err(Error::malformed)?.into_owned());
        }
    }
    Ok(String::new())
}
