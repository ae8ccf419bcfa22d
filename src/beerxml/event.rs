//! Streaming XML events for the BeerXML handlers.
//!
//! Element names are reduced to their lower-cased local name, since
//! exporters disagree on the case of BeerXML tags. Empty elements are
//! reported as a start immediately followed by an end.

use crate::error::{ImportError, ImportResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    Start(String),
    Text(String),
    End(String),
}

pub struct XmlEventReader<'a> {
    reader: Reader<&'a [u8]>,
    finished: bool,
}

impl<'a> XmlEventReader<'a> {
    pub fn new(xml: &'a str) -> Self {
        let mut reader = Reader::from_str(xml);
        reader.expand_empty_elements(true);
        reader.check_end_names(true);

        Self {
            reader,
            finished: false,
        }
    }

    fn xml_error(&self, err: quick_xml::Error) -> ImportError {
        ImportError::Xml {
            position: self.reader.buffer_position(),
            message: err.to_string(),
        }
    }

    pub fn next_event(&mut self) -> ImportResult<Option<XmlEvent>> {
        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => return Err(self.xml_error(err)),
            };

            match event {
                Event::Start(e) => {
                    return Ok(Some(XmlEvent::Start(element_name(e.local_name().as_ref()))))
                }
                Event::End(e) => {
                    return Ok(Some(XmlEvent::End(element_name(e.local_name().as_ref()))))
                }
                Event::Text(e) => {
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        Err(err) => {
                            // Undefined entities such as &nbsp; are common in notes fields.
                            warn!(
                                position = self.reader.buffer_position(),
                                error = %err,
                                "Keeping unescaped text"
                            );
                            String::from_utf8_lossy(&e).into_owned()
                        }
                    };
                    return Ok(Some(XmlEvent::Text(text)));
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    return Ok(Some(XmlEvent::Text(text)));
                }
                Event::Eof => return Ok(None),
                _ => continue,
            }
        }
    }
}

impl Iterator for XmlEventReader<'_> {
    type Item = ImportResult<XmlEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_event() {
            Ok(Some(event)) => Some(Ok(event)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}
