//! Event-driven handlers for BeerXML element families.
//!
//! Each handler is a small state machine advanced by
//! [`BeerXmlHandler::handle_event`]. Field rules for an entity live in one
//! [`RecordMapping`] and are shared by the standalone handler (driven with a
//! whole document) and the recipe handler (driving an already armed handler
//! with the children of an embedded element).

use super::event::{XmlEvent, XmlEventReader};
use crate::error::ImportResult;

pub trait BeerXmlHandler {
    fn handle_event(&mut self, event: &XmlEvent) -> ImportResult<()>;
}

/// Drives `handler` with every event of `xml`, stopping at the first error.
pub fn run_handler<H: BeerXmlHandler>(xml: &str, handler: &mut H) -> ImportResult<()> {
    for event in XmlEventReader::new(xml) {
        handler.handle_event(&event?)?;
    }
    Ok(())
}

/// Field mapping for one BeerXML record element, e.g. `<hop>` inside `<hops>`.
pub trait RecordMapping {
    type Record: Default;
    type Output;

    /// Plural element that arms a standalone handler.
    const CONTAINER: &'static str;
    /// Singular element holding one record.
    const ELEMENT: &'static str;

    /// Commits one field. `field` is lower case and `text` is trimmed and
    /// non-empty; unknown fields are ignored.
    fn apply(&self, record: &mut Self::Record, field: &str, text: &str) -> ImportResult<()>;

    /// Converts a completed record once every field has been seen.
    fn finish(&self, record: Self::Record) -> ImportResult<Self::Output>;
}

/// Position of a [`ListHandler`] relative to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Idle,
    InContainer,
    InRecord,
    /// Inside a field of the current record; `depth` counts elements nested
    /// below the field itself.
    InField { depth: usize },
    /// Inside an element of the container that is not a record.
    Skipping { depth: usize },
}

/// Table-driven handler producing one output per record element, in
/// document order.
pub struct ListHandler<M: RecordMapping> {
    mapping: M,
    scope: Scope,
    /// Set for handlers that start inside their container and never leave it.
    pre_armed: bool,
    record: Option<M::Record>,
    field: String,
    text: String,
    results: Vec<M::Output>,
}

impl<M: RecordMapping> ListHandler<M> {
    /// A handler that arms itself on `M::CONTAINER`.
    pub fn new(mapping: M) -> Self {
        Self {
            mapping,
            scope: Scope::Idle,
            pre_armed: false,
            record: None,
            field: String::new(),
            text: String::new(),
            results: Vec::new(),
        }
    }

    /// A handler that is already inside its container. It is fed the
    /// container's children only.
    pub fn armed(mapping: M) -> Self {
        Self {
            scope: Scope::InContainer,
            pre_armed: true,
            ..Self::new(mapping)
        }
    }

    pub fn is_armed(&self) -> bool {
        self.scope != Scope::Idle
    }

    pub fn results(&self) -> &[M::Output] {
        &self.results
    }

    pub fn into_results(self) -> Vec<M::Output> {
        self.results
    }

    fn commit_field(&mut self) -> ImportResult<()> {
        let text = self.text.trim();
        if text.is_empty() {
            return Ok(());
        }
        if let Some(record) = self.record.as_mut() {
            self.mapping.apply(record, &self.field, text)?;
        }
        Ok(())
    }

    fn commit_record(&mut self) -> ImportResult<()> {
        if let Some(record) = self.record.take() {
            let output = self.mapping.finish(record)?;
            self.results.push(output);
        }
        Ok(())
    }
}

impl<M: RecordMapping> BeerXmlHandler for ListHandler<M> {
    fn handle_event(&mut self, event: &XmlEvent) -> ImportResult<()> {
        self.scope = match (self.scope, event) {
            (Scope::Idle, XmlEvent::Start(name)) if name == M::CONTAINER => Scope::InContainer,
            (Scope::Idle, _) => Scope::Idle,

            (Scope::InContainer, XmlEvent::Start(name)) if name == M::ELEMENT => {
                self.record = Some(M::Record::default());
                Scope::InRecord
            }
            (Scope::InContainer, XmlEvent::Start(_)) => Scope::Skipping { depth: 0 },
            (Scope::InContainer, XmlEvent::End(name))
                if name == M::CONTAINER && !self.pre_armed =>
            {
                Scope::Idle
            }
            (Scope::InContainer, _) => Scope::InContainer,

            (Scope::Skipping { depth }, XmlEvent::Start(_)) => Scope::Skipping { depth: depth + 1 },
            (Scope::Skipping { depth: 0 }, XmlEvent::End(_)) => Scope::InContainer,
            (Scope::Skipping { depth }, XmlEvent::End(_)) => Scope::Skipping { depth: depth - 1 },
            (Scope::Skipping { depth }, XmlEvent::Text(_)) => Scope::Skipping { depth },

            (Scope::InRecord, XmlEvent::Start(name)) => {
                self.field.clone_from(name);
                self.text.clear();
                Scope::InField { depth: 0 }
            }
            (Scope::InRecord, XmlEvent::End(_)) => {
                self.commit_record()?;
                Scope::InContainer
            }
            (Scope::InRecord, XmlEvent::Text(_)) => Scope::InRecord,

            (Scope::InField { depth }, XmlEvent::Start(_)) => Scope::InField { depth: depth + 1 },
            (Scope::InField { depth: 0 }, XmlEvent::Text(text)) => {
                self.text.push_str(text);
                Scope::InField { depth: 0 }
            }
            (Scope::InField { depth }, XmlEvent::Text(_)) => Scope::InField { depth },
            (Scope::InField { depth: 0 }, XmlEvent::End(_)) => {
                self.commit_field()?;
                Scope::InRecord
            }
            (Scope::InField { depth }, XmlEvent::End(_)) => Scope::InField { depth: depth - 1 },
        };
        Ok(())
    }
}

/// A handler receiving the events inside one element of an enclosing
/// handler. The opening and closing events of that element are not
/// forwarded.
pub(crate) struct Nested<H> {
    handler: H,
    depth: usize,
}

impl<H: BeerXmlHandler> Nested<H> {
    pub(crate) fn new(handler: H) -> Self {
        Self { handler, depth: 0 }
    }

    /// Forwards `event`. Returns `true` when `event` closes the nested
    /// element; that event is not forwarded.
    pub(crate) fn forward(&mut self, event: &XmlEvent) -> ImportResult<bool> {
        match event {
            XmlEvent::Start(_) => self.depth += 1,
            XmlEvent::End(_) if self.depth == 0 => return Ok(true),
            XmlEvent::End(_) => self.depth -= 1,
            XmlEvent::Text(_) => {}
        }
        self.handler.handle_event(event)?;
        Ok(false)
    }

    pub(crate) fn into_inner(self) -> H {
        self.handler
    }
}

/// Collects the text of the current scalar field of a hand-written handler.
#[derive(Debug, Default)]
pub(crate) struct FieldBuffer {
    field: Option<String>,
    text: String,
}

impl FieldBuffer {
    pub(crate) fn open(&mut self, field: &str) {
        self.field = Some(field.to_string());
        self.text.clear();
    }

    pub(crate) fn is_open(&self) -> bool {
        self.field.is_some()
    }

    pub(crate) fn push(&mut self, text: &str) {
        if self.field.is_some() {
            self.text.push_str(text);
        }
    }

    /// Closes the field, returning its name and trimmed text when the text
    /// is not empty.
    pub(crate) fn close(&mut self) -> Option<(String, String)> {
        let field = self.field.take()?;
        let text = self.text.trim();
        if text.is_empty() {
            None
        } else {
            Some((field, text.to_string()))
        }
    }
}
