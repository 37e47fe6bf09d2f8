//! Applies a validated argument mapping to a fresh [`EventDocument`].

use crate::document::EventDocument;
use crate::error::EventError;

/// The argument mapping handed to the builder.
///
/// One slot per event field; `None` means the argument was absent.
/// Absence of an optional field leaves the document untouched — it is
/// never coerced to an empty string.
#[derive(Debug, Clone, Default)]
pub struct EventFields {
    /// Universal event identifier. Required.
    pub uei: Option<String>,
    /// Interface address the event is about. Required.
    pub interface: Option<String>,
    /// Node id as its decimal string form.
    pub node_id: Option<String>,
    /// Node label.
    pub host: Option<String>,
    /// Service name.
    pub service: Option<String>,
    /// Numeric severity code, 0–7.
    pub severity: Option<String>,
    /// Description for the event browser.
    pub description: Option<String>,
    /// Operator instructions.
    pub operator_instructions: Option<String>,
}

/// Builds an [`EventDocument`] from an [`EventFields`] mapping and an
/// ordered parameter list.
///
/// # Example
///
/// ```
/// use sendevent_event::{EventBuilder, EventFields};
///
/// let fields = EventFields {
///     uei: Some("uei.opennms.org/test".into()),
///     interface: Some("10.0.0.1".into()),
///     severity: Some("4".into()),
///     ..Default::default()
/// };
///
/// let doc = EventBuilder::new(fields)
///     .with_parameters(vec![("url".into(), "http://x".into())])
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.uei(), Some("uei.opennms.org/test"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    fields: EventFields,
    parameters: Vec<(String, String)>,
}

impl EventBuilder {
    /// Creates a builder over the given field mapping.
    #[must_use]
    pub fn new(fields: EventFields) -> Self {
        Self {
            fields,
            parameters: Vec::new(),
        }
    }

    /// Attaches the ordered parameter list. Duplicate keys are allowed
    /// and all pairs are kept in sequence order.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<(String, String)>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Constructs the event document.
    ///
    /// # Errors
    ///
    /// - [`EventError::MissingField`] when `uei` or `interface` is absent
    /// - [`EventError::InvalidNodeId`] when a present node id is not an
    ///   integer
    /// - [`EventError::Severity`] when a present severity code is invalid
    pub fn build(self) -> Result<EventDocument, EventError> {
        let uei = self.fields.uei.ok_or(EventError::MissingField("uei"))?;
        let interface = self
            .fields
            .interface
            .ok_or(EventError::MissingField("interface"))?;

        let mut doc = EventDocument::new();
        doc.set_uei(uei);
        doc.set_interface(interface);

        if let Some(ref id) = self.fields.node_id {
            doc.set_node_id(id)?;
        }
        if let Some(host) = self.fields.host {
            doc.set_host(host);
        }
        if let Some(service) = self.fields.service {
            doc.set_service(service);
        }
        if let Some(ref severity) = self.fields.severity {
            doc.set_severity(severity)?;
        }
        if let Some(description) = self.fields.description {
            doc.set_description(description);
        }
        if let Some(instructions) = self.fields.operator_instructions {
            doc.set_operator_instructions(instructions);
        }

        for (name, value) in self.parameters {
            doc.add_parameter(name, value);
        }
        Ok(doc)
    }
}
