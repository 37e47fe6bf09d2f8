//! The in-memory event record and its XML serialization.

use chrono::Utc;

use sendevent_types::constants::{
    SOURCE_NAME, TAG_DESCR, TAG_EVENT, TAG_EVENTS, TAG_HOST, TAG_INTERFACE, TAG_LOG, TAG_NODEID,
    TAG_OPERINSTRUCT, TAG_PARM, TAG_PARMS, TAG_PARM_NAME, TAG_SERVICE, TAG_SEVERITY, TAG_SOURCE,
    TAG_TIME, TAG_UEI, TAG_VALUE, VALUE_ENCODING, VALUE_TYPE,
};
use sendevent_types::Severity;

use crate::error::EventError;
use crate::xml::XmlWriter;

/// Long-form date-time under GMT, independent of the host's locale and
/// time zone, e.g. `Friday, August 29, 2026 1:23:45 PM GMT`.
const TIME_FORMAT: &str = "%A, %B %-d, %Y %-I:%M:%S %p GMT";

/// A single network-management event, buildable field by field.
///
/// Construction populates `source` with the fixed wire label and `time`
/// with the current instant; both happen exactly once. Every other field
/// starts absent and an absent field emits no element at all — never an
/// empty one.
///
/// # Append semantics
///
/// [`set_host`](Self::set_host), [`set_service`](Self::set_service),
/// [`set_severity`](Self::set_severity), [`set_description`](Self::set_description)
/// and [`set_operator_instructions`](Self::set_operator_instructions) each
/// *append* to a per-tag list rather than overwrite: calling one of them
/// twice produces two sibling elements with the same tag in the output.
/// This mirrors what the receiving server has always been sent and is a
/// tested contract, not an accident.
///
/// # Example
///
/// ```
/// use sendevent_event::EventDocument;
///
/// let mut doc = EventDocument::new();
/// doc.set_uei("uei.opennms.org/test");
/// doc.set_interface("10.0.0.1");
/// doc.add_parameter("url", "http://example.org");
///
/// let xml = doc.serialize().unwrap();
/// assert!(xml.contains("<uei>uei.opennms.org/test</uei>"));
/// assert!(xml.contains("<parmName><![CDATA[url]]></parmName>"));
/// ```
#[derive(Debug, Clone)]
pub struct EventDocument {
    uei: Option<String>,
    source: String,
    node_id: Option<i64>,
    time: String,
    hosts: Vec<String>,
    interface: Option<String>,
    services: Vec<String>,
    severities: Vec<Severity>,
    descriptions: Vec<String>,
    operator_instructions: Vec<String>,
    parameters: Vec<(String, String)>,
}

impl EventDocument {
    /// Creates an empty event stamped with the current GMT time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_time(Utc::now().format(TIME_FORMAT).to_string())
    }

    fn with_time(time: String) -> Self {
        Self {
            uei: None,
            source: SOURCE_NAME.to_string(),
            node_id: None,
            time,
            hosts: Vec::new(),
            interface: None,
            services: Vec::new(),
            severities: Vec::new(),
            descriptions: Vec::new(),
            operator_instructions: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Sets the universal event identifier.
    pub fn set_uei(&mut self, uei: impl Into<String>) {
        self.uei = Some(uei.into());
    }

    /// Overrides the event source label.
    ///
    /// There is no CLI path to this; the default wire label is what
    /// eventd configurations key on.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Sets the interface address. Carried verbatim; the core does not
    /// validate it as an IPv4 literal.
    pub fn set_interface(&mut self, interface: impl Into<String>) {
        self.interface = Some(interface.into());
    }

    /// Sets the node id from its decimal string form.
    ///
    /// # Errors
    ///
    /// [`EventError::InvalidNodeId`] when the value does not parse as an
    /// integer.
    pub fn set_node_id(&mut self, id: &str) -> Result<(), EventError> {
        let parsed: i64 = id
            .parse()
            .map_err(|_| EventError::InvalidNodeId(id.to_string()))?;
        self.node_id = Some(parsed);
        Ok(())
    }

    /// Appends a host (node label) element.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.hosts.push(host.into());
    }

    /// Appends a service element.
    pub fn set_service(&mut self, service: impl Into<String>) {
        self.services.push(service.into());
    }

    /// Resolves a numeric severity code and appends a severity element.
    ///
    /// # Errors
    ///
    /// Propagates the [`SeverityError`](sendevent_types::SeverityError)
    /// when the code is not an integer in `[0, 7]`.
    pub fn set_severity(&mut self, code: &str) -> Result<(), EventError> {
        self.severities.push(Severity::resolve(code)?);
        Ok(())
    }

    /// Appends a description element.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.descriptions.push(description.into());
    }

    /// Appends an operator-instructions element.
    pub fn set_operator_instructions(&mut self, instructions: impl Into<String>) {
        self.operator_instructions.push(instructions.into());
    }

    /// Appends a caller-supplied (key, value) parameter.
    ///
    /// Keys are not required to be unique; duplicates are all kept in
    /// insertion order. Both key and value are CDATA-wrapped at
    /// serialization, so embedded markup cannot break the document.
    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.push((name.into(), value.into()));
    }

    /// Returns the UEI, if set.
    #[must_use]
    pub fn uei(&self) -> Option<&str> {
        self.uei.as_deref()
    }

    /// Returns the interface address, if set.
    #[must_use]
    pub fn interface(&self) -> Option<&str> {
        self.interface.as_deref()
    }

    /// Returns the construction timestamp.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Renders the event as indented UTF-8 XML.
    ///
    /// Element order inside `<event>` is fixed — uei, source, nodeid,
    /// time, host, interface, service, severity, descr, operinstruct,
    /// parms — and is a compatibility contract with the receiving server,
    /// not cosmetic. Serialization reads the document without mutating
    /// it, so repeated calls yield byte-identical output.
    ///
    /// # Errors
    ///
    /// [`EventError::Render`] on an internal formatting fault; not
    /// expected to occur with valid inputs.
    pub fn serialize(&self) -> Result<String, EventError> {
        let mut w = XmlWriter::new();
        w.open(TAG_LOG)?;
        w.open(TAG_EVENTS)?;
        w.open(TAG_EVENT)?;

        if let Some(ref uei) = self.uei {
            w.leaf(TAG_UEI, uei)?;
        }
        w.leaf(TAG_SOURCE, &self.source)?;
        if let Some(id) = self.node_id {
            w.leaf(TAG_NODEID, &id.to_string())?;
        }
        w.leaf(TAG_TIME, &self.time)?;
        for host in &self.hosts {
            w.leaf(TAG_HOST, host)?;
        }
        if let Some(ref interface) = self.interface {
            w.leaf(TAG_INTERFACE, interface)?;
        }
        for service in &self.services {
            w.leaf(TAG_SERVICE, service)?;
        }
        for severity in &self.severities {
            w.leaf(TAG_SEVERITY, severity.name())?;
        }
        for description in &self.descriptions {
            w.leaf(TAG_DESCR, description)?;
        }
        for instructions in &self.operator_instructions {
            w.leaf(TAG_OPERINSTRUCT, instructions)?;
        }

        if !self.parameters.is_empty() {
            w.open(TAG_PARMS)?;
            for (name, value) in &self.parameters {
                w.open(TAG_PARM)?;
                w.leaf_cdata(TAG_PARM_NAME, &[], name)?;
                w.leaf_cdata(
                    TAG_VALUE,
                    &[("type", VALUE_TYPE), ("encoding", VALUE_ENCODING)],
                    value,
                )?;
                w.close(TAG_PARM)?;
            }
            w.close(TAG_PARMS)?;
        }

        w.close(TAG_EVENT)?;
        w.close(TAG_EVENTS)?;
        w.close(TAG_LOG)?;
        Ok(w.into_string())
    }
}

impl Default for EventDocument {
    fn default() -> Self {
        Self::new()
    }
}
