//! Event document layer for sendevent.
//!
//! This crate builds the in-memory event record and renders it to the
//! eventd XML wire format:
//!
//! - [`EventDocument`]: incrementally buildable event with typed setters
//!   and ordered, idempotent XML serialization
//! - [`EventBuilder`]: applies a validated argument mapping
//!   ([`EventFields`]) to a fresh document, enforcing the required fields
//! - [`EventError`]: construction and rendering failures
//!
//! The wire format is a byte-exact compatibility contract with the
//! receiving server: element order, 2-space indentation and CDATA-wrapped
//! parameters are all fixed. See [`EventDocument::serialize`].
//!
//! # Example
//!
//! ```
//! use sendevent_event::{EventBuilder, EventFields};
//!
//! let fields = EventFields {
//!     uei: Some("uei.opennms.org/internal/discovery/newSuspect".into()),
//!     interface: Some("172.16.1.1".into()),
//!     ..Default::default()
//! };
//!
//! let doc = EventBuilder::new(fields).build().unwrap();
//! let xml = doc.serialize().unwrap();
//! assert!(xml.contains("<interface>172.16.1.1</interface>"));
//! ```

mod builder;
mod document;
mod error;
mod xml;

pub use builder::{EventBuilder, EventFields};
pub use document::EventDocument;
pub use error::EventError;
