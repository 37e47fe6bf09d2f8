//! Core types for sendevent.
//!
//! This crate is the foundational layer of the workspace: it holds the
//! severity model, the unified error-code contract and the wire-protocol
//! constants shared by the event and transport layers.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  sendevent-types : Severity, ErrorCode, wire constants  │ ◄── HERE
//! └─────────────────────────────────────────────────────────┘
//!                            ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  sendevent-event : EventDocument, EventBuilder, XML     │
//! └─────────────────────────────────────────────────────────┘
//!                            ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  sendevent-transport : blocking TCP delivery            │
//! └─────────────────────────────────────────────────────────┘
//!                            ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  sendevent-cli : argument surface, logging, exit codes  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use sendevent_types::Severity;
//!
//! let severity = Severity::resolve("7").unwrap();
//! assert_eq!(severity, Severity::Critical);
//! assert_eq!(severity.name(), "Critical");
//! ```

pub mod constants;
mod error;
mod severity;

pub use constants::{DEFAULT_HOST, DEFAULT_PORT, SOURCE_NAME};
pub use error::ErrorCode;
pub use severity::{Severity, SeverityError};
