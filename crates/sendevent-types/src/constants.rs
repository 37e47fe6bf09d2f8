//! Wire-protocol constants.
//!
//! Tag names and default connection parameters for the eventd XML
//! protocol. The receiving server matches on these byte-for-byte, so they
//! live here as named constants rather than inline literals.

/// Default OpenNMS server to send events to.
pub const DEFAULT_HOST: &str = "localhost";

/// Default eventd TCP port.
pub const DEFAULT_PORT: &str = "5817";

/// Fixed `<source>` label. Eventd configurations key on this value, so it
/// keeps the name the tool has always reported on the wire.
pub const SOURCE_NAME: &str = "jsendevent";

/// Root element `<log>`.
pub const TAG_LOG: &str = "log";
/// `<events>` wrapper.
pub const TAG_EVENTS: &str = "events";
/// `<event>` element.
pub const TAG_EVENT: &str = "event";
/// `<uei>` element.
pub const TAG_UEI: &str = "uei";
/// `<source>` element.
pub const TAG_SOURCE: &str = "source";
/// `<nodeid>` element.
pub const TAG_NODEID: &str = "nodeid";
/// `<time>` element.
pub const TAG_TIME: &str = "time";
/// `<host>` element.
pub const TAG_HOST: &str = "host";
/// `<interface>` element.
pub const TAG_INTERFACE: &str = "interface";
/// `<service>` element.
pub const TAG_SERVICE: &str = "service";
/// `<severity>` element.
pub const TAG_SEVERITY: &str = "severity";
/// `<descr>` element.
pub const TAG_DESCR: &str = "descr";
/// `<operinstruct>` element.
pub const TAG_OPERINSTRUCT: &str = "operinstruct";
/// `<parms>` wrapper.
pub const TAG_PARMS: &str = "parms";
/// `<parm>` element.
pub const TAG_PARM: &str = "parm";
/// `<parmName>` element.
pub const TAG_PARM_NAME: &str = "parmName";
/// `<value>` element.
pub const TAG_VALUE: &str = "value";

/// Fixed `type` attribute on parameter `<value>` elements.
pub const VALUE_TYPE: &str = "string";
/// Fixed `encoding` attribute on parameter `<value>` elements.
pub const VALUE_ENCODING: &str = "text";
