//! XML text helpers shared by the encoder and the template loader.

pub mod escape;

pub use escape::{EscapePolicy, escape_xml, forbidden_xml_char, unescape_xml};
