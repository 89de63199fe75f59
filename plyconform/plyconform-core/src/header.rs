use std::fmt;

use crate::{error::HeaderError, format::Format, scalar::ScalarType};

/// One scalar property of the `vertex` element.
///
/// `type_name` keeps the spelling used in the declaring header (`uchar` vs
/// `uint8`) so a regenerated header lists the type exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyDef {
    pub name: String,
    pub scalar: ScalarType,
    pub type_name: String,
}

impl PropertyDef {
    /// Property declared with the classic spelling of `scalar`.
    pub fn new(scalar: ScalarType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scalar,
            type_name: scalar.canonical_name().to_string(),
        }
    }

    /// Property declared as `property <type_name> <name>`.
    pub fn parse(type_name: &str, name: impl Into<String>) -> Result<Self, HeaderError> {
        Ok(Self {
            name: name.into(),
            scalar: type_name.parse::<ScalarType>()?,
            type_name: type_name.to_string(),
        })
    }
}

impl fmt::Display for PropertyDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property {} {}", self.type_name, self.name)
    }
}

/// Parsed PLY header, restricted to what the `vertex` element needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub format: Format,
    pub version: String,
    pub vertex_count: usize,
    /// Scalar properties of `vertex`, in declaration order.
    pub vertex_properties: Vec<PropertyDef>,
    /// Every header line from `ply` to `end_header`, without terminators.
    pub raw_header_lines: Vec<String>,
    /// Byte offset of the first body byte.
    pub data_start_offset: u64,
}

impl Header {
    /// Bytes per `vertex` record.
    pub fn stride(&self) -> usize {
        self.vertex_properties.iter().map(|p| p.scalar.width()).sum()
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.vertex_properties.iter().map(|p| p.name.as_str())
    }

    /// One-line-plus-names description of this header for operators.
    pub fn summary(&self, label: impl Into<String>) -> HeaderSummary<'_> {
        HeaderSummary {
            label: label.into(),
            header: self,
        }
    }
}

/// Display adapter returned by [`Header::summary`].
///
/// ```text
/// train.ply: format=binary_little_endian vertex=2 props=3
///   [x, y, z]
/// ```
pub struct HeaderSummary<'a> {
    label: String,
    header: &'a Header,
}

impl fmt::Display for HeaderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.header;
        writeln!(
            f,
            "{}: format={} vertex={} props={}",
            self.label,
            h.format,
            h.vertex_count,
            h.vertex_properties.len()
        )?;
        let names: Vec<&str> = h.property_names().collect();
        write!(f, "  [{}]", names.join(", "))
    }
}
