//! Ordered vertex schema and its text rendering.

use std::{
    fmt::{self, Display, Formatter, Write as _},
    ops::Deref,
};

use crate::header::PropertyDef;

/// Ordered list of [`PropertyDef`] describing one `vertex` record layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema(pub Vec<PropertyDef>);

impl Schema {
    pub fn new(properties: Vec<PropertyDef>) -> Self {
        Self(properties)
    }

    pub fn as_slice(&self) -> &[PropertyDef] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDef> {
        self.0.iter()
    }

    /// Bytes per record under this schema.
    pub fn stride(&self) -> usize {
        self.0.iter().map(|p| p.scalar.width()).sum()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.name.as_str())
    }
}

impl From<Vec<PropertyDef>> for Schema {
    fn from(value: Vec<PropertyDef>) -> Self {
        Self(value)
    }
}

impl From<Schema> for Vec<PropertyDef> {
    fn from(value: Schema) -> Self {
        value.0
    }
}

impl AsRef<[PropertyDef]> for Schema {
    fn as_ref(&self) -> &[PropertyDef] {
        self.as_slice()
    }
}

impl Deref for Schema {
    type Target = [PropertyDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = format_schema(self.as_slice())?;
        f.write_str(&text)
    }
}

/// Render properties one per line with their declared type, byte width and
/// offset inside the record.
pub fn format_schema(properties: impl AsRef<[PropertyDef]>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let mut offset = 0usize;
    for p in properties.as_ref() {
        writeln!(
            out,
            "{}: {{ type: {}, width: {}, offset: {} }}",
            p.name,
            p.type_name,
            p.scalar.width(),
            offset
        )?;
        offset += p.scalar.width();
    }
    Ok(out)
}
