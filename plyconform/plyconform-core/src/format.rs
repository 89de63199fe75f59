use std::fmt;

/// Body encodings a PLY `format` line may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `ascii`
    Ascii,
    /// `binary_little_endian`
    BinaryLittleEndian,
    /// `binary_big_endian`
    BinaryBigEndian,
}

/// Byte order of a binary body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::BinaryLittleEndian => "binary_little_endian",
            Self::BinaryBigEndian => "binary_big_endian",
        }
    }

    /// Look up a format by its header spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ascii" => Some(Self::Ascii),
            "binary_little_endian" => Some(Self::BinaryLittleEndian),
            "binary_big_endian" => Some(Self::BinaryBigEndian),
            _ => None,
        }
    }

    /// Byte order of the body, or `None` for ASCII bodies.
    pub fn endianness(&self) -> Option<Endianness> {
        match self {
            Self::Ascii => None,
            Self::BinaryLittleEndian => Some(Endianness::Little),
            Self::BinaryBigEndian => Some(Endianness::Big),
        }
    }

    pub fn is_binary(&self) -> bool {
        self.endianness().is_some()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
