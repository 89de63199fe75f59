//! Closed registry of fixed-width PLY scalar types.
//!
//! Every type knows its byte width and how to decode itself into, and
//! encode itself from, the uniform `f32` column representation under a
//! given [`Endianness`]. The reader and the writer both go through this
//! table, so a value decoded and re-encoded with the same type and byte
//! order reproduces the input bytes.

use std::{fmt, str::FromStr};

use bytes::{Buf, BufMut};

use crate::{error::HeaderError, format::Endianness};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
}

impl ScalarType {
    pub const ALL: [ScalarType; 8] = [
        ScalarType::I8,
        ScalarType::U8,
        ScalarType::I16,
        ScalarType::U16,
        ScalarType::I32,
        ScalarType::U32,
        ScalarType::F32,
        ScalarType::F64,
    ];

    /// Resolve a header type name. Both the classic spellings (`uchar`,
    /// `float`, ...) and the sized aliases (`uint8`, `float32`, ...) are
    /// accepted; matching is case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, HeaderError> {
        Ok(match name {
            "char" | "int8" => Self::I8,
            "uchar" | "uint8" => Self::U8,
            "short" | "int16" => Self::I16,
            "ushort" | "uint16" => Self::U16,
            "int" | "int32" => Self::I32,
            "uint" | "uint32" => Self::U32,
            "float" | "float32" => Self::F32,
            "double" | "float64" => Self::F64,
            other => {
                return Err(HeaderError::UnsupportedScalarType {
                    type_name: other.to_string(),
                });
            }
        })
    }

    /// Classic PLY spelling of the type.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::I8 => "char",
            Self::U8 => "uchar",
            Self::I16 => "short",
            Self::U16 => "ushort",
            Self::I32 => "int",
            Self::U32 => "uint",
            Self::F32 => "float",
            Self::F64 => "double",
        }
    }

    /// Size of one encoded value in bytes.
    pub fn width(&self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// Decode one value from the front of `buf` and widen it to `f32`.
    ///
    /// # Panics
    ///
    /// Panics if `buf` holds fewer than [`width`](Self::width) bytes.
    pub fn decode(&self, buf: &mut impl Buf, endianness: Endianness) -> f32 {
        let le = endianness == Endianness::Little;
        match self {
            Self::I8 => buf.get_i8() as f32,
            Self::U8 => buf.get_u8() as f32,
            Self::I16 if le => buf.get_i16_le() as f32,
            Self::I16 => buf.get_i16() as f32,
            Self::U16 if le => buf.get_u16_le() as f32,
            Self::U16 => buf.get_u16() as f32,
            Self::I32 if le => buf.get_i32_le() as f32,
            Self::I32 => buf.get_i32() as f32,
            Self::U32 if le => buf.get_u32_le() as f32,
            Self::U32 => buf.get_u32() as f32,
            Self::F32 if le => buf.get_f32_le(),
            Self::F32 => buf.get_f32(),
            Self::F64 if le => buf.get_f64_le() as f32,
            Self::F64 => buf.get_f64() as f32,
        }
    }

    /// Encode `value` into `buf`.
    ///
    /// Integer targets round to nearest and saturate at the type bounds;
    /// NaN encodes as zero.
    pub fn encode(&self, value: f32, buf: &mut impl BufMut, endianness: Endianness) {
        let le = endianness == Endianness::Little;
        let int = value.round();
        match self {
            Self::I8 => buf.put_i8(int as i8),
            Self::U8 => buf.put_u8(int as u8),
            Self::I16 if le => buf.put_i16_le(int as i16),
            Self::I16 => buf.put_i16(int as i16),
            Self::U16 if le => buf.put_u16_le(int as u16),
            Self::U16 => buf.put_u16(int as u16),
            Self::I32 if le => buf.put_i32_le(int as i32),
            Self::I32 => buf.put_i32(int as i32),
            Self::U32 if le => buf.put_u32_le(int as u32),
            Self::U32 => buf.put_u32(int as u32),
            Self::F32 if le => buf.put_f32_le(value),
            Self::F32 => buf.put_f32(value),
            Self::F64 if le => buf.put_f64_le(f64::from(value)),
            Self::F64 => buf.put_f64(f64::from(value)),
        }
    }
}

impl FromStr for ScalarType {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
