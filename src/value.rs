//! Dynamic values carried through the codec tree.

use bytes::Bytes;

/// A wire value, as produced by decode and consumed by encode.
///
/// Schemas are assembled at protocol-definition time, so codecs
/// exchange values through this enum rather than through static Rust
/// types. Null strings, blobs, and arrays are `None`; a schema
/// decodes to [`Value::Tuple`] with one entry per field, in field
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Boolean(bool),
    String(Option<String>),
    Bytes(Option<Bytes>),
    Array(Option<Vec<Value>>),
    Tuple(Vec<Value>),
    TaggedField { tag: u32, data: Option<Bytes> },
}

impl Value {
    /// A non-null string value.
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(Some(text.into()))
    }

    /// A non-null blob value.
    pub fn bytes(data: impl Into<Bytes>) -> Self {
        Self::Bytes(Some(data.into()))
    }

    /// A non-null array value.
    pub fn array(items: Vec<Value>) -> Self {
        Self::Array(Some(items))
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Self::Int8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Self::Int16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// The text of a non-null string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(Some(text)) => Some(text),
            _ => None,
        }
    }

    /// The payload of a non-null blob value.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(Some(data)) => Some(data),
            _ => None,
        }
    }

    /// The fields of a decoded schema.
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// The elements of a non-null array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(Some(items)) => Some(items),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($prim:ty, $variant:ident) => {
        impl From<$prim> for Value {
            fn from(v: $prim) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_from!(i8, Int8);
impl_from!(i16, Int16);
impl_from!(i32, Int32);
impl_from!(i64, Int64);
impl_from!(bool, Boolean);

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::string(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Some(text))
    }
}
