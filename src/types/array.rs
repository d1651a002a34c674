//! Homogeneous length-prefixed sequences.

use super::{LengthPrefix, Schema};
use crate::{Codec, Cursor, Error, Value};
use bytes::BytesMut;

/// Capacity hint ceiling when decoding, so an attacker-controlled
/// length cannot force a large allocation before any element has
/// actually been decoded.
const MAX_CAPACITY_HINT: usize = 1024;

const ARRAY: &str = "array";

/// A length-prefixed homogeneous sequence.
///
/// The element codec may be any codec in this crate, including a
/// [`Schema`] or another `Array`, so nesting depth is arbitrary. A
/// length prefix of -1 (stored 0 for the compact variant) denotes the
/// null array.
pub struct Array {
    prefix: LengthPrefix,
    elem: Box<dyn Codec>,
}

impl Array {
    /// Classic variant: big-endian `i32` length prefix.
    pub fn new(elem: impl Codec + 'static) -> Self {
        Self {
            prefix: LengthPrefix::Int32,
            elem: Box::new(elem),
        }
    }

    /// Compact variant: varint bias-by-one length prefix.
    pub fn compact(elem: impl Codec + 'static) -> Self {
        Self {
            prefix: LengthPrefix::Varint,
            elem: Box::new(elem),
        }
    }

    /// Classic array whose element type is an implicit [`Schema`]
    /// built from `fields`.
    pub fn of_fields(fields: Vec<(&str, Box<dyn Codec>)>) -> Self {
        Self::new(Schema::new(fields))
    }

    /// Compact array whose element type is an implicit [`Schema`]
    /// built from `fields`.
    pub fn compact_of_fields(fields: Vec<(&str, Box<dyn Codec>)>) -> Self {
        Self::compact(Schema::new(fields))
    }
}

impl Codec for Array {
    fn write(&self, value: &Value, buf: &mut BytesMut) -> Result<(), Error> {
        let items = match value {
            Value::Array(None) => return self.prefix.write(-1, buf, ARRAY),
            Value::Array(Some(items)) => items,
            other => {
                return Err(Error::malformed(
                    ARRAY,
                    format!("expected array, got {other:?}"),
                ))
            }
        };
        let len = i32::try_from(items.len()).map_err(|_| {
            Error::malformed(
                ARRAY,
                format!("{} items exceed an i32 length", items.len()),
            )
        })?;
        self.prefix.write(len, buf, ARRAY)?;
        for item in items {
            self.elem.write(item, buf)?;
        }
        Ok(())
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value, Error> {
        let len = self.prefix.read(cursor, ARRAY)?;
        if len < 0 {
            return Ok(Value::Array(None));
        }
        let len = len as usize;
        let mut items = Vec::with_capacity(len.min(MAX_CAPACITY_HINT));
        for _ in 0..len {
            items.push(self.elem.decode(cursor)?);
        }
        Ok(Value::Array(Some(items)))
    }

    fn describe(&self, value: &Value) -> String {
        match value {
            Value::Array(None) => "NULL".to_owned(),
            Value::Array(Some(items)) => {
                let rendered: Vec<String> =
                    items.iter().map(|item| self.elem.describe(item)).collect();
                format!("[{}]", rendered.join(", "))
            }
            other => format!("{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Int32, Text};

    #[test]
    fn test_roundtrip() {
        let codec = Array::new(Int32);
        let value = Value::array(vec![Value::Int32(1), Value::Int32(2), Value::Int32(3)]);
        let encoded = codec.encode(&value).unwrap();
        // i32 length prefix plus three i32 elements.
        assert_eq!(encoded.len(), 4 + 3 * 4);
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(codec.decode(&mut cursor).unwrap(), value);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_null() {
        let codec = Array::new(Int32);
        let encoded = codec.encode(&Value::Array(None)).unwrap();
        assert_eq!(&encoded[..], &[0xFF, 0xFF, 0xFF, 0xFF]);
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(codec.decode(&mut cursor).unwrap(), Value::Array(None));

        let compact = Array::compact(Int32);
        let encoded = compact.encode(&Value::Array(None)).unwrap();
        assert_eq!(&encoded[..], &[0x00]);
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(compact.decode(&mut cursor).unwrap(), Value::Array(None));
    }

    #[test]
    fn test_empty_is_not_null() {
        let codec = Array::compact(Int32);
        let empty = Value::array(vec![]);
        let encoded = codec.encode(&empty).unwrap();
        assert_eq!(&encoded[..], &[0x01]);
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(codec.decode(&mut cursor).unwrap(), empty);
    }

    #[test]
    fn test_array_of_schema() {
        let codec = Array::of_fields(vec![("id", Int32.boxed()), ("name", Text::new().boxed())]);
        let value = Value::array(vec![
            Value::Tuple(vec![Value::Int32(1), Value::string("a")]),
            Value::Tuple(vec![Value::Int32(2), Value::string("bb")]),
        ]);
        let encoded = codec.encode(&value).unwrap();
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(codec.decode(&mut cursor).unwrap(), value);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_nested_arrays() {
        let codec = Array::new(Array::compact(Int32));
        let value = Value::array(vec![
            Value::array(vec![Value::Int32(1)]),
            Value::Array(None),
            Value::array(vec![]),
        ]);
        let encoded = codec.encode(&value).unwrap();
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(codec.decode(&mut cursor).unwrap(), value);
    }

    #[test]
    fn test_oversized_length_fails_cleanly() {
        // Claims i32::MAX elements with no payload: element decoding
        // must fail on underrun rather than allocating up front.
        let mut cursor = Cursor::new(&[0x7F, 0xFF, 0xFF, 0xFF]);
        let err = Array::new(Int32).decode(&mut cursor).unwrap_err();
        assert!(matches!(err, Error::BufferUnderrun { .. }));
    }

    #[test]
    fn test_describe() {
        let codec = Array::new(Int32);
        assert_eq!(codec.describe(&Value::Array(None)), "NULL");
        assert_eq!(
            codec.describe(&Value::array(vec![Value::Int32(1), Value::Int32(2)])),
            "[Int32(1), Int32(2)]"
        );
    }
}
