//! Tagged extension fields for flexible protocol versions.

use crate::{varint, Codec, Cursor, Error, Value};
use bytes::{BufMut, Bytes, BytesMut};

const TAGGED: &str = "tagged field";

/// A `(tag, raw bytes)` pair carrying optional extension data.
///
/// Readers unaware of a tag can skip it or round-trip it untouched,
/// since the payload is opaque bytes with no semantic interpretation
/// at this layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaggedField;

impl Codec for TaggedField {
    fn write(&self, value: &Value, buf: &mut BytesMut) -> Result<(), Error> {
        let (tag, data) = match value {
            Value::TaggedField { tag, data } => (*tag, data.as_ref()),
            other => {
                return Err(Error::malformed(
                    TAGGED,
                    format!("expected tagged field, got {other:?}"),
                ))
            }
        };
        varint::write_unsigned(tag, buf);
        match data {
            None => varint::write_length(-1, buf),
            Some(data) => {
                let len = i32::try_from(data.len()).map_err(|_| {
                    Error::malformed(
                        TAGGED,
                        format!("payload of {} bytes exceeds an i32 length", data.len()),
                    )
                })?;
                varint::write_length(len, buf);
                buf.put_slice(data);
            }
        }
        Ok(())
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value, Error> {
        let tag = varint::read_unsigned(cursor)?;
        let len = varint::read_length(cursor)?;
        let data = if len < 0 {
            None
        } else {
            Some(Bytes::copy_from_slice(cursor.take(len as usize, TAGGED)?))
        };
        Ok(Value::TaggedField { tag, data })
    }
}
