//! Fixed-width primitive codecs.
//!
//! All integers are written big-endian so the wire format is
//! identical across architectures. Each codec emits exactly its
//! declared width and consumes exactly that width on decode.

use crate::{Codec, Cursor, Error, Value};
use bytes::{BufMut, BytesMut};

macro_rules! impl_fixed {
    ($name:ident, $prim:ty, $put:ident, $label:literal) => {
        #[doc = concat!("Big-endian `", stringify!($prim), "` codec.")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Codec for $name {
            fn write(&self, value: &Value, buf: &mut BytesMut) -> Result<(), Error> {
                match value {
                    Value::$name(v) => {
                        buf.$put(*v);
                        Ok(())
                    }
                    other => Err(Error::malformed(
                        $label,
                        format!("expected {}, got {other:?}", $label),
                    )),
                }
            }

            fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value, Error> {
                const SIZE: usize = std::mem::size_of::<$prim>();
                let raw = cursor.take(SIZE, $label)?;
                let mut be = [0u8; SIZE];
                be.copy_from_slice(raw);
                Ok(Value::$name(<$prim>::from_be_bytes(be)))
            }
        }
    };
}

impl_fixed!(Int8, i8, put_i8, "int8");
impl_fixed!(Int16, i16, put_i16, "int16");
impl_fixed!(Int32, i32, put_i32, "int32");
impl_fixed!(Int64, i64, put_i64, "int64");

/// Single-byte boolean codec: false is 0x00, true is 0x01.
///
/// Any nonzero byte decodes as true, matching the pack convention of
/// the wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boolean;

impl Codec for Boolean {
    fn write(&self, value: &Value, buf: &mut BytesMut) -> Result<(), Error> {
        match value {
            Value::Boolean(v) => {
                buf.put_u8(u8::from(*v));
                Ok(())
            }
            other => Err(Error::malformed(
                "boolean",
                format!("expected boolean, got {other:?}"),
            )),
        }
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value, Error> {
        let raw = cursor.take(1, "boolean")?;
        Ok(Value::Boolean(raw[0] != 0))
    }
}
