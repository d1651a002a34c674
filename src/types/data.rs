//! Variable-length string and byte-blob codecs.
//!
//! The length prefix is an injected strategy shared by the classic
//! and compact variants, so the payload handling is written once.

use crate::{varint, Codec, Cursor, Error, Value};
use bytes::{BufMut, Bytes, BytesMut};
use std::borrow::Cow;

/// Length-prefix strategy for variable-length types, fixed at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPrefix {
    /// Big-endian `i16` prefix (classic strings).
    Int16,
    /// Big-endian `i32` prefix (classic blobs and arrays).
    Int32,
    /// Unsigned varint biased by one (compact variants); stored 0
    /// denotes null.
    Varint,
}

impl LengthPrefix {
    pub(crate) fn write(
        &self,
        len: i32,
        buf: &mut BytesMut,
        codec: &'static str,
    ) -> Result<(), Error> {
        match self {
            Self::Int16 => {
                let len = i16::try_from(len).map_err(|_| {
                    Error::malformed(codec, format!("length {len} does not fit an i16 prefix"))
                })?;
                buf.put_i16(len);
            }
            Self::Int32 => buf.put_i32(len),
            Self::Varint => varint::write_length(len, buf),
        }
        Ok(())
    }

    pub(crate) fn read(
        &self,
        cursor: &mut Cursor<'_>,
        codec: &'static str,
    ) -> Result<i32, Error> {
        match self {
            Self::Int16 => {
                let raw = cursor.take(2, codec)?;
                Ok(i32::from(i16::from_be_bytes([raw[0], raw[1]])))
            }
            Self::Int32 => {
                let raw = cursor.take(4, codec)?;
                Ok(i32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
            }
            Self::Varint => varint::read_length(cursor),
        }
    }
}

/// Text encoding applied by [`Text`] when transcoding between string
/// values and payload bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    fn encode<'a>(&self, text: &'a str, codec: &'static str) -> Result<Cow<'a, [u8]>, Error> {
        match self {
            Self::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            Self::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        Error::malformed(codec, format!("{c:?} is not representable in latin-1"))
                    })
                })
                .collect::<Result<Vec<u8>, Error>>()
                .map(Cow::Owned),
        }
    }

    fn decode(&self, raw: &[u8], codec: &'static str) -> Result<String, Error> {
        match self {
            Self::Utf8 => std::str::from_utf8(raw)
                .map(str::to_owned)
                .map_err(|err| Error::malformed(codec, format!("invalid utf-8 payload: {err}"))),
            Self::Latin1 => Ok(raw.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

const STRING: &str = "string";

/// Length-prefixed text codec.
///
/// The classic variant carries a big-endian `i16` length prefix; the
/// compact variant a varint bias-by-one prefix. A prefix of -1
/// (stored 0 for compact) denotes the null string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    encoding: TextEncoding,
    prefix: LengthPrefix,
}

impl Text {
    /// Classic variant: `i16` length prefix, UTF-8 text.
    pub fn new() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            prefix: LengthPrefix::Int16,
        }
    }

    /// Compact variant: varint bias-by-one length prefix.
    pub fn compact() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            prefix: LengthPrefix::Varint,
        }
    }

    /// Overrides the text encoding (UTF-8 by default).
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for Text {
    fn write(&self, value: &Value, buf: &mut BytesMut) -> Result<(), Error> {
        let text = match value {
            Value::String(None) => return self.prefix.write(-1, buf, STRING),
            Value::String(Some(text)) => text,
            other => {
                return Err(Error::malformed(
                    STRING,
                    format!("expected string, got {other:?}"),
                ))
            }
        };
        let payload = self.encoding.encode(text, STRING)?;
        let len = i32::try_from(payload.len()).map_err(|_| {
            Error::malformed(
                STRING,
                format!("payload of {} bytes exceeds an i32 length", payload.len()),
            )
        })?;
        self.prefix.write(len, buf, STRING)?;
        buf.put_slice(&payload);
        Ok(())
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value, Error> {
        let len = self.prefix.read(cursor, STRING)?;
        if len < 0 {
            return Ok(Value::String(None));
        }
        let raw = cursor.take(len as usize, STRING)?;
        Ok(Value::String(Some(self.encoding.decode(raw, STRING)?)))
    }
}

const BYTES: &str = "bytes";

/// Length-prefixed raw byte codec.
///
/// The classic variant carries a big-endian `i32` length prefix; the
/// compact variant a varint bias-by-one prefix. A prefix of -1
/// (stored 0 for compact) denotes the null blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blob {
    prefix: LengthPrefix,
}

impl Blob {
    /// Classic variant: `i32` length prefix.
    pub fn new() -> Self {
        Self {
            prefix: LengthPrefix::Int32,
        }
    }

    /// Compact variant: varint bias-by-one length prefix.
    pub fn compact() -> Self {
        Self {
            prefix: LengthPrefix::Varint,
        }
    }
}

impl Default for Blob {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for Blob {
    fn write(&self, value: &Value, buf: &mut BytesMut) -> Result<(), Error> {
        let data = match value {
            Value::Bytes(None) => return self.prefix.write(-1, buf, BYTES),
            Value::Bytes(Some(data)) => data,
            other => {
                return Err(Error::malformed(
                    BYTES,
                    format!("expected bytes, got {other:?}"),
                ))
            }
        };
        let len = i32::try_from(data.len()).map_err(|_| {
            Error::malformed(
                BYTES,
                format!("payload of {} bytes exceeds an i32 length", data.len()),
            )
        })?;
        self.prefix.write(len, buf, BYTES)?;
        buf.put_slice(data);
        Ok(())
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value, Error> {
        let len = self.prefix.read(cursor, BYTES)?;
        if len < 0 {
            return Ok(Value::Bytes(None));
        }
        let raw = cursor.take(len as usize, BYTES)?;
        Ok(Value::Bytes(Some(Bytes::copy_from_slice(raw))))
    }

    fn describe(&self, value: &Value) -> String {
        match value {
            // Long payloads are truncated to keep diagnostics legible.
            Value::Bytes(Some(data)) if data.len() > 100 => {
                format!("{:?}... ({} bytes)", &data[..100], data.len())
            }
            _ => format!("{value:?}"),
        }
    }
}
