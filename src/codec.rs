//! Core codec trait

use crate::{Cursor, Error, Value};
use bytes::BytesMut;

/// Capability shared by every codec in this crate.
///
/// A codec turns a [`Value`] into its exact byte encoding and back.
/// Codecs are immutable after construction and `Send + Sync`, so one
/// instance may serve concurrent encode/decode calls against
/// independent buffers with no locking.
///
/// Composite codecs ([`crate::types::Schema`], [`crate::types::Array`])
/// hold their children as `Box<dyn Codec>`, so codec trees nest to
/// arbitrary depth decided at run time.
pub trait Codec: Send + Sync {
    /// Appends the exact encoding of `value` to `buf`.
    fn write(&self, value: &Value, buf: &mut BytesMut) -> Result<(), Error>;

    /// Decodes one value, advancing the cursor past the bytes
    /// consumed.
    ///
    /// On failure the cursor position is unspecified; callers must
    /// abandon the buffer rather than resume from it.
    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value, Error>;

    /// Best-effort human-readable rendering for diagnostics.
    ///
    /// (Provided method).
    fn describe(&self, value: &Value) -> String {
        format!("{value:?}")
    }

    /// Encodes `value` into a freshly allocated buffer.
    ///
    /// (Provided method).
    fn encode(&self, value: &Value) -> Result<BytesMut, Error> {
        let mut buf = BytesMut::new();
        self.write(value, &mut buf)?;
        Ok(buf)
    }

    /// Boxes this codec for use as a schema field or array element.
    fn boxed(self) -> Box<dyn Codec>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}
