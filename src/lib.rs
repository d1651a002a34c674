//! Typed binary codecs for a length-prefixed broker wire protocol.
//!
//! # Overview
//!
//! A codec library designed to:
//! - Serialize typed values into the exact byte sequences of a
//!   schema-driven, length-prefixed wire format
//! - Deserialize untrusted binary input back into structured values
//!
//! Protocol messages are described by [`types::Schema`] values built
//! at protocol-definition time: an ordered list of named fields, each
//! governed by its own codec. Schemas compose recursively through
//! [`types::Array`], so a field can be an array of schemas of arrays
//! to arbitrary depth. Every codec implements the [`Codec`] trait and
//! is immutable once constructed, so a single instance serves
//! concurrent encode/decode calls.
//!
//! # Supported Types
//!
//! - Fixed-width big-endian primitives: [`types::Int8`],
//!   [`types::Int16`], [`types::Int32`], [`types::Int64`],
//!   [`types::Boolean`]
//! - Length-prefixed data: [`types::Text`] and [`types::Blob`], each
//!   with a classic (fixed-width prefix) and compact (varint
//!   bias-by-one prefix) variant; a prefix of -1 denotes null
//! - Composites: [`types::Schema`] and [`types::Array`]
//! - [`types::TaggedField`] for forward-compatible protocol
//!   extension data
//! - Raw varints via the [`varint`] module (unsigned LEB128-style,
//!   ZigZag signed, and the bias-by-one compact length form)
//!
//! # Example
//!
//! ```
//! use wiretype::{Codec, Cursor, Value};
//! use wiretype::types::{Array, Int32, Schema, Text};
//!
//! // Protocol definitions are built once and reused.
//! let message = Schema::new(vec![
//!     ("correlation_id", Int32.boxed()),
//!     (
//!         "topics",
//!         Array::of_fields(vec![
//!             ("id", Int32.boxed()),
//!             ("name", Text::new().boxed()),
//!         ])
//!         .boxed(),
//!     ),
//! ]);
//!
//! let value = Value::Tuple(vec![
//!     Value::Int32(7),
//!     Value::array(vec![
//!         Value::Tuple(vec![Value::Int32(1), Value::string("logs")]),
//!     ]),
//! ]);
//!
//! let encoded = message.encode(&value).unwrap();
//! let mut cursor = Cursor::new(&encoded);
//! assert_eq!(message.decode(&mut cursor).unwrap(), value);
//! ```

pub mod codec;
pub mod cursor;
pub mod error;
pub mod types;
pub mod value;
pub mod varint;

// Re-export main types and traits
pub use codec::Codec;
pub use cursor::Cursor;
pub use error::Error;
pub use value::Value;
