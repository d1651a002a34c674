//! Concrete codec implementations

mod array;
mod data;
mod primitives;
mod schema;
mod tagged;

pub use array::Array;
pub use data::{Blob, LengthPrefix, Text, TextEncoding};
pub use primitives::{Boolean, Int16, Int32, Int64, Int8};
pub use schema::Schema;
pub use tagged::TaggedField;
