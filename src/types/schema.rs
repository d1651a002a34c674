//! Ordered, named, heterogeneous field composition.

use crate::{Codec, Cursor, Error, Value};
use bytes::BytesMut;

struct Field {
    name: String,
    codec: Box<dyn Codec>,
}

/// An ordered tuple of named fields, each governed by its own codec.
///
/// Field names exist for diagnostics only; encode and decode operate
/// purely positionally. A schema is built once at protocol-definition
/// time and reused across calls.
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Builds a schema from ordered `(name, codec)` pairs.
    pub fn new(fields: Vec<(&str, Box<dyn Codec>)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, codec)| Field {
                    name: name.to_owned(),
                    codec,
                })
                .collect(),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Codec for Schema {
    fn write(&self, value: &Value, buf: &mut BytesMut) -> Result<(), Error> {
        let items = match value {
            Value::Tuple(items) => items,
            other => {
                return Err(Error::malformed(
                    "schema",
                    format!("expected tuple, got {other:?}"),
                ))
            }
        };
        if items.len() != self.fields.len() {
            return Err(Error::ArityMismatch {
                expected: self.fields.len(),
                actual: items.len(),
            });
        }
        for (field, item) in self.fields.iter().zip(items) {
            field.codec.write(item, buf)?;
        }
        Ok(())
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value, Error> {
        // Fields decode strictly in declared order; a failure midway
        // leaves the cursor where it stopped.
        let mut items = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            items.push(field.codec.decode(cursor)?);
        }
        Ok(Value::Tuple(items))
    }

    fn describe(&self, value: &Value) -> String {
        match value {
            Value::Tuple(items) if items.len() == self.fields.len() => {
                let pairs: Vec<String> = self
                    .fields
                    .iter()
                    .zip(items)
                    .map(|(field, item)| {
                        format!("{}={}", field.name, field.codec.describe(item))
                    })
                    .collect();
                format!("({})", pairs.join(", "))
            }
            other => format!("{other:?}"),
        }
    }
}
