//! Integration tests driving a realistic nested message schema
//! through the full codec tree.

use bytes::Bytes;
use wiretype::types::{Array, Blob, Boolean, Int16, Int32, Schema, TaggedField, Text};
use wiretype::{Codec, Cursor, Error, Value};

/// A metadata-style response: classic and compact types mixed the way
/// a flexible protocol version mixes them.
fn metadata_response() -> Schema {
    Schema::new(vec![
        ("correlation_id", Int32.boxed()),
        ("throttle_time_ms", Int32.boxed()),
        (
            "brokers",
            Array::of_fields(vec![
                ("node_id", Int32.boxed()),
                ("host", Text::new().boxed()),
                ("port", Int32.boxed()),
                ("rack", Text::new().boxed()),
            ])
            .boxed(),
        ),
        ("cluster_id", Text::new().boxed()),
        (
            "topics",
            Array::compact(Schema::new(vec![
                ("error_code", Int16.boxed()),
                ("name", Text::compact().boxed()),
                ("is_internal", Boolean.boxed()),
                (
                    "partitions",
                    Array::compact_of_fields(vec![
                        ("partition_index", Int32.boxed()),
                        ("leader_id", Int32.boxed()),
                        ("offline_replicas", Array::compact(Int32).boxed()),
                    ])
                    .boxed(),
                ),
            ]))
            .boxed(),
        ),
        ("assignment", Blob::compact().boxed()),
        ("extension", TaggedField.boxed()),
    ])
}

fn sample_value() -> Value {
    Value::Tuple(vec![
        Value::Int32(42),
        Value::Int32(0),
        Value::array(vec![
            Value::Tuple(vec![
                Value::Int32(0),
                Value::string("broker-0.internal"),
                Value::Int32(9092),
                Value::String(None),
            ]),
            Value::Tuple(vec![
                Value::Int32(1),
                Value::string("broker-1.internal"),
                Value::Int32(9092),
                Value::string("rack-b"),
            ]),
        ]),
        Value::string("cluster-1"),
        Value::array(vec![Value::Tuple(vec![
            Value::Int16(0),
            Value::string("events"),
            Value::Boolean(false),
            Value::array(vec![
                Value::Tuple(vec![
                    Value::Int32(0),
                    Value::Int32(1),
                    Value::array(vec![Value::Int32(2), Value::Int32(3)]),
                ]),
                Value::Tuple(vec![
                    Value::Int32(1),
                    Value::Int32(2),
                    Value::array(vec![]),
                ]),
            ]),
        ])]),
        Value::bytes(Bytes::from_static(&[0x01, 0x02, 0x03])),
        Value::TaggedField {
            tag: 7,
            data: Some(Bytes::from_static(&[0xCA, 0xFE])),
        },
    ])
}

#[test]
fn test_message_roundtrip() {
    let schema = metadata_response();
    let value = sample_value();

    let encoded = schema.encode(&value).unwrap();
    let mut cursor = Cursor::new(&encoded);
    let decoded = schema.decode(&mut cursor).unwrap();

    assert_eq!(decoded, value);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_message_with_nulls() {
    let schema = metadata_response();
    let value = Value::Tuple(vec![
        Value::Int32(1),
        Value::Int32(5),
        Value::Array(None),
        Value::String(None),
        Value::Array(None),
        Value::Bytes(None),
        Value::TaggedField { tag: 0, data: None },
    ]);

    let encoded = schema.encode(&value).unwrap();
    let mut cursor = Cursor::new(&encoded);
    assert_eq!(schema.decode(&mut cursor).unwrap(), value);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_truncated_message_fails() {
    let schema = metadata_response();
    let encoded = schema.encode(&sample_value()).unwrap();

    // Every proper prefix of the message must fail to decode, never
    // produce a partial value.
    for cut in 0..encoded.len() {
        let mut cursor = Cursor::new(&encoded[..cut]);
        let err = schema.decode(&mut cursor).unwrap_err();
        assert!(
            matches!(err, Error::BufferUnderrun { .. }),
            "cut at {cut}: {err}"
        );
    }
}

#[test]
fn test_describe_names_fields() {
    let schema = metadata_response();
    let rendered = schema.describe(&sample_value());

    assert!(rendered.starts_with("(correlation_id=Int32(42)"));
    assert!(rendered.contains("host=String(Some(\"broker-0.internal\"))"));
    assert!(rendered.contains("partitions=["));
    assert!(rendered.contains("offline_replicas=[Int32(2), Int32(3)]"));
}

#[test]
fn test_shared_schema_across_threads() {
    // One immutable schema instance serving concurrent encode and
    // decode calls over independent buffers.
    let schema = std::sync::Arc::new(metadata_response());
    let value = sample_value();
    let encoded = schema.encode(&value).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = schema.clone();
            let value = value.clone();
            let encoded = encoded.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    let mut cursor = Cursor::new(&encoded);
                    assert_eq!(schema.decode(&mut cursor).unwrap(), value);
                    assert_eq!(schema.encode(&value).unwrap(), encoded);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
