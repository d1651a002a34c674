#![no_main]

use libfuzzer_sys::fuzz_target;
use wiretype::types::{Array, Blob, Boolean, Int16, Int32, Int64, Int8, Schema, TaggedField, Text};
use wiretype::{Codec, Cursor};

fn deep_schema() -> Schema {
    Schema::new(vec![
        ("a", Int8.boxed()),
        ("b", Int16.boxed()),
        ("c", Int64.boxed()),
        ("d", Boolean.boxed()),
        ("e", Text::compact().boxed()),
        ("f", Blob::new().boxed()),
        (
            "g",
            Array::compact_of_fields(vec![
                ("x", Int32.boxed()),
                ("y", Array::new(Text::new()).boxed()),
            ])
            .boxed(),
        ),
        ("h", TaggedField.boxed()),
    ])
}

fuzz_target!(|data: &[u8]| {
    let schema = deep_schema();
    let mut cursor = Cursor::new(data);
    if let Ok(value) = schema.decode(&mut cursor) {
        // Anything that decodes must re-encode and decode to the
        // same value.
        let encoded = schema.encode(&value).expect("re-encode decoded value");
        let mut cursor = Cursor::new(&encoded);
        assert_eq!(schema.decode(&mut cursor).expect("roundtrip"), value);
    }
});
