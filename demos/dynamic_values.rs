//! Working with `Value` trees and the `toon!` macro, including decoding
//! documents whose structure is unknown at compile time.
//!
//! Run with: `cargo run --example dynamic_values`

use toon_codec::{decode, encode, toon, DecodeOptions, EncodeOptions, PathExpansion, Value};

fn main() -> toon_codec::Result<()> {
    let report = toon!({
        "generated_by": "sensor-7",
        "readings": [
            { "t": 0, "celsius": 21.5 },
            { "t": 60, "celsius": 21.7 },
            { "t": 120, "celsius": 22.1 }
        ]
    });

    let text = encode(&report, &EncodeOptions::default())?;
    println!("{text}\n");

    let value = decode(&text, &DecodeOptions::default())?;
    if let Some(rows) = value.as_object().and_then(|o| o.get("readings")) {
        println!("decoded {} readings", rows.as_array().map_or(0, Vec::len));
    }

    // Dotted keys expand into nested objects when asked to.
    let flat = "server.host: localhost\nserver.port: 8080";
    let options = DecodeOptions::new().with_expand_paths(PathExpansion::Safe);
    let nested = decode(flat, &options)?;
    let host = nested
        .as_object()
        .and_then(|o| o.get("server"))
        .and_then(Value::as_object)
        .and_then(|s| s.get("host"))
        .and_then(Value::as_str);
    println!("server.host = {host:?}");
    Ok(())
}
