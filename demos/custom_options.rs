//! Delimiters, indentation, key folding, and lenient decoding.
//!
//! Run with: `cargo run --example custom_options`

use toon_codec::{
    decode, encode, toon, DecodeOptions, Delimiter, EncodeOptions, KeyFolding,
};

fn main() -> toon_codec::Result<()> {
    let table = toon!([
        { "city": "Berlin", "country": "DE" },
        { "city": "Lyon", "country": "FR" }
    ]);

    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        println!("--- {delimiter:?} ---\n{}\n", encode(&table, &options)?);
    }

    // Key folding compresses single-key chains.
    let nested = toon!({ "service": { "http": { "port": 8080, "keepalive": true } } });
    let folded = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
    println!("--- folded ---\n{}\n", encode(&nested, &folded)?);

    // Lenient decoding accepts a wrong declared count.
    let sloppy = "[4]: a,b,c";
    let options = DecodeOptions::new().with_strict(false);
    println!("lenient decode of {sloppy:?}: {:?}", decode(sloppy, &options)?);
    Ok(())
}
