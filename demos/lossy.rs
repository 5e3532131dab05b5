//! Malformed-input handling example
//!
//! This example shows how the same malformed input is handled by a lossy
//! decoder (skip and continue, truncate on a torn tail) and a fatal one
//! (first malformed sequence is an error). Run with `RUST_LOG=trace` to see
//! the decoder narrate each skip.

use textcodec::{DecoderBuilder, TextDecoder};

fn main() -> textcodec::Result<()> {
    env_logger::init();

    // 'A', an invalid lead byte, 'B', a two-byte sequence whose
    // continuation byte is '(' (both bytes are dropped), 'C', and a
    // three-byte sequence cut short by the end of input.
    let malformed: &[u8] = &[0x41, 0xFF, 0x42, 0xC3, 0x28, 0x43, 0xE2, 0x82];

    let lossy = TextDecoder::new("utf-8")?;
    println!("lossy: {:?}", lossy.decode_to_string(malformed)?);

    let fatal = DecoderBuilder::new("utf-8").with_fatal(true).build()?;
    match fatal.decode(malformed) {
        Ok(units) => println!("fatal: decoded {} units", units.len()),
        Err(err) => println!("fatal: {}", err),
    }

    Ok(())
}
