//! Round-trip transcoding example
//!
//! This example demonstrates encoding strings to UTF-8 bytes, decoding them
//! back, byte order mark handling, and the transport helpers.

use textcodec::utils::{decode_text, encode_text, percent_encode};
use textcodec::{DecoderOptions, TextDecoder, TextEncoder};

fn main() -> textcodec::Result<()> {
    env_logger::init();

    let encoder = TextEncoder::new();
    let decoder = TextDecoder::new("utf-8")?;

    for text in ["plain ASCII", "na\u{ef}ve caf\u{e9}", "\u{20ac}100", "\u{10348} hwair", "\u{1f980} crab"] {
        let bytes = encoder.encode(text);
        let back = decoder.decode_to_string(&bytes)?;
        println!("{:>14} -> {:>2} bytes -> {}", text, bytes.len(), back);
    }

    // A leading byte order mark is stripped unless the decoder is told
    // to keep it.
    let with_bom = [0xEF, 0xBB, 0xBF, 0x68, 0x69];
    println!("BOM stripped: {:?}", decoder.decode_to_string(&with_bom)?);
    let keeping = TextDecoder::with_options(
        "utf-8",
        DecoderOptions {
            ignore_bom: true,
            ..Default::default()
        },
    )?;
    println!("BOM decoded:  {:?}", keeping.decode_to_string(&with_bom)?);

    let text = "\u{20ac} / \u{10348}";
    let packed = encode_text(text);
    println!("base64 transport: {} -> {}", packed, decode_text(&packed)?);
    println!("percent-encoded:  {}", percent_encode(text));

    Ok(())
}
