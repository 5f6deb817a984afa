#![no_main]
use anybase::Codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let codec = Codec::base62();

    let encoded = codec.encode(data);
    let decoded = codec.decode(&encoded).unwrap();
    assert_eq!(decoded, data);

    // Decoding arbitrary text must reject, never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = codec.decode(text);
        let _ = codec.decode_text(text);
    }
});
