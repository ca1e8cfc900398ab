use ferrohash::primitives::U256;

#[test]
fn u256_zero_const() {
    assert_eq!(U256::ZERO, U256::from([0u8; 32]));
    assert_eq!(U256::ZERO.to_string(), "0".repeat(64));
}

#[test]
fn u256_byte_roundtrip() {
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }

    let value = U256::from(bytes);

    assert_eq!(value.to_be_bytes(), bytes);
    assert_eq!(value.as_bytes(), &bytes);
    assert_eq!(<[u8; 32]>::from(value), bytes);
}

#[test]
fn u256_word_roundtrip() {
    let words: [u32; 8] = [
        0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f, 0xdeadbeef, 0xcafebabe, 0x01234567,
        0x89abcdef,
    ];

    let value = U256::from(words);

    // Words serialize big-endian, most-significant word first.
    assert_eq!(value.as_bytes()[0], 0x00);
    assert_eq!(value.as_bytes()[1], 0x01);
    assert_eq!(value.as_bytes()[16], 0xde);
    assert_eq!(value.as_bytes()[31], 0xef);

    assert_eq!(<[u32; 8]>::from(value), words);
}

#[test]
fn u256_display_is_lowercase_hex() {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xAB;
    bytes[31] = 0x01;

    let rendered = U256::from(bytes).to_string();

    assert_eq!(rendered.len(), 64);
    assert!(rendered.starts_with("ab"));
    assert!(rendered.ends_with("01"));
    assert_eq!(rendered, rendered.to_lowercase());
}
