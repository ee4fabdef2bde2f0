use hash_code::{Error, HashCode};

#[test]
fn blake3_digest_keeps_byte_order() {
    let digest = blake3::hash(b"hello world");
    let code = HashCode::from_bytes(digest.as_bytes()).unwrap();

    assert_eq!(code.bits(), 256);
    assert_eq!(code.as_bytes(), digest.as_bytes().to_vec());
    assert_eq!(code.to_hex_string(), digest.to_hex().to_string());

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    assert_eq!(code.as_long(), Ok(i64::from_le_bytes(prefix)));
}

#[test]
fn digest_from_config_string() {
    let expected = blake3::hash(b"config");
    let configured: HashCode = expected.to_hex().to_string().parse().unwrap();
    assert_eq!(configured, HashCode::from_bytes(expected.as_bytes()).unwrap());

    let upper = expected.to_hex().to_uppercase();
    assert!(matches!(
        upper.parse::<HashCode>(),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn truncated_digest_into_buffer() {
    let digest = blake3::hash(b"truncate me");
    let code = HashCode::from_bytes(digest.as_bytes()).unwrap();

    let mut frame = [0u8; 20];
    let written = code.write_bytes_to(&mut frame, 4, 16).unwrap();
    assert_eq!(written, 16);
    assert_eq!(&frame[4..], &digest.as_bytes()[..16]);
    assert_eq!(&frame[..4], &[0, 0, 0, 0]);
}

#[test]
fn shared_across_threads() {
    let code = HashCode::from_bytes(blake3::hash(b"shared").as_bytes()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let code = code.clone();
            std::thread::spawn(move || code.to_hex_string())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), code.to_hex_string());
    }
}
