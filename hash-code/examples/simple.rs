use hash_code::HashCode;

fn main() {
    let int = HashCode::from_int(0x1234_5678);
    let bytes = HashCode::from_bytes(&[0x78, 0x56, 0x34, 0x12]).unwrap();
    assert_eq!(int, bytes);
    assert_eq!(int.to_string(), "78563412");

    let digest = blake3::hash(b"simple");
    let code = HashCode::from_bytes(digest.as_bytes()).unwrap();
    println!("{} bits: {}", code.bits(), code);
    println!("pad_to_long: {:#x}", code.pad_to_long());
}
