//! Human readable renderings of a hash code
use hash_code::{HashCode, Result};

fn byte_list(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(|b| format!("{:#04x}", b)).collect();
    format!("[{}]", items.join(", "))
}

fn numeric<T: std::fmt::Display>(view: Result<T>) -> String {
    match view {
        Ok(value) => value.to_string(),
        Err(err) => format!("n/a ({})", err),
    }
}

/// hex and byte views
pub fn describe(code: &HashCode) -> String {
    format!(
        "bits: {}\nhex: {}\nbytes: {}",
        code.bits(),
        code,
        byte_list(&code.as_bytes())
    )
}

/// every view, including the numeric ones
pub fn inspect(code: &HashCode) -> String {
    format!(
        "{}\nas_int: {}\nas_long: {}\npad_to_long: {}\nsecondary_hash: {}",
        describe(code),
        numeric(code.as_int()),
        numeric(code.as_long()),
        code.pad_to_long(),
        code.secondary_hash()
    )
}

/// Write `code` into a zeroed buffer of `size` bytes.
pub fn write_into(
    code: &HashCode,
    size: usize,
    offset: usize,
    max_length: usize,
) -> Result<String> {
    let mut buffer = vec![0u8; size];
    let written = code.write_bytes_to(&mut buffer, offset, max_length)?;
    Ok(format!("written: {}\nbuffer: {}", written, byte_list(&buffer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_int() {
        let report = inspect(&HashCode::from_int(305_419_896));
        assert_eq!(
            report,
            "bits: 32\n\
             hex: 78563412\n\
             bytes: [0x78, 0x56, 0x34, 0x12]\n\
             as_int: 305419896\n\
             as_long: n/a (illegal state: this hash code only has 32 bits; cannot create a long)\n\
             pad_to_long: 305419896\n\
             secondary_hash: 305419896"
        );
    }

    #[test]
    fn inspect_short_bytes() {
        let report = inspect(&"0102".parse().unwrap());
        assert!(report.contains("bits: 16\n"));
        assert!(report.contains("as_int: n/a"));
        assert!(report.contains("pad_to_long: 513\n"));
        assert!(report.ends_with("secondary_hash: 513"));
    }

    #[test]
    fn write_window() {
        let code = HashCode::from_int(1);
        assert_eq!(
            write_into(&code, 6, 1, 2).unwrap(),
            "written: 2\nbuffer: [0x00, 0x01, 0x00, 0x00, 0x00, 0x00]"
        );
        assert!(write_into(&code, 4, 2, 4).is_err());
    }
}
