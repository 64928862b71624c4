use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Read an upload payload from a path, or from stdin when the path is `-`.
pub fn read_payload(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).context("read stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("read {path}"))
}

pub fn write_payload<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

/// Decode a hex string, tolerating a `0x` prefix and whitespace.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let s: String = input.split_whitespace().collect();
    let s = s.strip_prefix("0x").unwrap_or(&s);
    hex::decode(s).map_err(|e| anyhow!("invalid hex: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.bin");
        write_payload(&path, b"payload").unwrap();
        assert_eq!(read_payload(path.to_str().unwrap()).unwrap(), b"payload");
    }

    #[test]
    fn hex_prefix_and_spaces() {
        assert_eq!(decode_hex("0x03 01").unwrap(), vec![3, 1]);
        assert!(decode_hex("zz").is_err());
    }
}
