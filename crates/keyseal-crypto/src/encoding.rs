//! PEM framing helpers
//!
//! Thin wrappers over the `pem` crate that pin the line ending to `\n`
//! and map framing failures into this crate's error type.

use pem::{EncodeConfig, LineEnding, Pem};

use crate::error::{Error, Result};

fn config() -> EncodeConfig {
    EncodeConfig::new().set_line_ending(LineEnding::LF)
}

/// Wrap raw bytes into a single PEM block with the given label
pub fn to_pem(bytes: &[u8], label: &str) -> String {
    pem::encode_config(&Pem::new(label, bytes), config())
}

/// Concatenate several DER blobs under one label, in order
pub fn to_pem_many<'a, I>(blobs: I, label: &str) -> String
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let blocks: Vec<Pem> = blobs.into_iter().map(|der| Pem::new(label, der)).collect();
    pem::encode_many_config(&blocks, config())
}

/// Parse every PEM block in `input`, returning `(label, contents)` in file order
pub fn from_pem_many(input: &[u8]) -> Result<Vec<(String, Vec<u8>)>> {
    let blocks = pem::parse_many(input)
        .map_err(|e| Error::Decoding(format!("Invalid PEM framing: {e}")))?;

    Ok(blocks
        .into_iter()
        .map(|block| (block.tag().to_string(), block.into_contents()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_uses_lf() {
        let pem = to_pem(&[1, 2, 3], "CERTIFICATE");
        assert!(pem.starts_with("-----BEGIN CERTIFICATE-----\n"));
        assert!(!pem.contains('\r'));
    }

    #[test]
    fn test_many_keeps_order() {
        let first: &[u8] = &[1, 1, 1];
        let second: &[u8] = &[2, 2, 2];
        let pem = to_pem_many([first, second], "CERTIFICATE");

        let parsed = from_pem_many(pem.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], ("CERTIFICATE".to_string(), first.to_vec()));
        assert_eq!(parsed[1], ("CERTIFICATE".to_string(), second.to_vec()));
    }

    #[test]
    fn test_no_blocks() {
        assert!(from_pem_many(b"just some text").unwrap().is_empty());
    }
}
