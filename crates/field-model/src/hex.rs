//! Uppercase hex rendering used by error messages and record display.
//!
//! Thin shim over the `hex` crate fixing the casing and the lenient
//! `Option` decode the golden-image tests want.

/// Render bytes as contiguous uppercase hex, e.g. `[0x05, 0x01]` -> `"0501"`.
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Decode contiguous hex into bytes. Returns `None` on odd length or
/// non-hex characters.
pub fn decode(s: &str) -> Option<Vec<u8>> {
    ::hex::decode(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_uppercase() {
        assert_eq!(encode(&[0x05, 0x01, 0xC0]), "0501C0");
        assert_eq!(encode(&[0xAB, 0xCD, 0xEF]), "ABCDEF");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_decode() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(decode("0501C0").ok_or("decode failed")?, vec![0x05, 0x01, 0xC0]);
        assert_eq!(decode("abcdef").ok_or("decode failed")?, vec![0xAB, 0xCD, 0xEF]);
        assert!(decode("05F").is_none(), "odd length");
        assert!(decode("zz").is_none(), "non-hex");
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let bytes = vec![0x00, 0xFF, 0x7F, 0x80];
        assert_eq!(decode(&encode(&bytes)).ok_or("decode failed")?, bytes);
        Ok(())
    }
}
