//! Digest text encodings

/// Render bytes as lowercase hex, two characters per byte, high nibble first
#[must_use]
pub fn to_lower_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Render bytes as standard padded base64
#[must_use]
pub fn to_base64(bytes: &[u8]) -> String {
    use base64::{Engine as _, engine::general_purpose};
    general_purpose::STANDARD.encode(bytes)
}

/// Render bytes as unpadded URL-safe base64
#[must_use]
pub fn to_base64url(bytes: &[u8]) -> String {
    base64_url::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_without_separators() {
        assert_eq!(to_lower_hex(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
        assert_eq!(to_lower_hex(&[]), "");
    }

    #[test]
    fn hex_doubles_length() {
        let bytes: Vec<u8> = (0..=255).collect();
        let hex = to_lower_hex(&bytes);
        assert_eq!(hex.len(), bytes.len() * 2);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(hex::decode(&hex).ok(), Some(bytes));
    }

    #[test]
    fn base64_variants() {
        assert_eq!(to_base64(&[0xfb, 0xff]), "+/8=");
        assert_eq!(to_base64url(&[0xfb, 0xff]), "-_8");
    }
}
