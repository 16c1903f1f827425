//! Percent-encoding of redirect targets for the `Location` header.
//!
//! Characters that are already legal in a URL pass through untouched, as do
//! existing `%XX` escapes. Everything else (controls, spaces, quotes, angle
//! brackets, non-ASCII) is encoded as UTF-8 `%XX` triplets, so any stored
//! target becomes a valid header value.

fn is_allowed(byte: u8) -> bool {
    matches!(
        byte,
        0x21 | 0x23..=0x3B | 0x3D | 0x3F..=0x5F | 0x61..=0x7A | 0x7C | 0x7E
    )
}

fn is_escape_at(bytes: &[u8], i: usize) -> bool {
    bytes.len() > i + 2 && bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit()
}

pub fn encode_location(url: &str) -> String {
    let bytes = url.as_bytes();
    let mut out = String::with_capacity(bytes.len());

    for (i, &byte) in bytes.iter().enumerate() {
        if byte == b'%' {
            if is_escape_at(bytes, i) {
                out.push('%');
            } else {
                out.push_str("%25");
            }
        } else if is_allowed(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_unchanged() {
        let url = "https://example.com/a/b?x=1&y=[2]#frag";
        assert_eq!(encode_location(url), url);
    }

    #[test]
    fn test_control_characters_encoded() {
        assert_eq!(
            encode_location("https://example.com/\nx\ty"),
            "https://example.com/%0Ax%09y"
        );
    }

    #[test]
    fn test_space_and_unicode_encoded() {
        assert_eq!(
            encode_location("https://example.com/a b/é"),
            "https://example.com/a%20b/%C3%A9"
        );
    }

    #[test]
    fn test_existing_escapes_kept() {
        assert_eq!(encode_location("/a%20b"), "/a%20b");
        assert_eq!(encode_location("/100%"), "/100%25");
        assert_eq!(encode_location("/%zz"), "/%25zz");
    }
}
