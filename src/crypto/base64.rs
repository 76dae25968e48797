//! `crypt(3)`-style base64 with the legacy little-endian packing order.
//!
//! Each group of up to three input bytes is packed into an integer with the
//! first byte in the low bits, then emitted six bits at a time starting from
//! bit 0. No padding characters are produced.
//!
//! ```text
//! [./0-9]    [A-Z]      [a-z]
//! 0x2e-0x39, 0x41-0x5a, 0x61-0x7a
//! ```

/// The 64-character alphabet, in index order.
pub const ALPHABET: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Returns the alphabet as a string.
pub fn alphabet() -> &'static str {
    // ALPHABET is ASCII
    std::str::from_utf8(ALPHABET).unwrap_or_default()
}

/// Number of characters `encode` produces for `n` input bytes.
pub const fn encoded_len(n: usize) -> usize {
    (8 * n).div_ceil(6)
}

#[inline(always)]
fn encode_6bits(value: u32) -> char {
    ALPHABET[(value & 0x3f) as usize] as char
}

/// Position of `c` within the alphabet, if it belongs to it.
pub fn decode_char(c: u8) -> Option<u8> {
    match c {
        b'.'..=b'9' => Some(c - b'.'),
        b'A'..=b'Z' => Some(c - b'A' + 12),
        b'a'..=b'z' => Some(c - b'a' + 38),
        _ => None,
    }
}

/// Encodes the first `count` bytes of `input`.
///
/// `count` is clamped to at least one byte and at most `input.len()`, so an
/// empty input yields an empty string.
pub fn encode(input: &[u8], count: usize) -> String {
    let count = count.max(1).min(input.len());
    let mut out = String::with_capacity(encoded_len(count));

    for group in input[..count].chunks(3) {
        let mut value = u32::from(group[0]);
        out.push(encode_6bits(value));

        if let Some(&b1) = group.get(1) {
            value |= u32::from(b1) << 8;
        }
        out.push(encode_6bits(value >> 6));
        if group.len() < 2 {
            break;
        }

        if let Some(&b2) = group.get(2) {
            value |= u32::from(b2) << 16;
        }
        out.push(encode_6bits(value >> 12));
        if group.len() < 3 {
            break;
        }

        out.push(encode_6bits(value >> 18));
    }

    out
}

/// Decodes a string produced by [`encode`] back into bytes.
///
/// Returns `None` for characters outside the alphabet, a dangling single
/// character, or trailing bits that `encode` could never have set.
pub fn decode(input: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() * 3 / 4);

    for group in input.as_bytes().chunks(4) {
        if group.len() < 2 {
            return None;
        }

        let mut value = 0u32;
        for (shift, &c) in group.iter().enumerate() {
            value |= u32::from(decode_char(c)?) << (6 * shift);
        }

        let bytes = group.len() - 1;
        if value >> (8 * bytes) != 0 {
            return None;
        }
        out.extend_from_slice(&value.to_le_bytes()[..bytes]);
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_a_bijection() {
        assert_eq!(alphabet().len(), 64);
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(decode_char(c), Some(i as u8));
        }
        assert_eq!(decode_char(b'$'), None);
        assert_eq!(decode_char(b'-'), None);
        assert_eq!(decode_char(b'{'), None);
    }

    #[test]
    fn exponent_characters() {
        assert_eq!(ALPHABET[7], b'5');
        assert_eq!(ALPHABET[14], b'C');
        assert_eq!(ALPHABET[15], b'D');
        assert_eq!(ALPHABET[30], b'S');
    }

    #[test]
    fn encode_uses_low_bits_first() {
        assert_eq!(encode(&[0x00], 1), "..");
        assert_eq!(encode(&[0xff], 1), "z1");
        assert_eq!(encode(&[0x01, 0x02], 2), "/6.");
        assert_eq!(encode(&[0x01, 0x02, 0x03], 3), "/6k.");
        assert_eq!(encode(b"abc", 3), "V7qM");
        assert_eq!(encode(&[0, 1, 2, 3, 4, 5], 6), ".2U.1EE/");
    }

    #[test]
    fn known_salt_bytes() {
        assert_eq!(encode(&[230, 137, 166, 234, 202, 182], 6), "abcdefgh");
        assert_eq!(decode("abcdefgh").unwrap(), vec![230, 137, 166, 234, 202, 182]);
    }

    #[test]
    fn encoded_length_has_no_padding() {
        let input = [0xa5u8; 70];
        for n in 1..=input.len() {
            let out = encode(&input, n);
            assert_eq!(out.len(), encoded_len(n), "n = {n}");
            assert!(out.bytes().all(|c| decode_char(c).is_some()));
        }
        assert_eq!(encoded_len(64), 86);
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(encode(&[0xff, 0x00], 0), encode(&[0xff], 1));
        assert_eq!(encode(&[0x01, 0x02], 10), "/6.");
        assert_eq!(encode(&[], 4), "");
    }

    #[test]
    fn decode_inverts_encode() {
        let input: Vec<u8> = (0u8..=255).collect();
        for n in [1, 2, 3, 4, 5, 64, 255] {
            assert_eq!(decode(&encode(&input, n)).unwrap(), input[..n]);
        }
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode("a").is_none());
        assert!(decode("abcde").is_none());
        assert!(decode("ab$d").is_none());
        // second character carries bits above the single encoded byte
        assert!(decode(".z").is_none());
    }
}
