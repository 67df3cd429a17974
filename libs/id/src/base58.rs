//! Fixed-alphabet base58 codec.
//!
//! Encodes byte buffers as big-endian unsigned integers in base 58, using
//! the alphabet that excludes the visually ambiguous characters `0`, `O`,
//! `I`, and `l`. The result is URL-safe and human-transcribable.
//!
//! Leading-zero policy: every leading `0x00` input byte maps to exactly one
//! leading `1` (alphabet index 0) output character, and vice versa on
//! decode. Naive big-integer conversion would drop leading zeros, so both
//! directions handle them explicitly.

use crate::error::IdError;

/// The 58-character alphabet, in ascending digit order.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup: ASCII byte to alphabet index, -1 for bytes outside the
/// alphabet.
const DECODE_MAP: [i8; 128] = {
    let mut map = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    map
};

/// Encodes a byte buffer as a base58 string.
///
/// The buffer is interpreted as a big-endian unsigned integer. Leading zero
/// bytes are preserved as leading `1` characters.
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Base-256 to base-58 long division, least-significant digit first.
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);
    for &byte in &input[zeros..] {
        let mut carry = u32::from(byte);
        for digit in &mut digits {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push(ALPHABET[0] as char);
    }
    for &digit in digits.iter().rev() {
        out.push(ALPHABET[digit as usize] as char);
    }
    out
}

/// Decodes a base58 string back into bytes.
///
/// Leading `1` characters are restored as leading zero bytes. Fails with
/// [`IdError::InvalidCharacter`] on any character outside the alphabet.
pub fn decode(input: &str) -> Result<Vec<u8>, IdError> {
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len() * 733 / 1000 + 1);
    for character in input.chars() {
        let code = u32::from(character);
        let index = if code < 128 { DECODE_MAP[code as usize] } else { -1 };
        if index < 0 {
            return Err(IdError::InvalidCharacter { character });
        }

        // Base-58 to base-256 accumulation, least-significant byte first.
        let mut carry = index as u32;
        for byte in &mut bytes {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let zeros = input.bytes().take_while(|&b| b == ALPHABET[0]).count();
    for _ in 0..zeros {
        bytes.push(0);
    }
    bytes.reverse();
    Ok(bytes)
}
