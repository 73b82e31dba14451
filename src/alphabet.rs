//! The Bitcoin base-58 alphabet.
//!
//! Digits `1`-`9`, upper-case letters without `I` and `O`, lower-case letters
//! without `l`.  Index in [`ALPHABET`] is the symbol's numeric value.

/// Symbol-by-value table.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Radix of the numeral system.
pub const RADIX: u32 = 58;

/// The symbol for value 0.  One leading copy stands for one leading zero byte.
pub const ZERO_SYMBOL: u8 = ALPHABET[0];

const INVALID: u8 = 0xFF;

// Value-by-symbol table.  Only ASCII can ever be a member.
const VALUES: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Symbol for a digit value.  `value` must be below [`RADIX`].
#[inline]
pub fn symbol(value: u8) -> u8 {
    ALPHABET[value as usize]
}

/// Digit value of an encoded byte, or `None` when it is not in the alphabet.
#[inline]
pub fn value_of(byte: u8) -> Option<u8> {
    match VALUES.get(byte as usize) {
        Some(&v) if v != INVALID => Some(v),
        _ => None,
    }
}

/// Alphabet membership for a full `char`.
#[inline]
pub fn contains(c: char) -> bool {
    c.is_ascii() && value_of(c as u8).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_a_bijection() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(value_of(c), Some(i as u8));
            assert_eq!(symbol(i as u8), c);
        }
        let members = (0u8..=255).filter(|&b| value_of(b).is_some()).count();
        assert_eq!(members, 58);
    }

    #[test]
    fn ambiguous_glyphs_are_excluded() {
        for c in ['0', 'O', 'I', 'l', '+', '/', '=', ' '] {
            assert!(!contains(c), "{c:?} must not be in the alphabet");
        }
        assert!(!contains('é'));
        assert_eq!(value_of(0xC3), None);
    }

    #[test]
    fn zero_symbol_is_one() {
        assert_eq!(ZERO_SYMBOL, b'1');
        assert_eq!(value_of(b'z'), Some(57));
    }
}
