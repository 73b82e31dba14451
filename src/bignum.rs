//! Minimal arbitrary-precision unsigned integer for radix conversion.
//!
//! Only the operations base conversion needs: build from big-endian bytes,
//! divide by a small divisor in place, multiply-accumulate a small value in
//! place, and serialise back to minimal big-endian bytes.
//!
//! # Representation
//! Little-endian `u32` limbs (lowest limb first).  The buffer never carries
//! high zero limbs, so zero is the empty buffer.  Every intermediate step is
//! computed in a `u64` scratch word, which cannot overflow for 32-bit limbs
//! and 32-bit operands.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Limbs {
    limbs: Vec<u32>,
}

impl Limbs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a number of roughly `bytes` bytes.
    pub fn with_byte_capacity(bytes: usize) -> Self {
        Self { limbs: Vec::with_capacity(bytes / 4 + 1) }
    }

    /// Interpret `bytes` as a big-endian unsigned integer.
    /// Leading zero bytes contribute no magnitude.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity(bytes.len() / 4 + 1);
        for chunk in bytes.rchunks(4) {
            let limb = chunk.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
            limbs.push(limb);
        }
        let mut n = Self { limbs };
        n.normalize();
        n
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant limbs.
    #[inline]
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// `self /= divisor`, returning the remainder.  `divisor` must be non-zero.
    pub fn div_rem_small(&mut self, divisor: u32) -> u32 {
        debug_assert!(divisor != 0);
        let d = u64::from(divisor);
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let cur = (rem << 32) | u64::from(*limb);
            *limb = (cur / d) as u32;
            rem = cur % d;
        }
        self.normalize();
        rem as u32
    }

    /// `self = self * multiplier + addend`.
    pub fn mul_add_small(&mut self, multiplier: u32, addend: u32) {
        let m = u64::from(multiplier);
        let mut carry = u64::from(addend);
        for limb in self.limbs.iter_mut() {
            let cur = u64::from(*limb) * m + carry;
            *limb = cur as u32;
            carry = cur >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
        self.normalize();
    }

    /// Minimal big-endian serialisation.  Zero serialises to no bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.limbs.len() * 4);
        for limb in self.limbs.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        let skip = out.iter().take_while(|&&b| b == 0).count();
        out.drain(..skip);
        out
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_empty() {
        assert!(Limbs::new().is_zero());
        assert!(Limbs::from_be_bytes(&[0, 0, 0, 0, 0]).is_zero());
        assert!(Limbs::from_be_bytes(&[]).to_be_bytes().is_empty());
    }

    #[test]
    fn bytes_round_trip_minimally() {
        let n = Limbs::from_be_bytes(&[0, 0, 0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(n.limb_count(), 2);
        assert_eq!(n.to_be_bytes(), vec![0x01, 0x02, 0x03, 0x04, 0x05]);
    }

    #[test]
    fn div_rem_matches_native() {
        let value: u64 = 0x0123_4567_89AB_CDEF;
        let mut n = Limbs::from_be_bytes(&value.to_be_bytes());
        let rem = n.div_rem_small(58);
        assert_eq!(u64::from(rem), value % 58);
        let expected = (value / 58).to_be_bytes().to_vec();
        let skip = expected.iter().take_while(|&&b| b == 0).count();
        assert_eq!(n.to_be_bytes(), expected[skip..].to_vec());
    }

    #[test]
    fn mul_add_carries_into_new_limb() {
        let mut n = Limbs::from_be_bytes(&[0xFF, 0xFF, 0xFF, 0xFF]);
        n.mul_add_small(58, 57);
        let expected = 0xFFFF_FFFFu64 * 58 + 57;
        let bytes = expected.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        assert_eq!(n.to_be_bytes(), bytes[skip..].to_vec());
        assert_eq!(n.limb_count(), 2);
    }

    #[test]
    fn mul_add_on_zero_seeds_value() {
        let mut n = Limbs::new();
        n.mul_add_small(58, 0);
        assert!(n.is_zero());
        n.mul_add_small(58, 7);
        assert_eq!(n.to_be_bytes(), vec![7]);
    }

    #[test]
    fn repeated_division_reaches_zero() {
        let mut n = Limbs::from_be_bytes(&[0xFF; 40]);
        let mut steps = 0;
        while !n.is_zero() {
            n.div_rem_small(58);
            steps += 1;
        }
        // 320 bits / log2(58) ~ 54.6
        assert_eq!(steps, 55);
    }
}
