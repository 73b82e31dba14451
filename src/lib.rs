pub mod alphabet;
pub mod bignum;
pub mod codec;

pub use alphabet::{ALPHABET, ZERO_SYMBOL};
pub use codec::{decode, encode, is_valid, Base58, CodecConfig, CodecError, ValidationError};
