use proptest::prelude::*;
use splurge_base58::codec::DEFAULT_MAX_ENCODE_LEN;
use splurge_base58::{decode, encode, is_valid, ALPHABET};

proptest! {
    #[test]
    fn roundtrip(data in prop::collection::vec(any::<u8>(), 1..=DEFAULT_MAX_ENCODE_LEN)) {
        let text = encode(&data).unwrap();
        prop_assert_eq!(decode(&text).unwrap(), data);
    }

    #[test]
    fn output_stays_in_alphabet(data in prop::collection::vec(any::<u8>(), 1..256)) {
        let text = encode(&data).unwrap();
        prop_assert!(text.bytes().all(|b| ALPHABET.contains(&b)));
        prop_assert!(is_valid(&text));
    }

    #[test]
    fn leading_zeros_preserved(zeros in 0usize..16, tail in prop::collection::vec(1u8..=255, 1..32)) {
        let mut data = vec![0u8; zeros];
        data.extend_from_slice(&tail);
        let text = encode(&data).unwrap();
        prop_assert_eq!(text.bytes().take_while(|&b| b == b'1').count(), zeros);
        prop_assert_eq!(decode(&text).unwrap(), data);
    }

    #[test]
    fn is_valid_agrees_with_decode(s in "\\PC{0,64}") {
        prop_assert_eq!(is_valid(&s), decode(&s).is_ok());
    }

    #[test]
    fn canonical_text_reencodes_identically(s in "[1-9A-HJ-NP-Za-km-z]{1,64}") {
        let bytes = decode(&s).unwrap();
        prop_assert_eq!(encode(&bytes).unwrap(), s);
    }
}
