//! Property tests for the seed codec.

use proptest::prelude::*;

use warden::core::codec::{self, otp};

proptest! {
    #[test]
    fn prop_seal_open_roundtrip(
        label in "[A-Za-z0-9 ]{1,32}",
        plaintext in proptest::collection::vec(any::<u8>(), 1..256),
    ) {
        let sealed = codec::encrypt(&label, &plaintext).unwrap();
        let opened = codec::decrypt(&label, &sealed).unwrap();
        prop_assert_eq!(&*opened, &plaintext[..]);
    }

    #[test]
    fn prop_any_flipped_byte_is_rejected(
        label in "[A-Za-z0-9]{1,16}",
        plaintext in proptest::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
    ) {
        let mut sealed = codec::encrypt(&label, &plaintext).unwrap();
        let i = position.index(sealed.len());
        sealed[i] ^= 0x01;
        prop_assert!(codec::decrypt(&label, &sealed).is_err());
    }

    #[test]
    fn prop_wrong_label_is_rejected(
        label in "[A-Za-z0-9]{1,16}",
        other in "[A-Za-z0-9]{1,16}",
        plaintext in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        prop_assume!(label != other);
        let sealed = codec::encrypt(&label, &plaintext).unwrap();
        prop_assert!(codec::decrypt(&other, &sealed).is_err());
    }

    #[test]
    fn prop_code_is_deterministic_per_window(
        seed in "[A-Z2-7]{16,32}",
        now in 1i64..4_000_000_000,
        digits in 1u32..=9,
    ) {
        let a = otp::derive(seed.as_bytes(), 0, now, 30, digits).unwrap();
        let b = otp::derive(seed.as_bytes(), 0, now, 30, digits).unwrap();
        prop_assert_eq!(&a.code, &b.code);
        prop_assert_eq!(a.code.len(), digits as usize);
        prop_assert!(a.code.chars().all(|c| c.is_ascii_digit()));

        // the window is one interval wide and covers now (boundary instants
        // report the window that just ended, so skip exact multiples)
        prop_assert_eq!(a.valid_until - a.valid_from, 30);
        if now % 30 != 0 {
            prop_assert!(a.valid_from <= now && now < a.valid_until);
            let again = otp::derive(seed.as_bytes(), 0, a.valid_from.max(1), 30, digits).unwrap();
            prop_assert_eq!(&a.code, &again.code);
        }
    }
}
