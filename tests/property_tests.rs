use keybreak::{decrypt, encrypt, PermutationKey};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

// --- STRATEGIES ---

prop_compose! {
    fn arb_key()(seed in any::<u64>()) -> PermutationKey {
        let mut rng = fastrand::Rng::with_seed(seed);
        PermutationKey::shuffled(&mut rng)
    }
}

fn assert_is_permutation(key: &PermutationKey) -> Result<(), TestCaseError> {
    let mut seen = [false; 26];
    for &b in key.letters() {
        prop_assert!(b.is_ascii_uppercase(), "non-letter byte in key: {}", b);
        let slot = (b - b'A') as usize;
        prop_assert!(!seen[slot], "duplicate letter '{}'", b as char);
        seen[slot] = true;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn round_trip_law(key in arb_key(), text in ".*") {
        let dec = decrypt(&key, &encrypt(&key, &text));
        prop_assert_eq!(dec.as_str(), text.as_str());
        let enc = encrypt(&key, &decrypt(&key, &text));
        prop_assert_eq!(enc.as_str(), text.as_str());
    }

    #[test]
    fn format_is_preserved(key in arb_key(), text in ".*") {
        let cipher = encrypt(&key, &text);
        prop_assert_eq!(text.chars().count(), cipher.chars().count());
        for (p, c) in text.chars().zip(cipher.chars()) {
            if p.is_ascii_alphabetic() {
                prop_assert!(c.is_ascii_alphabetic());
                prop_assert_eq!(p.is_ascii_uppercase(), c.is_ascii_uppercase());
            } else {
                prop_assert_eq!(p, c);
            }
        }
    }

    #[test]
    fn shuffles_and_swaps_stay_bijective(seed in any::<u64>(), swaps in 1usize..200) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut key = PermutationKey::shuffled(&mut rng);
        assert_is_permutation(&key)?;
        for _ in 0..swaps {
            key = key.with_random_swap(&mut rng);
            assert_is_permutation(&key)?;
        }
    }
}
