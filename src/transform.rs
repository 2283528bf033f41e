use crate::consts::{ALPHABET, KEY_LEN};
use crate::key::PermutationKey;

// A 256-slot byte lookup covering both cases; every non-letter byte maps to
// itself. Multi-byte UTF-8 sequences never collide with ASCII, so characters
// outside the alphabet pass through untouched.
fn translation_table(from: &[u8; KEY_LEN], to: &[u8; KEY_LEN]) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    for i in 0..KEY_LEN {
        table[from[i] as usize] = to[i];
        table[from[i].to_ascii_lowercase() as usize] = to[i].to_ascii_lowercase();
    }
    table
}

fn substitute(text: &str, table: &[u8; 256]) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                table[c as usize] as char
            } else {
                c
            }
        })
        .collect()
}

/// Applies `key` in the forward direction: each alphabet letter becomes the
/// key letter at its position, case preserved.
pub fn encrypt(key: &PermutationKey, plaintext: &str) -> String {
    substitute(plaintext, &translation_table(ALPHABET, key.letters()))
}

/// Inverse of [`encrypt`] for the same key.
pub fn decrypt(key: &PermutationKey, ciphertext: &str) -> String {
    substitute(ciphertext, &translation_table(key.letters(), ALPHABET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        let key: PermutationKey = "PQSTUVWXYZCODEBRAKINGFHJLM".parse().unwrap();
        assert_eq!(encrypt(&key, "HELLO"), "XUOOB");
        assert_eq!(decrypt(&key, "XUOOB"), "HELLO");
    }

    #[test]
    fn preserves_case_and_punctuation() {
        let key: PermutationKey = "PQSTUVWXYZCODEBRAKINGFHJLM".parse().unwrap();
        let cipher = encrypt(&key, "Hello, World!");
        assert_eq!(cipher, "Xuoob, Hbkot!");
        assert_eq!(decrypt(&key, &cipher), "Hello, World!");
    }

    #[test]
    fn non_ascii_passes_through() {
        let key: PermutationKey = "PQSTUVWXYZCODEBRAKINGFHJLM".parse().unwrap();
        let text = "héllo — ÿ 123";
        let cipher = encrypt(&key, text);
        assert_eq!(decrypt(&key, &cipher), text);
        assert!(cipher.contains('é'));
        assert!(cipher.contains("123"));
    }

    #[test]
    fn identity_key_is_a_no_op() {
        let key = PermutationKey::identity();
        assert_eq!(encrypt(&key, "Attack at dawn."), "Attack at dawn.");
        assert_eq!(decrypt(&key, "Attack at dawn."), "Attack at dawn.");
    }
}
