use std::{fmt, sync::Arc};

use rand::{seq::SliceRandom, thread_rng, Rng};
use simulator::{Candidate, ScoreError};

/// Relative frequencies of A-Z in English text, in percent.
const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Encrypts with a mono-substitution key laid out as the cipher letters for
/// A..Z in order. Case is preserved, everything else passes through.
pub fn encrypt(plaintext: &str, key: &[u8; 26]) -> String {
    plaintext
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                key[(c as u8 - b'A') as usize] as char
            } else if c.is_ascii_lowercase() {
                key[(c as u8 - b'a') as usize].to_ascii_lowercase() as char
            } else {
                c
            }
        })
        .collect()
}

/// One candidate key for a mono-substitution cipher: a permutation of the
/// alphabet tried against a shared ciphertext. Scored by how closely the
/// letter frequencies of the decryption match English.
#[derive(Clone)]
pub struct KeySequence {
    key: [u8; 26],
    ciphertext: Arc<str>,
}

impl KeySequence {
    /// Random initial key over the given ciphertext.
    pub fn random(ciphertext: Arc<str>, rng: &mut impl Rng) -> Self {
        let mut key: [u8; 26] = core::array::from_fn(|index| b'A' + index as u8);
        key.shuffle(rng);
        KeySequence { key, ciphertext }
    }

    pub fn key(&self) -> &[u8; 26] {
        &self.key
    }

    /// Applies the inverse of the key to the ciphertext.
    pub fn decrypt(&self) -> String {
        let mut inverse = [0u8; 26];
        for (plain, &cipher) in self.key.iter().enumerate() {
            inverse[(cipher - b'A') as usize] = b'A' + plain as u8;
        }
        self.ciphertext
            .chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    inverse[(c as u8 - b'A') as usize] as char
                } else if c.is_ascii_lowercase() {
                    inverse[(c as u8 - b'a') as usize].to_ascii_lowercase() as char
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Candidate for KeySequence {
    fn score(&self) -> Result<f64, ScoreError> {
        let decrypted = self.decrypt();
        let mut counts = [0usize; 26];
        let mut total = 0usize;
        for c in decrypted.chars() {
            if c.is_ascii_alphabetic() {
                counts[(c.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
                total += 1;
            }
        }
        if total == 0 {
            return Err("ciphertext contains no letters to score".into());
        }

        // Negated chi-squared distance to English letter frequencies, so
        // higher is better.
        let mut chi_squared = 0.0;
        for (index, &count) in counts.iter().enumerate() {
            let expected = ENGLISH_FREQUENCIES[index] / 100.0 * total as f64;
            let delta = count as f64 - expected;
            chi_squared += delta * delta / expected;
        }
        Ok(-chi_squared)
    }

    fn mutate(&self) -> Self {
        let mut rng = thread_rng();
        let mut key = self.key;
        key.swap(rng.gen_range(0..26), rng.gen_range(0..26));
        KeySequence {
            key,
            ciphertext: Arc::clone(&self.ciphertext),
        }
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snippet: String = self.decrypt().chars().take(40).collect();
        write!(f, "{} {snippet}", String::from_utf8_lossy(&self.key))
    }
}
