//! One-time codes and temporary passwords.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::validation::PasswordPolicy;

/// Number of digits in an emailed verification or reset code.
pub const VERIFICATION_CODE_DIGITS: usize = 6;

/// Length of generated temporary passwords.
pub const TEMPORARY_PASSWORD_LENGTH: usize = 12;

const LOWERCASE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &[u8] = b"23456789";
const SPECIAL: &[u8] = b"!@#$%^&*-+=?";

/// Generates a zero-padded numeric code, e.g. `"042917"`.
pub fn generate_verification_code() -> String {
    let mut rng = rand::rng();
    let value = rng.random_range(0..10u32.pow(VERIFICATION_CODE_DIGITS as u32));
    format!("{value:0width$}", width = VERIFICATION_CODE_DIGITS)
}

/// Generates a password that satisfies [`PasswordPolicy::default`].
///
/// One character is drawn from each required class, the rest from the union
/// of all classes, then the result is shuffled. Visually ambiguous characters
/// (`l`, `I`, `O`, `0`, `1`) are excluded.
pub fn generate_temporary_password() -> String {
    let mut rng = rand::rng();
    let all: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL].concat();

    let mut chars: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL]
        .iter()
        .map(|class| class[rng.random_range(0..class.len())])
        .collect();

    while chars.len() < TEMPORARY_PASSWORD_LENGTH {
        chars.push(all[rng.random_range(0..all.len())]);
    }

    chars.shuffle(&mut rng);

    let password: String = chars.into_iter().map(char::from).collect();
    debug_assert!(PasswordPolicy::default().is_valid(&password));
    password
}
